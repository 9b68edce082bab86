use studybook::core::auth::CredentialStore;
use studybook::core::session::{Session, View};
use studybook::errors::AppError;
use studybook::models::user::Role;

fn credentials() -> CredentialStore {
    CredentialStore::bundled().unwrap()
}

#[test]
fn login_requires_a_selected_role() {
    let mut session = Session::new();
    assert!(matches!(
        session.login(&credentials(), "jdoe@uni.example.ca", "study123"),
        Err(AppError::NotAuthenticated(_))
    ));
    assert_eq!(session, Session::Unauthenticated);
}

#[test]
fn student_logs_in_to_the_bookings_view() {
    let mut session = Session::new();
    session.select_role(Role::Student).unwrap();

    let user = session
        .login(&credentials(), "jdoe@uni.example.ca", "study123")
        .unwrap()
        .clone();

    assert_eq!(user.user_id, "jdoe@uni.example.ca");
    assert_eq!(user.role, Role::Student);
    assert_eq!(session.view(), Some(View::Bookings));
}

#[test]
fn failed_login_keeps_the_selected_role() {
    let mut session = Session::new();
    session.select_role(Role::Admin).unwrap();

    let err = session
        .login(&credentials(), "librarian@library.example.ca", "wrong")
        .unwrap_err();
    assert_eq!(err.to_string(), "Login failed! Invalid email or password.");
    assert_eq!(session, Session::RoleSelected(Role::Admin));

    // a student account does not log in as administrator
    assert!(
        session
            .login(&credentials(), "jdoe@uni.example.ca", "study123")
            .is_err()
    );

    // the role can still be changed before logging in
    session.select_role(Role::Student).unwrap();
    assert!(
        session
            .login(&credentials(), "jdoe@uni.example.ca", "study123")
            .is_ok()
    );
}

#[test]
fn spaces_view_is_for_administrators_only() {
    let mut student = Session::new();
    student.select_role(Role::Student).unwrap();
    student
        .login(&credentials(), "akim@uni.example.ca", "quietplease")
        .unwrap();

    assert!(matches!(
        student.show(View::Spaces),
        Err(AppError::PermissionDenied(_))
    ));
    assert_eq!(student.view(), Some(View::Bookings));
    assert!(student.require_admin().is_err());

    let mut admin = Session::new();
    admin.select_role(Role::Admin).unwrap();
    admin
        .login(&credentials(), "librarian@library.example.ca", "shelves2024")
        .unwrap();

    admin.show(View::Spaces).unwrap();
    assert_eq!(admin.view(), Some(View::Spaces));
    admin.show(View::Bookings).unwrap();
    assert_eq!(admin.view(), Some(View::Bookings));
    assert!(admin.require_admin().is_ok());
}

#[test]
fn view_labels_depend_on_the_role() {
    assert_eq!(View::Bookings.label(Role::Student), Some("View my bookings"));
    assert_eq!(View::Bookings.label(Role::Admin), Some("View all bookings"));
    assert_eq!(View::Spaces.label(Role::Admin), Some("View all spaces"));
    assert_eq!(View::Spaces.label(Role::Student), None);
}

#[test]
fn logout_returns_to_the_start() {
    let mut session = Session::new();
    session.select_role(Role::Student).unwrap();
    session
        .login(&credentials(), "sbrooks@uni.example.ca", "finals-week")
        .unwrap();

    // no role switch while logged in
    assert!(matches!(
        session.select_role(Role::Admin),
        Err(AppError::InvalidTransition(_))
    ));

    session.logout();
    assert_eq!(session, Session::Unauthenticated);
    assert!(session.user().is_err());
    assert!(session.show(View::Bookings).is_err());
}
