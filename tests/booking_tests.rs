use chrono::{Duration, Utc};
use studybook::core::availability::AvailabilityQuery;
use studybook::core::booking::{BookingLogic, BookingRequest, HourBounds, SPACE_DELETED};
use studybook::core::space::{NewSpace, SpaceLogic};
use studybook::errors::AppError;
use studybook::models::amenity::{Amenities, Amenity};
use studybook::models::user::{Role, User};
use studybook::store::{BookingStore, Dataset, MemoryStore, SpaceStore};

mod common;
use common::{at, booking, future_day, space};

fn user(email: &str, role: Role) -> User {
    User {
        user_id: email.to_string(),
        role,
        first_name: "Test".into(),
        last_name: "User".into(),
    }
}

fn student() -> User {
    user("jdoe@uni.example.ca", Role::Student)
}

fn admin() -> User {
    user("librarian@library.example.ca", Role::Admin)
}

fn store() -> MemoryStore {
    MemoryStore::from_dataset(Dataset {
        spaces: vec![
            space(1, "Room 201", 4, Amenities::none().with(Amenity::Outlets)),
            space(2, "Carrel 12", 1, Amenities::none().with(Amenity::Quiet)),
        ],
        bookings: vec![booking(100, 1, "akim@uni.example.ca", future_day(), 10, 12)],
    })
}

fn request(space_id: i64, from: u32, to: u32) -> BookingRequest {
    BookingRequest {
        space_id,
        user_id: None,
        query: AvailabilityQuery::new(future_day(), from, to),
    }
}

#[test]
fn confirm_books_the_whole_range() {
    let mut store = store();
    let b = BookingLogic::confirm(&mut store, &student(), &request(2, 9, 12), Utc::now()).unwrap();

    assert_eq!(b.space_id, 2);
    assert_eq!(b.user_id, "jdoe@uni.example.ca");
    assert_eq!(b.start, at(future_day(), 9));
    assert_eq!(b.end, at(future_day(), 12));
    assert_eq!(store.list_bookings().unwrap().len(), 2);
}

#[test]
fn confirm_rejects_partially_taken_rows() {
    let mut store = store();
    let err =
        BookingLogic::confirm(&mut store, &student(), &request(1, 9, 11), Utc::now()).unwrap_err();

    assert!(matches!(err, AppError::SlotUnavailable(_)));
    assert_eq!(store.list_bookings().unwrap().len(), 1);
}

#[test]
fn confirm_rejects_spaces_outside_the_filters() {
    let mut store = store();
    let mut req = request(2, 13, 14);
    req.query = req.query.seats(2);

    assert!(matches!(
        BookingLogic::confirm(&mut store, &student(), &req, Utc::now()),
        Err(AppError::SpaceNotEligible(2))
    ));
}

#[test]
fn confirm_needs_a_complete_query() {
    let mut store = store();
    let mut req = request(2, 13, 14);
    req.query.range_end = None;

    assert!(matches!(
        BookingLogic::confirm(&mut store, &student(), &req, Utc::now()),
        Err(AppError::NoAvailability)
    ));
}

#[test]
fn past_days_cannot_be_booked() {
    let mut store = store();
    let yesterday = (Utc::now() - Duration::days(2)).date_naive();
    let req = BookingRequest {
        space_id: 2,
        user_id: None,
        query: AvailabilityQuery::new(yesterday, 9, 10),
    };

    assert!(matches!(
        BookingLogic::confirm(&mut store, &student(), &req, Utc::now()),
        Err(AppError::InvalidDate(_))
    ));
}

#[test]
fn hours_already_passed_today_cannot_be_booked() {
    let mut store = store();
    let now = at(future_day(), 11);

    let err = BookingLogic::confirm(&mut store, &student(), &request(2, 9, 10), now).unwrap_err();
    assert!(matches!(err, AppError::InvalidHour(_)));
    assert_eq!(store.list_bookings().unwrap().len(), 1);

    // a range starting now is still upcoming, and can be cancelled again
    let b = BookingLogic::confirm(&mut store, &student(), &request(2, 11, 12), now).unwrap();
    BookingLogic::cancel(&mut store, &student(), b.booking_id, now).unwrap();
}

#[test]
fn students_book_for_themselves_admins_for_anyone() {
    let mut store = store();

    let mut req = request(2, 15, 16);
    req.user_id = Some("akim@uni.example.ca".into());
    assert!(matches!(
        BookingLogic::confirm(&mut store, &student(), &req, Utc::now()),
        Err(AppError::PermissionDenied(_))
    ));

    let b = BookingLogic::confirm(&mut store, &admin(), &req, Utc::now()).unwrap();
    assert_eq!(b.user_id, "akim@uni.example.ca");

    let mut bad = request(2, 17, 18);
    bad.user_id = Some("not-an-email".into());
    assert!(matches!(
        BookingLogic::confirm(&mut store, &admin(), &bad, Utc::now()),
        Err(AppError::InvalidEmail(_))
    ));

    assert!(matches!(
        BookingLogic::confirm(&mut store, &admin(), &request(2, 17, 18), Utc::now()),
        Err(AppError::EmptyField(_))
    ));
}

#[test]
fn cancel_checks_ownership_and_time() {
    let mut store = store();
    let now = Utc::now();

    // booking 100 belongs to akim
    assert!(matches!(
        BookingLogic::cancel(&mut store, &student(), 100, now),
        Err(AppError::PermissionDenied(_))
    ));
    assert!(matches!(
        BookingLogic::cancel(&mut store, &student(), 999, now),
        Err(AppError::BookingNotFound(999))
    ));

    let akim = user("akim@uni.example.ca", Role::Student);
    let later = at(future_day(), 11);
    assert!(matches!(
        BookingLogic::cancel(&mut store, &akim, 100, later),
        Err(AppError::PastBooking(100))
    ));

    let removed = BookingLogic::cancel(&mut store, &akim, 100, now).unwrap();
    assert_eq!(removed.booking_id, 100);
    assert!(store.list_bookings().unwrap().is_empty());
}

#[test]
fn admins_can_cancel_any_booking() {
    let mut store = store();
    BookingLogic::cancel(&mut store, &admin(), 100, Utc::now()).unwrap();
    assert!(store.list_bookings().unwrap().is_empty());
}

#[test]
fn rows_depend_on_role_and_time() {
    let day = future_day();
    let bookings = vec![
        booking(1, 1, "jdoe@uni.example.ca", day, 9, 10),
        booking(2, 2, "akim@uni.example.ca", day, 9, 10),
        booking(3, 42, "jdoe@uni.example.ca", day, 14, 15),
    ];
    let spaces = store().list_spaces().unwrap();
    let now = Utc::now();

    let mine = BookingLogic::rows(&student(), &bookings, &spaces, now, false);
    assert_eq!(mine.len(), 2);
    assert!(mine.iter().all(|r| r.user.is_none()));
    assert_eq!(mine[1].location, SPACE_DELETED);

    let all = BookingLogic::rows(&admin(), &bookings, &spaces, now, false);
    assert_eq!(all.len(), 3);
    assert_eq!(all[1].user.as_deref(), Some("akim@uni.example.ca"));

    // once the day is over nothing is upcoming
    let after = at(day, 23);
    assert!(BookingLogic::rows(&admin(), &bookings, &spaces, after, false).is_empty());
    assert_eq!(
        BookingLogic::rows(&admin(), &bookings, &spaces, after, true).len(),
        3
    );

    assert_eq!(BookingLogic::headers(Role::Student).len(), 3);
    assert_eq!(BookingLogic::headers(Role::Admin).len(), 4);
}

#[test]
fn hour_bounds_clamp_the_query() {
    let bounds = HourBounds::default();
    let q = bounds.apply(AvailabilityQuery::new(future_day(), 6, 23));
    assert_eq!(q.range_start, Some(9));
    assert_eq!(q.range_end, Some(21));

    let q = bounds.apply(AvailabilityQuery::new(future_day(), 22, 5));
    assert_eq!(q.range_start, Some(20));
    assert_eq!(q.range_end, Some(10));

    assert!(HourBounds::new(12, 12).is_err());
    assert!(HourBounds::new(8, 25).is_err());
}

#[test]
fn adding_a_space_validates_the_form() {
    let mut store = store();
    let now = Utc::now();
    let form = |location: &str, seats: i64| NewSpace {
        location: location.to_string(),
        seats,
        filters: Amenities::none().with(Amenity::Private),
    };

    let created = SpaceLogic::add(&mut store, form("  Group Room B ", 6), now).unwrap();
    assert_eq!(created.location, "Group Room B");
    assert_eq!(created.seats, 6);
    assert!(created.filters.private);
    assert_eq!(created.space_id, now.timestamp_millis());

    assert!(matches!(
        SpaceLogic::add(&mut store, form("Group Room B", 2), now),
        Err(AppError::DuplicateSpace(_))
    ));
    assert!(matches!(
        SpaceLogic::add(&mut store, form("   ", 2), now),
        Err(AppError::EmptyField(_))
    ));
    assert!(matches!(
        SpaceLogic::add(&mut store, form("Room 0", 0), now),
        Err(AppError::InvalidSeats(0))
    ));
    assert!(matches!(
        SpaceLogic::add(&mut store, form("Room -3", -3), now),
        Err(AppError::InvalidSeats(-3))
    ));

    // same millisecond, still a fresh id
    let second = SpaceLogic::add(&mut store, form("Room 9", 1), now).unwrap();
    assert_ne!(second.space_id, created.space_id);
    assert_eq!(store.list_spaces().unwrap().len(), 4);
}

#[test]
fn space_rows_list_amenities_as_yes_no() {
    let rows = SpaceLogic::rows(&store().list_spaces().unwrap());
    assert_eq!(rows[0].location, "Room 201");
    assert_eq!(rows[0].amenities, ["Yes", "No", "No", "No", "No"]);
    assert_eq!(SpaceLogic::headers().len(), 2 + Amenity::ALL.len());
}
