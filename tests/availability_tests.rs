use studybook::core::availability::{AvailabilityQuery, generate};
use studybook::models::amenity::{Amenities, Amenity};

mod common;
use common::{booking, future_day, space};

#[test]
fn booked_hours_are_marked_unavailable() {
    let day = future_day();
    let spaces = vec![space(1, "A", 4, Amenities::none())];
    let bookings = vec![booking(10, 1, "jdoe@uni.example.ca", day, 10, 12)];

    let matrix = generate(&AvailabilityQuery::new(day, 9, 13), &spaces, &bookings).unwrap();

    assert_eq!(matrix.headers, ["9AM", "10AM", "11AM", "12PM"]);
    assert_eq!(matrix.rows.len(), 1);
    assert_eq!(matrix.rows[0].location, "A");
    assert_eq!(matrix.rows[0].slots, [true, false, false, true]);
    assert!(matrix.selectable().is_empty());
}

#[test]
fn space_without_bookings_is_free_all_day() {
    let day = future_day();
    let spaces = vec![space(1, "A", 1, Amenities::none())];

    let matrix = generate(&AvailabilityQuery::new(day, 0, 24), &spaces, &[]).unwrap();
    assert_eq!(matrix.hours.len(), 24);
    assert!(matrix.rows[0].is_fully_available());
    assert_eq!(matrix.selectable(), [1]);
}

#[test]
fn bookings_on_other_spaces_do_not_matter() {
    let day = future_day();
    let spaces = vec![
        space(1, "A", 4, Amenities::none()),
        space(2, "B", 4, Amenities::none()),
    ];
    let bookings = vec![booking(10, 2, "akim@uni.example.ca", day, 9, 21)];

    let matrix = generate(&AvailabilityQuery::new(day, 9, 21), &spaces, &bookings).unwrap();
    assert!(matrix.row(1).unwrap().is_fully_available());
    assert!(matrix.row(2).unwrap().slots.iter().all(|s| !s));
}

#[test]
fn bookings_on_other_days_do_not_matter() {
    let day = future_day();
    let next = day.succ_opt().unwrap();
    let spaces = vec![space(1, "A", 4, Amenities::none())];
    let bookings = vec![booking(10, 1, "jdoe@uni.example.ca", next, 9, 12)];

    let matrix = generate(&AvailabilityQuery::new(day, 9, 12), &spaces, &bookings).unwrap();
    assert!(matrix.rows[0].is_fully_available());
}

#[test]
fn incomplete_or_inverted_range_yields_no_matrix() {
    let day = future_day();
    let spaces = vec![space(1, "A", 4, Amenities::none())];

    assert!(generate(&AvailabilityQuery::new(day, 12, 12), &spaces, &[]).is_none());
    assert!(generate(&AvailabilityQuery::new(day, 14, 10), &spaces, &[]).is_none());

    let mut missing_end = AvailabilityQuery::new(day, 9, 12);
    missing_end.range_end = None;
    assert!(generate(&missing_end, &spaces, &[]).is_none());

    let mut missing_day = AvailabilityQuery::new(day, 9, 12);
    missing_day.day = None;
    assert!(generate(&missing_day, &spaces, &[]).is_none());
}

#[test]
fn seats_and_amenities_gate_the_rows() {
    let day = future_day();
    let quiet = Amenities::none().with(Amenity::Quiet);
    let spaces = vec![
        space(1, "Big", 8, Amenities::none().with(Amenity::Media)),
        space(2, "Carrel", 1, quiet),
        space(3, "Silent", 2, quiet.with(Amenity::Accessible)),
    ];

    let base = AvailabilityQuery::new(day, 9, 10);
    let ids = |q: &AvailabilityQuery| -> Vec<i64> {
        generate(q, &spaces, &[])
            .unwrap()
            .rows
            .iter()
            .map(|r| r.space_id)
            .collect()
    };

    assert_eq!(ids(&base), [1, 2, 3]);
    assert_eq!(ids(&base.clone().seats(2)), [1, 3]);
    assert_eq!(ids(&base.clone().filters(quiet)), [2, 3]);
    assert_eq!(
        ids(&base.clone().filters(quiet.with(Amenity::Accessible))),
        [3]
    );
    assert!(ids(&base.clone().seats(9)).is_empty());
}

#[test]
fn adding_a_requirement_never_adds_rows() {
    let day = future_day();
    let spaces: Vec<_> = studybook::store::Dataset::bundled().unwrap().spaces;
    let base = AvailabilityQuery::new(day, 9, 12);

    let mut required = Amenities::none();
    let mut previous = generate(&base, &spaces, &[]).unwrap().rows.len();

    for amenity in Amenity::ALL {
        required = required.with(amenity);
        let rows = generate(&base.clone().filters(required), &spaces, &[])
            .unwrap()
            .rows
            .len();
        assert!(rows <= previous);
        previous = rows;
    }
}

#[test]
fn rows_are_ordered_by_space_id() {
    let day = future_day();
    let spaces = vec![
        space(7, "G", 2, Amenities::none()),
        space(3, "C", 2, Amenities::none()),
        space(5, "E", 2, Amenities::none()),
    ];

    let matrix = generate(&AvailabilityQuery::new(day, 9, 10), &spaces, &[]).unwrap();
    let ids: Vec<i64> = matrix.rows.iter().map(|r| r.space_id).collect();
    assert_eq!(ids, [3, 5, 7]);
}

#[test]
fn selecting_a_row_checks_eligibility_and_whole_range() {
    let day = future_day();
    let spaces = vec![
        space(1, "A", 4, Amenities::none()),
        space(2, "B", 1, Amenities::none()),
    ];
    let bookings = vec![booking(10, 1, "jdoe@uni.example.ca", day, 11, 12)];

    let matrix = generate(
        &AvailabilityQuery::new(day, 9, 13).seats(2),
        &spaces,
        &bookings,
    )
    .unwrap();

    assert!(matches!(
        matrix.select(2),
        Err(studybook::errors::AppError::SpaceNotEligible(2))
    ));
    assert!(matches!(
        matrix.select(1),
        Err(studybook::errors::AppError::SlotUnavailable(_))
    ));
}
