use crate::core::validation::{validate_location, validate_seats};
use crate::errors::AppResult;
use crate::models::amenity::{Amenities, Amenity};
use crate::models::space::{Space, SpaceId};
use crate::store::SpaceStore;
use chrono::{DateTime, Utc};

/// Raw input of the "add space" form.
#[derive(Debug, Clone)]
pub struct NewSpace {
    pub location: String,
    pub seats: i64,
    pub filters: Amenities,
}

/// Printable row of the spaces view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpaceRow {
    pub id: SpaceId,
    pub location: String,
    pub seats: u32,
    /// "Yes"/"No" per amenity, in `Amenity::ALL` order.
    pub amenities: Vec<&'static str>,
}

pub fn yes_no(b: bool) -> &'static str {
    if b { "Yes" } else { "No" }
}

pub struct SpaceLogic;

impl SpaceLogic {
    pub fn headers() -> Vec<&'static str> {
        let mut h = vec!["Location", "Seats"];
        h.extend(Amenity::ALL.iter().map(|a| a.label()));
        h
    }

    pub fn rows(spaces: &[Space]) -> Vec<SpaceRow> {
        spaces
            .iter()
            .map(|s| SpaceRow {
                id: s.space_id,
                location: s.location.clone(),
                seats: s.seats,
                amenities: Amenity::ALL
                    .iter()
                    .map(|a| yes_no(s.filters.has(*a)))
                    .collect(),
            })
            .collect()
    }

    /// Validate the form and store the new space. The id is the creation
    /// timestamp in milliseconds, bumped past any id already taken.
    pub fn add<S: SpaceStore + ?Sized>(
        store: &mut S,
        input: NewSpace,
        now: DateTime<Utc>,
    ) -> AppResult<Space> {
        let existing = store.list_spaces()?;
        let names: Vec<&str> = existing.iter().map(|s| s.location.as_str()).collect();

        let location = validate_location(&input.location, &names)?;
        let seats = validate_seats(input.seats)?;

        let mut id = now.timestamp_millis();
        while existing.iter().any(|s| s.space_id == id) {
            id += 1;
        }

        let space = Space::new(id, location, seats, input.filters);
        store.add_space(space.clone())?;
        Ok(space)
    }

    /// Delete a space. Its bookings stay and show up as "Space deleted".
    pub fn remove<S: SpaceStore + ?Sized>(store: &mut S, id: SpaceId) -> AppResult<Space> {
        store.remove_space(id)
    }
}
