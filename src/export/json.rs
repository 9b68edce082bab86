//! JSON interchange: the collections as plain arrays, in the same shape the
//! bundled dataset uses.

use crate::errors::{AppError, AppResult};
use crate::models::booking::Booking;
use crate::models::space::Space;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn to_json<T: Serialize>(items: &[T]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(items)?)
}

pub fn write_json<T: Serialize>(path: &Path, items: &[T]) -> AppResult<()> {
    fs::write(path, to_json(items)?)?;
    Ok(())
}

/// Parse a space array. Ids and trimmed locations must be unique.
pub fn parse_spaces(content: &str) -> AppResult<Vec<Space>> {
    let spaces: Vec<Space> = serde_json::from_str(content)?;
    for (i, s) in spaces.iter().enumerate() {
        if s.seats == 0 {
            return Err(AppError::InvalidSeats(0));
        }
        let location = s.location.trim();
        if location.is_empty() {
            return Err(AppError::EmptyField("location"));
        }

        let earlier = &spaces[..i];
        if earlier.iter().any(|o| o.space_id == s.space_id) {
            return Err(AppError::DuplicateId(s.space_id));
        }
        if earlier.iter().any(|o| o.location.trim() == location) {
            return Err(AppError::DuplicateSpace(location.to_string()));
        }
    }
    Ok(spaces)
}

/// Parse a booking array; ISO-8601 timestamps become instants again.
/// Ids must be unique and no two bookings of a space may overlap.
pub fn parse_bookings(content: &str) -> AppResult<Vec<Booking>> {
    let bookings: Vec<Booking> = serde_json::from_str(content)?;
    for (i, b) in bookings.iter().enumerate() {
        if !b.is_well_formed() {
            return Err(AppError::InvalidBooking(format!(
                "booking {} ends before it starts",
                b.booking_id
            )));
        }

        let earlier = &bookings[..i];
        if earlier.iter().any(|o| o.booking_id == b.booking_id) {
            return Err(AppError::DuplicateId(b.booking_id));
        }
        if let Some(o) = earlier.iter().find(|o| o.conflicts_with(b)) {
            return Err(AppError::SlotUnavailable(format!(
                "bookings {} and {} overlap on space {}",
                o.booking_id, b.booking_id, b.space_id
            )));
        }
    }
    Ok(bookings)
}
