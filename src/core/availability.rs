//! Availability matrix: which qualifying space is free at which hour of a day.

use crate::errors::{AppError, AppResult};
use crate::models::amenity::Amenities;
use crate::models::booking::Booking;
use crate::models::space::{Space, SpaceId};
use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};

/// Inputs of the generator. Unset fields are allowed and produce no matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityQuery {
    pub day: Option<NaiveDate>,
    pub range_start: Option<u32>,
    pub range_end: Option<u32>,
    pub seats_needed: u32,
    /// `true` flags are "must have".
    pub filters: Amenities,
}

impl AvailabilityQuery {
    pub fn new(day: NaiveDate, range_start: u32, range_end: u32) -> Self {
        Self {
            day: Some(day),
            range_start: Some(range_start),
            range_end: Some(range_end),
            seats_needed: 1,
            filters: Amenities::none(),
        }
    }

    pub fn seats(mut self, seats_needed: u32) -> Self {
        self.seats_needed = seats_needed;
        self
    }

    pub fn filters(mut self, filters: Amenities) -> Self {
        self.filters = filters;
        self
    }

    /// Space gate: every required amenity present and enough seats.
    pub fn qualifies(&self, space: &Space) -> bool {
        self.filters.admits(&space.filters) && space.seats >= self.seats_needed
    }
}

/// One row of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub space_id: SpaceId,
    pub location: String,
    /// One flag per hour column, `true` = available.
    pub slots: Vec<bool>,
}

impl SlotRow {
    /// A row can be booked as a whole only when every hour is free.
    pub fn is_fully_available(&self) -> bool {
        self.slots.iter().all(|s| *s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityMatrix {
    pub day: NaiveDate,
    pub hours: Vec<u32>,
    pub headers: Vec<String>,
    pub rows: Vec<SlotRow>,
}

impl AvailabilityMatrix {
    pub fn row(&self, space_id: SpaceId) -> Option<&SlotRow> {
        self.rows.iter().find(|r| r.space_id == space_id)
    }

    /// Select a row for a whole-range booking.
    pub fn select(&self, space_id: SpaceId) -> AppResult<&SlotRow> {
        let row = self
            .row(space_id)
            .ok_or(AppError::SpaceNotEligible(space_id))?;

        if !row.is_fully_available() {
            let taken: Vec<&str> = self
                .headers
                .iter()
                .zip(&row.slots)
                .filter(|(_, free)| !**free)
                .map(|(h, _)| h.as_str())
                .collect();
            return Err(AppError::SlotUnavailable(format!(
                "'{}' is booked at {}",
                row.location,
                taken.join(", ")
            )));
        }

        Ok(row)
    }

    /// Ids of the rows that can be booked for the whole range.
    pub fn selectable(&self) -> Vec<SpaceId> {
        self.rows
            .iter()
            .filter(|r| r.is_fully_available())
            .map(|r| r.space_id)
            .collect()
    }
}

/// Column label on a 12-hour clock: 0 → "12AM", 9 → "9AM", 12 → "12PM", 13 → "1PM".
pub fn hour_label(hour: u32) -> String {
    let h = if hour % 12 == 0 { 12 } else { hour % 12 };
    let suffix = if hour >= 12 { "PM" } else { "AM" };
    format!("{h}{suffix}")
}

/// Local midnight of `day` plus `hour` hours, as a UTC instant.
///
/// `hour` may be 24 (midnight of the next day). Returns `None` for local
/// times skipped by a DST change.
pub fn hour_instant(day: NaiveDate, hour: u32) -> Option<DateTime<Utc>> {
    let naive = day.and_time(NaiveTime::MIN) + TimeDelta::hours(i64::from(hour));
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|t| t.with_timezone(&Utc))
}

/// Build the matrix, or `None` when the inputs are incomplete or the range is
/// empty or inverted.
pub fn generate(
    query: &AvailabilityQuery,
    spaces: &[Space],
    bookings: &[Booking],
) -> Option<AvailabilityMatrix> {
    let day = query.day?;
    let start = query.range_start?;
    let end = query.range_end?;
    if start >= end || end > 24 {
        return None;
    }

    let hours: Vec<u32> = (start..end).collect();
    let instants: Vec<Option<DateTime<Utc>>> =
        hours.iter().map(|&h| hour_instant(day, h)).collect();

    let mut candidates: Vec<&Space> = spaces.iter().filter(|s| query.qualifies(s)).collect();
    candidates.sort_by_key(|s| s.space_id);

    let rows = candidates
        .into_iter()
        .map(|space| {
            let slots = instants
                .iter()
                .map(|t| match t {
                    Some(t) => !bookings
                        .iter()
                        .any(|b| b.space_id == space.space_id && b.covers(*t)),
                    None => false,
                })
                .collect();

            SlotRow {
                space_id: space.space_id,
                location: space.location.clone(),
                slots,
            }
        })
        .collect();

    Some(AvailabilityMatrix {
        day,
        headers: hours.iter().map(|&h| hour_label(h)).collect(),
        hours,
        rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_twelve_hour_clock() {
        let labels: Vec<String> = [0, 9, 11, 12, 13, 20].into_iter().map(hour_label).collect();
        assert_eq!(labels, ["12AM", "9AM", "11AM", "12PM", "1PM", "8PM"]);
    }

    #[test]
    fn hour_24_is_next_midnight() {
        let d = NaiveDate::from_ymd_opt(2031, 1, 10).unwrap();
        let next = d.succ_opt().unwrap();
        assert_eq!(hour_instant(d, 24), hour_instant(next, 0));
    }
}
