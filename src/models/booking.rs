use super::space::SpaceId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type BookingId = i64;

/// A reservation of one space by one user over `[start, end)`.
///
/// Instants are serialized as ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub booking_id: BookingId, // creation timestamp (ms)
    pub space_id: SpaceId,     // may dangle once the space is deleted
    pub user_id: String,       // user email
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Booking {
    /// True when `instant` falls inside `[start, end)`.
    pub fn covers(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Same space and intersecting half-open intervals.
    pub fn conflicts_with(&self, other: &Booking) -> bool {
        self.space_id == other.space_id && self.start < other.end && other.start < self.end
    }

    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start >= now
    }

    pub fn is_well_formed(&self) -> bool {
        self.end > self.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2030, 5, 6, h, 0, 0).unwrap()
    }

    fn booking(space_id: SpaceId, from: u32, to: u32) -> Booking {
        Booking {
            booking_id: 1,
            space_id,
            user_id: "a@b.ca".into(),
            start: at(from),
            end: at(to),
        }
    }

    #[test]
    fn covers_is_half_open() {
        let b = booking(1, 10, 12);
        assert!(!b.covers(at(9)));
        assert!(b.covers(at(10)));
        assert!(b.covers(at(11)));
        assert!(!b.covers(at(12)));
    }

    #[test]
    fn adjacent_bookings_do_not_conflict() {
        assert!(!booking(1, 10, 12).conflicts_with(&booking(1, 12, 14)));
        assert!(booking(1, 10, 12).conflicts_with(&booking(1, 11, 13)));
        assert!(!booking(1, 10, 12).conflicts_with(&booking(2, 10, 12)));
    }
}
