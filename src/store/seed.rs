//! Default dataset bundled into the binary. It backs a collection until the
//! first mutation writes that collection.

use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::space::Space;

const DEFAULT_SPACES: &str = include_str!("../../res/spaces.json");
const DEFAULT_BOOKINGS: &str = include_str!("../../res/bookings.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    pub spaces: Vec<Space>,
    pub bookings: Vec<Booking>,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bundled() -> AppResult<Self> {
        Ok(Self {
            spaces: serde_json::from_str(DEFAULT_SPACES)?,
            bookings: serde_json::from_str(DEFAULT_BOOKINGS)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dataset_parses() {
        let d = Dataset::bundled().unwrap();
        assert!(!d.spaces.is_empty());
        assert!(d.bookings.iter().all(|b| b.end > b.start));
    }
}
