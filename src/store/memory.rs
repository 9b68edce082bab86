use super::{BookingStore, Dataset, SpaceStore};
use crate::errors::AppResult;
use crate::models::booking::Booking;
use crate::models::space::Space;

/// In-process store, used by tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    spaces: Vec<Space>,
    bookings: Vec<Booking>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_dataset(dataset: Dataset) -> Self {
        Self {
            spaces: dataset.spaces,
            bookings: dataset.bookings,
        }
    }

    pub fn with(spaces: Vec<Space>, bookings: Vec<Booking>) -> Self {
        Self { spaces, bookings }
    }
}

impl SpaceStore for MemoryStore {
    fn list_spaces(&self) -> AppResult<Vec<Space>> {
        Ok(self.spaces.clone())
    }

    fn replace_spaces(&mut self, spaces: Vec<Space>) -> AppResult<()> {
        self.spaces = spaces;
        Ok(())
    }
}

impl BookingStore for MemoryStore {
    fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        Ok(self.bookings.clone())
    }

    fn replace_bookings(&mut self, bookings: Vec<Booking>) -> AppResult<()> {
        self.bookings = bookings;
        Ok(())
    }
}
