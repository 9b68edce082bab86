//! Repositories for spaces and bookings.
//!
//! Both collections follow a wholesale model: a mutation reads the full
//! collection, changes it and writes it back. Implementations only have to
//! provide `list_*` and `replace_*`; the provided methods build add/remove on
//! top of them. Backends with transactions override the provided methods so
//! each read-modify-write is atomic.

pub mod memory;
pub mod seed;
pub mod sqlite;

pub use memory::MemoryStore;
pub use seed::Dataset;
pub use sqlite::SqliteStore;

use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, BookingId};
use crate::models::space::{Space, SpaceId};

pub trait SpaceStore {
    fn list_spaces(&self) -> AppResult<Vec<Space>>;

    fn replace_spaces(&mut self, spaces: Vec<Space>) -> AppResult<()>;

    fn add_space(&mut self, space: Space) -> AppResult<()> {
        let mut all = self.list_spaces()?;
        all.push(space);
        self.replace_spaces(all)
    }

    /// Remove a space, returning it. Bookings of the space are left as they are.
    fn remove_space(&mut self, id: SpaceId) -> AppResult<Space> {
        let mut all = self.list_spaces()?;
        let removed = take_space(&mut all, id)?;
        self.replace_spaces(all)?;
        Ok(removed)
    }
}

pub trait BookingStore {
    fn list_bookings(&self) -> AppResult<Vec<Booking>>;

    fn replace_bookings(&mut self, bookings: Vec<Booking>) -> AppResult<()>;

    fn remove_booking(&mut self, id: BookingId) -> AppResult<Booking> {
        let mut all = self.list_bookings()?;
        let removed = take_booking(&mut all, id)?;
        self.replace_bookings(all)?;
        Ok(removed)
    }

    /// Insert a booking only if it overlaps no existing booking of the same
    /// space, checked against the current contents of the store.
    fn reserve(&mut self, booking: Booking) -> AppResult<()> {
        let mut all = self.list_bookings()?;
        ensure_free(&all, &booking)?;
        all.push(booking);
        self.replace_bookings(all)
    }
}

/// Fails with `SlotUnavailable` when `candidate` overlaps an existing booking.
pub fn ensure_free(existing: &[Booking], candidate: &Booking) -> AppResult<()> {
    if !candidate.is_well_formed() {
        return Err(AppError::InvalidBooking(
            "end must be after start".to_string(),
        ));
    }
    if let Some(other) = existing.iter().find(|b| b.conflicts_with(candidate)) {
        return Err(AppError::SlotUnavailable(format!(
            "space {} is already booked from {} to {}",
            other.space_id, other.start, other.end
        )));
    }
    Ok(())
}

pub(crate) fn take_space(all: &mut Vec<Space>, id: SpaceId) -> AppResult<Space> {
    let idx = all
        .iter()
        .position(|s| s.space_id == id)
        .ok_or(AppError::SpaceNotFound(id))?;
    Ok(all.remove(idx))
}

pub(crate) fn take_booking(all: &mut Vec<Booking>, id: BookingId) -> AppResult<Booking> {
    let idx = all
        .iter()
        .position(|b| b.booking_id == id)
        .ok_or(AppError::BookingNotFound(id))?;
    Ok(all.remove(idx))
}
