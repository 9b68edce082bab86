use super::{BookingStore, Dataset, SpaceStore, ensure_free, take_booking, take_space};
use crate::db::initialize::init_db;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries::{
    BOOKINGS_KEY, SPACES_KEY, is_written, load_bookings, load_spaces, write_bookings, write_spaces,
};
use crate::errors::AppResult;
use crate::models::booking::{Booking, BookingId};
use crate::models::space::{Space, SpaceId};
use rusqlite::Connection;

/// Audit line written in the same transaction as the change it describes.
struct Audit {
    operation: &'static str,
    target: String,
    message: String,
}

impl Audit {
    fn new(operation: &'static str, target: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            operation,
            target: target.into(),
            message: message.into(),
        }
    }
}

/// SQLite-backed store. Each mutation is a single immediate transaction that
/// reads the collection, applies the change, rewrites the collection and logs.
pub struct SqliteStore {
    pool: DbPool,
    defaults: Dataset,
}

impl SqliteStore {
    /// Open (and migrate) the database at `path`, seeded by the bundled dataset.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::open_with(path, Dataset::bundled()?)
    }

    pub fn open_with(path: &str, defaults: Dataset) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool, defaults })
    }

    pub fn in_memory(defaults: Dataset) -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool, defaults })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    /// Whether the given collection key has been written at least once.
    pub fn is_persisted(&self, key: &str) -> AppResult<bool> {
        is_written(&self.pool.conn, key)
    }

    fn current_spaces(conn: &Connection, defaults: &Dataset) -> AppResult<Vec<Space>> {
        if is_written(conn, SPACES_KEY)? {
            load_spaces(conn)
        } else {
            Ok(defaults.spaces.clone())
        }
    }

    fn current_bookings(conn: &Connection, defaults: &Dataset) -> AppResult<Vec<Booking>> {
        if is_written(conn, BOOKINGS_KEY)? {
            load_bookings(conn)
        } else {
            Ok(defaults.bookings.clone())
        }
    }

    fn mutate_spaces<R, F>(&mut self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Space>) -> AppResult<(R, Audit)>,
    {
        let tx = self.pool.write_tx()?;
        let mut all = Self::current_spaces(&tx, &self.defaults)?;
        let (out, audit) = f(&mut all)?;
        write_spaces(&tx, &all)?;
        write_log(&tx, audit.operation, &audit.target, &audit.message)?;
        tx.commit()?;
        Ok(out)
    }

    fn mutate_bookings<R, F>(&mut self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Booking>) -> AppResult<(R, Audit)>,
    {
        let tx = self.pool.write_tx()?;
        let mut all = Self::current_bookings(&tx, &self.defaults)?;
        let (out, audit) = f(&mut all)?;
        write_bookings(&tx, &all)?;
        write_log(&tx, audit.operation, &audit.target, &audit.message)?;
        tx.commit()?;
        Ok(out)
    }
}

impl SpaceStore for SqliteStore {
    fn list_spaces(&self) -> AppResult<Vec<Space>> {
        Self::current_spaces(&self.pool.conn, &self.defaults)
    }

    fn replace_spaces(&mut self, spaces: Vec<Space>) -> AppResult<()> {
        self.mutate_spaces(|all| {
            let audit = Audit::new(
                "replace_spaces",
                "spaces",
                format!("Replaced {} space(s) with {}", all.len(), spaces.len()),
            );
            *all = spaces;
            Ok(((), audit))
        })
    }

    fn add_space(&mut self, space: Space) -> AppResult<()> {
        self.mutate_spaces(|all| {
            let audit = Audit::new(
                "add_space",
                format!("space {}", space.space_id),
                format!("Added '{}' ({} seats)", space.location, space.seats),
            );
            all.push(space);
            Ok(((), audit))
        })
    }

    fn remove_space(&mut self, id: SpaceId) -> AppResult<Space> {
        self.mutate_spaces(|all| {
            let removed = take_space(all, id)?;
            let audit = Audit::new(
                "del_space",
                format!("space {}", id),
                format!("Deleted '{}'", removed.location),
            );
            Ok((removed, audit))
        })
    }
}

impl BookingStore for SqliteStore {
    fn list_bookings(&self) -> AppResult<Vec<Booking>> {
        Self::current_bookings(&self.pool.conn, &self.defaults)
    }

    fn replace_bookings(&mut self, bookings: Vec<Booking>) -> AppResult<()> {
        self.mutate_bookings(|all| {
            let audit = Audit::new(
                "replace_bookings",
                "bookings",
                format!("Replaced {} booking(s) with {}", all.len(), bookings.len()),
            );
            *all = bookings;
            Ok(((), audit))
        })
    }

    fn remove_booking(&mut self, id: BookingId) -> AppResult<Booking> {
        self.mutate_bookings(|all| {
            let removed = take_booking(all, id)?;
            let audit = Audit::new(
                "cancel",
                format!("booking {}", id),
                format!(
                    "Cancelled booking of space {} for {}",
                    removed.space_id, removed.user_id
                ),
            );
            Ok((removed, audit))
        })
    }

    fn reserve(&mut self, booking: Booking) -> AppResult<()> {
        self.mutate_bookings(|all| {
            ensure_free(all, &booking)?;
            let audit = Audit::new(
                "book",
                format!("booking {}", booking.booking_id),
                format!(
                    "Booked space {} for {} from {} to {}",
                    booking.space_id, booking.user_id, booking.start, booking.end
                ),
            );
            all.push(booking);
            Ok(((), audit))
        })
    }
}
