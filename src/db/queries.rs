use crate::errors::{AppError, AppResult};
use crate::models::amenity::Amenities;
use crate::models::booking::Booking;
use crate::models::space::Space;
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub const SPACES_KEY: &str = "spaces";
pub const BOOKINGS_KEY: &str = "bookings";

/// Instants are stored as RFC 3339 UTC strings with second precision.
pub fn instant_to_db(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn instant_from_db(s: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(AppError::InvalidDate(s.to_string())),
            )
        })
}

pub fn map_space(row: &Row) -> Result<Space> {
    Ok(Space {
        space_id: row.get("id")?,
        location: row.get("location")?,
        seats: row.get("seats")?,
        filters: Amenities {
            outlets: row.get("outlets")?,
            accessible: row.get("accessible")?,
            quiet: row.get("quiet")?,
            private: row.get("private")?,
            media: row.get("media")?,
        },
    })
}

pub fn map_booking(row: &Row) -> Result<Booking> {
    let start: String = row.get("start_at")?;
    let end: String = row.get("end_at")?;

    Ok(Booking {
        booking_id: row.get("id")?,
        space_id: row.get("space_id")?,
        user_id: row.get("user_id")?,
        start: instant_from_db(&start)?,
        end: instant_from_db(&end)?,
    })
}

pub fn load_spaces(conn: &Connection) -> AppResult<Vec<Space>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM spaces ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_space)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_bookings(conn: &Connection) -> AppResult<Vec<Booking>> {
    let mut stmt = conn.prepare_cached("SELECT * FROM bookings ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_booking)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Rewrite the whole `spaces` collection and mark its key as written.
pub fn write_spaces(conn: &Connection, spaces: &[Space]) -> AppResult<()> {
    conn.execute("DELETE FROM spaces", [])?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO spaces (id, location, seats, outlets, accessible, quiet, private, media)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for s in spaces {
        stmt.execute(params![
            s.space_id,
            s.location,
            s.seats,
            s.filters.outlets,
            s.filters.accessible,
            s.filters.quiet,
            s.filters.private,
            s.filters.media,
        ])?;
    }

    mark_written(conn, SPACES_KEY)
}

/// Rewrite the whole `bookings` collection and mark its key as written.
pub fn write_bookings(conn: &Connection, bookings: &[Booking]) -> AppResult<()> {
    conn.execute("DELETE FROM bookings", [])?;

    let mut stmt = conn.prepare_cached(
        "INSERT INTO bookings (id, space_id, user_id, start_at, end_at)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for b in bookings {
        stmt.execute(params![
            b.booking_id,
            b.space_id,
            b.user_id,
            instant_to_db(&b.start),
            instant_to_db(&b.end),
        ])?;
    }

    mark_written(conn, BOOKINGS_KEY)
}

/// Whether a collection has ever been written. Unwritten collections are
/// served from the bundled defaults.
pub fn is_written(conn: &Connection, key: &str) -> AppResult<bool> {
    let mut stmt = conn.prepare_cached("SELECT 1 FROM storage_keys WHERE key = ?1")?;
    Ok(stmt.query_row([key], |_| Ok(())).optional()?.is_some())
}

fn mark_written(conn: &Connection, key: &str) -> AppResult<()> {
    conn.execute(
        "INSERT INTO storage_keys (key, written_at) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET written_at = excluded.written_at",
        params![key, instant_to_db(&Utc::now())],
    )?;
    Ok(())
}
