use crate::core::availability::{
    AvailabilityMatrix, AvailabilityQuery, generate, hour_instant, hour_label,
};
use crate::core::validation::validate_email;
use crate::errors::{AppError, AppResult};
use crate::models::booking::{Booking, BookingId};
use crate::models::space::{Space, SpaceId};
use crate::models::user::{Role, User};
use crate::store::{BookingStore, SpaceStore};
use crate::utils::formatting::format_instant;
use chrono::{DateTime, Local, Utc};

pub const SPACE_DELETED: &str = "Space deleted";

/// Opening hours of the library. Start hours are clamped to
/// `[opening, closing - 1]` and end hours to `[opening + 1, closing]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HourBounds {
    pub opening: u32,
    pub closing: u32,
}

impl Default for HourBounds {
    fn default() -> Self {
        Self {
            opening: 9,
            closing: 21,
        }
    }
}

impl HourBounds {
    pub fn new(opening: u32, closing: u32) -> AppResult<Self> {
        if opening >= closing || closing > 24 {
            return Err(AppError::Config(format!(
                "opening hour {opening} must be before closing hour {closing} (max 24)"
            )));
        }
        Ok(Self { opening, closing })
    }

    pub fn clamp_start(&self, hour: u32) -> u32 {
        hour.clamp(self.opening, self.closing - 1)
    }

    pub fn clamp_end(&self, hour: u32) -> u32 {
        hour.clamp(self.opening + 1, self.closing)
    }

    /// Clamp whichever bounds of the query are set.
    pub fn apply(&self, mut query: AvailabilityQuery) -> AvailabilityQuery {
        query.range_start = query.range_start.map(|h| self.clamp_start(h));
        query.range_end = query.range_end.map(|h| self.clamp_end(h));
        query
    }
}

/// Input of the booking form: the space picked from the matrix, the user to
/// book for (admins only) and the query the matrix was generated from.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub space_id: SpaceId,
    pub user_id: Option<String>,
    pub query: AvailabilityQuery,
}

/// Printable row of the bookings view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRow {
    pub id: BookingId,
    pub location: String,
    pub start: String,
    pub end: String,
    /// Only filled for administrators.
    pub user: Option<String>,
    pub upcoming: bool,
}

pub struct BookingLogic;

impl BookingLogic {
    pub fn headers(role: Role) -> Vec<&'static str> {
        match role {
            Role::Student => vec!["Location", "Start", "End"],
            Role::Admin => vec!["Location", "Start", "End", "User"],
        }
    }

    /// Bookings the user may see: students their own, admins all of them.
    /// Past bookings are skipped unless `include_past`.
    pub fn rows(
        user: &User,
        bookings: &[Booking],
        spaces: &[Space],
        now: DateTime<Utc>,
        include_past: bool,
    ) -> Vec<BookingRow> {
        bookings
            .iter()
            .filter(|b| user.is_admin() || b.user_id == user.user_id)
            .filter(|b| include_past || b.is_upcoming(now))
            .map(|b| BookingRow {
                id: b.booking_id,
                location: spaces
                    .iter()
                    .find(|s| s.space_id == b.space_id)
                    .map(|s| s.location.clone())
                    .unwrap_or_else(|| SPACE_DELETED.to_string()),
                start: format_instant(&b.start),
                end: format_instant(&b.end),
                user: user.is_admin().then(|| b.user_id.clone()),
                upcoming: b.is_upcoming(now),
            })
            .collect()
    }

    /// Matrix over the current store contents, `None` for incomplete input.
    pub fn availability<S: SpaceStore + BookingStore + ?Sized>(
        store: &S,
        query: &AvailabilityQuery,
    ) -> AppResult<Option<AvailabilityMatrix>> {
        let spaces = store.list_spaces()?;
        let bookings = store.list_bookings()?;
        Ok(generate(query, &spaces, &bookings))
    }

    /// Resolve who the booking is for. Students always book for themselves;
    /// administrators must name a valid email.
    fn resolve_owner(user: &User, requested: Option<&str>) -> AppResult<String> {
        match user.role {
            Role::Student => match requested.map(str::trim) {
                Some(other) if !other.is_empty() && other != user.user_id => {
                    Err(AppError::PermissionDenied(
                        "students can only book for themselves".into(),
                    ))
                }
                _ => Ok(user.user_id.clone()),
            },
            Role::Admin => {
                let email = requested.ok_or(AppError::EmptyField("user email"))?;
                Ok(validate_email(email)?.to_string())
            }
        }
    }

    /// Confirm a booking. The range must not have started yet, availability
    /// is recomputed from the store, the whole range must be free for the
    /// chosen space, and the store re-checks overlaps while inserting.
    pub fn confirm<S: SpaceStore + BookingStore + ?Sized>(
        store: &mut S,
        user: &User,
        request: &BookingRequest,
        now: DateTime<Utc>,
    ) -> AppResult<Booking> {
        let owner = Self::resolve_owner(user, request.user_id.as_deref())?;

        let query = &request.query;
        let day = query.day.ok_or(AppError::EmptyField("day"))?;
        let today = now.with_timezone(&Local).date_naive();
        if day < today {
            return Err(AppError::InvalidDate(format!("{day} is in the past")));
        }

        let matrix = Self::availability(store, query)?.ok_or(AppError::NoAvailability)?;
        matrix.select(request.space_id)?;

        let (from, to) = match (query.range_start, query.range_end) {
            (Some(f), Some(t)) => (f, t),
            _ => return Err(AppError::NoAvailability),
        };
        let start = hour_instant(day, from)
            .ok_or_else(|| AppError::InvalidHour(format!("{from}:00 does not exist on {day}")))?;
        let end = hour_instant(day, to)
            .ok_or_else(|| AppError::InvalidHour(format!("{to}:00 does not exist on {day}")))?;
        if start < now {
            return Err(AppError::InvalidHour(format!(
                "{} on {day} has already passed",
                hour_label(from)
            )));
        }

        let existing = store.list_bookings()?;
        let mut id = now.timestamp_millis();
        while existing.iter().any(|b| b.booking_id == id) {
            id += 1;
        }

        let booking = Booking {
            booking_id: id,
            space_id: request.space_id,
            user_id: owner,
            start,
            end,
        };

        store.reserve(booking.clone())?;
        Ok(booking)
    }

    /// Cancel an upcoming booking. Students may only cancel their own.
    pub fn cancel<S: BookingStore + ?Sized>(
        store: &mut S,
        user: &User,
        id: BookingId,
        now: DateTime<Utc>,
    ) -> AppResult<Booking> {
        let booking = store
            .list_bookings()?
            .into_iter()
            .find(|b| b.booking_id == id)
            .ok_or(AppError::BookingNotFound(id))?;

        if !user.is_admin() && booking.user_id != user.user_id {
            return Err(AppError::PermissionDenied(
                "you can only cancel your own bookings".into(),
            ));
        }
        if !booking.is_upcoming(now) {
            return Err(AppError::PastBooking(id));
        }

        store.remove_booking(id)
    }
}
