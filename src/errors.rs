//! Unified application error type.
//! Every module (store, core, cli, export) returns AppError so the binary can
//! decide in one place how a failure is reported.

use crate::models::booking::BookingId;
use crate::models::space::SpaceId;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Form validation
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid hour: {0}")]
    InvalidHour(String),

    #[error("User email is invalid: {0}")]
    InvalidEmail(String),

    #[error("Missing required field: {0}")]
    EmptyField(&'static str),

    #[error("Seats must be at least 1 (got {0})")]
    InvalidSeats(i64),

    #[error("A location with this name already exists: {0}")]
    DuplicateSpace(String),

    #[error("Invalid booking: {0}")]
    InvalidBooking(String),

    #[error("Duplicate id in imported data: {0}")]
    DuplicateId(i64),

    // ---------------------------
    // Booking logic
    // ---------------------------
    #[error("Some inputs are invalid, please adjust them to see available slots")]
    NoAvailability,

    #[error("Space {0} does not match the requested seats or amenities")]
    SpaceNotEligible(SpaceId),

    #[error("The requested slot is not available: {0}")]
    SlotUnavailable(String),

    #[error("Space not found: {0}")]
    SpaceNotFound(SpaceId),

    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    #[error("Booking {0} has already started and can no longer be cancelled")]
    PastBooking(BookingId),

    // ---------------------------
    // Session / permissions
    // ---------------------------
    #[error("Login failed! Invalid email or password.")]
    InvalidCredentials,

    #[error("Not logged in: {0}")]
    NotAuthenticated(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Invalid session transition: {0}")]
    InvalidTransition(String),

    // ---------------------------
    // Config / export
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors caused by form input: shown inline as a warning, exit code 2.
    /// Everything else (permissions, missing records, I/O) exits with 1.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDate(_)
                | AppError::InvalidHour(_)
                | AppError::InvalidEmail(_)
                | AppError::EmptyField(_)
                | AppError::InvalidSeats(_)
                | AppError::DuplicateSpace(_)
                | AppError::InvalidBooking(_)
                | AppError::DuplicateId(_)
                | AppError::NoAvailability
                | AppError::SpaceNotEligible(_)
                | AppError::SlotUnavailable(_)
                | AppError::InvalidCredentials
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
