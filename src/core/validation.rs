//! Form-level validation shared by the booking and space workflows.

use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email pattern is a valid regex")
});

pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

pub fn validate_email(s: &str) -> AppResult<&str> {
    let s = s.trim();
    if s.is_empty() {
        return Err(AppError::EmptyField("user email"));
    }
    if !is_valid_email(s) {
        return Err(AppError::InvalidEmail(s.to_string()));
    }
    Ok(s)
}

/// Trimmed, non-empty location name that no existing space uses.
pub fn validate_location<'a>(name: &'a str, existing: &[&str]) -> AppResult<&'a str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::EmptyField("location"));
    }
    if existing.iter().any(|e| *e == name) {
        return Err(AppError::DuplicateSpace(name.to_string()));
    }
    Ok(name)
}

pub fn validate_seats(seats: i64) -> AppResult<u32> {
    u32::try_from(seats)
        .ok()
        .filter(|s| *s >= 1)
        .ok_or(AppError::InvalidSeats(seats))
}
