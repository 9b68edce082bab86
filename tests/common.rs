#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, NaiveDate, Utc};
use std::env;
use std::fs;
use std::path::PathBuf;
use studybook::core::availability::hour_instant;
use studybook::models::amenity::Amenities;
use studybook::models::booking::Booking;
use studybook::models::space::Space;

pub const ADMIN: [&str; 6] = [
    "--role",
    "admin",
    "--email",
    "librarian@library.example.ca",
    "--password",
    "shelves2024",
];

pub const STUDENT: [&str; 6] = [
    "--role",
    "student",
    "--email",
    "jdoe@uni.example.ca",
    "--password",
    "study123",
];

pub const OTHER_STUDENT: [&str; 6] = [
    "--role",
    "student",
    "--email",
    "akim@uni.example.ca",
    "--password",
    "quietplease",
];

pub fn sb() -> Command {
    cargo_bin_cmd!("studybook")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_studybook.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB through the CLI (test mode: config file untouched)
pub fn init_test_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    sb().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Far-future day, so bookings on it are always upcoming.
pub fn future_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 1, 5).unwrap()
}

pub fn at(day: NaiveDate, hour: u32) -> DateTime<Utc> {
    hour_instant(day, hour).unwrap()
}

pub fn space(id: i64, location: &str, seats: u32, filters: Amenities) -> Space {
    Space::new(id, location, seats, filters)
}

pub fn booking(id: i64, space_id: i64, user: &str, day: NaiveDate, from: u32, to: u32) -> Booking {
    Booking {
        booking_id: id,
        space_id,
        user_id: user.to_string(),
        start: at(day, from),
        end: at(day, to),
    }
}
