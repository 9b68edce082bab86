//! Flat, string-only view of a collection shared by the CSV and XLSX writers.

use crate::core::booking::SPACE_DELETED;
use crate::models::amenity::Amenity;
use crate::models::booking::Booking;
use crate::models::space::Space;
use crate::utils::formatting::format_instant;

pub struct ExportTable {
    pub headers: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub fn spaces_table(spaces: &[Space]) -> ExportTable {
    let mut headers = vec!["id", "location", "seats"];
    headers.extend(Amenity::ALL.iter().map(|a| a.key()));

    let rows = spaces
        .iter()
        .map(|s| {
            let mut row = vec![
                s.space_id.to_string(),
                s.location.clone(),
                s.seats.to_string(),
            ];
            row.extend(Amenity::ALL.iter().map(|a| s.filters.has(*a).to_string()));
            row
        })
        .collect();

    ExportTable { headers, rows }
}

/// Bookings joined with their space name. Instants are written in local time.
pub fn bookings_table(bookings: &[Booking], spaces: &[Space]) -> ExportTable {
    let headers = vec!["id", "space_id", "location", "user", "start", "end"];

    let rows = bookings
        .iter()
        .map(|b| {
            let location = spaces
                .iter()
                .find(|s| s.space_id == b.space_id)
                .map(|s| s.location.clone())
                .unwrap_or_else(|| SPACE_DELETED.to_string());
            vec![
                b.booking_id.to_string(),
                b.space_id.to_string(),
                location,
                b.user_id.clone(),
                format_instant(&b.start),
                format_instant(&b.end),
            ]
        })
        .collect();

    ExportTable { headers, rows }
}
