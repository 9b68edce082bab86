mod csv;
mod fs_utils;
pub mod json;
pub mod logic;
mod model;
mod xlsx;

pub use logic::{ExportLogic, ImportLogic};
pub use model::{ExportTable, bookings_table, spaces_table};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed: {rows} row(s) written to {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Which collection an export or import works on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    Spaces,
    Bookings,
}

impl Collection {
    pub fn from_flag(spaces: bool) -> Self {
        if spaces {
            Collection::Spaces
        } else {
            Collection::Bookings
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Spaces => "spaces",
            Collection::Bookings => "bookings",
        }
    }
}
