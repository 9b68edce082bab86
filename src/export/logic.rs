use super::fs_utils::ensure_writable;
use super::json::{parse_bookings, parse_spaces, write_json};
use super::model::{bookings_table, spaces_table};
use super::{Collection, ExportFormat, csv, notify_export_success, xlsx};
use crate::errors::AppResult;
use crate::store::{BookingStore, SpaceStore};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Write one collection to `path`. Returns the number of rows written.
    pub fn export<S: SpaceStore + BookingStore + ?Sized>(
        store: &S,
        collection: Collection,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        info(format!(
            "Exporting {} to {}: {}",
            collection.as_str(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        let spaces = store.list_spaces()?;
        let rows = match collection {
            Collection::Spaces => {
                match format {
                    ExportFormat::Json => write_json(path, &spaces)?,
                    ExportFormat::Csv => csv::write_csv(path, &spaces_table(&spaces))?,
                    ExportFormat::Xlsx => {
                        xlsx::write_xlsx(path, "Spaces", &spaces_table(&spaces))?
                    }
                }
                spaces.len()
            }
            Collection::Bookings => {
                let bookings = store.list_bookings()?;
                match format {
                    ExportFormat::Json => write_json(path, &bookings)?,
                    ExportFormat::Csv => {
                        csv::write_csv(path, &bookings_table(&bookings, &spaces))?
                    }
                    ExportFormat::Xlsx => xlsx::write_xlsx(
                        path,
                        "Bookings",
                        &bookings_table(&bookings, &spaces),
                    )?,
                }
                bookings.len()
            }
        };

        notify_export_success(&format.as_str().to_uppercase(), rows, path);
        Ok(rows)
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Replace one collection with the JSON array stored in `path`.
    /// Returns the number of imported items.
    pub fn import<S: SpaceStore + BookingStore + ?Sized>(
        store: &mut S,
        collection: Collection,
        path: &Path,
    ) -> AppResult<usize> {
        let content = fs::read_to_string(path)?;

        match collection {
            Collection::Spaces => {
                let spaces = parse_spaces(&content)?;
                let n = spaces.len();
                store.replace_spaces(spaces)?;
                Ok(n)
            }
            Collection::Bookings => {
                let bookings = parse_bookings(&content)?;
                let n = bookings.len();
                store.replace_bookings(bookings)?;
                Ok(n)
            }
        }
    }
}
