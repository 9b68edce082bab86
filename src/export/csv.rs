use super::model::ExportTable;
use crate::errors::{AppError, AppResult};
use csv::Writer;
use std::path::Path;

/// Write the table as CSV with a header line.
pub(crate) fn write_csv(path: &Path, table: &ExportTable) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(to_app_error)?;

    wtr.write_record(&table.headers).map_err(to_app_error)?;
    for row in &table.rows {
        wtr.write_record(row).map_err(to_app_error)?;
    }

    wtr.flush()?;
    Ok(())
}

fn to_app_error(e: csv::Error) -> AppError {
    AppError::Export(format!("CSV: {e}"))
}
