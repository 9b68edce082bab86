use crate::db::log::write_log;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::ui::prompt::confirm;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, optionally zipped.
    ///
    /// Returns the path written, or `None` when the user declined to
    /// overwrite an existing file.
    pub fn backup(
        db_path: &str,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(db_path);
        let dest = Path::new(dest_file);

        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        if let Some(parent) = dest.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let final_target = if compress {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if final_target.exists()
            && !force
            && !confirm(&format!(
                "The file '{}' already exists. Overwrite it?",
                final_target.display()
            ))?
        {
            info("Backup cancelled.");
            return Ok(None);
        }

        let raw_copy = if compress {
            final_target.with_extension("sqlite")
        } else {
            final_target.clone()
        };
        fs::copy(src, &raw_copy)?;

        let final_path = if compress {
            compress_backup(&raw_copy, &final_target)?;
            if let Err(e) = fs::remove_file(&raw_copy) {
                warning(format!("Failed to remove uncompressed backup: {}", e));
            }
            final_target
        } else {
            raw_copy
        };

        success(format!("Backup created: {}", final_path.display()));

        let conn = Connection::open(src)?;
        write_log(
            &conn,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        )?;

        Ok(Some(final_path))
    }
}

/// Compress the copied database `path` into `zip_path`.
fn compress_backup(path: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| AppError::Other(format!("invalid backup path: {}", path.display())))?;

    let mut f = fs::File::open(path)?;
    zip.start_file(name, options).map_err(std::io::Error::other)?;
    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
