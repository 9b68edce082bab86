use crate::db::pool::DbPool;
use crate::db::queries::{BOOKINGS_KEY, SPACES_KEY, is_written};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COLLECTIONS
    //
    for (key, table) in [(SPACES_KEY, "spaces"), (BOOKINGS_KEY, "bookings")] {
        if is_written(&pool.conn, key)? {
            let count: i64 =
                pool.conn
                    .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                        row.get(0)
                    })?;
            println!("{}• {}:{} {}{}{}", CYAN, table, RESET, GREEN, count, RESET);
        } else {
            println!(
                "{}• {}:{} {}bundled defaults (not written yet){}",
                CYAN, table, RESET, GREY, RESET
            );
        }
    }

    //
    // 3) BOOKING RANGE
    //
    let first: Option<String> = pool
        .conn
        .query_row(
            "SELECT start_at FROM bookings ORDER BY start_at ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    let last: Option<String> = pool
        .conn
        .query_row(
            "SELECT end_at FROM bookings ORDER BY end_at DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Booking range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
