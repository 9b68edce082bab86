use crate::db::log::{LogEntry, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::formatting::{truncate, visible_width};
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 40;

/// Colour of the operation column.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "book" | "add_space" => Colour::Green,
        "cancel" | "del_space" => Colour::Red,
        "replace_spaces" | "replace_bookings" | "import" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" | "vacuum" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per entry, oldest first.
    pub fn render(entries: &[LogEntry]) -> Vec<String> {
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        entries
            .iter()
            .map(|e| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| e.date.clone());

                let op = color_for_operation(&e.operation).paint(e.operation.as_str());
                let target = if e.target.is_empty() {
                    String::new()
                } else {
                    format!(" ({})", truncate(&e.target, MAX_TARGET_WIDTH))
                };
                let op_target = format!("{op}{target}");
                let padding =
                    " ".repeat((MAX_TARGET_WIDTH + 20).saturating_sub(visible_width(&op_target)));

                format!(
                    "{:>id_w$}: {:<date_w$} | {}{} => {}",
                    e.id,
                    date,
                    op_target,
                    padding,
                    e.message,
                    id_w = id_w,
                    date_w = date_w
                )
            })
            .collect()
    }

    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        println!("📜 Internal log:\n");
        for line in Self::render(&entries) {
            println!("{line}");
        }
        Ok(())
    }
}
