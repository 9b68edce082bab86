//! ANSI escape codes for terminal output.
pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";

pub const SLOT_FREE: &str = "✔";
pub const SLOT_TAKEN: &str = "✘";

/// Matrix cell: green tick when free, red cross when taken.
pub fn slot_cell(available: bool) -> &'static str {
    if available { SLOT_FREE } else { SLOT_TAKEN }
}

/// Colour a padded table cell according to its content.
pub fn colorize_cell(cell: &str) -> String {
    match cell.trim() {
        SLOT_FREE | "Yes" => format!("{GREEN}{cell}{RESET}"),
        SLOT_TAKEN => format!("{RED}{cell}{RESET}"),
        "No" | "--" => format!("{GREY}{cell}{RESET}"),
        crate::core::booking::SPACE_DELETED => format!("{YELLOW}{cell}{RESET}"),
        _ => cell.to_string(),
    }
}
