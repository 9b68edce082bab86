//! studybook main entrypoint.

use std::process;
use studybook::run;
use studybook::ui::messages::{error, warning};

fn main() {
    if let Err(e) = run() {
        if e.is_input_error() {
            warning(&e);
            process::exit(2);
        }
        error(&e);
        process::exit(1);
    }
}
