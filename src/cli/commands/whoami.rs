use crate::cli::commands::login;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::session::View;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = login(cli, cfg)?;
    let user = session.user()?;

    success(format!(
        "Logged in as {} <{}> ({})",
        user.display_name(),
        user.user_id,
        user.role
    ));

    println!("Available views:");
    for view in [View::Bookings, View::Spaces] {
        if let Some(label) = view.label(user.role) {
            println!("  • {label}");
        }
    }

    Ok(())
}
