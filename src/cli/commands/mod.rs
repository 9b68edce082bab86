pub mod backup;
pub mod bookings;
pub mod config;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod spaces;
pub mod whoami;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::auth::CredentialStore;
use crate::core::session::{Session, View};
use crate::errors::{AppError, AppResult};
use crate::store::SqliteStore;
use crate::utils::colors::{GREY, RESET};
use crate::utils::table::Page;

/// Drive the session from the global flags: select the role, then log in.
pub fn login(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let role = cli.role.ok_or_else(|| {
        AppError::NotAuthenticated("select a role with --role student|admin".into())
    })?;

    let mut session = Session::new();
    session.select_role(role)?;

    let credentials = CredentialStore::load(cfg.users_file.as_deref())?;
    session.login(
        &credentials,
        cli.email.as_deref().unwrap_or_default(),
        cli.password.as_deref().unwrap_or_default(),
    )?;

    Ok(session)
}

/// Log in and switch to `view`.
pub fn open_view(cli: &Cli, cfg: &Config, view: View) -> AppResult<Session> {
    let mut session = login(cli, cfg)?;
    session.show(view)?;
    Ok(session)
}

/// Log in and require the administrator role.
pub fn login_admin(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let session = login(cli, cfg)?;
    session.require_admin()?;
    Ok(session)
}

pub fn open_store(cfg: &Config) -> AppResult<SqliteStore> {
    SqliteStore::open(&cfg.database)
}

/// "Page 2/3 (25 items)" under a paginated table.
pub(crate) fn print_page_footer<T>(page: &Page<'_, T>) {
    if page.total_pages > 1 {
        println!(
            "{GREY}Page {}/{} ({} items, use --page N){RESET}",
            page.number, page.total_pages, page.total_items
        );
    }
}
