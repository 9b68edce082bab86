use crate::cli::commands::{login_admin, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{Collection, ExportLogic};
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        spaces,
        force,
    } = &cli.command
    {
        login_admin(cli, cfg)?;
        let store = open_store(cfg)?;
        ExportLogic::export(
            &store,
            Collection::from_flag(*spaces),
            *format,
            &expand_tilde(file),
            *force,
        )?;
    }
    Ok(())
}
