use crate::cli::commands::login_admin;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = &cli.command
    {
        login_admin(cli, cfg)?;
        let dest = expand_tilde(file);
        BackupLogic::backup(&cfg.database, &dest.to_string_lossy(), *compress, *force)?;
    }

    Ok(())
}
