use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::config::migrate::{migrate_config, missing_keys};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
    } = &cli.command
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        if (*check || *migrate) && !path.exists() {
            warning(format!(
                "No configuration file at {}, run `studybook init` first",
                path.display()
            ));
            return Ok(());
        }

        // ---- CHECK ----
        if *check {
            let missing = missing_keys(&path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing keys: {}", missing.join(", ")));
            }
        }

        // ---- MIGRATE ----
        if *migrate {
            let added = migrate_config(&path)?;
            if added.is_empty() {
                info("Nothing to migrate.");
            } else {
                success(format!("Added keys with default values: {}", added.join(", ")));
            }
        }
    }

    Ok(())
}
