use crate::cli::commands::{login_admin, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::log::write_log;
use crate::errors::AppResult;
use crate::export::{Collection, ImportLogic};
use crate::ui::messages::success;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, spaces } = &cli.command {
        login_admin(cli, cfg)?;
        let mut store = open_store(cfg)?;

        let collection = Collection::from_flag(*spaces);
        let path = expand_tilde(file);
        let count = ImportLogic::import(&mut store, collection, &path)?;

        write_log(
            store.conn(),
            "import",
            collection.as_str(),
            &format!("Imported {} item(s) from {}", count, path.display()),
        )?;

        success(format!(
            "Imported {} {} from {}",
            count,
            collection.as_str(),
            path.display()
        ));
    }
    Ok(())
}
