use crate::cli::commands::{open_store, open_view, print_page_footer};
use crate::cli::parser::{Cli, Commands, SpaceAction};
use crate::config::Config;
use crate::core::session::View;
use crate::core::space::{NewSpace, SpaceLogic};
use crate::errors::{AppError, AppResult};
use crate::models::amenity::Amenities;
use crate::models::user::Role;
use crate::store::{SpaceStore, SqliteStore};
use crate::ui::messages::{header, info, success};
use crate::ui::prompt::confirm;
use crate::utils::colors::colorize_cell;
use crate::utils::table::{Table, paginate};
use chrono::Utc;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Spaces { action } = &cli.command else {
        return Ok(());
    };

    open_view(cli, cfg, View::Spaces)?;
    let mut store = open_store(cfg)?;

    match action {
        SpaceAction::List { page } => list(&store, cfg, *page),

        SpaceAction::Add {
            location,
            seats,
            amenities,
        } => {
            let input = NewSpace {
                location: location.clone(),
                seats: *seats,
                filters: Amenities::from(amenities),
            };
            let space = SpaceLogic::add(&mut store, input, Utc::now())?;
            let offered: Vec<&str> = space.filters.enabled().iter().map(|a| a.label()).collect();
            success(format!(
                "Space '{}' added (id {}, {} seats, amenities: {})",
                space.location,
                space.space_id,
                space.seats,
                if offered.is_empty() {
                    "none".to_string()
                } else {
                    offered.join(", ")
                }
            ));
            Ok(())
        }

        SpaceAction::Del { id, yes } => remove(&mut store, *id, *yes),
    }
}

fn list(store: &SqliteStore, cfg: &Config, page: usize) -> AppResult<()> {
    let rows = SpaceLogic::rows(&store.list_spaces()?);

    header(View::Spaces.label(Role::Admin).unwrap_or("Spaces"));
    if rows.is_empty() {
        info("No spaces defined.");
        return Ok(());
    }

    let page = paginate(&rows, page, cfg.page_size);

    let mut headers = vec!["Id"];
    headers.extend(SpaceLogic::headers());
    let mut table = Table::new(&headers);

    for row in page.items {
        let mut cells = vec![
            row.id.to_string(),
            row.location.clone(),
            row.seats.to_string(),
        ];
        cells.extend(row.amenities.iter().map(|a| a.to_string()));
        table.add_row(cells);
    }

    print!("{}", table.render_with(cfg.separator(), colorize_cell));
    print_page_footer(&page);
    Ok(())
}

fn remove(store: &mut SqliteStore, id: i64, yes: bool) -> AppResult<()> {
    let location = store
        .list_spaces()?
        .into_iter()
        .find(|s| s.space_id == id)
        .map(|s| s.location)
        .ok_or(AppError::SpaceNotFound(id))?;

    if !yes
        && !confirm(&format!(
            "Delete space '{location}'? Its bookings will be kept and shown as \"Space deleted\"."
        ))?
    {
        info("Deletion cancelled.");
        return Ok(());
    }

    let removed = SpaceLogic::remove(store, id)?;
    success(format!("Space '{}' deleted", removed.location));
    Ok(())
}
