use crate::cli::commands::{open_store, open_view, print_page_footer};
use crate::cli::parser::{BookingAction, Cli, Commands, SlotArgs};
use crate::config::Config;
use crate::core::availability::{AvailabilityMatrix, AvailabilityQuery};
use crate::core::booking::{BookingLogic, BookingRequest};
use crate::core::session::View;
use crate::errors::{AppError, AppResult};
use crate::models::amenity::Amenities;
use crate::models::user::User;
use crate::store::{BookingStore, SpaceStore, SqliteStore};
use crate::ui::messages::{header, info, success, warning};
use crate::ui::prompt::confirm;
use crate::utils::colors::{colorize_cell, slot_cell};
use crate::utils::date::{parse_day, parse_hour};
use crate::utils::formatting::format_instant;
use crate::utils::table::{Table, paginate};
use chrono::Utc;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Bookings { action } = &cli.command else {
        return Ok(());
    };

    let session = open_view(cli, cfg, View::Bookings)?;
    let user = session.user()?;
    let mut store = open_store(cfg)?;

    match action {
        BookingAction::List { past, page } => list(&store, cfg, user, *past, *page),

        BookingAction::Avail { slot } => {
            let query = build_query(slot, cfg)?;
            match BookingLogic::availability(&store, &query)? {
                Some(matrix) => print_matrix(&matrix, cfg),
                None => warning(AppError::NoAvailability),
            }
            Ok(())
        }

        BookingAction::Add {
            space,
            user: owner,
            slot,
        } => {
            let request = BookingRequest {
                space_id: *space,
                user_id: owner.clone(),
                query: build_query(slot, cfg)?,
            };
            let booking = BookingLogic::confirm(&mut store, user, &request, Utc::now())?;

            let location = store
                .list_spaces()?
                .into_iter()
                .find(|s| s.space_id == booking.space_id)
                .map(|s| s.location)
                .unwrap_or_default();

            success(format!(
                "Booked '{}' for {} from {} to {} (booking {})",
                location,
                booking.user_id,
                format_instant(&booking.start),
                format_instant(&booking.end),
                booking.booking_id
            ));
            Ok(())
        }

        BookingAction::Del { id, yes } => {
            if !*yes && !confirm(&format!("Cancel booking {id}?"))? {
                info("Cancellation aborted.");
                return Ok(());
            }
            let cancelled = BookingLogic::cancel(&mut store, user, *id, Utc::now())?;
            success(format!(
                "Booking {} cancelled ({} to {})",
                cancelled.booking_id,
                format_instant(&cancelled.start),
                format_instant(&cancelled.end)
            ));
            Ok(())
        }
    }
}

/// Parse the slot flags into a query clamped to the opening hours.
/// Missing flags stay unset; the generator then reports "no matrix".
pub fn build_query(slot: &SlotArgs, cfg: &Config) -> AppResult<AvailabilityQuery> {
    let query = AvailabilityQuery {
        day: slot.day.as_deref().map(parse_day).transpose()?,
        range_start: slot.from.as_deref().map(parse_hour).transpose()?,
        range_end: slot.to.as_deref().map(parse_hour).transpose()?,
        seats_needed: slot.seats,
        filters: Amenities::from(&slot.amenities),
    };
    Ok(cfg.hour_bounds()?.apply(query))
}

fn list(
    store: &SqliteStore,
    cfg: &Config,
    user: &User,
    include_past: bool,
    page: usize,
) -> AppResult<()> {
    let bookings = store.list_bookings()?;
    let spaces = store.list_spaces()?;
    let rows = BookingLogic::rows(user, &bookings, &spaces, Utc::now(), include_past);

    header(View::Bookings.label(user.role).unwrap_or("Bookings"));
    if rows.is_empty() {
        info("No bookings to show.");
        return Ok(());
    }

    let page = paginate(&rows, page, cfg.page_size);

    let mut headers = vec!["Id"];
    headers.extend(BookingLogic::headers(user.role));
    if include_past {
        headers.push("Status");
    }
    let mut table = Table::new(&headers);

    for row in page.items {
        let mut cells = vec![
            row.id.to_string(),
            row.location.clone(),
            row.start.clone(),
            row.end.clone(),
        ];
        if let Some(owner) = &row.user {
            cells.push(owner.clone());
        }
        if include_past {
            cells.push(if row.upcoming { "upcoming" } else { "past" }.to_string());
        }
        table.add_row(cells);
    }

    print!("{}", table.render_with(cfg.separator(), colorize_cell));
    print_page_footer(&page);
    Ok(())
}

fn print_matrix(matrix: &AvailabilityMatrix, cfg: &Config) {
    header(format!("Availability on {}", matrix.day));

    if matrix.rows.is_empty() {
        info("No space matches the requested seats and amenities.");
        return;
    }

    let mut headers = vec!["Id".to_string(), "Location".to_string()];
    headers.extend(matrix.headers.iter().cloned());
    let mut table = Table::new(&headers);

    for row in &matrix.rows {
        let mut cells = vec![row.space_id.to_string(), row.location.clone()];
        cells.extend(row.slots.iter().map(|s| slot_cell(*s).to_string()));
        table.add_row(cells);
    }

    print!("{}", table.render_with(cfg.separator(), colorize_cell));

    let selectable = matrix.selectable();
    if selectable.is_empty() {
        info("No space is free for the whole range.");
    } else {
        let ids: Vec<String> = selectable.iter().map(|id| id.to_string()).collect();
        info(format!(
            "Bookable for the whole range: {} (use `bookings add --space ID`)",
            ids.join(", ")
        ));
    }
}
