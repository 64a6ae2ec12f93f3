use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::resolve_db;

/// Create the database file and its schema.
pub(crate) fn run_init(db: Option<PathBuf>) -> Result<(), CliError> {
    let resolved = resolve_db(db);
    let existed = resolved.path.exists();

    if let Some(parent) = resolved.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    film_reports_db::open_database(&resolved.path)
        .map_err(|e| CliError::database(format!("Failed to initialize database: {}", e)))?;

    let status = if existed { "Schema up to date" } else { "Created" };
    log::info!(
        "{} {} {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        status,
        resolved.path.display(),
    );
    Ok(())
}

/// Load a YAML dataset into the database, creating it if needed.
pub(crate) fn run_seed(db: Option<PathBuf>, dataset: &Path) -> Result<(), CliError> {
    let data = film_reports_model::load_dataset(dataset)?;
    log::debug!("Loaded {} records from {}", data.row_count(), dataset.display());

    let resolved = resolve_db(db);
    if let Some(parent) = resolved.path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let conn = film_reports_db::open_database(&resolved.path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;

    let stats = film_reports_db::seed_dataset(&conn, &data)
        .map_err(|e| CliError::database(format!("Failed to seed database: {}", e)))?;

    log::info!(
        "{}",
        "Seeded Film-Rental Database".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", resolved.path.display());
    crate::log_blank();
    log::info!("  Languages:      {:>8}", stats.languages);
    log::info!("  Categories:     {:>8}", stats.categories);
    log::info!("  Actors:         {:>8}", stats.actors);
    log::info!("  Films:          {:>8}", stats.films);
    log::info!("  Countries:      {:>8}", stats.countries);
    log::info!("  Cities:         {:>8}", stats.cities);
    log::info!("  Addresses:      {:>8}", stats.addresses);
    log::info!("  Customers:      {:>8}", stats.customers);
    log::info!("  Inventory:      {:>8}", stats.inventory);
    log::info!("  Rentals:        {:>8}", stats.rentals);
    log::info!("  Payments:       {:>8}", stats.payments);
    log::info!(
        "  {}          {:>8}",
        "Total:".if_supports_color(Stdout, |t| t.bold()),
        stats.total(),
    );

    Ok(())
}
