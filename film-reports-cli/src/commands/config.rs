use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::settings;

use super::resolve_db;

/// Show the settings file and the database path that would be used.
pub(crate) fn run_config_show(db: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Film Reports Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let resolved = resolve_db(db);
    let state = if resolved.path.exists() {
        "(exists)"
    } else {
        "(not created)"
    };
    log::info!(
        "  Database:      {} {} {}",
        resolved.path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("[{}]", resolved.source).if_supports_color(Stdout, |t| t.dimmed()),
        state.if_supports_color(Stdout, |t| t.dimmed()),
    );

    if let Some(contents) = settings::load_settings_string(&path) {
        crate::log_blank();
        for line in contents.lines() {
            log::info!("  {}", line);
        }
    }
}

/// Print the settings file path.
pub(crate) fn run_config_path() {
    println!("{}", settings::settings_path().display());
}

/// Save a default database path.
pub(crate) fn run_config_set_db(path: PathBuf) -> Result<(), CliError> {
    let path = if path.is_absolute() {
        path
    } else {
        std::env::current_dir()?.join(path)
    };
    settings::save_database_path(&settings::settings_path(), Some(&path))
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!(
        "{} Database path set to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}

/// Remove the saved database path.
pub(crate) fn run_config_clear_db() -> Result<(), CliError> {
    settings::save_database_path(&settings::settings_path(), None)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))?;
    log::info!(
        "{} Database path cleared; using {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        settings::default_database_path().display(),
    );
    Ok(())
}
