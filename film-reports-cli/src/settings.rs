//! Settings file and database path resolution.
//!
//! The settings file lives at `~/.config/film-reports/settings.toml`. The
//! only setting today is `database.path`.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the configured database path.
pub(crate) const DB_ENV_VAR: &str = "FILM_REPORTS_DB";

/// Canonical path to the settings file: `~/.config/film-reports/settings.toml`.
pub(crate) fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("film-reports").join("settings.toml")
}

/// Database path used when nothing else is configured.
pub(crate) fn default_database_path() -> PathBuf {
    let data = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    data.join("film-reports").join("film-rental.db")
}

/// Where the database path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum DatabaseSource {
    /// `--db` on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// `database.path` in the settings file.
    ConfigFile,
    /// Built-in default location.
    Default,
}

impl fmt::Display for DatabaseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag => write!(f, "--db flag"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "settings file"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct ResolvedDatabase {
    pub path: PathBuf,
    pub source: DatabaseSource,
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `FILM_REPORTS_DB` environment variable
/// 3. Saved `database.path` in `settings.toml`
/// 4. [`default_database_path`]
pub(crate) fn resolve_database_path(cli_override: Option<PathBuf>) -> ResolvedDatabase {
    resolve_from(
        cli_override,
        std::env::var(DB_ENV_VAR).ok(),
        &settings_path(),
    )
}

fn resolve_from(
    cli_override: Option<PathBuf>,
    env_value: Option<String>,
    settings_file: &Path,
) -> ResolvedDatabase {
    if let Some(path) = cli_override {
        return ResolvedDatabase {
            path,
            source: DatabaseSource::Flag,
        };
    }
    if let Some(value) = env_value.filter(|v| !v.is_empty()) {
        return ResolvedDatabase {
            path: PathBuf::from(value),
            source: DatabaseSource::EnvVar(DB_ENV_VAR),
        };
    }
    if let Some(path) = load_database_path(settings_file) {
        return ResolvedDatabase {
            path,
            source: DatabaseSource::ConfigFile,
        };
    }
    ResolvedDatabase {
        path: default_database_path(),
        source: DatabaseSource::Default,
    }
}

/// Read `database.path` from the settings file, if set.
fn load_database_path(settings_file: &Path) -> Option<PathBuf> {
    let contents = std::fs::read_to_string(settings_file).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    let path = doc.get("database")?.get("path")?.as_str()?;
    if path.is_empty() {
        None
    } else {
        Some(PathBuf::from(path))
    }
}

/// Save (or clear) `database.path` in the settings file.
///
/// Uses `toml::Value` for a surgical update so unrelated keys are preserved.
pub(crate) fn save_database_path(settings_file: &Path, path: Option<&Path>) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings_file) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let database = table
        .entry("database")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let db_table = database
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[database] is not a table"))?;

    match path {
        Some(p) => {
            db_table.insert(
                "path".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            db_table.remove("path");
        }
    }

    // Write atomically
    if let Some(parent) = settings_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings_file.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings_file)?;

    Ok(())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub(crate) fn load_settings_string(settings_file: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(settings_file).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
