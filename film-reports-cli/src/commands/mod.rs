pub(crate) mod config;
pub(crate) mod database;
pub(crate) mod list;
pub(crate) mod report;

use std::path::PathBuf;

use rusqlite::Connection;

use crate::CliError;
use crate::settings::{ResolvedDatabase, resolve_database_path};

/// Resolve the database path and log where it came from.
pub(crate) fn resolve_db(db: Option<PathBuf>) -> ResolvedDatabase {
    let resolved = resolve_database_path(db);
    log::debug!(
        "Using database {} ({})",
        resolved.path.display(),
        resolved.source
    );
    resolved
}

/// Open a database that must already exist.
///
/// Returns `Ok(None)` after printing a hint when the file is missing, so
/// report commands never create an empty database as a side effect.
pub(crate) fn open_existing(resolved: &ResolvedDatabase) -> Result<Option<Connection>, CliError> {
    if !resolved.path.exists() {
        log::warn!("No database found at {}", resolved.path.display());
        log::info!("Run 'film-reports init' and 'film-reports seed <dataset>' to create one.");
        return Ok(None);
    }
    let conn = film_reports_db::open_database(&resolved.path)
        .map_err(|e| CliError::database(format!("Failed to open database: {}", e)))?;
    Ok(Some(conn))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DatabaseSource;
    use tempfile::TempDir;

    fn at(path: PathBuf) -> ResolvedDatabase {
        ResolvedDatabase {
            path,
            source: DatabaseSource::Flag,
        }
    }

    #[test]
    fn test_missing_database_is_not_created() {
        let tmp = TempDir::new().unwrap();
        let resolved = at(tmp.path().join("absent.db"));

        assert!(open_existing(&resolved).unwrap().is_none());
        assert!(!resolved.path.exists());
    }

    #[test]
    fn test_existing_database_opens() {
        let tmp = TempDir::new().unwrap();
        let resolved = at(tmp.path().join("rental.db"));
        film_reports_db::open_database(&resolved.path).unwrap();

        let conn = open_existing(&resolved).unwrap().unwrap();
        let version = film_reports_db::schema::get_schema_version(&conn).unwrap();
        assert_eq!(version, film_reports_db::schema::CURRENT_VERSION);
    }
}
