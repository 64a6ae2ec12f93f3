//! SQLite schema creation and versioning for the film-rental database.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Schema version {found} is newer than supported version {expected}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 1;

/// Create all tables, indexes, and views if they don't exist.
///
/// Idempotent, so it is safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    if get_schema_version(conn)? < CURRENT_VERSION {
        set_schema_version(conn, CURRENT_VERSION)?;
    }
    Ok(())
}

/// Open or create a film-rental database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;

    let version = get_schema_version(&conn)?;
    if version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: version,
        });
    }
    if version < CURRENT_VERSION {
        log::info!("Creating film-rental schema in {}", path.display());
        create_schema(&conn)?;
    }

    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Get the current schema version, or 0 if no schema exists.
pub fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Films
CREATE TABLE IF NOT EXISTS language (
    language_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    last_update TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE TABLE IF NOT EXISTS category (
    category_id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    last_update TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_category_name ON category(name);

CREATE TABLE IF NOT EXISTS film (
    film_id INTEGER PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT,
    release_year INTEGER,
    language_id INTEGER NOT NULL REFERENCES language(language_id),
    length INTEGER,
    rental_rate REAL NOT NULL DEFAULT 4.99,
    rating TEXT,
    last_update TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_film_title ON film(title);
CREATE INDEX IF NOT EXISTS idx_film_length ON film(length);
CREATE INDEX IF NOT EXISTS idx_film_language ON film(language_id);

CREATE TABLE IF NOT EXISTS film_category (
    film_id INTEGER NOT NULL REFERENCES film(film_id),
    category_id INTEGER NOT NULL REFERENCES category(category_id),
    PRIMARY KEY (film_id, category_id)
);

CREATE TABLE IF NOT EXISTS actor (
    actor_id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    last_update TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_actor_last_name ON actor(last_name);

CREATE TABLE IF NOT EXISTS film_actor (
    actor_id INTEGER NOT NULL REFERENCES actor(actor_id),
    film_id INTEGER NOT NULL REFERENCES film(film_id),
    PRIMARY KEY (actor_id, film_id)
);

-- Customers and geography
CREATE TABLE IF NOT EXISTS country (
    country_id INTEGER PRIMARY KEY,
    country TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS city (
    city_id INTEGER PRIMARY KEY,
    city TEXT NOT NULL,
    country_id INTEGER NOT NULL REFERENCES country(country_id)
);
CREATE INDEX IF NOT EXISTS idx_city_name ON city(city);

CREATE TABLE IF NOT EXISTS address (
    address_id INTEGER PRIMARY KEY,
    address TEXT NOT NULL,
    district TEXT,
    city_id INTEGER NOT NULL REFERENCES city(city_id),
    postal_code TEXT
);

CREATE TABLE IF NOT EXISTS customer (
    customer_id INTEGER PRIMARY KEY,
    first_name TEXT NOT NULL,
    last_name TEXT NOT NULL,
    email TEXT,
    address_id INTEGER NOT NULL REFERENCES address(address_id),
    active BOOLEAN NOT NULL DEFAULT 1,
    create_date TEXT NOT NULL DEFAULT (datetime('now'))
);
CREATE INDEX IF NOT EXISTS idx_customer_last_name ON customer(last_name);

-- Rentals
CREATE TABLE IF NOT EXISTS inventory (
    inventory_id INTEGER PRIMARY KEY,
    film_id INTEGER NOT NULL REFERENCES film(film_id),
    store_id INTEGER NOT NULL DEFAULT 1
);
CREATE INDEX IF NOT EXISTS idx_inventory_film ON inventory(film_id);

CREATE TABLE IF NOT EXISTS rental (
    rental_id INTEGER PRIMARY KEY,
    rental_date TEXT NOT NULL,
    inventory_id INTEGER NOT NULL REFERENCES inventory(inventory_id),
    customer_id INTEGER NOT NULL REFERENCES customer(customer_id),
    return_date TEXT
);
CREATE INDEX IF NOT EXISTS idx_rental_customer ON rental(customer_id);
CREATE INDEX IF NOT EXISTS idx_rental_inventory ON rental(inventory_id);

CREATE TABLE IF NOT EXISTS payment (
    payment_id INTEGER PRIMARY KEY,
    customer_id INTEGER NOT NULL REFERENCES customer(customer_id),
    rental_id INTEGER REFERENCES rental(rental_id),
    amount REAL NOT NULL,
    payment_date TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_payment_rental ON payment(rental_id);

-- One row per (film, category) with the cast folded into a single column
CREATE VIEW IF NOT EXISTS film_list AS
SELECT
    film.film_id AS fid,
    film.title AS title,
    film.description AS description,
    category.name AS category,
    film.rental_rate AS price,
    film.length AS length,
    film.rating AS rating,
    group_concat(actor.first_name || ' ' || actor.last_name, ', ') AS actors
FROM film
JOIN film_category ON film_category.film_id = film.film_id
JOIN category ON category.category_id = film_category.category_id
LEFT JOIN film_actor ON film_actor.film_id = film.film_id
LEFT JOIN actor ON actor.actor_id = film_actor.actor_id
GROUP BY film.film_id, category.name;
"#;
