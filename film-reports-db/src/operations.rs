//! Write operations: upserting dataset rows into the film-rental schema.
//!
//! Reports are read-only; these exist to populate a database from a YAML
//! [`Dataset`].

use film_reports_model::*;
use rusqlite::{params, Connection};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Missing {entity} with id {id}")]
    MissingReference { entity: &'static str, id: i64 },
}

// ── Film Operations ─────────────────────────────────────────────────────────

pub fn upsert_language(conn: &Connection, language: &Language) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO language (language_id, name) VALUES (?1, ?2)
         ON CONFLICT(language_id) DO UPDATE SET
             name = excluded.name,
             last_update = datetime('now')",
        params![language.id, language.name],
    )?;
    Ok(())
}

pub fn upsert_category(conn: &Connection, category: &Category) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO category (category_id, name) VALUES (?1, ?2)
         ON CONFLICT(category_id) DO UPDATE SET
             name = excluded.name,
             last_update = datetime('now')",
        params![category.id, category.name],
    )?;
    Ok(())
}

pub fn upsert_actor(conn: &Connection, actor: &Actor) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO actor (actor_id, first_name, last_name) VALUES (?1, ?2, ?3)
         ON CONFLICT(actor_id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name = excluded.last_name,
             last_update = datetime('now')",
        params![actor.id, actor.first_name, actor.last_name],
    )?;
    Ok(())
}

/// Insert or update a film together with its category and cast links.
///
/// The film's language, categories, and actors must already exist.
pub fn upsert_film(conn: &Connection, film: &Film) -> Result<(), SeedError> {
    ensure_exists(conn, Parent::Language, film.language_id)?;

    conn.execute(
        "INSERT INTO film (film_id, title, description, release_year, language_id, length, rental_rate, rating)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(film_id) DO UPDATE SET
             title = excluded.title,
             description = excluded.description,
             release_year = excluded.release_year,
             language_id = excluded.language_id,
             length = excluded.length,
             rental_rate = excluded.rental_rate,
             rating = excluded.rating,
             last_update = datetime('now')",
        params![
            film.id,
            film.title,
            film.description,
            film.release_year,
            film.language_id,
            film.length,
            film.rental_rate,
            film.rating,
        ],
    )?;

    // Links are replaced wholesale so re-seeding reflects removals
    conn.execute("DELETE FROM film_category WHERE film_id = ?1", [film.id])?;
    for &category_id in &film.categories {
        ensure_exists(conn, Parent::Category, category_id)?;
        conn.execute(
            "INSERT OR IGNORE INTO film_category (film_id, category_id) VALUES (?1, ?2)",
            params![film.id, category_id],
        )?;
    }

    conn.execute("DELETE FROM film_actor WHERE film_id = ?1", [film.id])?;
    for &actor_id in &film.actors {
        ensure_exists(conn, Parent::Actor, actor_id)?;
        conn.execute(
            "INSERT OR IGNORE INTO film_actor (actor_id, film_id) VALUES (?1, ?2)",
            params![actor_id, film.id],
        )?;
    }

    Ok(())
}

// ── Customer Operations ─────────────────────────────────────────────────────

pub fn upsert_country(conn: &Connection, country: &Country) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO country (country_id, country) VALUES (?1, ?2)
         ON CONFLICT(country_id) DO UPDATE SET country = excluded.country",
        params![country.id, country.country],
    )?;
    Ok(())
}

pub fn upsert_city(conn: &Connection, city: &City) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO city (city_id, city, country_id) VALUES (?1, ?2, ?3)
         ON CONFLICT(city_id) DO UPDATE SET
             city = excluded.city,
             country_id = excluded.country_id",
        params![city.id, city.city, city.country_id],
    )?;
    Ok(())
}

pub fn upsert_address(conn: &Connection, address: &Address) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO address (address_id, address, district, city_id, postal_code)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(address_id) DO UPDATE SET
             address = excluded.address,
             district = excluded.district,
             city_id = excluded.city_id,
             postal_code = excluded.postal_code",
        params![
            address.id,
            address.address,
            address.district,
            address.city_id,
            address.postal_code,
        ],
    )?;
    Ok(())
}

pub fn upsert_customer(conn: &Connection, customer: &Customer) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO customer (customer_id, first_name, last_name, email, address_id, active)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)
         ON CONFLICT(customer_id) DO UPDATE SET
             first_name = excluded.first_name,
             last_name = excluded.last_name,
             email = excluded.email,
             address_id = excluded.address_id,
             active = excluded.active",
        params![
            customer.id,
            customer.first_name,
            customer.last_name,
            customer.email,
            customer.address_id,
            customer.active,
        ],
    )?;
    Ok(())
}

// ── Rental Operations ───────────────────────────────────────────────────────

pub fn upsert_inventory(conn: &Connection, item: &InventoryItem) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO inventory (inventory_id, film_id, store_id) VALUES (?1, ?2, ?3)
         ON CONFLICT(inventory_id) DO UPDATE SET
             film_id = excluded.film_id,
             store_id = excluded.store_id",
        params![item.id, item.film_id, item.store_id],
    )?;
    Ok(())
}

pub fn upsert_rental(conn: &Connection, rental: &Rental) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO rental (rental_id, rental_date, inventory_id, customer_id, return_date)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(rental_id) DO UPDATE SET
             rental_date = excluded.rental_date,
             inventory_id = excluded.inventory_id,
             customer_id = excluded.customer_id,
             return_date = excluded.return_date",
        params![
            rental.id,
            rental.rental_date,
            rental.inventory_id,
            rental.customer_id,
            rental.return_date,
        ],
    )?;
    Ok(())
}

pub fn upsert_payment(conn: &Connection, payment: &Payment) -> Result<(), SeedError> {
    conn.execute(
        "INSERT INTO payment (payment_id, customer_id, rental_id, amount, payment_date)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(payment_id) DO UPDATE SET
             customer_id = excluded.customer_id,
             rental_id = excluded.rental_id,
             amount = excluded.amount,
             payment_date = excluded.payment_date",
        params![
            payment.id,
            payment.customer_id,
            payment.rental_id,
            payment.amount,
            payment.payment_date,
        ],
    )?;
    Ok(())
}

// ── Seeding ─────────────────────────────────────────────────────────────────

/// Write a whole dataset in dependency order inside one transaction.
///
/// Rows are upserted by id, so seeding the same dataset twice leaves the
/// database unchanged. On error nothing is written.
pub fn seed_dataset(conn: &Connection, dataset: &Dataset) -> Result<SeedStats, SeedError> {
    let tx = conn.unchecked_transaction()?;
    let mut stats = SeedStats::default();

    for language in &dataset.languages {
        upsert_language(&tx, language)?;
        stats.languages += 1;
    }
    for category in &dataset.categories {
        upsert_category(&tx, category)?;
        stats.categories += 1;
    }
    for actor in &dataset.actors {
        upsert_actor(&tx, actor)?;
        stats.actors += 1;
    }
    for film in &dataset.films {
        upsert_film(&tx, film)?;
        stats.films += 1;
    }
    for country in &dataset.countries {
        upsert_country(&tx, country)?;
        stats.countries += 1;
    }
    for city in &dataset.cities {
        upsert_city(&tx, city)?;
        stats.cities += 1;
    }
    for address in &dataset.addresses {
        upsert_address(&tx, address)?;
        stats.addresses += 1;
    }
    for customer in &dataset.customers {
        upsert_customer(&tx, customer)?;
        stats.customers += 1;
    }
    for item in &dataset.inventory {
        upsert_inventory(&tx, item)?;
        stats.inventory += 1;
    }
    for rental in &dataset.rentals {
        upsert_rental(&tx, rental)?;
        stats.rentals += 1;
    }
    for payment in &dataset.payments {
        upsert_payment(&tx, payment)?;
        stats.payments += 1;
    }

    tx.commit()?;
    log::info!("Seeded {} rows", stats.total());
    Ok(stats)
}

/// Rows written per table by [`seed_dataset`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SeedStats {
    pub languages: usize,
    pub categories: usize,
    pub actors: usize,
    pub films: usize,
    pub countries: usize,
    pub cities: usize,
    pub addresses: usize,
    pub customers: usize,
    pub inventory: usize,
    pub rentals: usize,
    pub payments: usize,
}

impl SeedStats {
    pub fn total(&self) -> usize {
        self.languages
            + self.categories
            + self.actors
            + self.films
            + self.countries
            + self.cities
            + self.addresses
            + self.customers
            + self.inventory
            + self.rentals
            + self.payments
    }
}

// ── Helpers ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Parent {
    Language,
    Category,
    Actor,
}

impl Parent {
    fn entity(self) -> &'static str {
        match self {
            Parent::Language => "language",
            Parent::Category => "category",
            Parent::Actor => "actor",
        }
    }

    fn exists_sql(self) -> &'static str {
        match self {
            Parent::Language => "SELECT EXISTS(SELECT 1 FROM language WHERE language_id = ?1)",
            Parent::Category => "SELECT EXISTS(SELECT 1 FROM category WHERE category_id = ?1)",
            Parent::Actor => "SELECT EXISTS(SELECT 1 FROM actor WHERE actor_id = ?1)",
        }
    }
}

fn ensure_exists(conn: &Connection, parent: Parent, id: i64) -> Result<(), SeedError> {
    let exists: bool = conn.query_row(parent.exists_sql(), [id], |row| row.get(0))?;
    if exists {
        Ok(())
    } else {
        Err(SeedError::MissingReference {
            entity: parent.entity(),
            id,
        })
    }
}
