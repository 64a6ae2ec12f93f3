//! Seed dataset types for the film-rental schema.
//!
//! A [`Dataset`] mirrors the tables the reports read: languages, categories,
//! actors, films, geography, customers, inventory, rentals, and payments.
//! Datasets are authored as YAML and written to SQLite by `film-reports-db`.

use serde::{Deserialize, Serialize};

/// A complete (or partial) set of rows to seed into the database.
///
/// Every section is optional in YAML, so datasets can be split across files
/// and merged with [`Dataset::merge`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub films: Vec<Film>,
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub cities: Vec<City>,
    #[serde(default)]
    pub addresses: Vec<Address>,
    #[serde(default)]
    pub customers: Vec<Customer>,
    #[serde(default)]
    pub inventory: Vec<InventoryItem>,
    #[serde(default)]
    pub rentals: Vec<Rental>,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl Dataset {
    /// Append every section of `other` onto `self`.
    pub fn merge(&mut self, other: Dataset) {
        self.languages.extend(other.languages);
        self.categories.extend(other.categories);
        self.actors.extend(other.actors);
        self.films.extend(other.films);
        self.countries.extend(other.countries);
        self.cities.extend(other.cities);
        self.addresses.extend(other.addresses);
        self.customers.extend(other.customers);
        self.inventory.extend(other.inventory);
        self.rentals.extend(other.rentals);
        self.payments.extend(other.payments);
    }

    /// Total number of rows across all sections.
    pub fn row_count(&self) -> usize {
        self.languages.len()
            + self.categories.len()
            + self.actors.len()
            + self.films.len()
            + self.countries.len()
            + self.cities.len()
            + self.addresses.len()
            + self.customers.len()
            + self.inventory.len()
            + self.rentals.len()
            + self.payments.len()
    }
}

// ── Films ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// A film with its category and cast links inlined.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub release_year: Option<u32>,
    pub language_id: i64,
    /// Running time in minutes.
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default = "default_rental_rate")]
    pub rental_rate: f64,
    /// MPAA rating (G, PG, PG-13, R, NC-17).
    #[serde(default)]
    pub rating: Option<String>,
    /// Category ids.
    #[serde(default)]
    pub categories: Vec<i64>,
    /// Actor ids.
    #[serde(default)]
    pub actors: Vec<i64>,
}

fn default_rental_rate() -> f64 {
    4.99
}

// ── Customers ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    pub id: i64,
    pub country: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub city: String,
    pub country_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: i64,
    pub address: String,
    #[serde(default)]
    pub district: Option<String>,
    pub city_id: i64,
    #[serde(default)]
    pub postal_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    pub address_id: i64,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

// ── Rentals ─────────────────────────────────────────────────────────────────

/// One physical copy of a film held by a store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: i64,
    pub film_id: i64,
    #[serde(default = "default_store")]
    pub store_id: i64,
}

fn default_store() -> i64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rental {
    pub id: i64,
    /// ISO 8601 timestamp.
    pub rental_date: String,
    pub inventory_id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub return_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    pub id: i64,
    pub customer_id: i64,
    #[serde(default)]
    pub rental_id: Option<i64>,
    pub amount: f64,
    pub payment_date: String,
}
