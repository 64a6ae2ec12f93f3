//! SQLite-backed film-rental reports.
//!
//! Provides schema creation, dataset seeding, the [`QueryExecutor`]
//! capability (implemented for `rusqlite::Connection`), and the report
//! dispatcher with every film-rental report.

pub mod dispatch;
pub mod executor;
pub mod operations;
pub mod queries;
pub mod schema;

pub use dispatch::{
    build_query, run_report, validate, Constraint, ParamKind, ParamSpec, QueryPlan, ReportDef,
    ValidatedArgs,
};
pub use executor::{Query, QueryExecutor};
pub use operations::{seed_dataset, SeedError, SeedStats};
pub use queries::{
    avg_amount_by_length, category_statistic_length, client_by_sum_length, client_from_city,
    film_cast, film_in_category, film_in_category_case_insensitive, film_title_case_insensitive,
    find_report, number_film_by_length, number_films_in_category, AVG_AMOUNT_BY_LENGTH,
    CATEGORY_STATISTIC_LENGTH, CLIENT_BY_SUM_LENGTH, CLIENT_FROM_CITY, DEFAULT_MAX_LENGTH,
    DEFAULT_MIN_LENGTH, FILM_CAST, FILM_IN_CATEGORY, FILM_IN_CATEGORY_CASE_INSENSITIVE,
    FILM_TITLE_CASE_INSENSITIVE, NUMBER_FILMS_IN_CATEGORY, NUMBER_FILM_BY_LENGTH, REPORTS,
};
pub use schema::{open_database, open_memory, SchemaError};
