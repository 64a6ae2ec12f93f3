//! The film-rental reports.
//!
//! Each public function is a thin wrapper over [`run_report`] with the
//! matching [`ReportDef`]. All of them return `Ok(None)` when the arguments
//! are rejected, and pass executor errors through unchanged.

use film_reports_model::{Arg, ResultTable};

use crate::dispatch::{run_report, Constraint, ParamKind, ParamSpec, QueryPlan, ReportDef};
use crate::executor::QueryExecutor;

/// Default lower bound for [`number_film_by_length`].
pub const DEFAULT_MIN_LENGTH: i64 = 0;
/// Default upper bound for [`number_film_by_length`].
pub const DEFAULT_MAX_LENGTH: i64 = 1_000_000;

// ── Films by Category ───────────────────────────────────────────────────────

pub const FILM_IN_CATEGORY: ReportDef = ReportDef {
    name: "film_in_category",
    description: "Film title, language, and category for a category id or exact category name",
    params: &[ParamSpec::new("category", ParamKind::IntegerOrText)],
    columns: &["title", "language", "category"],
    order_by: &["title", "language"],
    plan: QueryPlan::ByKind {
        integer: "SELECT film.title AS title, language.name AS language, category.name AS category
                  FROM film
                  JOIN film_category ON film_category.film_id = film.film_id
                  JOIN category ON category.category_id = film_category.category_id
                  JOIN language ON language.language_id = film.language_id
                  WHERE film_category.category_id = ?1
                  ORDER BY title, language",
        text: "SELECT film_list.title AS title, language.name AS language, film_list.category AS category
               FROM film_list
               JOIN film ON film.film_id = film_list.fid
               JOIN language ON language.language_id = film.language_id
               WHERE film_list.category = ?1
               ORDER BY title, language",
    },
};

pub const NUMBER_FILMS_IN_CATEGORY: ReportDef = ReportDef {
    name: "number_films_in_category",
    description: "Number of films in the category with the given id",
    params: &[ParamSpec::new("category_id", ParamKind::Integer)],
    columns: &["category", "count"],
    order_by: &[],
    plan: QueryPlan::Fixed(
        "SELECT film_list.category AS category, COUNT(film_list.title) AS count
         FROM film_list
         JOIN category ON category.name = film_list.category
         WHERE category.category_id = ?1
         GROUP BY film_list.category",
    ),
};

pub const FILM_IN_CATEGORY_CASE_INSENSITIVE: ReportDef = ReportDef {
    name: "film_in_category_case_insensitive",
    description: "Like film_in_category, matching the category name case-insensitively",
    params: &[ParamSpec::new("category", ParamKind::IntegerOrText)],
    columns: &["title", "language", "category"],
    order_by: &["title", "language"],
    plan: QueryPlan::NotImplemented,
};

// ── Films by Length ─────────────────────────────────────────────────────────

pub const NUMBER_FILM_BY_LENGTH: ReportDef = ReportDef {
    name: "number_film_by_length",
    description: "Number of films for each distinct length in an inclusive range",
    params: &[
        ParamSpec::new("min_length", ParamKind::Number),
        ParamSpec::new("max_length", ParamKind::Number)
            .with(Constraint::NotLessThan("min_length")),
    ],
    columns: &["length", "count"],
    order_by: &["length"],
    plan: QueryPlan::Fixed(
        "SELECT film.length AS length, COUNT(film.title) AS count
         FROM film
         WHERE film.length BETWEEN ?1 AND ?2
         GROUP BY film.length
         ORDER BY film.length",
    ),
};

pub const CATEGORY_STATISTIC_LENGTH: ReportDef = ReportDef {
    name: "category_statistic_length",
    description: "Average, total, shortest, and longest film length in a named category",
    params: &[ParamSpec::new("name", ParamKind::Text)],
    columns: &["category", "avg", "sum", "min", "max"],
    order_by: &[],
    plan: QueryPlan::Fixed(
        "SELECT category.name AS category, AVG(film.length) AS avg, SUM(film.length) AS sum,
                MIN(film.length) AS min, MAX(film.length) AS max
         FROM film
         JOIN film_category ON film_category.film_id = film.film_id
         JOIN category ON category.category_id = film_category.category_id
         WHERE category.name = ?1
         GROUP BY category.name",
    ),
};

// ── Films by Title ──────────────────────────────────────────────────────────

pub const FILM_CAST: ReportDef = ReportDef {
    name: "film_cast",
    description: "Cast of the film with exactly the given title",
    params: &[ParamSpec::new("title", ParamKind::Text)],
    columns: &["first_name", "last_name"],
    order_by: &["last_name", "first_name"],
    plan: QueryPlan::NotImplemented,
};

pub const FILM_TITLE_CASE_INSENSITIVE: ReportDef = ReportDef {
    name: "film_title_case_insensitive",
    description: "Titles containing at least one of the given words",
    params: &[ParamSpec::new("words", ParamKind::TextList)],
    columns: &["title"],
    order_by: &["title"],
    plan: QueryPlan::NotImplemented,
};

// ── Customers ───────────────────────────────────────────────────────────────

pub const CLIENT_FROM_CITY: ReportDef = ReportDef {
    name: "client_from_city",
    description: "Customers living in the city with exactly the given name",
    params: &[ParamSpec::new("city", ParamKind::Text)],
    columns: &["city", "first_name", "last_name"],
    order_by: &["last_name", "first_name"],
    plan: QueryPlan::Fixed(
        "SELECT city.city AS city, customer.first_name AS first_name, customer.last_name AS last_name
         FROM city
         JOIN address ON address.city_id = city.city_id
         JOIN customer ON customer.address_id = address.address_id
         WHERE city.city = ?1
         ORDER BY customer.last_name, customer.first_name",
    ),
};

pub const CLIENT_BY_SUM_LENGTH: ReportDef = ReportDef {
    name: "client_by_sum_length",
    description: "Customers whose rented films add up to more than the given number of minutes",
    params: &[ParamSpec::new("sum_min", ParamKind::Number).with(Constraint::NonNegative)],
    columns: &["first_name", "last_name", "sum"],
    order_by: &["sum", "last_name", "first_name"],
    plan: QueryPlan::Fixed(
        "SELECT customer.first_name AS first_name, customer.last_name AS last_name,
                SUM(film.length) AS sum
         FROM film
         JOIN inventory ON inventory.film_id = film.film_id
         JOIN rental ON rental.inventory_id = inventory.inventory_id
         JOIN customer ON customer.customer_id = rental.customer_id
         GROUP BY customer.customer_id, customer.first_name, customer.last_name
         HAVING SUM(film.length) > ?1
         ORDER BY sum, customer.last_name, customer.first_name",
    ),
};

// ── Payments ────────────────────────────────────────────────────────────────

pub const AVG_AMOUNT_BY_LENGTH: ReportDef = ReportDef {
    name: "avg_amount_by_length",
    description: "Average payment for rentals of films with the given length",
    params: &[ParamSpec::new("length", ParamKind::Number)],
    columns: &["length", "avg"],
    order_by: &[],
    plan: QueryPlan::Fixed(
        "SELECT film.length AS length, AVG(payment.amount) AS avg
         FROM film
         JOIN inventory ON inventory.film_id = film.film_id
         JOIN rental ON rental.inventory_id = inventory.inventory_id
         JOIN payment ON payment.rental_id = rental.rental_id
         WHERE film.length = ?1
         GROUP BY film.length",
    ),
};

// ── Registry ────────────────────────────────────────────────────────────────

/// Every report, implemented or not.
pub const REPORTS: &[ReportDef] = &[
    FILM_IN_CATEGORY,
    NUMBER_FILMS_IN_CATEGORY,
    NUMBER_FILM_BY_LENGTH,
    CLIENT_FROM_CITY,
    AVG_AMOUNT_BY_LENGTH,
    CLIENT_BY_SUM_LENGTH,
    CATEGORY_STATISTIC_LENGTH,
    FILM_IN_CATEGORY_CASE_INSENSITIVE,
    FILM_CAST,
    FILM_TITLE_CASE_INSENSITIVE,
];

/// Look up a report by name.
pub fn find_report(name: &str) -> Option<&'static ReportDef> {
    REPORTS.iter().find(|r| r.name == name)
}

// ── Report Functions ────────────────────────────────────────────────────────

/// Films in a category, by id (`Arg::Int`) or exact name (`Arg::Text`),
/// sorted by title then language.
pub fn film_in_category<E: QueryExecutor + ?Sized>(
    executor: &E,
    category: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &FILM_IN_CATEGORY, &[category.into()])
}

/// Film count for a category id.
pub fn number_films_in_category<E: QueryExecutor + ?Sized>(
    executor: &E,
    category_id: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &NUMBER_FILMS_IN_CATEGORY, &[category_id.into()])
}

/// Film count per distinct length in `[min_length, max_length]`.
///
/// Rejected when `max_length < min_length`. See [`DEFAULT_MIN_LENGTH`] and
/// [`DEFAULT_MAX_LENGTH`] for the conventional open range.
pub fn number_film_by_length<E: QueryExecutor + ?Sized>(
    executor: &E,
    min_length: impl Into<Arg>,
    max_length: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(
        executor,
        &NUMBER_FILM_BY_LENGTH,
        &[min_length.into(), max_length.into()],
    )
}

/// Customers in a city, sorted by last name then first name.
pub fn client_from_city<E: QueryExecutor + ?Sized>(
    executor: &E,
    city: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &CLIENT_FROM_CITY, &[city.into()])
}

/// Average payment amount for films of exactly `length` minutes.
pub fn avg_amount_by_length<E: QueryExecutor + ?Sized>(
    executor: &E,
    length: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &AVG_AMOUNT_BY_LENGTH, &[length.into()])
}

/// Customers whose total rented running time exceeds `sum_min`, sorted by
/// the total, then last name, then first name. Rejected when `sum_min < 0`.
pub fn client_by_sum_length<E: QueryExecutor + ?Sized>(
    executor: &E,
    sum_min: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &CLIENT_BY_SUM_LENGTH, &[sum_min.into()])
}

/// Length statistics for the category with exactly this name.
pub fn category_statistic_length<E: QueryExecutor + ?Sized>(
    executor: &E,
    name: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &CATEGORY_STATISTIC_LENGTH, &[name.into()])
}

/// Not implemented: always `Ok(None)`.
pub fn film_in_category_case_insensitive<E: QueryExecutor + ?Sized>(
    executor: &E,
    category: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &FILM_IN_CATEGORY_CASE_INSENSITIVE, &[category.into()])
}

/// Not implemented: always `Ok(None)`.
pub fn film_cast<E: QueryExecutor + ?Sized>(
    executor: &E,
    title: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &FILM_CAST, &[title.into()])
}

/// Not implemented: always `Ok(None)`.
pub fn film_title_case_insensitive<E: QueryExecutor + ?Sized>(
    executor: &E,
    words: impl Into<Arg>,
) -> Result<Option<ResultTable>, E::Error> {
    run_report(executor, &FILM_TITLE_CASE_INSENSITIVE, &[words.into()])
}
