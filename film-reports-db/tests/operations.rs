use film_reports_db::operations::*;
use film_reports_db::open_memory;
use film_reports_model::*;

const SAMPLE: &str = include_str!("../../data/sample.yaml");

fn sample() -> Dataset {
    parse_dataset(SAMPLE, "sample.yaml").unwrap()
}

fn count(conn: &rusqlite::Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn seed_sample_dataset() {
    let conn = open_memory().unwrap();
    let stats = seed_dataset(&conn, &sample()).unwrap();

    assert_eq!(stats.languages, 3);
    assert_eq!(stats.films, 14);
    assert_eq!(stats.customers, 4);
    assert_eq!(stats.payments, 8);
    assert_eq!(stats.total(), sample().row_count());

    assert_eq!(count(&conn, "film"), 14);
    assert_eq!(count(&conn, "film_category"), 14);
    assert_eq!(count(&conn, "film_actor"), 5);
    assert_eq!(count(&conn, "rental"), 8);
}

#[test]
fn seeding_twice_is_idempotent() {
    let conn = open_memory().unwrap();
    let ds = sample();
    let first = seed_dataset(&conn, &ds).unwrap();
    let second = seed_dataset(&conn, &ds).unwrap();
    assert_eq!(first, second);

    assert_eq!(count(&conn, "film"), 14);
    assert_eq!(count(&conn, "film_category"), 14);
    assert_eq!(count(&conn, "customer"), 4);
}

#[test]
fn upsert_film_replaces_links() {
    let conn = open_memory().unwrap();
    seed_dataset(&conn, &sample()).unwrap();

    let mut film = sample().films[0].clone();
    film.title = "Academy Dinosaur (Director's Cut)".to_string();
    film.categories = vec![1, 3];
    film.actors = vec![];
    upsert_film(&conn, &film).unwrap();

    let title: String = conn
        .query_row("SELECT title FROM film WHERE film_id = 1", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(title, "Academy Dinosaur (Director's Cut)");

    let categories: Vec<i64> = conn
        .prepare("SELECT category_id FROM film_category WHERE film_id = 1 ORDER BY category_id")
        .unwrap()
        .query_map([], |row| row.get(0))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(categories, vec![1, 3]);

    let actors: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM film_actor WHERE film_id = 1",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(actors, 0);
}

#[test]
fn missing_category_is_reported() {
    let conn = open_memory().unwrap();
    upsert_language(
        &conn,
        &Language {
            id: 1,
            name: "English".to_string(),
        },
    )
    .unwrap();

    let film = Film {
        id: 1,
        title: "Orphan Film".to_string(),
        description: None,
        release_year: None,
        language_id: 1,
        length: Some(90),
        rental_rate: 0.99,
        rating: None,
        categories: vec![42],
        actors: vec![],
    };
    match upsert_film(&conn, &film) {
        Err(SeedError::MissingReference { entity, id }) => {
            assert_eq!(entity, "category");
            assert_eq!(id, 42);
        }
        other => panic!("expected missing reference, got {other:?}"),
    }
}

#[test]
fn failed_seed_writes_nothing() {
    let conn = open_memory().unwrap();
    let mut ds = sample();
    ds.films[3].language_id = 99;

    assert!(seed_dataset(&conn, &ds).is_err());
    assert_eq!(count(&conn, "language"), 0);
    assert_eq!(count(&conn, "film"), 0);
}

#[test]
fn broken_foreign_key_is_sqlite_error() {
    let conn = open_memory().unwrap();
    let customer = Customer {
        id: 1,
        first_name: "Mary".to_string(),
        last_name: "Smith".to_string(),
        email: None,
        address_id: 404,
        active: true,
    };
    let err = upsert_customer(&conn, &customer).unwrap_err();
    assert!(matches!(err, SeedError::Sqlite(_)));
}
