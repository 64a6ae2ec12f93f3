use film_reports_model::{load_dataset, parse_dataset, DatasetError};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SAMPLE: &str = include_str!("../../data/sample.yaml");

fn write_yaml(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

#[test]
fn parse_sample_dataset() {
    let ds = parse_dataset(SAMPLE, "sample.yaml").unwrap();
    assert_eq!(ds.languages.len(), 3);
    assert_eq!(ds.categories.len(), 4);
    assert_eq!(ds.films.len(), 14);
    assert_eq!(ds.customers.len(), 4);
    assert_eq!(ds.rentals.len(), 8);
    assert_eq!(ds.payments.len(), 8);

    let academy = &ds.films[0];
    assert_eq!(academy.title, "Academy Dinosaur");
    assert_eq!(academy.length, Some(86));
    assert_eq!(academy.categories, vec![4]);
    assert_eq!(academy.actors, vec![1, 2]);
}

#[test]
fn defaults_fill_optional_fields() {
    let ds = parse_dataset(
        r#"
films:
  - id: 1
    title: Untitled
    language_id: 1
customers:
  - id: 7
    first_name: Mary
    last_name: Smith
    address_id: 1
inventory:
  - id: 3
    film_id: 1
"#,
        "inline",
    )
    .unwrap();

    let film = &ds.films[0];
    assert_eq!(film.rental_rate, 4.99);
    assert!(film.length.is_none());
    assert!(film.categories.is_empty());
    assert!(ds.customers[0].active);
    assert_eq!(ds.inventory[0].store_id, 1);
    assert!(ds.languages.is_empty());
}

#[test]
fn load_directory_merges_in_name_order() {
    let tmp = TempDir::new().unwrap();
    write_yaml(
        tmp.path(),
        "02-films.yaml",
        "films:\n  - { id: 1, title: Iron Moon, language_id: 1, length: 46 }\n",
    );
    write_yaml(
        tmp.path(),
        "01-languages.yml",
        "languages:\n  - { id: 1, name: English }\n",
    );
    write_yaml(tmp.path(), "notes.txt", "not yaml at all: [");

    let ds = load_dataset(tmp.path()).unwrap();
    assert_eq!(ds.languages.len(), 1);
    assert_eq!(ds.films.len(), 1);
    assert_eq!(ds.row_count(), 2);
}

#[test]
fn load_single_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("sample.yaml");
    fs::write(&path, SAMPLE).unwrap();

    let ds = load_dataset(&path).unwrap();
    assert_eq!(ds.cities[0].city, "Athenai");
}

#[test]
fn missing_path_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let err = load_dataset(&tmp.path().join("nope.yaml")).unwrap_err();
    assert!(matches!(err, DatasetError::NotFound(_)));
}

#[test]
fn parse_error_names_origin() {
    let err = parse_dataset("films: [ { id: one } ]", "broken.yaml").unwrap_err();
    match err {
        DatasetError::Parse { path, .. } => assert_eq!(path, "broken.yaml"),
        other => panic!("expected parse error, got {other:?}"),
    }
}
