//! YAML loading for seed datasets.
//!
//! A dataset path may be a single `.yaml` file or a directory of them; a
//! directory is read in file-name order and merged into one [`Dataset`].

use std::path::Path;

use thiserror::Error;

use crate::dataset::Dataset;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_yml::Error,
    },
    #[error("Dataset not found: {0}")]
    NotFound(String),
}

/// Parse a dataset from YAML text. `origin` labels parse errors.
pub fn parse_dataset(yaml: &str, origin: &str) -> Result<Dataset, DatasetError> {
    serde_yml::from_str(yaml).map_err(|e| DatasetError::Parse {
        path: origin.to_string(),
        source: e,
    })
}

/// Load a dataset from a YAML file or a directory of YAML files.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.display().to_string()));
    }
    if path.is_file() {
        return load_dataset_file(path);
    }

    let mut entries: Vec<_> = std::fs::read_dir(path)
        .map_err(|e| DatasetError::Io {
            path: path.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());

    let mut dataset = Dataset::default();
    for entry in entries {
        dataset.merge(load_dataset_file(&entry.path())?);
    }
    Ok(dataset)
}

fn load_dataset_file(path: &Path) -> Result<Dataset, DatasetError> {
    let contents = std::fs::read_to_string(path).map_err(|e| DatasetError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    parse_dataset(&contents, &path.display().to_string())
}
