//! Film-rental report data model, argument values, and dataset YAML I/O.
//!
//! This crate has no database dependencies. It defines the dynamically-typed
//! arguments callers hand to reports, the tabular results reports return,
//! and the seed dataset format consumed by `film-reports-db`.

pub mod dataset;
pub mod loader;
pub mod table;
pub mod value;

pub use dataset::*;
pub use loader::{load_dataset, parse_dataset, DatasetError};
pub use table::{ResultTable, Row};
pub use value::{Arg, Value};
