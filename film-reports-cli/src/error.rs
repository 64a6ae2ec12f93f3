use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database open, seed, or query failed
    #[error("Database error: {0}")]
    Database(String),

    /// Settings file or database path problem
    #[error("Config error: {0}")]
    Config(String),

    /// Dataset file could not be read
    #[error("Dataset error: {0}")]
    Dataset(#[from] film_reports_model::DatasetError),

    /// Result rendering failed
    #[error("Output error: {0}")]
    Output(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn output(msg: impl Into<String>) -> Self {
        Self::Output(msg.into())
    }
}
