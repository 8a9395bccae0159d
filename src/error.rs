use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    /// Rotation period, roster split or aircraft reference airport is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No reservations were found in the requested window
    #[error("No events in the query window")]
    EmptyDataset,

    #[error("Could not login: {0}")]
    Login(String),

    #[error("Invalid booking timestamp '{value}': {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config file: {0}")]
    ConfigFormat(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StatsError {
    pub fn config(message: impl Into<String>) -> Self {
        StatsError::Configuration(message.into())
    }
}
