use thiserror::Error;

pub type Result<T> = std::result::Result<T, DashboardError>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Invalid page index {0}: pages start at 1")]
    InvalidPage(usize),

    #[error("Invalid order ID format: {0}")]
    InvalidOrderId(String),

    #[error("Invalid order status: {0}")]
    InvalidStatus(String),

    #[error("Invalid theme mode: {0}")]
    InvalidTheme(String),

    #[error("Invalid date: {0}")]
    InvalidDate(#[from] chrono::ParseError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Query string error: {0}")]
    QueryStringError(#[from] serde_qs::Error),
}
