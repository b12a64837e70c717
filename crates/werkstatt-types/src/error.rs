use thiserror::Error;

/// Failure of a single `/ask` round trip.
///
/// The chat widget treats every variant the same way (one fallback
/// message); the variants exist so the cause can be logged.
#[derive(Debug, Error)]
pub enum AskError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("answer service returned status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Errors related to page lookup and rendering.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found: '{0}'")]
    NotFound(String),

    #[error("template '{template}' unreadable: {message}")]
    Template { template: String, message: String },
}

/// Errors from loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}
