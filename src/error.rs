//! Error types for the rating tracker
//!
//! Library functions return `anyhow`-backed results; the domain-specific
//! failure cases are modelled by [`EloError`] so callers can downcast.

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
#[derive(Debug, thiserror::Error)]
pub enum EloError {
    #[error("Player cannot play a match against themself: {name}")]
    SelfMatch { name: String },

    #[error("Player not found: {name}")]
    PlayerNotFound { name: String },

    #[error("Player already registered: {name}")]
    DuplicatePlayer { name: String },

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Invalid match log: {reason}")]
    InvalidMatchLog { reason: String },
}
