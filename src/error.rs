//! Error types for mailsort.
//!
//! Classification itself is total and never fails: malformed or missing
//! fields degrade to empty strings. The only fallible surfaces are the mail
//! source boundary and the CLI configuration.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Channel error: {0}")]
    Channel(#[from] ChannelError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Mail source errors.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    #[error("Failed to read mailbox {path}: {reason}")]
    Fetch { path: String, reason: String },

    #[error("Malformed mailbox {path}: {reason}")]
    InvalidMailbox { path: String, reason: String },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
