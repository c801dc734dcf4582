//! Error types for collector configuration.

use thiserror::Error;

/// Errors raised while building a [`crate::config::CollectorConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The selection pattern did not compile as a regular expression.
    #[error("Invalid selection pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// No selection pattern was supplied.
    ///
    /// The typestate builder makes this unreachable through the public API;
    /// it guards in-crate construction paths.
    #[error("A selection pattern is required")]
    MissingPattern,
}
