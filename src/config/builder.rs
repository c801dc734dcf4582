//! Type-safe builder for `CollectorConfig` using the typestate pattern
//!
//! This module provides a fluent builder interface with compile-time validation
//! ensuring that the selection pattern is set before building a `CollectorConfig`.

use std::marker::PhantomData;

use regex::Regex;

use crate::errors::ConfigError;

use super::types::CollectorConfig;

/// Compile the selection pattern into a regex
///
/// This is done once at config creation time so selection never compiles
/// regexes per file.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidPattern`] if the pattern is not a valid
/// regular expression.
fn compile_test_pattern(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

// Type state for the builder
pub struct WithTest;

pub struct CollectorConfigBuilder<State = ()> {
    pub(crate) test: Option<String>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CollectorConfigBuilder<()> {
    fn default() -> Self {
        Self {
            test: None,
            _phantom: PhantomData,
        }
    }
}

impl CollectorConfig {
    /// Create a builder for configuring a `CollectorConfig` with a fluent interface
    ///
    /// # Example
    /// ```rust
    /// # use template_inlay::CollectorConfig;
    /// # fn main() -> anyhow::Result<()> {
    /// let config = CollectorConfig::builder()
    ///     .test(r"index\.js$")
    ///     .build()?;
    /// # Ok(())
    /// # }
    /// ```
    #[must_use]
    pub fn builder() -> CollectorConfigBuilder<()> {
        CollectorConfigBuilder::default()
    }
}

impl CollectorConfigBuilder<()> {
    /// Set the regular expression that selects entry files from the host's
    /// build file list.
    pub fn test(self, pattern: impl Into<String>) -> CollectorConfigBuilder<WithTest> {
        CollectorConfigBuilder {
            test: Some(pattern.into()),
            _phantom: PhantomData,
        }
    }
}

// Build method only available once the selection pattern is set
impl CollectorConfigBuilder<WithTest> {
    /// Validate the selection pattern and build the config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPattern`] if the selection pattern does
    /// not compile as a regular expression.
    pub fn build(self) -> Result<CollectorConfig, ConfigError> {
        let test = self.test.ok_or(ConfigError::MissingPattern)?;

        // Compile the pattern once at config creation
        let test_compiled = compile_test_pattern(&test)?;

        Ok(CollectorConfig {
            test,
            test_compiled,
        })
    }
}
