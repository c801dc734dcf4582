//! Getter methods for `CollectorConfig`
//!
//! This module provides the accessor methods for retrieving configuration
//! values from a `CollectorConfig` instance.

use regex::Regex;

use super::types::CollectorConfig;

impl CollectorConfig {
    #[must_use]
    pub fn test(&self) -> &str {
        &self.test
    }

    #[must_use]
    pub fn test_compiled(&self) -> &Regex {
        &self.test_compiled
    }
}
