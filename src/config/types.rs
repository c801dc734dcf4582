//! Core configuration type for template collection
//!
//! This module contains the `CollectorConfig` struct that defines which
//! files from a host build are treated as component entry points.

use regex::Regex;
use serde::Serialize;

/// Configuration for a template collection run.
///
/// Obtained through [`CollectorConfig::builder`], which validates the
/// selection pattern up front. The struct serializes for diagnostics;
/// deserialization is deliberately absent so every config passes through
/// builder validation.
#[derive(Debug, Clone, Serialize)]
pub struct CollectorConfig {
    /// Source text of the entry-file selection pattern.
    ///
    /// Matched against the textual form of every path the host build
    /// reports. Kept alongside the compiled form for serialization and
    /// log output.
    pub(crate) test: String,

    /// Compiled form of `test`.
    ///
    /// **INVARIANT:** always the compiled form of `test`, produced by the
    /// builder. Pre-compiled at config creation to avoid per-file regex
    /// compilation during selection.
    #[serde(skip)]
    pub(crate) test_compiled: Regex,
}
