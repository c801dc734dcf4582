//! Configuration module for template collection
//!
//! This module provides the `CollectorConfig` struct and its type-safe
//! builder for configuring which build files are treated as component
//! entry points.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod types;

// Re-exports for public API
pub use builder::{CollectorConfigBuilder, WithTest};
pub use types::CollectorConfig;
