pub mod collector;
pub mod config;
pub mod constants;
pub mod errors;
pub mod inliner;
pub mod selector;
pub mod template_fs;

pub use collector::{HeadTag, TemplateCollector, collect_head_tags};
pub use config::{CollectorConfig, CollectorConfigBuilder};
pub use errors::ConfigError;
pub use inliner::{InlinedResult, inline, is_local_href};
pub use selector::{TemplateCandidate, select_candidates};
pub use template_fs::{DiskFs, MemoryFs, ReadFuture, TemplateFs};
