//! Template collection pipeline
//!
//! Ties selection, inlining, and head-tag assembly together behind the
//! [`TemplateCollector`] facade. The collector is handed the file list of
//! a finished build and returns the head tags the host should inject.

pub mod head_tags;

pub use head_tags::HeadTag;

use std::path::PathBuf;
use std::sync::Arc;

use futures::future::join_all;

use crate::config::CollectorConfig;
use crate::inliner::{self, InlinedResult};
use crate::selector::select_candidates;
use crate::template_fs::{DiskFs, TemplateFs};

/// Collects component templates for injection into a host document.
///
/// Holds the validated config plus the file-system capability all reads go
/// through. New collectors read from the real disk; swap the capability
/// with [`TemplateCollector::with_fs`] for tests or virtual trees.
///
/// # Example
/// ```rust,no_run
/// # use std::path::PathBuf;
/// # use template_inlay::{CollectorConfig, TemplateCollector};
/// # #[tokio::main]
/// # async fn main() -> anyhow::Result<()> {
/// let config = CollectorConfig::builder().test(r"index\.js$").build()?;
/// let collector = TemplateCollector::new(config);
///
/// let tags = collector
///     .collect(&[PathBuf::from("src/card/index.js")])
///     .await;
/// for tag in tags {
///     println!("{}", tag.to_html());
/// }
/// # Ok(())
/// # }
/// ```
pub struct TemplateCollector {
    config: CollectorConfig,
    fs: Arc<dyn TemplateFs>,
}

impl TemplateCollector {
    /// Create a collector reading from the real file system.
    #[must_use]
    pub fn new(config: CollectorConfig) -> Self {
        Self {
            config,
            fs: Arc::new(DiskFs),
        }
    }

    /// Replace the file-system capability behind all template and
    /// stylesheet reads.
    #[must_use]
    pub fn with_fs(mut self, fs: Arc<dyn TemplateFs>) -> Self {
        self.fs = fs;
        self
    }

    #[must_use]
    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    /// Collect head tags for every file of a finished build.
    ///
    /// Selection is synchronous; the selected candidates are then inlined
    /// concurrently. Results keep input order, and candidates whose
    /// templates produced no markup are dropped.
    pub async fn collect(&self, files: &[PathBuf]) -> Vec<HeadTag> {
        let candidates = select_candidates(files, self.config.test_compiled());
        log::debug!(
            "Selected {} template candidate(s) from {} build file(s)",
            candidates.len(),
            files.len()
        );

        // Collect all futures (don't await yet!)
        let futures = candidates.into_iter().map(|candidate| {
            let fs = Arc::clone(&self.fs);
            inliner::inline(candidate, fs)
        });

        // Inline every candidate concurrently
        let results = join_all(futures).await;

        results
            .into_iter()
            .filter_map(|InlinedResult { name, inner_html }| {
                inner_html.map(|html| HeadTag::new(&name, html))
            })
            .collect()
    }
}

/// Collect head tags for `files` with a one-off collector on the real
/// file system.
pub async fn collect_head_tags(files: &[PathBuf], config: CollectorConfig) -> Vec<HeadTag> {
    TemplateCollector::new(config).collect(files).await
}
