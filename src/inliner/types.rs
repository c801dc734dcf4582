//! Result types for template inlining.

use serde::{Deserialize, Serialize};

/// Outcome of inlining a single template candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlinedResult {
    /// Candidate name, unchanged from selection.
    pub name: String,
    /// Serialized inner markup of the rewritten template, or `None` when
    /// the template file or its root element was missing, unreadable, or
    /// empty after rewriting.
    pub inner_html: Option<String>,
}

impl InlinedResult {
    /// Result for a candidate that contributes no markup.
    pub(crate) fn skipped(name: String) -> Self {
        Self {
            name,
            inner_html: None,
        }
    }
}
