//! Template loading and stylesheet inlining
//!
//! This module drives the per-candidate pipeline: load the companion
//! template, parse it and plan which linked stylesheets to read, read them
//! concurrently, then rewrite the template content with the stylesheet
//! text inlined.

mod loader;
mod rewrite;
pub mod stylesheet;
pub mod types;

pub use stylesheet::is_local_href;
pub use types::InlinedResult;

use std::sync::Arc;

use kuchiki::traits::TendrilSink;

use crate::selector::TemplateCandidate;
use crate::template_fs::TemplateFs;
use loader::TemplateSource;

/// Inline the linked stylesheets of one template candidate.
///
/// A missing template, a template without a root `<template>` element, and
/// a template read failure all come back as a result with no markup; a
/// failed stylesheet read only costs the affected link its inline style.
/// The candidate name is carried through untouched either way.
pub async fn inline(candidate: TemplateCandidate, fs: Arc<dyn TemplateFs>) -> InlinedResult {
    let TemplateCandidate {
        name,
        folder_path,
        template_path,
    } = candidate;

    let text = match loader::load_template(&template_path, fs.as_ref()).await {
        TemplateSource::Loaded(text) => text,
        TemplateSource::Missing => {
            log::debug!("No companion template at {}", template_path.display());
            return InlinedResult::skipped(name);
        }
        TemplateSource::Unreadable(err) => {
            log::warn!("Failed to read template {}: {err}", template_path.display());
            return InlinedResult::skipped(name);
        }
    };

    // Parse once and plan synchronously; the parse tree is Rc-based and
    // must not be held across an await
    let plans = {
        let document = kuchiki::parse_html().one(text.as_str());
        let Some(content_root) = rewrite::template_content_root(&document) else {
            log::debug!(
                "No root <template> element in {}",
                template_path.display()
            );
            return InlinedResult::skipped(name);
        };
        let links = rewrite::collect_links(&content_root);
        stylesheet::plan_stylesheets(&links, &folder_path)
        // document is dropped here, safe to proceed with async reads
    };

    let styles = stylesheet::read_stylesheets(plans, fs.as_ref()).await;

    let inlined = styles.iter().flatten().count();
    log::debug!(
        "Inlined {inlined} stylesheet(s) into template {}",
        template_path.display()
    );

    let inner_html = rewrite::apply_stylesheets(&text, &styles);
    InlinedResult { name, inner_html }
}
