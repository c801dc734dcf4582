//! Stylesheet link planning and loading
//!
//! Decides which link elements point at local stylesheet files and reads
//! those files concurrently. Remote URLs are recognized and left for the
//! browser; only paths on the collector's file system are ever read.

use std::path::{Path, PathBuf};

use futures::future::join_all;
use kuchiki::{ElementData, NodeDataRef};
use url::Url;

use crate::constants::STYLE_MARKER_PREFIX;
use crate::template_fs::TemplateFs;

/// Decide whether a link href names a stylesheet on the local file system.
///
/// Anything that parses as an absolute URL (`https://...`, `data:`,
/// `file:///...`) is remote and left alone. A parse failure means a bare
/// or relative path, which is the local case. Empty and missing hrefs are
/// not local.
#[must_use]
pub fn is_local_href(href: Option<&str>) -> bool {
    let Some(href) = href else { return false };
    if href.is_empty() {
        return false;
    }
    Url::parse(href).is_err()
}

/// Transient id for the style element inserted in place of the link at
/// `index`. Markers are stripped again before serialization.
#[must_use]
pub fn style_marker(index: usize) -> String {
    format!("{STYLE_MARKER_PREFIX}{index}")
}

/// Map each collected link to the stylesheet file it references, if any.
///
/// Returns one slot per link in document order: `Some(path)` for a local
/// stylesheet resolved against `folder_path`, `None` for links that keep
/// their element as is.
pub(crate) fn plan_stylesheets(
    links: &[NodeDataRef<ElementData>],
    folder_path: &Path,
) -> Vec<Option<PathBuf>> {
    links
        .iter()
        .map(|link| {
            let attributes = link.attributes.borrow();
            let href = attributes.get("href");
            if is_local_href(href) {
                href.map(|href| folder_path.join(href))
            } else {
                None
            }
        })
        .collect()
}

/// Read every planned stylesheet concurrently.
///
/// Output slots stay aligned with the input: slot `i` holds the contents
/// for link `i`. Read failures are logged and absorbed so one broken
/// stylesheet never costs the rest of the template.
pub(crate) async fn read_stylesheets(
    plans: Vec<Option<PathBuf>>,
    fs: &dyn TemplateFs,
) -> Vec<Option<String>> {
    // Collect all futures first, then drive them together
    let reads = plans.into_iter().map(|plan| async move {
        let path = plan?;
        match fs.read_to_string(&path).await {
            Ok(contents) => Some(contents),
            Err(err) => {
                log::error!("Failed to read stylesheet {}: {err}", path.display());
                None
            }
        }
    });

    join_all(reads).await
}
