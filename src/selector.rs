//! Entry-file selection and companion-template derivation.
//!
//! The host hands the collector every file its build touched. This module
//! narrows that list down to the entry files the configured pattern cares
//! about and derives, for each one, the component folder and the
//! `index.html` template expected to sit next to the entry file.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::TEMPLATE_FILE_NAME;

/// One selected entry file and the template lookup derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateCandidate {
    /// Entry file name without its final extension. Becomes the suffix of
    /// the emitted head-tag id.
    pub name: String,
    /// Directory containing the entry file. Relative stylesheet hrefs
    /// resolve against this folder.
    pub folder_path: PathBuf,
    /// `folder_path` joined with the fixed template file name.
    pub template_path: PathBuf,
}

/// Filter `files` by `pattern` and derive a [`TemplateCandidate`] for each
/// match, preserving input order.
///
/// The pattern is matched against the textual form of the whole path, the
/// same string the host's build graph carries. Matched paths that have no
/// usable file stem or parent directory are skipped with a debug log;
/// nothing here touches the file system.
#[must_use]
pub fn select_candidates(files: &[PathBuf], pattern: &Regex) -> Vec<TemplateCandidate> {
    files
        .iter()
        .filter(|path| pattern.is_match(&path.to_string_lossy()))
        .filter_map(|path| {
            let candidate = candidate_for(path);
            if candidate.is_none() {
                log::debug!(
                    "Skipping matched path without a usable file stem or parent: {}",
                    path.display()
                );
            }
            candidate
        })
        .collect()
}

fn candidate_for(path: &Path) -> Option<TemplateCandidate> {
    let name = path.file_stem()?.to_string_lossy().into_owned();
    let folder_path = path.parent()?.to_path_buf();
    let template_path = folder_path.join(TEMPLATE_FILE_NAME);
    Some(TemplateCandidate {
        name,
        folder_path,
        template_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(raw: &[&str]) -> Vec<PathBuf> {
        raw.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_selects_only_paths_matching_the_pattern() {
        let files = paths(&[
            "/app/src/card/index.js",
            "/app/src/card/style.css",
            "/app/src/nav/index.js",
            "/app/src/nav/readme.md",
        ]);
        let pattern = Regex::new(r"index\.js$").unwrap();

        let candidates = select_candidates(&files, &pattern);

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].folder_path, PathBuf::from("/app/src/card"));
        assert_eq!(candidates[1].folder_path, PathBuf::from("/app/src/nav"));
    }

    #[test]
    fn test_preserves_input_order() {
        let files = paths(&["/z/index.js", "/a/index.js", "/m/index.js"]);
        let pattern = Regex::new(r"index\.js$").unwrap();

        let folders: Vec<_> = select_candidates(&files, &pattern)
            .into_iter()
            .map(|candidate| candidate.folder_path)
            .collect();

        assert_eq!(
            folders,
            vec![
                PathBuf::from("/z"),
                PathBuf::from("/a"),
                PathBuf::from("/m")
            ]
        );
    }

    #[test]
    fn test_derives_name_from_file_stem() {
        let files = paths(&["/app/widget/card.entry.js"]);
        let pattern = Regex::new(r"\.js$").unwrap();

        let candidates = select_candidates(&files, &pattern);

        // Only the final extension is stripped.
        assert_eq!(candidates[0].name, "card.entry");
    }

    #[test]
    fn test_derives_template_path_inside_entry_folder() {
        let files = paths(&["/app/widget/index.js"]);
        let pattern = Regex::new(r"index\.js$").unwrap();

        let candidates = select_candidates(&files, &pattern);

        assert_eq!(
            candidates[0].template_path,
            PathBuf::from("/app/widget/index.html")
        );
    }

    #[test]
    fn test_skips_degenerate_paths() {
        let files = paths(&["/"]);
        let pattern = Regex::new(".*").unwrap();

        assert!(select_candidates(&files, &pattern).is_empty());
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        let pattern = Regex::new(r"index\.js$").unwrap();

        assert!(select_candidates(&[], &pattern).is_empty());
    }
}
