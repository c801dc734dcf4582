//! Companion-template loading.

use std::io;
use std::path::Path;

use crate::template_fs::TemplateFs;

/// How a template read ended.
///
/// Missing files are part of normal operation (most entry files have no
/// companion template) and are kept apart from genuine read faults so the
/// caller can log them at different levels.
#[derive(Debug)]
pub(crate) enum TemplateSource {
    /// The template file exists and was read completely.
    Loaded(String),
    /// No file at the template path.
    Missing,
    /// The file exists but could not be read.
    Unreadable(io::Error),
}

pub(crate) async fn load_template(path: &Path, fs: &dyn TemplateFs) -> TemplateSource {
    match fs.read_to_string(path).await {
        Ok(contents) => TemplateSource::Loaded(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => TemplateSource::Missing,
        Err(err) => TemplateSource::Unreadable(err),
    }
}
