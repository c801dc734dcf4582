//! File-system capability behind every collector read.
//!
//! The collector never touches the disk directly. All template and
//! stylesheet reads go through [`TemplateFs`] so hosts can point it at the
//! real file system, a bundler's virtual tree, or an in-memory fixture.

use std::collections::HashMap;
use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::{Mutex, PoisonError};

/// Boxed future returned by [`TemplateFs::read_to_string`].
pub type ReadFuture<'a> = Pin<Box<dyn Future<Output = io::Result<String>> + Send + 'a>>;

/// Read access to template and stylesheet files.
pub trait TemplateFs: Send + Sync {
    /// Read the entire file at `path` as UTF-8 text.
    ///
    /// Implementations must report a missing file as
    /// [`io::ErrorKind::NotFound`]; the collector treats that kind as an
    /// expected skip rather than a fault.
    fn read_to_string<'a>(&'a self, path: &'a Path) -> ReadFuture<'a>;
}

/// [`TemplateFs`] backed by the real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFs;

impl TemplateFs for DiskFs {
    fn read_to_string<'a>(&'a self, path: &'a Path) -> ReadFuture<'a> {
        Box::pin(tokio::fs::read_to_string(path))
    }
}

/// In-memory [`TemplateFs`] for tests and virtual component trees.
///
/// Lookups are by exact path equality, so fixtures must be registered
/// under the same paths the collector derives from its input files.
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: Mutex<HashMap<PathBuf, String>>,
}

impl MemoryFs {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `contents` under `path`, replacing any previous entry.
    pub fn insert(&self, path: impl Into<PathBuf>, contents: impl Into<String>) {
        let mut files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
        files.insert(path.into(), contents.into());
    }
}

impl TemplateFs for MemoryFs {
    fn read_to_string<'a>(&'a self, path: &'a Path) -> ReadFuture<'a> {
        Box::pin(async move {
            let files = self.files.lock().unwrap_or_else(PoisonError::into_inner);
            match files.get(path) {
                Some(contents) => Ok(contents.clone()),
                None => Err(io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("No in-memory file at {}", path.display()),
                )),
            }
        })
    }
}
