//! Test utilities and helper functions for the template-inlay test suite

use std::path::{Path, PathBuf};

use anyhow::Result;
use tempfile::TempDir;

/// Creates a temporary directory acting as a build root
#[allow(dead_code)]
pub fn create_build_root() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Initializes env_logger once so RUST_LOG=debug surfaces collector logs
#[allow(dead_code)]
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a component folder with an entry file and returns the entry path
#[allow(dead_code)]
pub fn create_component(root: &Path, folder: &str, entry_file: &str) -> Result<PathBuf> {
    let dir = root.join(folder);
    std::fs::create_dir_all(&dir)?;
    let entry = dir.join(entry_file);
    std::fs::write(&entry, "export default {};\n")?;
    Ok(entry)
}

/// Writes the component's companion template next to its entry file
#[allow(dead_code)]
pub fn write_template(entry: &Path, html: &str) -> Result<()> {
    let dir = entry
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Entry file has no parent folder"))?;
    std::fs::write(dir.join("index.html"), html)?;
    Ok(())
}

/// Writes a stylesheet file into the component folder
#[allow(dead_code)]
pub fn write_stylesheet(entry: &Path, file_name: &str, css: &str) -> Result<()> {
    let dir = entry
        .parent()
        .ok_or_else(|| anyhow::anyhow!("Entry file has no parent folder"))?;
    std::fs::write(dir.join(file_name), css)?;
    Ok(())
}

/// Builds a minimal template with one stylesheet link
#[allow(dead_code)]
pub fn template_with_link(href: &str) -> String {
    format!("<template><link href=\"{href}\"></template>")
}
