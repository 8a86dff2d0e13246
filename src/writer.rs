//! Persisting finished catalogs

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CatalogError, Result};

/// Default name of the catalog file written into the scanned root.
pub const CATALOG_FILE_NAME: &str = "folder_catalog.txt";

/// Receives the finished catalog text once per build.
pub trait CatalogWriter {
    /// Persist `text` for the catalog of `root`, returning where it went.
    fn write_catalog(&mut self, root: &Path, text: &str) -> Result<PathBuf>;
}

/// Writes the catalog as UTF-8 into a file inside the root.
#[derive(Debug, Clone)]
pub struct FileCatalogWriter {
    file_name: String,
}

impl FileCatalogWriter {
    pub fn new() -> Self {
        Self::with_file_name(CATALOG_FILE_NAME)
    }

    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn target(&self, root: &Path) -> PathBuf {
        root.join(&self.file_name)
    }
}

impl Default for FileCatalogWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogWriter for FileCatalogWriter {
    fn write_catalog(&mut self, root: &Path, text: &str) -> Result<PathBuf> {
        let path = self.target(root);
        fs::write(&path, text).map_err(|source| CatalogError::Write {
            path: path.clone(),
            source,
        })?;
        log::info!("wrote catalog to {}", path.display());
        Ok(path)
    }
}

/// Keeps catalogs in memory. Handy when persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemoryCatalogWriter {
    pub written: Vec<(PathBuf, String)>,
}

impl CatalogWriter for MemoryCatalogWriter {
    fn write_catalog(&mut self, root: &Path, text: &str) -> Result<PathBuf> {
        self.written.push((root.to_path_buf(), text.to_string()));
        Ok(root.to_path_buf())
    }
}
