//! Foldercat - walk a folder and write an indented catalog of its files

pub mod catalog;
pub mod error;
pub mod output;
pub mod settings;
pub mod writer;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use catalog::{
    BuildEvent, BuildHandle, CancellationToken, Catalog, CatalogBuilder, ExtensionFilter,
    FileTypeSelector, FilterConfig, NoProgress, ProgressSink, build_catalog, spawn_build,
};
pub use error::{CatalogError, Result};
pub use output::{ColorMode, OutputConfig, ProgressBar};
pub use settings::{Overrides, RunOptions, Settings};
pub use writer::{CATALOG_FILE_NAME, CatalogWriter, FileCatalogWriter, MemoryCatalogWriter};
