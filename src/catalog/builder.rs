//! CatalogBuilder - walks a tree and renders its catalog text

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{CatalogError, Result};

use super::cancel::CancellationToken;
use super::config::FilterConfig;
use super::format::CatalogFormatter;
use super::progress::{ProgressSink, ProgressTracker};
use super::traversal::{DirListing, count_files, depth_for, read_directory};

/// The finished result of one build.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    pub root: PathBuf,
    pub root_name: String,
    /// Full catalog text, header included.
    pub text: String,
    pub total_items: usize,
    pub processed_items: usize,
    /// Number of leaf lines in `text`.
    pub listed_files: usize,
    /// Number of directory header lines in `text`.
    pub directories: usize,
    /// Subdirectories that could not be read and were left out.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skipped: Vec<PathBuf>,
}

impl Catalog {
    /// True when no file made it into the catalog ("no files found").
    pub fn is_empty(&self) -> bool {
        self.listed_files == 0
    }
}

/// Builds catalogs for a fixed filter configuration.
///
/// The walk is depth-first and top-down. Each directory contributes its
/// header line (except the root), then its files, then a blank line if it
/// had any files, and only then its subdirectories. Entries are visited in
/// name order.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    config: FilterConfig,
    cancel: Option<CancellationToken>,
}

impl CatalogBuilder {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Walk `root` and return its catalog, reporting progress to `sink`.
    ///
    /// Fails with [`CatalogError::Path`] if `root` is not a directory or
    /// cannot be listed (the io error is attached); no progress is sent. Unreadable subdirectories are skipped and recorded in
    /// [`Catalog::skipped`].
    pub fn build<S: ProgressSink + ?Sized>(
        &self,
        root: &Path,
        sink: &mut S,
    ) -> Result<Catalog> {
        if !root.is_dir() {
            return Err(CatalogError::Path {
                path: root.to_path_buf(),
                source: None,
            });
        }

        let unreadable = |source| CatalogError::Path {
            path: root.to_path_buf(),
            source: Some(source),
        };
        let total = count_files(root, &self.config).map_err(unreadable)?;
        let listing = read_directory(root).map_err(unreadable)?;

        let root_name = root_name(root);
        log::debug!("cataloging {} ({} files)", root.display(), total);

        let mut walk = Walk {
            config: &self.config,
            cancel: self.cancel.as_ref(),
            formatter: CatalogFormatter::with_header(&root_name),
            tracker: ProgressTracker::new(total),
            skipped: Vec::new(),
        };
        walk.visit(None, listing, 0, sink)?;
        walk.tracker.finish(sink);

        let catalog = Catalog {
            root: root.to_path_buf(),
            root_name,
            listed_files: walk.formatter.leaf_lines(),
            directories: walk.formatter.directory_lines(),
            total_items: walk.tracker.total(),
            processed_items: walk.tracker.processed(),
            skipped: walk.skipped,
            text: walk.formatter.finish(),
        };
        log::info!(
            "catalog of {} complete: {} of {} files listed",
            catalog.root.display(),
            catalog.listed_files,
            catalog.total_items
        );
        Ok(catalog)
    }
}

/// Shorthand for `CatalogBuilder::new(config).build(root, sink)`.
pub fn build_catalog<S: ProgressSink + ?Sized>(
    root: &Path,
    config: FilterConfig,
    sink: &mut S,
) -> Result<Catalog> {
    CatalogBuilder::new(config).build(root, sink)
}

/// State carried through one walk.
struct Walk<'a> {
    config: &'a FilterConfig,
    cancel: Option<&'a CancellationToken>,
    formatter: CatalogFormatter,
    tracker: ProgressTracker,
    skipped: Vec<PathBuf>,
}

impl Walk<'_> {
    /// Emit one directory's block, then descend. `name` is `None` for the root.
    fn visit<S: ProgressSink + ?Sized>(
        &mut self,
        name: Option<&str>,
        listing: DirListing,
        components: usize,
        sink: &mut S,
    ) -> Result<()> {
        let depth = depth_for(components);

        if let Some(name) = name {
            self.formatter.directory(name, depth);
        }

        let mut shown = 0;
        for file in &listing.files {
            self.check_cancelled()?;
            if self.config.shows(&file.name) {
                shown += 1;
                if self.config.extensions.matches(&file.name) {
                    self.formatter.leaf(&file.name, depth + 1);
                }
            }
            self.tracker.advance(sink);
        }

        // Hidden files still advance progress but do not count as files here:
        // a directory holding only hidden files gets no closing blank line.
        if shown > 0 {
            self.formatter.end_listing();
        }

        let config = self.config;
        for dir in listing.dirs.iter().filter(|d| config.descends_into(&d.name)) {
            self.check_cancelled()?;
            match read_directory(&dir.path) {
                Ok(child) => self.visit(Some(&dir.name), child, components + 1, sink)?,
                Err(source) => {
                    let err = CatalogError::Permission {
                        path: dir.path.clone(),
                        source,
                    };
                    log::warn!("skipping: {}", err);
                    self.skipped.push(dir.path.clone());
                }
            }
        }

        Ok(())
    }

    fn check_cancelled(&self) -> Result<()> {
        if self.cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(CatalogError::Cancelled);
        }
        Ok(())
    }
}

/// Final component of `root`, resolving `.`/`..` through the filesystem.
fn root_name(root: &Path) -> String {
    root.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .or_else(|| {
            std::fs::canonicalize(root)
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
        })
        .unwrap_or_else(|| root.display().to_string())
}
