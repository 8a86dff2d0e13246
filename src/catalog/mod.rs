//! Catalog building
//!
//! This module turns a directory tree into catalog text:
//!
//! - `config` / `filter`: which entries are walked and which are listed
//! - `traversal`: sorted directory listings and the up-front file count
//! - `builder`: the walk itself, producing a [`Catalog`]
//! - `progress`: percentage accounting and the [`ProgressSink`] seam
//! - `worker`: running a build on its own thread with an event channel

mod builder;
mod cancel;
mod config;
mod filter;
mod format;
mod progress;
mod traversal;
mod worker;

pub use builder::{Catalog, CatalogBuilder, build_catalog};
pub use cancel::CancellationToken;
pub use config::{ExtensionFilter, FileTypeSelector, FilterConfig};
pub use filter::{extension_of, is_hidden};
pub use format::{CatalogFormatter, header};
pub use progress::{NoProgress, ProgressSink, ProgressTracker};
pub use traversal::{DirListing, ListedEntry, count_files, read_directory};
pub use worker::{BuildEvent, BuildHandle, spawn_build, spawn_build_with};
