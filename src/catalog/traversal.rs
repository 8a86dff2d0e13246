//! Directory enumeration shared by the counting pass and the catalog walk.
//!
//! Both passes see a directory through [`read_directory`], so the up-front
//! total always agrees with the number of files the walk visits.

use std::fs::{self, DirEntry};
use std::io;
use std::path::{Path, PathBuf};

use super::config::FilterConfig;

/// A named child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub name: String,
    pub path: PathBuf,
}

impl ListedEntry {
    fn from_dir_entry(entry: &DirEntry) -> Self {
        Self {
            name: entry.file_name().to_string_lossy().into_owned(),
            path: entry.path(),
        }
    }
}

/// Children of one directory, split into files and subdirectories, each
/// sorted by name.
#[derive(Debug, Default)]
pub struct DirListing {
    pub files: Vec<ListedEntry>,
    pub dirs: Vec<ListedEntry>,
}

/// Read, classify and sort the entries of `path`.
///
/// Symlinks to directories are dropped: they are neither descended nor
/// listed. Every other non-directory (including broken symlinks) is a file.
/// Entries whose type cannot be determined are skipped.
pub fn read_directory(path: &Path) -> io::Result<DirListing> {
    let mut entries: Vec<DirEntry> = fs::read_dir(path)?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.file_name());

    let mut listing = DirListing::default();
    for entry in entries {
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                log::debug!("skipping {}: {}", entry.path().display(), e);
                continue;
            }
        };

        if file_type.is_dir() {
            listing.dirs.push(ListedEntry::from_dir_entry(&entry));
        } else if file_type.is_symlink() && entry.path().is_dir() {
            log::debug!("not following directory symlink {}", entry.path().display());
        } else {
            listing.files.push(ListedEntry::from_dir_entry(&entry));
        }
    }

    Ok(listing)
}

/// Count the files the catalog walk will visit under `root`.
///
/// Hidden files are counted whatever the configuration says, since the walk
/// steps over them too. Hidden directories are only counted when the walk
/// would descend into them. Unreadable subdirectories count as empty; an
/// unreadable root is an error.
pub fn count_files(root: &Path, config: &FilterConfig) -> io::Result<usize> {
    let listing = read_directory(root)?;
    let mut total = listing.files.len();
    for dir in listing.dirs.iter().filter(|d| config.descends_into(&d.name)) {
        total += count_subtree(&dir.path, config);
    }
    Ok(total)
}

fn count_subtree(path: &Path, config: &FilterConfig) -> usize {
    match count_files(path, config) {
        Ok(n) => n,
        Err(e) => {
            log::debug!("not counting {}: {}", path.display(), e);
            0
        }
    }
}

/// Number of separators in the path of `dir` relative to the root, where
/// `components` is the number of path components below the root (0 for
/// the root itself).
///
/// The root and its direct children both sit at depth 0.
pub fn depth_for(components: usize) -> usize {
    components.saturating_sub(1)
}
