//! Test utilities for creating temporary folder trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary folder tree for testing.
///
/// The tree lives in a named subdirectory of a temp dir, so catalogs of it
/// get a predictable header. It is removed when dropped.
pub struct TestTree {
    _dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty tree rooted at a folder called `root`.
    pub fn new() -> Self {
        Self::named("root")
    }

    /// Create an empty tree rooted at a folder called `name`.
    pub fn named(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { _dir: dir, root }
    }

    /// Get the path to the tree's root folder.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add several empty files.
    pub fn add_files(&self, paths: &[&str]) {
        for path in paths {
            self.add_file(path, "");
        }
    }

    /// Add an empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Remove read and execute permission from a directory until the guard
    /// is dropped.
    #[cfg(unix)]
    pub fn lock_dir(&self, path: &str) -> LockedDir {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.root.join(path);
        let mut perms = fs::metadata(&full_path)
            .expect("Failed to stat dir")
            .permissions();
        perms.set_mode(0o000);
        fs::set_permissions(&full_path, perms).expect("Failed to set permissions");
        LockedDir { path: full_path }
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Restores a locked directory's permissions so the temp dir can be removed.
#[cfg(unix)]
pub struct LockedDir {
    path: PathBuf,
}

#[cfg(unix)]
impl Drop for LockedDir {
    fn drop(&mut self) {
        use std::os::unix::fs::PermissionsExt;

        let _ = fs::set_permissions(&self.path, fs::Permissions::from_mode(0o755));
    }
}

/// Whether permission bits actually stop this process (they do not for root).
#[cfg(unix)]
pub fn permissions_enforced(locked: &LockedDir) -> bool {
    fs::read_dir(&locked.path).is_err()
}
