//! Hidden-entry and extension predicates

use super::config::{ExtensionFilter, FilterConfig};

/// Names starting with `.` are hidden.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Lowercased, dot-prefixed suffix of a file name.
///
/// Leading dots belong to the stem, so `.bashrc` has no extension while
/// `archive.tar.GZ` has `.gz`.
pub fn extension_of(name: &str) -> Option<String> {
    let stem_start = name.find(|c: char| c != '.')?;
    let rest = &name[stem_start..];
    let dot = rest.rfind('.')?;
    Some(rest[dot..].to_lowercase())
}

impl ExtensionFilter {
    pub fn matches(&self, file_name: &str) -> bool {
        match self {
            ExtensionFilter::All => true,
            ExtensionFilter::Only(set) => {
                extension_of(file_name).is_some_and(|ext| set.contains(&ext))
            }
        }
    }
}

impl FilterConfig {
    /// Whether a subdirectory is walked at all.
    pub fn descends_into(&self, dir_name: &str) -> bool {
        self.include_hidden || !is_hidden(dir_name)
    }

    /// Whether a file survives hidden exclusion. Only these files earn their
    /// directory a closing blank line.
    pub fn shows(&self, file_name: &str) -> bool {
        self.include_hidden || !is_hidden(file_name)
    }

    /// Whether a file produces a leaf line. Hidden exclusion runs first.
    pub fn lists(&self, file_name: &str) -> bool {
        self.shows(file_name) && self.extensions.matches(file_name)
    }
}
