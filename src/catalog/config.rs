//! Filter configuration for catalog builds

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// A single file-type choice: everything, or one extension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FileTypeSelector {
    #[default]
    All,
    /// Lowercase, dot-prefixed (e.g. `.txt`)
    Extension(String),
}

impl FileTypeSelector {
    /// The selectors offered by default.
    pub const PRESETS: [&'static str; 5] = ["All", ".txt", ".pdf", ".doc", ".docx"];
}

impl FromStr for FileTypeSelector {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("all") || trimmed == "*" {
            return Ok(FileTypeSelector::All);
        }
        normalize_extension(trimmed)
            .map(FileTypeSelector::Extension)
            .ok_or_else(|| CatalogError::InvalidSelector(s.to_string()))
    }
}

impl TryFrom<String> for FileTypeSelector {
    type Error = CatalogError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<FileTypeSelector> for String {
    fn from(selector: FileTypeSelector) -> Self {
        selector.to_string()
    }
}

impl fmt::Display for FileTypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileTypeSelector::All => f.write_str("All"),
            FileTypeSelector::Extension(ext) => f.write_str(ext),
        }
    }
}

/// Turn `txt`, `.TXT` or `.txt` into `.txt`. Rejects empty input and
/// anything that could not be a file suffix.
fn normalize_extension(raw: &str) -> Option<String> {
    let bare = raw.strip_prefix('.').unwrap_or(raw);
    if bare.is_empty() || bare.contains(['.', '/', '\\']) || bare.chars().any(char::is_whitespace)
    {
        return None;
    }
    Some(format!(".{}", bare.to_lowercase()))
}

/// Which files are listed in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ExtensionFilter {
    #[default]
    All,
    /// Never empty; every member is lowercase and dot-prefixed.
    Only(BTreeSet<String>),
}

impl ExtensionFilter {
    /// Build a filter from a set of extensions. At least one is required.
    pub fn only<I, S>(extensions: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for ext in extensions {
            let ext = ext.as_ref();
            let normalized = normalize_extension(ext)
                .ok_or_else(|| CatalogError::InvalidSelector(ext.to_string()))?;
            set.insert(normalized);
        }
        if set.is_empty() {
            return Err(CatalogError::InvalidSelector(String::new()));
        }
        Ok(ExtensionFilter::Only(set))
    }

    pub fn from_selector(selector: &FileTypeSelector) -> Self {
        match selector {
            FileTypeSelector::All => ExtensionFilter::All,
            FileTypeSelector::Extension(ext) => {
                ExtensionFilter::Only(BTreeSet::from([ext.clone()]))
            }
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ExtensionFilter::All)
    }
}

/// Filters applied during one traversal. Fixed once the build starts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterConfig {
    pub include_hidden: bool,
    pub extensions: ExtensionFilter,
}

impl FilterConfig {
    pub fn new(include_hidden: bool, extensions: ExtensionFilter) -> Self {
        Self {
            include_hidden,
            extensions,
        }
    }

    pub fn from_selector(include_hidden: bool, selector: &FileTypeSelector) -> Self {
        Self::new(include_hidden, ExtensionFilter::from_selector(selector))
    }
}
