//! Persistent defaults, merged with command-line flags

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::catalog::{FileTypeSelector, FilterConfig};
use crate::output::ColorMode;
use crate::writer::CATALOG_FILE_NAME;

/// Contents of `config.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub include_hidden: Option<bool>,
    pub file_type: Option<FileTypeSelector>,
    /// Write the catalog file into the scanned folder
    pub save: Option<bool>,
    pub file_name: Option<String>,
    pub color: Option<ColorMode>,
}

impl Settings {
    /// `~/.config/foldercat/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("foldercat").join("config.toml"))
    }

    /// Load settings from `path`, or from the default location when `None`.
    ///
    /// A missing default file yields empty settings; a missing explicit file
    /// is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Self::default()),
            },
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Flags given on the command line; they win over [`Settings`].
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub include_hidden: bool,
    pub file_type: Option<FileTypeSelector>,
    pub no_save: bool,
    pub color: Option<ColorMode>,
}

/// Everything one run needs, after merging.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    pub filter: FilterConfig,
    pub save: bool,
    pub file_name: String,
    pub color: ColorMode,
}

pub fn resolve(settings: Settings, overrides: Overrides) -> RunOptions {
    let include_hidden = overrides.include_hidden || settings.include_hidden.unwrap_or(false);
    let selector = overrides
        .file_type
        .or(settings.file_type)
        .unwrap_or_default();

    RunOptions {
        filter: FilterConfig::from_selector(include_hidden, &selector),
        save: !overrides.no_save && settings.save.unwrap_or(true),
        file_name: settings
            .file_name
            .unwrap_or_else(|| CATALOG_FILE_NAME.to_string()),
        color: overrides.color.or(settings.color).unwrap_or_default(),
    }
}
