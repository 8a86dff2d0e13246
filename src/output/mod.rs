//! Terminal and JSON output
//!
//! - `config` - Output configuration types and color detection
//! - `progress` - Progress bar drawn on stderr during a build
//! - `status` - Colored status lines on stderr
//! - `json` - JSON output

mod config;
mod json;
mod progress;
mod status;

use std::io::{self, Write};

pub use config::{ColorMode, OutputConfig};
pub use json::{catalog_json, print_json};
pub use progress::ProgressBar;
pub use status::{Status, print_status, write_status};

/// Write catalog text to stdout exactly as built.
pub fn print_catalog(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    stdout.flush()
}
