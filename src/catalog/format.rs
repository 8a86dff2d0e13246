//! Line rendering for catalog text

const INDENT: &str = "  ";
const SEPARATOR_WIDTH: usize = 50;

/// Builds catalog text line by line.
#[derive(Debug, Default)]
pub struct CatalogFormatter {
    text: String,
    leaf_lines: usize,
    directory_lines: usize,
}

impl CatalogFormatter {
    /// Start a catalog with its title, separator and blank line.
    pub fn with_header(root_name: &str) -> Self {
        let mut formatter = Self::default();
        formatter.text.push_str(&header(root_name));
        formatter
    }

    /// `<indent><dirname>/`
    pub fn directory(&mut self, name: &str, depth: usize) {
        self.push_line(depth, name, "/");
        self.directory_lines += 1;
    }

    /// `<indent><filename>`
    pub fn leaf(&mut self, name: &str, depth: usize) {
        self.push_line(depth, name, "");
        self.leaf_lines += 1;
    }

    /// Blank line closing a directory that had files.
    pub fn end_listing(&mut self) {
        self.text.push('\n');
    }

    pub fn leaf_lines(&self) -> usize {
        self.leaf_lines
    }

    pub fn directory_lines(&self) -> usize {
        self.directory_lines
    }

    pub fn finish(self) -> String {
        self.text
    }

    fn push_line(&mut self, depth: usize, name: &str, suffix: &str) {
        self.text.push_str(&INDENT.repeat(depth));
        self.text.push_str(name);
        self.text.push_str(suffix);
        self.text.push('\n');
    }
}

/// The fixed three-line preamble of every catalog.
pub fn header(root_name: &str) -> String {
    format!("Catalog for: {}\n{}\n\n", root_name, "=".repeat(SEPARATOR_WIDTH))
}
