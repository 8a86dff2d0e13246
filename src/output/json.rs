//! JSON output formatting

use std::io;

use crate::catalog::Catalog;

/// Render a catalog and its counters as pretty-printed JSON.
pub fn catalog_json(catalog: &Catalog) -> io::Result<String> {
    serde_json::to_string_pretty(catalog).map_err(io::Error::other)
}

/// Print a catalog as pretty-printed JSON to stdout.
pub fn print_json(catalog: &Catalog) -> io::Result<()> {
    println!("{}", catalog_json(catalog)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_catalog_json_fields() {
        let catalog = Catalog {
            root: PathBuf::from("/tmp/r"),
            root_name: "r".to_string(),
            text: "Catalog for: r\n".to_string(),
            total_items: 3,
            processed_items: 3,
            listed_files: 2,
            directories: 1,
            skipped: Vec::new(),
        };
        let json: serde_json::Value =
            serde_json::from_str(&catalog_json(&catalog).unwrap()).unwrap();
        assert_eq!(json["root_name"], "r");
        assert_eq!(json["listed_files"], 2);
        assert_eq!(json["total_items"], 3);
        assert!(json.get("skipped").is_none());
    }
}
