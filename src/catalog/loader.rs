// src/catalog/loader.rs

//! Seed catalog files
//!
//! A seed file lists entry requests in insertion order. TOML files use
//! `[[entry]]` tables; files ending in `.json` hold a JSON array.
//!
//! ```toml
//! [[entry]]
//! type = "ingredient"
//! name = "Egg"
//! cookTime = 3
//!
//! [[entry]]
//! type = "recipe"
//! name = "Omelette"
//! requiredItems = [{ name = "Egg", quantity = 2 }]
//! ```

use super::{CatalogGraph, EntryRequest};
use crate::error::Error;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    entry: Vec<EntryRequest>,
}

/// Parse seed requests from file contents
///
/// `json` selects the JSON array format instead of TOML.
pub fn parse_seed(content: &str, json: bool) -> crate::Result<Vec<EntryRequest>> {
    if json {
        serde_json::from_str(content)
            .map_err(|e| Error::ParseError(format!("Invalid JSON seed catalog: {}", e)))
    } else {
        let seed: SeedFile = toml::from_str(content)
            .map_err(|e| Error::ParseError(format!("Invalid TOML seed catalog: {}", e)))?;
        Ok(seed.entry)
    }
}

/// Validate and insert requests in order, stopping at the first failure
///
/// Entries inserted before the failing one stay in the catalog.
pub fn seed_catalog(catalog: &mut CatalogGraph, requests: Vec<EntryRequest>) -> Result<usize> {
    let mut added = 0;

    for (index, request) in requests.into_iter().enumerate() {
        let label = request.name.clone().unwrap_or_else(|| format!("#{}", index + 1));
        let entry = request
            .into_entry()
            .with_context(|| format!("Seed entry {} is invalid", label))?;
        catalog
            .add_entry(entry)
            .with_context(|| format!("Seed entry {} was rejected", label))?;
        added += 1;
    }

    Ok(added)
}

/// Load a seed file into a fresh catalog
pub fn load_catalog_file(path: &Path) -> Result<CatalogGraph> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::IoError(e.to_string()))
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;

    let json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let requests = parse_seed(&content, json)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))?;

    let mut catalog = CatalogGraph::new();
    let added = seed_catalog(&mut catalog, requests)?;
    info!("Loaded {} entries from {}", added, path.display());

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SEED_TOML: &str = r#"
[[entry]]
type = "ingredient"
name = "Egg"
cookTime = 3

[[entry]]
type = "ingredient"
name = "Milk"
cookTime = 0.5

[[entry]]
type = "recipe"
name = "Omelette"
requiredItems = [
    { name = "Egg", quantity = 2 },
    { name = "Milk", quantity = 2 },
]
"#;

    #[test]
    fn test_parse_toml_seed() {
        let requests = parse_seed(SEED_TOML, false).unwrap();
        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0], EntryRequest::ingredient("Egg", 3.0));
    }

    #[test]
    fn test_parse_invalid_seed() {
        let err = parse_seed("this is not valid toml at all {}", false).unwrap_err();
        assert!(matches!(err, Error::ParseError(ref msg) if msg.starts_with("Invalid TOML")));
        assert_eq!(err.code(), "parse_error");

        let err = parse_seed("{\"not\": \"an array\"}", true).unwrap_err();
        assert!(matches!(err, Error::ParseError(ref msg) if msg.starts_with("Invalid JSON")));
    }

    #[test]
    fn test_load_toml_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(SEED_TOML.as_bytes()).unwrap();

        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 3);

        let summary = catalog.summarize("Omelette").unwrap();
        assert_eq!(summary.cost, 7.0);
    }

    #[test]
    fn test_load_json_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(
            br#"[
                {"type": "ingredient", "name": "Bread", "cookTime": 1},
                {"type": "recipe", "name": "Toast", "requiredItems": [{"name": "Bread", "quantity": 2}]}
            ]"#,
        )
        .unwrap();

        let catalog = load_catalog_file(file.path()).unwrap();
        assert_eq!(catalog.summarize("Toast").unwrap().leaf_quantities["Bread"], 2.0);
    }

    #[test]
    fn test_seed_stops_at_first_rejection() {
        let mut catalog = CatalogGraph::new();
        let requests = vec![
            EntryRequest::recipe("X", [("Y", 1.0)]),
            EntryRequest::recipe("Y", [("X", 1.0)]),
            EntryRequest::ingredient("Z", 1.0),
        ];

        let err = seed_catalog(&mut catalog, requests).unwrap_err();
        assert!(err.to_string().contains("Seed entry Y was rejected"));
        assert_eq!(catalog.names(), vec!["X"]);
    }

    #[test]
    fn test_missing_file() {
        let err = load_catalog_file(Path::new("/nonexistent/catalog.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog file"));
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::IoError(_))));
    }

    #[test]
    fn test_malformed_file_reports_parse_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"[{\"type\": \"ingredient\",").unwrap();

        let err = load_catalog_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse catalog file"));
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::ParseError(_))));
    }
}
