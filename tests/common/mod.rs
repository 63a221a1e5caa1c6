// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use cookbook::{CatalogGraph, Entry};

/// Create a catalog with the spaghetti dinner used across tests.
///
/// Skibidi Spaghetti needs 3 Meatballs and 1 Pasta; a Meatball needs
/// 2 Beef and 1 Egg. Beef costs 5, Egg 3, Pasta 2.
pub fn spaghetti_catalog() -> CatalogGraph {
    let mut catalog = CatalogGraph::new();
    catalog.add_entry(Entry::ingredient("Beef", 5.0)).unwrap();
    catalog.add_entry(Entry::ingredient("Egg", 3.0)).unwrap();
    catalog.add_entry(Entry::ingredient("Pasta", 2.0)).unwrap();
    catalog
        .add_entry(Entry::recipe("Meatball", [("Beef", 2.0), ("Egg", 1.0)]))
        .unwrap();
    catalog
        .add_entry(Entry::recipe(
            "Skibidi Spaghetti",
            [("Meatball", 3.0), ("Pasta", 1.0)],
        ))
        .unwrap();
    catalog
}

/// Create a catalog with a diamond: R -> A(2), B(3); A -> L(1); B -> L(1).
pub fn diamond_catalog(leaf_cost: f64) -> CatalogGraph {
    let mut catalog = CatalogGraph::new();
    catalog.add_entry(Entry::ingredient("L", leaf_cost)).unwrap();
    catalog.add_entry(Entry::recipe("A", [("L", 1.0)])).unwrap();
    catalog.add_entry(Entry::recipe("B", [("L", 1.0)])).unwrap();
    catalog
        .add_entry(Entry::recipe("R", [("A", 2.0), ("B", 3.0)]))
        .unwrap();
    catalog
}

/// Seed catalog in TOML form matching `spaghetti_catalog`.
pub const SPAGHETTI_TOML: &str = r#"
[[entry]]
type = "ingredient"
name = "Beef"
cookTime = 5

[[entry]]
type = "ingredient"
name = "Egg"
cookTime = 3

[[entry]]
type = "ingredient"
name = "Pasta"
cookTime = 2

[[entry]]
type = "recipe"
name = "Meatball"
requiredItems = [{ name = "Beef", quantity = 2 }, { name = "Egg", quantity = 1 }]

[[entry]]
type = "recipe"
name = "Skibidi Spaghetti"
requiredItems = [{ name = "Meatball", quantity = 3 }, { name = "Pasta", quantity = 1 }]
"#;
