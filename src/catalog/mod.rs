// src/catalog/mod.rs

//! Recipe catalog: entries and the dependency graph that holds them
//!
//! A catalog contains two kinds of entries:
//! - **Ingredient**: a leaf with a fixed unit cost (its cook time)
//! - **Recipe**: a composite that requires other entries in given quantities
//!
//! Entries are inserted through [`CatalogGraph::add_entry`], which refuses
//! any insertion that would make the requirement graph cyclic. Recipes may
//! name requirements that are not in the catalog yet; those are only
//! reported when the recipe is summarized.
//!
//! # Example
//!
//! ```
//! use cookbook::catalog::{CatalogGraph, Entry};
//!
//! let mut catalog = CatalogGraph::new();
//! catalog.add_entry(Entry::ingredient("Egg", 3.0)).unwrap();
//! catalog.add_entry(Entry::recipe("Omelette", [("Egg", 2.0)])).unwrap();
//!
//! let summary = catalog.summarize("Omelette").unwrap();
//! assert_eq!(summary.cost, 6.0);
//! assert_eq!(summary.leaf_quantities["Egg"], 2.0);
//! ```

mod graph;
pub mod loader;
pub mod request;
mod summary;

pub use graph::{CatalogGraph, CatalogStats, DependencyReport};
pub use loader::{load_catalog_file, seed_catalog};
pub use request::{EntryRequest, RequiredItemRequest};
pub use summary::{IngredientQuantity, Summary, SummaryResponse};

use std::collections::BTreeMap;
use std::fmt;

/// The two kinds of catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Ingredient,
    Recipe,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingredient => "ingredient",
            Self::Recipe => "recipe",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A leaf entry with a fixed unit cost
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub name: String,
    /// Cost of one unit (cook time)
    pub cost: f64,
}

/// A composite entry built from other entries
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Required entry name -> quantity
    pub requirements: BTreeMap<String, f64>,
}

impl Recipe {
    /// Iterate over required names
    pub fn required_names(&self) -> impl Iterator<Item = &str> {
        self.requirements.keys().map(String::as_str)
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Ingredient(Ingredient),
    Recipe(Recipe),
}

impl Entry {
    /// Create an ingredient entry
    pub fn ingredient(name: impl Into<String>, cost: f64) -> Self {
        Self::Ingredient(Ingredient {
            name: name.into(),
            cost,
        })
    }

    /// Create a recipe entry
    ///
    /// Later requirements with the same name replace earlier ones.
    pub fn recipe<N, I>(name: impl Into<String>, requirements: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = (N, f64)>,
    {
        let mut map = BTreeMap::new();
        for (required, quantity) in requirements {
            map.insert(required.into(), quantity);
        }
        Self::Recipe(Recipe {
            name: name.into(),
            requirements: map,
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Ingredient(ingredient) => &ingredient.name,
            Self::Recipe(recipe) => &recipe.name,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Ingredient(_) => EntryKind::Ingredient,
            Self::Recipe(_) => EntryKind::Recipe,
        }
    }

    pub fn as_recipe(&self) -> Option<&Recipe> {
        match self {
            Self::Recipe(recipe) => Some(recipe),
            Self::Ingredient(_) => None,
        }
    }

    pub fn as_ingredient(&self) -> Option<&Ingredient> {
        match self {
            Self::Ingredient(ingredient) => Some(ingredient),
            Self::Recipe(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_last_requirement_wins() {
        let entry = Entry::recipe("Toast", [("Bread", 1.0), ("Butter", 1.0), ("Bread", 2.0)]);
        let recipe = entry.as_recipe().unwrap();

        assert_eq!(recipe.requirements.len(), 2);
        assert_eq!(recipe.requirements["Bread"], 2.0);
    }

    #[test]
    fn test_entry_accessors() {
        let egg = Entry::ingredient("Egg", 3.0);
        assert_eq!(egg.name(), "Egg");
        assert_eq!(egg.kind(), EntryKind::Ingredient);
        assert!(egg.as_recipe().is_none());
        assert_eq!(egg.as_ingredient().unwrap().cost, 3.0);

        let omelette = Entry::recipe("Omelette", [("Egg", 2.0)]);
        assert_eq!(omelette.kind().to_string(), "recipe");
        assert_eq!(
            omelette.as_recipe().unwrap().required_names().collect::<Vec<_>>(),
            vec!["Egg"]
        );
    }
}
