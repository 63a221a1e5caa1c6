// src/catalog/graph.rs

//! Catalog dependency graph
//!
//! Every recipe has an edge to each entry it requires. The graph is kept
//! acyclic by checking reachability before each insertion: a new recipe
//! `R` requiring an existing entry `E` closes a cycle exactly when `R` is
//! already reachable from `E` (through forward references made before `R`
//! existed). Because every insertion is checked against an acyclic graph,
//! traversals never need cycle guards for termination.

use super::{Entry, EntryKind, Summary};
use crate::error::{Error, Result};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use tracing::{debug, warn};

/// In-memory catalog of ingredients and recipes
#[derive(Debug, Default)]
pub struct CatalogGraph {
    /// Entry name -> entry
    entries: HashMap<String, Entry>,
    /// Required name -> recipes that require it
    ///
    /// Keys may name entries that are not in the catalog yet.
    reverse_edges: HashMap<String, HashSet<String>>,
}

/// Entries reachable from a root, in expansion order
struct Reachable<'a> {
    /// Present entries, each listed after every reachable recipe requiring it
    order: Vec<&'a str>,
    /// First requirement found that is not in the catalog, as (recipe, missing)
    dangling: Option<(&'a str, &'a str)>,
}

impl CatalogGraph {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check if an entry exists
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Look up an entry by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// All entry names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Add an entry to the catalog
    ///
    /// Fails with [`Error::DuplicateName`] if the name is taken and with
    /// [`Error::CycleDetected`] if the entry is a recipe whose requirements
    /// would close a cycle (including requiring itself). Nothing is
    /// inserted on failure.
    pub fn add_entry(&mut self, entry: Entry) -> Result<()> {
        let name = entry.name().to_string();

        if self.entries.contains_key(&name) {
            warn!("Rejected duplicate entry {}", name);
            return Err(Error::DuplicateName(name));
        }

        if let Entry::Recipe(recipe) = &entry {
            for required in recipe.required_names() {
                let closes_cycle = required == name
                    || (self.entries.contains_key(required) && self.is_reachable(required, &name));

                if closes_cycle {
                    warn!("Rejected recipe {}: cycle through {}", name, required);
                    return Err(Error::CycleDetected {
                        entry: name,
                        via: required.to_string(),
                    });
                }
            }

            for required in recipe.required_names() {
                self.reverse_edges
                    .entry(required.to_string())
                    .or_default()
                    .insert(name.clone());
            }
        }

        debug!("Added {} {}", entry.kind(), name);
        self.entries.insert(name, entry);
        Ok(())
    }

    /// Check whether `dest` can be reached from `src` along requirement edges
    ///
    /// Ingredients and absent names have no outgoing edges. `dest` does not
    /// need to be in the catalog.
    pub fn is_reachable(&self, src: &str, dest: &str) -> bool {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![src];

        while let Some(current) = stack.pop() {
            let Some(recipe) = self.entries.get(current).and_then(Entry::as_recipe) else {
                continue;
            };

            for required in recipe.required_names() {
                if required == dest {
                    return true;
                }
                if visited.insert(required) {
                    stack.push(required);
                }
            }
        }

        false
    }

    /// Flatten a recipe into its total ingredient quantities and cost
    ///
    /// Quantities multiply along every requirement chain, and an entry
    /// shared by several paths receives the sum of all of them.
    pub fn summarize(&self, name: &str) -> Result<Summary> {
        let root = self
            .entries
            .get(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;

        if root.kind() != EntryKind::Recipe {
            return Err(Error::NotARecipe(name.to_string()));
        }

        let reachable = self.reachable_from(name);
        if let Some((recipe, missing)) = reachable.dangling {
            debug!("Summary of {} blocked by missing {}", name, missing);
            return Err(Error::DanglingReference {
                recipe: recipe.to_string(),
                missing: missing.to_string(),
            });
        }

        // Every requirer precedes its requirements in `order`, so a recipe's
        // total is final by the time it is expanded.
        let mut totals: HashMap<&str, f64> = HashMap::new();
        for &current in &reachable.order {
            let Some(recipe) = self.entries.get(current).and_then(Entry::as_recipe) else {
                continue;
            };
            let multiplier = if current == name {
                1.0
            } else {
                totals.get(current).copied().unwrap_or(0.0)
            };

            for (required, quantity) in &recipe.requirements {
                *totals.entry(required.as_str()).or_insert(0.0) += quantity * multiplier;
            }
        }

        let mut leaf_quantities = BTreeMap::new();
        for (required, quantity) in totals {
            if self.entries.get(required).is_some_and(|e| e.kind() == EntryKind::Ingredient) {
                leaf_quantities.insert(required.to_string(), quantity);
            }
        }

        // Summed in name order so repeated calls agree to the last bit
        let cost = leaf_quantities
            .iter()
            .filter_map(|(required, quantity)| {
                let ingredient = self.entries.get(required.as_str())?.as_ingredient()?;
                Some(quantity * ingredient.cost)
            })
            .sum::<f64>();

        debug!(
            "Summarized {}: {} ingredients, cost {}",
            name,
            leaf_quantities.len(),
            cost
        );

        Ok(Summary {
            name: name.to_string(),
            cost,
            leaf_quantities,
        })
    }

    /// Direct requirements of an entry (empty for ingredients and unknown names)
    pub fn dependencies(&self, name: &str) -> Vec<&str> {
        self.entries
            .get(name)
            .and_then(Entry::as_recipe)
            .map(|recipe| recipe.required_names().collect())
            .unwrap_or_default()
    }

    /// Recipes that directly require `name`, sorted
    ///
    /// Works for names not yet in the catalog (forward references).
    pub fn dependents(&self, name: &str) -> Vec<&str> {
        let mut dependents: Vec<&str> = self
            .reverse_edges
            .get(name)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default();
        dependents.sort_unstable();
        dependents
    }

    /// Every name reachable from `name`, not including `name` itself
    pub fn transitive_dependencies(&self, name: &str) -> BTreeSet<String> {
        let mut deps = BTreeSet::new();
        let mut queue: VecDeque<&str> = self.dependencies(name).into_iter().collect();

        while let Some(dep) = queue.pop_front() {
            if deps.insert(dep.to_string()) {
                for indirect in self.dependencies(dep) {
                    if !deps.contains(indirect) {
                        queue.push_back(indirect);
                    }
                }
            }
        }

        deps
    }

    /// Entries reachable from `root` with every recipe before its requirements
    ///
    /// Requirements missing from the catalog are left out.
    pub fn topological_order(&self, root: &str) -> Result<Vec<String>> {
        if !self.entries.contains_key(root) {
            return Err(Error::NotFound(root.to_string()));
        }

        Ok(self
            .reachable_from(root)
            .order
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    /// Every requirement naming an entry not in the catalog, as (recipe, missing)
    ///
    /// Sorted by recipe, then by missing name.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let mut dangling = Vec::new();
        for recipe in self.entries.values().filter_map(Entry::as_recipe) {
            for required in recipe.required_names() {
                if !self.entries.contains_key(required) {
                    dangling.push((recipe.name.as_str(), required));
                }
            }
        }
        dangling.sort_unstable();
        dangling
    }

    /// Where an entry sits in the graph: what it needs, what needs it, and
    /// the order its sub-graph expands in
    ///
    /// A name that is only a forward reference gets a report with no kind,
    /// no requirements and an empty expansion order. A name neither in the
    /// catalog nor required by anything is [`Error::NotFound`].
    pub fn dependency_report(&self, name: &str) -> Result<DependencyReport> {
        let required_by: Vec<String> =
            self.dependents(name).into_iter().map(str::to_string).collect();
        let kind = self.entries.get(name).map(Entry::kind);

        let expansion_order = match kind {
            Some(_) => self.topological_order(name)?,
            None if required_by.is_empty() => return Err(Error::NotFound(name.to_string())),
            None => Vec::new(),
        };

        Ok(DependencyReport {
            name: name.to_string(),
            kind,
            requires: self.dependencies(name).into_iter().map(str::to_string).collect(),
            required_by,
            all_requirements: self.transitive_dependencies(name),
            expansion_order,
        })
    }

    /// Counts describing the catalog
    pub fn stats(&self) -> CatalogStats {
        let mut stats = CatalogStats::default();

        for entry in self.entries.values() {
            match entry {
                Entry::Ingredient(_) => stats.ingredients += 1,
                Entry::Recipe(recipe) => {
                    stats.recipes += 1;
                    stats.edges += recipe.requirements.len();
                    stats.dangling_references += recipe
                        .required_names()
                        .filter(|required| !self.entries.contains_key(*required))
                        .count();
                }
            }
        }

        stats
    }

    /// Collect the sub-graph under `root` and order it with Kahn's algorithm
    fn reachable_from<'a>(&'a self, root: &'a str) -> Reachable<'a> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut stack: Vec<&str> = vec![root];
        let mut dangling = None;
        seen.insert(root);

        while let Some(current) = stack.pop() {
            let Some(recipe) = self.entries.get(current).and_then(Entry::as_recipe) else {
                continue;
            };
            for required in recipe.required_names() {
                if !self.entries.contains_key(required) {
                    dangling.get_or_insert((current, required));
                    continue;
                }
                if seen.insert(required) {
                    stack.push(required);
                }
            }
        }

        // In-degree counts only edges from recipes inside the sub-graph
        let mut in_degrees: HashMap<&str, usize> = seen.iter().map(|&name| (name, 0)).collect();
        for &name in &seen {
            for required in self.dependencies(name) {
                if let Some(degree) = in_degrees.get_mut(required) {
                    *degree += 1;
                }
            }
        }

        let mut order = Vec::with_capacity(seen.len());
        let mut queue: VecDeque<&str> = VecDeque::from([root]);

        while let Some(current) = queue.pop_front() {
            order.push(current);

            for required in self.dependencies(current) {
                if let Some(degree) = in_degrees.get_mut(required) {
                    *degree -= 1;
                    if *degree == 0 {
                        queue.push_back(required);
                    }
                }
            }
        }

        Reachable { order, dangling }
    }
}

/// Statistics about the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub ingredients: usize,
    pub recipes: usize,
    /// Total requirement edges across all recipes
    pub edges: usize,
    /// Requirement edges pointing at names not in the catalog
    pub dangling_references: usize,
}

/// Dependency view of a single name, built by [`CatalogGraph::dependency_report`]
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyReport {
    pub name: String,
    /// `None` when the name is only referenced, not yet added
    pub kind: Option<EntryKind>,
    /// Direct requirements, sorted
    pub requires: Vec<String>,
    /// Recipes that directly require this name, sorted
    pub required_by: Vec<String>,
    /// Everything reachable through requirements, present or not
    pub all_requirements: BTreeSet<String>,
    /// Present entries under this one, each recipe before its requirements
    pub expansion_order: Vec<String>,
}
