// src/catalog/request.rs

//! Raw entry requests and their validation
//!
//! Requests arrive from untrusted sources (HTTP bodies, seed files) with
//! every field optional. [`EntryRequest::into_entry`] performs the
//! field-level checks the catalog engine relies on and produces an
//! [`Entry`].

use super::Entry;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// An entry as submitted by a caller
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryRequest {
    /// "recipe" or "ingredient"
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Unit cost, ingredients only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cook_time: Option<f64>,
    /// Requirements, recipes only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_items: Option<Vec<RequiredItemRequest>>,
}

/// One requirement line of a recipe request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequiredItemRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
}

impl EntryRequest {
    /// Build an ingredient request
    pub fn ingredient(name: impl Into<String>, cook_time: f64) -> Self {
        Self {
            entry_type: Some("ingredient".to_string()),
            name: Some(name.into()),
            cook_time: Some(cook_time),
            required_items: None,
        }
    }

    /// Build a recipe request
    pub fn recipe<N: Into<String>>(
        name: impl Into<String>,
        items: impl IntoIterator<Item = (N, f64)>,
    ) -> Self {
        Self {
            entry_type: Some("recipe".to_string()),
            name: Some(name.into()),
            cook_time: None,
            required_items: Some(
                items
                    .into_iter()
                    .map(|(name, quantity)| RequiredItemRequest {
                        name: Some(name.into()),
                        quantity: Some(quantity),
                    })
                    .collect(),
            ),
        }
    }

    /// Validate the request and convert it into a catalog entry
    ///
    /// Repeated requirement names collapse into one; the last quantity wins.
    pub fn into_entry(self) -> Result<Entry> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(Error::invalid("entry names must be non-empty strings")),
        };

        match self.entry_type.as_deref() {
            Some("ingredient") => {
                let cook_time = self
                    .cook_time
                    .filter(|t| t.is_finite() && *t >= 0.0)
                    .ok_or_else(|| {
                        Error::invalid("cookTime can only be greater than or equal to 0")
                    })?;
                Ok(Entry::ingredient(name, cook_time))
            }
            Some("recipe") => {
                let items = match self.required_items {
                    Some(items) if !items.is_empty() => items,
                    _ => {
                        return Err(Error::invalid(
                            "requiredItems for a recipe must be a list and cannot be empty",
                        ));
                    }
                };

                let mut requirements = Vec::with_capacity(items.len());
                for item in items {
                    let required = match item.name {
                        Some(required) if !required.is_empty() && required != name => required,
                        other => {
                            return Err(Error::invalid(format!(
                                "requiredItems of {} must name other entries, got {:?}",
                                name,
                                other.unwrap_or_default()
                            )));
                        }
                    };
                    let quantity = item
                        .quantity
                        .filter(|q| q.is_finite() && *q > 0.0)
                        .ok_or_else(|| {
                            Error::invalid(format!(
                                "the quantity of the requiredItem {} must be greater than 0",
                                required
                            ))
                        })?;
                    requirements.push((required, quantity));
                }

                Ok(Entry::recipe(name, requirements))
            }
            _ => Err(Error::invalid(
                "type can only be \"recipe\" or \"ingredient\"",
            )),
        }
    }
}
