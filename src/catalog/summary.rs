// src/catalog/summary.rs

//! Flattened recipe summaries

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Total ingredient requirements of a recipe
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Recipe that was summarized
    pub name: String,
    /// Sum of quantity * unit cost over all ingredients
    pub cost: f64,
    /// Ingredient name -> total quantity needed
    pub leaf_quantities: BTreeMap<String, f64>,
}

/// One ingredient line in a summary response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientQuantity {
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub quantity: f64,
}

/// Wire form of a summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub name: String,
    #[serde(serialize_with = "serialize_number")]
    pub cook_time: f64,
    pub ingredients: Vec<IngredientQuantity>,
}

impl From<Summary> for SummaryResponse {
    fn from(summary: Summary) -> Self {
        Self {
            name: summary.name,
            cook_time: summary.cost,
            ingredients: summary
                .leaf_quantities
                .into_iter()
                .map(|(name, quantity)| IngredientQuantity { name, quantity })
                .collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        writeln!(f, "  Cook time: {}", self.cost)?;
        write!(f, "  Ingredients:")?;
        for (ingredient, quantity) in &self.leaf_quantities {
            write!(f, "\n    {:<24} {}", ingredient, quantity)?;
        }
        Ok(())
    }
}

/// Largest magnitude below which every integer is exactly representable
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Write whole numbers as JSON integers (`46`, not `46.0`)
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() <= MAX_EXACT_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_wire_format() {
        let summary = Summary {
            name: "Skibidi Spaghetti".to_string(),
            cost: 46.0,
            leaf_quantities: BTreeMap::from([
                ("Meatball".to_string(), 3.0),
                ("Pasta".to_string(), 1.0),
            ]),
        };

        let json = serde_json::to_value(SummaryResponse::from(summary)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Skibidi Spaghetti",
                "cookTime": 46,
                "ingredients": [
                    { "name": "Meatball", "quantity": 3 },
                    { "name": "Pasta", "quantity": 1 }
                ]
            })
        );
        assert_eq!(
            serde_json::to_string(&json).unwrap(),
            r#"{"cookTime":46,"ingredients":[{"name":"Meatball","quantity":3},{"name":"Pasta","quantity":1}],"name":"Skibidi Spaghetti"}"#
        );
    }

    #[test]
    fn test_fractional_values_stay_floats() {
        let summary = Summary {
            name: "Toast".to_string(),
            cost: 3.75,
            leaf_quantities: BTreeMap::from([("Bread".to_string(), 2.5)]),
        };

        let text = serde_json::to_string(&SummaryResponse::from(summary)).unwrap();
        assert_eq!(
            text,
            r#"{"name":"Toast","cookTime":3.75,"ingredients":[{"name":"Bread","quantity":2.5}]}"#
        );

        let decoded: SummaryResponse = serde_json::from_str(&text).unwrap();
        assert_eq!(decoded.cook_time, 3.75);
    }

    #[test]
    fn test_summary_text_listing() {
        let summary = Summary {
            name: "Omelette".to_string(),
            cost: 6.5,
            leaf_quantities: BTreeMap::from([
                ("Egg".to_string(), 2.0),
                ("Milk".to_string(), 0.5),
            ]),
        };

        let text = summary.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Omelette");
        assert_eq!(lines[1], "  Cook time: 6.5");
        assert_eq!(lines[2], "  Ingredients:");
        assert_eq!(lines[3].split_whitespace().collect::<Vec<_>>(), vec!["Egg", "2"]);
        assert_eq!(lines[4].split_whitespace().collect::<Vec<_>>(), vec!["Milk", "0.5"]);
        assert_eq!(lines.len(), 5);
    }
}
