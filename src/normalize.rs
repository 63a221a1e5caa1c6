// src/normalize.rs

//! Display-name normalization for handwritten recipe names
//!
//! Turns scrawled input such as `"alpHa-alFRedo"` or `"Riz@z RISO00tto!"`
//! into a clean title-cased name. This is a pure string transform; it knows
//! nothing about the catalog.

use regex::Regex;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[-_ ]+").unwrap());
static NON_LETTERS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-zA-Z ]+").unwrap());

/// Normalize a handwritten name
///
/// Hyphens, underscores and spaces collapse to single spaces, everything
/// other than ASCII letters is dropped, and each word is title-cased.
/// Returns `None` when nothing is left.
pub fn parse_handwriting(input: &str) -> Option<String> {
    let spaced = SEPARATORS.replace_all(input, " ");
    let letters = NON_LETTERS.replace_all(&spaced, "");

    let words: Vec<String> = letters.split_whitespace().map(title_case).collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => std::iter::once(first.to_ascii_uppercase())
            .chain(chars.map(|c| c.to_ascii_lowercase()))
            .collect(),
        None => String::new(),
    }
}
