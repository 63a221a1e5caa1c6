// src/error.rs

//! Error types for the cookbook catalog

use thiserror::Error;

/// Result type for catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the catalog engine and its adapters
///
/// The first five variants are the engine's own failures. Every one of them
/// leaves the catalog exactly as it was before the failing call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// An entry with this name is already in the catalog
    #[error("entry names must be unique: {0} already exists")]
    DuplicateName(String),

    /// Inserting `entry` would close a cycle through `via`
    #[error("a cycle would be formed if {via} is part of {entry}")]
    CycleDetected { entry: String, via: String },

    /// The named entry is not in the catalog
    #[error("{0} not found in the cookbook")]
    NotFound(String),

    /// The named entry is an ingredient, not a recipe
    #[error("{0} is not a recipe")]
    NotARecipe(String),

    /// A recipe requires a name that was never added
    #[error("{missing} (required by {recipe}) not found in the cookbook")]
    DanglingReference { recipe: String, missing: String },

    /// An entry request failed field-level validation
    #[error("invalid entry: {0}")]
    InvalidEntry(String),

    /// A seed catalog file could not be parsed
    #[error("parse error: {0}")]
    ParseError(String),

    /// Filesystem error while reading a seed catalog file
    #[error("IO error: {0}")]
    IoError(String),
}

impl Error {
    /// Stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateName(_) => "duplicate_name",
            Self::CycleDetected { .. } => "cycle_detected",
            Self::NotFound(_) => "not_found",
            Self::NotARecipe(_) => "not_a_recipe",
            Self::DanglingReference { .. } => "dangling_reference",
            Self::InvalidEntry(_) => "invalid_entry",
            Self::ParseError(_) => "parse_error",
            Self::IoError(_) => "io_error",
        }
    }

    /// Create an invalid-entry error with a message
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidEntry(msg.into())
    }
}
