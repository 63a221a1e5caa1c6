// src/lib.rs

//! Cookbook recipe catalog
//!
//! An in-memory catalog of ingredients and recipes that refuses any entry
//! which would make the recipe requirement graph cyclic, and flattens a
//! recipe into the total quantity of every ingredient it needs.
//!
//! # Architecture
//!
//! - `catalog`: the entry model and `CatalogGraph` engine
//! - `normalize`: handwritten display-name cleanup
//! - `config`: TOML configuration file
//! - `server`: axum JSON adapter (feature `server`)

pub mod catalog;
pub mod config;
mod error;
pub mod normalize;

#[cfg(feature = "server")]
pub mod server;

pub use catalog::{
    CatalogGraph, CatalogStats, DependencyReport, Entry, EntryKind, EntryRequest, Ingredient,
    Recipe, Summary, SummaryResponse,
};
pub use config::CookbookConfig;
pub use error::{Error, Result};
pub use normalize::parse_handwriting;
