// src/cli.rs
//! CLI definitions for the cookbook
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "cookbook")]
#[command(author = "Cookbook Contributors")]
#[command(version)]
#[command(about = "Recipe catalog with cycle-checked entries and cost summaries", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP server
    #[cfg(feature = "server")]
    Serve {
        /// Path to the configuration file
        #[arg(short, long, default_value = "/etc/cookbook/cookbook.toml")]
        config: String,

        /// Bind address (overrides the config file)
        #[arg(short, long)]
        bind: Option<String>,

        /// Seed catalog file (overrides the config file)
        #[arg(short, long)]
        seed: Option<String>,
    },

    /// Summarize a recipe from a catalog file
    Summary {
        /// Recipe to summarize
        name: String,

        /// Catalog file (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        catalog: String,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load a catalog file and report what it contains
    Check {
        /// Catalog file (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        catalog: String,
    },

    /// Show what an entry requires, what requires it, and its expansion order
    Deps {
        /// Entry to inspect
        name: String,

        /// Catalog file (TOML, or JSON with a .json extension)
        #[arg(short, long)]
        catalog: String,
    },

    /// Normalize a handwritten recipe name
    Parse {
        /// Name to normalize
        input: String,
    },
}
