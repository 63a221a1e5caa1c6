// src/commands.rs
//! Command handlers for the cookbook CLI

use anyhow::{Context, Result};
use cookbook::catalog::{SummaryResponse, load_catalog_file};
use cookbook::parse_handwriting;
use std::path::Path;
use tracing::info;

/// Run the HTTP server
#[cfg(feature = "server")]
pub async fn cmd_serve(config_path: &str, bind: Option<String>, seed: Option<String>) -> Result<()> {
    let config = cookbook::CookbookConfig::load_or_default(Path::new(config_path))?;
    let mut server_config = config.to_server_config()?;

    if let Some(bind) = bind {
        server_config.bind_addr = bind
            .parse()
            .with_context(|| format!("Invalid bind address: {}", bind))?;
    }
    if let Some(seed) = seed {
        server_config.seed_path = Some(seed.into());
    }

    cookbook::server::run_server(server_config).await
}

/// Summarize a recipe from a catalog file
pub fn cmd_summary(name: &str, catalog_path: &str, json: bool) -> Result<()> {
    let catalog = load_catalog_file(Path::new(catalog_path))?;
    let summary = catalog
        .summarize(name)
        .with_context(|| format!("Cannot summarize {}", name))?;

    info!("Summarized {} from {}", name, catalog_path);

    if json {
        let response = SummaryResponse::from(summary);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("{}", summary);
    Ok(())
}

/// Load a catalog file and print its statistics
pub fn cmd_check(catalog_path: &str) -> Result<()> {
    let catalog = load_catalog_file(Path::new(catalog_path))?;
    let stats = catalog.stats();

    println!("Catalog: {}", catalog_path);
    println!("  Ingredients: {}", stats.ingredients);
    println!("  Recipes: {}", stats.recipes);
    println!("  Requirements: {}", stats.edges);

    if stats.dangling_references > 0 {
        println!("  Dangling references: {}", stats.dangling_references);
        for (recipe, missing) in catalog.dangling_references() {
            println!("    {} -> {}", recipe, missing);
        }
    }

    Ok(())
}

/// Print the dependency report for one entry
pub fn cmd_deps(name: &str, catalog_path: &str) -> Result<()> {
    let catalog = load_catalog_file(Path::new(catalog_path))?;
    let report = catalog
        .dependency_report(name)
        .with_context(|| format!("Cannot inspect {}", name))?;

    match report.kind {
        Some(kind) => println!("{} ({})", report.name, kind),
        None => println!("{} (not in catalog)", report.name),
    }
    println!("  Requires: {}", list_or_none(&report.requires));
    println!("  Required by: {}", list_or_none(&report.required_by));

    if !report.all_requirements.is_empty() {
        let all: Vec<String> = report.all_requirements.into_iter().collect();
        println!("  All requirements: {}", all.join(", "));
    }
    if !report.expansion_order.is_empty() {
        println!("  Expansion order:");
        for (step, entry) in report.expansion_order.iter().enumerate() {
            println!("    {:>3}. {}", step + 1, entry);
        }
    }

    Ok(())
}

fn list_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "(none)".to_string()
    } else {
        names.join(", ")
    }
}

/// Normalize a handwritten recipe name
pub fn cmd_parse(input: &str) -> Result<()> {
    let parsed =
        parse_handwriting(input).with_context(|| format!("Invalid recipe name: {:?}", input))?;
    println!("{}", parsed);
    Ok(())
}
