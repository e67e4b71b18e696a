//! Sphinx-Search: inspect the effective configuration
//!
//! Loads settings the same way an application embedding the facade would,
//! then prints the searchd endpoint and how the given labels resolve.

use anyhow::Result;
use clap::Parser;
use sphinx_search::{config, search::IndexRegistry};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Show the searchd endpoint and resolve index labels
#[derive(Parser, Debug)]
#[command(name = "sphinx-search")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to sphinx_search.yml
    #[arg(short, long, env = "SPHINX_SETTINGS_PATH")]
    config: Option<PathBuf>,

    /// Index labels to resolve; lists every label when empty
    labels: Vec<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let settings = config::init(args.config.as_deref())?;

    println!("searchd: {}", settings.searchd.address());
    match settings.indexer_bin() {
        Some(bin) => println!("indexer: {}", bin.display()),
        None => println!("indexer: (not configured)"),
    }

    let registry = IndexRegistry::new(settings.indexes.clone());
    if args.labels.is_empty() {
        for label in registry.labels() {
            println!("{} -> {}", label, registry.get(label).unwrap_or_default());
        }
        return Ok(());
    }

    let resolution = registry.resolve(&args.labels);
    if resolution.is_empty() {
        println!("no valid indexes");
    } else {
        println!("indexes: {}", resolution.joined());
    }
    for label in &resolution.dropped {
        println!("unknown label: {}", label);
    }

    Ok(())
}
