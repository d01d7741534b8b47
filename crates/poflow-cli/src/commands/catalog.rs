//! Catalog command - inspect and validate a reference catalog.

use std::path::PathBuf;

use clap::Args;
use console::style;

use poflow_core::{Catalog, Patterns};

use super::process::load_config;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Reference catalog CSV
    #[arg(required = true)]
    catalog: PathBuf,

    /// List every loaded entry
    #[arg(long)]
    list: bool,
}

pub async fn run(args: CatalogArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let patterns = Patterns::compile(&config.patterns)?;
    let catalog = Catalog::from_csv_path(&args.catalog, &config.catalog, &patterns)?;

    println!(
        "{} Loaded {} catalog entries from {}",
        style("✓").green(),
        catalog.len(),
        args.catalog.display()
    );

    let duplicates = catalog.duplicates();
    if duplicates.is_empty() {
        println!("{} No duplicate keys", style("✓").green());
    } else {
        println!(
            "{} {} duplicate keys (first row kept for each):",
            style("⚠").yellow(),
            duplicates.len()
        );
        for (product_code, length) in duplicates {
            println!("  - {} @ {}", product_code, length);
        }
    }

    if args.list {
        println!();
        let mut entries: Vec<_> = catalog.iter().collect();
        entries.sort_by(|a, b| {
            (&a.product_code, a.length).cmp(&(&b.product_code, b.length))
        });
        for entry in entries {
            println!(
                "{:<18} {:>4}  {:<14} {:<44} {}",
                entry.product_code, entry.length, entry.sku, entry.description, entry.packaging
            );
        }
    }

    Ok(())
}
