//! Process command - extract and match a single recognized-text document.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use poflow_core::models::config::{PoConfig, ReportConfig};
use poflow_core::{Catalog, Order, Patterns, Pipeline};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input file with recognized purchase-order text
    #[arg(required = true)]
    input: PathBuf,

    /// Reference catalog CSV
    #[arg(short = 'm', long, default_value = "productslist.csv")]
    catalog: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Print a record/unit summary after processing
    #[arg(long)]
    summary: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text release report
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let order = process_document(&args.input, &args.catalog, &config)?;

    let output = render(&order, args.format, &config.report)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.summary {
        println!();
        println!(
            "{} Order {}: {} records, {} units total",
            style("ℹ").blue(),
            order.number,
            order.records.len(),
            order.total_units()
        );
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

/// Load configuration from an explicit path or fall back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<PoConfig> {
    match config_path {
        Some(path) => Ok(PoConfig::from_file(Path::new(path))?),
        None => Ok(PoConfig::default()),
    }
}

/// Run the pipeline over one document file against a catalog file.
pub fn process_document(
    input: &Path,
    catalog_path: &Path,
    config: &PoConfig,
) -> anyhow::Result<Order> {
    let text = fs::read_to_string(input)?;

    let patterns = Patterns::compile(&config.patterns)?;
    let catalog = Catalog::from_csv_path(catalog_path, &config.catalog, &patterns)?;
    debug!("catalog loaded with {} entries", catalog.len());

    let pipeline = Pipeline::new(config, catalog)?;
    Ok(pipeline.run(&text)?)
}

/// Render a processed order in the requested output format.
pub fn render(
    order: &Order,
    format: OutputFormat,
    report: &ReportConfig,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(order)?),
        OutputFormat::Csv => render_csv(order),
        OutputFormat::Text => Ok(render_text(order, report)),
    }
}

fn render_csv(order: &Order) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "order",
        "product_code",
        "dimension",
        "sku",
        "description",
        "quantity",
    ])?;

    for record in &order.records {
        wtr.write_record([
            order.number.as_str(),
            record.product_code.as_str(),
            record.dimension_display.as_str(),
            record.sku.as_str(),
            record.description.as_str(),
            record.quantity.as_str(),
        ])?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

/// Render the plain-text release report: company header, record table and
/// the units-total footer.
fn render_text(order: &Order, report: &ReportConfig) -> String {
    let mut out = String::new();

    out.push_str(&format!("Load release for PO#{}\n", order.number));
    out.push_str(&format!(
        "Release to: {}  {}\n",
        report.release_to, report.company_name
    ));
    out.push_str(&format!("            {}\n", report.address_line1));
    out.push_str(&format!("            {}\n", report.address_line2));
    out.push_str(&format!(
        "CONTACT: {} {}\n",
        report.contact, report.contact_name
    ));
    out.push_str(&format!("Date: {}\n", chrono::Local::now().date_naive()));
    out.push('\n');

    out.push_str(&format!(
        "{:<10} {:<14} {:<18} {:<44} {}\n",
        "Order #", "Dimension", "SKU#", "PRODUCT DESCRIPTION", "QUANTITY"
    ));
    out.push_str(&format!("{}\n", order.number));

    for record in &order.records {
        out.push_str(&format!(
            "{:<10} {:<14} {:<18} {:<44} {}\n",
            "",
            record.dimension_display,
            record.sku,
            record.description,
            record.quantity
        ));
    }

    out.push_str(&format!("\n** {} UNITS TOTAL **\n", order.total_units()));
    out
}

#[cfg(test)]
mod tests {
    use poflow_core::FinalRecord;

    use super::*;

    fn order() -> Order {
        Order {
            number: "D123".to_string(),
            records: vec![FinalRecord {
                product_code: "123456-7890-AB".to_string(),
                sku: "SKU1".to_string(),
                description: "123456-7890-AB S4S KD".to_string(),
                length: 16,
                size: Some("2X6".to_string()),
                quantity: "2 4PC".to_string(),
                dimension_display: "2*6*16".to_string(),
            }],
        }
    }

    #[test]
    fn text_report_has_header_and_footer() {
        let text = render_text(&order(), &ReportConfig::default());
        assert!(text.starts_with("Load release for PO#D123\n"));
        assert!(text.contains("DISDERO LUMBER COMPANY"));
        assert!(text.contains("2*6*16"));
        assert!(text.ends_with("** 2 UNITS TOTAL **\n"));
    }

    #[test]
    fn csv_output_has_one_row_per_record() {
        let csv = render_csv(&order()).unwrap();
        let lines: Vec<&str> = csv.trim_end().lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("order,product_code"));
        assert!(lines[1].contains("SKU1"));
        assert!(lines[1].contains("2 4PC"));
    }
}
