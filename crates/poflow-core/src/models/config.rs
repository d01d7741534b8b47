//! Configuration structures for the extraction pipeline.
//!
//! Regex patterns, the order number prefix, catalog column names and report
//! identity lines are all explicit configuration handed to each component at
//! construction, so tests can run against overridden patterns.

use serde::{Deserialize, Serialize};

/// Main configuration for the poflow pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PoConfig {
    /// Extraction pattern sources.
    pub patterns: PatternConfig,

    /// Order identifier rules.
    pub order: OrderConfig,

    /// Catalog table column names.
    pub catalog: CatalogConfig,

    /// Company identity lines for the release report.
    pub report: ReportConfig,
}

impl Default for PoConfig {
    fn default() -> Self {
        Self {
            patterns: PatternConfig::default(),
            order: OrderConfig::default(),
            catalog: CatalogConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

/// Regex pattern sources, compiled once into
/// [`Patterns`](crate::extract::Patterns) at component construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternConfig {
    /// A line that opens a product block: leading integer, two-letter unit
    /// token, product-code-shaped token.
    pub block_start: String,

    /// A product-code-shaped token anywhere in text.
    pub product_code: String,

    /// A run of one or more comma-separated dimension tokens.
    pub dimensions: String,

    /// A single dimension token; its presence on a line closes the open
    /// block.
    pub dimension_token: String,

    /// A size token at the start of a line, e.g. `"2X6"` or `"2 X 6"`.
    pub size: String,

    /// Order number digits after the company-name anchor.
    pub order_number: String,

    /// Per-unit piece count inside a packaging expression, e.g. `"4PC"`.
    pub packaging_unit: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            block_start: r"^\d+\s+L[FE]\s+\d{6}-\d{4}-[A-Z]+".to_string(),
            product_code: r"\b(\d{6}-\d{4}-[A-Z]+)\b".to_string(),
            dimensions: r"(\d+/\d+'(?:,\s*\d+/\d+')*)".to_string(),
            dimension_token: r"\d+/\d+'".to_string(),
            size: r"(?m)^\s*([\d.]+\s*[Xx]\s*[\d.]+)".to_string(),
            order_number: r"LUMBER CO\.?\s+D(\d+)".to_string(),
            packaging_unit: r"(\d+)PC".to_string(),
        }
    }
}

/// Order identifier rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Literal prefix re-applied after leading zeros are stripped from the
    /// captured digits.
    pub number_prefix: String,

    /// Sentinel used when the document carries no order number.
    pub unknown_number: String,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            number_prefix: "D".to_string(),
            unknown_number: "UNKNOWN".to_string(),
        }
    }
}

/// Column names of the external catalog table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Column holding the product description the code is derived from.
    pub description_column: String,

    /// Column holding the raw length expression.
    pub dimension_column: String,

    /// Column holding the packaging-quantity expression.
    pub quantity_column: String,

    /// Column holding the stocking identifier.
    pub sku_column: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            description_column: "PRODUCT DESCRIPTION".to_string(),
            dimension_column: "Dimension".to_string(),
            quantity_column: "QUANTITY".to_string(),
            sku_column: "SKU#".to_string(),
        }
    }
}

/// Company identity lines rendered into the text release report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Company name.
    pub company_name: String,

    /// First address line.
    pub address_line1: String,

    /// Second address line.
    pub address_line2: String,

    /// Contact phone number.
    pub contact: String,

    /// Contact person.
    pub contact_name: String,

    /// Release-to code printed in the report header.
    pub release_to: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            company_name: "DISDERO LUMBER COMPANY".to_string(),
            address_line1: "12301 SE CARPENTER DRIVE".to_string(),
            address_line2: "CLACKAMAS, OR 97015".to_string(),
            contact: "503-239-8888".to_string(),
            contact_name: "COURTNEY WARDELL".to_string(),
            release_to: "DLC-2".to_string(),
        }
    }
}

impl PoConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}
