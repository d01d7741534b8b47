//! CSV catalog loading and key derivation.

use std::io::Read;

use csv::ReaderBuilder;
use tracing::debug;

use super::{Catalog, CatalogEntry};
use crate::error::CatalogError;
use crate::extract::patterns::Patterns;
use crate::models::config::CatalogConfig;

pub(super) fn load<R: Read>(
    reader: R,
    config: &CatalogConfig,
    patterns: &Patterns,
) -> Result<Catalog, CatalogError> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);
    let headers = csv_reader.headers()?.clone();

    let description_idx = column_index(&headers, &config.description_column)?;
    let dimension_idx = column_index(&headers, &config.dimension_column)?;
    let quantity_idx = column_index(&headers, &config.quantity_column)?;
    let sku_idx = column_index(&headers, &config.sku_column)?;

    let mut entries = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        let description = record.get(description_idx).unwrap_or("").to_string();

        // Rows whose description does not open with a product code can never
        // match a candidate; skip them at load time.
        let Some(product_code) = patterns.catalog_product_code(&description) else {
            debug!("skipping catalog row without leading product code");
            continue;
        };

        entries.push(CatalogEntry {
            product_code,
            length: normalize_length(record.get(dimension_idx).unwrap_or("")),
            description,
            sku: record.get(sku_idx).unwrap_or("").to_string(),
            packaging: record.get(quantity_idx).unwrap_or("").to_string(),
        });
    }

    debug!("loaded {} catalog entries", entries.len());
    Ok(Catalog::from_entries(entries))
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize, CatalogError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
}

/// Normalize a raw length expression to its digits-only integer value.
///
/// Quotes are stripped, a `*`-separated dimension keeps only its last
/// segment, every remaining non-digit character is removed and the rest is
/// parsed. Values with no digits normalize to 0, never an error.
pub fn normalize_length(raw: &str) -> u32 {
    let stripped: String = raw.chars().filter(|c| *c != '\'' && *c != '"').collect();
    let last_segment = stripped.rsplit('*').next().unwrap_or("");
    let digits: String = last_segment.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const CATALOG_CSV: &str = "\
PRODUCT DESCRIPTION,Dimension,QUANTITY,SKU#
123456-7890-AB S4S KD,2*6*16',4PC,SKU1
123456-7890-AB S4S KD,2*6*12',2PC,SKU2
654321-0987-CD DECKING,20',6PC,SKU3
CEDAR TRIM NO CODE,8',1PC,SKU4
111111-2222-EF POST,n/a,BUNDLE,SKU5
";

    fn load_fixture(csv: &str) -> Catalog {
        Catalog::from_reader(
            csv.as_bytes(),
            &CatalogConfig::default(),
            &Patterns::default(),
        )
        .unwrap()
    }

    #[test]
    fn loads_rows_and_derives_keys() {
        let catalog = load_fixture(CATALOG_CSV);
        // The code-less CEDAR TRIM row is skipped.
        assert_eq!(catalog.len(), 4);

        let entry = catalog.get("123456-7890-AB", 16).unwrap();
        assert_eq!(entry.sku, "SKU1");
        assert_eq!(entry.packaging, "4PC");
        assert_eq!(entry.description, "123456-7890-AB S4S KD");

        assert_eq!(catalog.get("654321-0987-CD", 20).unwrap().sku, "SKU3");
    }

    #[test]
    fn lengths_without_digits_coerce_to_zero() {
        let catalog = load_fixture(CATALOG_CSV);
        assert_eq!(catalog.get("111111-2222-EF", 0).unwrap().sku, "SKU5");
    }

    #[test]
    fn loads_from_file_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");
        std::fs::write(&path, CATALOG_CSV).unwrap();

        let catalog =
            Catalog::from_csv_path(&path, &CatalogConfig::default(), &Patterns::default())
                .unwrap();
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = Catalog::from_csv_path(
            std::path::Path::new("no/such/catalog.csv"),
            &CatalogConfig::default(),
            &Patterns::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "PRODUCT DESCRIPTION,Dimension,QUANTITY\na,b,c\n";
        let err = Catalog::from_reader(
            csv.as_bytes(),
            &CatalogConfig::default(),
            &Patterns::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::MissingColumn(ref c) if c == "SKU#"));
    }

    #[test]
    fn configured_column_names_are_honored() {
        let csv = "desc,len,qty,sku\n123456-7890-AB,16',4PC,S1\n";
        let config = CatalogConfig {
            description_column: "desc".to_string(),
            dimension_column: "len".to_string(),
            quantity_column: "qty".to_string(),
            sku_column: "sku".to_string(),
        };
        let catalog =
            Catalog::from_reader(csv.as_bytes(), &config, &Patterns::default()).unwrap();
        assert_eq!(catalog.get("123456-7890-AB", 16).unwrap().sku, "S1");
    }

    #[test]
    fn normalize_takes_last_star_segment() {
        assert_eq!(normalize_length("2*6*16'"), 16);
        assert_eq!(normalize_length("16'"), 16);
        assert_eq!(normalize_length("16"), 16);
        assert_eq!(normalize_length("20 FT"), 20);
    }

    #[test]
    fn normalize_is_idempotent_on_digits() {
        assert_eq!(normalize_length("16"), 16);
        assert_eq!(normalize_length(&normalize_length("2*6*16'").to_string()), 16);
    }

    #[test]
    fn normalize_defaults_to_zero() {
        assert_eq!(normalize_length(""), 0);
        assert_eq!(normalize_length("n/a"), 0);
        assert_eq!(normalize_length("''"), 0);
    }
}
