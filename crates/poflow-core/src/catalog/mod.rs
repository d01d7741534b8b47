//! Reference catalog loading and keyed lookup.

mod loader;

pub use loader::normalize_length;

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::CatalogError;
use crate::extract::patterns::Patterns;
use crate::models::config::CatalogConfig;

/// One row of the reference catalog after key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Canonical catalog key, 6 digits - 4 digits - letters.
    pub product_code: String,

    /// Normalized length, digits only; 0 when the source value had none.
    pub length: u32,

    /// Human-facing product description.
    pub description: String,

    /// Stocking identifier.
    pub sku: String,

    /// Free-text packaging-quantity expression, e.g. `"4PC"`.
    pub packaging: String,
}

/// Reference catalog keyed by `(product_code, length)`.
///
/// Loaded once per pipeline construction and read-only afterwards, so it is
/// trivially shareable across concurrent pipeline instances by cloning.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<(String, u32), CatalogEntry>,
    duplicates: Vec<(String, u32)>,
}

impl Catalog {
    /// Load a catalog from a CSV file.
    pub fn from_csv_path(
        path: &Path,
        config: &CatalogConfig,
        patterns: &Patterns,
    ) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, config, patterns)
    }

    /// Load a catalog from any CSV reader.
    pub fn from_reader<R: std::io::Read>(
        reader: R,
        config: &CatalogConfig,
        patterns: &Patterns,
    ) -> Result<Self, CatalogError> {
        loader::load(reader, config, patterns)
    }

    /// Build a catalog from already-derived entries.
    ///
    /// Duplicate keys keep the first row; later rows are recorded and warned
    /// about, never silently merged.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut map = HashMap::new();
        let mut duplicates = Vec::new();

        for entry in entries {
            let key = (entry.product_code.clone(), entry.length);
            if map.contains_key(&key) {
                warn!(
                    product_code = %key.0,
                    length = key.1,
                    "duplicate catalog key, keeping first row"
                );
                duplicates.push(key);
                continue;
            }
            map.insert(key, entry);
        }

        Self {
            entries: map,
            duplicates,
        }
    }

    /// Look up the entry for a `(product_code, length)` key.
    pub fn get(&self, product_code: &str, length: u32) -> Option<&CatalogEntry> {
        self.entries.get(&(product_code.to_string(), length))
    }

    /// Number of distinct keyed entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys that appeared more than once in the source table.
    pub fn duplicates(&self) -> &[(String, u32)] {
        &self.duplicates
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, length: u32, sku: &str) -> CatalogEntry {
        CatalogEntry {
            product_code: code.to_string(),
            length,
            description: format!("{code} S4S"),
            sku: sku.to_string(),
            packaging: "4PC".to_string(),
        }
    }

    #[test]
    fn lookup_by_code_and_length() {
        let catalog = Catalog::from_entries(vec![
            entry("123456-7890-AB", 16, "SKU1"),
            entry("123456-7890-AB", 12, "SKU2"),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("123456-7890-AB", 16).unwrap().sku, "SKU1");
        assert_eq!(catalog.get("123456-7890-AB", 12).unwrap().sku, "SKU2");
        assert!(catalog.get("123456-7890-AB", 8).is_none());
        assert!(catalog.get("000000-0000-ZZ", 16).is_none());
    }

    #[test]
    fn duplicate_keys_keep_first_row() {
        let catalog = Catalog::from_entries(vec![
            entry("123456-7890-AB", 16, "FIRST"),
            entry("123456-7890-AB", 16, "SECOND"),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("123456-7890-AB", 16).unwrap().sku, "FIRST");
        assert_eq!(catalog.duplicates(), &[("123456-7890-AB".to_string(), 16)]);
    }
}
