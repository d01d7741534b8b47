//! Final quantity resolution and presentation formatting.

use lazy_static::lazy_static;
use regex::Regex;

use crate::extract::patterns::Patterns;
use crate::models::records::{FinalRecord, MatchedRecord};

lazy_static! {
    static ref SIZE_SEPARATOR: Regex = Regex::new(r"\s*[Xx]\s*").unwrap();
}

/// Resolves the human-facing quantity and dimension display for a matched
/// record.
#[derive(Debug, Clone, Default)]
pub struct QuantityResolver {
    patterns: Patterns,
}

impl QuantityResolver {
    /// Create a resolver over the given patterns.
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Resolve one matched record into its final form.
    pub fn resolve(&self, record: MatchedRecord) -> FinalRecord {
        let quantity = self.resolve_quantity(&record);
        let dimension_display = dimension_display(record.size.as_deref(), record.length);

        FinalRecord {
            product_code: record.product_code,
            sku: record.sku,
            description: record.description,
            length: record.length,
            size: record.size,
            quantity,
            dimension_display,
        }
    }

    /// Combine the packaging expression with the ordered piece count.
    ///
    /// `"<n>PC"` in the expression divides the piece count into packaged
    /// units (integer floor); any other expression passes through verbatim.
    /// An unmatched record (empty packaging) resolves to an empty quantity.
    fn resolve_quantity(&self, record: &MatchedRecord) -> String {
        if record.packaging.is_empty() {
            return String::new();
        }

        match self.patterns.find_packaging_unit(&record.packaging) {
            // A zero per-unit count is a nonsense catalog row; pass the
            // expression through rather than divide by it.
            Some(per_unit) if per_unit > 0 => {
                let units = record.piece_count / per_unit;
                format!("{} {}", units, record.packaging)
            }
            _ => record.packaging.clone(),
        }
    }
}

/// Combine size and length for presentation.
///
/// A present size has its `x`/`X` separators collapsed (surrounding
/// whitespace stripped) and rewritten as `*`, then the length is appended:
/// `"2 X 6"` at length 16 renders as `"2*6*16"`. Without a size the bare
/// length is rendered.
pub fn dimension_display(size: Option<&str>, length: u32) -> String {
    match size {
        Some(size) if !size.is_empty() => {
            let normalized = SIZE_SEPARATOR.replace_all(size, "X").replace('X', "*");
            format!("{normalized}*{length}")
        }
        _ => length.to_string(),
    }
}
