//! Record types flowing through the extraction pipeline.
//!
//! Data flows strictly forward: raw text is segmented into [`RawBlock`]s,
//! each block expands into [`CandidateRecord`]s, candidates are joined into
//! [`MatchedRecord`]s, and resolution produces the [`FinalRecord`]s carried
//! by an [`Order`].

use serde::{Deserialize, Serialize};

/// A contiguous run of recognized-text lines believed to describe one
/// catalog item group and its ordered lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawBlock {
    /// Lines in source order, starting with the block-start line.
    pub lines: Vec<String>,
}

impl RawBlock {
    /// Join the block back into newline-delimited text for whole-block
    /// pattern searches.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// A structured line-item candidate pulled out of one product block.
///
/// A block with N comma-separated dimension tokens yields N candidates
/// sharing `product_code` and `size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// Canonical catalog key, shaped 6 digits - 4 digits - letters.
    pub product_code: String,

    /// Raw dimension token, shaped `"<piece_count>/<length>'"`. Empty when
    /// the block carried no dimension run (degenerate pass-through).
    pub raw_dimension: String,

    /// Nominal size token, e.g. `"2X6"`, when one was found in the block.
    pub size: Option<String>,
}

/// A candidate joined with at most one catalog entry sharing
/// `(product_code, length)`.
///
/// Unmatched candidates keep empty catalog-derived fields; they are never
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedRecord {
    /// Canonical catalog key.
    pub product_code: String,

    /// Raw dimension token the piece count and length were parsed from.
    pub raw_dimension: String,

    /// Ordered piece count, the part before the `/`.
    pub piece_count: u32,

    /// Normalized length, digits only.
    pub length: u32,

    /// Nominal size token, broadcast across the block's candidates.
    pub size: Option<String>,

    /// Catalog display description, empty when unmatched.
    pub description: String,

    /// Stocking identifier, empty when unmatched.
    pub sku: String,

    /// Packaging-quantity expression, e.g. `"4PC"`, empty when unmatched.
    pub packaging: String,
}

/// A fully resolved order line ready for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalRecord {
    /// Canonical catalog key.
    pub product_code: String,

    /// Stocking identifier, empty when unmatched.
    pub sku: String,

    /// Catalog display description, empty when unmatched.
    pub description: String,

    /// Normalized length.
    pub length: u32,

    /// Nominal size token as extracted.
    pub size: Option<String>,

    /// Resolved human-facing quantity, e.g. `"2 4PC"`. Empty when the
    /// candidate had no catalog match.
    pub quantity: String,

    /// Size and length combined for presentation, e.g. `"2*6*16"`.
    pub dimension_display: String,
}

/// The top-level result of one pipeline run: an order identifier plus its
/// line items in order of first appearance in the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier, e.g. `"D123"`, or the configured sentinel when the
    /// document carried none.
    pub number: String,

    /// Resolved line items in source order.
    pub records: Vec<FinalRecord>,
}

impl Order {
    /// Sum of the leading integer token of each record's quantity string.
    ///
    /// Records whose quantity does not start with a bare integer contribute
    /// zero.
    pub fn total_units(&self) -> u64 {
        self.records.iter().map(|r| leading_units(&r.quantity)).sum()
    }
}

fn leading_units(quantity: &str) -> u64 {
    quantity
        .split_whitespace()
        .next()
        .and_then(|token| token.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_quantity(quantity: &str) -> FinalRecord {
        FinalRecord {
            product_code: "123456-7890-AB".to_string(),
            sku: String::new(),
            description: String::new(),
            length: 16,
            size: None,
            quantity: quantity.to_string(),
            dimension_display: "16".to_string(),
        }
    }

    #[test]
    fn total_units_sums_leading_integers() {
        let order = Order {
            number: "D123".to_string(),
            records: vec![
                record_with_quantity("2 4PC"),
                record_with_quantity("1 4PC"),
                record_with_quantity("12 2PC"),
            ],
        };
        assert_eq!(order.total_units(), 15);
    }

    #[test]
    fn total_units_skips_non_numeric_leaders() {
        let order = Order {
            number: "D123".to_string(),
            records: vec![
                record_with_quantity("2 4PC"),
                record_with_quantity("BUNDLE"),
                record_with_quantity("4PC"),
                record_with_quantity(""),
            ],
        };
        assert_eq!(order.total_units(), 2);
    }

    #[test]
    fn raw_block_text_joins_lines() {
        let block = RawBlock {
            lines: vec!["12 LF 123456-7890-AB".to_string(), "2X6".to_string()],
        };
        assert_eq!(block.text(), "12 LF 123456-7890-AB\n2X6");
    }
}
