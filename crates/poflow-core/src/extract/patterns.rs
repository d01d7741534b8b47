//! Compiled extraction patterns.
//!
//! Each pattern is a named extractor testable in isolation from the join and
//! resolution stages. Components receive a compiled [`Patterns`] value at
//! construction instead of reaching into process-wide state.

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::PatternError;
use crate::models::config::PatternConfig;

lazy_static! {
    static ref DEFAULTS: Patterns =
        Patterns::compile(&PatternConfig::default()).expect("default patterns compile");
}

/// Compiled regular expressions driving segmentation and field extraction.
#[derive(Debug, Clone)]
pub struct Patterns {
    block_start: Regex,
    product_code: Regex,
    dimensions: Regex,
    dimension_token: Regex,
    size: Regex,
    order_number: Regex,
    packaging_unit: Regex,
}

impl Patterns {
    /// Compile pattern sources from configuration.
    pub fn compile(config: &PatternConfig) -> Result<Self, PatternError> {
        Ok(Self {
            block_start: compile(&config.block_start, "block_start")?,
            product_code: compile(&config.product_code, "product_code")?,
            dimensions: compile(&config.dimensions, "dimensions")?,
            dimension_token: compile(&config.dimension_token, "dimension_token")?,
            size: compile(&config.size, "size")?,
            order_number: compile(&config.order_number, "order_number")?,
            packaging_unit: compile(&config.packaging_unit, "packaging_unit")?,
        })
    }

    /// A line that opens a new product block.
    pub fn is_block_start(&self, line: &str) -> bool {
        self.block_start.is_match(line)
    }

    /// A line carrying at least one dimension token, closing the open block.
    pub fn has_dimension_token(&self, line: &str) -> bool {
        self.dimension_token.is_match(line)
    }

    /// First product-code-shaped token anywhere in the text.
    pub fn find_product_code(&self, text: &str) -> Option<String> {
        self.product_code.captures(text).map(|c| c[1].to_string())
    }

    /// Product code opening a catalog description: the code must start the
    /// description's first line.
    pub fn catalog_product_code(&self, description: &str) -> Option<String> {
        let first_line = description.lines().next().unwrap_or("");
        self.product_code
            .captures(first_line)
            .filter(|c| c.get(0).is_some_and(|m| m.start() == 0))
            .map(|c| c[1].to_string())
    }

    /// First run of comma-separated dimension tokens in the text.
    pub fn find_dimensions(&self, text: &str) -> Option<String> {
        self.dimensions.captures(text).map(|c| c[1].to_string())
    }

    /// First size token at the start of any line.
    pub fn find_size(&self, text: &str) -> Option<String> {
        self.size.captures(text).map(|c| c[1].to_string())
    }

    /// Order number digits after the company anchor.
    pub fn find_order_digits(&self, text: &str) -> Option<String> {
        self.order_number.captures(text).map(|c| c[1].to_string())
    }

    /// Per-unit piece count in a packaging expression, e.g. `4` in `"4PC"`.
    pub fn find_packaging_unit(&self, expr: &str) -> Option<u32> {
        self.packaging_unit
            .captures(expr)
            .and_then(|c| c[1].parse().ok())
    }
}

impl Default for Patterns {
    fn default() -> Self {
        DEFAULTS.clone()
    }
}

fn compile(source: &str, name: &'static str) -> Result<Regex, PatternError> {
    Regex::new(source).map_err(|source| PatternError::Invalid { name, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn block_start_matches_order_lines() {
        let patterns = Patterns::default();
        assert!(patterns.is_block_start("12 LF 123456-7890-AB S4S KD"));
        assert!(patterns.is_block_start("3 LE 111111-2222-XY"));
        assert!(!patterns.is_block_start("TOTAL 12 UNITS"));
        assert!(!patterns.is_block_start("LF 123456-7890-AB"));
    }

    #[test]
    fn product_code_anywhere_in_text() {
        let patterns = Patterns::default();
        assert_eq!(
            patterns.find_product_code("noise 123456-7890-AB noise"),
            Some("123456-7890-AB".to_string())
        );
        assert_eq!(patterns.find_product_code("123456-789-AB"), None);
        assert_eq!(patterns.find_product_code("123456-7890-ab"), None);
    }

    #[test]
    fn catalog_product_code_requires_leading_match() {
        let patterns = Patterns::default();
        assert_eq!(
            patterns.catalog_product_code("123456-7890-AB\nCEDAR S4S"),
            Some("123456-7890-AB".to_string())
        );
        assert_eq!(
            patterns.catalog_product_code("123456-7890-AB KD"),
            Some("123456-7890-AB".to_string())
        );
        assert_eq!(patterns.catalog_product_code("CEDAR 123456-7890-AB"), None);
        assert_eq!(patterns.catalog_product_code(""), None);
    }

    #[test]
    fn dimensions_capture_full_comma_run() {
        let patterns = Patterns::default();
        assert_eq!(
            patterns.find_dimensions("text 6/16', 4/12' more"),
            Some("6/16', 4/12'".to_string())
        );
        assert_eq!(
            patterns.find_dimensions("just 6/16' here"),
            Some("6/16'".to_string())
        );
        assert_eq!(patterns.find_dimensions("no tokens"), None);
    }

    #[test]
    fn size_matches_at_line_start_only() {
        let patterns = Patterns::default();
        assert_eq!(
            patterns.find_size("header\n2X6\nrest"),
            Some("2X6".to_string())
        );
        assert_eq!(
            patterns.find_size("2 X 6 CEDAR"),
            Some("2 X 6".to_string())
        );
        assert_eq!(patterns.find_size("1.25x4"), Some("1.25x4".to_string()));
        assert_eq!(patterns.find_size("grade 2X6"), None);
    }

    #[test]
    fn order_digits_after_company_anchor() {
        let patterns = Patterns::default();
        assert_eq!(
            patterns.find_order_digits("DISDERO LUMBER CO. D000123"),
            Some("000123".to_string())
        );
        assert_eq!(
            patterns.find_order_digits("LUMBER CO D42"),
            Some("42".to_string())
        );
        assert_eq!(patterns.find_order_digits("no order here"), None);
    }

    #[test]
    fn packaging_unit_parses_leading_count() {
        let patterns = Patterns::default();
        assert_eq!(patterns.find_packaging_unit("4PC"), Some(4));
        assert_eq!(patterns.find_packaging_unit("12PC BUNDLE"), Some(12));
        assert_eq!(patterns.find_packaging_unit("BUNDLE"), None);
    }

    #[test]
    fn invalid_override_is_a_pattern_error() {
        let config = PatternConfig {
            block_start: "([unclosed".to_string(),
            ..PatternConfig::default()
        };
        let err = Patterns::compile(&config).unwrap_err();
        assert!(err.to_string().contains("block_start"));
    }
}
