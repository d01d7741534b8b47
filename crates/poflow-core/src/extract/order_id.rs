//! Order number extraction.

use crate::extract::patterns::Patterns;
use crate::models::config::OrderConfig;

/// Extracts the order identifier from recognized text.
///
/// Only the first match is used; a document carrying several order numbers
/// is processed under the first one.
#[derive(Debug, Clone, Default)]
pub struct OrderNumberExtractor {
    patterns: Patterns,
    config: OrderConfig,
}

impl OrderNumberExtractor {
    /// Create an extractor over the given patterns and order rules.
    pub fn new(patterns: Patterns, config: OrderConfig) -> Self {
        Self { patterns, config }
    }

    /// Extract the order number: captured digits with leading zeros stripped
    /// and the configured prefix re-applied. Falls back to the configured
    /// sentinel when the anchor is absent.
    pub fn extract(&self, text: &str) -> String {
        match self.patterns.find_order_digits(text) {
            Some(digits) => format!(
                "{}{}",
                self.config.number_prefix,
                digits.trim_start_matches('0')
            ),
            None => self.config.unknown_number.clone(),
        }
    }
}
