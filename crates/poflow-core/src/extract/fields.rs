//! Field extraction from product blocks.

use tracing::debug;

use crate::extract::patterns::Patterns;
use crate::models::records::{CandidateRecord, RawBlock};

/// Pulls structured fields out of a product block and expands blocks with
/// several dimension tokens into one candidate per token.
#[derive(Debug, Clone, Default)]
pub struct FieldExtractor {
    patterns: Patterns,
}

impl FieldExtractor {
    /// Create an extractor over the given patterns.
    pub fn new(patterns: Patterns) -> Self {
        Self { patterns }
    }

    /// Extract the candidate records described by one block.
    ///
    /// Returns `None` when the block carries no product-code-shaped token;
    /// such blocks are dropped. A block without a dimension run still yields
    /// a single pass-through candidate so it reaches the matcher.
    pub fn extract(&self, block: &RawBlock) -> Option<Vec<CandidateRecord>> {
        let text = block.text();

        let Some(product_code) = self.patterns.find_product_code(&text) else {
            debug!("dropping block without product code");
            return None;
        };

        let size = self.patterns.find_size(&text);

        let candidates = match self.patterns.find_dimensions(&text) {
            Some(dimensions) => dimensions
                .split(',')
                .map(|token| CandidateRecord {
                    product_code: product_code.clone(),
                    raw_dimension: token.trim().to_string(),
                    size: size.clone(),
                })
                .collect(),
            None => vec![CandidateRecord {
                product_code,
                raw_dimension: String::new(),
                size,
            }],
        };

        Some(candidates)
    }
}
