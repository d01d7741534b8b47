//! Candidate-to-catalog matching.

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::MatchError;
use crate::models::records::{CandidateRecord, MatchedRecord};

/// Joins candidate records against the reference catalog.
///
/// The join is left-preserving: every candidate yields exactly one matched
/// record, with empty catalog-derived fields on a miss.
#[derive(Debug, Clone)]
pub struct CatalogMatcher {
    catalog: Catalog,
}

impl CatalogMatcher {
    /// Create a matcher over a loaded catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog this matcher joins against.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Match a batch of candidates.
    ///
    /// Piece-count and length tokens must parse as integers; a failure
    /// aborts the whole batch.
    pub fn match_records(
        &self,
        candidates: &[CandidateRecord],
    ) -> Result<Vec<MatchedRecord>, MatchError> {
        candidates
            .iter()
            .map(|candidate| self.match_one(candidate))
            .collect()
    }

    fn match_one(&self, candidate: &CandidateRecord) -> Result<MatchedRecord, MatchError> {
        let (piece_token, length_token) = candidate
            .raw_dimension
            .split_once('/')
            .unwrap_or((candidate.raw_dimension.as_str(), ""));

        let piece_count: u32 =
            piece_token
                .trim()
                .parse()
                .map_err(|_| MatchError::PieceCount {
                    product_code: candidate.product_code.clone(),
                    value: piece_token.to_string(),
                })?;

        let digits: String = length_token
            .chars()
            .filter(char::is_ascii_digit)
            .collect();
        let length: u32 = digits.parse().map_err(|_| MatchError::Length {
            product_code: candidate.product_code.clone(),
            value: length_token.to_string(),
        })?;

        let entry = self.catalog.get(&candidate.product_code, length);
        if entry.is_none() {
            debug!(
                product_code = %candidate.product_code,
                length,
                "no catalog match for candidate"
            );
        }

        Ok(MatchedRecord {
            product_code: candidate.product_code.clone(),
            raw_dimension: candidate.raw_dimension.clone(),
            piece_count,
            length,
            size: candidate.size.clone(),
            description: entry.map(|e| e.description.clone()).unwrap_or_default(),
            sku: entry.map(|e| e.sku.clone()).unwrap_or_default(),
            packaging: entry.map(|e| e.packaging.clone()).unwrap_or_default(),
        })
    }
}
