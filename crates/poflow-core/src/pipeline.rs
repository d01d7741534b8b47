//! The end-to-end extraction pipeline.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::extract::fields::FieldExtractor;
use crate::extract::order_id::OrderNumberExtractor;
use crate::extract::patterns::Patterns;
use crate::extract::segmenter::BlockSegmenter;
use crate::matcher::CatalogMatcher;
use crate::models::config::PoConfig;
use crate::models::records::{CandidateRecord, Order};
use crate::quantity::QuantityResolver;

/// The four-stage purchase-order extraction pipeline.
///
/// Each stage is a pure transformation over an in-memory sequence; the only
/// state is the catalog captured at construction. A run either completes or
/// returns the error that aborted it. Callers processing several documents
/// concurrently should run one pipeline instance per document; the catalog
/// is read-only and cheap to share by cloning.
#[derive(Debug, Clone)]
pub struct Pipeline {
    order_numbers: OrderNumberExtractor,
    segmenter: BlockSegmenter,
    extractor: FieldExtractor,
    matcher: CatalogMatcher,
    resolver: QuantityResolver,
}

impl Pipeline {
    /// Build a pipeline from configuration and a loaded catalog.
    pub fn new(config: &PoConfig, catalog: Catalog) -> Result<Self> {
        let patterns = Patterns::compile(&config.patterns)?;
        Ok(Self {
            order_numbers: OrderNumberExtractor::new(patterns.clone(), config.order.clone()),
            segmenter: BlockSegmenter::new(patterns.clone()),
            extractor: FieldExtractor::new(patterns.clone()),
            matcher: CatalogMatcher::new(catalog),
            resolver: QuantityResolver::new(patterns),
        })
    }

    /// Run the pipeline over one document's recognized text.
    ///
    /// Raw text flows strictly forward: order number, blocks, candidates,
    /// matched records, final records.
    pub fn run(&self, text: &str) -> Result<Order> {
        let number = self.order_numbers.extract(text);
        debug!(order = %number, "extracted order number");

        let blocks = self.segmenter.segment(text);

        let candidates: Vec<CandidateRecord> = blocks
            .iter()
            .filter_map(|block| self.extractor.extract(block))
            .flatten()
            .collect();
        debug!("expanded {} candidate records", candidates.len());

        let matched = self.matcher.match_records(&candidates)?;

        let records = matched
            .into_iter()
            .map(|record| self.resolver.resolve(record))
            .collect();

        let order = Order { number, records };
        info!(
            order = %order.number,
            records = order.records.len(),
            total_units = order.total_units(),
            "processed purchase order"
        );

        Ok(order)
    }
}
