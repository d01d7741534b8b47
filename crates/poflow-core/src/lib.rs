//! Core library for purchase-order text processing.
//!
//! This crate provides:
//! - Product block segmentation over recognized text
//! - Field extraction (product code, size, dimension tokens)
//! - Catalog loading and left-preserving matching
//! - Final quantity resolution for reporting

pub mod catalog;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod models;
pub mod pipeline;
pub mod quantity;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{CatalogError, MatchError, PatternError, PoError, Result};
pub use extract::{BlockSegmenter, FieldExtractor, OrderNumberExtractor, Patterns};
pub use matcher::CatalogMatcher;
pub use models::config::PoConfig;
pub use models::records::{CandidateRecord, FinalRecord, MatchedRecord, Order, RawBlock};
pub use pipeline::Pipeline;
pub use quantity::QuantityResolver;
