//! Text extraction: block segmentation, field extraction, order numbers.

pub mod fields;
pub mod order_id;
pub mod patterns;
pub mod segmenter;

pub use fields::FieldExtractor;
pub use order_id::OrderNumberExtractor;
pub use patterns::Patterns;
pub use segmenter::BlockSegmenter;
