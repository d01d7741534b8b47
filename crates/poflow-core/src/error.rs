//! Error types for the poflow-core library.

use thiserror::Error;

/// Main error type for the poflow library.
#[derive(Error, Debug)]
pub enum PoError {
    /// Catalog loading error.
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Catalog matching error.
    #[error("match error: {0}")]
    Match(#[from] MatchError),

    /// Pattern compilation error.
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while loading the reference catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Failed to parse the catalog table.
    #[error("failed to read catalog: {0}")]
    Read(#[from] csv::Error),

    /// A required column is missing from the catalog header.
    #[error("catalog missing required column: {0}")]
    MissingColumn(String),

    /// Failed to open the catalog file.
    #[error("failed to open catalog: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while joining candidates against the catalog.
///
/// Both variants abort the whole batch: parse integrity of dimension tokens
/// is a precondition of matching, not a recoverable per-row failure.
#[derive(Error, Debug)]
pub enum MatchError {
    /// A candidate's piece-count token is not an integer.
    #[error("invalid piece count {value:?} for product {product_code}")]
    PieceCount {
        product_code: String,
        value: String,
    },

    /// A candidate's length token has no digits to parse.
    #[error("invalid dimension length {value:?} for product {product_code}")]
    Length {
        product_code: String,
        value: String,
    },
}

/// Errors raised while compiling extraction patterns.
#[derive(Error, Debug)]
pub enum PatternError {
    /// A configured pattern is not a valid regular expression.
    #[error("invalid {name} pattern: {source}")]
    Invalid {
        name: &'static str,
        source: regex::Error,
    },
}

/// Result type for the poflow library.
pub type Result<T> = std::result::Result<T, PoError>;
