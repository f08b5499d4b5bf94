//! Error types for the glyphdex collation pipeline.

use thiserror::Error;

/// Primary error type for catalog construction.
///
/// Only structural failures live here. A code point without a name or
/// without annotations is not an error; lookups for those return `Option`.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("malformed code point field: {0:?}")]
    MalformedField(String),

    #[error("code point out of range: {0:#x}")]
    InvalidCodePoint(u32),

    #[error("inverted code point range: {start:04X}..{end:04X}")]
    InvertedRange { start: u32, end: u32 },

    #[error("{source_name} line {line}: {error}")]
    Record {
        source_name: &'static str,
        line: usize,
        #[source]
        error: Box<CatalogError>,
    },

    #[error("section marker not found: {marker:?}")]
    MarkerNotFound { marker: String },

    #[error("annotation document error: {0}")]
    Annotations(String),

    #[error("unsupported text encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Attach the source document name and 1-based line number to an error.
    pub fn at_line(self, source_name: &'static str, line: usize) -> Self {
        Self::Record {
            source_name,
            line,
            error: Box::new(self),
        }
    }
}

/// Convenience Result type alias for CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;
