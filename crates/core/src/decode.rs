//! Decoding of raw source bytes in their declared encoding.
//!
//! The Unicode data files are UTF-8; older mirrors serve them as
//! ISO-8859-1 and their ASCII content decodes identically.

use crate::error::{CatalogError, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Text encodings accepted for source documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
}

impl TextEncoding {
    /// Resolve an encoding label, case-insensitively.
    pub fn from_label(label: &str) -> Result<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "iso-8859-1" | "iso8859-1" | "latin-1" | "latin1" => Ok(Self::Latin1),
            _ => Err(CatalogError::UnsupportedEncoding(label.to_string())),
        }
    }

    pub fn decode(self, bytes: &[u8]) -> Result<String> {
        match self {
            Self::Utf8 => {
                let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                String::from_utf8(bytes.to_vec()).map_err(|e| CatalogError::Decode(e.to_string()))
            }
            // Every byte maps to the code point of the same value.
            Self::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

/// Decode `bytes` using the encoding named by `label`.
pub fn decode_source(bytes: &[u8], label: &str) -> Result<String> {
    TextEncoding::from_label(label)?.decode(bytes)
}
