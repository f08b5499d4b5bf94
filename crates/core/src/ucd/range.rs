//! Code point field decoding for UCD-style data files.
//!
//! A field is either a scalar `HHHH` or an inclusive range `HHHH..HHHH`,
//! hexadecimal without a `0x` prefix.

use std::ops::RangeInclusive;

use crate::error::{CatalogError, Result};

/// Highest valid Unicode code point.
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

/// Parse a bare hexadecimal code point.
///
/// `u32::from_str_radix` accepts a leading `+`, so the digits are checked
/// up front.
pub fn parse_code_point(hex: &str) -> Result<u32> {
    let hex = hex.trim();
    if hex.is_empty() || hex.len() > 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(CatalogError::MalformedField(hex.to_string()));
    }
    let cp = u32::from_str_radix(hex, 16)
        .map_err(|_| CatalogError::MalformedField(hex.to_string()))?;
    if cp > MAX_CODE_POINT {
        return Err(CatalogError::InvalidCodePoint(cp));
    }
    Ok(cp)
}

/// Decode one field into the code points it denotes.
///
/// # Errors
///
/// Fails on anything that is neither a scalar nor a range, and on a range
/// whose start lies after its end.
pub fn decode_field(field: &str) -> Result<RangeInclusive<u32>> {
    let field = field.trim();
    match field.split_once("..") {
        Some((start, end)) => {
            let start = parse_code_point(start)
                .map_err(|_| CatalogError::MalformedField(field.to_string()))?;
            let end = parse_code_point(end)
                .map_err(|_| CatalogError::MalformedField(field.to_string()))?;
            if start > end {
                return Err(CatalogError::InvertedRange { start, end });
            }
            Ok(start..=end)
        }
        None => {
            let cp = parse_code_point(field)?;
            Ok(cp..=cp)
        }
    }
}
