//! Code point extraction from UCD-style range tables.
//!
//! Every extractor runs the same per-line algorithm: skip comments and blank
//! lines, take the first `;`-delimited field, and expand it with
//! [`decode_field`]. They differ only in which document they read and in
//! whether a [`SectionWindow`] restricts the lines considered.

mod window;

pub use window::{MODIFIER_BASE_END, MODIFIER_BASE_START, MarkerMatch, SectionWindow};

use tracing::{info, trace};

use crate::error::Result;
use crate::ucd::decode_field;

/// The upstream range tables the catalog is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// `emoji-data.txt`, every property table.
    Emoji,
    /// `MathClassEx.txt`.
    MathSymbols,
    /// `emoji-data.txt`, only the `Emoji_Modifier_Base` section.
    HumanEmoji,
}

impl SourceKind {
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Emoji | Self::HumanEmoji => "emoji-data.txt",
            Self::MathSymbols => "MathClassEx.txt",
        }
    }
}

/// True for lines that carry no record.
pub fn is_skippable(line: &str) -> bool {
    line.trim().is_empty() || line.starts_with('#')
}

/// Expand the numbered record lines of one source into code points.
///
/// Points are returned in document order and may repeat.
///
/// # Errors
///
/// A first field that is not a scalar or range aborts the extraction with
/// the offending line number attached.
pub fn extract_code_points<'a, I>(kind: SourceKind, lines: I) -> Result<Vec<u32>>
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let mut points = Vec::new();
    for (line_no, line) in lines {
        if is_skippable(line) {
            trace!(line = line_no, "skipped");
            continue;
        }
        let field = line.split(';').next().unwrap_or(line);
        let range = decode_field(field).map_err(|e| e.at_line(kind.file_name(), line_no))?;
        points.extend(range);
    }
    info!(source = ?kind, points = points.len(), "extracted code points");
    Ok(points)
}

fn numbered(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines().enumerate().map(|(idx, line)| (idx + 1, line))
}

/// All code points listed anywhere in `emoji-data.txt`.
pub fn extract_emoji(text: &str) -> Result<Vec<u32>> {
    extract_code_points(SourceKind::Emoji, numbered(text))
}

/// All code points listed in `MathClassEx.txt`.
pub fn extract_math_symbols(text: &str) -> Result<Vec<u32>> {
    extract_code_points(SourceKind::MathSymbols, numbered(text))
}

/// Code points of the `Emoji_Modifier_Base` section of `emoji-data.txt`,
/// i.e. the emoji that accept a skin-tone modifier.
///
/// # Errors
///
/// Besides malformed records, fails if the window markers are not found.
pub fn extract_human_emoji(text: &str, window: &SectionWindow) -> Result<Vec<u32>> {
    let lines = window.slice(text)?;
    extract_code_points(SourceKind::HumanEmoji, lines)
}
