//! Marker-delimited sections of a data file.
//!
//! `emoji-data.txt` holds several property tables in one file. The
//! skin-tone capable subset is the block that follows one specific comment
//! line and stops at another, so the window is described by the literal
//! text of those two lines.

use serde::Deserialize;
use tracing::debug;

use crate::error::{CatalogError, Result};

/// Start of the `Emoji_Modifier_Base` listing in emoji-data.txt 12.0.
/// The trailing space is part of the upstream line.
pub const MODIFIER_BASE_START: &str = "# All omitted code points have Emoji_Modifier_Base=No ";

/// End of the `Emoji_Modifier_Base` listing in emoji-data.txt 12.0.
pub const MODIFIER_BASE_END: &str = "# Total elements: 120";

/// How marker lines are compared against the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerMatch {
    /// Byte-for-byte equality.
    #[default]
    Exact,
    /// Equality after trimming surrounding whitespace on both sides.
    Trimmed,
}

impl MarkerMatch {
    fn matches(self, line: &str, marker: &str) -> bool {
        match self {
            Self::Exact => line == marker,
            Self::Trimmed => line.trim() == marker.trim(),
        }
    }
}

/// A start/end marker pair selecting the lines between them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SectionWindow {
    pub start: String,
    pub end: String,
    pub matching: MarkerMatch,
}

impl Default for SectionWindow {
    fn default() -> Self {
        Self::new(MODIFIER_BASE_START, MODIFIER_BASE_END)
    }
}

impl SectionWindow {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            matching: MarkerMatch::Exact,
        }
    }

    pub fn with_matching(mut self, matching: MarkerMatch) -> Self {
        self.matching = matching;
        self
    }

    /// Return the numbered lines strictly between the start and end markers.
    ///
    /// Line numbers are 1-based. The first end marker after the start
    /// marker closes the window.
    ///
    /// # Errors
    ///
    /// `MarkerNotFound` if either marker is missing.
    pub fn slice<'a>(&self, text: &'a str) -> Result<Vec<(usize, &'a str)>> {
        let mut lines = text.lines().enumerate();

        let start_line = lines
            .by_ref()
            .find(|(_, line)| self.matching.matches(line, &self.start))
            .map(|(idx, _)| idx + 1)
            .ok_or_else(|| CatalogError::MarkerNotFound {
                marker: self.start.clone(),
            })?;

        let mut body = Vec::new();
        for (idx, line) in lines {
            if self.matching.matches(line, &self.end) {
                debug!(
                    start = start_line,
                    end = idx + 1,
                    lines = body.len(),
                    "section window located"
                );
                return Ok(body);
            }
            body.push((idx + 1, line));
        }

        Err(CatalogError::MarkerNotFound {
            marker: self.end.clone(),
        })
    }
}
