//! The collated character catalog and the skin-tone flag set.
//!
//! - `CatalogEntry` / `Catalog`: named characters in ascending code point order
//! - `SkinToneFlagSet`: emoji that accept a skin-tone modifier
//! - `envelope`: pluggable framing around the two rendered sections
//! - `writer`: renders both sections to any `io::Write`

mod envelope;
mod writer;

pub use envelope::{CatalogEnvelope, PlainEnvelope, PythonModuleEnvelope};
pub use writer::CatalogWriter;

use std::collections::BTreeSet;

use itertools::Itertools;

use crate::params::Emphasis;
use crate::ucd::DirectionalChar;

/// One line of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code_point: u32,
    pub ch: char,
    pub name: String,
    pub annotations: Option<Vec<String>>,
    /// Derived from the bidi class of `ch`.
    pub force_ltr: bool,
}

impl CatalogEntry {
    /// The character, with a left-to-right mark in front when requested and
    /// the character is right-to-left.
    pub fn display_char(&self, directional_marks: bool) -> String {
        if directional_marks {
            DirectionalChar {
                ch: self.ch,
                force_ltr: self.force_ltr,
            }
            .directional()
        } else {
            self.ch.to_string()
        }
    }

    /// Render as `"<char> <name>"` or `"<char> <name> <em>(<kw>, <kw>)</em>"`.
    pub fn render(&self, emphasis: &Emphasis, directional_marks: bool) -> String {
        let mut line = format!("{} {}", self.display_char(directional_marks), self.name);
        if let Some(keywords) = &self.annotations {
            line.push(' ');
            line.push_str(&emphasis.open);
            line.push('(');
            line.push_str(&keywords.join(", "));
            line.push(')');
            line.push_str(&emphasis.close);
        }
        line
    }
}

/// Named characters, unique and in strictly ascending code point order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Wrap entries that are already sorted and deduplicated.
    pub(crate) fn from_sorted(entries: Vec<CatalogEntry>) -> Self {
        debug_assert!(
            entries
                .iter()
                .tuple_windows()
                .all(|(a, b)| a.code_point < b.code_point)
        );
        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CatalogEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, code_point: u32) -> Option<&CatalogEntry> {
        self.entries
            .binary_search_by_key(&code_point, |e| e.code_point)
            .ok()
            .map(|idx| &self.entries[idx])
    }

    pub fn code_points(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|e| e.code_point)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CatalogEntry;
    type IntoIter = std::slice::Iter<'a, CatalogEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Code points that admit a skin-tone modifier.
///
/// Membership only; it is independent of the catalog and need not be a
/// subset of it. Iteration is in ascending order so output is reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkinToneFlagSet {
    points: BTreeSet<u32>,
}

impl SkinToneFlagSet {
    pub fn contains(&self, code_point: u32) -> bool {
        self.points.contains(&code_point)
    }

    pub fn contains_char(&self, ch: char) -> bool {
        self.contains(u32::from(ch))
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Members as characters. Values that are not Unicode scalar values
    /// (surrogates) are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.points.iter().filter_map(|&cp| char::from_u32(cp))
    }

    /// Members rendered as strings, optionally with left-to-right marks.
    pub fn rendered(&self, directional_marks: bool) -> Vec<String> {
        self.chars()
            .map(|ch| {
                if directional_marks {
                    DirectionalChar::from_char(ch).directional()
                } else {
                    ch.to_string()
                }
            })
            .collect()
    }
}

impl FromIterator<u32> for SkinToneFlagSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}
