//! CLDR annotation keywords.
//!
//! Reads a CLDR `annotations/<lang>.xml` document of the shape
//!
//! ```xml
//! <ldml>
//!   <annotations>
//!     <annotation cp="😀">face | grin</annotation>
//!     <annotation cp="😀" type="tts">grinning face</annotation>
//!   </annotations>
//! </ldml>
//! ```
//!
//! Only the default entries are kept; `type="tts"` entries are the
//! text-to-speech short names and are ignored.

use roxmltree::{Document, Node, ParsingOptions};
use rustc_hash::FxHashMap;
use tracing::{info, trace};

use crate::error::{CatalogError, Result};

/// Read-only lookup from code point to its ordered keyword list.
#[derive(Debug, Default, Clone)]
pub struct AnnotationTable {
    keywords: FxHashMap<u32, Vec<String>>,
}

/// Split an annotation body on `" | "`, trimming each keyword.
///
/// A bare `|` without surrounding spaces belongs to the keyword.
pub fn split_keywords(text: &str) -> Vec<String> {
    text.split(" | ")
        .map(str::trim)
        .filter(|kw| !kw.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_default_annotation(node: &Node<'_, '_>) -> bool {
    node.is_element()
        && node.has_tag_name("annotation")
        && node.attribute("type") != Some("tts")
}

impl AnnotationTable {
    /// Parse a CLDR annotation document.
    ///
    /// Entries whose `cp` is a multi-character sequence cannot be looked up
    /// by a single code point and are skipped. A later entry for the same
    /// code point replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Fails if the document is not well-formed XML.
    pub fn parse(xml: &str) -> Result<Self> {
        // CLDR files carry a DOCTYPE pointing at ldml.dtd.
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let doc = Document::parse_with_options(xml, options)
            .map_err(|e| CatalogError::Annotations(e.to_string()))?;

        let mut keywords = FxHashMap::default();
        let mut sequences = 0usize;

        let sections = doc
            .root_element()
            .children()
            .filter(|n| n.is_element() && n.has_tag_name("annotations"));
        for node in sections.flat_map(|s| s.children()).filter(is_default_annotation) {
            let Some(cp) = node.attribute("cp") else {
                continue;
            };
            let mut chars = cp.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                sequences += 1;
                trace!(cp, "skipped multi-character annotation");
                continue;
            };
            let words = split_keywords(node.text().unwrap_or_default());
            if words.is_empty() {
                continue;
            }
            keywords.insert(u32::from(ch), words);
        }

        info!(
            annotations = keywords.len(),
            sequences, "annotation table built"
        );
        Ok(Self { keywords })
    }

    pub fn get(&self, code_point: u32) -> Option<&[String]> {
        self.keywords.get(&code_point).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl FromIterator<(u32, Vec<String>)> for AnnotationTable {
    fn from_iter<I: IntoIterator<Item = (u32, Vec<String>)>>(iter: I) -> Self {
        Self {
            keywords: iter.into_iter().collect(),
        }
    }
}
