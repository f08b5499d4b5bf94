//! Catalog parameters.
//!
//! Every knob has a default matching the upstream artifact, so
//! `CatalogParams::default()` reproduces it. A JSON document may override
//! any subset of fields.

use serde::Deserialize;

use crate::error::{CatalogError, Result};
use crate::source::SectionWindow;

/// Which normalisation of the UCD name goes into the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameCase {
    #[default]
    Lower,
    Title,
}

/// Markup wrapped around the annotation clause of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Emphasis {
    pub open: String,
    pub close: String,
}

impl Default for Emphasis {
    fn default() -> Self {
        Self {
            open: "<small>".to_string(),
            close: "</small>".to_string(),
        }
    }
}

impl Emphasis {
    /// No markup at all.
    pub fn none() -> Self {
        Self {
            open: String::new(),
            close: String::new(),
        }
    }
}

/// Parameters controlling extraction and rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogParams {
    /// Section of emoji-data.txt listing skin-tone capable emoji.
    pub human_window: SectionWindow,
    pub emphasis: Emphasis,
    pub name_case: NameCase,
    /// Prefix right-to-left characters with U+200E when rendering.
    pub directional_marks: bool,
}

impl CatalogParams {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| CatalogError::Config(e.to_string()))
    }
}
