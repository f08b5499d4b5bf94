//! glyphdex - a curated catalog of named Unicode characters.
//!
//! Collates emoji and math symbols from the Unicode data files, names them
//! from `UnicodeData.txt`, attaches CLDR annotation keywords, and renders
//! the result together with the set of skin-tone capable emoji.

pub mod annotations;
pub mod api;
pub mod catalog;
pub mod collate;
pub mod decode;
pub mod error;
pub mod params;
pub mod source;
pub mod ucd;

pub use annotations::AnnotationTable;
pub use api::{CatalogBuilder, CatalogOutput, SourceTexts, build_catalog};
pub use catalog::{Catalog, CatalogEntry, SkinToneFlagSet};
pub use collate::Collator;
pub use error::{CatalogError, Result};
pub use params::CatalogParams;
pub use ucd::{CharacterRecord, CharacterTable};
