//! High-level catalog API.
//!
//! Provides the main entry points:
//! - `build_catalog()` - run the whole pipeline over the four source texts
//! - `CatalogOutput::render_to()` - write the artifact through an envelope

use std::io::Write;

use tracing::info;

use crate::annotations::AnnotationTable;
use crate::catalog::{Catalog, CatalogEnvelope, CatalogWriter, SkinToneFlagSet};
use crate::collate::Collator;
use crate::error::{CatalogError, Result};
use crate::params::CatalogParams;
use crate::source::{extract_emoji, extract_human_emoji, extract_math_symbols};
use crate::ucd::CharacterTable;

/// The decoded upstream documents.
#[derive(Debug, Clone, Copy)]
pub struct SourceTexts<'a> {
    /// `UnicodeData.txt`
    pub unicode_data: &'a str,
    /// `emoji-data.txt`
    pub emoji_data: &'a str,
    /// `MathClassEx.txt`
    pub math_data: &'a str,
    /// CLDR `annotations/<lang>.xml`
    pub annotations: &'a str,
}

/// Result of a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogOutput {
    pub catalog: Catalog,
    pub skin_tones: SkinToneFlagSet,
}

impl CatalogOutput {
    /// Write the artifact to `outfp`.
    pub fn render_to<W: Write>(
        &self,
        outfp: &mut W,
        envelope: &dyn CatalogEnvelope,
        params: &CatalogParams,
    ) -> Result<()> {
        CatalogWriter::new(outfp, envelope, params).write_all(&self.catalog, &self.skin_tones)
    }

    /// Render the artifact into a string.
    pub fn render_string(
        &self,
        envelope: &dyn CatalogEnvelope,
        params: &CatalogParams,
    ) -> Result<String> {
        let mut buf = Vec::new();
        self.render_to(&mut buf, envelope, params)?;
        String::from_utf8(buf).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

/// Run the full pipeline.
///
/// The name and annotation tables are built first, then the three
/// extractors run and their results are collated. Any structural failure
/// (malformed field, missing section marker, broken XML) aborts the run.
pub fn build_catalog(sources: &SourceTexts<'_>, params: &CatalogParams) -> Result<CatalogOutput> {
    let names = CharacterTable::parse(sources.unicode_data)?;
    let annotations = AnnotationTable::parse(sources.annotations)?;

    let emoji = extract_emoji(sources.emoji_data)?;
    let math = extract_math_symbols(sources.math_data)?;
    let human = extract_human_emoji(sources.emoji_data, &params.human_window)?;

    let catalog = Collator::new(&names, &annotations)
        .with_name_case(params.name_case)
        .collate([emoji.as_slice(), math.as_slice()]);
    let skin_tones: SkinToneFlagSet = human.into_iter().collect();

    info!(
        entries = catalog.len(),
        skin_tones = skin_tones.len(),
        "catalog built"
    );
    Ok(CatalogOutput {
        catalog,
        skin_tones,
    })
}
