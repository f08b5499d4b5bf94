//! Builder pattern for catalog construction.
//!
//! Provides a fluent API for configuring and running the pipeline.
//!
//! # Example
//! ```ignore
//! use glyphdex_core::api::{CatalogBuilder, SourceTexts};
//! use glyphdex_core::catalog::PythonModuleEnvelope;
//!
//! let module = CatalogBuilder::new(sources)
//!     .directional_marks(true)
//!     .render(&PythonModuleEnvelope)?;
//! ```

use crate::catalog::CatalogEnvelope;
use crate::error::Result;
use crate::params::{CatalogParams, Emphasis, NameCase};
use crate::source::SectionWindow;

use super::high_level::{CatalogOutput, SourceTexts, build_catalog};

/// A builder for configuring a catalog run.
///
/// Wraps `CatalogParams` and the source texts.
#[derive(Debug, Clone)]
pub struct CatalogBuilder<'a> {
    sources: SourceTexts<'a>,
    params: CatalogParams,
}

impl<'a> CatalogBuilder<'a> {
    /// Creates a builder over the given source texts with default parameters.
    pub fn new(sources: SourceTexts<'a>) -> Self {
        Self {
            sources,
            params: CatalogParams::default(),
        }
    }

    /// Replaces all parameters at once.
    pub fn params(mut self, params: CatalogParams) -> Self {
        self.params = params;
        self
    }

    /// Sets the section markers for the skin-tone extractor.
    pub fn human_window(mut self, window: SectionWindow) -> Self {
        self.params.human_window = window;
        self
    }

    /// Sets the markup around annotation clauses.
    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.params.emphasis = emphasis;
        self
    }

    /// Sets the name normalisation.
    pub fn name_case(mut self, name_case: NameCase) -> Self {
        self.params.name_case = name_case;
        self
    }

    /// Enables or disables left-to-right marks before RTL characters.
    pub fn directional_marks(mut self, enabled: bool) -> Self {
        self.params.directional_marks = enabled;
        self
    }

    /// Runs the pipeline.
    pub fn build(&self) -> Result<CatalogOutput> {
        build_catalog(&self.sources, &self.params)
    }

    /// Runs the pipeline and renders the artifact through `envelope`.
    pub fn render(&self, envelope: &dyn CatalogEnvelope) -> Result<String> {
        self.build()?.render_string(envelope, &self.params)
    }
}
