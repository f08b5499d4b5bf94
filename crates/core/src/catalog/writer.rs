//! Catalog writer - renders a catalog and flag set through an envelope.

use std::io::Write;

use tracing::debug;

use super::{Catalog, CatalogEnvelope, SkinToneFlagSet};
use crate::error::Result;
use crate::params::CatalogParams;

/// Streams the rendered artifact to an output writer.
pub struct CatalogWriter<'a, W: Write> {
    /// Output writer
    outfp: &'a mut W,
    envelope: &'a dyn CatalogEnvelope,
    params: &'a CatalogParams,
}

impl<'a, W: Write> CatalogWriter<'a, W> {
    pub fn new(
        outfp: &'a mut W,
        envelope: &'a dyn CatalogEnvelope,
        params: &'a CatalogParams,
    ) -> Self {
        Self {
            outfp,
            envelope,
            params,
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Write the catalog section, one entry per line.
    pub fn write_catalog(&mut self, catalog: &Catalog) -> Result<()> {
        let envelope = self.envelope;
        self.write_text(envelope.catalog_header())?;
        for entry in catalog {
            let line = entry.render(&self.params.emphasis, self.params.directional_marks);
            self.write_text(&line)?;
            self.write_text("\n")?;
        }
        self.write_text(envelope.catalog_footer())?;
        debug!(entries = catalog.len(), "catalog section written");
        Ok(())
    }

    /// Write the flag set section.
    pub fn write_flags(&mut self, flags: &SkinToneFlagSet) -> Result<()> {
        let envelope = self.envelope;
        if flags.is_empty()
            && let Some(empty) = envelope.empty_flags()
        {
            return self.write_text(empty);
        }
        let body = flags
            .rendered(self.params.directional_marks)
            .join(envelope.flags_separator());
        self.write_text(envelope.flags_header())?;
        self.write_text(&body)?;
        self.write_text(envelope.flags_footer())?;
        debug!(flags = flags.len(), "flag section written");
        Ok(())
    }

    /// Write both sections and flush.
    pub fn write_all(mut self, catalog: &Catalog, flags: &SkinToneFlagSet) -> Result<()> {
        self.write_catalog(catalog)?;
        self.write_flags(flags)?;
        self.outfp.flush()?;
        Ok(())
    }
}
