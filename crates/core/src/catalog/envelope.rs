//! Framing around the rendered catalog and flag set.

/// Text written around the two sections of the artifact.
///
/// The writer emits, in order: `catalog_header`, every entry line followed
/// by `\n`, `catalog_footer`, then either `empty_flags` (when the set is
/// empty and the envelope defines one) or `flags_header`, the flag
/// characters joined by `flags_separator`, and `flags_footer`.
pub trait CatalogEnvelope {
    fn catalog_header(&self) -> &str {
        ""
    }

    fn catalog_footer(&self) -> &str {
        ""
    }

    fn flags_header(&self) -> &str {
        ""
    }

    fn flags_separator(&self) -> &str {
        " "
    }

    fn flags_footer(&self) -> &str {
        "\n"
    }

    fn empty_flags(&self) -> Option<&str> {
        None
    }
}

/// A Python module defining `emoji_list` (a triple-quoted string of entry
/// lines) and `skin_tone_selectable_emojis` (a set literal).
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonModuleEnvelope;

impl CatalogEnvelope for PythonModuleEnvelope {
    fn catalog_header(&self) -> &str {
        "emoji_list=\"\"\""
    }

    fn catalog_footer(&self) -> &str {
        "\"\"\"\n\n"
    }

    fn flags_header(&self) -> &str {
        "skin_tone_selectable_emojis={'"
    }

    fn flags_separator(&self) -> &str {
        "', '"
    }

    fn flags_footer(&self) -> &str {
        "'}\n"
    }

    // `{}` would be a dict.
    fn empty_flags(&self) -> Option<&str> {
        Some("skin_tone_selectable_emojis=set()\n")
    }
}

/// Entry lines, a blank line, then the flag characters on one line.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainEnvelope;

impl CatalogEnvelope for PlainEnvelope {
    fn catalog_footer(&self) -> &str {
        "\n"
    }
}
