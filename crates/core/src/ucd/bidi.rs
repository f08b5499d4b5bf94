//! Directional classification of catalog characters.
//!
//! Characters whose bidirectional class is right-to-left or arabic would be
//! reordered by a bidi-aware renderer when shown next to their (LTR) name,
//! so they are flagged to be forced left-to-right.

use smol_str::SmolStr;
use unicode_bidi::BidiClass;

/// U+200E LEFT-TO-RIGHT MARK.
pub const LTR_MARK: char = '\u{200E}';

/// Bidi classes that require a left-to-right override.
const RTL_CLASSES: [&str; 6] = ["AL", "AN", "R", "RLE", "RLI", "RLO"];

/// Return true if `bidi_class` is one of the right-to-left or arabic classes.
pub fn force_ltr(bidi_class: &str) -> bool {
    RTL_CLASSES.contains(&bidi_class)
}

/// Look up the bidi class of a single character in the bundled UCD tables.
pub fn bidi_class_of(ch: char) -> SmolStr {
    // BidiClass variants are named after the UCD abbreviations.
    let class: BidiClass = unicode_bidi::bidi_class(ch);
    SmolStr::new(format!("{class:?}"))
}

/// A character paired with its left-to-right override flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectionalChar {
    pub ch: char,
    pub force_ltr: bool,
}

impl DirectionalChar {
    /// Build from a known bidi class.
    pub fn with_class(ch: char, bidi_class: &str) -> Self {
        Self {
            ch,
            force_ltr: force_ltr(bidi_class),
        }
    }

    /// Build from the character alone, consulting the bundled bidi tables.
    pub fn from_char(ch: char) -> Self {
        Self::with_class(ch, &bidi_class_of(ch))
    }

    /// The character as it should be written out, prefixed with a
    /// left-to-right mark when it is forced LTR.
    pub fn directional(&self) -> String {
        let mut out = String::with_capacity(8);
        if self.force_ltr {
            out.push(LTR_MARK);
        }
        out.push(self.ch);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rtl_classes_force_ltr() {
        for class in ["AL", "AN", "R", "RLE", "RLI", "RLO"] {
            assert!(force_ltr(class), "{class}");
        }
    }

    #[test]
    fn other_classes_do_not() {
        for class in ["L", "ON", "EN", "NSM", "WS", "LRO", "", "r"] {
            assert!(!force_ltr(class), "{class}");
        }
    }

    #[test]
    fn bundled_lookup() {
        assert_eq!(bidi_class_of('A'), "L");
        assert_eq!(bidi_class_of('\u{05D0}'), "R");
        assert_eq!(bidi_class_of('\u{0627}'), "AL");
        assert_eq!(bidi_class_of('\u{0661}'), "AN");
        assert_eq!(bidi_class_of('+'), "ES");
    }

    #[test]
    fn directional_prefixes_mark() {
        assert_eq!(DirectionalChar::from_char('\u{05D0}').directional(), "\u{200E}\u{05D0}");
        assert_eq!(DirectionalChar::from_char('\u{2764}').directional(), "\u{2764}");
    }
}
