//! Character name table built from `UnicodeData.txt`.
//!
//! Each record is `;`-delimited: code point, name, general category,
//! canonical combining class, bidi class, and further fields we ignore.
//! Records whose name starts with `<` (`<control>`, range placeholders such
//! as `<CJK Ideograph, First>`) carry no displayable name and are skipped.

use rustc_hash::FxHashMap;
use smol_str::SmolStr;
use tracing::{debug, info};

use super::bidi::{DirectionalChar, bidi_class_of, force_ltr};
use super::range::parse_code_point;
use crate::error::Result;

const SOURCE_NAME: &str = "UnicodeData.txt";

const FIELD_CODE_POINT: usize = 0;
const FIELD_NAME: usize = 1;
const FIELD_BIDI_CLASS: usize = 4;

/// One named character from the master table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    pub code_point: u32,
    pub ch: char,
    /// Name as found in the table (uppercase in UnicodeData.txt).
    pub name: String,
    pub bidi_class: SmolStr,
}

impl CharacterRecord {
    /// Name in lowercase, as used in the catalog text.
    pub fn lower_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Name with each word capitalised.
    pub fn title_name(&self) -> String {
        title_case(&self.name)
    }

    pub fn force_ltr(&self) -> bool {
        force_ltr(&self.bidi_class)
    }

    pub fn directional(&self) -> DirectionalChar {
        DirectionalChar::with_class(self.ch, &self.bidi_class)
    }
}

/// Capitalise the first letter of every run of letters, lowercase the rest.
///
/// A letter counts as starting a word when it follows any non-letter, so
/// `"NON-SPACING"` becomes `"Non-Spacing"` and `"1ST"` becomes `"1St"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_letter = false;
    for c in text.trim().chars() {
        if c.is_alphabetic() {
            if prev_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_letter = true;
        } else {
            out.push(c);
            prev_letter = false;
        }
    }
    out
}

/// Read-only lookup from code point to its named record.
///
/// Built once from the whole master table, then shared by reference.
#[derive(Debug, Default, Clone)]
pub struct CharacterTable {
    records: FxHashMap<u32, CharacterRecord>,
}

impl CharacterTable {
    /// Parse the full text of `UnicodeData.txt`.
    ///
    /// # Errors
    ///
    /// A record whose code point field is not valid hex aborts the build,
    /// since it means the upstream format changed.
    pub fn parse(text: &str) -> Result<Self> {
        let mut records = FxHashMap::default();
        let mut placeholders = 0usize;

        for (idx, line) in text.lines().enumerate() {
            if line.trim().is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split(';').collect();
            if fields.len() <= FIELD_NAME {
                continue;
            }
            let name = fields[FIELD_NAME].trim();
            if name.starts_with('<') {
                placeholders += 1;
                continue;
            }
            let code_point = parse_code_point(fields[FIELD_CODE_POINT])
                .map_err(|e| e.at_line(SOURCE_NAME, idx + 1))?;
            let Some(ch) = char::from_u32(code_point) else {
                continue;
            };
            let bidi_class = match fields.get(FIELD_BIDI_CLASS).map(|f| f.trim()) {
                Some(class) if !class.is_empty() => SmolStr::new(class),
                _ => bidi_class_of(ch),
            };
            records.insert(
                code_point,
                CharacterRecord {
                    code_point,
                    ch,
                    name: name.to_string(),
                    bidi_class,
                },
            );
        }

        debug!(placeholders, "skipped placeholder records");
        info!(records = records.len(), "character table built");
        Ok(Self { records })
    }

    pub fn get(&self, code_point: u32) -> Option<&CharacterRecord> {
        self.records.get(&code_point)
    }

    pub fn contains(&self, code_point: u32) -> bool {
        self.records.contains_key(&code_point)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<CharacterRecord> for CharacterTable {
    fn from_iter<I: IntoIterator<Item = CharacterRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().map(|r| (r.code_point, r)).collect(),
        }
    }
}
