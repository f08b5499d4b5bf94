//! Unicode Character Database helpers.
//!
//! - `range`: `HHHH` / `HHHH..HHHH` field decoding
//! - `names`: the master name table from `UnicodeData.txt`
//! - `bidi`: right-to-left classification

pub mod bidi;
pub mod names;
pub mod range;

pub use bidi::{DirectionalChar, LTR_MARK, bidi_class_of, force_ltr};
pub use names::{CharacterRecord, CharacterTable, title_case};
pub use range::{MAX_CODE_POINT, decode_field, parse_code_point};
