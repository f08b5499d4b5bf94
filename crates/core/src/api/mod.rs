//! High-level API for building the character catalog.
//!
//! # Example
//!
//! ```ignore
//! use glyphdex_core::api::{SourceTexts, build_catalog};
//! use glyphdex_core::params::CatalogParams;
//!
//! let output = build_catalog(&sources, &CatalogParams::default())?;
//! ```

pub mod builder;
pub mod high_level;

pub use builder::CatalogBuilder;
pub use high_level::{CatalogOutput, SourceTexts, build_catalog};
