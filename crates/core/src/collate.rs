//! Collation of extracted code points into the catalog.
//!
//! Three stages, each usable on its own:
//! 1. [`collect_unique`]: union of all extractor outputs as a set
//! 2. [`sorted`]: ascending numeric order
//! 3. [`Collator::collate`]: name and annotation lookup, dropping unnamed points

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use crate::annotations::AnnotationTable;
use crate::catalog::{Catalog, CatalogEntry};
use crate::params::NameCase;
use crate::ucd::CharacterTable;

/// Union the given code point lists, discarding duplicates.
pub fn collect_unique<'a, I>(sources: I) -> FxHashSet<u32>
where
    I: IntoIterator<Item = &'a [u32]>,
{
    let mut set = FxHashSet::default();
    for points in sources {
        set.extend(points.iter().copied());
    }
    set
}

/// The members of `set` in ascending order.
pub fn sorted(set: FxHashSet<u32>) -> Vec<u32> {
    let mut points: Vec<u32> = set.into_iter().collect();
    points.sort_unstable();
    points
}

/// Attaches names and annotations to code points.
///
/// Borrows the lookup tables; they are built once by the caller and never
/// mutated here.
#[derive(Debug, Clone, Copy)]
pub struct Collator<'a> {
    names: &'a CharacterTable,
    annotations: &'a AnnotationTable,
    name_case: NameCase,
}

impl<'a> Collator<'a> {
    pub fn new(names: &'a CharacterTable, annotations: &'a AnnotationTable) -> Self {
        Self {
            names,
            annotations,
            name_case: NameCase::Lower,
        }
    }

    pub fn with_name_case(mut self, name_case: NameCase) -> Self {
        self.name_case = name_case;
        self
    }

    /// Build the entry for one code point, or `None` if it has no name.
    pub fn entry(&self, code_point: u32) -> Option<CatalogEntry> {
        let record = self.names.get(code_point)?;
        let name = match self.name_case {
            NameCase::Lower => record.lower_name(),
            NameCase::Title => record.title_name(),
        };
        Some(CatalogEntry {
            code_point,
            ch: record.ch,
            name,
            annotations: self.annotations.get(code_point).map(<[String]>::to_vec),
            force_ltr: record.force_ltr(),
        })
    }

    /// Turn already sorted, unique code points into a catalog.
    pub fn collate_sorted(&self, points: &[u32]) -> Catalog {
        let entries: Vec<CatalogEntry> = points.iter().filter_map(|&cp| self.entry(cp)).collect();
        let dropped = points.len() - entries.len();
        if dropped > 0 {
            debug!(dropped, "dropped code points without a name");
        }
        info!(entries = entries.len(), "catalog collated");
        Catalog::from_sorted(entries)
    }

    /// Union, deduplicate, sort, and name the outputs of the extractors.
    ///
    /// The result depends only on the set of points supplied, not on their
    /// order or multiplicity.
    pub fn collate<'s, I>(&self, sources: I) -> Catalog
    where
        I: IntoIterator<Item = &'s [u32]>,
    {
        let points = sorted(collect_unique(sources));
        self.collate_sorted(&points)
    }
}
