//! Dex-number selections for the in-game storage search.
//!
//! The game's storage search accepts a comma-separated list of dex
//! numbers. A `DexSelection` collects dex numbers from catalog searches and
//! top-of-league lists and renders that string, sorted ascending.

use crate::moveset::MovesetFeed;
use crate::species::SpeciesCatalog;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use tracing::debug;

/// A set of dex numbers, kept sorted.
///
/// # Examples
///
/// ```rust
/// use ivrank::DexSelection;
///
/// let selection: DexSelection = [379, 184, 618, 184].into_iter().collect();
/// assert_eq!(selection.len(), 3);
/// assert_eq!(selection.to_string(), "184,379,618");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DexSelection {
    dex_numbers: BTreeSet<u32>,
}

impl DexSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every dex number matched by a catalog search query.
    pub fn from_search(catalog: &SpeciesCatalog, query: &str) -> Self {
        catalog
            .search(query, usize::MAX)
            .into_iter()
            .map(|species| species.dex_number)
            .collect()
    }

    /// The top `limit` species of a league's feed.
    ///
    /// With `include_families`, each one's whole evolution family is
    /// selected as well.
    pub fn top_ranked(
        catalog: &SpeciesCatalog,
        feed: &MovesetFeed,
        cp_cap: u32,
        limit: usize,
        include_families: bool,
    ) -> Self {
        let top = feed.top_dex(cp_cap, limit);
        let selection: DexSelection = if include_families {
            top.iter()
                .flat_map(|&dex_number| catalog.family_dex_numbers(dex_number))
                .collect()
        } else {
            top.iter().copied().collect()
        };

        debug!(
            target: "ivrank::selection",
            cp_cap,
            limit,
            include_families,
            selected = selection.len(),
            "Selected top-ranked species"
        );
        selection
    }

    /// Add a dex number, returning whether it was new.
    pub fn insert(&mut self, dex_number: u32) -> bool {
        self.dex_numbers.insert(dex_number)
    }

    pub fn remove(&mut self, dex_number: u32) -> bool {
        self.dex_numbers.remove(&dex_number)
    }

    pub fn contains(&self, dex_number: u32) -> bool {
        self.dex_numbers.contains(&dex_number)
    }

    /// Dex numbers in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.dex_numbers.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.dex_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dex_numbers.is_empty()
    }

    pub fn clear(&mut self) {
        self.dex_numbers.clear();
    }

    /// The comma-separated search string, e.g. `"184,379,618"`.
    pub fn search_string(&self) -> String {
        self.to_string()
    }
}

impl FromIterator<u32> for DexSelection {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self {
            dex_numbers: iter.into_iter().collect(),
        }
    }
}

impl Extend<u32> for DexSelection {
    fn extend<I: IntoIterator<Item = u32>>(&mut self, iter: I) {
        self.dex_numbers.extend(iter);
    }
}

impl fmt::Display for DexSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, dex_number) in self.dex_numbers.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", dex_number)?;
        }
        Ok(())
    }
}
