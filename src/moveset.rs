//! Precomputed moveset feed.
//!
//! An externally produced per-league list of recommended movesets, with
//! flags for elite (event-only) moves. It is display data merged next to
//! a ranking and never affects how spreads are ranked.

use crate::error::RankError;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Recommended moveset for one species in one league.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovesetEntry {
    /// Species display name, matched against the catalog's names.
    pub name: String,
    #[serde(default)]
    pub dex: u32,
    pub fast_move: String,
    pub charged_move1: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub charged_move2: Option<String>,
    #[serde(default)]
    pub is_elite_fast: bool,
    #[serde(default)]
    pub is_elite_charged1: bool,
    #[serde(default)]
    pub is_elite_charged2: bool,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

impl MovesetEntry {
    /// Whether any move in the set is an elite move.
    pub fn has_elite_move(&self) -> bool {
        self.is_elite_fast
            || self.is_elite_charged1
            || (self.charged_move2.is_some() && self.is_elite_charged2)
    }
}

/// Moveset lists keyed by league CP cap.
///
/// # Examples
///
/// ```rust
/// use ivrank::MovesetFeed;
///
/// let json = r#"{"1500": [{"name": "Azumarill", "dex": 184, "fastMove": "Bubble",
///                "chargedMove1": "Ice Beam", "chargedMove2": "Play Rough"}]}"#;
/// let feed = MovesetFeed::from_json_str(json).unwrap();
///
/// let entry = feed.lookup(1500, "Azumarill").unwrap();
/// assert_eq!(entry.fast_move, "Bubble");
/// assert!(feed.lookup(2500, "Azumarill").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovesetFeed {
    by_cap: BTreeMap<u32, Vec<MovesetEntry>>,
}

impl MovesetFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a feed object mapping CP caps to entry lists.
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let feed: MovesetFeed = serde_json::from_str(json)?;
        info!(
            target: "ivrank::moveset",
            leagues = feed.by_cap.len(),
            entries = feed.by_cap.values().map(Vec::len).sum::<usize>(),
            "Loaded moveset feed"
        );
        Ok(feed)
    }

    /// Replace the entry list for one league.
    pub fn insert(&mut self, cp_cap: u32, entries: Vec<MovesetEntry>) {
        self.by_cap.insert(cp_cap, entries);
    }

    /// The first entry for a species name in a league.
    pub fn lookup(&self, cp_cap: u32, name: &str) -> Option<&MovesetEntry> {
        self.by_cap
            .get(&cp_cap)?
            .iter()
            .find(|entry| entry.name == name)
    }

    /// Dex numbers of the first `limit` entries of a league.
    ///
    /// The feed is ordered by league ranking, so these are the top-ranked
    /// species. Entries without a dex number are skipped, and forms
    /// sharing a dex number appear once.
    pub fn top_dex(&self, cp_cap: u32, limit: usize) -> Vec<u32> {
        let mut dex_numbers = Vec::new();
        for entry in self.league(cp_cap).iter().take(limit) {
            if entry.dex != 0 && !dex_numbers.contains(&entry.dex) {
                dex_numbers.push(entry.dex);
            }
        }
        dex_numbers
    }

    /// The entry list for a league, in feed order.
    pub fn league(&self, cp_cap: u32) -> &[MovesetEntry] {
        self.by_cap.get(&cp_cap).map(Vec::as_slice).unwrap_or(&[])
    }
}
