//! League definitions.
//!
//! A league is a competitive bracket with a CP cap and a highest usable
//! level. A cap of [`UNCAPPED_CP`] is the reserved sentinel for the
//! uncapped master league: cap math is skipped entirely and every spread
//! sits at the league's max level. Passing 10000 to mean "a cap of 10000"
//! is therefore not possible.

use crate::error::RankError;
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The reserved "no CP cap" value.
pub const UNCAPPED_CP: u32 = 10000;

/// A competitive league.
///
/// # Examples
///
/// ```rust
/// use ivrank::league::{League, UNCAPPED_CP};
///
/// let great = League::new("great", 1500, "Great League");
/// assert!(great.allows(1500));
/// assert!(!great.allows(1501));
///
/// let master = League::new("master", UNCAPPED_CP, "Master League");
/// assert!(master.allows(5000));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct League {
    /// Stable key, e.g. `"great"`.
    pub key: String,

    /// CP cap, or [`UNCAPPED_CP`].
    #[serde(rename = "cp")]
    pub cp_cap: u32,

    /// Highest level spreads are ranked at.
    #[serde(default = "default_max_level")]
    pub max_level: Level,

    /// Display name.
    pub name: String,

    /// Optional league icon.
    #[serde(default, rename = "icon", skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

fn default_max_level() -> Level {
    Level::DEFAULT_MAX
}

impl League {
    /// Create a league with the default max level and no icon.
    pub fn new(key: impl Into<String>, cp_cap: u32, name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            cp_cap,
            max_level: Level::DEFAULT_MAX,
            name: name.into(),
            icon_url: None,
        }
    }

    /// Set the league icon.
    pub fn with_icon(mut self, icon_url: impl Into<String>) -> Self {
        self.icon_url = Some(icon_url.into());
        self
    }

    /// Set the highest level spreads are ranked at.
    pub fn with_max_level(mut self, max_level: Level) -> Self {
        self.max_level = max_level;
        self
    }

    /// Whether this is the uncapped league.
    pub fn is_uncapped(&self) -> bool {
        self.cp_cap == UNCAPPED_CP
    }

    /// Whether a creature with this CP may enter.
    pub fn allows(&self, cp: u32) -> bool {
        self.is_uncapped() || cp <= self.cp_cap
    }
}

const ICON_BASE: &str = "https://raw.githubusercontent.com/RetroJohn86/PoGo-Unpacked-DL-Assets/refs/heads/main/Image%20Cache/Battle%20League";

/// The built-in leagues: great, ultra, master and little cup.
pub fn default_leagues() -> Vec<League> {
    vec![
        League::new("great", 1500, "Great League")
            .with_icon(format!("{ICON_BASE}/d296f502da73fd186835b4949ce0f6.png")),
        League::new("ultra", 2500, "Ultra League")
            .with_icon(format!("{ICON_BASE}/cc0ac43e0e99d93af3b098fff08751.png")),
        League::new("master", UNCAPPED_CP, "Master League")
            .with_icon(format!("{ICON_BASE}/b7c026bb43f0d0bfc9742ee4860580.png")),
        League::new("little", 500, "Little Cup")
            .with_icon(format!("{ICON_BASE}/439c56a9910ad2d36ec706ae9e5bd3.png")),
    ]
}

/// An ordered list of leagues with unique keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<League>", into = "Vec<League>")]
pub struct LeagueTable {
    leagues: Vec<League>,
}

impl LeagueTable {
    /// Create a table, rejecting duplicate keys.
    pub fn new(leagues: Vec<League>) -> Result<Self, RankError> {
        let mut seen = HashSet::new();
        for league in &leagues {
            if !seen.insert(league.key.as_str()) {
                return Err(RankError::DuplicateLeague(league.key.clone()));
            }
        }
        Ok(Self { leagues })
    }

    /// Look up a league by key.
    pub fn get(&self, key: &str) -> Result<&League, RankError> {
        self.leagues
            .iter()
            .find(|league| league.key == key)
            .ok_or_else(|| RankError::UnknownLeague(key.to_string()))
    }

    /// Look up the first league with this CP cap.
    pub fn by_cap(&self, cp_cap: u32) -> Option<&League> {
        self.leagues.iter().find(|league| league.cp_cap == cp_cap)
    }

    /// Iterate leagues in table order.
    pub fn iter(&self) -> impl Iterator<Item = &League> {
        self.leagues.iter()
    }

    pub fn len(&self) -> usize {
        self.leagues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leagues.is_empty()
    }
}

impl Default for LeagueTable {
    fn default() -> Self {
        Self {
            leagues: default_leagues(),
        }
    }
}

impl TryFrom<Vec<League>> for LeagueTable {
    type Error = RankError;

    fn try_from(leagues: Vec<League>) -> Result<Self, Self::Error> {
        LeagueTable::new(leagues)
    }
}

impl From<LeagueTable> for Vec<League> {
    fn from(table: LeagueTable) -> Self {
        table.leagues
    }
}

impl<'a> IntoIterator for &'a LeagueTable {
    type Item = &'a League;
    type IntoIter = std::slice::Iter<'a, League>;

    fn into_iter(self) -> Self::IntoIter {
        self.leagues.iter()
    }
}
