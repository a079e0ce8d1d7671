//! Toolkit configuration.
//!
//! Ranking options and the league table, loadable from JSON. Every field
//! has a default, so an empty object `{}` is a valid configuration that
//! ranks the built-in leagues by stat product with no IV floor.

use crate::error::RankError;
use crate::league::LeagueTable;
use crate::level::Level;
use crate::metric::RankingMetric;
use crate::stats::MAX_IV;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Options for a ranking run. The max level comes from the league.
///
/// # Examples
///
/// ```rust
/// use ivrank::{RankOptions, RankingMetric, Level};
///
/// let options = RankOptions::default();
/// assert_eq!(options.floor, 0);
/// assert_eq!(options.min_level, Level::MIN);
/// assert_eq!(options.metric, RankingMetric::Product);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RankOptions {
    /// Lowest IV on every axis (0 for wild catches, 10 for raids, ...).
    pub floor: u8,

    /// Spreads whose capped level falls below this are not ranked.
    pub min_level: Level,

    /// What spreads are sorted by.
    pub metric: RankingMetric,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            floor: 0,
            min_level: Level::MIN,
            metric: RankingMetric::Product,
        }
    }
}

impl RankOptions {
    pub fn with_floor(mut self, floor: u8) -> Self {
        self.floor = floor;
        self
    }

    pub fn with_min_level(mut self, min_level: Level) -> Self {
        self.min_level = min_level;
        self
    }

    pub fn with_metric(mut self, metric: RankingMetric) -> Self {
        self.metric = metric;
        self
    }

    /// Check the options describe a rankable IV space.
    pub fn validate(&self) -> Result<(), RankError> {
        if self.floor > MAX_IV {
            return Err(RankError::InvalidFloor(self.floor));
        }
        Ok(())
    }
}

/// Leagues plus default ranking options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolkitConfig {
    pub leagues: LeagueTable,
    pub options: RankOptions,
}

impl ToolkitConfig {
    /// Parse and validate a JSON configuration.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ivrank::ToolkitConfig;
    ///
    /// let config = ToolkitConfig::from_json_str(r#"{"options": {"floor": 10}}"#).unwrap();
    /// assert_eq!(config.options.floor, 10);
    /// assert_eq!(config.leagues.len(), 4);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, RankError> {
        let config: ToolkitConfig = serde_json::from_str(json)?;
        config.options.validate()?;
        info!(
            target: "ivrank::config",
            leagues = config.leagues.len(),
            metric = %config.options.metric,
            floor = config.options.floor,
            "Loaded toolkit configuration"
        );
        Ok(config)
    }

    /// Read and validate a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, RankError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }
}
