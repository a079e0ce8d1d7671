//! Error types for ranking and catalog loading.
//!
//! All errors that can occur while ranking spreads or loading static data
//! are represented by the `RankError` enum.

use crate::species_id::SpeciesId;
use thiserror::Error;

/// Format an evolution cycle as a readable string.
fn format_cycle_path(path: &[SpeciesId]) -> String {
    if path.is_empty() {
        return String::from("(empty cycle)");
    }
    path.iter()
        .map(|id| id.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Errors that can occur while ranking spreads or loading data.
///
/// # Examples
///
/// ```rust
/// use ivrank::RankError;
///
/// let err = RankError::InvalidMetric("speed".into());
/// assert_eq!(err.to_string(), "Unknown ranking metric: speed");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RankError {
    /// The ranking metric name is not one of
    /// `product`, `bulkProduct`, `atk`, `def`, `sta`.
    #[error("Unknown ranking metric: {0}")]
    InvalidMetric(String),

    /// A level that is not a multiple of 0.5.
    #[error("Level {0} is not a half-integer")]
    InvalidLevel(f64),

    /// A half-integer level outside the multiplier table.
    #[error("Level {0} is outside the supported range")]
    LevelOutOfRange(f64),

    /// An individual value outside `0..=15`.
    #[error("Invalid {axis} IV: {value} (must be 0-15)")]
    InvalidIv { axis: &'static str, value: u8 },

    /// An IV floor above 15.
    #[error("Invalid IV floor: {0} (must be 0-15)")]
    InvalidFloor(u8),

    /// No species with this id exists in the catalog.
    #[error("Unknown species: {0}")]
    UnknownSpecies(SpeciesId),

    /// Two catalog entries share the same species id.
    #[error("Duplicate species: {0}")]
    DuplicateSpecies(SpeciesId),

    /// No league with this key exists in the league table.
    #[error("Unknown league: {0}")]
    UnknownLeague(String),

    /// Two leagues share the same key.
    #[error("Duplicate league key: {0}")]
    DuplicateLeague(String),

    /// Evolution links form a cycle.
    ///
    /// Contains the path of species involved, with the first species
    /// repeated at the end.
    #[error("Evolution cycle: {}", format_cycle_path(.path))]
    EvolutionCycle { path: Vec<SpeciesId> },

    /// A data file could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A data file could not be read.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for RankError {
    fn from(err: serde_json::Error) -> Self {
        RankError::Parse(err.to_string())
    }
}

impl From<std::io::Error> for RankError {
    fn from(err: std::io::Error) -> Self {
        RankError::Io(err.to_string())
    }
}
