//! Half-integer creature levels.
//!
//! Levels run from 1 to 55 in steps of 0.5. A `Level` is stored as its
//! index into the CP multiplier table, so every `Level` value maps to an
//! exact table entry.

use crate::cpm::TABLE_LEN;
use crate::error::RankError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A creature level in `[1, 55]`, in half-level steps.
///
/// # Examples
///
/// ```rust
/// use ivrank::Level;
///
/// let level = Level::new(20.5).unwrap();
/// assert_eq!(level.value(), 20.5);
/// assert_eq!(level.index(), 39);
/// assert_eq!(level.to_string(), "20.5");
///
/// assert!(Level::new(20.25).is_err());
/// assert!(Level::new(0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Level(u8);

impl Level {
    /// Level 1.
    pub const MIN: Level = Level(0);

    /// Level 55, the last entry of the multiplier table.
    pub const MAX: Level = Level((TABLE_LEN - 1) as u8);

    /// Level 51, the usual cap for best-buddy powered creatures.
    pub const DEFAULT_MAX: Level = Level(100);

    /// Create a level from its numeric value.
    ///
    /// # Errors
    ///
    /// * `RankError::InvalidLevel` if `value` is not a multiple of 0.5
    /// * `RankError::LevelOutOfRange` if `value` is outside `[1, 55]`
    pub fn new(value: f64) -> Result<Self, RankError> {
        let doubled = value * 2.0;
        if !doubled.is_finite() || doubled.fract() != 0.0 {
            return Err(RankError::InvalidLevel(value));
        }
        if value < Self::MIN.value() || value > Self::MAX.value() {
            return Err(RankError::LevelOutOfRange(value));
        }
        Ok(Level((doubled - 2.0) as u8))
    }

    /// Create a level from a multiplier table index.
    ///
    /// Returns `None` if the index is past the end of the table.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < TABLE_LEN {
            Some(Level(index as u8))
        } else {
            None
        }
    }

    /// The multiplier table index, `(level - 1) * 2`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The numeric level.
    pub fn value(self) -> f64 {
        1.0 + f64::from(self.0) / 2.0
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = 1 + self.0 / 2;
        if self.0 % 2 == 0 {
            f.pad(&whole.to_string())
        } else {
            f.pad(&format!("{whole}.5"))
        }
    }
}

impl TryFrom<f64> for Level {
    type Error = RankError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Level::new(value)
    }
}

impl Serialize for Level {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_f64(self.value())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Level::new(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_bounds() {
        assert_eq!(Level::MIN.value(), 1.0);
        assert_eq!(Level::MAX.value(), 55.0);
        assert_eq!(Level::DEFAULT_MAX.value(), 51.0);
    }

    #[test]
    fn test_level_rejects_quarter_steps() {
        assert_eq!(Level::new(10.25), Err(RankError::InvalidLevel(10.25)));
        assert!(matches!(Level::new(f64::NAN), Err(RankError::InvalidLevel(_))));
    }

    #[test]
    fn test_level_rejects_out_of_range() {
        assert_eq!(Level::new(0.5), Err(RankError::LevelOutOfRange(0.5)));
        assert_eq!(Level::new(55.5), Err(RankError::LevelOutOfRange(55.5)));
    }

    #[test]
    fn test_index_round_trip() {
        for index in 0..TABLE_LEN {
            let level = Level::from_index(index).unwrap();
            assert_eq!(Level::new(level.value()).unwrap(), level);
        }
        assert!(Level::from_index(TABLE_LEN).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(Level::new(1.0).unwrap().to_string(), "1");
        assert_eq!(Level::new(1.5).unwrap().to_string(), "1.5");
        assert_eq!(Level::new(51.0).unwrap().to_string(), "51");
    }

    #[test]
    fn test_serde_as_number() {
        let level = Level::new(27.5).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "27.5");
        let back: Level = serde_json::from_str("27.5").unwrap();
        assert_eq!(back, level);
        assert!(serde_json::from_str::<Level>("27.3").is_err());
    }
}
