//! Stat and CP formulas.
//!
//! Pure functions over base stats, individual values and levels. These
//! mirror the game's published formulas exactly, including where it
//! floors and clamps.

use crate::cpm;
use crate::error::RankError;
use crate::league::UNCAPPED_CP;
use crate::level::Level;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest individual value on any axis.
pub const MAX_IV: u8 = 15;

/// Lowest CP and HP the game ever reports.
pub const MIN_CP: u32 = 10;

/// A species' base attack, defense and stamina.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BaseStats {
    pub atk: u32,
    pub def: u32,
    pub sta: u32,
}

impl BaseStats {
    pub fn new(atk: u32, def: u32, sta: u32) -> Self {
        Self { atk, def, sta }
    }

    /// Add an IV triple to these base stats.
    pub fn with_ivs(self, ivs: IvTriple) -> TotalStats {
        TotalStats {
            atk: self.atk + u32::from(ivs.atk),
            def: self.def + u32::from(ivs.def),
            sta: self.sta + u32::from(ivs.sta),
        }
    }
}

/// One individual-value combination, each axis in `0..=15`.
///
/// # Examples
///
/// ```rust
/// use ivrank::IvTriple;
///
/// let ivs = IvTriple::new(0, 15, 15).unwrap();
/// assert_eq!(ivs.to_string(), "0/15/15");
/// assert!(IvTriple::new(16, 0, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IvTriple {
    pub atk: u8,
    pub def: u8,
    pub sta: u8,
}

impl IvTriple {
    /// The 15/15/15 spread.
    pub const PERFECT: IvTriple = IvTriple {
        atk: MAX_IV,
        def: MAX_IV,
        sta: MAX_IV,
    };

    /// Create an IV triple, checking every axis is at most 15.
    pub fn new(atk: u8, def: u8, sta: u8) -> Result<Self, RankError> {
        for (axis, value) in [("atk", atk), ("def", def), ("sta", sta)] {
            if value > MAX_IV {
                return Err(RankError::InvalidIv { axis, value });
            }
        }
        Ok(Self { atk, def, sta })
    }
}

impl fmt::Display for IvTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.atk, self.def, self.sta)
    }
}

/// Base stats plus individual values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TotalStats {
    pub atk: u32,
    pub def: u32,
    pub sta: u32,
}

/// Stats after applying the level's multiplier.
///
/// Attack and defense stay fractional; stamina is the floored HP.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveStats {
    pub atk: f64,
    pub def: f64,
    pub sta: f64,
}

/// Compute combat power from total stats at a level.
///
/// `floor(atk * sqrt(def) * sqrt(sta) * cpm^2 / 10)`, never below 10.
///
/// # Examples
///
/// ```rust
/// use ivrank::{stats::combat_power, Level};
///
/// // Low stats bottom out at the minimum CP
/// assert_eq!(combat_power(10, 10, 10, Level::MIN), 10);
/// ```
pub fn combat_power(atk: u32, def: u32, sta: u32, level: Level) -> u32 {
    let cpm = cpm::multiplier(level);
    let cp = f64::from(atk) * f64::from(def).sqrt() * f64::from(sta).sqrt() * cpm.powi(2) / 10.0;
    cp.max(f64::from(MIN_CP)).floor() as u32
}

/// Every IV triple with each axis in `floor..=15`.
///
/// Attack is the outer loop, defense the middle, stamina the inner. The
/// order is stable so ties downstream resolve the same way every call.
///
/// # Errors
///
/// `RankError::InvalidFloor` if `floor` is above 15.
pub fn enumerate_iv_spreads(floor: u8) -> Result<Vec<IvTriple>, RankError> {
    if floor > MAX_IV {
        return Err(RankError::InvalidFloor(floor));
    }

    let width = usize::from(MAX_IV - floor + 1);
    let mut spreads = Vec::with_capacity(width.pow(3));
    for atk in floor..=MAX_IV {
        for def in floor..=MAX_IV {
            for sta in floor..=MAX_IV {
                spreads.push(IvTriple { atk, def, sta });
            }
        }
    }
    Ok(spreads)
}

/// The highest level at which total stats stay within a CP cap.
///
/// A cap of [`UNCAPPED_CP`] returns `max_level` unchanged. Otherwise the
/// multiplier that would produce exactly `max_cp + 1` is estimated from the
/// inverted CP formula, rounded down to a table entry, and converted back to
/// a level no higher than `max_level`.
///
/// Returns `None` when even level 1 would exceed the cap.
///
/// # Examples
///
/// ```rust
/// use ivrank::{stats::{combat_power, level_for_cap}, Level};
///
/// let level = level_for_cap(213, 204, 231, 1500, Level::DEFAULT_MAX).unwrap();
/// assert!(combat_power(213, 204, 231, level) <= 1500);
///
/// assert_eq!(level_for_cap(213, 204, 231, 10000, Level::DEFAULT_MAX), Some(Level::DEFAULT_MAX));
/// ```
pub fn level_for_cap(atk: u32, def: u32, sta: u32, max_cp: u32, max_level: Level) -> Option<Level> {
    if max_cp == UNCAPPED_CP {
        return Some(max_level);
    }

    let target = f64::from(max_cp) + 1.0;
    let estimated_cpm = ((100.0 * target.powi(2))
        / (f64::from(atk).powi(2) * f64::from(def) * f64::from(sta)))
    .powf(0.25);
    let index = cpm::index_for_estimate(estimated_cpm)?;
    let level = Level::from_index(index)?;
    Some(level.min(max_level))
}

/// Apply a level's multiplier to total stats.
///
/// Stamina becomes HP: floored and never below 10.
pub fn stats_at_level(atk: u32, def: u32, sta: u32, level: Level) -> EffectiveStats {
    let cpm = cpm::multiplier(level);
    EffectiveStats {
        atk: f64::from(atk) * cpm,
        def: f64::from(def) * cpm,
        sta: (f64::from(sta) * cpm).floor().max(f64::from(MIN_CP)),
    }
}

/// CP of a 15/15/15 spread at a level.
///
/// Used for the quick "Lv15 / Lv20 / Lv25 at 100%" reference values
/// (research rewards, raid catches and weather-boosted raid catches).
pub fn reference_cp(base: BaseStats, level: Level) -> u32 {
    let total = base.with_ivs(IvTriple::PERFECT);
    combat_power(total.atk, total.def, total.sta, level)
}
