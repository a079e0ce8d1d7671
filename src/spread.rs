//! Evaluated and ranked IV spreads.
//!
//! An `EvaluatedSpread` is one IV triple placed at the highest level a
//! league allows, with its CP and effective stats. A `RankedSpread` is the
//! output form: a rank plus every value expressed against the rank-1
//! spread.

use crate::level::Level;
use crate::metric::RankingMetric;
use crate::stats::{combat_power, level_for_cap, stats_at_level, BaseStats, EffectiveStats, IvTriple};
use serde::{Deserialize, Serialize};

/// One IV triple evaluated for a league.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluatedSpread {
    pub ivs: IvTriple,
    pub level: Level,
    pub cp: u32,
    pub stats: EffectiveStats,
    pub product: f64,
    pub bulk_product: f64,
}

/// Evaluate one IV triple under a CP cap.
///
/// Returns `None` when the spread cannot fit under `max_cp` at any level.
///
/// # Examples
///
/// ```rust
/// use ivrank::{evaluate_spread, BaseStats, IvTriple, Level};
///
/// let base = BaseStats::new(198, 189, 216);
/// let spread = evaluate_spread(base, IvTriple::new(0, 15, 15).unwrap(), 1500, Level::DEFAULT_MAX).unwrap();
/// assert!(spread.cp <= 1500);
/// assert_eq!(spread.bulk_product, spread.stats.def * spread.stats.sta);
/// ```
pub fn evaluate_spread(
    base: BaseStats,
    ivs: IvTriple,
    max_cp: u32,
    max_level: Level,
) -> Option<EvaluatedSpread> {
    let total = base.with_ivs(ivs);
    let level = level_for_cap(total.atk, total.def, total.sta, max_cp, max_level)?;
    let cp = combat_power(total.atk, total.def, total.sta, level);
    let stats = stats_at_level(total.atk, total.def, total.sta, level);
    Some(EvaluatedSpread {
        ivs,
        level,
        cp,
        stats,
        product: stats.atk * stats.def * stats.sta,
        bulk_product: stats.def * stats.sta,
    })
}

/// A value alongside its ratio to the rank-1 spread's value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compared {
    pub value: f64,
    pub percent_of_max: f64,
}

impl Compared {
    pub fn new(value: f64, max: f64) -> Self {
        Self {
            value,
            percent_of_max: value / max,
        }
    }
}

/// Effective stats compared against rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparedStats {
    pub atk: Compared,
    pub def: Compared,
    pub sta: Compared,
}

/// A spread with its rank.
///
/// Every `percent_of_max` is relative to the rank-1 spread under the
/// chosen metric, not to the best value of that field across all spreads.
/// It is exactly 1.0 on the rank-1 spread itself and is bounded by 1.0 only
/// for the field the ranking was sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedSpread {
    pub rank: usize,
    pub ivs: IvTriple,
    pub cp: u32,
    pub level: Level,
    pub stats: ComparedStats,
    pub product: Compared,
    pub bulk_product: Compared,
}

impl RankedSpread {
    /// Rank `spread` against the rank-1 spread `top`.
    pub fn new(rank: usize, spread: &EvaluatedSpread, top: &EvaluatedSpread) -> Self {
        Self {
            rank,
            ivs: spread.ivs,
            cp: spread.cp,
            level: spread.level,
            stats: ComparedStats {
                atk: Compared::new(spread.stats.atk, top.stats.atk),
                def: Compared::new(spread.stats.def, top.stats.def),
                sta: Compared::new(spread.stats.sta, top.stats.sta),
            },
            product: Compared::new(spread.product, top.product),
            bulk_product: Compared::new(spread.bulk_product, top.bulk_product),
        }
    }

    /// The field a ranking by `metric` is sorted on.
    pub fn ranked_field(&self, metric: RankingMetric) -> Compared {
        match metric {
            RankingMetric::Product => self.product,
            RankingMetric::BulkProduct => self.bulk_product,
            RankingMetric::Atk => self.stats.atk,
            RankingMetric::Def => self.stats.def,
            RankingMetric::Sta => self.stats.sta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::league::UNCAPPED_CP;

    #[test]
    fn test_evaluate_uncapped_uses_max_level() {
        let base = BaseStats::new(198, 189, 216);
        let spread = evaluate_spread(base, IvTriple::PERFECT, UNCAPPED_CP, Level::DEFAULT_MAX).unwrap();
        assert_eq!(spread.level, Level::DEFAULT_MAX);
        assert_eq!(spread.product, spread.stats.atk * spread.stats.def * spread.stats.sta);
    }

    #[test]
    fn test_evaluate_unfit_spread() {
        let base = BaseStats::new(300, 182, 214);
        assert!(evaluate_spread(base, IvTriple::PERFECT, 10, Level::DEFAULT_MAX).is_none());
    }

    #[test]
    fn test_ranked_against_itself() {
        let base = BaseStats::new(198, 189, 216);
        let spread = evaluate_spread(base, IvTriple::PERFECT, 1500, Level::DEFAULT_MAX).unwrap();
        let ranked = RankedSpread::new(1, &spread, &spread);
        assert_eq!(ranked.product.percent_of_max, 1.0);
        assert_eq!(ranked.bulk_product.percent_of_max, 1.0);
        assert_eq!(ranked.stats.atk.percent_of_max, 1.0);
        assert_eq!(ranked.stats.def.percent_of_max, 1.0);
        assert_eq!(ranked.stats.sta.percent_of_max, 1.0);
    }

    #[test]
    fn test_compared_ratio() {
        let c = Compared::new(50.0, 200.0);
        assert_eq!(c.percent_of_max, 0.25);
    }

    #[test]
    fn test_ranked_field_follows_metric() {
        let base = BaseStats::new(198, 189, 216);
        let spread = evaluate_spread(base, IvTriple::new(0, 15, 15).unwrap(), 1500, Level::DEFAULT_MAX).unwrap();
        let ranked = RankedSpread::new(2, &spread, &spread);
        assert_eq!(ranked.ranked_field(RankingMetric::Product).value, spread.product);
        assert_eq!(ranked.ranked_field(RankingMetric::BulkProduct).value, spread.bulk_product);
        assert_eq!(ranked.ranked_field(RankingMetric::Sta).value, spread.stats.sta);
    }
}
