//! Ranking metrics.
//!
//! A metric picks the value spreads are sorted by. Ties on the metric are
//! broken by a second key that depends on the metric: CP for stat
//! product, stat product for everything else.

use crate::error::RankError;
use crate::spread::EvaluatedSpread;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// What spreads are ranked by.
///
/// # Examples
///
/// ```rust
/// use ivrank::RankingMetric;
///
/// let metric: RankingMetric = "bulkProduct".parse().unwrap();
/// assert_eq!(metric, RankingMetric::BulkProduct);
/// assert!("speed".parse::<RankingMetric>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RankingMetric {
    /// Attack × defense × HP.
    #[default]
    Product,
    /// Defense × HP.
    BulkProduct,
    /// Effective attack.
    Atk,
    /// Effective defense.
    Def,
    /// HP.
    Sta,
}

impl RankingMetric {
    pub const ALL: [RankingMetric; 5] = [
        RankingMetric::Product,
        RankingMetric::BulkProduct,
        RankingMetric::Atk,
        RankingMetric::Def,
        RankingMetric::Sta,
    ];

    /// The metric's name as accepted by `FromStr`.
    pub fn as_str(self) -> &'static str {
        match self {
            RankingMetric::Product => "product",
            RankingMetric::BulkProduct => "bulkProduct",
            RankingMetric::Atk => "atk",
            RankingMetric::Def => "def",
            RankingMetric::Sta => "sta",
        }
    }

    /// The value this metric ranks a spread by.
    pub fn value_of(self, spread: &EvaluatedSpread) -> f64 {
        match self {
            RankingMetric::Product => spread.product,
            RankingMetric::BulkProduct => spread.bulk_product,
            RankingMetric::Atk => spread.stats.atk,
            RankingMetric::Def => spread.stats.def,
            RankingMetric::Sta => spread.stats.sta,
        }
    }

    /// Order two spreads best-first.
    ///
    /// Primary key is the metric value, descending. On an exact tie,
    /// `Product` prefers higher CP and every other metric prefers higher
    /// stat product. Spreads equal on both keys compare `Equal`, so a
    /// stable sort keeps their enumeration order.
    pub fn compare(self, a: &EvaluatedSpread, b: &EvaluatedSpread) -> Ordering {
        let (va, vb) = (self.value_of(a), self.value_of(b));
        if va == vb {
            return match self {
                RankingMetric::Product => b.cp.cmp(&a.cp),
                _ => b.product.total_cmp(&a.product),
            };
        }
        vb.total_cmp(&va)
    }
}

impl FromStr for RankingMetric {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| RankError::InvalidMetric(s.to_string()))
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
