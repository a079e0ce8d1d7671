//! IV spread ranking.
//!
//! Provides `rank_spreads`, the main entry point. It enumerates every IV
//! triple for a floor, evaluates each at the highest level the league cap
//! allows, drops spreads below the minimum level, sorts best-first and
//! assigns competition ranks.

use crate::config::RankOptions;
use crate::error::RankError;
use crate::league::League;
use crate::level::Level;
use crate::metric::RankingMetric;
use crate::spread::{evaluate_spread, EvaluatedSpread, RankedSpread};
use crate::stats::{enumerate_iv_spreads, BaseStats, IvTriple};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// An ordered list of ranked spreads, best first.
///
/// # Examples
///
/// ```rust
/// use ivrank::*;
///
/// let base = BaseStats::new(198, 189, 216);
/// let ranking = rank_spreads(base, 0, 1500, Level::DEFAULT_MAX, Level::MIN, RankingMetric::Product).unwrap();
///
/// let top = ranking.rank_one().unwrap();
/// assert_eq!(top.rank, 1);
/// assert!(top.cp <= 1500);
///
/// let mine = ranking.find(IvTriple::new(0, 15, 15).unwrap()).unwrap();
/// assert!(mine.rank >= 1);
/// ```
///
/// Deserializing checks that the spreads are ordered best-first by the
/// metric and carry competition ranks, so a `Ranking` read back from JSON
/// upholds the same guarantees as one built by [`rank_spreads`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RankingRepr")]
pub struct Ranking {
    pub metric: RankingMetric,
    spreads: Vec<RankedSpread>,
}

#[derive(Deserialize)]
struct RankingRepr {
    metric: RankingMetric,
    spreads: Vec<RankedSpread>,
}

impl TryFrom<RankingRepr> for Ranking {
    type Error = RankError;

    fn try_from(repr: RankingRepr) -> Result<Self, Self::Error> {
        let mut previous: Option<(f64, usize)> = None;
        for (index, spread) in repr.spreads.iter().enumerate() {
            let value = spread.ranked_field(repr.metric).value;
            let expected = match previous {
                Some((previous_value, previous_rank)) if previous_value == value => previous_rank,
                Some((previous_value, _)) if previous_value < value => {
                    return Err(RankError::Parse(format!(
                        "Spread {} is out of order by {}",
                        spread.ivs, repr.metric
                    )));
                }
                _ => index + 1,
            };
            if spread.rank != expected {
                return Err(RankError::Parse(format!(
                    "Spread {} has rank {}, expected {}",
                    spread.ivs, spread.rank, expected
                )));
            }
            previous = Some((value, expected));
        }

        Ok(Self {
            metric: repr.metric,
            spreads: repr.spreads,
        })
    }
}

impl Ranking {
    fn empty(metric: RankingMetric) -> Self {
        Self {
            metric,
            spreads: Vec::new(),
        }
    }

    /// All ranked spreads, best first.
    pub fn spreads(&self) -> &[RankedSpread] {
        &self.spreads
    }

    /// The rank-1 spread, if anything was ranked.
    pub fn rank_one(&self) -> Option<&RankedSpread> {
        self.spreads.first()
    }

    /// Find the entry for an IV triple.
    ///
    /// `None` means the spread was not ranked (excluded by the floor, the
    /// minimum level, or the cap).
    pub fn find(&self, ivs: IvTriple) -> Option<&RankedSpread> {
        self.spreads.iter().find(|spread| spread.ivs == ivs)
    }

    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }

    pub fn into_vec(self) -> Vec<RankedSpread> {
        self.spreads
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a RankedSpread;
    type IntoIter = std::slice::Iter<'a, RankedSpread>;

    fn into_iter(self) -> Self::IntoIter {
        self.spreads.iter()
    }
}

/// Rank every IV spread of a species under a CP cap.
///
/// 1. Enumerate all IV triples with each axis in `floor..=15`
/// 2. Evaluate each at the highest level within `max_cp` and `max_level`
/// 3. Drop spreads whose level is below `min_level`
/// 4. Sort best-first by `metric` with its tie-break
/// 5. Assign competition ranks: spreads with equal metric values share a
///    rank and the next distinct value resumes at its 1-based position
/// 6. Express every value relative to the rank-1 spread
///
/// An empty ranking is a valid result when every spread is filtered out.
///
/// # Errors
///
/// `RankError::InvalidFloor` if `floor` is above 15.
pub fn rank_spreads(
    base: BaseStats,
    floor: u8,
    max_cp: u32,
    max_level: Level,
    min_level: Level,
    metric: RankingMetric,
) -> Result<Ranking, RankError> {
    let candidates = enumerate_iv_spreads(floor)?;
    let candidate_count = candidates.len();

    let mut evaluated: Vec<EvaluatedSpread> = candidates
        .into_iter()
        .filter_map(|ivs| evaluate_spread(base, ivs, max_cp, max_level))
        .filter(|spread| spread.level >= min_level)
        .collect();

    // Stable, so spreads equal on both keys keep enumeration order
    evaluated.sort_by(|a, b| metric.compare(a, b));

    let Some(top) = evaluated.first().copied() else {
        debug!(
            target: "ivrank::ranker",
            candidates = candidate_count,
            max_cp,
            %min_level,
            "No spreads left to rank"
        );
        return Ok(Ranking::empty(metric));
    };

    let mut spreads = Vec::with_capacity(evaluated.len());
    let mut previous: Option<(f64, usize)> = None;
    for (index, spread) in evaluated.iter().enumerate() {
        let value = metric.value_of(spread);
        let rank = match previous {
            Some((previous_value, previous_rank)) if previous_value == value => previous_rank,
            _ => index + 1,
        };
        previous = Some((value, rank));
        spreads.push(RankedSpread::new(rank, spread, &top));
    }

    debug!(
        target: "ivrank::ranker",
        candidates = candidate_count,
        ranked = spreads.len(),
        %metric,
        max_cp,
        top = %top.ivs,
        "Ranked IV spreads"
    );

    Ok(Ranking { metric, spreads })
}

/// Rank a species for a league using its cap and max level.
pub fn rank_for_league(
    base: BaseStats,
    league: &League,
    options: &RankOptions,
) -> Result<Ranking, RankError> {
    rank_spreads(
        base,
        options.floor,
        league.cp_cap,
        league.max_level,
        options.min_level,
        options.metric,
    )
}
