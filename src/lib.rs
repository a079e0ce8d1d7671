//! # ivrank - Deterministic IV Spread Ranking for Pokémon GO Leagues
//!
//! Ranks every individual-value (IV) combination of a species for a
//! CP-capped PvP league:
//! - **Deterministic** (same input → byte-identical output)
//! - **Exact** game formulas (floors and clamps where the game has them)
//! - **Pure** (no caching, no shared mutable state)
//!
//! ## Pipeline
//!
//! ```text
//! [IvTriple] → [EvaluatedSpread] → [RankedSpread]
//! ```
//!
//! 1. Every IV triple above a floor is enumerated
//! 2. Each is placed at the highest level the league cap allows and its
//!    CP, effective stats and stat products are computed
//! 3. Spreads are sorted by a [`RankingMetric`] with a metric-dependent
//!    tie-break and given competition ranks, with every value expressed
//!    relative to rank 1
//!
//! Around the engine sit the static data it is usually fed from: a
//! [`SpeciesCatalog`] with evolution families, a [`LeagueTable`], and an
//! optional [`MovesetFeed`], combined by [`league_standings`]. A
//! [`DexSelection`] turns catalog searches and top-of-league lists into the
//! game's comma-separated dex-number search string.
//!
//! ## Example
//!
//! ```rust
//! use ivrank::*;
//!
//! let base = BaseStats::new(198, 189, 216);
//! let ranking = rank_spreads(base, 0, 1500, Level::DEFAULT_MAX, Level::MIN, RankingMetric::Product)?;
//!
//! let best = ranking.rank_one().unwrap();
//! assert_eq!(best.rank, 1);
//! assert_eq!(best.product.percent_of_max, 1.0);
//!
//! let mine = ranking.find(IvTriple::new(0, 15, 15)?).unwrap();
//! println!("0/15/15 is rank {} at level {} ({} CP)", mine.rank, mine.level, mine.cp);
//! # Ok::<(), RankError>(())
//! ```
//!
//! ## Modules
//!
//! - [`cpm`] - CP multiplier table
//! - [`level`] - Half-integer levels
//! - [`stats`] - CP and stat formulas
//! - [`metric`] - Ranking metrics and tie-breaks
//! - [`spread`] - Evaluated and ranked spreads
//! - [`ranker`] - The ranking pipeline
//! - [`league`] - League definitions
//! - [`species`] - Species catalog
//! - [`family`] - Evolution graph
//! - [`moveset`] - Moveset feed
//! - [`selection`] - Dex-number search strings
//! - [`standing`] - Per-league standings for a creature
//! - [`config`] - Ranking options and configuration loading
//! - [`error`] - Error types

pub mod config;
pub mod cpm;
pub mod error;
pub mod family;
pub mod league;
pub mod level;
pub mod metric;
pub mod moveset;
pub mod ranker;
pub mod selection;
pub mod species;
pub mod species_id;
pub mod spread;
pub mod standing;
pub mod stats;

// Re-export main types for convenience
pub use config::{RankOptions, ToolkitConfig};
pub use error::RankError;
pub use league::{League, LeagueTable, UNCAPPED_CP};
pub use level::Level;
pub use metric::RankingMetric;
pub use moveset::{MovesetEntry, MovesetFeed};
pub use ranker::{rank_for_league, rank_spreads, Ranking};
pub use selection::DexSelection;
pub use species::{Species, SpeciesCatalog};
pub use species_id::SpeciesId;
pub use spread::{evaluate_spread, Compared, EvaluatedSpread, RankedSpread};
pub use standing::{league_standings, LeagueStanding, SpeciesStandings, StandingQuery};
pub use stats::{BaseStats, EffectiveStats, IvTriple};
