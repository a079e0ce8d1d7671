//! League standings for one creature.
//!
//! Answers "where does my creature rank?" for the species itself and every
//! later stage of its evolution line, in every league. For each pairing it
//! reports the creature's current CP, whether that CP is already over the
//! league cap, the creature's ranked entry, the rank-1 entry, and an
//! optional moveset annotation.

use crate::config::RankOptions;
use crate::error::RankError;
use crate::league::{League, LeagueTable};
use crate::level::Level;
use crate::moveset::{MovesetEntry, MovesetFeed};
use crate::ranker::rank_for_league;
use crate::species::SpeciesCatalog;
use crate::species_id::SpeciesId;
use crate::spread::RankedSpread;
use crate::stats::{combat_power, IvTriple};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A creature as the user has it now.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingQuery {
    pub species: SpeciesId,
    pub ivs: IvTriple,
    pub current_level: Level,
}

/// One species in one league.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStanding {
    pub league: League,

    /// CP of the user's IVs on this species at the current level.
    pub current_cp: u32,

    /// The current CP already exceeds a capped league's limit, so powering
    /// down is impossible and the ranking is moot.
    pub over_limit: bool,

    /// The user's entry; `None` when the spread isn't ranked.
    pub user: Option<RankedSpread>,

    pub rank_one: RankedSpread,

    /// Recommended moveset, omitted when over the limit.
    pub moveset: Option<MovesetEntry>,
}

/// Standings of one member of the evolution line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesStandings {
    pub species: SpeciesId,
    pub name: String,

    /// This is a later evolution, not the queried species.
    pub is_evolution: bool,

    pub leagues: Vec<LeagueStanding>,
}

/// Compute standings for the queried species and its later evolutions.
///
/// Leagues whose ranking comes back empty are left out, and so are
/// species left with no leagues at all.
///
/// # Errors
///
/// * `RankError::UnknownSpecies` if the queried species is not in the catalog
/// * `RankError::InvalidFloor` if `options.floor` is above 15
pub fn league_standings(
    catalog: &SpeciesCatalog,
    leagues: &LeagueTable,
    feed: Option<&MovesetFeed>,
    query: &StandingQuery,
    options: &RankOptions,
) -> Result<Vec<SpeciesStandings>, RankError> {
    options.validate()?;

    let mut standings = Vec::new();
    for species in catalog.evolution_line(&query.species)? {
        let total = species.stats.with_ivs(query.ivs);
        let current_cp = combat_power(total.atk, total.def, total.sta, query.current_level);

        let mut cards = Vec::new();
        for league in leagues {
            let ranking = rank_for_league(species.stats, league, options)?;
            let Some(rank_one) = ranking.rank_one().copied() else {
                continue;
            };

            let over_limit = !league.allows(current_cp);
            let moveset = if over_limit {
                None
            } else {
                feed.and_then(|feed| feed.lookup(league.cp_cap, &species.name))
                    .cloned()
            };

            cards.push(LeagueStanding {
                league: league.clone(),
                current_cp,
                over_limit,
                user: ranking.find(query.ivs).copied(),
                rank_one,
                moveset,
            });
        }

        debug!(
            target: "ivrank::standing",
            species = %species.id,
            current_cp,
            leagues = cards.len(),
            "Computed league standings"
        );

        if !cards.is_empty() {
            standings.push(SpeciesStandings {
                species: species.id.clone(),
                name: species.name.clone(),
                is_evolution: species.id != query.species,
                leagues: cards,
            });
        }
    }

    Ok(standings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const POKEDEX: &str = r#"[
        {"id": "marill", "dexNumber": 183, "name": "Marill",
         "stats": {"atk": 37, "def": 93, "sta": 172}, "family": {"id": "marill"}},
        {"id": "azumarill", "dexNumber": 184, "name": "Azumarill",
         "stats": {"atk": 112, "def": 152, "sta": 225}, "family": {"id": "marill", "parent": "marill"}}
    ]"#;

    fn query(level: f64) -> StandingQuery {
        StandingQuery {
            species: SpeciesId::from_str("marill"),
            ivs: IvTriple::new(0, 15, 15).unwrap(),
            current_level: Level::new(level).unwrap(),
        }
    }

    #[test]
    fn test_covers_evolution_line_and_leagues() {
        let catalog = SpeciesCatalog::from_json_str(POKEDEX).unwrap();
        let standings = league_standings(
            &catalog,
            &LeagueTable::default(),
            None,
            &query(20.0),
            &RankOptions::default(),
        )
        .unwrap();

        assert_eq!(standings.len(), 2);
        assert!(!standings[0].is_evolution);
        assert!(standings[1].is_evolution);
        assert_eq!(standings[1].name, "Azumarill");
        assert!(standings.iter().all(|s| s.leagues.len() == 4));
        for standing in standings.iter().flat_map(|s| &s.leagues) {
            assert!(standing.user.is_some());
            assert_eq!(standing.rank_one.rank, 1);
        }
    }

    #[test]
    fn test_over_limit_hides_moveset() {
        let catalog = SpeciesCatalog::from_json_str(POKEDEX).unwrap();
        let feed = MovesetFeed::from_json_str(
            r#"{"500": [{"name": "Azumarill", "fastMove": "Bubble", "chargedMove1": "Ice Beam"}],
                "1500": [{"name": "Azumarill", "fastMove": "Bubble", "chargedMove1": "Ice Beam"}]}"#,
        )
        .unwrap();

        let standings = league_standings(
            &catalog,
            &LeagueTable::default(),
            Some(&feed),
            &query(40.0),
            &RankOptions::default(),
        )
        .unwrap();

        let azumarill = &standings[1];
        let great = azumarill.leagues.iter().find(|l| l.league.key == "great").unwrap();
        let little = azumarill.leagues.iter().find(|l| l.league.key == "little").unwrap();
        assert!(!great.over_limit);
        assert!(great.moveset.is_some());
        assert!(little.over_limit);
        assert!(little.moveset.is_none());
    }

    #[test]
    fn test_unknown_species() {
        let catalog = SpeciesCatalog::from_json_str(POKEDEX).unwrap();
        let mut q = query(20.0);
        q.species = SpeciesId::from_str("missingno");
        let err = league_standings(&catalog, &LeagueTable::default(), None, &q, &RankOptions::default())
            .unwrap_err();
        assert_eq!(err, RankError::UnknownSpecies(SpeciesId::from_str("missingno")));
    }

    #[test]
    fn test_min_level_leaves_leagues_out() {
        let catalog = SpeciesCatalog::from_json_str(POKEDEX).unwrap();
        // Only the uncapped league keeps spreads at level 51
        let options = RankOptions::default().with_min_level(Level::new(51.0).unwrap());
        let standings = league_standings(&catalog, &LeagueTable::default(), None, &query(20.0), &options).unwrap();
        let azumarill = &standings[1];
        let keys: Vec<&str> = azumarill.leagues.iter().map(|l| l.league.key.as_str()).collect();
        assert!(keys.contains(&"master"));
        assert!(!keys.contains(&"little"));
    }
}
