//! Standings example: a creature's rank in every league
//!
//! This example demonstrates:
//! - Loading the species catalog and moveset feed
//! - Walking the evolution line of a caught creature
//! - Reporting over-limit creatures and elite moves

use ivrank::*;
use tracing_subscriber::EnvFilter;

const POKEDEX: &str = include_str!("../data/pokedex_sample.json");
const MOVESETS: &str = include_str!("../data/movesets_sample.json");

fn main() -> Result<(), RankError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let catalog = SpeciesCatalog::from_json_str(POKEDEX)?;
    let feed = MovesetFeed::from_json_str(MOVESETS)?;
    let config = ToolkitConfig::default();

    let query = StandingQuery {
        species: SpeciesId::from_str("marill"),
        ivs: IvTriple::new(0, 14, 15)?,
        current_level: Level::new(22.5)?,
    };

    let standings = league_standings(&catalog, &config.leagues, Some(&feed), &query, &config.options)?;

    for species in &standings {
        let suffix = if species.is_evolution { " (after evolving)" } else { "" };
        println!("\n=== {}{} ===", species.name, suffix);

        for card in &species.leagues {
            print!("  {:<14}", card.league.name);
            if card.over_limit {
                println!("CP {} is over the limit", card.current_cp);
                continue;
            }
            match &card.user {
                Some(user) => print!(
                    "rank #{:<4} L{:<4} CP {:<5}",
                    user.rank, user.level, user.cp
                ),
                None => print!("not ranked               "),
            }
            print!(" | rank 1: {}", card.rank_one.ivs);
            if let Some(moveset) = &card.moveset {
                let elite = if moveset.has_elite_move() { " *elite*" } else { "" };
                print!(" | {} / {}{}", moveset.fast_move, moveset.charged_move1, elite);
            }
            println!();
        }
    }

    Ok(())
}
