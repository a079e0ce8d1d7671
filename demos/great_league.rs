//! Great league example: rank every IV spread of one species
//!
//! This example demonstrates:
//! - Ranking all 4096 spreads under a 1500 CP cap
//! - Looking up a specific spread's rank
//! - Comparing ranking metrics
//!
//! Run with `RUST_LOG=ivrank=debug` to see the ranker's trace output.

use ivrank::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), RankError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let base = BaseStats::new(198, 189, 216);
    let mine = IvTriple::new(0, 15, 15)?;

    for metric in RankingMetric::ALL {
        let ranking = rank_spreads(base, 0, 1500, Level::DEFAULT_MAX, Level::MIN, metric)?;
        println!("\n=== Ranked by {} ({} spreads) ===", metric, ranking.len());

        for spread in ranking.spreads().iter().take(5) {
            println!(
                "  #{:<4} {:>8}  L{:<4}  CP {:>4}  product {:>10.0} ({:.2}%)",
                spread.rank,
                spread.ivs.to_string(),
                spread.level,
                spread.cp,
                spread.product.value,
                spread.product.percent_of_max * 100.0
            );
        }

        match ranking.find(mine) {
            Some(spread) => println!("  {} is rank {}", mine, spread.rank),
            None => println!("  {} is not ranked", mine),
        }
    }

    Ok(())
}
