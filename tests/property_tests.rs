use ivrank::cpm::CP_MULTIPLIERS;
use ivrank::stats::{combat_power, level_for_cap, MIN_CP};
use ivrank::*;
use proptest::prelude::*;

fn base_stats() -> impl Strategy<Value = BaseStats> {
    (10u32..=400, 10u32..=400, 10u32..=400).prop_map(|(atk, def, sta)| BaseStats::new(atk, def, sta))
}

fn iv_triple() -> impl Strategy<Value = IvTriple> {
    (0u8..=15, 0u8..=15, 0u8..=15).prop_map(|(atk, def, sta)| IvTriple { atk, def, sta })
}

fn any_level() -> impl Strategy<Value = Level> {
    (0usize..CP_MULTIPLIERS.len()).prop_map(|index| Level::from_index(index).unwrap())
}

fn capped_league() -> impl Strategy<Value = u32> {
    prop_oneof![Just(500u32), Just(1500u32), Just(2500u32)]
}

fn any_metric() -> impl Strategy<Value = RankingMetric> {
    prop_oneof![
        Just(RankingMetric::Product),
        Just(RankingMetric::BulkProduct),
        Just(RankingMetric::Atk),
        Just(RankingMetric::Def),
        Just(RankingMetric::Sta),
    ]
}

fn metric_value(metric: RankingMetric, spread: &RankedSpread) -> f64 {
    match metric {
        RankingMetric::Product => spread.product.value,
        RankingMetric::BulkProduct => spread.bulk_product.value,
        RankingMetric::Atk => spread.stats.atk.value,
        RankingMetric::Def => spread.stats.def.value,
        RankingMetric::Sta => spread.stats.sta.value,
    }
}

proptest! {
    #[test]
    fn cp_never_below_floor(atk in 0u32..=500, def in 0u32..=500, sta in 0u32..=500, level in any_level()) {
        prop_assert!(combat_power(atk, def, sta, level) >= MIN_CP);
    }

    #[test]
    fn capped_level_respects_cap(base in base_stats(), ivs in iv_triple(), cap in capped_league()) {
        let total = base.with_ivs(ivs);
        if let Some(level) = level_for_cap(total.atk, total.def, total.sta, cap, Level::DEFAULT_MAX) {
            prop_assert!(combat_power(total.atk, total.def, total.sta, level) <= cap);
        }
    }

    #[test]
    fn uncapped_returns_max_level(base in base_stats(), ivs in iv_triple(), max_level in any_level()) {
        let total = base.with_ivs(ivs);
        prop_assert_eq!(level_for_cap(total.atk, total.def, total.sta, UNCAPPED_CP, max_level), Some(max_level));
    }

    #[test]
    fn level_round_trips_through_value(level in any_level()) {
        prop_assert_eq!(Level::new(level.value()).unwrap(), level);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn rankings_are_ordered_with_competition_ranks(
        base in base_stats(),
        cap in capped_league(),
        metric in any_metric(),
        floor in prop_oneof![Just(0u8), Just(10u8), Just(12u8)],
    ) {
        let ranking = rank_spreads(base, floor, cap, Level::DEFAULT_MAX, Level::MIN, metric).unwrap();
        let spreads = ranking.spreads();

        if let Some(first) = spreads.first() {
            prop_assert_eq!(first.rank, 1);
        }
        for (index, pair) in spreads.windows(2).enumerate() {
            let (a, b) = (metric_value(metric, &pair[0]), metric_value(metric, &pair[1]));
            prop_assert!(a >= b);
            if a == b {
                prop_assert_eq!(pair[0].rank, pair[1].rank);
            } else {
                prop_assert_eq!(pair[1].rank, index + 2);
            }
        }
    }

    #[test]
    fn ranked_metric_ratio_is_bounded(base in base_stats(), cap in capped_league(), metric in any_metric()) {
        let ranking = rank_spreads(base, 0, cap, Level::DEFAULT_MAX, Level::MIN, metric).unwrap();
        for spread in &ranking {
            let ratio = match metric {
                RankingMetric::Product => spread.product.percent_of_max,
                RankingMetric::BulkProduct => spread.bulk_product.percent_of_max,
                RankingMetric::Atk => spread.stats.atk.percent_of_max,
                RankingMetric::Def => spread.stats.def.percent_of_max,
                RankingMetric::Sta => spread.stats.sta.percent_of_max,
            };
            prop_assert!(ratio > 0.0 && ratio <= 1.0);
        }
    }

    #[test]
    fn ranking_is_deterministic(base in base_stats(), cap in capped_league(), metric in any_metric()) {
        let a = rank_spreads(base, 0, cap, Level::DEFAULT_MAX, Level::MIN, metric).unwrap();
        let b = rank_spreads(base, 0, cap, Level::DEFAULT_MAX, Level::MIN, metric).unwrap();
        prop_assert_eq!(a, b);
    }
}

#[test]
fn multiplier_table_strictly_increasing() {
    assert!(CP_MULTIPLIERS.windows(2).all(|pair| pair[0] < pair[1]));
}
