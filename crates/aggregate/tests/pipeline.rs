use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rainsim_aggregate::{AggregateError, aggregate};
use rainsim_calendar::inclusive_day_count;
use rainsim_generator::{
    ClimateTable, DailyRecord, GeneratorConfig, MonthParams, SequenceSource, generate_daily,
};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Generate one Seattle season with a seeded RNG.
fn seattle_season(seed: u64) -> Vec<DailyRecord> {
    let config = GeneratorConfig::seattle_2023();
    let mut rng = StdRng::seed_from_u64(seed);
    generate_daily(&config, &mut rng).expect("generation failed")
}

// ---------------------------------------------------------------------------
// 1. three_day_always_rainy_scenario
// ---------------------------------------------------------------------------
#[test]
fn three_day_always_rainy_scenario() {
    let table = ClimateTable::new()
        .with_month(4, MonthParams::new(30.0, 1.0))
        .unwrap();
    let config = GeneratorConfig::new(ymd(2023, 4, 1), ymd(2023, 4, 3)).with_climate(table);
    let mut src = SequenceSource::constant(0.0).unwrap();

    let daily = generate_daily(&config, &mut src).unwrap();
    let report = aggregate(&daily).unwrap();
    let stats = report.stats();

    assert_eq!(report.daily().len(), 3);
    assert!(report.daily().iter().all(|d| d.rainfall() == 0.5));
    assert_abs_diff_eq!(stats.total_rainfall(), 1.5, epsilon = 1e-12);
    assert_abs_diff_eq!(stats.average_rainfall(), 0.5, epsilon = 1e-12);
    assert_eq!(stats.dry_day_count(), 0);
    assert_eq!(stats.wet_day_count(), 3);
    // All three days tie; the first one wins.
    assert_eq!(stats.rainiest_day().date(), ymd(2023, 4, 1));
    assert_eq!(report.monthly().len(), 1);
    assert_eq!(stats.rainiest_month().month(), "April");
    assert_abs_diff_eq!(stats.rainiest_month().rainfall(), 1.5, epsilon = 1e-12);
}

// ---------------------------------------------------------------------------
// 2. never_rainy_scenario
// ---------------------------------------------------------------------------
#[test]
fn never_rainy_scenario() {
    let config = GeneratorConfig::seattle_2023();
    let mut src = SequenceSource::constant(0.75).unwrap();

    let daily = generate_daily(&config, &mut src).unwrap();
    let report = aggregate(&daily).unwrap();
    let stats = report.stats();

    assert!(report.daily().iter().all(|d| d.rainfall() == 0.0));
    assert_eq!(stats.dry_day_count(), report.daily().len());
    assert_eq!(stats.wet_day_count(), 0);
    assert_eq!(stats.rainiest_day().rainfall(), 0.0);
    assert_eq!(stats.rainiest_day().date(), ymd(2023, 4, 1));
    assert_eq!(stats.rainiest_month().month(), "April");
}

// ---------------------------------------------------------------------------
// 3. single_day_scenario
// ---------------------------------------------------------------------------
#[test]
fn single_day_scenario() {
    let day = ymd(2023, 8, 15);
    let config = GeneratorConfig::new(day, day);
    let mut rng = StdRng::seed_from_u64(5);

    let report = aggregate(&generate_daily(&config, &mut rng).unwrap()).unwrap();

    assert_eq!(report.daily().len(), 1);
    assert_eq!(report.monthly().len(), 1);
    assert_eq!(report.stats().rainiest_day(), &report.daily()[0]);
    assert_eq!(
        report.stats().dry_day_count() + report.stats().wet_day_count(),
        1
    );
}

// ---------------------------------------------------------------------------
// 4. empty_input_scenario
// ---------------------------------------------------------------------------
#[test]
fn empty_input_scenario() {
    assert_eq!(aggregate(&[]).unwrap_err(), AggregateError::EmptyInput);
}

// ---------------------------------------------------------------------------
// 5. day_counts_partition_series
// ---------------------------------------------------------------------------
#[test]
fn day_counts_partition_series() {
    let expected = inclusive_day_count(ymd(2023, 4, 1), ymd(2023, 9, 30)).unwrap();
    for seed in 0..25 {
        let report = aggregate(&seattle_season(seed)).unwrap();
        let stats = report.stats();
        assert_eq!(stats.dry_day_count() + stats.wet_day_count(), report.daily().len());
        assert_eq!(report.daily().len(), expected);
        assert!(report.daily().iter().all(|d| d.rainfall() >= 0.0));
    }
}

// ---------------------------------------------------------------------------
// 6. totals_consistent
// ---------------------------------------------------------------------------
#[test]
fn totals_consistent() {
    for seed in 0..25 {
        let report = aggregate(&seattle_season(seed)).unwrap();
        let daily_sum: f64 = report.daily().iter().map(|d| d.rainfall()).sum();
        let monthly_sum: f64 = report.monthly().iter().map(|m| m.rainfall()).sum();
        let n_months = report.monthly().len() as f64;

        assert_eq!(report.monthly().len(), 6);
        assert!(
            (monthly_sum - daily_sum).abs() <= 0.1 * n_months,
            "seed {seed}: monthly {monthly_sum} vs daily {daily_sum}"
        );
        assert_abs_diff_eq!(report.stats().total_rainfall(), daily_sum, epsilon = 0.05 + 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 7. each_month_matches_its_days
// ---------------------------------------------------------------------------
#[test]
fn each_month_matches_its_days() {
    let report = aggregate(&seattle_season(11)).unwrap();
    let names: Vec<&str> = report.monthly().iter().map(|m| m.month()).collect();
    assert_eq!(
        names,
        vec!["April", "May", "June", "July", "August", "September"]
    );
    for month in report.monthly() {
        let days_sum: f64 = report
            .daily()
            .iter()
            .filter(|d| d.year_month() == month.period())
            .map(|d| d.rainfall())
            .sum();
        assert_abs_diff_eq!(month.rainfall(), days_sum, epsilon = 0.05 + 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 8. aggregation_idempotent
// ---------------------------------------------------------------------------
#[test]
fn aggregation_idempotent() {
    let daily = seattle_season(3);
    let first = aggregate(&daily).unwrap();
    let second = aggregate(&daily).unwrap();
    assert_eq!(first, second);

    let again = aggregate(first.daily()).unwrap();
    assert_eq!(first, again);
}

// ---------------------------------------------------------------------------
// 9. rainiest_day_is_a_maximum
// ---------------------------------------------------------------------------
#[test]
fn rainiest_day_is_a_maximum() {
    for seed in 0..25 {
        let report = aggregate(&seattle_season(seed)).unwrap();
        let best = report.stats().rainiest_day();
        let first_max = report
            .daily()
            .iter()
            .find(|d| d.rainfall() == best.rainfall())
            .unwrap();
        assert!(report.daily().iter().all(|d| d.rainfall() <= best.rainfall()));
        assert_eq!(first_max.date(), best.date(), "earliest maximum expected");
    }
}

// ---------------------------------------------------------------------------
// 10. replayed_sequence_tie_break
// ---------------------------------------------------------------------------
#[test]
fn replayed_sequence_tie_break() {
    // Per day draws: dry -> [0.9]; rainy -> [0.0, u2, u3].
    // Day 1 dry, day 2 rainy min, day 3 rainy min, day 4 dry.
    let table = ClimateTable::new()
        .with_month(4, MonthParams::new(30.0, 0.5))
        .unwrap();
    let config = GeneratorConfig::new(ymd(2023, 4, 1), ymd(2023, 4, 4)).with_climate(table);
    let mut src =
        SequenceSource::new(vec![0.9, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.9]).unwrap();

    let daily = generate_daily(&config, &mut src).unwrap();
    let rain: Vec<f64> = daily.iter().map(|d| d.rainfall()).collect();
    // baseline 30 / (30 * 0.5) = 2.0, times 0.5 = 1.0
    assert_eq!(rain, vec![0.0, 1.0, 1.0, 0.0]);

    let report = aggregate(&daily).unwrap();
    assert_eq!(report.stats().rainiest_day().date(), ymd(2023, 4, 2));
    assert_eq!(report.stats().dry_day_count(), 2);
    assert_eq!(report.stats().wet_day_count(), 2);
}
