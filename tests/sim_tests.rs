//! Headless driver tests

use brick_tetris::sim::{self, SimConfig};

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = SimConfig {
        games: 2,
        seed: Some(42),
        max_ticks: 2_000,
        high_score: 0,
    };

    let a = sim::run(&config);
    let b = sim::run(&config);
    assert_eq!(a, b);
    assert_eq!(a.len(), 2);
}

#[test]
fn test_high_score_carried_across_sessions() {
    let config = SimConfig {
        games: 3,
        seed: Some(7),
        max_ticks: 3_000,
        high_score: 250,
    };

    let reports = sim::run(&config);
    let mut best = 250;
    for (i, report) in reports.iter().enumerate() {
        assert_eq!(report.session, i as u32);
        best = best.max(report.score);
        assert_eq!(report.high_score, best);
        assert!(report.ticks <= config.max_ticks);
    }
}

#[test]
fn test_zero_games() {
    let config = SimConfig {
        games: 0,
        ..SimConfig::default()
    };
    assert!(sim::run(&config).is_empty());
}
