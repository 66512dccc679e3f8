use std::fs;
use std::path::PathBuf;

use slab_tracker::metrics::{
    PASSER_RATING_MAX, RosterSummary, SeasonMetric, metric_bars, playoff_win_rate_pct,
    season_series, star_rating, win_rate_pct,
};
use slab_tracker::players::{PlayerData, SlabStatus};
use slab_tracker::registry::{PlayerRegistry, registry};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn test_registry() -> PlayerRegistry {
    let a = read_fixture("player_a.json");
    let b = read_fixture("player_b.json");
    PlayerRegistry::from_fixtures(&[("a", a.as_str()), ("b", b.as_str())])
        .expect("test fixtures should load")
}

#[test]
fn win_rates() {
    let reg = test_registry();
    let a = reg.get_player("a").unwrap();
    assert_eq!(win_rate_pct(&a.career_summary), Some(75));
    assert_eq!(playoff_win_rate_pct(&a.advanced_metrics), 50);

    let mut cs = a.career_summary.clone();
    cs.games_played = 0;
    cs.wins = 0;
    assert_eq!(win_rate_pct(&cs), None);
}

#[test]
fn metric_bars_scale_to_their_max() {
    let reg = test_registry();
    let bars = metric_bars(reg.get_player("a").unwrap());
    let got: Vec<(&str, u32, u32, u8)> = bars
        .iter()
        .map(|b| (b.label, b.value, b.max, b.pct))
        .collect();
    assert_eq!(
        got,
        vec![
            ("Clutch Rating", 80, 100, 80),
            ("Completion %", 65, 100, 65),
            ("Passer Rating", 97, PASSER_RATING_MAX, 61),
            ("TD/INT Ratio", 80, 100, 80),
            ("Yards / Attempt", 75, 100, 75),
            ("Playoff Win Rate", 50, 100, 50),
        ]
    );
}

#[test]
fn metric_bars_never_exceed_full() {
    let reg = registry().expect("built-in fixtures should load");
    for pd in reg.all_players() {
        for bar in metric_bars(pd) {
            assert!(bar.pct <= 100, "{} {} over 100%", pd.slug(), bar.label);
        }
    }
}

#[test]
fn star_rating_rounds_to_five_stars() {
    assert_eq!(star_rating(0), 0);
    assert_eq!(star_rating(29), 1);
    assert_eq!(star_rating(83), 4);
    assert_eq!(star_rating(90), 5);
    assert_eq!(star_rating(100), 5);
    assert_eq!(star_rating(255), 5);
}

#[test]
fn season_series_follows_stored_order_with_gaps() {
    let reg = test_registry();
    let a = reg.get_player("a").unwrap();
    assert_eq!(
        season_series(&a.season_stats, SeasonMetric::RushYards),
        vec![(2021, 120.0), (2023, -4.0)]
    );
    assert_eq!(
        season_series(&a.season_stats, SeasonMetric::Rating),
        vec![(2021, 96.5), (2023, 96.5)]
    );
    assert!(season_series(&[], SeasonMetric::Yards).is_empty());
}

#[test]
fn roster_summary_ties_keep_first_player() {
    let reg = test_registry();
    let players: Vec<&PlayerData> = reg.all_players().iter().collect();
    let summary = RosterSummary::from_players(&players);

    assert_eq!(summary.size, 2);
    assert_eq!(summary.avg_score, Some(90));
    assert_eq!(summary.top_player.map(|p| p.slug()), Some("a"));
    assert_eq!(summary.hot_count, 1);
    assert_eq!(summary.status_counts.get(SlabStatus::Fire), 1);
    assert_eq!(summary.status_counts.get(SlabStatus::Cooling), 1);
    assert_eq!(summary.status_counts.total(), 2);
}

#[test]
fn roster_summary_over_builtin_selection() {
    let reg = registry().expect("built-in fixtures should load");
    let picks: Vec<&PlayerData> = ["mahomes", "allen", "burrow"]
        .iter()
        .filter_map(|slug| reg.get_player(slug))
        .collect();
    let summary = RosterSummary::from_players(&picks);

    assert_eq!(summary.size, 3);
    assert_eq!(summary.avg_score, Some(94));
    assert_eq!(summary.top_player.map(|p| p.slug()), Some("mahomes"));
    assert_eq!(summary.hot_count, 3);
}

#[test]
fn empty_roster_summary() {
    let summary = RosterSummary::from_players(&[]);
    assert_eq!(summary.size, 0);
    assert_eq!(summary.avg_score, None);
    assert!(summary.top_player.is_none());
    assert_eq!(summary.hot_count, 0);
}
