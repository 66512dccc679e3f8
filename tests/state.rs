use slab_tracker::metrics::SeasonMetric;
use slab_tracker::price::PriceRange;
use slab_tracker::state::{ActivePlayer, AppState, MAX_SELECTED_CARDS, Screen, Theme};

fn roster() -> Vec<String> {
    ["mahomes", "allen", "burrow", "jackson", "herbert"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

#[test]
fn starts_on_theme_picker_with_defaults() {
    let state = AppState::new(roster());
    assert_eq!(state.screen, Screen::ThemePicker);
    assert!(state.selected.is_empty());
    assert!(state.active.is_none());
    assert_eq!(state.metric, SeasonMetric::Yards);
    assert_eq!(state.price_range, PriceRange::ThirtyDays);
}

#[test]
fn selection_is_capped_and_ordered() {
    let mut state = AppState::new(roster());
    assert!(state.toggle_card("burrow"));
    assert!(state.toggle_card("mahomes"));
    assert!(state.toggle_card("allen"));
    assert!(state.selection_complete());
    assert!(!state.toggle_card("jackson"));
    assert_eq!(state.selected.len(), MAX_SELECTED_CARDS);
    assert_eq!(state.selected, vec!["burrow", "mahomes", "allen"]);

    assert!(state.toggle_card("mahomes"));
    assert!(!state.is_selected("mahomes"));
    assert!(!state.selection_complete());
}

#[test]
fn full_selection_logs_a_warning() {
    let mut state = AppState::new(roster());
    state.confirm_theme();
    for _ in 0..MAX_SELECTED_CARDS {
        assert!(state.toggle_card_at_cursor());
        state.select_next();
    }
    assert!(!state.toggle_card_at_cursor());
    assert!(state.logs.back().is_some_and(|l| l.starts_with("[WARN]")));
}

#[test]
fn analytics_needs_a_selection() {
    let mut state = AppState::new(roster());
    state.confirm_theme();
    assert_eq!(state.screen, Screen::CardSelect);
    assert!(!state.enter_analytics());

    state.toggle_card("jackson");
    assert!(state.enter_analytics());
    assert_eq!(state.screen, Screen::Analytics);
    assert_eq!(state.active, Some(ActivePlayer::All));

    state.focus_cursor();
    assert_eq!(state.active, Some(ActivePlayer::Player("jackson".to_string())));

    state.back();
    assert_eq!(state.screen, Screen::CardSelect);
}

#[test]
fn cursor_wraps_over_roster() {
    let mut state = AppState::new(roster());
    state.confirm_theme();
    state.select_prev();
    assert_eq!(state.cursor, 4);
    state.select_next();
    assert_eq!(state.cursor, 0);
}

#[test]
fn toggles_cycle() {
    let mut state = AppState::new(roster());
    let theme = state.theme;
    state.toggle_theme();
    assert_ne!(state.theme, theme);
    state.toggle_theme();
    assert_eq!(state.theme, theme);

    state.toggle_price_range();
    assert_eq!(state.price_range, PriceRange::SevenDays);

    for _ in 0..4 {
        state.cycle_metric();
    }
    assert_eq!(state.metric, SeasonMetric::Yards);
}

#[test]
fn theme_parse_accepts_aliases() {
    assert_eq!(Theme::parse("WWE"), Some(Theme::Arena));
    assert_eq!(Theme::parse(" classic "), Some(Theme::ClassicAmber));
    assert_eq!(Theme::parse("neon"), None);
}

#[test]
fn logs_are_bounded() {
    let mut state = AppState::default();
    for i in 0..250 {
        state.push_log(format!("[INFO] {i}"));
    }
    assert_eq!(state.logs.len(), 200);
    assert_eq!(state.logs.front().map(String::as_str), Some("[INFO] 50"));
}
