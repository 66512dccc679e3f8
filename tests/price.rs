use slab_tracker::price::{
    DEFAULT_BASE_PRICE, PricePoint, PriceRange, PriceSummary, base_price, price_history,
    price_history_for, sales_scatter, seed_for,
};

#[test]
fn base_prices_fall_back_to_default() {
    assert_eq!(base_price("mahomes"), 11200);
    assert_eq!(base_price("herbert"), 900);
    assert_eq!(base_price("stroud"), DEFAULT_BASE_PRICE);
    assert_eq!(base_price(""), DEFAULT_BASE_PRICE);
}

#[test]
fn history_covers_thirty_one_days() {
    let history = price_history_for("mahomes");
    assert_eq!(history.len(), 31);
    assert_eq!(history[0].day, "Jan 25");
    assert_eq!(history[30].day, "Feb 24");
    // Day zero adds nothing to the base.
    assert_eq!(history[0].price, 11200);
    assert_eq!(history[0].volume, 50);
    assert_eq!(history[1].price, 11281);
    assert!(history.iter().all(|p| (15..=55).contains(&p.volume)));
}

#[test]
fn history_is_deterministic_per_slug() {
    assert_eq!(price_history_for("allen"), price_history_for("allen"));
    assert!((seed_for("allen") - 1.5).abs() < 1e-9);
    assert_eq!(price_history_for("allen"), price_history(1500, 1.5));
}

#[test]
fn scatter_scales_base_price() {
    let points = sales_scatter(1000);
    let prices: Vec<u64> = points.iter().map(|p| p.price).collect();
    assert_eq!(
        prices,
        vec![1000, 1060, 1200, 1020, 1100, 1250, 1080, 1130, 1350]
    );
    assert_eq!(points.iter().filter(|p| p.grade == "PSA 10").count(), 3);
    assert_eq!(points.last().map(|p| p.days_ago), Some(0));
}

#[test]
fn summary_reports_last_high_low_and_volume() {
    let history = vec![
        PricePoint { day: "Feb 22", price: 120, volume: 3 },
        PricePoint { day: "Feb 23", price: 90, volume: 4 },
        PricePoint { day: "Feb 24", price: 110, volume: 5 },
    ];
    let summary = PriceSummary::from_history(&history).unwrap();
    assert_eq!(summary.last, 110);
    assert_eq!(summary.high, 120);
    assert_eq!(summary.low, 90);
    assert_eq!(summary.total_volume, 12);
    assert!(PriceSummary::from_history(&[]).is_none());
}

#[test]
fn range_window_trails_the_history() {
    let history = price_history_for("burrow");
    let week = PriceRange::SevenDays.window(&history);
    assert_eq!(week.len(), 7);
    assert_eq!(week[0].day, "Feb 18");
    assert_eq!(PriceRange::ThirtyDays.window(&history).len(), 31);

    let short = &history[..3];
    assert_eq!(PriceRange::SevenDays.window(short).len(), 3);
}

#[test]
fn range_toggle_round_trips() {
    assert_eq!(PriceRange::ThirtyDays.toggle(), PriceRange::SevenDays);
    assert_eq!(PriceRange::SevenDays.toggle().label(), "30D");
}
