//! Deterministic mock price data for the analytics view.
//!
//! There is no market feed; histories are synthesized from a per-player base price so the
//! dashboard has something stable to plot.

pub const DEFAULT_BASE_PRICE: u64 = 5000;

const HISTORY_DAYS: [&str; 31] = [
    "Jan 25", "Jan 26", "Jan 27", "Jan 28", "Jan 29", "Jan 30", "Jan 31", "Feb 1", "Feb 2",
    "Feb 3", "Feb 4", "Feb 5", "Feb 6", "Feb 7", "Feb 8", "Feb 9", "Feb 10", "Feb 11", "Feb 12",
    "Feb 13", "Feb 14", "Feb 15", "Feb 16", "Feb 17", "Feb 18", "Feb 19", "Feb 20", "Feb 21",
    "Feb 22", "Feb 23", "Feb 24",
];

// (price multiplier, days ago, volume, grade)
const SCATTER_POINTS: [(f64, u32, u32, &str); 9] = [
    (1.00, 28, 4, "PSA 8"),
    (1.06, 24, 8, "PSA 9"),
    (1.20, 22, 3, "PSA 10"),
    (1.02, 18, 5, "PSA 8"),
    (1.10, 14, 7, "PSA 9"),
    (1.25, 10, 2, "PSA 10"),
    (1.08, 6, 6, "PSA 8"),
    (1.13, 3, 10, "PSA 9"),
    (1.35, 0, 4, "PSA 10"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub day: &'static str,
    pub price: i64,
    pub volume: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalePoint {
    pub price: u64,
    pub days_ago: u32,
    pub volume: u32,
    pub grade: &'static str,
}

pub fn base_price(slug: &str) -> u64 {
    match slug {
        "mahomes" => 11200,
        "allen" => 1500,
        "burrow" => 1800,
        "jackson" => 5200,
        "herbert" => 900,
        _ => DEFAULT_BASE_PRICE,
    }
}

pub fn seed_for(slug: &str) -> f64 {
    slug.len() as f64 * 0.3
}

pub fn price_history(base: u64, seed: f64) -> Vec<PricePoint> {
    let mut px = base as i64;
    HISTORY_DAYS
        .iter()
        .enumerate()
        .map(|(i, &day)| {
            let i = i as f64;
            px += ((i * seed).sin() * 80.0 + i * 12.0).round() as i64;
            let volume = 15 + ((i * 0.7 + seed).sin().abs() * 40.0).round() as u32;
            PricePoint {
                day,
                price: px,
                volume,
            }
        })
        .collect()
}

pub fn price_history_for(slug: &str) -> Vec<PricePoint> {
    price_history(base_price(slug), seed_for(slug))
}

pub fn sales_scatter(base: u64) -> Vec<SalePoint> {
    SCATTER_POINTS
        .iter()
        .map(|&(mult, days_ago, volume, grade)| SalePoint {
            price: (base as f64 * mult).round() as u64,
            days_ago,
            volume,
            grade,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceSummary {
    pub last: i64,
    pub high: i64,
    pub low: i64,
    pub total_volume: u32,
}

impl PriceSummary {
    pub fn from_history(history: &[PricePoint]) -> Option<Self> {
        let last = history.last()?.price;
        let high = history.iter().map(|p| p.price).max()?;
        let low = history.iter().map(|p| p.price).min()?;
        let total_volume = history.iter().map(|p| p.volume).sum();
        Some(Self {
            last,
            high,
            low,
            total_volume,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceRange {
    SevenDays,
    ThirtyDays,
}

impl PriceRange {
    pub fn label(self) -> &'static str {
        match self {
            PriceRange::SevenDays => "7D",
            PriceRange::ThirtyDays => "30D",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            PriceRange::SevenDays => PriceRange::ThirtyDays,
            PriceRange::ThirtyDays => PriceRange::SevenDays,
        }
    }

    /// Trailing slice shown for this range.
    pub fn window<'a>(self, history: &'a [PricePoint]) -> &'a [PricePoint] {
        match self {
            PriceRange::SevenDays => &history[history.len().saturating_sub(7)..],
            PriceRange::ThirtyDays => history,
        }
    }
}
