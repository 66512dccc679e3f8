use crate::players::{AdvancedMetrics, CareerSummary, PlayerData, SeasonStat, SlabStatus};

pub const PASSER_RATING_MAX: u32 = 158;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricBar {
    pub label: &'static str,
    pub value: u32,
    pub max: u32,
    pub pct: u8,
}

impl MetricBar {
    fn new(label: &'static str, value: u32, max: u32) -> Self {
        Self {
            label,
            value,
            max,
            pct: pct_of_max(value as f64, max as f64),
        }
    }
}

/// Rounded percentage of `max`, clamped to 0..=100. A zero max yields 0.
pub fn pct_of_max(value: f64, max: f64) -> u8 {
    if max <= 0.0 || !value.is_finite() {
        return 0;
    }
    ((value / max) * 100.0).round().clamp(0.0, 100.0) as u8
}

pub fn win_rate_pct(cs: &CareerSummary) -> Option<u32> {
    if cs.games_played == 0 {
        return None;
    }
    Some(((cs.wins as f64 / cs.games_played as f64) * 100.0).round() as u32)
}

pub fn playoff_win_rate_pct(am: &AdvancedMetrics) -> u32 {
    (am.playoff_win_rate * 100.0).round().max(0.0) as u32
}

/// Scaled rate stats shown as horizontal bars on the player page.
pub fn metric_bars(data: &PlayerData) -> Vec<MetricBar> {
    let cs = &data.career_summary;
    let am = &data.advanced_metrics;
    vec![
        MetricBar::new("Clutch Rating", am.clutch_rating, 100),
        MetricBar::new("Completion %", round_u32(cs.completion_percentage), 100),
        MetricBar::new("Passer Rating", round_u32(cs.passer_rating), PASSER_RATING_MAX),
        MetricBar::new("TD/INT Ratio", round_u32(am.td_int_ratio * 20.0), 100),
        MetricBar::new("Yards / Attempt", round_u32(am.yards_per_attempt * 10.0), 100),
        MetricBar::new("Playoff Win Rate", playoff_win_rate_pct(am), 100),
    ]
}

/// Overall score mapped onto five stars.
pub fn star_rating(overall_score: u8) -> u8 {
    ((overall_score as f64 / 20.0).round() as u8).min(5)
}

fn round_u32(v: f64) -> u32 {
    v.round().max(0.0) as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonMetric {
    Yards,
    Touchdowns,
    Rating,
    RushYards,
}

impl SeasonMetric {
    pub const ALL: [SeasonMetric; 4] = [
        SeasonMetric::Yards,
        SeasonMetric::Touchdowns,
        SeasonMetric::Rating,
        SeasonMetric::RushYards,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SeasonMetric::Yards => "Pass Yards",
            SeasonMetric::Touchdowns => "TDs",
            SeasonMetric::Rating => "Rating",
            SeasonMetric::RushYards => "Rush Yards",
        }
    }

    pub fn next(self) -> Self {
        match self {
            SeasonMetric::Yards => SeasonMetric::Touchdowns,
            SeasonMetric::Touchdowns => SeasonMetric::Rating,
            SeasonMetric::Rating => SeasonMetric::RushYards,
            SeasonMetric::RushYards => SeasonMetric::Yards,
        }
    }

    pub fn value(self, s: &SeasonStat) -> f64 {
        match self {
            SeasonMetric::Yards => s.passing_yards as f64,
            SeasonMetric::Touchdowns => s.td as f64,
            SeasonMetric::Rating => s.rating,
            SeasonMetric::RushYards => s.rush_yards as f64,
        }
    }
}

/// (year, value) pairs in the order the seasons are stored.
pub fn season_series(seasons: &[SeasonStat], metric: SeasonMetric) -> Vec<(u16, f64)> {
    seasons.iter().map(|s| (s.year, metric.value(s))).collect()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub fire: usize,
    pub heating: usize,
    pub cooling: usize,
    pub neutral: usize,
}

impl StatusCounts {
    pub fn add(&mut self, status: SlabStatus) {
        match status {
            SlabStatus::Fire => self.fire += 1,
            SlabStatus::Heating => self.heating += 1,
            SlabStatus::Cooling => self.cooling += 1,
            SlabStatus::Neutral => self.neutral += 1,
        }
    }

    pub fn get(&self, status: SlabStatus) -> usize {
        match status {
            SlabStatus::Fire => self.fire,
            SlabStatus::Heating => self.heating,
            SlabStatus::Cooling => self.cooling,
            SlabStatus::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> usize {
        self.fire + self.heating + self.cooling + self.neutral
    }
}

/// Roster-level KPIs for the "all players" view.
#[derive(Debug, Clone)]
pub struct RosterSummary<'a> {
    pub size: usize,
    pub avg_score: Option<u32>,
    pub top_player: Option<&'a PlayerData>,
    pub hot_count: usize,
    pub status_counts: StatusCounts,
}

impl<'a> RosterSummary<'a> {
    pub fn from_players(players: &[&'a PlayerData]) -> Self {
        let mut status_counts = StatusCounts::default();
        let mut total_score = 0u32;
        let mut top_player: Option<&'a PlayerData> = None;

        for &pd in players {
            status_counts.add(pd.player.status);
            total_score += pd.player.overall_score as u32;
            // Strictly greater keeps the earliest player on ties.
            let better = top_player
                .map(|best| pd.player.overall_score > best.player.overall_score)
                .unwrap_or(true);
            if better {
                top_player = Some(pd);
            }
        }

        let avg_score = if players.is_empty() {
            None
        } else {
            Some((total_score as f64 / players.len() as f64).round() as u32)
        };

        Self {
            size: players.len(),
            avg_score,
            top_player,
            hot_count: status_counts.fire + status_counts.heating,
            status_counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pct_of_max_clamps_and_rounds() {
        assert_eq!(pct_of_max(79.0, 158.0), 50);
        assert_eq!(pct_of_max(250.0, 100.0), 100);
        assert_eq!(pct_of_max(10.0, 0.0), 0);
        assert_eq!(pct_of_max(-5.0, 100.0), 0);
    }

    #[test]
    fn metric_cycle_visits_every_variant() {
        let mut m = SeasonMetric::Yards;
        for expected in SeasonMetric::ALL.iter().skip(1) {
            m = m.next();
            assert_eq!(m, *expected);
        }
        assert_eq!(m.next(), SeasonMetric::Yards);
    }
}
