use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Market momentum of a player's slabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlabStatus {
    Fire,
    Heating,
    Cooling,
    Neutral,
}

impl SlabStatus {
    pub const ALL: [SlabStatus; 4] = [
        SlabStatus::Fire,
        SlabStatus::Heating,
        SlabStatus::Cooling,
        SlabStatus::Neutral,
    ];

    pub fn is_hot(self) -> bool {
        matches!(self, SlabStatus::Fire | SlabStatus::Heating)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsType {
    Signal,
    Price,
    Game,
    Insight,
}

impl NewsType {
    pub const ALL: [NewsType; 4] = [
        NewsType::Signal,
        NewsType::Price,
        NewsType::Game,
        NewsType::Insight,
    ];
}

/// One fixture file: a player profile plus everything the dashboard shows for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerData {
    pub player: PlayerProfile,
    pub career_summary: CareerSummary,
    pub season_stats: Vec<SeasonStat>,
    pub advanced_metrics: AdvancedMetrics,
    pub radar: Vec<RadarPoint>,
    pub awards: Vec<Award>,
    pub analytics_flags: AnalyticsFlags,
    pub news_feed: Vec<NewsItem>,
}

impl PlayerData {
    pub fn slug(&self) -> &str {
        &self.player.slug
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub slug: String,
    pub name: String,
    pub team: String,
    #[serde(rename = "teamColor")]
    pub team_color: String,
    #[serde(rename = "teamColorAlt")]
    pub team_color_alt: String,
    pub position: String,
    pub number: u8,
    pub height: String,
    pub weight: String,
    pub dob: String,
    pub experience_years: u8,
    pub initials: String,
    pub status: SlabStatus,
    // Signed percentage string, e.g. "+10.2%".
    #[serde(rename = "priceChange")]
    pub price_change: String,
    #[serde(rename = "priceLabel")]
    pub price_label: String,
    #[serde(rename = "cardGrade")]
    pub card_grade: String,
    #[serde(rename = "overallScore")]
    pub overall_score: u8,
    #[serde(rename = "featuredCard")]
    pub featured_card: String,
    #[serde(rename = "lastGame")]
    pub last_game: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerSummary {
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub passing_yards: u32,
    pub passing_touchdowns: u32,
    pub interceptions: u32,
    pub completion_percentage: f64,
    pub passer_rating: f64,
    pub rushing_yards: u32,
    pub rushing_touchdowns: u32,
    pub super_bowls_won: u32,
    pub mvps: u32,
    pub super_bowl_mvps: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeasonStat {
    pub year: u16,
    pub games: u32,
    pub passing_yards: u32,
    pub td: u32,
    pub int: u32,
    pub completion_pct: f64,
    pub rating: f64,
    pub rush_yards: i32,
    pub rush_td: u32,
    #[serde(default)]
    pub mvp: bool,
    #[serde(default)]
    pub super_bowl_win: bool,
    #[serde(default)]
    pub super_bowl_appearance: bool,
    #[serde(default)]
    pub injury: bool,
    #[serde(default)]
    pub rookie_oty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvancedMetrics {
    pub avg_yards_per_game: f64,
    pub td_int_ratio: f64,
    pub yards_per_attempt: f64,
    pub qbr_estimate: f64,
    pub clutch_rating: u32,
    // Fraction in 0..=1.
    pub playoff_win_rate: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarPoint {
    pub subject: String,
    #[serde(rename = "A")]
    pub value: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub year: u16,
    pub award: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsFlags {
    pub is_elite_qb: bool,
    pub is_clutch_player: bool,
    pub is_dynasty_player: bool,
    pub injury_risk: String,
    pub consistency_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: String,
    pub ts: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: NewsType,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub tag: Option<String>,
}
