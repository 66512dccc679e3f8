use std::collections::VecDeque;
use std::env;

use crate::metrics::SeasonMetric;
use crate::price::PriceRange;

pub const MAX_SELECTED_CARDS: usize = 3;
const MAX_LOGS: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ThemePicker,
    CardSelect,
    Analytics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Arena,
    ClassicAmber,
}

impl Theme {
    pub fn name(self) -> &'static str {
        match self {
            Theme::Arena => "WWE Arena",
            Theme::ClassicAmber => "Classic Amber",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            Theme::Arena => "#dc2626",
            Theme::ClassicAmber => "#f59e0b",
        }
    }

    pub fn accent_bright(self) -> &'static str {
        match self {
            Theme::Arena => "#ef4444",
            Theme::ClassicAmber => "#fbbf24",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Arena => Theme::ClassicAmber,
            Theme::ClassicAmber => Theme::Arena,
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "arena" | "wwe" => Some(Theme::Arena),
            "classic" | "amber" => Some(Theme::ClassicAmber),
            _ => None,
        }
    }
}

/// Which record the analytics view is focused on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivePlayer {
    All,
    Player(String),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub theme: Theme,
    /// Slugs in display order; the cursor indexes into this.
    pub roster: Vec<String>,
    pub cursor: usize,
    pub selected: Vec<String>,
    pub active: Option<ActivePlayer>,
    pub metric: SeasonMetric,
    pub price_range: PriceRange,
    pub logs: VecDeque<String>,
    pub help_overlay: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AppState {
    pub fn new(roster: Vec<String>) -> Self {
        Self {
            screen: Screen::ThemePicker,
            theme: theme_env_or_default("SLAB_THEME", Theme::Arena),
            roster,
            cursor: 0,
            selected: Vec::with_capacity(MAX_SELECTED_CARDS),
            active: None,
            metric: SeasonMetric::Yards,
            price_range: PriceRange::ThirtyDays,
            logs: VecDeque::with_capacity(MAX_LOGS),
            help_overlay: false,
        }
    }

    pub fn push_log(&mut self, msg: impl Into<String>) {
        self.logs.push_back(msg.into());
        while self.logs.len() > MAX_LOGS {
            self.logs.pop_front();
        }
    }

    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected.iter().any(|s| s == slug)
    }

    /// Adds or removes `slug` from the selection. Adding past the cap is refused.
    /// Returns whether the selection changed.
    pub fn toggle_card(&mut self, slug: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s == slug) {
            self.selected.remove(pos);
            return true;
        }
        if self.selected.len() >= MAX_SELECTED_CARDS {
            return false;
        }
        self.selected.push(slug.to_string());
        true
    }

    pub fn toggle_card_at_cursor(&mut self) -> bool {
        let Some(slug) = self.roster.get(self.cursor).cloned() else {
            return false;
        };
        let changed = self.toggle_card(&slug);
        if !changed {
            self.push_log(format!(
                "[WARN] Selection full ({MAX_SELECTED_CARDS} cards)"
            ));
        }
        changed
    }

    pub fn selection_complete(&self) -> bool {
        self.selected.len() == MAX_SELECTED_CARDS
    }

    pub fn confirm_theme(&mut self) {
        self.screen = Screen::CardSelect;
        self.cursor = 0;
    }

    /// Moves to the analytics view focused on the whole selection. Needs at least one card.
    pub fn enter_analytics(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.screen = Screen::Analytics;
        self.active = Some(ActivePlayer::All);
        self.cursor = 0;
        true
    }

    pub fn back(&mut self) {
        self.screen = match self.screen {
            Screen::Analytics => Screen::CardSelect,
            Screen::CardSelect | Screen::ThemePicker => Screen::ThemePicker,
        };
        self.cursor = 0;
    }

    pub fn set_active(&mut self, active: ActivePlayer) {
        self.active = Some(active);
    }

    /// Focus the analytics view on the selected card under the cursor.
    pub fn focus_cursor(&mut self) {
        if let Some(slug) = self.selected.get(self.cursor).cloned() {
            self.active = Some(ActivePlayer::Player(slug));
        }
    }

    pub fn cycle_metric(&mut self) {
        self.metric = self.metric.next();
    }

    pub fn toggle_price_range(&mut self) {
        self.price_range = self.price_range.toggle();
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    fn cursor_len(&self) -> usize {
        match self.screen {
            Screen::ThemePicker => 0,
            Screen::CardSelect => self.roster.len(),
            Screen::Analytics => self.selected.len(),
        }
    }

    pub fn select_next(&mut self) {
        let total = self.cursor_len();
        if total == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1) % total;
    }

    pub fn select_prev(&mut self) {
        let total = self.cursor_len();
        if total == 0 {
            self.cursor = 0;
            return;
        }
        if self.cursor == 0 {
            self.cursor = total - 1;
        } else {
            self.cursor -= 1;
        }
    }
}

fn theme_env_or_default(key: &str, default: Theme) -> Theme {
    env::var(key)
        .ok()
        .and_then(|raw| Theme::parse(&raw))
        .unwrap_or(default)
}
