use std::fmt::Display;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, TimeZone, Utc};

use crate::players::{NewsType, SlabStatus};

const SHORT_DATE_FMT: &str = "%b %-d";
const TIMESTAMP_FMT: &str = "%b %-d, %-I:%M %p";

pub fn status_label(s: SlabStatus) -> &'static str {
    match s {
        SlabStatus::Fire => "ON FIRE 🔥",
        SlabStatus::Heating => "HEATING UP",
        SlabStatus::Cooling => "COOLING",
        SlabStatus::Neutral => "NEUTRAL",
    }
}

pub fn status_badge_class(s: SlabStatus) -> &'static str {
    match s {
        SlabStatus::Fire => "badge badge-fire",
        SlabStatus::Heating => "badge badge-heating",
        SlabStatus::Cooling => "badge badge-cooling",
        SlabStatus::Neutral => "badge badge-neutral",
    }
}

pub fn glow_color_class(s: SlabStatus) -> &'static str {
    match s {
        SlabStatus::Fire => "glow-red glow-anim-red",
        SlabStatus::Heating => "glow-amber glow-anim-amber",
        SlabStatus::Cooling => "glow-blue glow-anim-blue",
        SlabStatus::Neutral => "glow-grey",
    }
}

pub fn glow_color(s: SlabStatus) -> &'static str {
    match s {
        SlabStatus::Fire => "rgba(239,68,68,0.55)",
        SlabStatus::Heating => "rgba(245,158,11,0.55)",
        SlabStatus::Cooling => "rgba(59,130,246,0.45)",
        SlabStatus::Neutral => "rgba(120,120,120,0.3)",
    }
}

/// Fire and heating share the amber delta color; only cooling and neutral differ.
pub fn delta_color(s: SlabStatus) -> &'static str {
    match s {
        SlabStatus::Cooling => "#3b82f6",
        SlabStatus::Neutral => "#9ca3af",
        SlabStatus::Fire | SlabStatus::Heating => "#f59e0b",
    }
}

pub fn news_type_color(t: NewsType) -> &'static str {
    match t {
        NewsType::Signal => "#f59e0b",
        NewsType::Price => "#10b981",
        NewsType::Game => "#06b6d4",
        NewsType::Insight => "#8b5cf6",
    }
}

pub fn news_type_label(t: NewsType) -> &'static str {
    match t {
        NewsType::Signal => "Signal",
        NewsType::Price => "Price",
        NewsType::Game => "Game",
        NewsType::Insight => "Insight",
    }
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw.trim())
        .with_context(|| format!("invalid timestamp `{raw}`"))?;
    Ok(parsed.with_timezone(&Utc))
}

/// Relative age against the local wall clock.
pub fn time_ago(ts: &DateTime<Utc>) -> String {
    time_ago_at(ts, &Local::now())
}

/// Relative age of `ts` as seen from `now`.
///
/// Tiers are "just now", minutes, hours, then days (all floored). From seven days on the
/// short date is shown in `now`'s timezone. A timestamp in the future reads "just now".
pub fn time_ago_at<Tz>(ts: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let diff_ms = (now.with_timezone(&Utc) - *ts).num_milliseconds();
    let diff_m = diff_ms.div_euclid(60_000);
    let diff_h = diff_m.div_euclid(60);
    let diff_d = diff_h.div_euclid(24);

    if diff_m < 1 {
        return "just now".to_string();
    }
    if diff_m < 60 {
        return format!("{diff_m}m ago");
    }
    if diff_h < 24 {
        return format!("{diff_h}h ago");
    }
    if diff_d < 7 {
        return format!("{diff_d}d ago");
    }
    ts.with_timezone(&now.timezone())
        .format(SHORT_DATE_FMT)
        .to_string()
}

pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    format_timestamp_in(ts, &Local)
}

/// "Feb 24, 7:15 PM" in the given timezone.
pub fn format_timestamp_in<Tz>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.with_timezone(tz).format(TIMESTAMP_FMT).to_string()
}

/// en-US digit grouping: 13050 -> "13,050".
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
