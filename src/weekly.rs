//! Weekly aggregation over a snapshot of journal entries.
//!
//! Everything here is a pure function of `(entries, now)`: no I/O, no shared
//! state, safe to call from any thread. The weekly window is the trailing
//! 7x24h period ending at `now`. Entries whose timestamp text does not parse
//! under the fixed pattern are treated as outside the window and skipped.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::entry::{parse_timestamp, Mood, MoodEntry};

/// Sentinel shown when the window holds no entries.
pub const NO_DATA: &str = "No data";

/// Direction of the last two per-day counts of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
}

impl MoodTrend {
    pub fn as_str(self) -> &'static str {
        match self {
            MoodTrend::Improving => "Improving",
            MoodTrend::Declining => "Declining",
            MoodTrend::Stable => "Stable",
        }
    }

    pub fn emoji_label(self) -> &'static str {
        match self {
            MoodTrend::Improving => "📈 Improving",
            MoodTrend::Declining => "📉 Declining",
            MoodTrend::Stable => "➡️ Stable",
        }
    }
}

impl std::fmt::Display for MoodTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot of the weekday axis: a weekday abbreviation ("Mon") and how many
/// windowed entries fell on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCount {
    pub day: String,
    pub count: u32,
}

/// Derived weekly statistics. Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyMoodData {
    /// Entries inside the trailing window.
    pub total_entries: u32,
    /// Windowed count per literal stored mood label.
    pub mood_distribution: HashMap<String, u32>,
    /// Exactly 7 slots, the weekdays of `now-6d ..= now` oldest to newest.
    /// Days with no entries keep their zero slot.
    pub entries_per_day: Vec<DayCount>,
    /// Label with the highest windowed count; [`NO_DATA`] when the window is
    /// empty. Ties break toward the earlier canonical mood.
    pub most_frequent_mood: String,
    pub mood_trend: MoodTrend,
    /// `total_entries / 7.0`: an entries-per-day rate over the week, not an
    /// average of mood intensity.
    pub average_mood: f64,
}

impl WeeklyMoodData {
    /// Distribution as rows in deterministic render order: count descending,
    /// then canonical mood order, then label.
    pub fn ordered_distribution(&self) -> Vec<(&str, u32)> {
        let mut rows: Vec<(&str, u32)> = self
            .mood_distribution
            .iter()
            .map(|(label, count)| (label.as_str(), *count))
            .collect();
        rows.sort_by(|a, b| distribution_order(a.0, a.1, b.0, b.1));
        rows
    }
}

fn window_start(now: NaiveDateTime) -> NaiveDateTime {
    now - Duration::days(7)
}

/// Parse an entry's timestamp and decide window membership. Unparsable
/// timestamps count as out of window.
fn logged_in_window(entry: &MoodEntry, start: NaiveDateTime) -> Option<NaiveDateTime> {
    match parse_timestamp(&entry.timestamp) {
        Some(at) if at >= start => Some(at),
        Some(_) => None,
        None => {
            tracing::debug!(
                "skipping entry {} with unparsable timestamp {:?}",
                entry.id,
                entry.timestamp
            );
            None
        }
    }
}

fn distribution_order(
    label_a: &str,
    count_a: u32,
    label_b: &str,
    count_b: u32,
) -> std::cmp::Ordering {
    let canonical_rank = |label: &str| Mood::from_label(label).map(Mood::rank).unwrap_or(usize::MAX);
    count_b
        .cmp(&count_a)
        .then_with(|| canonical_rank(label_a).cmp(&canonical_rank(label_b)))
        .then_with(|| label_a.cmp(label_b))
}

/// Count windowed entries per literal mood label.
pub fn mood_frequency(entries: &[MoodEntry], now: NaiveDateTime) -> HashMap<String, u32> {
    let start = window_start(now);
    let mut counts = HashMap::new();
    for entry in entries {
        if logged_in_window(entry, start).is_some() {
            *counts.entry(entry.mood.clone()).or_insert(0) += 1;
        }
    }
    counts
}

/// Compute the full weekly statistics record for the trailing window.
pub fn weekly_mood_data(entries: &[MoodEntry], now: NaiveDateTime) -> WeeklyMoodData {
    // The weekday axis exists for every input, empty included, so report
    // rendering always has its 7 slots.
    let mut entries_per_day: Vec<DayCount> = (0..7)
        .rev()
        .map(|days_back| DayCount {
            day: (now - Duration::days(days_back)).format("%a").to_string(),
            count: 0,
        })
        .collect();

    let start = window_start(now);
    let mut mood_distribution: HashMap<String, u32> = HashMap::new();
    let mut total_entries = 0u32;

    for entry in entries {
        let Some(at) = logged_in_window(entry, start) else {
            continue;
        };
        total_entries += 1;
        *mood_distribution.entry(entry.mood.clone()).or_insert(0) += 1;
        let weekday = at.format("%a").to_string();
        if let Some(slot) = entries_per_day.iter_mut().find(|slot| slot.day == weekday) {
            slot.count += 1;
        }
    }

    let most_frequent_mood = mood_distribution
        .iter()
        .map(|(label, count)| (label.as_str(), *count))
        .min_by(|a, b| distribution_order(a.0, a.1, b.0, b.1))
        .map(|(label, _)| label.to_string())
        .unwrap_or_else(|| NO_DATA.to_string());

    let mood_trend = match entries_per_day.as_slice() {
        [.., earlier, later] if later.count > earlier.count => MoodTrend::Improving,
        [.., earlier, later] if later.count < earlier.count => MoodTrend::Declining,
        _ => MoodTrend::Stable,
    };

    WeeklyMoodData {
        average_mood: f64::from(total_entries) / 7.0,
        total_entries,
        mood_distribution,
        entries_per_day,
        most_frequent_mood,
        mood_trend,
    }
}

/// Quick stats over the last 7 entries by list position, ignoring dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStats {
    pub total: u32,
    pub happy_count: u32,
    /// `total / 7.0` formatted to one decimal; "0.0" when there are no
    /// entries at all.
    pub average_per_day: String,
}

pub fn quick_stats(entries: &[MoodEntry]) -> WeeklyStats {
    let recent = &entries[entries.len().saturating_sub(7)..];
    let happy_count = recent
        .iter()
        .filter(|entry| entry.mood.to_lowercase().contains("happy"))
        .count() as u32;
    let total = recent.len() as u32;
    let average_per_day = if recent.is_empty() {
        "0.0".to_string()
    } else {
        format!("{:.1}", f64::from(total) / 7.0)
    };
    WeeklyStats {
        total,
        happy_count,
        average_per_day,
    }
}
