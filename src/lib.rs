//! Local mood journal core.
//!
//! Entries carry a mood label, a fixed-pattern textual timestamp, and optional
//! notes. The [`weekly`] module derives weekly statistics (distribution,
//! per-day counts, trend) from a snapshot of the entry list; [`render`] turns
//! them into a terminal report and [`predict`] holds the placeholder next-mood
//! heuristic. Snapshots travel as JSON arrays via [`snapshot`].

pub mod config;
pub mod entry;
pub mod predict;
pub mod render;
pub mod snapshot;
pub mod weekly;

pub use entry::{Mood, MoodEntry, TIMESTAMP_FORMAT};
pub use predict::{predict_next_mood, MoodPrediction};
pub use weekly::{mood_frequency, quick_stats, weekly_mood_data, MoodTrend, WeeklyMoodData};
