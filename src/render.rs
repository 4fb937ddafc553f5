//! Plain-text rendering of the weekly report.

use crate::weekly::{WeeklyMoodData, NO_DATA};

const BAR_WIDTH: usize = 20;

fn bar(count: u32, max: u32) -> String {
    if max == 0 {
        return String::new();
    }
    let filled = (count as usize * BAR_WIDTH) / max as usize;
    "█".repeat(filled)
}

fn percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (count * 100 + total / 2) / total
}

/// Render the weekly statistics as a small terminal report. Output is fully
/// determined by the input; rows follow the same ordering as the
/// most-frequent-mood tie-break.
pub fn render_weekly_report(data: &WeeklyMoodData) -> String {
    let mut out = String::new();

    out.push_str("Weekly Mood Report\n");
    out.push_str("==================\n");
    out.push_str(&format!(
        "Entries: {}   Most frequent: {}   Trend: {}   Avg/day: {:.1}\n",
        data.total_entries,
        data.most_frequent_mood,
        data.mood_trend.emoji_label(),
        data.average_mood,
    ));

    out.push_str("\nMood distribution\n");
    let rows = data.ordered_distribution();
    if rows.is_empty() {
        out.push_str(&format!("  {NO_DATA}\n"));
    } else {
        let max = rows.iter().map(|(_, count)| *count).max().unwrap_or(0);
        let label_width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
        for (label, count) in rows {
            out.push_str(&format!(
                "  {:<label_width$}  {:>3}  {:>3}%  {}\n",
                label,
                count,
                percent(count, data.total_entries),
                bar(count, max),
            ));
        }
    }

    out.push_str("\nEntries per day\n");
    let busiest = data.entries_per_day.iter().map(|slot| slot.count).max().unwrap_or(0);
    for slot in &data.entries_per_day {
        out.push_str(&format!("  {}  {:>3}  {}\n", slot.day, slot.count, bar(slot.count, busiest)));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::MoodEntry;
    use crate::weekly::weekly_mood_data;
    use chrono::{Duration, NaiveDate, NaiveDateTime};

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 15)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn report_lists_every_weekday_and_the_summary_line() {
        let entries = vec![
            MoodEntry::logged_at("Happy 😊", "", now() - Duration::days(1)),
            MoodEntry::logged_at("Happy 😊", "", now() - Duration::hours(1)),
            MoodEntry::logged_at("Sad 😔", "", now()),
        ];
        let report = render_weekly_report(&weekly_mood_data(&entries, now()));

        assert!(report.contains("Entries: 3"));
        assert!(report.contains("Most frequent: Happy 😊"));
        assert!(report.contains("Avg/day: 0.4"));
        for day in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
            assert!(report.contains(day), "missing weekday {day}");
        }
    }

    #[test]
    fn mood_rows_carry_percentages() {
        let entries = vec![
            MoodEntry::logged_at("Happy 😊", "", now()),
            MoodEntry::logged_at("Happy 😊", "", now() - Duration::days(1)),
            MoodEntry::logged_at("Calm 😌", "", now() - Duration::days(2)),
            MoodEntry::logged_at("Calm 😌", "", now() - Duration::days(3)),
        ];
        let report = render_weekly_report(&weekly_mood_data(&entries, now()));
        assert!(report.contains("50%"));
    }

    #[test]
    fn empty_window_renders_the_no_data_row() {
        let report = render_weekly_report(&weekly_mood_data(&[], now()));
        assert!(report.contains("No data"));
        assert!(report.contains("Entries: 0"));
        assert!(report.contains("➡️ Stable"));
    }

    #[test]
    fn bars_scale_to_the_largest_count() {
        assert_eq!(bar(2, 2).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 2).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0, 2), "");
        assert_eq!(bar(0, 0), "");
    }
}
