use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// The one timestamp pattern used everywhere: `15 Jun 2024, 09:30 AM`.
///
/// Entries store their timestamp as text in this pattern and every piece of
/// date arithmetic re-parses it with the same pattern.
pub const TIMESTAMP_FORMAT: &str = "%d %b %Y, %I:%M %p";

/// Parse a stored timestamp. `None` means the text does not match the fixed
/// pattern; callers treat such entries as outside any time window.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// One journal record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    /// Milliseconds since epoch of the creation instant. Unique within a
    /// collection; ordering by id approximates recency.
    pub id: i64,
    /// Free text containing one of the canonical labels, e.g. "Happy 😊".
    pub mood: String,
    /// Creation time in [`TIMESTAMP_FORMAT`]. Preserved across edits.
    pub timestamp: String,
    #[serde(default)]
    pub notes: String,
}

impl MoodEntry {
    /// Create an entry logged at `now`; id and timestamp both derive from it.
    pub fn logged_at(mood: impl Into<String>, notes: impl Into<String>, now: NaiveDateTime) -> Self {
        Self {
            id: now.and_utc().timestamp_millis(),
            mood: mood.into(),
            timestamp: format_timestamp(now),
            notes: notes.into(),
        }
    }

    /// Replace mood and notes in place. The id and the original creation
    /// timestamp are untouched.
    pub fn edit(&mut self, mood: impl Into<String>, notes: impl Into<String>) {
        self.mood = mood.into();
        self.notes = notes.into();
    }

    pub fn logged(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.timestamp)
    }

    pub fn has_notes(&self) -> bool {
        !self.notes.is_empty()
    }

    /// Canonical mood behind the stored label, if any.
    pub fn canonical_mood(&self) -> Option<Mood> {
        Mood::from_label(&self.mood)
    }
}

/// The five canonical moods, in canonical (best-to-worst) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Happy,
    Calm,
    Neutral,
    Sad,
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 5] = [Mood::Happy, Mood::Calm, Mood::Neutral, Mood::Sad, Mood::Anxious];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Calm => "Calm",
            Mood::Neutral => "Neutral",
            Mood::Sad => "Sad",
            Mood::Anxious => "Anxious",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Calm => "😌",
            Mood::Neutral => "😐",
            Mood::Sad => "😔",
            Mood::Anxious => "😰",
        }
    }

    /// Ordinal intensity, 5 (Happy) down to 1 (Anxious).
    pub fn score(self) -> u8 {
        match self {
            Mood::Happy => 5,
            Mood::Calm => 4,
            Mood::Neutral => 3,
            Mood::Sad => 2,
            Mood::Anxious => 1,
        }
    }

    /// Match a stored label against the canonical set, case-insensitively via
    /// substring containment ("feeling happy today" matches Happy). First
    /// match in canonical order wins.
    pub fn from_label(label: &str) -> Option<Mood> {
        let lowered = label.to_lowercase();
        Mood::ALL
            .into_iter()
            .find(|mood| lowered.contains(&mood.as_str().to_lowercase()))
    }

    /// Position in canonical order, used as a deterministic tie-break key.
    pub fn rank(self) -> usize {
        match self {
            Mood::Happy => 0,
            Mood::Calm => 1,
            Mood::Neutral => 2,
            Mood::Sad => 3,
            Mood::Anxious => 4,
        }
    }
}
