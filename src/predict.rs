use serde::{Deserialize, Serialize};

use crate::weekly::MoodTrend;

/// Outcome of the next-mood heuristic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPrediction {
    pub predicted: String,
    pub confidence: f32,
    pub trend: MoodTrend,
}

/// Placeholder last-value-echo policy: the next mood is assumed to be the most
/// recent one, with a fixed confidence. An empty history falls back to
/// Neutral. Kept deliberately dumb; any replacement must honor the same
/// input/output contract.
pub fn predict_next_mood(recent_moods: &[String]) -> MoodPrediction {
    match recent_moods.last() {
        Some(last) => MoodPrediction {
            predicted: last.clone(),
            confidence: 0.7,
            trend: MoodTrend::Stable,
        },
        None => MoodPrediction {
            predicted: "Neutral 😐".to_string(),
            confidence: 0.5,
            trend: MoodTrend::Stable,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_history_predicts_the_neutral_sentinel() {
        let prediction = predict_next_mood(&[]);
        assert_eq!(prediction.predicted, "Neutral 😐");
        assert_eq!(prediction.confidence, 0.5);
        assert_eq!(prediction.trend, MoodTrend::Stable);
    }

    #[test]
    fn prediction_echoes_the_most_recent_mood() {
        let history = vec!["Happy 😊".to_string(), "Calm 😌".to_string(), "Sad 😔".to_string()];
        let prediction = predict_next_mood(&history);
        assert_eq!(prediction.predicted, "Sad 😔");
        assert_eq!(prediction.confidence, 0.7);
        assert_eq!(prediction.trend, MoodTrend::Stable);
    }
}
