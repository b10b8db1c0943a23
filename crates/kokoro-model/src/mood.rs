use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};
use utoipa::ToSchema;

/// The five coarse mood buckets. The declaration order is significant: records store
/// their scores parallel to this order and typed mood detection takes the first match.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, Display, AsRefStr, EnumIter, EnumString,
)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Anxious,
}

impl Mood {
    pub const COUNT: usize = 5;

    /// Colour used for this mood in chart datasets.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Happy => "#4CAF50",
            Self::Sad => "#2196F3",
            Self::Angry => "#F44336",
            Self::Calm => "#9C27B0",
            Self::Anxious => "#FF9800",
        }
    }

    #[must_use]
    pub fn labels() -> Vec<String> {
        Self::iter().map(|mood| mood.to_string()).collect()
    }
}

/// Mood distribution persisted with every journal entry.
///
/// `scores` runs parallel to `labels`. The json shape (`labels`, `scores`, `typed_mood`)
/// is what older rows hold, so it must not change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MoodScoreRecord {
    pub labels: Vec<String>,
    pub scores: Vec<f64>,
    #[serde(default)]
    pub typed_mood: Option<String>,
}

impl MoodScoreRecord {
    #[must_use]
    pub fn new(scores: [f64; Mood::COUNT], typed_mood: Option<Mood>) -> Self {
        Self {
            labels: Mood::labels(),
            scores: scores.to_vec(),
            typed_mood: typed_mood.map(|mood| mood.to_string()),
        }
    }

    /// Record substituted when a stored value can't be read.
    #[must_use]
    pub fn empty() -> Self {
        Self::new([0.0; Mood::COUNT], None)
    }

    #[must_use]
    pub fn with_typed_mood(mut self, typed_mood: Option<Mood>) -> Self {
        self.typed_mood = typed_mood.map(|mood| mood.to_string());
        self
    }

    /// Score of `mood`, looked up by its position in `labels`. Missing labels count as 0.
    #[must_use]
    pub fn score(&self, mood: Mood) -> f64 {
        self.labels
            .iter()
            .position(|label| label == mood.as_ref())
            .and_then(|idx| self.scores.get(idx).copied())
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.scores.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_shape() {
        let record = MoodScoreRecord::new([20.0; 5], Some(Mood::Calm));
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "labels": ["Happy", "Sad", "Angry", "Calm", "Anxious"],
                "scores": [20.0, 20.0, 20.0, 20.0, 20.0],
                "typed_mood": "Calm",
            })
        );

        let record = MoodScoreRecord::empty();
        assert_eq!(serde_json::to_value(&record).unwrap()["typed_mood"], serde_json::Value::Null);
    }

    #[test]
    fn test_deserialize_without_typed_mood() {
        let record: MoodScoreRecord =
            serde_json::from_str(r#"{"labels": ["Happy", "Sad"], "scores": [70, 30]}"#).unwrap();
        assert_eq!(record.typed_mood, None);
        assert!((record.score(Mood::Happy) - 70.0).abs() < f64::EPSILON);
        assert!(record.score(Mood::Anxious).abs() < f64::EPSILON);
    }

    #[test]
    fn test_score_tolerates_short_scores() {
        let record = MoodScoreRecord {
            labels: Mood::labels(),
            scores: vec![10.0, 90.0],
            typed_mood: None,
        };
        assert!((record.score(Mood::Sad) - 90.0).abs() < f64::EPSILON);
        assert!(record.score(Mood::Calm).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_mood() {
        assert_eq!("Angry".parse::<Mood>().unwrap(), Mood::Angry);
        assert!("angry".parse::<Mood>().is_err());
        assert_eq!(Mood::labels(), ["Happy", "Sad", "Angry", "Calm", "Anxious"]);
    }
}
