use crate::classifier::LabelScore;
use kokoro_model::mood::Mood;
use strum::IntoEnumIterator;

/// Fine grained emotion labels belonging to `mood`.
#[must_use]
pub fn labels_of(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &[
            "joy",
            "amusement",
            "excitement",
            "optimism",
            "pride",
            "gratitude",
            "admiration",
            "approval",
            "caring",
            "love",
        ],
        Mood::Sad => &["sadness", "grief", "disappointment", "remorse"],
        Mood::Angry => &["anger", "annoyance", "disapproval", "disgust"],
        Mood::Calm => &["neutral", "relief", "realization"],
        Mood::Anxious => &[
            "fear",
            "nervousness",
            "confusion",
            "curiosity",
            "desire",
            "embarrassment",
            "surprise",
        ],
    }
}

/// Bucket of a fine grained label, compared case insensitively.
#[must_use]
pub fn bucket_of(label: &str) -> Option<Mood> {
    let label = label.to_lowercase();
    Mood::iter().find(|mood| labels_of(*mood).contains(&label.as_str()))
}

/// Sums the scores per bucket. Unknown labels are dropped.
#[must_use]
pub fn sum_into_buckets(distribution: &[LabelScore]) -> [f64; Mood::COUNT] {
    let mut scores = [0.0; Mood::COUNT];
    for LabelScore { label, score } in distribution {
        if let Some(mood) = bucket_of(label) {
            scores[mood as usize] += score;
        }
    }
    scores
}
