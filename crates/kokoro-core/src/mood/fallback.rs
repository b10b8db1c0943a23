use crate::mood::normalize;
use kokoro_model::mood::{Mood, MoodScoreRecord};
use strum::IntoEnumIterator;

/// Score every bucket gets when no keyword matches.
pub const UNIFORM_SCORE: f64 = 20.0;

#[must_use]
pub fn keywords_of(mood: Mood) -> &'static [&'static str] {
    match mood {
        Mood::Happy => &["happy", "joy", "excited", "great", "wonderful", "amazing", "love", "good"],
        Mood::Sad => &["sad", "unhappy", "depressed", "down", "miserable", "grief", "crying"],
        Mood::Angry => &["angry", "mad", "furious", "rage", "annoyed", "irritated"],
        Mood::Calm => &["calm", "peaceful", "relaxed", "serene", "tranquil"],
        Mood::Anxious => &["anxious", "worried", "nervous", "stressed", "afraid", "scared"],
    }
}

/// Local keyword based scoring used when the classifier is unavailable.
///
/// Keywords are counted as non-overlapping substrings of the lowercased text, so
/// "unhappy" counts once for Sad and once for Happy.
#[must_use]
pub fn score(text: &str) -> MoodScoreRecord {
    let text = text.to_lowercase();
    let mut counts = [0.0; Mood::COUNT];
    for mood in Mood::iter() {
        let matches: usize = keywords_of(mood).iter().map(|keyword| text.matches(keyword).count()).sum();
        counts[mood as usize] = matches as f64;
    }

    let scores = normalize(counts).unwrap_or([UNIFORM_SCORE; Mood::COUNT]);
    MoodScoreRecord::new(scores, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_scores(record: &MoodScoreRecord, expected: [f64; Mood::COUNT]) {
        for (actual, expected) in record.scores.iter().zip(expected) {
            assert!((actual - expected).abs() < 1e-9, "{:?} != {expected:?}", record.scores);
        }
    }

    #[test]
    fn test_single_keyword() {
        let record = score("I feel great");
        assert_eq!(record.labels, Mood::labels());
        assert_scores(&record, [100.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(record.typed_mood, None);
    }

    #[test]
    fn test_mixed_keywords() {
        let record = score("Worried and SCARED but the evening was peaceful");
        assert_scores(&record, [0.0, 0.0, 0.0, 100.0 / 3.0, 200.0 / 3.0]);
    }

    #[test]
    fn test_substring_matches() {
        // "unhappy" holds "happy" and is itself a sad keyword
        let record = score("unhappy");
        assert_scores(&record, [50.0, 50.0, 0.0, 0.0, 0.0]);

        // "goodness" contains "good", "madness" contains "mad"
        let record = score("goodness madness");
        assert_scores(&record, [50.0, 0.0, 50.0, 0.0, 0.0]);
    }

    #[test]
    fn test_repeated_keyword() {
        let record = score("sad sad sad happy");
        assert_scores(&record, [25.0, 75.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_no_signal() {
        for text in ["", "the weather report", "1234"] {
            let record = score(text);
            assert_eq!(record.scores, vec![UNIFORM_SCORE; Mood::COUNT]);
        }
    }
}
