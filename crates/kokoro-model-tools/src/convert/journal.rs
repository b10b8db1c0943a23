use crate::convert::{FromDbModel, FromModel};
use kokoro_entity::journal::journal_entry::Model as JournalEntryModel;
use kokoro_model::journal::JournalEntry;
use kokoro_model::mood::MoodScoreRecord;
use serde_json::Value;
use std::error::Error;

/// Stored records are either a json object or, for rows written as text, a json string
/// holding the serialized object. Anything unreadable becomes the all-zero record.
impl FromDbModel<Value> for MoodScoreRecord {
    fn from_db_model(model: Value) -> Self {
        let parsed = match model {
            Value::String(text) => serde_json::from_str(&text),
            value => serde_json::from_value(value),
        };
        parsed.unwrap_or_else(|error| {
            tracing::warn!(error = &error as &dyn Error, "unreadable mood scores, using empty record");
            MoodScoreRecord::empty()
        })
    }
}

/// Stored with the record's own serde shape. Unserializable records are stored as null,
/// which reads back as the all-zero record.
impl FromModel<MoodScoreRecord> for Value {
    fn from_model(model: MoodScoreRecord) -> Self {
        serde_json::to_value(&model).unwrap_or_else(|error| {
            tracing::error!(error = &error as &dyn Error, "failed to serialize mood scores");
            Value::Null
        })
    }
}

impl FromDbModel<JournalEntryModel> for JournalEntry {
    fn from_db_model(model: JournalEntryModel) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            content: model.content,
            mood_scores: MoodScoreRecord::from_db_model(model.mood_scores),
            typed_mood: model.typed_mood,
            created_at: model.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{IntoDbModel, IntoModel};
    use kokoro_model::mood::Mood;
    use serde_json::json;

    #[test]
    fn test_parse_object() {
        let record: MoodScoreRecord = json!({
            "labels": ["Happy", "Sad", "Angry", "Calm", "Anxious"],
            "scores": [50, 25, 0, 25, 0],
            "typed_mood": null,
        })
        .into_model();
        assert!((record.score(Mood::Happy) - 50.0).abs() < f64::EPSILON);
        assert_eq!(record.typed_mood, None);
    }

    #[test]
    fn test_parse_serialized_text() {
        let text = r#"{"labels": ["Happy", "Sad", "Angry", "Calm", "Anxious"], "scores": [0, 0, 100, 0, 0], "typed_mood": "Angry"}"#;
        let record: MoodScoreRecord = Value::String(text.to_owned()).into_model();
        assert!((record.score(Mood::Angry) - 100.0).abs() < f64::EPSILON);
        assert_eq!(record.typed_mood.as_deref(), Some("Angry"));
    }

    #[test]
    fn test_unreadable_is_empty() {
        for value in [
            Value::String("not json".to_owned()),
            json!(42),
            json!({"labels": "Happy"}),
            Value::Null,
        ] {
            let record: MoodScoreRecord = value.into_model();
            assert_eq!(record, MoodScoreRecord::empty());
        }
    }

    #[test]
    fn test_store_matches_serialized_record() {
        let record = MoodScoreRecord::new([10.0, 20.0, 30.0, 40.0, 0.0], Some(Mood::Calm));
        let value: Value = record.clone().into_db_model();
        assert_eq!(value, serde_json::to_value(&record).unwrap());
        let restored: MoodScoreRecord = value.into_model();
        assert_eq!(restored, record);
    }

    #[test]
    fn test_store_keeps_shape() {
        let value: Value = MoodScoreRecord::new([20.0; 5], None).into_db_model();
        assert_eq!(
            value,
            json!({
                "labels": ["Happy", "Sad", "Angry", "Calm", "Anxious"],
                "scores": [20.0, 20.0, 20.0, 20.0, 20.0],
                "typed_mood": null,
            })
        );
    }
}
