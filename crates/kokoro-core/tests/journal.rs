use async_trait::async_trait;
use chrono::Utc;
use kokoro_core::chart;
use kokoro_core::classifier::error::ClassifierError;
use kokoro_core::classifier::{EmotionClassifier, LabelScore};
use kokoro_core::journal;
use kokoro_core::mood::MoodPipeline;
use kokoro_db::{schema, user};
use kokoro_model::journal::JournalEntry;
use kokoro_model::journal::partial::{ChartQuery, ChartType};
use kokoro_model::mood::Mood;
use kokoro_model_tools::convert::IntoModel;
use kokoro_test_helpers::SQLITE_MEMORY_URI;
use sea_orm::{Database, DatabaseConnection};
use std::sync::Arc;
use test_log::test;

struct Joyful;

#[async_trait]
impl EmotionClassifier for Joyful {
    async fn distribution(&self, _text: &str) -> Result<Vec<LabelScore>, ClassifierError> {
        Ok(vec![LabelScore {
            label: "joy".to_owned(),
            score: 0.9,
        }])
    }
}

async fn setup() -> (DatabaseConnection, uuid::Uuid) {
    let db = Database::connect(SQLITE_MEMORY_URI).await.unwrap();
    schema::setup_schema(&db).await.unwrap();
    let user = user::Mutation::create_user(&db, "ada".to_owned(), "ada@example.com".to_owned(), "hash".to_owned())
        .await
        .unwrap();
    (db, user.id)
}

#[test(tokio::test)]
async fn test_create_classifies_and_stores() {
    let (db, user_id) = setup().await;
    let pipeline = MoodPipeline::new(Arc::new(Joyful));

    let stored = journal::create_entry(&db, &pipeline, user_id, "Feeling calm tonight".to_owned())
        .await
        .unwrap();
    assert_eq!(stored.typed_mood.as_deref(), Some("Calm"));

    let entry: JournalEntry = stored.into_model();
    assert!((entry.mood_scores.score(Mood::Happy) - 100.0).abs() < 1e-9);
    assert_eq!(entry.mood_scores.typed_mood.as_deref(), Some("Calm"));

    let query = ChartQuery {
        days: 30,
        chart_type: ChartType::Bar,
    };
    let series = chart::load_chart(&db, user_id, &query, Utc::now().fixed_offset()).await.unwrap();
    assert_eq!(series.datasets[0].data, [0.0, 0.0, 0.0, 100.0, 0.0], "typed mood overrides at read time");
}

#[test(tokio::test)]
async fn test_update_recomputes_classification() {
    let (db, user_id) = setup().await;
    let pipeline = MoodPipeline::new(Arc::new(Joyful));

    let stored = journal::create_entry(&db, &pipeline, user_id, "so angry".to_owned()).await.unwrap();
    assert_eq!(stored.typed_mood.as_deref(), Some("Angry"));

    let updated = journal::update_entry(&db, &pipeline, user_id, stored.id, "nothing special".to_owned())
        .await
        .unwrap();
    assert_eq!(updated.content, "nothing special");
    assert_eq!(updated.typed_mood, None);
    assert_eq!(updated.created_at, stored.created_at);
}
