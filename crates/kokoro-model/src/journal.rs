pub mod partial;

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

use crate::mood::MoodScoreRecord;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub mood_scores: MoodScoreRecord,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub typed_mood: Option<String>,
    pub created_at: chrono::DateTime<FixedOffset>,
}
