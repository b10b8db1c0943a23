use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    #[schema(example = "username")]
    pub username: String,
    pub email: String,
    pub premium_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_expiry: Option<chrono::DateTime<FixedOffset>>,
    pub created_at: chrono::DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_serialize() {
        let id = Uuid::new_v4();
        let created_at = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap().fixed_offset();
        assert_eq!(
            format!(
                r#"{{"id":"{id}","username":"ada","email":"ada@example.com","premium_active":false,"created_at":"2024-05-01T08:00:00+00:00"}}"#
            ),
            serde_json::to_string(&User {
                id,
                username: "ada".to_owned(),
                email: "ada@example.com".to_owned(),
                premium_active: false,
                premium_expiry: None,
                created_at,
            })
            .unwrap()
        );
    }
}
