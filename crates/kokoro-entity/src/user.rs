use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub is_premium: bool,
    pub premium_expiry: Option<DateTimeWithTimeZone>,
    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    /// Premium counts only while the flag is set and the expiry (if any) lies after `now`.
    #[must_use]
    pub fn is_premium_active(&self, now: DateTimeWithTimeZone) -> bool {
        if !self.is_premium {
            return false;
        }
        self.premium_expiry.is_none_or(|expiry| expiry >= now)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::access_tokens::Entity")]
    AccessToken,
    #[sea_orm(has_many = "super::journal::journal_entry::Entity")]
    JournalEntry,
}

impl Related<super::access_tokens::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessToken.def()
    }
}

impl Related<super::journal::journal_entry::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JournalEntry.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn user(is_premium: bool, premium_expiry: Option<DateTimeWithTimeZone>) -> Model {
        Model {
            id: Uuid::new_v4(),
            username: "ada".to_owned(),
            email: "ada@example.com".to_owned(),
            password_hash: String::new(),
            is_premium,
            premium_expiry,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[test]
    fn test_premium_active() {
        let now = Utc::now().fixed_offset();
        assert!(!user(false, None).is_premium_active(now));
        assert!(!user(false, Some(now + Duration::days(3))).is_premium_active(now));
        assert!(user(true, None).is_premium_active(now));
        assert!(user(true, Some(now + Duration::days(3))).is_premium_active(now));
        assert!(!user(true, Some(now - Duration::seconds(1))).is_premium_active(now));
    }
}
