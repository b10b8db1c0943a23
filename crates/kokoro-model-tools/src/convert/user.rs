use crate::convert::FromDbModel;
use chrono::Utc;
use kokoro_entity::user::Model as UserModel;
use kokoro_model::user::User;

impl FromDbModel<UserModel> for User {
    fn from_db_model(model: UserModel) -> Self {
        Self {
            id: model.id,
            premium_active: model.is_premium_active(Utc::now().fixed_offset()),
            username: model.username,
            email: model.email,
            premium_expiry: model.premium_expiry,
            created_at: model.created_at,
        }
    }
}
