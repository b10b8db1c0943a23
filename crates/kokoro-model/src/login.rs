use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Token {
    pub access_token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Credentials {
    #[schema(example = "username")]
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Registration {
    #[schema(example = "username")]
    pub username: String,
    #[schema(example = "user@example.com")]
    pub email: String,
    pub password: String,
}
