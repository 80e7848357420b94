use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// A registered account. `password_hash` is a bcrypt hash and is stored
/// under the `password` key.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn new(username: &str, email: &str, password_hash: String) -> Self {
        User {
            id: Some(ObjectId::new()),
            username: username.to_string(),
            email: email.to_string(),
            password_hash,
            created_at: Some(Utc::now()),
        }
    }

    pub fn id_hex(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}
