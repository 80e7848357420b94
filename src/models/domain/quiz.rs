use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::models::domain::quiz_question::QuizQuestion;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Quiz {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    // Reference into the users collection
    #[serde(rename = "createdBy", default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<ObjectId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Quiz {
    pub fn new(title: &str, questions: Vec<QuizQuestion>, created_by: Option<ObjectId>) -> Self {
        Quiz {
            id: Some(ObjectId::new()),
            title: title.to_string(),
            questions,
            created_by,
            created_at: Some(Utc::now()),
        }
    }
}
