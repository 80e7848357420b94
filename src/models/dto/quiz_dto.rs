use std::collections::HashMap;

use mongodb::bson::oid::ObjectId;
use serde::Serialize;

use crate::models::domain::{Quiz, QuizQuestion};

/// A quiz as returned from creation, with `createdBy` as a plain id.
#[derive(Debug, Clone, Serialize)]
pub struct QuizDto {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<String>,
}

impl From<Quiz> for QuizDto {
    fn from(quiz: Quiz) -> Self {
        QuizDto {
            id: quiz.id.map(|oid| oid.to_hex()),
            title: quiz.title,
            questions: quiz.questions,
            created_by: quiz.created_by.map(|oid| oid.to_hex()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreatorDto {
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
}

/// A listed quiz with its creator expanded to id and username.
#[derive(Debug, Clone, Serialize)]
pub struct QuizWithCreatorDto {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    pub title: String,
    pub questions: Vec<QuizQuestion>,
    #[serde(rename = "createdBy")]
    pub created_by: Option<CreatorDto>,
}

impl QuizWithCreatorDto {
    /// Joins a quiz with the usernames of known creators. A reference to a
    /// user that no longer resolves becomes `None`.
    pub fn populate(quiz: Quiz, usernames: &HashMap<ObjectId, String>) -> Self {
        let created_by = quiz.created_by.and_then(|oid| {
            usernames.get(&oid).map(|username| CreatorDto {
                id: oid.to_hex(),
                username: username.clone(),
            })
        });

        QuizWithCreatorDto {
            id: quiz.id.map(|oid| oid.to_hex()),
            title: quiz.title,
            questions: quiz.questions,
            created_by,
        }
    }
}
