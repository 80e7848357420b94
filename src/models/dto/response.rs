use serde::Serialize;

use crate::models::dto::quiz_dto::QuizDto;

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct CreateQuizResponse {
    pub message: String,
    pub quiz: QuizDto,
}
