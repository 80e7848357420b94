use std::fmt;

use serde::Deserialize;

use crate::models::domain::QuizQuestion;

#[derive(Clone, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateQuizRequest {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
    #[serde(default)]
    pub user_id: Option<String>,
}

impl fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_quiz_request_uses_camel_case_user_id() {
        let json = r#"{
            "title": "Colors",
            "questions": [{"question": "Rojo?", "options": ["Red", "Blue"], "answer": 0}],
            "userId": "65a1f0c2e4b0a1b2c3d4e5f6"
        }"#;

        let request: CreateQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Colors");
        assert_eq!(request.questions.len(), 1);
        assert_eq!(request.user_id.as_deref(), Some("65a1f0c2e4b0a1b2c3d4e5f6"));
    }

    #[test]
    fn test_create_quiz_request_without_questions_or_user() {
        let request: CreateQuizRequest = serde_json::from_str(r#"{"title": "Empty"}"#).unwrap();

        assert!(request.questions.is_empty());
        assert!(request.user_id.is_none());
    }

    #[test]
    fn test_register_request_requires_password() {
        let parsed =
            serde_json::from_str::<RegisterRequest>(r#"{"username":"a","email":"a@x.com"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_debug_redacts_passwords() {
        let register = RegisterRequest {
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
        };
        let login = LoginRequest {
            email: "a@x.com".to_string(),
            password: "hunter2".to_string(),
        };

        assert!(!format!("{:?}", register).contains("hunter2"));
        assert!(!format!("{:?}", login).contains("hunter2"));
        assert!(format!("{:?}", login).contains("REDACTED"));
    }
}
