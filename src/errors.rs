use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use mongodb::error::{ErrorKind, WriteFailure};
use serde::Serialize;
use thiserror::Error;

const DUPLICATE_KEY_CODE: i32 = 11000;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Internal server error: {0}")]
    InternalError(String),

    #[error("{operation}: {details}")]
    OperationFailed {
        operation: &'static str,
        details: String,
    },
}

impl AppError {
    /// Folds server-side failures into the operation-level error reported to
    /// clients. Not-found, unauthorized and bad-request errors pass through.
    pub fn during(self, operation: &'static str) -> Self {
        match self {
            AppError::NotFound(_) | AppError::Unauthorized(_) | AppError::BadRequest(_) => self,
            AppError::OperationFailed { .. } => self,
            AppError::AlreadyExists(details)
            | AppError::DatabaseError(details)
            | AppError::InternalError(details) => AppError::OperationFailed { operation, details },
        }
    }

    fn error_body(&self) -> ErrorResponse {
        match self {
            AppError::NotFound(msg) | AppError::Unauthorized(msg) | AppError::AlreadyExists(msg) => {
                ErrorResponse::new(msg.clone(), None)
            }
            AppError::BadRequest(details) => {
                ErrorResponse::new("Invalid request body".to_string(), Some(details.clone()))
            }
            AppError::DatabaseError(details) => {
                ErrorResponse::new("Database error".to_string(), Some(details.clone()))
            }
            AppError::InternalError(details) => {
                ErrorResponse::new("Internal server error".to_string(), Some(details.clone()))
            }
            AppError::OperationFailed { operation, details } => {
                ErrorResponse::new(operation.to_string(), Some(details.clone()))
            }
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn new(error: String, details: Option<String>) -> Self {
        Self { error, details }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AlreadyExists(_) => StatusCode::CONFLICT,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(self.error_body())
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        if is_duplicate_key(&err) {
            return AppError::AlreadyExists(err.to_string());
        }
        AppError::DatabaseError(err.to_string())
    }
}
impl From<mongodb::bson::oid::Error> for AppError {
    fn from(err: mongodb::bson::oid::Error) -> Self {
        AppError::InternalError(format!("Invalid ObjectId: {}", err))
    }
}
impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        AppError::InternalError(format!("Password hashing error: {}", err))
    }
}
impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        AppError::InternalError(format!("Background task failed: {}", err))
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

pub type AppResult<T> = Result<T, AppError>;
