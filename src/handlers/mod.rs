pub mod auth_handler;
pub mod form_handler;
pub mod health_handler;
pub mod quiz_handler;

use actix_web::{error::JsonPayloadError, web, HttpRequest, ResponseError};

use crate::{errors::AppError, middleware::get_request_id};

pub use auth_handler::{login, register};
pub use form_handler::register_form;
pub use health_handler::health_check;
pub use quiz_handler::{create_quiz, list_quizzes};

/// Registers every route on an `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(register)
        .service(login)
        .service(create_quiz)
        .service(list_quizzes)
        .service(health_check)
        .service(register_form);
}

/// Bodies that are not JSON at all are a bad request. Well-formed JSON with
/// missing or mistyped fields fails like the route's own operation.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| body_error(err, req).into())
}

fn body_error(err: JsonPayloadError, req: &HttpRequest) -> AppError {
    let operation = match &err {
        JsonPayloadError::Deserialize(e) if e.is_data() => operation_for(req.path()),
        _ => None,
    };

    match operation {
        Some(operation) => failure(req, operation)(AppError::InternalError(err.to_string())),
        None => AppError::BadRequest(err.to_string()),
    }
}

fn operation_for(path: &str) -> Option<&'static str> {
    match path {
        "/api/register" => Some(auth_handler::REGISTRATION_FAILED),
        "/api/login" => Some(auth_handler::LOGIN_FAILED),
        "/api/quizzes" => Some(quiz_handler::QUIZ_CREATION_FAILED),
        _ => None,
    }
}

/// Maps a service error to the failure reported for `operation`, logging
/// server-side failures with the request id.
fn failure<'a>(
    req: &'a HttpRequest,
    operation: &'static str,
) -> impl FnOnce(AppError) -> AppError + 'a {
    move |err| {
        let err = err.during(operation);
        if err.status_code().is_server_error() {
            log::error!(
                "[{}] {}",
                get_request_id(req).unwrap_or_else(|| "-".to_string()),
                err
            );
        }
        err
    }
}
