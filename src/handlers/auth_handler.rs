use actix_web::{post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    handlers::failure,
    models::dto::request::{LoginRequest, RegisterRequest},
};

pub(crate) const REGISTRATION_FAILED: &str = "Registration failed";
pub(crate) const LOGIN_FAILED: &str = "Login failed";

#[post("/api/register")]
pub async fn register(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .user_service
        .register(request.into_inner())
        .await
        .map_err(failure(&req, REGISTRATION_FAILED))?;
    Ok(HttpResponse::Created().json(response))
}

#[post("/api/login")]
pub async fn login(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state
        .user_service
        .login(request.into_inner())
        .await
        .map_err(failure(&req, LOGIN_FAILED))?;
    Ok(HttpResponse::Ok().json(response))
}
