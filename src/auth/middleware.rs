use std::future::{ready, Ready};

use actix_web::{dev::Payload, http::header::Header, web, FromRequest, HttpRequest};
use actix_web_httpauth::headers::authorization::{Authorization, Bearer};

use crate::{
    app_state::AppState,
    auth::Claims,
    errors::{AppError, AppResult},
};

/// Extractor for a caller presenting a valid `Authorization: Bearer` token.
pub struct AuthenticatedUser(pub Claims);

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(AuthenticatedUser))
    }
}

fn authenticate(req: &HttpRequest) -> AppResult<Claims> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalError("Application state not configured".to_string()))?;

    let authorization = Authorization::<Bearer>::parse(req)
        .map_err(|_| AppError::Unauthorized("Missing or malformed bearer token".to_string()))?;

    state
        .jwt_service
        .validate_token(authorization.into_scheme().token())
}
