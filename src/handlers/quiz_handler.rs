use actix_web::{get, post, web, HttpRequest, HttpResponse};

use crate::{
    app_state::AppState,
    auth::{require_same_user, AuthenticatedUser},
    errors::AppError,
    handlers::failure,
    models::dto::request::CreateQuizRequest,
};

pub(crate) const QUIZ_CREATION_FAILED: &str = "Quiz creation failed";

#[post("/api/quizzes")]
pub async fn create_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<CreateQuizRequest>,
    auth: Result<AuthenticatedUser, AppError>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();

    // Open by default: the body's userId is trusted unless configured otherwise
    if state.config.require_auth_for_quizzes {
        let AuthenticatedUser(claims) = auth?;
        require_same_user(&claims, request.user_id.as_deref())?;
    }

    let response = state
        .quiz_service
        .create_quiz(request)
        .await
        .map_err(failure(&req, QUIZ_CREATION_FAILED))?;
    Ok(HttpResponse::Created().json(response))
}

#[get("/api/quizzes")]
pub async fn list_quizzes(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let quizzes = state
        .quiz_service
        .list_quizzes()
        .await
        .map_err(failure(&req, "Failed to fetch quizzes"))?;
    Ok(HttpResponse::Ok().json(quizzes))
}
