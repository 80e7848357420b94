use actix_web::{get, http::header::ContentType, HttpResponse};

const REGISTER_PAGE: &str = include_str!("../../static/register.html");

/// Serves the browser registration form, which posts to `/api/register`.
#[get("/")]
pub async fn register_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(REGISTER_PAGE)
}
