use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use lingoquest_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        if let Err(err) = config.validate_for_production() {
            log::error!("Refusing to start: {}", err);
            return Err(std::io::Error::other(err.to_string()));
        }
    }

    let bind_address = config.bind_address();
    let state = AppState::new(config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;

    log::info!(
        "Starting HTTP server on http://{}:{}",
        bind_address.0,
        bind_address.1
    );

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new(
                r#"%a "%r" %s %b %T request_id=%{x-request-id}o"#,
            ))
            .wrap(Cors::permissive())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
