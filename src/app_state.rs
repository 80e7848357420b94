use std::sync::Arc;

use crate::{
    auth::JwtService,
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{MongoQuizRepository, MongoUserRepository, QuizRepository, UserRepository},
    services::{quiz_service::QuizService, user_service::UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    pub quiz_service: Arc<QuizService>,
    pub jwt_service: Arc<JwtService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;
        log::info!("Using database '{}'", db.db_name());

        let user_repository = Arc::new(MongoUserRepository::new(&db, &config.users_collection));
        user_repository.ensure_indexes().await?;

        let quiz_repository = Arc::new(MongoQuizRepository::new(&db, &config.quizzes_collection));
        quiz_repository.ensure_indexes().await?;

        Ok(Self::from_repositories(
            config,
            user_repository,
            quiz_repository,
        ))
    }

    /// Wires services over any repository implementation.
    pub fn from_repositories(
        config: Config,
        user_repository: Arc<dyn UserRepository>,
        quiz_repository: Arc<dyn QuizRepository>,
    ) -> Self {
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));

        let user_service = Arc::new(UserService::new(
            Arc::clone(&user_repository),
            Arc::clone(&jwt_service),
            config.bcrypt_cost,
        ));
        let quiz_service = Arc::new(QuizService::new(quiz_repository, user_repository));

        Self {
            user_service,
            quiz_service,
            jwt_service,
            config: Arc::new(config),
        }
    }
}
