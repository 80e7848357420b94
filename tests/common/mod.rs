#![allow(dead_code, unused_macros)]

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use secrecy::SecretString;
use tokio::sync::RwLock;

use lingoquest_server::{
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Quiz, User},
    repositories::{QuizRepository, UserRepository},
};

pub const TEST_JWT_SECRET: &str = "integration_test_jwt_secret";

pub fn test_config() -> Config {
    Config {
        mongo_conn_string: "mongodb://localhost:27017".to_string(),
        mongo_db_name: "lingoquest-test".to_string(),
        users_collection: "users".to_string(),
        quizzes_collection: "quizzes".to_string(),
        web_server_host: "127.0.0.1".to_string(),
        web_server_port: 5000,
        jwt_secret: SecretString::from(TEST_JWT_SECRET.to_string()),
        jwt_expiration_hours: 1,
        bcrypt_cost: 4,
        require_auth_for_quizzes: false,
        app_env: "test".to_string(),
    }
}

/// Mirrors the unique indexes on `username` and `email`.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<Vec<User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn snapshot(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;

        if let Some(existing) = users
            .iter()
            .find(|u| u.username == user.username || u.email == user.email)
        {
            let field = if existing.username == user.username {
                "username"
            } else {
                "email"
            };
            return Err(AppError::AlreadyExists(format!(
                "E11000 duplicate key error collection: users index: {}_unique",
                field
            )));
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_ids(&self, ids: &[ObjectId]) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        Ok(users
            .iter()
            .filter(|u| u.id.map(|id| ids.contains(&id)).unwrap_or(false))
            .cloned()
            .collect())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryQuizRepository {
    quizzes: Arc<RwLock<Vec<Quiz>>>,
}

impl InMemoryQuizRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizRepository for InMemoryQuizRepository {
    async fn create(&self, quiz: Quiz) -> AppResult<Quiz> {
        let mut quizzes = self.quizzes.write().await;
        quizzes.push(quiz.clone());
        Ok(quiz)
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        let quizzes = self.quizzes.read().await;
        Ok(quizzes.clone())
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// A quiz repository whose storage is unreachable.
pub struct UnavailableQuizRepository;

#[async_trait]
impl QuizRepository for UnavailableQuizRepository {
    async fn create(&self, _quiz: Quiz) -> AppResult<Quiz> {
        Err(AppError::DatabaseError("Server selection timeout".to_string()))
    }

    async fn find_all(&self) -> AppResult<Vec<Quiz>> {
        Err(AppError::DatabaseError("Server selection timeout".to_string()))
    }

    async fn ensure_indexes(&self) -> AppResult<()> {
        Ok(())
    }
}

/// Builds an initialised test service over the given `AppState`.
macro_rules! test_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($state))
                .wrap(lingoquest_server::middleware::RequestIdMiddleware)
                .configure(lingoquest_server::handlers::configure),
        )
        .await
    };
}
