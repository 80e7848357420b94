use std::env;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEV_JWT_SECRET: &str = "dev_secret_key_change_in_production";
const MIN_JWT_SECRET_LEN: usize = 32;
const MIN_PRODUCTION_BCRYPT_COST: u32 = 10;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub users_collection: String,
    pub quizzes_collection: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub bcrypt_cost: u32,
    pub require_auth_for_quizzes: bool,
    pub app_env: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://127.0.0.1:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME").unwrap_or_else(|_| "lingoquest".to_string()),
            users_collection: env::var("USERS_COLLECTION").unwrap_or_else(|_| "users".to_string()),
            quizzes_collection: env::var("QUIZZES_COLLECTION")
                .unwrap_or_else(|_| "quizzes".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "127.0.0.1".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            jwt_secret: SecretString::from(
                env::var("JWT_SECRET").unwrap_or_else(|_| DEV_JWT_SECRET.to_string()),
            ),
            jwt_expiration_hours: env::var("JWT_EXPIRATION_HOURS")
                .ok()
                .and_then(|h| h.parse().ok())
                .unwrap_or(1),
            bcrypt_cost: env::var("BCRYPT_COST")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_BCRYPT_COST),
            require_auth_for_quizzes: env::var("REQUIRE_AUTH_FOR_QUIZZES")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(false),
            app_env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.app_env.eq_ignore_ascii_case("production")
    }

    /// Rejects settings that are only acceptable on a developer machine.
    pub fn validate_for_production(&self) -> AppResult<()> {
        let jwt_secret = self.jwt_secret.expose_secret();

        if jwt_secret == DEV_JWT_SECRET {
            return Err(AppError::InternalError(
                "JWT_SECRET is using the default value; set it to a secure random string"
                    .to_string(),
            ));
        }

        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::InternalError(format!(
                "JWT_SECRET is too short ({}). Must be at least {} characters",
                jwt_secret.len(),
                MIN_JWT_SECRET_LEN
            )));
        }

        if self.bcrypt_cost < MIN_PRODUCTION_BCRYPT_COST {
            return Err(AppError::InternalError(format!(
                "BCRYPT_COST {} is below the minimum of {}",
                self.bcrypt_cost, MIN_PRODUCTION_BCRYPT_COST
            )));
        }

        Ok(())
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_server_host.clone(), self.web_server_port)
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "lingoquest-test".to_string(),
            users_collection: "users".to_string(),
            quizzes_collection: "quizzes".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 5000,
            jwt_secret: SecretString::from("test_jwt_secret_key".to_string()),
            jwt_expiration_hours: 1,
            // minimum bcrypt cost keeps the hashing tests fast
            bcrypt_cost: 4,
            require_auth_for_quizzes: false,
            app_env: "test".to_string(),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
