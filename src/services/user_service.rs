use std::sync::Arc;

use crate::{
    auth::{hash_password, verify_password, JwtService},
    errors::{AppError, AppResult},
    models::{
        domain::User,
        dto::{
            request::{LoginRequest, RegisterRequest},
            response::{LoginResponse, MessageResponse},
        },
    },
    repositories::UserRepository,
};

pub struct UserService {
    repository: Arc<dyn UserRepository>,
    jwt_service: Arc<JwtService>,
    bcrypt_cost: u32,
}

impl UserService {
    pub fn new(
        repository: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
        bcrypt_cost: u32,
    ) -> Self {
        Self {
            repository,
            jwt_service,
            bcrypt_cost,
        }
    }

    pub async fn register(&self, request: RegisterRequest) -> AppResult<MessageResponse> {
        let password_hash = hash_password(&request.password, self.bcrypt_cost).await?;
        let user = User::new(&request.username, &request.email, password_hash);

        let user = self.repository.create(user).await?;
        log::info!("Registered user '{}'", user.username);

        Ok(MessageResponse::new("User registered successfully"))
    }

    pub async fn login(&self, request: LoginRequest) -> AppResult<LoginResponse> {
        let user = self
            .repository
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        if !verify_password(&request.password, &user.password_hash).await? {
            log::warn!("Rejected login for user '{}': password mismatch", user.username);
            return Err(AppError::Unauthorized("Invalid credentials".to_string()));
        }

        let user_id = user
            .id_hex()
            .ok_or_else(|| AppError::InternalError("Stored user has no id".to_string()))?;
        let token = self.jwt_service.create_token(&user_id)?;
        log::info!("User '{}' logged in", user.username);

        Ok(LoginResponse {
            message: "Login successful".to_string(),
            token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{config::Config, repositories::MockUserRepository};

    fn service_with(repository: MockUserRepository) -> (UserService, Arc<JwtService>) {
        let config = Config::test_config();
        let jwt_service = Arc::new(JwtService::new(
            &config.jwt_secret,
            config.jwt_expiration_hours,
        ));
        let service = UserService::new(
            Arc::new(repository),
            Arc::clone(&jwt_service),
            config.bcrypt_cost,
        );
        (service, jwt_service)
    }

    fn register_request(password: &str) -> RegisterRequest {
        RegisterRequest {
            username: "a".to_string(),
            email: "a@x.com".to_string(),
            password: password.to_string(),
        }
    }

    fn login_request(email: &str, password: &str) -> LoginRequest {
        LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    async fn stored_user(password: &str) -> User {
        let hash = hash_password(password, 4).await.unwrap();
        User::new("a", "a@x.com", hash)
    }

    #[tokio::test]
    async fn test_register_stores_hashed_password() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .withf(|user| {
                user.username == "a"
                    && user.email == "a@x.com"
                    && user.password_hash != "pw"
                    && bcrypt::verify("pw", &user.password_hash).unwrap_or(false)
            })
            .times(1)
            .returning(Ok);

        let (service, _) = service_with(repository);
        let response = service.register(register_request("pw")).await.unwrap();

        assert_eq!(response.message, "User registered successfully");
    }

    #[tokio::test]
    async fn test_register_propagates_duplicate() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_create()
            .returning(|_| Err(AppError::AlreadyExists("duplicate email".to_string())));

        let (service, _) = service_with(repository);
        let result = service.register(register_request("pw")).await;

        assert!(matches!(result, Err(AppError::AlreadyExists(_))));
    }

    #[tokio::test]
    async fn test_login_unknown_email_is_not_found() {
        let mut repository = MockUserRepository::new();
        repository.expect_find_by_email().returning(|_| Ok(None));

        let (service, _) = service_with(repository);
        let result = service.login(login_request("nobody@x.com", "pw")).await;

        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "User not found"),
            _ => panic!("Expected NotFound error"),
        }
    }

    #[tokio::test]
    async fn test_login_wrong_password_is_unauthorized() {
        let user = stored_user("pw").await;
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let (service, _) = service_with(repository);
        let result = service.login(login_request("a@x.com", "wrong")).await;

        match result {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Invalid credentials"),
            _ => panic!("Expected Unauthorized error"),
        }
    }

    #[tokio::test]
    async fn test_login_issues_token_for_user_id() {
        let user = stored_user("pw").await;
        let user_id = user.id_hex().unwrap();
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_email()
            .withf(|email| email.to_string() == "a@x.com")
            .returning(move |_| Ok(Some(user.clone())));

        let (service, jwt_service) = service_with(repository);
        let response = service.login(login_request("a@x.com", "pw")).await.unwrap();

        assert_eq!(response.message, "Login successful");
        let claims = jwt_service.validate_token(&response.token).unwrap();
        assert_eq!(claims.id, user_id);
    }

    #[tokio::test]
    async fn test_login_propagates_database_error() {
        let mut repository = MockUserRepository::new();
        repository
            .expect_find_by_email()
            .returning(|_| Err(AppError::DatabaseError("server selection timeout".to_string())));

        let (service, _) = service_with(repository);
        let result = service.login(login_request("a@x.com", "pw")).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }
}
