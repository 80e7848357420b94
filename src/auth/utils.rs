use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
};

/// Checks that the token holder is the user a resource is being attributed to.
pub fn require_same_user(claims: &Claims, user_id: Option<&str>) -> AppResult<()> {
    match user_id {
        Some(user_id) if user_id == claims.id => Ok(()),
        _ => Err(AppError::Unauthorized(
            "Token does not belong to the given userId".to_string(),
        )),
    }
}
