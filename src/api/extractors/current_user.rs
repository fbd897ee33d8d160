use std::sync::Arc;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;

const USER_HEADER: &str = "x-user-id";

/// Resolves the signed-in user from the `X-User-Id` header. Requests
/// without a resolvable user are rejected as not authenticated.
pub struct CurrentUser(pub User);

impl FromRequestParts<Arc<AppState>> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::NotAuthenticated)?;

        let user = state
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or(AppError::NotAuthenticated)?;

        Ok(CurrentUser(user))
    }
}
