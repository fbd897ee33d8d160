use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};
use tracing::info;

use crate::api::dtos::requests::CreateUserRequest;
use crate::api::extractors::current_user::CurrentUser;
use crate::domain::models::user::User;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Email is required".into()));
    }

    let user = User::new(payload.name, payload.email);
    let created = state.user_repo.create(&user).await?;
    info!("User created: {}", created.id);
    Ok(Json(created))
}

pub async fn current_user(CurrentUser(user): CurrentUser) -> impl IntoResponse {
    Json(user)
}
