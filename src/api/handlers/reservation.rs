use std::sync::Arc;

use axum::{Json, extract::State, response::IntoResponse};

use crate::api::extractors::current_user::CurrentUser;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_reservations(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
) -> Result<impl IntoResponse, AppError> {
    let reservations = state.reservation_repo.list_by_user(&user.id).await?;
    Ok(Json(reservations))
}
