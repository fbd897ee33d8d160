use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::dtos::requests::CreateJobRequest;
use crate::domain::models::job::Job;
use crate::error::AppError;
use crate::state::AppState;

pub async fn create_job(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateJobRequest>,
) -> Result<impl IntoResponse, AppError> {
    let required = [
        (&payload.title, "Title is required"),
        (&payload.company, "Company is required"),
        (&payload.description, "Description is required"),
        (&payload.full_description, "Full description is required"),
        (&payload.salary, "Salary is required"),
    ];
    for (value, message) in required {
        if value.trim().is_empty() {
            return Err(AppError::Validation(message.into()));
        }
    }

    let job = Job {
        id: Uuid::new_v4().to_string(),
        title: payload.title,
        company: payload.company,
        description: payload.description,
        full_description: payload.full_description,
        salary: payload.salary,
        work_mode: payload.work_mode,
        job_type: payload.job_type,
        posted_ago: "Just now".to_string(),
        created_at: Utc::now(),
    };

    let created = state.job_repo.create(&job).await?;
    info!("Job added: {}", created.id);
    Ok(Json(created))
}

pub async fn list_jobs(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let jobs = state.job_repo.list().await?;
    Ok(Json(jobs))
}

pub async fn get_job(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let job = state
        .job_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job '{}' not found", id)))?;

    Ok(Json(job))
}
