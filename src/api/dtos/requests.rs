use serde::Deserialize;

use crate::domain::models::job::{JobType, WorkMode};

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
    pub full_description: String,
    pub salary: String,
    pub work_mode: WorkMode,
    #[serde(rename = "type")]
    pub job_type: JobType,
}

#[derive(Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}
