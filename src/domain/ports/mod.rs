use crate::domain::models::{event::Event, job::Job, reservation::Reservation, user::User};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError>;
    async fn create(&self, event: &Event) -> Result<Event, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
}

#[async_trait]
pub trait ReservationRepository: Send + Sync {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, AppError>;
    async fn exists(&self, user_id: &str, session_id: &str) -> Result<bool, AppError>;
}

#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Job>, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Job>, AppError>;
    async fn create(&self, job: &Job) -> Result<Job, AppError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: &User) -> Result<User, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;
}
