use std::sync::Arc;

use crate::config::Config;
use crate::domain::ports::{EventRepository, JobRepository, ReservationRepository, UserRepository};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub event_repo: Arc<dyn EventRepository>,
    pub reservation_repo: Arc<dyn ReservationRepository>,
    pub job_repo: Arc<dyn JobRepository>,
    pub user_repo: Arc<dyn UserRepository>,
}
