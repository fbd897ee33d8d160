use std::sync::Arc;

use crate::domain::{models::job::Job, ports::JobRepository};
use crate::error::AppError;
use crate::infra::storage::LocalStore;
use async_trait::async_trait;

const COLLECTION: &str = "jobs";

pub struct LocalJobRepo {
    store: Arc<LocalStore>,
}

impl LocalJobRepo {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl JobRepository for LocalJobRepo {
    async fn list(&self) -> Result<Vec<Job>, AppError> {
        self.store.load(COLLECTION)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Job>, AppError> {
        Ok(self
            .store
            .load::<Job>(COLLECTION)?
            .into_iter()
            .find(|job| job.id == id))
    }

    async fn create(&self, job: &Job) -> Result<Job, AppError> {
        let job = job.clone();
        self.store.update(COLLECTION, move |records: &mut Vec<Job>| {
            records.push(job.clone());
            Ok(job)
        })
    }
}
