use std::sync::Arc;

use crate::domain::{models::event::Event, ports::EventRepository};
use crate::error::AppError;
use crate::infra::storage::LocalStore;
use async_trait::async_trait;

const COLLECTION: &str = "academicEvents";

pub struct LocalEventRepo {
    store: Arc<LocalStore>,
}

impl LocalEventRepo {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventRepository for LocalEventRepo {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        self.store.load(COLLECTION)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        Ok(self
            .store
            .load::<Event>(COLLECTION)?
            .into_iter()
            .find(|event| event.id == id))
    }

    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        let event = event.clone();
        self.store
            .update(COLLECTION, move |records: &mut Vec<Event>| {
                records.push(event.clone());
                Ok(event)
            })
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        let event = event.clone();
        self.store
            .update(COLLECTION, move |records: &mut Vec<Event>| {
                match records.iter_mut().find(|record| record.id == event.id) {
                    Some(slot) => {
                        *slot = event.clone();
                        Ok(event)
                    }
                    None => Err(AppError::NotFound("Event not found".into())),
                }
            })
    }
}
