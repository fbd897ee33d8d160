use std::sync::Arc;

use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::error::AppError;
use crate::infra::storage::LocalStore;
use async_trait::async_trait;

const COLLECTION: &str = "academicEventReservations";

pub struct LocalReservationRepo {
    store: Arc<LocalStore>,
}

impl LocalReservationRepo {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ReservationRepository for LocalReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        let reservation = reservation.clone();
        self.store
            .update(COLLECTION, move |records: &mut Vec<Reservation>| {
                // Same backstop as the database unique constraint.
                if records.iter().any(|r| {
                    r.user_id == reservation.user_id && r.session_id == reservation.session_id
                }) {
                    return Err(AppError::DuplicateRegistration(
                        "You have already registered for this session.".into(),
                    ));
                }
                records.push(reservation.clone());
                Ok(reservation)
            })
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, AppError> {
        Ok(self
            .store
            .load::<Reservation>(COLLECTION)?
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    async fn exists(&self, user_id: &str, session_id: &str) -> Result<bool, AppError> {
        Ok(self
            .store
            .load::<Reservation>(COLLECTION)?
            .iter()
            .any(|r| r.user_id == user_id && r.session_id == session_id))
    }
}
