use crate::domain::{models::reservation::Reservation, ports::ReservationRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteReservationRepo {
    pool: SqlitePool,
}

impl SqliteReservationRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReservationRepository for SqliteReservationRepo {
    async fn create(&self, reservation: &Reservation) -> Result<Reservation, AppError> {
        sqlx::query_as::<_, Reservation>(
            r#"INSERT INTO reservations (
                id, user_id, event_id, session_id,
                event_title, event_description, event_type, event_start_date, event_end_date, event_location,
                session_title, session_description, session_start_time, session_end_time, session_location,
                created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&reservation.id)
        .bind(&reservation.user_id)
        .bind(&reservation.event_id)
        .bind(&reservation.session_id)
        .bind(&reservation.event_title)
        .bind(&reservation.event_description)
        .bind(reservation.event_type)
        .bind(reservation.event_start_date)
        .bind(reservation.event_end_date)
        .bind(&reservation.event_location)
        .bind(&reservation.session_title)
        .bind(&reservation.session_description)
        .bind(reservation.session_start_time)
        .bind(reservation.session_end_time)
        .bind(&reservation.session_location)
        .bind(reservation.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<Reservation>, AppError> {
        sqlx::query_as::<_, Reservation>(
            "SELECT * FROM reservations WHERE user_id = ? ORDER BY created_at ASC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }

    async fn exists(&self, user_id: &str, session_id: &str) -> Result<bool, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM reservations WHERE user_id = ? AND session_id = ?",
        )
        .bind(user_id)
        .bind(session_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(count > 0)
    }
}
