use std::collections::HashMap;

use crate::domain::{
    models::event::{Event, Session},
    ports::EventRepository,
};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

const SESSION_COLUMNS: &str =
    "id, event_id, title, description, start_time, end_time, location, max_attendees";

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn load_sessions(&self, event_id: &str) -> Result<Vec<Session>, AppError> {
        sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM event_sessions WHERE event_id = ? ORDER BY position ASC"
        ))
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}

async fn replace_sessions(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    event_id: &str,
    sessions: &[Session],
) -> Result<(), AppError> {
    sqlx::query("DELETE FROM event_sessions WHERE event_id = ?")
        .bind(event_id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;

    for (position, session) in sessions.iter().enumerate() {
        sqlx::query(
            r#"INSERT INTO event_sessions (id, event_id, position, title, description, start_time, end_time, location, max_attendees)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)"#
        )
            .bind(&session.id)
            .bind(event_id)
            .bind(position as i64)
            .bind(&session.title)
            .bind(&session.description)
            .bind(session.start_time)
            .bind(session.end_time)
            .bind(&session.location)
            .bind(session.max_attendees)
            .execute(&mut **tx)
            .await
            .map_err(AppError::Database)?;
    }
    Ok(())
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn list(&self) -> Result<Vec<Event>, AppError> {
        let mut events = sqlx::query_as::<_, Event>(
            "SELECT * FROM academic_events ORDER BY start_date ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let sessions = sqlx::query_as::<_, Session>(&format!(
            "SELECT {SESSION_COLUMNS} FROM event_sessions ORDER BY event_id ASC, position ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let mut by_event: HashMap<String, Vec<Session>> = HashMap::new();
        for session in sessions {
            by_event
                .entry(session.event_id.clone())
                .or_default()
                .push(session);
        }
        for event in &mut events {
            event.sessions = by_event.remove(&event.id).unwrap_or_default();
        }
        Ok(events)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Event>, AppError> {
        let event = sqlx::query_as::<_, Event>("SELECT * FROM academic_events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match event {
            Some(mut event) => {
                event.sessions = self.load_sessions(&event.id).await?;
                Ok(Some(event))
            }
            None => Ok(None),
        }
    }

    async fn create(&self, event: &Event) -> Result<Event, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let mut created = sqlx::query_as::<_, Event>(
            r#"INSERT INTO academic_events (
                id, title, description, event_type, start_date, end_date,
                location, is_virtual, max_attendees, registration_deadline, status, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *"#,
        )
        .bind(&event.id)
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_type)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(&event.location)
        .bind(event.is_virtual)
        .bind(event.max_attendees)
        .bind(event.registration_deadline)
        .bind(&event.status)
        .bind(event.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        replace_sessions(&mut tx, &event.id, &event.sessions).await?;
        tx.commit().await.map_err(AppError::Database)?;

        created.sessions = event.sessions.clone();
        Ok(created)
    }

    async fn update(&self, event: &Event) -> Result<Event, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let updated = sqlx::query_as::<_, Event>(
            r#"UPDATE academic_events SET
                title=?, description=?, event_type=?, start_date=?, end_date=?,
                location=?, is_virtual=?, max_attendees=?, registration_deadline=?, status=?
               WHERE id=? RETURNING *"#,
        )
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.event_type)
        .bind(event.start_date)
        .bind(event.end_date)
        .bind(&event.location)
        .bind(event.is_virtual)
        .bind(event.max_attendees)
        .bind(event.registration_deadline)
        .bind(&event.status)
        .bind(&event.id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        let Some(mut updated) = updated else {
            return Err(AppError::NotFound("Event not found".into()));
        };

        replace_sessions(&mut tx, &event.id, &event.sessions).await?;
        tx.commit().await.map_err(AppError::Database)?;

        updated.sessions = event.sessions.clone();
        Ok(updated)
    }
}
