use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::domain::models::event::{Event, EventType, Session};

/// A user's registration for one session. Carries a snapshot of the event
/// and session as they looked at registration time, so the reservations
/// page stays readable even after the event is edited.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub session_id: String,
    pub event_title: String,
    pub event_description: String,
    pub event_type: EventType,
    pub event_start_date: NaiveDate,
    pub event_end_date: NaiveDate,
    pub event_location: String,
    pub session_title: String,
    pub session_description: String,
    pub session_start_time: Option<NaiveDateTime>,
    pub session_end_time: Option<NaiveDateTime>,
    pub session_location: String,
    pub created_at: DateTime<Utc>,
}

impl Reservation {
    pub fn new(user_id: String, event: &Event, session: &Session) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id,
            event_id: event.id.clone(),
            session_id: session.id.clone(),
            event_title: event.title.clone(),
            event_description: event.description.clone(),
            event_type: event.event_type,
            event_start_date: event.start_date,
            event_end_date: event.end_date,
            event_location: event.location.clone(),
            session_title: session.title.clone(),
            session_description: session.description.clone(),
            session_start_time: session.start_time,
            session_end_time: session.end_time,
            session_location: session.location.clone(),
            created_at: Utc::now(),
        }
    }
}
