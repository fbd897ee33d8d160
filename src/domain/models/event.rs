use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, sqlx::Type)]
pub enum EventType {
    Conference,
    Workshop,
    Seminar,
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Conference" => Ok(EventType::Conference),
            "Workshop" => Ok(EventType::Workshop),
            "Seminar" => Ok(EventType::Seminar),
            other => Err(format!("Unknown event type '{other}'")),
        }
    }
}

/// An academic gathering with a date span and one or more sessions.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub location: String,
    pub is_virtual: bool,
    pub max_attendees: i32,
    pub registration_deadline: NaiveDate,
    pub status: String,
    #[sqlx(skip)]
    pub sessions: Vec<Session>,
    pub created_at: DateTime<Utc>,
}

/// A timed sub-activity within an event. Times stay optional while the
/// record is being drafted in a form.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub event_id: String,
    pub title: String,
    pub description: String,
    pub start_time: Option<NaiveDateTime>,
    pub end_time: Option<NaiveDateTime>,
    pub location: String,
    pub max_attendees: i32,
}

impl Session {
    pub fn new(event_id: String, form: SessionForm) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            event_id,
            title: form.title,
            description: form.description,
            start_time: form.start_time,
            end_time: form.end_time,
            location: form.location,
            max_attendees: form.max_attendees,
        }
    }
}

/// The add/edit form payload for an event, sessions included.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub event_type: EventType,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub location: String,
    #[serde(default)]
    pub is_virtual: bool,
    pub max_attendees: i32,
    #[serde(default)]
    pub registration_deadline: Option<NaiveDate>,
    #[serde(default)]
    pub sessions: Vec<SessionForm>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionForm {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub start_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    pub location: String,
    pub max_attendees: i32,
}
