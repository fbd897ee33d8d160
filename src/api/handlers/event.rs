use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::api::extractors::current_user::CurrentUser;
use crate::domain::models::event::{Event, EventForm, EventType, Session};
use crate::domain::models::reservation::Reservation;
use crate::domain::services::event_validation::sessions_outside_event_span;
use crate::domain::services::form_state::EventFormState;
use crate::error::AppError;
use crate::state::AppState;

/// Runs the submitted form through the same gate the edit form applies
/// before allowing submission: required fields, the aggregated validation
/// outcome, and the session-within-event-span invariant.
fn checked_form(form: EventForm) -> Result<EventForm, AppError> {
    if form.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".into()));
    }
    if form.description.trim().is_empty() {
        return Err(AppError::Validation("Description is required".into()));
    }
    if form.location.trim().is_empty() {
        return Err(AppError::Validation("Location is required".into()));
    }
    if form.max_attendees < 1 {
        return Err(AppError::Validation("Max attendees must be at least 1".into()));
    }

    let state = EventFormState::new(form);
    if !state.can_submit() {
        let message = state
            .outcome()
            .first_error()
            .unwrap_or_else(|| "Please fix the errors before submitting".to_string());
        return Err(AppError::Validation(message));
    }

    if let Some(index) = sessions_outside_event_span(state.form()).first() {
        return Err(AppError::Validation(format!(
            "Session {} is outside the event date range",
            index + 1
        )));
    }

    Ok(state.into_form())
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;

    let events = match params.get("event_type").map(String::as_str) {
        None | Some("All") => events,
        Some(raw) => {
            let wanted: EventType = raw.parse().map_err(AppError::Validation)?;
            events
                .into_iter()
                .filter(|event| event.event_type == wanted)
                .collect()
        }
    };

    Ok(Json(events))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))?;

    Ok(Json(event))
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<EventForm>,
) -> Result<impl IntoResponse, AppError> {
    info!("Creating event: {}", payload.title);

    let form = checked_form(payload)?;

    let start_date = form
        .start_date
        .ok_or(AppError::Validation("Start date is required".into()))?;
    let end_date = form
        .end_date
        .ok_or(AppError::Validation("End date is required".into()))?;
    let registration_deadline = form.registration_deadline.ok_or(AppError::Validation(
        "Registration deadline is required".into(),
    ))?;

    let id = Uuid::new_v4().to_string();
    let sessions = form
        .sessions
        .into_iter()
        .map(|session| Session::new(id.clone(), session))
        .collect();

    let event = Event {
        id,
        title: form.title,
        description: form.description,
        event_type: form.event_type,
        start_date,
        end_date,
        location: form.location,
        is_virtual: form.is_virtual,
        max_attendees: form.max_attendees,
        registration_deadline,
        status: "Upcoming".to_string(),
        sessions,
        created_at: Utc::now(),
    };

    let created = state.event_repo.create(&event).await?;
    Ok(Json(created))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<EventForm>,
) -> Result<impl IntoResponse, AppError> {
    let existing = state
        .event_repo
        .find_by_id(&id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let form = checked_form(payload)?;

    let start_date = form
        .start_date
        .ok_or(AppError::Validation("Start date is required".into()))?;
    let end_date = form
        .end_date
        .ok_or(AppError::Validation("End date is required".into()))?;
    let registration_deadline = form.registration_deadline.ok_or(AppError::Validation(
        "Registration deadline is required".into(),
    ))?;

    let sessions = form
        .sessions
        .into_iter()
        .map(|session| Session::new(existing.id.clone(), session))
        .collect();

    let event = Event {
        id: existing.id.clone(),
        title: form.title,
        description: form.description,
        event_type: form.event_type,
        start_date,
        end_date,
        location: form.location,
        is_virtual: form.is_virtual,
        max_attendees: form.max_attendees,
        registration_deadline,
        status: existing.status.clone(),
        sessions,
        created_at: existing.created_at,
    };

    let updated = state.event_repo.update(&event).await?;
    info!("Event updated: {}", id);
    Ok(Json(updated))
}

pub async fn register_for_session(
    State(state): State<Arc<AppState>>,
    CurrentUser(user): CurrentUser,
    Path((event_id, session_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let event = state
        .event_repo
        .find_by_id(&event_id)
        .await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let session = event
        .sessions
        .iter()
        .find(|session| session.id == session_id)
        .ok_or(AppError::NotFound("Session not found".into()))?;

    if state.reservation_repo.exists(&user.id, &session.id).await? {
        return Err(AppError::DuplicateRegistration(
            "You have already registered for this session.".into(),
        ));
    }

    let reservation = Reservation::new(user.id.clone(), &event, session);
    let created = state.reservation_repo.create(&reservation).await?;

    info!(
        "User {} registered for session {} of event {}",
        user.id, session_id, event_id
    );
    Ok(Json(created))
}
