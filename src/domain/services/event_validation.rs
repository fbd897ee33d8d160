use crate::domain::models::event::EventForm;
use crate::domain::services::session_conflicts::{SessionConflict, detect_conflicts};
use crate::domain::services::time_range::TimeRange;

pub const DATES_ERROR: &str = "Event end date must be on or after start date";
pub const REGISTRATION_ERROR: &str = "Registration deadline must be on or before event start date";

/// The aggregated result of validating an event form: three independent
/// error categories, any of which blocks submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationOutcome {
    pub dates: Option<String>,
    pub registration: Option<String>,
    pub session_conflicts: Vec<Option<SessionConflict>>,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.dates.is_none()
            && self.registration.is_none()
            && self.session_conflicts.iter().all(Option::is_none)
    }

    /// The first error in display order, for surfacing a single message.
    pub fn first_error(&self) -> Option<String> {
        if let Some(msg) = &self.dates {
            return Some(msg.clone());
        }
        if let Some(msg) = &self.registration {
            return Some(msg.clone());
        }
        self.session_conflicts
            .iter()
            .enumerate()
            .find_map(|(index, conflict)| {
                conflict
                    .as_ref()
                    .map(|c| format!("Session {}: {}", index + 1, c))
            })
    }
}

/// Recomputes the full validation outcome from the current form snapshot.
/// Checks only fire once their inputs are filled in, so a half-completed
/// draft is not peppered with errors.
pub fn validate_event_form(form: &EventForm) -> ValidationOutcome {
    let mut outcome = ValidationOutcome {
        session_conflicts: detect_conflicts(&form.sessions),
        ..Default::default()
    };

    if let (Some(start), Some(end)) = (form.start_date, form.end_date)
        && start > end
    {
        outcome.dates = Some(DATES_ERROR.to_string());
    }

    if let (Some(deadline), Some(start)) = (form.registration_deadline, form.start_date)
        && deadline > start
    {
        outcome.registration = Some(REGISTRATION_ERROR.to_string());
    }

    outcome
}

/// Indexes of sessions with a timestamp outside the event's day-expanded
/// span. Sessions and events with missing fields are not judged here.
pub fn sessions_outside_event_span(form: &EventForm) -> Vec<usize> {
    let (Some(start_date), Some(end_date)) = (form.start_date, form.end_date) else {
        return Vec::new();
    };
    let bound = TimeRange::event_bound(start_date, end_date);

    form.sessions
        .iter()
        .enumerate()
        .filter(|(_, session)| {
            session.start_time.is_some_and(|t| !bound.contains(t))
                || session.end_time.is_some_and(|t| !bound.contains(t))
        })
        .map(|(index, _)| index)
        .collect()
}
