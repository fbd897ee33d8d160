use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::models::event::{EventForm, SessionForm};
use crate::domain::services::event_validation::{ValidationOutcome, validate_event_form};
use crate::domain::services::time_range::TimeRange;

/// An event form snapshot paired with its validation outcome.
///
/// This replaces the original form's framework-bound field watching with an
/// explicit contract: every setter applies the change and synchronously
/// recomputes the whole outcome, since a change to one field (say, a session
/// start time) can alter the conflict status of other sessions.
#[derive(Debug, Clone)]
pub struct EventFormState {
    form: EventForm,
    outcome: ValidationOutcome,
}

impl EventFormState {
    pub fn new(form: EventForm) -> Self {
        let outcome = validate_event_form(&form);
        Self { form, outcome }
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    pub fn into_form(self) -> EventForm {
        self.form
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    pub fn can_submit(&self) -> bool {
        self.outcome.is_valid()
    }

    pub fn set_start_date(&mut self, date: Option<NaiveDate>) {
        self.form.start_date = date;
        self.revalidate();
    }

    pub fn set_end_date(&mut self, date: Option<NaiveDate>) {
        self.form.end_date = date;
        self.revalidate();
    }

    pub fn set_registration_deadline(&mut self, date: Option<NaiveDate>) {
        self.form.registration_deadline = date;
        self.revalidate();
    }

    /// Sets a session's start time. A value outside the event span is
    /// dropped (the form clears the input rather than accept it), and an
    /// end time now earlier than the new start is cleared.
    pub fn set_session_start(&mut self, index: usize, time: Option<NaiveDateTime>) {
        let time = time.filter(|t| self.within_event_span(*t));
        if let Some(session) = self.form.sessions.get_mut(index) {
            if let (Some(start), Some(end)) = (time, session.end_time)
                && start > end
            {
                session.end_time = None;
            }
            session.start_time = time;
        }
        self.revalidate();
    }

    /// Sets a session's end time, dropping values outside the event span.
    pub fn set_session_end(&mut self, index: usize, time: Option<NaiveDateTime>) {
        let time = time.filter(|t| self.within_event_span(*t));
        if let Some(session) = self.form.sessions.get_mut(index) {
            session.end_time = time;
        }
        self.revalidate();
    }

    /// Appends a blank session draft inheriting the event's location and
    /// capacity, as the form's "Add Session" action does.
    pub fn add_session(&mut self) {
        self.form.sessions.push(SessionForm {
            title: String::new(),
            description: String::new(),
            start_time: None,
            end_time: None,
            location: self.form.location.clone(),
            max_attendees: self.form.max_attendees,
        });
        self.revalidate();
    }

    /// Removes a session draft. The first session cannot be removed.
    pub fn remove_session(&mut self, index: usize) {
        if index > 0 && index < self.form.sessions.len() {
            self.form.sessions.remove(index);
            self.revalidate();
        }
    }

    fn within_event_span(&self, instant: NaiveDateTime) -> bool {
        match (self.form.start_date, self.form.end_date) {
            (Some(start), Some(end)) => TimeRange::event_bound(start, end).contains(instant),
            _ => true,
        }
    }

    fn revalidate(&mut self) {
        self.outcome = validate_event_form(&self.form);
    }
}
