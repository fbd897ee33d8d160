use std::fmt;

use crate::domain::models::event::SessionForm;
use crate::domain::services::time_range::TimeRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionConflict {
    /// The session's end time is not strictly after its start time.
    EndBeforeStart,
    /// The session overlaps the session at the given (zero-based) index.
    OverlapsWith(usize),
}

impl fmt::Display for SessionConflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionConflict::EndBeforeStart => {
                write!(f, "Session end time must be after start time")
            }
            SessionConflict::OverlapsWith(other) => {
                write!(f, "This session conflicts with Session {}", other + 1)
            }
        }
    }
}

/// Computes the conflict mapping for an ordered sequence of session drafts:
/// one optional conflict per index.
///
/// Sessions missing either timestamp are left unflagged and are never
/// considered as partners. A session whose end does not come after its start
/// is flagged immediately and skips the pairwise scan. Otherwise partners are
/// scanned in ascending index order and the first overlapping one wins; a
/// session reports at most one conflict.
///
/// The whole mapping must be recomputed whenever any session's time changes,
/// since one edit can clear or introduce conflicts on other indexes.
pub fn detect_conflicts(sessions: &[SessionForm]) -> Vec<Option<SessionConflict>> {
    let mut conflicts = vec![None; sessions.len()];

    for (index, session) in sessions.iter().enumerate() {
        let (Some(start), Some(end)) = (session.start_time, session.end_time) else {
            continue;
        };

        if end <= start {
            conflicts[index] = Some(SessionConflict::EndBeforeStart);
            continue;
        }

        let current = TimeRange::new(start, end);
        for (other_index, other) in sessions.iter().enumerate() {
            if other_index == index {
                continue;
            }
            let (Some(other_start), Some(other_end)) = (other.start_time, other.end_time) else {
                continue;
            };
            if current.overlaps(&TimeRange::new(other_start, other_end)) {
                conflicts[index] = Some(SessionConflict::OverlapsWith(other_index));
                break;
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn session(start: Option<&str>, end: Option<&str>) -> SessionForm {
        SessionForm {
            title: "Session".to_string(),
            description: "A session".to_string(),
            start_time: start.map(|s| s.parse::<NaiveDateTime>().unwrap()),
            end_time: end.map(|s| s.parse::<NaiveDateTime>().unwrap()),
            location: "Main Hall".to_string(),
            max_attendees: 100,
        }
    }

    #[test]
    fn overlapping_pair_is_flagged_on_both_sides() {
        let sessions = vec![
            session(Some("2024-11-15T09:00:00"), Some("2024-11-15T11:00:00")),
            session(Some("2024-11-15T10:00:00"), Some("2024-11-15T12:00:00")),
        ];
        let conflicts = detect_conflicts(&sessions);
        assert_eq!(conflicts[0], Some(SessionConflict::OverlapsWith(1)));
        assert_eq!(conflicts[1], Some(SessionConflict::OverlapsWith(0)));
    }

    #[test]
    fn end_before_start_wins_over_overlap_checks() {
        let sessions = vec![
            session(Some("2024-11-15T11:00:00"), Some("2024-11-15T09:00:00")),
            session(Some("2024-11-15T08:00:00"), Some("2024-11-15T12:00:00")),
        ];
        let conflicts = detect_conflicts(&sessions);
        assert_eq!(conflicts[0], Some(SessionConflict::EndBeforeStart));
    }

    #[test]
    fn equal_start_and_end_is_end_before_start() {
        let sessions = vec![session(
            Some("2024-11-15T09:00:00"),
            Some("2024-11-15T09:00:00"),
        )];
        let conflicts = detect_conflicts(&sessions);
        assert_eq!(conflicts[0], Some(SessionConflict::EndBeforeStart));
    }

    #[test]
    fn incomplete_sessions_are_skipped() {
        let sessions = vec![
            session(Some("2024-11-15T09:00:00"), None),
            session(None, None),
            session(Some("2024-11-15T09:30:00"), Some("2024-11-15T10:30:00")),
        ];
        let conflicts = detect_conflicts(&sessions);
        assert_eq!(conflicts, vec![None, None, None]);
    }

    #[test]
    fn first_conflicting_partner_wins() {
        // Index 2 overlaps both 0 and 1; the scan stops at 0.
        let sessions = vec![
            session(Some("2024-11-15T09:00:00"), Some("2024-11-15T12:00:00")),
            session(Some("2024-11-15T10:00:00"), Some("2024-11-15T13:00:00")),
            session(Some("2024-11-15T11:00:00"), Some("2024-11-15T11:30:00")),
        ];
        let conflicts = detect_conflicts(&sessions);
        assert_eq!(conflicts[2], Some(SessionConflict::OverlapsWith(0)));
    }

    #[test]
    fn back_to_back_sessions_do_not_conflict() {
        let sessions = vec![
            session(Some("2024-11-15T09:00:00"), Some("2024-11-15T10:30:00")),
            session(Some("2024-11-15T10:30:00"), Some("2024-11-15T12:00:00")),
        ];
        let conflicts = detect_conflicts(&sessions);
        assert_eq!(conflicts, vec![None, None]);
    }

    #[test]
    fn detector_is_idempotent() {
        let sessions = vec![
            session(Some("2024-11-15T09:00:00"), Some("2024-11-15T11:00:00")),
            session(Some("2024-11-15T10:00:00"), Some("2024-11-15T12:00:00")),
            session(None, Some("2024-11-15T12:00:00")),
        ];
        let first = detect_conflicts(&sessions);
        let second = detect_conflicts(&sessions);
        assert_eq!(first, second);
    }

    #[test]
    fn conflict_messages_match_the_form_copy() {
        assert_eq!(
            SessionConflict::EndBeforeStart.to_string(),
            "Session end time must be after start time"
        );
        assert_eq!(
            SessionConflict::OverlapsWith(1).to_string(),
            "This session conflicts with Session 2"
        );
    }
}
