use chrono::{NaiveDate, NaiveDateTime};

/// A half-open-ish local time interval. Overlap semantics follow the edit
/// form's original rule set: inclusive at the start, exclusive at the end,
/// so back-to-back ranges sharing a single instant do not overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeRange {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// True iff this range lies entirely inside `bound` (both endpoints
    /// inclusive).
    pub fn is_within(&self, bound: &TimeRange) -> bool {
        self.start >= bound.start && self.end <= bound.end
    }

    /// The three-clause test covers partial overlap at either boundary and
    /// full containment either way.
    pub fn overlaps(&self, other: &TimeRange) -> bool {
        (self.start >= other.start && self.start < other.end)
            || (self.end > other.start && self.end <= other.end)
            || (self.start <= other.start && self.end >= other.end)
    }

    /// The containment bound for sessions of an event spanning
    /// `start_date..=end_date`: midnight on the first day through 23:59:59
    /// on the last.
    pub fn event_bound(start_date: NaiveDate, end_date: NaiveDate) -> TimeRange {
        TimeRange {
            start: start_date.and_hms_opt(0, 0, 0).unwrap(),
            end: end_date.and_hms_opt(23, 59, 59).unwrap(),
        }
    }

    /// Whether a single timestamp falls inside this range (inclusive).
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant <= self.end
    }
}
