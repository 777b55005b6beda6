//! Timesheet entry and period model.
//!
//! # Responsibility
//! - Describe how a block of working time was spent.
//! - Define the teaching-period schedule used by the period view.
//!
//! # Invariants
//! - Free-duration entries carry 0.5..=12 hours in half-hour steps.
//! - A period's `end` is strictly after its `start`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

pub type TimeEntryId = Uuid;
pub type PeriodId = u8;

pub const MIN_ENTRY_HOURS: f64 = 0.5;
pub const MAX_ENTRY_HOURS: f64 = 12.0;

/// Kind of work recorded in one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityType {
    Teaching,
    Research,
    Administrative,
    Mentoring,
    Development,
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 6] = [
        ActivityType::Teaching,
        ActivityType::Research,
        ActivityType::Administrative,
        ActivityType::Mentoring,
        ActivityType::Development,
        ActivityType::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Teaching => "teaching",
            Self::Research => "research",
            Self::Administrative => "administrative",
            Self::Mentoring => "mentoring",
            Self::Development => "development",
            Self::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Teaching => "Teaching",
            Self::Research => "Research",
            Self::Administrative => "Administrative",
            Self::Mentoring => "Student Mentoring",
            Self::Development => "Professional Development",
            Self::Other => "Other",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.as_str() == value.trim())
    }
}

/// What an entry covers: a free duration or one scheduled period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySpan {
    Hours(f64),
    Period(PeriodId),
}

/// One recorded block of work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: TimeEntryId,
    pub date: NaiveDate,
    pub span: EntrySpan,
    pub activity: ActivityType,
    pub description: String,
}

impl TimeEntry {
    pub fn new(
        date: NaiveDate,
        span: EntrySpan,
        activity: ActivityType,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            span,
            activity,
            description: description.into(),
        }
    }

    pub fn period_id(&self) -> Option<PeriodId> {
        match self.span {
            EntrySpan::Period(period_id) => Some(period_id),
            EntrySpan::Hours(_) => None,
        }
    }
}

/// Numbered teaching slot with editable times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub id: PeriodId,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl Period {
    /// Builds a period, rejecting empty or reversed windows.
    pub fn new(
        id: PeriodId,
        start: NaiveTime,
        end: NaiveTime,
    ) -> Result<Self, TimesheetValidationError> {
        if end <= start {
            return Err(TimesheetValidationError::InvalidPeriodWindow { id, start, end });
        }
        Ok(Self { id, start, end })
    }

    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_minutes() as f64 / 60.0
    }
}

/// Default eight-period teaching day.
pub fn default_periods() -> Vec<Period> {
    const SCHEDULE: [((u32, u32), (u32, u32)); 8] = [
        ((8, 30), (9, 20)),
        ((9, 20), (10, 10)),
        ((10, 20), (11, 10)),
        ((11, 10), (12, 0)),
        ((12, 50), (13, 40)),
        ((13, 40), (14, 30)),
        ((14, 40), (15, 30)),
        ((15, 30), (16, 20)),
    ];

    SCHEDULE
        .iter()
        .zip(1u8..)
        .filter_map(|(((sh, sm), (eh, em)), id)| {
            let start = NaiveTime::from_hms_opt(*sh, *sm, 0)?;
            let end = NaiveTime::from_hms_opt(*eh, *em, 0)?;
            Some(Period { id, start, end })
        })
        .collect()
}

/// Checks a free-duration hours value.
pub fn validate_hours(hours: f64) -> Result<(), TimesheetValidationError> {
    if !hours.is_finite() || !(MIN_ENTRY_HOURS..=MAX_ENTRY_HOURS).contains(&hours) {
        return Err(TimesheetValidationError::HoursOutOfRange(hours));
    }
    if (hours * 2.0).fract() != 0.0 {
        return Err(TimesheetValidationError::HoursNotHalfStep(hours));
    }
    Ok(())
}

/// Validation failures for timesheet input.
#[derive(Debug, Clone, PartialEq)]
pub enum TimesheetValidationError {
    HoursOutOfRange(f64),
    HoursNotHalfStep(f64),
    BlankDescription,
    InvalidPeriodWindow {
        id: PeriodId,
        start: NaiveTime,
        end: NaiveTime,
    },
}

impl Display for TimesheetValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HoursOutOfRange(hours) => write!(
                f,
                "hours ({hours}) must be between {MIN_ENTRY_HOURS} and {MAX_ENTRY_HOURS}"
            ),
            Self::HoursNotHalfStep(hours) => {
                write!(f, "hours ({hours}) must be a multiple of 0.5")
            }
            Self::BlankDescription => write!(f, "entry description must not be blank"),
            Self::InvalidPeriodWindow { id, start, end } => write!(
                f,
                "period {id} end ({}) must be after start ({})",
                end.format("%H:%M"),
                start.format("%H:%M")
            ),
        }
    }
}

impl Error for TimesheetValidationError {}

#[cfg(test)]
mod tests {
    use super::{default_periods, validate_hours, Period, TimesheetValidationError};
    use chrono::NaiveTime;

    #[test]
    fn default_schedule_has_eight_ordered_periods() {
        let periods = default_periods();
        assert_eq!(periods.len(), 8);
        assert_eq!(periods[0].id, 1);
        assert_eq!(periods[7].id, 8);
        assert_eq!(periods[0].start.format("%H:%M").to_string(), "08:30");
        assert_eq!(periods[7].end.format("%H:%M").to_string(), "16:20");
        assert!(periods.windows(2).all(|pair| pair[0].end <= pair[1].start));
    }

    #[test]
    fn period_duration_is_fifty_minutes() {
        let period = default_periods()[0];
        assert!((period.duration_hours() - 50.0 / 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hours_must_be_half_steps_in_range() {
        assert!(validate_hours(0.5).is_ok());
        assert!(validate_hours(12.0).is_ok());
        assert_eq!(
            validate_hours(0.0),
            Err(TimesheetValidationError::HoursOutOfRange(0.0))
        );
        assert_eq!(
            validate_hours(12.5),
            Err(TimesheetValidationError::HoursOutOfRange(12.5))
        );
        assert_eq!(
            validate_hours(1.25),
            Err(TimesheetValidationError::HoursNotHalfStep(1.25))
        );
        assert!(validate_hours(f64::NAN).is_err());
    }

    #[test]
    fn reversed_period_window_is_rejected() {
        let start = NaiveTime::from_hms_opt(10, 0, 0).expect("valid time");
        let end = NaiveTime::from_hms_opt(9, 0, 0).expect("valid time");
        assert!(matches!(
            Period::new(3, start, end),
            Err(TimesheetValidationError::InvalidPeriodWindow { id: 3, .. })
        ));
    }
}
