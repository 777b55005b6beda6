//! Timesheet use-cases: daily entries and the period view.
//!
//! # Responsibility
//! - Record free-duration entries for a calendar day.
//! - Record at most one entry per (day, period) in the period view.
//! - Summarize hours per day for history and dashboard views.
//!
//! # Invariants
//! - Free-duration entries are kept newest-first.
//! - Period entries are upserted, never duplicated, per (date, period).
//! - Period entries count their period's current duration toward day totals.
//!
//! # See also
//! - `model::timesheet` for hour validation and the period schedule.

use crate::gateway::{GatewayError, TimesheetGateway};
use crate::model::timesheet::{
    default_periods, validate_hours, ActivityType, EntrySpan, Period, PeriodId, TimeEntry,
    TimesheetValidationError,
};
use chrono::{NaiveDate, NaiveTime};
use log::{info, warn};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default number of days shown by the history view.
pub const DEFAULT_HISTORY_DAYS: usize = 5;

/// Errors from timesheet operations.
#[derive(Debug)]
pub enum TimesheetError {
    Validation(TimesheetValidationError),
    PeriodNotFound(PeriodId),
    Gateway(GatewayError),
}

impl Display for TimesheetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::PeriodNotFound(id) => write!(f, "period not found: {id}"),
            Self::Gateway(err) => write!(f, "{err}"),
        }
    }
}

impl Error for TimesheetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Gateway(err) => Some(err),
            Self::PeriodNotFound(_) => None,
        }
    }
}

impl From<TimesheetValidationError> for TimesheetError {
    fn from(value: TimesheetValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<GatewayError> for TimesheetError {
    fn from(value: GatewayError) -> Self {
        Self::Gateway(value)
    }
}

/// Input of the daily "new entry" form.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntryRequest {
    pub date: NaiveDate,
    pub hours: f64,
    pub activity: ActivityType,
    pub description: String,
}

/// Input of the period dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePeriodRequest {
    pub date: NaiveDate,
    pub period_id: PeriodId,
    pub start: NaiveTime,
    pub end: NaiveTime,
    /// `None` only updates the period times.
    pub activity: Option<ActivityType>,
    pub description: String,
}

/// Per-day rollup for history and dashboard.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub total_hours: f64,
    pub activity_count: usize,
}

pub struct TimesheetService<G: TimesheetGateway> {
    entries: Vec<TimeEntry>,
    periods: Vec<Period>,
    gateway: G,
}

impl<G: TimesheetGateway> TimesheetService<G> {
    /// Empty timesheet on the default period schedule.
    pub fn new(gateway: G) -> Self {
        Self::with_entries(gateway, Vec::new())
    }

    pub fn with_entries(gateway: G, entries: Vec<TimeEntry>) -> Self {
        Self {
            entries,
            periods: default_periods(),
            gateway,
        }
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn periods(&self) -> &[Period] {
        &self.periods
    }

    /// Validates, saves and records one free-duration entry.
    pub fn add_entry(&mut self, request: NewEntryRequest) -> Result<&TimeEntry, TimesheetError> {
        let description = request.description.trim();
        let validation = validate_hours(request.hours).and_then(|()| {
            if description.is_empty() {
                Err(TimesheetValidationError::BlankDescription)
            } else {
                Ok(())
            }
        });
        if let Err(err) = validation {
            warn!("event=entry_add module=timesheet status=error error={err}");
            return Err(err.into());
        }

        let entry = TimeEntry::new(
            request.date,
            EntrySpan::Hours(request.hours),
            request.activity,
            description,
        );
        self.gateway.save_entry(&entry)?;

        info!(
            "event=entry_add module=timesheet status=ok date={} activity={}",
            entry.date,
            entry.activity.as_str()
        );
        self.entries.insert(0, entry);
        Ok(&self.entries[0])
    }

    /// All entries recorded on `date`, in stored order.
    pub fn entries_for(&self, date: NaiveDate) -> Vec<&TimeEntry> {
        self.entries.iter().filter(|entry| entry.date == date).collect()
    }

    /// Hours an entry accounts for under the current schedule.
    pub fn entry_hours(&self, entry: &TimeEntry) -> f64 {
        match entry.span {
            EntrySpan::Hours(hours) => hours,
            EntrySpan::Period(period_id) => self
                .period(period_id)
                .map_or(0.0, |period| period.duration_hours()),
        }
    }

    pub fn total_hours_for(&self, date: NaiveDate) -> f64 {
        self.entries_for(date)
            .into_iter()
            .map(|entry| self.entry_hours(entry))
            .sum()
    }

    /// Day rollups, most recent date first, at most `limit` days.
    pub fn history(&self, limit: usize) -> Vec<DaySummary> {
        let mut days: BTreeMap<NaiveDate, DaySummary> = BTreeMap::new();
        for entry in &self.entries {
            let summary = days.entry(entry.date).or_insert(DaySummary {
                date: entry.date,
                total_hours: 0.0,
                activity_count: 0,
            });
            summary.total_hours += self.entry_hours(entry);
            summary.activity_count += 1;
        }
        days.into_values().rev().take(limit).collect()
    }

    pub fn period(&self, period_id: PeriodId) -> Option<&Period> {
        self.periods.iter().find(|period| period.id == period_id)
    }

    pub fn entry_for_period(&self, date: NaiveDate, period_id: PeriodId) -> Option<&TimeEntry> {
        self.entries
            .iter()
            .find(|entry| entry.date == date && entry.period_id() == Some(period_id))
    }

    /// Updates a period's times and optionally upserts its entry.
    ///
    /// Returns the saved entry, or `None` when no activity was given.
    ///
    /// # Errors
    /// - `PeriodNotFound` for an unknown period.
    /// - `Validation` when `end <= start`; nothing is changed.
    pub fn save_period(
        &mut self,
        request: SavePeriodRequest,
    ) -> Result<Option<&TimeEntry>, TimesheetError> {
        let period_index = self
            .periods
            .iter()
            .position(|period| period.id == request.period_id)
            .ok_or(TimesheetError::PeriodNotFound(request.period_id))?;
        let updated = Period::new(request.period_id, request.start, request.end)?;

        let Some(activity) = request.activity else {
            self.periods[period_index] = updated;
            info!(
                "event=period_save module=timesheet status=ok period_id={} entry=false",
                request.period_id
            );
            return Ok(None);
        };

        let description = request.description.trim().to_string();
        let existing = self.entries.iter().position(|entry| {
            entry.date == request.date && entry.period_id() == Some(request.period_id)
        });
        let entry = match existing {
            Some(index) => TimeEntry {
                activity,
                description,
                ..self.entries[index].clone()
            },
            None => TimeEntry::new(
                request.date,
                EntrySpan::Period(request.period_id),
                activity,
                description,
            ),
        };
        self.gateway.save_entry(&entry)?;

        self.periods[period_index] = updated;
        let index = match existing {
            Some(index) => {
                self.entries[index] = entry;
                index
            }
            None => {
                self.entries.push(entry);
                self.entries.len() - 1
            }
        };
        info!(
            "event=period_save module=timesheet status=ok period_id={} entry=true",
            request.period_id
        );
        Ok(Some(&self.entries[index]))
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}
