//! Shared filtering and aggregation over in-memory record lists.
//!
//! # Responsibility
//! - Be the single place where task and submission lists are filtered.
//! - Produce counts for summary tiles and progress bars.
//!
//! # Invariants
//! - Aggregation never reorders its input.
//! - Aggregation never fails on empty input.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod submissions;
pub mod tasks;

/// Filter-key parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    UnknownTaskFilter(String),
    UnknownSubmissionFilter(String),
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownTaskFilter(value) => write!(
                f,
                "unknown task filter `{value}`; expected all|completed|pending|<category>"
            ),
            Self::UnknownSubmissionFilter(value) => write!(
                f,
                "unknown submission filter `{value}`; expected all|pending|approved|rejected"
            ),
        }
    }
}

impl Error for AggregateError {}
