//! Review-queue filtering by submission status.

use crate::aggregate::AggregateError;
use crate::model::submission::{AppraisalSubmission, SubmissionStatus};
use std::str::FromStr;

/// Selection key for the review queue tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionFilter {
    All,
    Status(SubmissionStatus),
}

impl SubmissionFilter {
    pub fn matches(&self, submission: &AppraisalSubmission) -> bool {
        match self {
            Self::All => true,
            Self::Status(status) => submission.status == *status,
        }
    }
}

impl FromStr for SubmissionFilter {
    type Err = AggregateError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "all" => Ok(Self::All),
            other => SubmissionStatus::parse(other)
                .map(Self::Status)
                .ok_or_else(|| AggregateError::UnknownSubmissionFilter(other.to_string())),
        }
    }
}

/// Returns the submissions matching `filter`, in source order.
pub fn filter_submissions<'a>(
    submissions: impl IntoIterator<Item = &'a AppraisalSubmission>,
    filter: &SubmissionFilter,
) -> Vec<&'a AppraisalSubmission> {
    submissions
        .into_iter()
        .filter(|submission| filter.matches(submission))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::SubmissionFilter;
    use crate::model::submission::SubmissionStatus;

    #[test]
    fn parses_queue_tabs() {
        assert_eq!("all".parse::<SubmissionFilter>(), Ok(SubmissionFilter::All));
        assert_eq!(
            "approved".parse::<SubmissionFilter>(),
            Ok(SubmissionFilter::Status(SubmissionStatus::Approved))
        );
        assert!("draft".parse::<SubmissionFilter>().is_err());
    }
}
