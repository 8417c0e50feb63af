use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A time-boxed grouping of issues and merge requests.
///
/// Dates are optional and deliberately unvalidated: an inverted pair
/// (`start_date > due_date`) is tolerated, and the schedule calculator
/// degrades every absent or nonsensical case to zero days rather than
/// rejecting the milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Milestone {
    pub id: String,
    pub project: String,
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
}

impl Default for Milestone {
    fn default() -> Self {
        Self {
            id: String::new(),
            project: String::new(),
            title: String::new(),
            start_date: None,
            due_date: None,
        }
    }
}
