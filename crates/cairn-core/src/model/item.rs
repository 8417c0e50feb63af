use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// The two kinds of work item a milestone aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Issue,
    MergeRequest,
}

impl Kind {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Issue => "issue",
            Self::MergeRequest => "merge_request",
        }
    }
}

/// The two lifecycle states the engine reads at query time.
///
/// Lifecycle transitions themselves (who may close what, reopen rules) belong
/// to the upstream tracker; the engine only observes the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Open,
    Closed,
}

impl State {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }

    /// Returns `true` for closed items.
    #[must_use]
    pub const fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl Default for State {
    fn default() -> Self {
        Self::Open
    }
}

/// An issue associated with a milestone.
///
/// Issues are the only work items that can be confidential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Issue {
    pub id: String,
    pub title: String,
    pub project: String,
    pub milestone: String,
    pub state: State,
    pub confidential: bool,
    pub author: String,
    pub assignees: Vec<String>,
}

impl Default for Issue {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            project: String::new(),
            milestone: String::new(),
            state: State::Open,
            confidential: false,
            author: String::new(),
            assignees: Vec::new(),
        }
    }
}

/// A merge request associated with a milestone. Never confidential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeRequest {
    pub id: String,
    pub title: String,
    pub project: String,
    pub milestone: String,
    pub state: State,
    pub author: String,
    pub assignees: Vec<String>,
}

impl Default for MergeRequest {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            project: String::new(),
            milestone: String::new(),
            state: State::Open,
            author: String::new(),
            assignees: Vec::new(),
        }
    }
}

/// A work item as the aggregation engine sees it.
///
/// Uniform accessors let the visibility resolver and the counting fold treat
/// issues and merge requests alike; confidentiality is the one asymmetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WorkItem {
    Issue(Issue),
    MergeRequest(MergeRequest),
}

impl WorkItem {
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Issue(issue) => &issue.id,
            Self::MergeRequest(mr) => &mr.id,
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Issue(issue) => &issue.title,
            Self::MergeRequest(mr) => &mr.title,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Issue(_) => Kind::Issue,
            Self::MergeRequest(_) => Kind::MergeRequest,
        }
    }

    #[must_use]
    pub const fn state(&self) -> State {
        match self {
            Self::Issue(issue) => issue.state,
            Self::MergeRequest(mr) => mr.state,
        }
    }

    /// Merge requests are never confidential.
    #[must_use]
    pub const fn confidential(&self) -> bool {
        match self {
            Self::Issue(issue) => issue.confidential,
            Self::MergeRequest(_) => false,
        }
    }

    #[must_use]
    pub fn author(&self) -> &str {
        match self {
            Self::Issue(issue) => &issue.author,
            Self::MergeRequest(mr) => &mr.author,
        }
    }

    #[must_use]
    pub fn assignees(&self) -> &[String] {
        match self {
            Self::Issue(issue) => &issue.assignees,
            Self::MergeRequest(mr) => &mr.assignees,
        }
    }

    #[must_use]
    pub fn project(&self) -> &str {
        match self {
            Self::Issue(issue) => &issue.project,
            Self::MergeRequest(mr) => &mr.project,
        }
    }
}

/// Error returned when parsing an enum value from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub expected: &'static str,
    pub got: String,
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: '{}'", self.expected, self.got)
    }
}

impl std::error::Error for ParseEnumError {}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

impl FromStr for Kind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "issue" => Ok(Self::Issue),
            "merge_request" | "mr" => Ok(Self::MergeRequest),
            _ => Err(ParseEnumError {
                expected: "kind",
                got: s.to_string(),
            }),
        }
    }
}

impl FromStr for State {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = normalize(s);
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            _ => Err(ParseEnumError {
                expected: "state",
                got: s.to_string(),
            }),
        }
    }
}
