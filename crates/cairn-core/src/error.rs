use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by snapshot loading and lookup.
///
/// The engine's own computations are total functions; everything that can
/// fail lives at the data-loading boundary. Each variant carries a stable
/// machine-readable code for agent-friendly decision making, plus an
/// optional remediation hint.
#[derive(Debug, Error)]
pub enum CairnError {
    #[error("snapshot not found at {}", .path.display())]
    SnapshotNotFound { path: PathBuf },

    #[error("failed to read snapshot {}", .path.display())]
    SnapshotRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("snapshot parse error: {0}")]
    SnapshotParse(#[from] toml::de::Error),

    #[error("milestone not found: {id}")]
    MilestoneNotFound { id: String },

    #[error("user not found: {id}")]
    UserNotFound { id: String },
}

impl CairnError {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::SnapshotNotFound { .. } => "E1001",
            Self::SnapshotRead { .. } => "E1002",
            Self::SnapshotParse(_) => "E1003",
            Self::MilestoneNotFound { .. } => "E2001",
            Self::UserNotFound { .. } => "E2002",
        }
    }

    /// Optional remediation hint that can be surfaced to operators and agents.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::SnapshotNotFound { .. } => {
                Some("Point --snapshot (or .cairn/config.toml) at a snapshot file.")
            }
            Self::SnapshotRead { .. } => Some("Check file permissions and retry."),
            Self::SnapshotParse(_) => Some("Fix the TOML syntax in the snapshot file and retry."),
            Self::MilestoneNotFound { .. } => Some("List milestones in the snapshot file for valid IDs."),
            Self::UserNotFound { .. } => Some("Use an ID from the snapshot's [[users]] entries."),
        }
    }
}
