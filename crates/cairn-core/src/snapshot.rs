//! TOML snapshot of a project's milestone state.
//!
//! The reference implementation of the engine's collaborator traits: one
//! file describing a project, its users and memberships, and the work items
//! hanging off each milestone. Hosts with a real tracker implement
//! [`ItemSource`]/[`MembershipResolver`] against their own storage instead;
//! the snapshot exists so the CLI and tests can run the engine against
//! plain files.
//!
//! Item and membership entries may omit their `project` field; it defaults
//! to the snapshot's project on load.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CairnError;
use crate::model::{AccessLevel, Issue, MergeRequest, Milestone, Viewer};
use crate::source::{ItemSource, MembershipResolver};

/// The project a snapshot describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub id: String,
    pub name: String,
}

impl Default for ProjectInfo {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
        }
    }
}

/// A known user and their global admin flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    pub id: String,
    #[serde(default)]
    pub admin: bool,
}

/// One user's role in one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    pub user: String,
    #[serde(default)]
    pub project: String,
    pub level: AccessLevel,
}

/// A fully-resolved project snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub project: ProjectInfo,
    #[serde(default)]
    pub users: Vec<UserEntry>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub issues: Vec<Issue>,
    #[serde(default)]
    pub merge_requests: Vec<MergeRequest>,
}

impl Snapshot {
    /// Parse a snapshot from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CairnError::SnapshotParse`] on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, CairnError> {
        let mut snapshot: Self = toml::from_str(text)?;
        snapshot.fill_default_project();
        debug!(
            project = %snapshot.project.id,
            milestones = snapshot.milestones.len(),
            issues = snapshot.issues.len(),
            merge_requests = snapshot.merge_requests.len(),
            "snapshot parsed"
        );
        Ok(snapshot)
    }

    /// Load a snapshot from a file.
    ///
    /// # Errors
    ///
    /// Returns [`CairnError::SnapshotNotFound`] when the file does not
    /// exist, [`CairnError::SnapshotRead`] on I/O failure, and
    /// [`CairnError::SnapshotParse`] on malformed TOML.
    pub fn load(path: &Path) -> Result<Self, CairnError> {
        if !path.exists() {
            return Err(CairnError::SnapshotNotFound {
                path: path.to_path_buf(),
            });
        }
        let text = std::fs::read_to_string(path).map_err(|source| CairnError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Look up a milestone by ID.
    ///
    /// # Errors
    ///
    /// Returns [`CairnError::MilestoneNotFound`] for unknown IDs.
    pub fn milestone(&self, id: &str) -> Result<&Milestone, CairnError> {
        self.milestones
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| CairnError::MilestoneNotFound { id: id.to_string() })
    }

    /// Resolve a user ID to a [`Viewer`] with its admin flag.
    ///
    /// # Errors
    ///
    /// Returns [`CairnError::UserNotFound`] for IDs absent from `[[users]]`.
    pub fn viewer(&self, id: &str) -> Result<Viewer, CairnError> {
        self.users
            .iter()
            .find(|u| u.id == id)
            .map(|u| Viewer {
                id: u.id.clone(),
                admin: u.admin,
            })
            .ok_or_else(|| CairnError::UserNotFound { id: id.to_string() })
    }

    /// Entries may omit `project`; default it to the snapshot's project.
    fn fill_default_project(&mut self) {
        let project = self.project.id.clone();
        for membership in &mut self.memberships {
            if membership.project.is_empty() {
                membership.project.clone_from(&project);
            }
        }
        for milestone in &mut self.milestones {
            if milestone.project.is_empty() {
                milestone.project.clone_from(&project);
            }
        }
        for issue in &mut self.issues {
            if issue.project.is_empty() {
                issue.project.clone_from(&project);
            }
        }
        for mr in &mut self.merge_requests {
            if mr.project.is_empty() {
                mr.project.clone_from(&project);
            }
        }
    }
}

impl ItemSource for Snapshot {
    fn issues_for_milestone(&self, milestone_id: &str) -> Vec<Issue> {
        self.issues
            .iter()
            .filter(|issue| issue.milestone == milestone_id)
            .cloned()
            .collect()
    }

    fn merge_requests_for_milestone(&self, milestone_id: &str) -> Vec<MergeRequest> {
        self.merge_requests
            .iter()
            .filter(|mr| mr.milestone == milestone_id)
            .cloned()
            .collect()
    }
}

impl MembershipResolver for Snapshot {
    fn access_level(&self, user_id: &str, project_id: &str) -> AccessLevel {
        self.memberships
            .iter()
            .find(|m| m.user == user_id && m.project == project_id)
            .map_or(AccessLevel::NonMember, |m| m.level)
    }
}
