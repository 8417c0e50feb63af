//! Collaborator interfaces the engine queries.
//!
//! Both traits are synchronous and infallible by contract: the host resolves
//! its storage, network, and membership lookups *before* handing data to the
//! engine, so every engine computation stays a pure fold over already-present
//! values. An implementation backed by blocking I/O belongs behind these
//! traits, never inside the engine.

use crate::model::{AccessLevel, Issue, MergeRequest};

/// Supplies the work items belonging to a milestone.
pub trait ItemSource {
    /// All issues associated with the milestone, confidential ones included.
    /// The caller is responsible for visibility filtering.
    fn issues_for_milestone(&self, milestone_id: &str) -> Vec<Issue>;

    /// All merge requests associated with the milestone.
    fn merge_requests_for_milestone(&self, milestone_id: &str) -> Vec<MergeRequest>;
}

/// Resolves a viewer's role within a project.
pub trait MembershipResolver {
    /// The viewer's access level for the project. Unknown users and unknown
    /// projects resolve to [`AccessLevel::NonMember`].
    fn access_level(&self, user_id: &str, project_id: &str) -> AccessLevel;
}
