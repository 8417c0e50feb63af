//! Visibility-aware milestone aggregation.
//!
//! Every operation takes the `(milestone, viewer)` pair explicitly and is a
//! read-only fold over the item source: pull the milestone's items, keep the
//! ones the viewer may see, count. Invocations are independent and stateless,
//! so hosts are free to run them concurrently across milestones and viewers.

use serde::Serialize;
use tracing::debug;

use crate::model::{Milestone, Viewer, WorkItem};
use crate::source::{ItemSource, MembershipResolver};
use crate::visibility::can_see;

/// The aggregation engine, generic over its two collaborators.
pub struct Engine<'a, S, M> {
    source: &'a S,
    membership: &'a M,
}

impl<'a, S: ItemSource, M: MembershipResolver> Engine<'a, S, M> {
    #[must_use]
    pub const fn new(source: &'a S, membership: &'a M) -> Self {
        Self { source, membership }
    }

    /// The milestone's work items the viewer may see, issues first.
    ///
    /// Merge requests carry no confidential flag and therefore always pass
    /// the filter; confidential issues pass only for admins, authors,
    /// assignees, and members above guest.
    #[must_use]
    pub fn visible_items(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> Vec<WorkItem> {
        let issues = self
            .source
            .issues_for_milestone(&milestone.id)
            .into_iter()
            .map(WorkItem::Issue);
        let merge_requests = self
            .source
            .merge_requests_for_milestone(&milestone.id)
            .into_iter()
            .map(WorkItem::MergeRequest);

        issues
            .chain(merge_requests)
            .filter(|item| can_see(self.membership, viewer, item))
            .collect()
    }

    /// Count of all visible work items.
    #[must_use]
    pub fn total_items_count(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> usize {
        self.visible_items(milestone, viewer).len()
    }

    /// Count of visible work items in the closed state.
    #[must_use]
    pub fn closed_items_count(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> usize {
        self.visible_items(milestone, viewer)
            .iter()
            .filter(|item| item.state().is_closed())
            .count()
    }

    /// Count of visible work items still open.
    #[must_use]
    pub fn open_items_count(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> usize {
        let summary = self.summary(milestone, viewer);
        summary.open
    }

    /// Completion percentage, rounded half-up. Zero when nothing is visible.
    #[must_use]
    pub fn percent_complete(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> usize {
        let summary = self.summary(milestone, viewer);
        summary.percent
    }

    /// Whether every visible item is closed.
    ///
    /// An empty milestone is not complete: at least one visible item must
    /// exist and all of them must be closed.
    #[must_use]
    pub fn complete(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> bool {
        let summary = self.summary(milestone, viewer);
        summary.complete
    }

    /// All counts and derived metrics in a single pass over the item source.
    #[must_use]
    pub fn summary(&self, milestone: &Milestone, viewer: Option<&Viewer>) -> Summary {
        let items = self.visible_items(milestone, viewer);
        let total = items.len();
        let closed = items
            .iter()
            .filter(|item| item.state().is_closed())
            .count();

        let summary = Summary {
            milestone: milestone.id.clone(),
            total,
            closed,
            open: total - closed,
            percent: percent_of(closed, total),
            complete: total > 0 && closed == total,
        };
        debug!(
            milestone = %summary.milestone,
            viewer = viewer.map_or("<anonymous>", |v| v.id.as_str()),
            total,
            closed,
            percent = summary.percent,
            "milestone summary"
        );
        summary
    }
}

/// Per-viewer completion summary for one milestone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub milestone: String,
    pub total: usize,
    pub closed: usize,
    pub open: usize,
    pub percent: usize,
    pub complete: bool,
}

/// `round(100 * closed / total)`, half-up, in integer arithmetic.
///
/// Zero total is an explicit zero-percent policy, never a division error.
fn percent_of(closed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (200 * closed + total) / (2 * total)
}
