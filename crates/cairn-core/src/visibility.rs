//! The confidentiality predicate.
//!
//! `can_see` is a pure capability check: it takes the viewer's explicit
//! identity and resolved membership rather than any ambient session state,
//! so a decision is reproducible from its inputs alone.

use tracing::trace;

use crate::model::{Viewer, WorkItem};
use crate::source::MembershipResolver;

/// Decide whether `viewer` may see `item`.
///
/// Rules, first match wins:
///
/// 1. non-confidential items are visible to everyone
/// 2. admins see everything
/// 3. the author sees their own item
/// 4. assignees see items assigned to them
/// 5. project members strictly above guest see confidential items
///
/// Anonymous viewers (`None`) only ever pass rule 1. Guests never gain
/// confidential visibility through membership alone.
#[must_use]
pub fn can_see<M: MembershipResolver>(
    membership: &M,
    viewer: Option<&Viewer>,
    item: &WorkItem,
) -> bool {
    if !item.confidential() {
        return true;
    }

    let Some(viewer) = viewer else {
        trace!(item = item.id(), "anonymous viewer denied confidential item");
        return false;
    };

    if viewer.admin {
        return true;
    }

    if viewer.id == item.author() {
        return true;
    }

    if item.assignees().iter().any(|a| *a == viewer.id) {
        return true;
    }

    let level = membership.access_level(&viewer.id, item.project());
    let visible = level.above_guest();
    trace!(
        item = item.id(),
        viewer = %viewer.id,
        %level,
        visible,
        "confidential visibility via membership"
    );
    visible
}
