//! Data model: work items, milestones, and viewer identity.

pub mod access;
pub mod item;
pub mod milestone;

pub use access::{AccessLevel, Viewer};
pub use item::{Issue, Kind, MergeRequest, ParseEnumError, State, WorkItem};
pub use milestone::Milestone;
