pub mod completions;
pub mod items;
pub mod progress;
pub mod schedule;
