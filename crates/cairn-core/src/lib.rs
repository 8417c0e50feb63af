#![forbid(unsafe_code)]
//! cairn-core library.
//!
//! Visibility-aware aggregation over the work items of a milestone: counts,
//! completion percentage, and schedule math, computed per viewer so that
//! confidential issues never leak into the numbers shown to someone who may
//! not see them.
//!
//! # Conventions
//!
//! - **Errors**: fallible paths return [`error::CairnError`]; engine
//!   computations are total functions and do not fail.
//! - **Logging**: use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`,
//!   `trace!`).

pub mod error;
pub mod model;
pub mod progress;
pub mod schedule;
pub mod snapshot;
pub mod source;
pub mod visibility;

pub use error::CairnError;
