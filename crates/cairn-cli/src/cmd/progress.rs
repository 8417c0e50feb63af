//! `cn progress <milestone>` — per-viewer completion status.
//!
//! The numbers depend on who is asking: confidential issues are folded in
//! only when the viewer may see them, so two users can legitimately get
//! different totals for the same milestone.

use std::io::Write;

use cairn_core::model::Viewer;
use cairn_core::progress::Engine;
use cairn_core::snapshot::Snapshot;
use clap::Args;
use serde::Serialize;

use crate::output::{CliError, OutputMode, render, render_error};

const BAR_WIDTH: usize = 16;

/// Arguments for `cn progress`.
#[derive(Args, Debug)]
pub struct ProgressArgs {
    /// Milestone ID to report on.
    pub milestone: String,
}

/// Full progress output payload.
#[derive(Debug, Serialize)]
struct ProgressOutput {
    milestone: String,
    title: String,
    viewer: Option<String>,
    total: usize,
    closed: usize,
    open: usize,
    percent: usize,
    complete: bool,
}

/// Execute `cn progress`.
pub fn run_progress(
    args: &ProgressArgs,
    snapshot: &Snapshot,
    viewer: Option<&Viewer>,
    output: OutputMode,
) -> anyhow::Result<()> {
    let milestone = match snapshot.milestone(&args.milestone) {
        Ok(milestone) => milestone.clone(),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("milestone not found");
        }
    };

    let engine = Engine::new(snapshot, snapshot);
    let summary = engine.summary(&milestone, viewer);

    let payload = ProgressOutput {
        milestone: milestone.id,
        title: milestone.title,
        viewer: viewer.map(|v| v.id.clone()),
        total: summary.total,
        closed: summary.closed,
        open: summary.open,
        percent: summary.percent,
        complete: summary.complete,
    };

    render(output, &payload, render_progress_human)
}

fn render_progress_human(report: &ProgressOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{} [{}]", report.title, report.milestone)?;

    let viewer = report.viewer.as_deref().unwrap_or("anonymous");
    writeln!(w, "  viewer: {viewer}")?;

    if report.total == 0 {
        writeln!(w, "  (no visible items)")?;
        return Ok(());
    }

    let filled = (report.percent * BAR_WIDTH + 50) / 100;
    let empty = BAR_WIDTH - filled;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));
    writeln!(
        w,
        "  Progress: {}/{} closed ({}%) {bar}",
        report.closed, report.total, report.percent
    )?;

    if report.complete {
        writeln!(w, "  complete")?;
    } else {
        writeln!(w, "  {} open", report.open)?;
    }

    Ok(())
}
