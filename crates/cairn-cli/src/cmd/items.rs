//! `cn items <milestone>` — the work items a viewer can see.

use std::io::Write;
use std::str::FromStr;

use cairn_core::model::{State, Viewer};
use cairn_core::progress::Engine;
use cairn_core::snapshot::Snapshot;
use clap::Args;
use serde::Serialize;

use crate::output::{CliError, OutputMode, render, render_error};

/// Arguments for `cn items`.
#[derive(Args, Debug)]
pub struct ItemsArgs {
    /// Milestone ID to list items for.
    pub milestone: String,

    /// Filter by state: open or closed.
    #[arg(short, long)]
    pub state: Option<String>,
}

/// One row of the item listing.
#[derive(Debug, Serialize)]
struct ItemRow {
    id: String,
    kind: String,
    state: String,
    title: String,
}

/// Execute `cn items`.
pub fn run_items(
    args: &ItemsArgs,
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

    let state_filter = match args.state.as_deref().map(State::from_str).transpose() {
        Ok(filter) => filter,
        Err(err) => {
            render_error(output, &CliError::new(err.to_string()))?;
            anyhow::bail!("invalid --state");
        }
    };

    let engine = Engine::new(snapshot, snapshot);
    let rows: Vec<ItemRow> = engine
        .visible_items(&milestone, viewer)
        .into_iter()
        .filter(|item| state_filter.is_none_or(|state| item.state() == state))
        .map(|item| ItemRow {
            id: item.id().to_string(),
            kind: item.kind().to_string(),
            state: item.state().to_string(),
            title: item.title().to_string(),
        })
        .collect();

    render(output, &rows, |rows, w| render_items_human(rows, w))
}

fn render_items_human(rows: &[ItemRow], w: &mut dyn Write) -> std::io::Result<()> {
    if rows.is_empty() {
        writeln!(w, "(no visible items)")?;
        return Ok(());
    }

    for row in rows {
        writeln!(
            w,
            "{:<10} {:<13} {:<7} {}",
            row.id, row.kind, row.state, row.title
        )?;
    }
    Ok(())
}
