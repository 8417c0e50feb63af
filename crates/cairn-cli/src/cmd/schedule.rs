//! `cn schedule <milestone>` — elapsed and remaining days.
//!
//! Schedule math is independent of visibility: every viewer gets the same
//! day counts.

use std::io::Write;

use cairn_core::schedule;
use cairn_core::snapshot::Snapshot;
use chrono::{NaiveDate, Utc};
use clap::Args;
use serde::Serialize;

use crate::output::{CliError, OutputMode, pretty_kv, render, render_error};

/// Arguments for `cn schedule`.
#[derive(Args, Debug)]
pub struct ScheduleArgs {
    /// Milestone ID to report on.
    pub milestone: String,

    /// Evaluate as of this date (YYYY-MM-DD) instead of the current day.
    #[arg(long, value_name = "DATE")]
    pub today: Option<String>,
}

/// Full schedule output payload.
#[derive(Debug, Serialize)]
struct ScheduleOutput {
    milestone: String,
    title: String,
    start_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    today: NaiveDate,
    elapsed_days: u64,
    remaining_days: u64,
    expired: bool,
    upcoming: bool,
}

/// Execute `cn schedule`.
pub fn run_schedule(
    args: &ScheduleArgs,
    snapshot: &Snapshot,
    output: OutputMode,
) -> anyhow::Result<()> {
    let milestone = match snapshot.milestone(&args.milestone) {
        Ok(milestone) => milestone.clone(),
        Err(err) => {
            render_error(output, &CliError::from(&err))?;
            anyhow::bail!("milestone not found");
        }
    };

    let today = match parse_today(args.today.as_deref()) {
        Ok(today) => today,
        Err(message) => {
            render_error(output, &CliError::new(message))?;
            anyhow::bail!("invalid --today");
        }
    };

    let payload = ScheduleOutput {
        elapsed_days: schedule::elapsed_days(&milestone, today),
        remaining_days: schedule::remaining_days(&milestone, today),
        expired: schedule::expired(&milestone, today),
        upcoming: schedule::upcoming(&milestone, today),
        milestone: milestone.id,
        title: milestone.title,
        start_date: milestone.start_date,
        due_date: milestone.due_date,
        today,
    };

    render(output, &payload, render_schedule_human)
}

fn parse_today(flag: Option<&str>) -> Result<NaiveDate, String> {
    flag.map_or_else(
        || Ok(Utc::now().date_naive()),
        |raw| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .map_err(|_| format!("invalid date '{raw}': expected YYYY-MM-DD"))
        },
    )
}

fn render_schedule_human(report: &ScheduleOutput, w: &mut dyn Write) -> std::io::Result<()> {
    writeln!(w, "{} [{}]", report.title, report.milestone)?;

    let fmt_date = |d: Option<NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
    pretty_kv(w, "start", fmt_date(report.start_date))?;
    pretty_kv(w, "due", fmt_date(report.due_date))?;
    pretty_kv(w, "today", report.today.to_string())?;
    pretty_kv(w, "elapsed", format!("{} days", report.elapsed_days))?;
    pretty_kv(w, "remaining", format!("{} days", report.remaining_days))?;

    if report.expired {
        writeln!(w, "  expired")?;
    }
    if report.upcoming {
        writeln!(w, "  not started yet")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        Snapshot::from_toml_str(
            r#"
[project]
id = "p"

[[milestones]]
id = "v1"
title = "One"
start_date = "2026-08-05"
due_date = "2026-08-09"
"#,
        )
        .expect("snapshot")
    }

    #[test]
    fn parse_today_accepts_iso_dates() {
        let date = parse_today(Some("2026-08-07")).expect("valid");
        assert_eq!(date, NaiveDate::from_ymd_opt(2026, 8, 7).expect("date"));
    }

    #[test]
    fn parse_today_rejects_garbage() {
        assert!(parse_today(Some("next tuesday")).is_err());
        assert!(parse_today(Some("08/07/2026")).is_err());
    }

    #[test]
    fn parse_today_defaults_to_current_day() {
        assert!(parse_today(None).is_ok());
    }

    #[test]
    fn schedule_smoke() {
        let args = ScheduleArgs {
            milestone: "v1".to_string(),
            today: Some("2026-08-07".to_string()),
        };
        let result = run_schedule(&args, &snapshot(), OutputMode::Json);
        assert!(result.is_ok());
    }

    #[test]
    fn schedule_unknown_milestone_fails() {
        let args = ScheduleArgs {
            milestone: "v9".to_string(),
            today: None,
        };
        assert!(run_schedule(&args, &snapshot(), OutputMode::Json).is_err());
    }

    #[test]
    fn render_schedule_shows_day_counts() {
        let report = ScheduleOutput {
            milestone: "v1".to_string(),
            title: "One".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 8, 5),
            due_date: NaiveDate::from_ymd_opt(2026, 8, 9),
            today: NaiveDate::from_ymd_opt(2026, 8, 7).expect("date"),
            elapsed_days: 2,
            remaining_days: 2,
            expired: false,
            upcoming: false,
        };

        let mut out = Vec::new();
        render_schedule_human(&report, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");

        assert!(rendered.contains("One [v1]"));
        assert!(rendered.contains("2026-08-05"));
        assert!(rendered.contains("elapsed"));
        assert!(rendered.contains("2 days"));
        assert!(!rendered.contains("expired"));
    }

    #[test]
    fn render_schedule_marks_missing_dates() {
        let report = ScheduleOutput {
            milestone: "v1".to_string(),
            title: "One".to_string(),
            start_date: None,
            due_date: None,
            today: NaiveDate::from_ymd_opt(2026, 8, 7).expect("date"),
            elapsed_days: 0,
            remaining_days: 0,
            expired: false,
            upcoming: false,
        };

        let mut out = Vec::new();
        render_schedule_human(&report, &mut out).expect("render");
        let rendered = String::from_utf8(out).expect("utf8");

        assert!(rendered.contains('-'));
        assert!(rendered.contains("0 days"));
    }
}
