#![forbid(unsafe_code)]

mod cmd;
mod config;
mod output;

use std::path::PathBuf;

use cairn_core::model::Viewer;
use cairn_core::snapshot::Snapshot;
use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "cairn: milestone progress that respects confidentiality",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Snapshot file to query (default: config, then ./cairn.toml).
    #[arg(long, global = true, value_name = "PATH")]
    snapshot: Option<PathBuf>,

    /// Ask as this user; omitted means anonymous.
    #[arg(long = "as", global = true, value_name = "USER")]
    viewer: Option<String>,

    /// Output format.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Emit JSON output (alias for --format json).
    #[arg(long, global = true, hide = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Reporting",
        about = "Milestone completion status for a viewer",
        long_about = "Report total/closed counts, completion percentage, and the complete flag, \
                      counting only the items the viewer may see.",
        after_help = "EXAMPLES:\n    # Anonymous view\n    cn progress v1.0\n\n    # As a specific user\n    cn progress v1.0 --as alice\n\n    # Machine-readable output\n    cn progress v1.0 --json"
    )]
    Progress(cmd::progress::ProgressArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "Milestone schedule: elapsed and remaining days",
        after_help = "EXAMPLES:\n    # Against the current day\n    cn schedule v1.0\n\n    # Against a fixed date\n    cn schedule v1.0 --today 2026-08-07"
    )]
    Schedule(cmd::schedule::ScheduleArgs),

    #[command(
        next_help_heading = "Reporting",
        about = "List the work items a viewer can see",
        after_help = "EXAMPLES:\n    # Everything visible to alice\n    cn items v1.0 --as alice\n\n    # Only what is still open\n    cn items v1.0 --as alice --state open"
    )]
    Items(cmd::items::ItemsArgs),

    #[command(
        next_help_heading = "Project Maintenance",
        about = "Generate shell completion scripts",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    cn completions bash\n\n    # Generate zsh completions\n    cn completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CAIRN_LOG").unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Completions needs neither a snapshot nor a config.
    if let Commands::Completions(args) = &cli.command {
        let mut command = Cli::command();
        return cmd::completions::run_completions(args.shell, &mut command);
    }

    let cwd = std::env::current_dir()?;
    let user_config = config::load_user_config(&cwd)?;
    let mode = output::resolve_output_mode(cli.format, cli.json, user_config.output.as_deref());

    let snapshot_path = cli
        .snapshot
        .clone()
        .or_else(|| user_config.snapshot.clone())
        .unwrap_or_else(|| PathBuf::from("cairn.toml"));
    let snapshot = match Snapshot::load(&snapshot_path) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            output::render_error(mode, &CliError::from(&err))?;
            anyhow::bail!("cannot load snapshot");
        }
    };
    tracing::debug!(path = %snapshot_path.display(), project = %snapshot.project.id, "snapshot loaded");

    let viewer_id = cli.viewer.clone().or_else(|| user_config.viewer.clone());
    let viewer: Option<Viewer> = match viewer_id {
        None => None,
        Some(id) => match snapshot.viewer(&id) {
            Ok(viewer) => Some(viewer),
            Err(err) => {
                output::render_error(mode, &CliError::from(&err))?;
                anyhow::bail!("unknown viewer");
            }
        },
    };

    match cli.command {
        Commands::Progress(args) => {
            cmd::progress::run_progress(&args, &snapshot, viewer.as_ref(), mode)
        }
        Commands::Schedule(args) => cmd::schedule::run_schedule(&args, &snapshot, mode),
        Commands::Items(args) => cmd::items::run_items(&args, &snapshot, viewer.as_ref(), mode),
        // Handled before snapshot loading.
        Commands::Completions(_) => Ok(()),
    }
}
