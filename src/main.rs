//! cc-assistant - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cc_assistant::collect::{DialoguerPrompter, collect_commit_config};
use cc_assistant::git::GitVcs;
use cc_assistant::{CommitError, CommitOptions, Outcome, confirm_and_commit, format_commit_message};

/// Build a Conventional Commits message interactively and commit it.
#[derive(Parser, Debug)]
#[command(name = "cc-assistant")]
#[command(about = "Build a Conventional Commits message interactively and commit it")]
#[command(version)]
struct Cli {
    /// Print the message without committing
    #[arg(long)]
    dry_run: bool,

    /// Commit without asking for confirmation
    #[arg(short = 'y', long)]
    yes: bool,

    /// Repository to commit in
    #[arg(short = 'C', long = "repo", default_value = ".")]
    repo: PathBuf,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(Outcome::Committed) => println!("✅ Commit successfully created"),
        Ok(Outcome::DryRun) => println!("Dry run complete. No commit created."),
        Err(e) => {
            match e.downcast_ref::<CommitError>() {
                Some(err) if err.is_cancelled() => println!("Error: {}", err),
                _ => eprintln!("Error: {:#}", e),
            }
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<Outcome> {
    println!("🚀 Conventional Commits Assistant");

    let prompter = DialoguerPrompter::new();
    let config =
        collect_commit_config(&prompter).context("Failed to collect commit details")?;

    let message = format_commit_message(&config);

    let vcs = GitVcs::new(cli.repo.clone());
    let options = CommitOptions {
        dry_run: cli.dry_run,
        assume_yes: cli.yes,
    };

    let outcome = confirm_and_commit(&message, &prompter, &vcs, options)?;
    Ok(outcome)
}

/// Logs go to stderr; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cc_assistant={}", default_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
