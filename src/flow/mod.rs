//! Final step: show the message, confirm, and commit.

use tracing::debug;

use crate::collect::Prompter;
use crate::error::CommitError;
use crate::git::Vcs;

const PREVIEW_TITLE: &str = "============= Commit message =============";

/// How the final step behaves, derived from CLI flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions {
    /// Print the message and stop.
    pub dry_run: bool,
    /// Commit without asking for confirmation.
    pub assume_yes: bool,
}

/// What the final step ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed,
    DryRun,
}

/// The banner shown before asking for confirmation.
pub fn render_preview(message: &str) -> String {
    format!(
        "\n{}\n\n{}\n\n{}",
        PREVIEW_TITLE,
        message,
        "=".repeat(PREVIEW_TITLE.chars().count())
    )
}

/// Print the message, ask for confirmation, then commit it unmodified.
///
/// Declining yields [`CommitError::Cancelled`]; an empty index yields
/// [`CommitError::NoStagedChanges`] and git is never invoked.
pub fn confirm_and_commit(
    message: &str,
    prompter: &dyn Prompter,
    vcs: &dyn Vcs,
    options: CommitOptions,
) -> Result<Outcome, CommitError> {
    println!("{}", render_preview(message));

    if options.dry_run {
        return Ok(Outcome::DryRun);
    }

    let confirmed = options.assume_yes || prompter.confirm("Confirm commit?")?;
    if !confirmed {
        return Err(CommitError::Cancelled);
    }

    if !vcs.has_staged_changes()? {
        return Err(CommitError::NoStagedChanges);
    }

    debug!("Committing {} byte message", message.len());
    vcs.commit(message)?;

    Ok(Outcome::Committed)
}
