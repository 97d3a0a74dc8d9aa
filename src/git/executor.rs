//! Commit creation by shelling out to the system `git` binary.
//!
//! Going through `git commit` keeps the user's hooks, signing and identity config in play.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::CommitError;

/// Run `git commit -m <message>` in `workdir`.
///
/// git's own stdout/stderr go straight to the terminal. A non-zero exit is
/// reported with its status code and nothing is retried.
pub fn commit_with_message(workdir: &Path, message: &str) -> Result<(), CommitError> {
    let git = which::which("git").map_err(|_| CommitError::GitNotFound)?;
    debug!("Running {} commit in {}", git.display(), workdir.display());

    let status = Command::new(git)
        .args(["commit", "-m", message])
        .current_dir(workdir)
        .status()
        .map_err(CommitError::SpawnFailed)?;

    if !status.success() {
        return Err(CommitError::GitFailed {
            code: status.code(),
        });
    }

    Ok(())
}
