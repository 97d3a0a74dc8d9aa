//! Error types for cc-assistant modules using thiserror.

use thiserror::Error;

/// Errors from interactive prompts.
#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Prompt interaction failed: {0}")]
    Interaction(#[from] dialoguer::Error),

    #[error("Selection index {index} is out of range ({len} options)")]
    InvalidSelection { index: usize, len: usize },

    #[error("No commit types available to choose from")]
    EmptyCatalog,
}

/// Errors from confirming and creating the commit.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("no staged changes to commit. Use 'git add' first")]
    NoStagedChanges,

    #[error("commit canceled by user")]
    Cancelled,

    #[error("git executable not found in PATH")]
    GitNotFound,

    #[error("Failed to open repository: {0}")]
    OpenRepository(#[source] git2::Error),

    #[error("Failed to inspect staged changes: {0}")]
    StagedDiff(#[source] git2::Error),

    #[error("Failed to spawn git: {0}")]
    SpawnFailed(#[source] std::io::Error),

    #[error("git commit exited with {}", code.map_or("unknown status".to_string(), |c| format!("code {c}")))]
    GitFailed { code: Option<i32> },

    #[error("Error in the confirmation of the commit: {0}")]
    Prompt(#[from] PromptError),
}

impl CommitError {
    /// Whether the user backed out rather than something going wrong.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, CommitError::Cancelled)
    }
}
