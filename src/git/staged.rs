//! Staged change detection using git2.

use git2::{ErrorCode, Repository, Tree};
use tracing::debug;

use crate::error::CommitError;

/// Resolve the HEAD tree, distinguishing empty-repo errors from real failures.
///
/// Returns `Ok(None)` for repos with no commits (unborn branch / not found).
fn resolve_head_tree(repo: &Repository) -> Result<Option<Tree<'_>>, CommitError> {
    let head_ref = match repo.head() {
        Ok(r) => r,
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
            return Ok(None);
        }
        Err(e) => return Err(CommitError::StagedDiff(e)),
    };

    let tree = head_ref.peel_to_tree().map_err(CommitError::StagedDiff)?;
    Ok(Some(tree))
}

/// Whether anything is staged for the next commit.
///
/// Compares the index against HEAD (or the empty tree before the first commit),
/// the same question `git diff --staged --quiet` answers.
pub fn has_staged_changes(repo: &Repository) -> Result<bool, CommitError> {
    let head_tree = resolve_head_tree(repo)?;
    let diff = repo
        .diff_tree_to_index(head_tree.as_ref(), None, None)
        .map_err(CommitError::StagedDiff)?;

    let staged = diff.deltas().count();
    debug!("Staged files: {}", staged);
    Ok(staged > 0)
}
