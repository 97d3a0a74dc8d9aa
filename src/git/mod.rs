//! Version-control adapter: staged-change detection and commit creation.

pub mod executor;
pub mod staged;

use std::path::{Path, PathBuf};

use git2::Repository;

use crate::error::CommitError;

pub use executor::commit_with_message;
pub use staged::has_staged_changes;

/// The two git operations the commit flow needs.
///
/// This abstraction allows mocking git in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Vcs {
    /// Whether the index differs from HEAD.
    fn has_staged_changes(&self) -> Result<bool, CommitError>;

    /// Commit the staged changes with `message`, verbatim.
    fn commit(&self, message: &str) -> Result<(), CommitError>;
}

/// [`Vcs`] over the repository containing `path`.
pub struct GitVcs {
    path: PathBuf,
}

impl GitVcs {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn open(&self) -> Result<Repository, CommitError> {
        Repository::discover(&self.path).map_err(CommitError::OpenRepository)
    }

    fn workdir(&self) -> Result<PathBuf, CommitError> {
        let repo = self.open()?;
        Ok(repo
            .workdir()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone()))
    }
}

impl Vcs for GitVcs {
    fn has_staged_changes(&self) -> Result<bool, CommitError> {
        has_staged_changes(&self.open()?)
    }

    fn commit(&self, message: &str) -> Result<(), CommitError> {
        commit_with_message(&self.workdir()?, message)
    }
}
