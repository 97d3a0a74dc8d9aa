//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::Path;

use git2::{Oid, Repository, Signature};

/// A test git repository builder for integration tests.
pub struct TestRepo {
    pub dir: tempfile::TempDir,
    pub repo: Repository,
}

impl TestRepo {
    /// Create a new empty git repository with a committer identity configured.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let repo = Repository::init(dir.path()).expect("Failed to init git repo");

        let mut config = repo.config().expect("Failed to open repo config");
        config
            .set_str("user.name", "Test User")
            .expect("Failed to set user.name");
        config
            .set_str("user.email", "test@example.com")
            .expect("Failed to set user.email");
        config
            .set_bool("commit.gpgsign", false)
            .expect("Failed to disable signing");

        Self { dir, repo }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file without staging it.
    pub fn write(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(path, content).expect("Failed to write test file");
    }

    /// Write a file and add it to the index.
    pub fn stage(&self, name: &str, content: &str) {
        self.write(name, content);
        let mut index = self.repo.index().expect("Failed to get index");
        index.add_path(Path::new(name)).expect("Failed to add file");
        index.write().expect("Failed to write index");
    }

    /// Commit whatever is in the index. Returns the commit OID.
    pub fn commit_index(&self, message: &str) -> Oid {
        let sig = Signature::now("Test User", "test@example.com").expect("Failed to create signature");
        let mut index = self.repo.index().expect("Failed to get index");
        let tree_id = index.write_tree().expect("Failed to write tree");
        let tree = self.repo.find_tree(tree_id).expect("Failed to find tree");

        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Failed to create commit")
    }

    /// Message of the HEAD commit, without git's trailing newline.
    pub fn head_message(&self) -> String {
        let commit = self
            .repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("Failed to resolve HEAD");
        commit.message().unwrap_or("").trim_end().to_string()
    }
}
