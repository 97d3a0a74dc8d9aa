//! The fixed table of Conventional Commits types.

use std::fmt;

use serde::Serialize;

/// A commit category with its short code and what it is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CommitType {
    pub code: &'static str,
    pub description: &'static str,
}

impl CommitType {
    /// Menu label, e.g. `FEAT -> A new feature`.
    pub fn label(&self) -> String {
        format!("{} -> {}", self.code.to_uppercase(), self.description)
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

pub static COMMIT_TYPES: [CommitType; 11] = [
    CommitType {
        code: "feat",
        description: "A new feature",
    },
    CommitType {
        code: "fix",
        description: "A bug fix",
    },
    CommitType {
        code: "docs",
        description: "Documentation only changes",
    },
    CommitType {
        code: "style",
        description: "Changes that do not affect the meaning of the code (white-space, formatting, missing semi-colons, etc)",
    },
    CommitType {
        code: "refactor",
        description: "A code change that neither fixes a bug nor adds a feature",
    },
    CommitType {
        code: "perf",
        description: "A code change that improves performance",
    },
    CommitType {
        code: "test",
        description: "Adding missing tests or correcting existing tests",
    },
    CommitType {
        code: "build",
        description: "Changes that affect the build system or external dependencies (examples scopes: gulp, broccoli, npm)",
    },
    CommitType {
        code: "ci",
        description: "Changes to our CI configuration files and scripts (example scopes: Travis, Circle, BrowserStack, SauceLabs)",
    },
    CommitType {
        code: "chore",
        description: "Other changes that don't modify src or test files",
    },
    CommitType {
        code: "revert",
        description: "Reverts a previous commit",
    },
];

/// All commit types, in menu order.
pub fn commit_types() -> &'static [CommitType] {
    &COMMIT_TYPES
}

/// Look up a commit type by code, ignoring case.
pub fn find_commit_type(code: &str) -> Option<CommitType> {
    COMMIT_TYPES
        .iter()
        .find(|t| t.code.eq_ignore_ascii_case(code))
        .copied()
}
