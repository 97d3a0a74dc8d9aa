//! The finished answers a commit message is assembled from.

use serde::Serialize;

use crate::catalog::{COMMIT_TYPES, CommitType, Emoji};

/// Everything the user chose for one commit.
///
/// Empty strings and empty lists mean "omitted"; `Emoji::none()` means no emoji.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitConfig {
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    pub scope: String,
    pub emoji: Emoji,
    pub description: String,
    pub body: String,
    pub breaking: bool,
    pub breaking_reason: String,
    pub reviewers: Vec<String>,
    pub reference_issues: Vec<String>,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self::new(COMMIT_TYPES[0], "")
    }
}

impl CommitConfig {
    pub fn new(commit_type: CommitType, description: impl Into<String>) -> Self {
        Self {
            commit_type,
            scope: String::new(),
            emoji: Emoji::none(),
            description: description.into(),
            body: String::new(),
            breaking: false,
            breaking_reason: String::new(),
            reviewers: Vec::new(),
            reference_issues: Vec::new(),
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn with_emoji(mut self, emoji: Emoji) -> Self {
        self.emoji = emoji;
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Mark the change as breaking. An empty reason falls back to the default wording.
    pub fn with_breaking(mut self, reason: impl Into<String>) -> Self {
        self.breaking = true;
        self.breaking_reason = reason.into();
        self
    }

    pub fn with_reviewer(mut self, reviewer: impl Into<String>) -> Self {
        self.reviewers.push(reviewer.into());
        self
    }

    pub fn with_issue(mut self, issue: impl Into<String>) -> Self {
        self.reference_issues.push(issue.into());
        self
    }
}
