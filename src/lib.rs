//! cc-assistant - An interactive CLI that builds Conventional Commits messages.
//!
//! # Overview
//!
//! cc-assistant asks for a commit type, optional scope and emoji, a description,
//! an optional body, breaking-change details, reviewers and issue references,
//! formats them as a Conventional Commits message, and hands it to `git commit`.

pub mod catalog;
pub mod collect;
pub mod error;
pub mod flow;
pub mod git;
pub mod message;

// Re-export commonly used types
pub use catalog::{CommitType, Emoji, suggest_emojis};
pub use error::{CommitError, PromptError};
pub use flow::{CommitOptions, Outcome, confirm_and_commit};
pub use message::{CommitConfig, format_commit_message};
