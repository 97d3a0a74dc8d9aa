//! Commit message data model and formatting.

pub mod config;
pub mod format;

pub use config::CommitConfig;
pub use format::{
    BREAKING_CHANGE_TRAILER, DEFAULT_BREAKING_REASON, MessageBuilder, REFS_TRAILER,
    REVIEWED_BY_TRAILER, format_commit_message,
};
