//! Read-only reference tables: commit types and emoji.

pub mod emoji;
pub mod suggest;
pub mod types;

pub use emoji::{EMOJIS, Emoji, emojis, find_emoji};
pub use suggest::{emoji_display_order, suggest_emojis};
pub use types::{COMMIT_TYPES, CommitType, commit_types, find_commit_type};
