//! Interactive collection of the commit configuration.

pub mod collector;
pub mod prompt;
pub mod validate;

pub use collector::{collect_commit_config, select_commit_type, select_emoji};
pub use prompt::{DialoguerPrompter, Prompter, Validator};
pub use validate::{validate_description, validate_issue_reference, validate_reviewer};
