//! Conventional Commits message assembly.

use crate::message::CommitConfig;

/// Footer token that flags an incompatible change.
pub const BREAKING_CHANGE_TRAILER: &str = "BREAKING CHANGE";

/// Used when a breaking change is flagged without a reason.
pub const DEFAULT_BREAKING_REASON: &str =
    "This commit introduces changes incompatible with previous versions";

pub const REVIEWED_BY_TRAILER: &str = "Reviewed-by";

pub const REFS_TRAILER: &str = "Refs";

/// Accumulates message sections, keeping exactly one blank line between them.
#[derive(Debug, Default)]
pub struct MessageBuilder {
    buf: String,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, text: &str) -> &mut Self {
        self.buf.push_str(text);
        self
    }

    /// Top the trailing newlines up to two, so the next section starts after a blank line.
    ///
    /// Never adds a third newline when the buffer already ends in one or two.
    pub fn ensure_blank_line(&mut self) -> &mut Self {
        if self.buf.ends_with("\n\n") {
            return self;
        }
        if self.buf.ends_with('\n') {
            self.buf.push('\n');
        } else {
            self.buf.push_str("\n\n");
        }
        self
    }

    /// Append `Token: value` lines, one per value, without a trailing newline.
    pub fn push_lines<S: AsRef<str>>(&mut self, token: &str, values: &[S]) -> &mut Self {
        for (i, value) in values.iter().enumerate() {
            if i > 0 {
                self.buf.push('\n');
            }
            self.buf.push_str(token);
            self.buf.push_str(": ");
            self.buf.push_str(value.as_ref());
        }
        self
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Render a [`CommitConfig`] as a commit message.
///
/// Produces:
/// ```text
/// type(scope)!: :emoji: description
///
/// Body text.
///
/// BREAKING CHANGE: reason
///
/// Reviewed-by: Jane Doe
/// Reviewed-by: John Smith
///
/// Refs: #12
/// Refs: #34
/// ```
///
/// Every part after the description is optional; omitted sections leave no blank line behind.
pub fn format_commit_message(config: &CommitConfig) -> String {
    let mut msg = MessageBuilder::new();

    // Header
    msg.push(config.commit_type.code);
    if !config.scope.is_empty() {
        msg.push("(").push(&config.scope).push(")");
    }
    if config.breaking {
        msg.push("!");
    }
    msg.push(": ");
    if !config.emoji.is_none() {
        msg.push(":").push(config.emoji.code).push(": ");
    }
    msg.push(&config.description);

    if !config.body.is_empty() {
        msg.ensure_blank_line().push(&config.body);
    }

    if config.breaking {
        let reason = if config.breaking_reason.is_empty() {
            DEFAULT_BREAKING_REASON
        } else {
            config.breaking_reason.as_str()
        };
        msg.ensure_blank_line()
            .push(BREAKING_CHANGE_TRAILER)
            .push(": ")
            .push(reason);
    }

    if !config.reviewers.is_empty() {
        msg.ensure_blank_line()
            .push_lines(REVIEWED_BY_TRAILER, &config.reviewers);
    }

    if !config.reference_issues.is_empty() {
        msg.ensure_blank_line()
            .push_lines(REFS_TRAILER, &config.reference_issues);
    }

    msg.finish()
}
