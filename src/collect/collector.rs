//! Step-by-step collection of a [`CommitConfig`].

use tracing::debug;

use crate::catalog::{CommitType, Emoji, commit_types, emoji_display_order, emojis, suggest_emojis};
use crate::collect::prompt::{Prompter, Validator};
use crate::collect::validate::{validate_description, validate_issue_reference, validate_reviewer};
use crate::error::PromptError;
use crate::message::CommitConfig;

/// Ask every question needed for a commit, in order.
///
/// Steps:
/// 1. Type (menu)
/// 2. Scope (optional)
/// 3. Emoji (only if wanted; recommendations for the type listed first)
/// 4. Description (at least 3 characters)
/// 5. Body (optional)
/// 6. Breaking change, then its reason if it is one
/// 7. Reviewers, repeated until declined
/// 8. Issue references, repeated until declined
pub fn collect_commit_config(prompter: &dyn Prompter) -> Result<CommitConfig, PromptError> {
    let commit_type = select_commit_type(prompter, commit_types())?;
    debug!("Commit type: {}", commit_type.code);

    let mut config = CommitConfig::new(commit_type, "");

    config.scope =
        prompter.optional_input("Add a scope for this change. (optional, press Enter to omit)")?;

    if prompter.confirm("Do you want to include an emoji?")? {
        config.emoji = select_emoji(prompter, &commit_type, emojis())?;
        debug!("Emoji: {}", config.emoji.code);
    }

    config.description = prompter.input("Commit description", "", validate_description)?;

    config.body = prompter.optional_input("Commit body (optional, press Enter to omit)")?;

    config.breaking = prompter.confirm("Is this a breaking change?")?;
    if config.breaking {
        config.breaking_reason = prompter.optional_input(
            "Describe why this is a breaking change (optional, press Enter to use the default message)",
        )?;
    }

    if prompter.confirm("Do you want to add reviewers?")? {
        config.reviewers = collect_repeated(
            prompter,
            "Enter reviewer (e.g., 'John Smith')",
            "",
            validate_reviewer,
            "Do you want to add another reviewer?",
        )?;
    }

    if prompter.confirm("Do you want to reference issues?")? {
        config.reference_issues = collect_repeated(
            prompter,
            "Enter issue reference (e.g., '#123')",
            "#",
            validate_issue_reference,
            "Do you want to reference another issue?",
        )?;
    }

    debug!(
        "Collected commit config: {}",
        serde_json::to_string(&config).unwrap_or_default()
    );

    Ok(config)
}

/// Menu of all commit types.
pub fn select_commit_type(
    prompter: &dyn Prompter,
    catalog: &[CommitType],
) -> Result<CommitType, PromptError> {
    if catalog.is_empty() {
        return Err(PromptError::EmptyCatalog);
    }

    let items: Vec<String> = catalog.iter().map(CommitType::label).collect();
    let index = prompter.select(
        "Select the type of change that you're committing",
        &items,
        0,
    )?;

    pick(catalog, index)
}

/// Searchable emoji menu with the type's recommendations on top.
pub fn select_emoji(
    prompter: &dyn Prompter,
    commit_type: &CommitType,
    catalog: &[Emoji],
) -> Result<Emoji, PromptError> {
    let suggestions = suggest_emojis(commit_type, catalog);
    let ordered = emoji_display_order(&suggestions, catalog);

    let items: Vec<String> = ordered
        .iter()
        .enumerate()
        .map(|(i, e)| e.label(i < suggestions.len()))
        .collect();

    let index = prompter.fuzzy_select("Select an emoji (🔍 = Recommendation)", &items)?;

    pick(&ordered, index)
}

/// Ask for one value, then keep asking while the user wants another.
fn collect_repeated(
    prompter: &dyn Prompter,
    label: &str,
    initial: &str,
    validator: Validator,
    again_label: &str,
) -> Result<Vec<String>, PromptError> {
    let mut values = Vec::new();
    loop {
        let value = prompter.input(label, initial, validator)?;
        debug!("{}: {}", label, value);
        values.push(value);

        if !prompter.confirm(again_label)? {
            break;
        }
    }
    Ok(values)
}

fn pick<T: Copy>(options: &[T], index: usize) -> Result<T, PromptError> {
    options
        .get(index)
        .copied()
        .ok_or(PromptError::InvalidSelection {
            index,
            len: options.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collect::prompt::MockPrompter;
    use crate::message::format_commit_message;
    use mockall::predicate::eq;

    /// A prompter where every yes/no question is answered "no".
    fn declining_prompter() -> MockPrompter {
        let mut mock = MockPrompter::new();
        mock.expect_confirm().returning(|_| Ok(false));
        mock
    }

    #[test]
    fn test_minimal_flow() {
        let mut mock = declining_prompter();
        mock.expect_select().times(1).returning(|_, items, _| {
            assert_eq!(items.len(), 11);
            assert_eq!(items[1], "FIX -> A bug fix");
            Ok(1)
        });
        mock.expect_optional_input().times(2).returning(|_| Ok(String::new()));
        mock.expect_input()
            .withf(|label, initial, _| label == "Commit description" && initial.is_empty())
            .times(1)
            .returning(|_, _, _| Ok("null pointer on empty input".to_string()));
        mock.expect_fuzzy_select().never();

        let config = collect_commit_config(&mock).unwrap();
        assert_eq!(config.commit_type.code, "fix");
        assert!(config.emoji.is_none());
        assert!(!config.breaking);
        assert_eq!(
            format_commit_message(&config),
            "fix: null pointer on empty input"
        );
    }

    #[test]
    fn test_description_prompt_uses_length_rule() {
        let mut mock = declining_prompter();
        mock.expect_select().returning(|_, _, _| Ok(0));
        mock.expect_optional_input().returning(|_| Ok(String::new()));
        mock.expect_input().times(1).returning(|_, _, validator| {
            assert!(validator("ab").is_err());
            assert!(validator("abc").is_ok());
            Ok("abc".to_string())
        });

        collect_commit_config(&mock).unwrap();
    }

    #[test]
    fn test_breaking_reason_only_asked_when_breaking() {
        let mut mock = MockPrompter::new();
        mock.expect_select().returning(|_, _, _| Ok(0));
        mock.expect_input().returning(|_, _, _| Ok("add OAuth2 flow".to_string()));
        mock.expect_confirm()
            .with(eq("Is this a breaking change?"))
            .returning(|_| Ok(true));
        mock.expect_confirm().returning(|_| Ok(false));
        mock.expect_optional_input()
            .withf(|label| label.starts_with("Add a scope"))
            .returning(|_| Ok("auth".to_string()));
        mock.expect_optional_input()
            .withf(|label| label.starts_with("Describe why"))
            .times(1)
            .returning(|_| Ok(String::new()));
        mock.expect_optional_input().returning(|_| Ok(String::new()));

        let config = collect_commit_config(&mock).unwrap();
        assert_eq!(
            format_commit_message(&config),
            "feat(auth)!: add OAuth2 flow\n\nBREAKING CHANGE: This commit introduces changes incompatible with previous versions"
        );
    }

    #[test]
    fn test_reviewer_and_issue_loops_repeat_until_declined() {
        let mut mock = MockPrompter::new();
        mock.expect_select().returning(|_, _, _| Ok(2));
        mock.expect_optional_input().returning(|_| Ok(String::new()));
        mock.expect_input()
            .withf(|label, _, _| label == "Commit description")
            .returning(|_, _, _| Ok("update README".to_string()));

        let mut reviewers = vec!["Alice", "Bob"].into_iter();
        mock.expect_input()
            .withf(|label, _, _| label.starts_with("Enter reviewer"))
            .times(2)
            .returning(move |_, _, _| Ok(reviewers.next().unwrap().to_string()));

        let mut issues = vec!["#12", "#34", "#56"].into_iter();
        mock.expect_input()
            .withf(|label, initial, _| label.starts_with("Enter issue") && initial == "#")
            .times(3)
            .returning(move |_, _, _| Ok(issues.next().unwrap().to_string()));

        let mut more_reviewers = vec![true, false].into_iter();
        mock.expect_confirm()
            .with(eq("Do you want to add another reviewer?"))
            .times(2)
            .returning(move |_| Ok(more_reviewers.next().unwrap()));
        let mut more_issues = vec![true, true, false].into_iter();
        mock.expect_confirm()
            .with(eq("Do you want to reference another issue?"))
            .times(3)
            .returning(move |_| Ok(more_issues.next().unwrap()));
        mock.expect_confirm()
            .with(eq("Do you want to add reviewers?"))
            .returning(|_| Ok(true));
        mock.expect_confirm()
            .with(eq("Do you want to reference issues?"))
            .returning(|_| Ok(true));
        mock.expect_confirm().returning(|_| Ok(false));

        let config = collect_commit_config(&mock).unwrap();
        assert_eq!(config.commit_type.code, "docs");
        assert_eq!(config.reviewers, vec!["Alice", "Bob"]);
        assert_eq!(config.reference_issues, vec!["#12", "#34", "#56"]);
    }

    #[test]
    fn test_emoji_menu_lists_recommendations_first() {
        let mut mock = MockPrompter::new();
        mock.expect_fuzzy_select().times(1).returning(|_, items| {
            assert_eq!(items[0], "🔍 🐛 (:bug:) -> Fix a bug");
            assert!(items[4].starts_with("🎨 "));
            Ok(1)
        });

        let fix = crate::catalog::find_commit_type("fix").unwrap();
        let emoji = select_emoji(&mock, &fix, emojis()).unwrap();
        assert_eq!(emoji.code, "ambulance");
    }

    #[test]
    fn test_out_of_range_selection_is_an_error() {
        let mut mock = MockPrompter::new();
        mock.expect_select().returning(|_, _, _| Ok(99));

        let err = select_commit_type(&mock, commit_types()).unwrap_err();
        assert!(matches!(
            err,
            PromptError::InvalidSelection { index: 99, len: 11 }
        ));
    }

    #[test]
    fn test_empty_catalog() {
        let mock = MockPrompter::new();
        assert!(matches!(
            select_commit_type(&mock, &[]),
            Err(PromptError::EmptyCatalog)
        ));
    }
}
