//! Terminal prompts.

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, FuzzySelect, Input, Select};

use crate::error::PromptError;

/// Rows visible at once in the long menus.
const MENU_PAGE_SIZE: usize = 10;

/// Checks a line of input; the `Err` text is shown to the user, who is asked again.
pub type Validator = fn(&str) -> Result<(), String>;

/// The interactive questions the collector asks.
///
/// This abstraction allows scripting the answers in tests.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one entry from a menu; returns its index.
    fn select(&self, label: &str, items: &[String], default: usize) -> Result<usize, PromptError>;

    /// Pick one entry from a menu that can be narrowed by typing; returns its index.
    fn fuzzy_select(&self, label: &str, items: &[String]) -> Result<usize, PromptError>;

    /// Free text, re-asked until `validator` accepts it.
    fn input(
        &self,
        label: &str,
        initial: &str,
        validator: Validator,
    ) -> Result<String, PromptError>;

    /// Free text that may be left empty.
    fn optional_input(&self, label: &str) -> Result<String, PromptError>;

    /// A yes/no question defaulting to "no".
    fn confirm(&self, label: &str) -> Result<bool, PromptError>;
}

/// Prompter backed by `dialoguer` on stderr.
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, label: &str, items: &[String], default: usize) -> Result<usize, PromptError> {
        let index = Select::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(default)
            .max_length(items.len().max(MENU_PAGE_SIZE))
            .interact()?;
        Ok(index)
    }

    fn fuzzy_select(&self, label: &str, items: &[String]) -> Result<usize, PromptError> {
        let index = FuzzySelect::with_theme(&self.theme)
            .with_prompt(label)
            .items(items)
            .default(0)
            .max_length(MENU_PAGE_SIZE)
            .interact()?;
        Ok(index)
    }

    fn input(
        &self,
        label: &str,
        initial: &str,
        validator: Validator,
    ) -> Result<String, PromptError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .with_initial_text(initial)
            .validate_with(move |input: &String| validator(input))
            .interact_text()?;
        Ok(value)
    }

    fn optional_input(&self, label: &str) -> Result<String, PromptError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?;
        Ok(value)
    }

    fn confirm(&self, label: &str) -> Result<bool, PromptError> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(label)
            .default(false)
            .interact()?;
        Ok(answer)
    }
}
