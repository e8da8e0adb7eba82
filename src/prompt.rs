//! User interaction used when creating profiles.

use crate::error::{Error, Result};
use crate::profile::Author;
use dialoguer::Input;

/// Source of answers to interactive questions.
pub trait Prompter {
    /// Asks for a line of text, returning `default` on empty input.
    fn input(&self, prompt: &str, default: &str) -> Result<String>;
}

/// Prompts on the terminal with dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        DialoguerPrompter::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn input(&self, prompt: &str, default: &str) -> Result<String> {
        Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| Error::PromptError(e.to_string()))
    }
}

/// Asks for the author fields of a new profile.
pub fn prompt_author(prompt: &dyn Prompter, defaults: &Author) -> Result<Author> {
    let name = prompt.input("Author name", &defaults.name)?;
    let contact = prompt.input("Author contact", &defaults.contact)?;
    Ok(Author { name, contact })
}
