//! Interactive prompts for missing credentials

use dialoguer::{theme::ColorfulTheme, Input, Password};

use crate::error::{ConsoleError, Result};

/// Source of answers for values the user did not pass as flags
pub trait Prompter {
    /// Ask for a visible value
    fn input(&self, prompt: &str) -> Result<String>;

    /// Ask for a hidden value
    fn secret(&self, prompt: &str) -> Result<String>;
}

/// Prompts on the terminal
pub struct InteractivePrompter;

impl Prompter for InteractivePrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| ConsoleError::InvalidArgument(format!("Failed to read input: {}", e)))
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()
            .map_err(|e| ConsoleError::InvalidArgument(format!("Failed to read input: {}", e)))
    }
}

/// Never prompts: in batch mode every value must come from flags
pub struct BatchPrompter;

impl BatchPrompter {
    fn refuse(prompt: &str) -> ConsoleError {
        ConsoleError::InvalidArgument(format!(
            "'{}' is required in batch mode; pass it as a flag",
            prompt
        ))
    }
}

impl Prompter for BatchPrompter {
    fn input(&self, prompt: &str) -> Result<String> {
        Err(Self::refuse(prompt))
    }

    fn secret(&self, prompt: &str) -> Result<String> {
        Err(Self::refuse(prompt))
    }
}
