use inquire::validator::{ErrorMessage, Validation};

use super::Prompter;
use crate::catalog::MenuOption;
use crate::error::{Result, SetupError};

/// Interactive prompts on the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let mut prompt = inquire::Text::new(message).with_validator(|input: &str| {
            if input.trim().is_empty() {
                Ok(Validation::Invalid(ErrorMessage::Custom(
                    "An answer is required".to_string(),
                )))
            } else {
                Ok(Validation::Valid)
            }
        });
        if let Some(default) = default {
            prompt = prompt.with_default(default);
        }
        prompt.prompt().map_err(|_| SetupError::PromptCancelled)
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        inquire::Confirm::new(message)
            .with_help_message("Yes/No")
            .prompt()
            .map_err(|_| SetupError::PromptCancelled)
    }

    fn menu(&mut self, message: &str, options: &[MenuOption]) -> Result<String> {
        let answer = inquire::Select::new(message, options.to_vec())
            .prompt()
            .map_err(|_| SetupError::PromptCancelled)?;
        Ok(answer.key.to_string())
    }

    fn acknowledge(&mut self, message: &str) -> Result<()> {
        inquire::Text::new(message)
            .with_help_message("Press <enter> when this is done")
            .prompt()
            .map(|_| ())
            .map_err(|_| SetupError::PromptCancelled)
    }
}
