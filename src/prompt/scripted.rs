use std::collections::VecDeque;

use super::Prompter;
use crate::catalog::MenuOption;
use crate::error::{Result, SetupError};

/// Answers questions from a fixed queue, in order.
///
/// Every question asked is recorded so callers can inspect the conversation.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            asked: Vec::new(),
        }
    }

    /// Questions asked so far.
    pub fn asked(&self) -> &[String] {
        &self.asked
    }

    /// Answers that were never consumed.
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn next(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| SetupError::PromptExhausted {
                prompt: message.to_string(),
            })
    }
}

impl Prompter for ScriptedPrompter {
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String> {
        let answer = self.next(message)?;
        match default {
            Some(default) if answer.is_empty() => Ok(default.to_string()),
            _ => Ok(answer),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool> {
        let answer = self.next(message)?;
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes" | "true"
        ))
    }

    fn menu(&mut self, message: &str, _options: &[MenuOption]) -> Result<String> {
        self.next(message)
    }

    fn acknowledge(&mut self, message: &str) -> Result<()> {
        self.next(message).map(|_| ())
    }
}
