mod scripted;
mod terminal;

pub use scripted::ScriptedPrompter;
pub use terminal::TerminalPrompter;

use crate::catalog::MenuOption;
use crate::error::Result;

/// Source of answers for the wizard's questions.
pub trait Prompter {
    /// Free-text answer. `default` is offered when the user just presses enter.
    fn text(&mut self, message: &str, default: Option<&str>) -> Result<String>;

    /// Yes/no answer.
    fn confirm(&mut self, message: &str) -> Result<bool>;

    /// Pick from a numbered menu. Returns the raw key, which may be outside `options`.
    fn menu(&mut self, message: &str, options: &[MenuOption]) -> Result<String>;

    /// Block until the user acknowledges `message`.
    fn acknowledge(&mut self, message: &str) -> Result<()>;
}
