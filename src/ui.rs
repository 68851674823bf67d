use std::fmt::Display;
use std::io::Write;

use console::style;

use crate::error::{Result, SetupError};

/// Styled status lines for the wizard, written to any sink.
pub struct Ui<'a> {
    out: &'a mut dyn Write,
}

impl<'a> Ui<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    fn line(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.out, "{text}").map_err(|e| SetupError::Io {
            context: "writing to terminal".into(),
            source: e,
        })
    }

    pub fn title(&mut self, text: impl Display) -> Result<()> {
        self.line(style(text).cyan().bold())
    }

    pub fn info(&mut self, text: impl Display) -> Result<()> {
        self.line(style(text).cyan())
    }

    /// A long-running step is about to start.
    pub fn process(&mut self, text: impl Display) -> Result<()> {
        self.line(style(text).yellow())
    }

    pub fn complete(&mut self, text: impl Display) -> Result<()> {
        self.line(style(text).green())
    }

    pub fn warning(&mut self, text: impl Display) -> Result<()> {
        self.line(style(text).red())
    }

    pub fn blank(&mut self) -> Result<()> {
        self.line("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_one_line_per_call() {
        let mut buf = Vec::new();
        let mut ui = Ui::new(&mut buf);
        ui.process("Cloning...").unwrap();
        ui.complete("Clone completed.").unwrap();
        ui.blank().unwrap();

        let raw = String::from_utf8(buf).unwrap();
        let text = console::strip_ansi_codes(&raw);
        assert_eq!(text, "Cloning...\nClone completed.\n\n");
    }
}
