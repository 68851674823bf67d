use std::path::Path;
use std::process::Command;

use crate::error::{Result, SetupError};

/// Opens a directory in an external editor.
pub trait EditorLauncher {
    fn launch(&mut self, command: &str, dir: &Path) -> Result<()>;
}

/// Runs `<command> .` inside the directory and waits for it to return.
#[derive(Debug, Default)]
pub struct SystemEditor;

impl EditorLauncher for SystemEditor {
    fn launch(&mut self, command: &str, dir: &Path) -> Result<()> {
        let status = Command::new(command)
            .arg(".")
            .current_dir(dir)
            .status()
            .map_err(|e| SetupError::EditorLaunch {
                editor: command.to_string(),
                reason: format!("failed to execute: {e}"),
            })?;

        if !status.success() {
            return Err(SetupError::EditorLaunch {
                editor: command.to_string(),
                reason: format!("exited with status {status}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_editor_binary_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let result = SystemEditor.launch("kinetic-setup-no-such-editor", tmp.path());
        match result {
            Err(SetupError::EditorLaunch { editor, .. }) => {
                assert_eq!(editor, "kinetic-setup-no-such-editor");
            }
            other => panic!("expected EditorLaunch error, got: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_reported() {
        let tmp = tempfile::tempdir().unwrap();
        let result = SystemEditor.launch("false", tmp.path());
        assert!(matches!(result, Err(SetupError::EditorLaunch { reason, .. }) if reason.contains("exited")));
    }

    #[cfg(unix)]
    #[test]
    fn successful_launch() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(SystemEditor.launch("true", tmp.path()).is_ok());
    }
}
