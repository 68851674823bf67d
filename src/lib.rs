pub mod catalog;
pub mod config;
pub mod editor;
pub mod error;
pub mod prompt;
pub mod session;
pub mod ui;
pub mod vcs;
pub mod wizard;
pub mod workspace;

use std::path::PathBuf;

use crate::config::{load_user_config, UserConfig};
use crate::editor::SystemEditor;
use crate::error::{Result, SetupError};
use crate::prompt::TerminalPrompter;
use crate::session::Session;
use crate::vcs::GitCli;
use crate::wizard::{Collaborators, Outcome, Wizard};
use crate::workspace::LocalWorkspace;

/// Options for the `setup` operation.
pub struct SetupOptions {
    /// Customer the project is being set up for.
    pub customer: String,
    /// Directory the project directory is created in. If None, uses the current directory.
    pub cwd: Option<PathBuf>,
    /// Settings to use instead of the user config file.
    pub config: Option<UserConfig>,
}

/// Run the interactive wizard on the terminal.
pub fn setup(options: SetupOptions) -> Result<Outcome> {
    let cwd = match options.cwd {
        Some(cwd) => cwd,
        None => std::env::current_dir().map_err(|e| SetupError::Io {
            context: "getting current directory".into(),
            source: e,
        })?,
    };
    let session = Session::new(&options.customer, &cwd)?;

    let config = match options.config {
        Some(config) => config,
        None => load_user_config()?,
    };

    let mut prompter = TerminalPrompter;
    let workspace = LocalWorkspace;
    let mut vcs = GitCli::new(config.host.clone());
    let mut editor = SystemEditor;
    let mut stdout = std::io::stdout();

    let wizard = Wizard::new(
        &config,
        Collaborators {
            prompter: &mut prompter,
            workspace: &workspace,
            vcs: &mut vcs,
            editor: &mut editor,
            out: &mut stdout,
        },
    );
    wizard.run(session)
}
