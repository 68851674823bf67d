//! The setup wizard: a fixed sequence of prompts and side effects.
//!
//! Each [`Step`] runs exactly once, in [`Step::SEQUENCE`] order. The only
//! early exit is declining the confirmation, which happens before anything
//! touches the disk. Any collaborator error aborts the run and leaves the
//! project directory as it was at that point.

use std::io::Write;
use std::path::Path;

use crate::catalog::{ide_guidance, Editor, Guidance, Ide, MenuChoice, Product};
use crate::config::UserConfig;
use crate::editor::EditorLauncher;
use crate::error::{Result, SetupError};
use crate::prompt::Prompter;
use crate::session::{sandbox_branch, Session};
use crate::ui::Ui;
use crate::vcs::{
    authenticated_url, project_remote_url, VersionControl, INITIAL_COMMIT_MESSAGE, REMOTE_NAME,
};
use crate::workspace::Workspace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    SelectProduct,
    Confirm,
    CreateDirectory,
    CloneTemplate,
    AcknowledgeRemote,
    InitRepository,
    CommitAndPush,
    IdeGuidance,
    EditorSetup,
    Done,
}

impl Step {
    pub const SEQUENCE: [Step; 10] = [
        Step::SelectProduct,
        Step::Confirm,
        Step::CreateDirectory,
        Step::CloneTemplate,
        Step::AcknowledgeRemote,
        Step::InitRepository,
        Step::CommitAndPush,
        Step::IdeGuidance,
        Step::EditorSetup,
        Step::Done,
    ];
}

/// How a run ended. Both variants are a successful exit.
#[derive(Debug)]
pub enum Outcome {
    Completed(Session),
    Cancelled(Session),
}

enum Flow {
    Continue,
    Cancel,
}

/// The external capabilities the wizard drives.
pub struct Collaborators<'a> {
    pub prompter: &'a mut dyn Prompter,
    pub workspace: &'a dyn Workspace,
    pub vcs: &'a mut dyn VersionControl,
    pub editor: &'a mut dyn EditorLauncher,
    pub out: &'a mut dyn Write,
}

pub struct Wizard<'a> {
    config: &'a UserConfig,
    prompter: &'a mut dyn Prompter,
    workspace: &'a dyn Workspace,
    vcs: &'a mut dyn VersionControl,
    editor: &'a mut dyn EditorLauncher,
    ui: Ui<'a>,
}

impl<'a> Wizard<'a> {
    pub fn new(config: &'a UserConfig, collaborators: Collaborators<'a>) -> Self {
        Self {
            config,
            prompter: collaborators.prompter,
            workspace: collaborators.workspace,
            vcs: collaborators.vcs,
            editor: collaborators.editor,
            ui: Ui::new(collaborators.out),
        }
    }

    pub fn run(mut self, mut session: Session) -> Result<Outcome> {
        self.ui.blank()?;
        self.ui.title(format!(
            "Looks like you are setting up a new Kinetic Growth project for {}!",
            session.customer_name
        ))?;
        self.ui
            .title("Let's walk through some basic questions to help you get started.")?;

        for step in Step::SEQUENCE {
            if let Flow::Cancel = self.execute(step, &mut session)? {
                return Ok(Outcome::Cancelled(session));
            }
        }

        Ok(Outcome::Completed(session))
    }

    fn execute(&mut self, step: Step, session: &mut Session) -> Result<Flow> {
        match step {
            Step::SelectProduct => self.select_product(session),
            Step::Confirm => self.confirm(session),
            Step::CreateDirectory => self.create_directory(session),
            Step::CloneTemplate => self.clone_template(session),
            Step::AcknowledgeRemote => self.acknowledge_remote(session),
            Step::InitRepository => self.init_repository(session),
            Step::CommitAndPush => self.commit_and_push(session),
            Step::IdeGuidance => self.advise_ide(session),
            Step::EditorSetup => self.editor_setup(session),
            Step::Done => self.done(),
        }
    }

    /// Asks until the answer names a product.
    fn select_product(&mut self, session: &mut Session) -> Result<Flow> {
        let options = Product::menu();
        loop {
            let answer = self
                .prompter
                .menu("Which product are you setting up?", &options)?;
            match Product::parse(&answer) {
                MenuChoice::Known(product) => {
                    session.product = Some(product);
                    return Ok(Flow::Continue);
                }
                MenuChoice::Unrecognized(raw) => {
                    self.ui.warning(format!(
                        "'{raw}' is not one of the listed products. Please choose 1, 2 or 3."
                    ))?;
                }
            }
        }
    }

    fn confirm(&mut self, session: &mut Session) -> Result<Flow> {
        let product = session.product.map_or("the project", Product::name);
        let message = format!(
            "We are going to set up {product} in {}. Is this okay?",
            session.target_dir.display()
        );

        if self.prompter.confirm(&message)? {
            Ok(Flow::Continue)
        } else {
            self.ui.warning("Exiting - no changes were made.")?;
            Ok(Flow::Cancel)
        }
    }

    fn create_directory(&mut self, session: &mut Session) -> Result<Flow> {
        // Nothing may be deleted if the later git steps cannot run at all.
        self.vcs.check_available()?;

        let dir = &session.target_dir;
        self.ui.process(format!("Creating {}...", dir.display()))?;
        self.workspace.empty_dir(dir)?;
        self.ui.complete("Directory created.")?;
        Ok(Flow::Continue)
    }

    /// `select_product` only returns with a product set; the check here
    /// keeps the step from running on its own without one.
    fn clone_template(&mut self, session: &mut Session) -> Result<Flow> {
        let source = session
            .repository_source()
            .ok_or(SetupError::MissingTemplate)?;

        let username = self.prompter.text(
            &format!("What is your {} username?", self.config.host),
            self.config.username.as_deref(),
        )?;
        let url = authenticated_url(&username, &self.config.host, source);
        self.ui.process(format!(
            "Cloning quick-start repository {source} as {username}..."
        ))?;
        session.vcs_username = Some(username);

        let dir = session.target_dir.as_path();
        self.vcs.clone_into(&url, dir)?;
        self.strip_template_history(dir)?;
        self.ui.complete("Clone completed.")?;
        Ok(Flow::Continue)
    }

    /// Drop the template's own history and its documentation.
    fn strip_template_history(&mut self, dir: &Path) -> Result<()> {
        self.workspace.remove_dir(&dir.join(".git"))?;
        let docs = dir.join("docs");
        if self.workspace.is_dir(&docs) {
            self.workspace.empty_dir(&docs)?;
        }
        Ok(())
    }

    fn acknowledge_remote(&mut self, session: &mut Session) -> Result<Flow> {
        self.prompter.acknowledge(&format!(
            "If you have not already created the repository \"/{}/{}\" on {}, do this now.",
            self.config.organization, session.project_name, self.config.host
        ))?;
        Ok(Flow::Continue)
    }

    fn init_repository(&mut self, session: &mut Session) -> Result<Flow> {
        let username = session
            .vcs_username
            .as_deref()
            .ok_or(SetupError::MissingAnswer { field: "username" })?;
        let remote = project_remote_url(
            username,
            &self.config.host,
            &self.config.organization,
            &session.project_name,
        );

        let dir = session.target_dir.as_path();
        self.vcs.init(dir)?;
        self.vcs.add_remote(dir, REMOTE_NAME, &remote)?;
        self.ui
            .complete(format!("Repository initialized with remote {REMOTE_NAME}."))?;
        Ok(Flow::Continue)
    }

    fn commit_and_push(&mut self, session: &mut Session) -> Result<Flow> {
        let name = self.prompter.text(
            "What is the name of the sandbox you are working in? (dev, july2017, etc.)",
            None,
        )?;
        let branch = sandbox_branch(&name);
        session.branch_name = Some(name);

        let dir = session.target_dir.as_path();
        self.vcs.create_branch(dir, &branch)?;
        self.vcs.stage_all(dir)?;
        self.vcs.commit(dir, INITIAL_COMMIT_MESSAGE)?;

        if self.config.push {
            self.ui
                .process(format!("Pushing {branch} to {}...", self.config.host))?;
            self.vcs.push(dir, REMOTE_NAME, &branch)?;
            self.ui.complete(format!("{} is updated.", self.config.host))?;
        } else {
            self.ui.info(format!(
                "Push is disabled; run `git push {REMOTE_NAME} {branch}` when you are ready."
            ))?;
        }
        Ok(Flow::Continue)
    }

    fn advise_ide(&mut self, session: &mut Session) -> Result<Flow> {
        let answer = self
            .prompter
            .menu("Which IDE are you using?", &Ide::menu())?;
        let choice = Ide::parse(&answer);

        match ide_guidance(&choice) {
            Guidance::Info(text) => self.ui.info(text)?,
            Guidance::Warning(text) => self.ui.warning(text)?,
        }
        session.ide = Some(choice);
        Ok(Flow::Continue)
    }

    fn editor_setup(&mut self, session: &mut Session) -> Result<Flow> {
        let answer = self
            .prompter
            .menu("Which editor are you using?", &Editor::menu())?;
        let choice = Editor::parse(&answer);

        match choice.known() {
            Some(Editor::Sublime) => self.ui.info(
                "Sublime Text does not have a CLI so you will have to open the editor manually.",
            )?,
            Some(editor) => {
                if let Some(command) = editor.launch_command() {
                    self.ui
                        .process(format!("Opening your project in {}...", editor.label()))?;
                    self.editor.launch(command, &session.target_dir)?;
                    self.ui
                        .complete(format!("Project opened in {}", editor.label()))?;
                }
            }
            None => {}
        }
        session.editor = Some(choice);
        Ok(Flow::Continue)
    }

    fn done(&mut self) -> Result<Flow> {
        self.ui.blank()?;
        self.ui.complete("Setup complete!")?;
        self.ui.complete(
            "Please remember to keep committing your work as you go and update the master branch when you go to production.",
        )?;
        Ok(Flow::Continue)
    }
}
