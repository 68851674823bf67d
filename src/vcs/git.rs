use std::path::Path;
use std::process::{Command, Stdio};

use super::VersionControl;
use crate::error::{Result, SetupError};

/// Classify git stderr output into a user-friendly error message with
/// actionable suggestions for common failure modes.
fn classify_git_error(stderr: &str, host: &str) -> String {
    if stderr.contains("Authentication failed") || stderr.contains("could not read Username") {
        format!("authentication failed — check your username and password or app password\n\ngit output:\n{stderr}")
    } else if stderr.contains("Repository not found")
        || (stderr.contains("not found") && stderr.contains("repository"))
    {
        format!("repository not found — check that the repository exists and that you have access to it\n\ngit output:\n{stderr}")
    } else if stderr.contains("Host key verification failed") {
        format!("SSH host key verification failed — try: ssh-keyscan {host} >> ~/.ssh/known_hosts\n\ngit output:\n{stderr}")
    } else if stderr.contains("Could not resolve host") || stderr.contains("Connection refused") {
        format!(
            "network error — check your connection and the repository URL\n\ngit output:\n{stderr}"
        )
    } else if stderr.contains("Please tell me who you are") {
        format!("commit author unknown — set `git config --global user.name` and `user.email`\n\ngit output:\n{stderr}")
    } else {
        stderr.to_string()
    }
}

/// Runs the system `git` binary.
///
/// Using the binary rather than a library means the user's whole credential
/// stack (keychain, credential helpers, SSH agent) is picked up, and git can
/// ask for a password on the terminal when it needs one.
#[derive(Debug)]
pub struct GitCli {
    host: String,
}

impl GitCli {
    /// `host` is the repository host named in failure hints.
    pub fn new(host: impl Into<String>) -> Self {
        Self { host: host.into() }
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<()> {
        let command = format!("git {}", args.join(" "));

        let output = Command::new("git")
            .args(args)
            .current_dir(dir)
            .stdin(Stdio::inherit())
            .output()
            .map_err(|e| SetupError::Io {
                context: format!("running {command}"),
                source: e,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(SetupError::GitCommand {
                command,
                reason: classify_git_error(stderr.trim(), &self.host),
            });
        }

        Ok(())
    }
}

impl VersionControl for GitCli {
    fn check_available(&mut self) -> Result<()> {
        Command::new("git")
            .arg("--version")
            .output()
            .map(|_| ())
            .map_err(|_| SetupError::GitNotFound)
    }

    fn clone_into(&mut self, url: &str, dir: &Path) -> Result<()> {
        self.run(dir, &["clone", url, "."])
    }

    fn init(&mut self, dir: &Path) -> Result<()> {
        self.run(dir, &["init"])
    }

    fn add_remote(&mut self, dir: &Path, name: &str, url: &str) -> Result<()> {
        self.run(dir, &["remote", "add", name, url])
    }

    fn create_branch(&mut self, dir: &Path, branch: &str) -> Result<()> {
        self.run(dir, &["checkout", "-b", branch])
    }

    fn stage_all(&mut self, dir: &Path) -> Result<()> {
        self.run(dir, &["add", "."])
    }

    fn commit(&mut self, dir: &Path, message: &str) -> Result<()> {
        self.run(dir, &["commit", "-m", message])
    }

    fn push(&mut self, dir: &Path, remote: &str, branch: &str) -> Result<()> {
        self.run(dir, &["push", remote, branch])
    }
}
