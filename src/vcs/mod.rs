mod git;

pub use git::GitCli;

use std::path::Path;

use crate::error::Result;

pub const REMOTE_NAME: &str = "origin";
pub const INITIAL_COMMIT_MESSAGE: &str = "Initial Setup";

/// Version-control operations, each run inside a working directory.
pub trait VersionControl {
    /// Fail early when the tool is not installed.
    fn check_available(&mut self) -> Result<()>;

    /// Clone `url` directly into `dir`, which must be empty.
    fn clone_into(&mut self, url: &str, dir: &Path) -> Result<()>;

    fn init(&mut self, dir: &Path) -> Result<()>;

    fn add_remote(&mut self, dir: &Path, name: &str, url: &str) -> Result<()>;

    /// Create `branch` and switch to it.
    fn create_branch(&mut self, dir: &Path, branch: &str) -> Result<()>;

    fn stage_all(&mut self, dir: &Path) -> Result<()>;

    fn commit(&mut self, dir: &Path, message: &str) -> Result<()>;

    fn push(&mut self, dir: &Path, remote: &str, branch: &str) -> Result<()>;
}

/// `https://<username>@<host><path>`, where `path` starts with `/`.
pub fn authenticated_url(username: &str, host: &str, path: &str) -> String {
    format!("https://{username}@{host}{path}")
}

/// URL of the repository that will hold the new project.
pub fn project_remote_url(username: &str, host: &str, organization: &str, project: &str) -> String {
    authenticated_url(username, host, &format!("/{organization}/{project}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_url_embeds_username_and_locator() {
        assert_eq!(
            authenticated_url("alice", "bitbucket.org", "/kineticgrowth/venue-quickstart.git"),
            "https://alice@bitbucket.org/kineticgrowth/venue-quickstart.git"
        );
    }

    #[test]
    fn remote_url_points_at_organization() {
        assert_eq!(
            project_remote_url(
                "alice",
                "bitbucket.org",
                "kineticgrowth",
                "acme-co-implementation"
            ),
            "https://alice@bitbucket.org/kineticgrowth/acme-co-implementation"
        );
    }
}
