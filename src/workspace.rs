use std::fs;
use std::path::Path;

use crate::error::{Result, SetupError};

/// Filesystem operations the wizard performs on the project directory.
pub trait Workspace {
    /// Make `dir` an existing, empty directory. Existing contents are deleted.
    fn empty_dir(&self, dir: &Path) -> Result<()>;

    /// Remove `dir` and everything below it. A missing directory is not an error.
    fn remove_dir(&self, dir: &Path) -> Result<()>;

    /// True only for a real directory; a symlink to one does not count.
    fn is_dir(&self, path: &Path) -> bool;
}

/// The local filesystem.
#[derive(Debug, Default)]
pub struct LocalWorkspace;

impl Workspace for LocalWorkspace {
    fn empty_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return fs::create_dir_all(dir).map_err(|e| SetupError::Io {
                context: format!("creating directory {}", dir.display()),
                source: e,
            });
        }

        let entries = fs::read_dir(dir).map_err(|e| SetupError::Io {
            context: format!("reading directory {}", dir.display()),
            source: e,
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| SetupError::Io {
                context: format!("reading directory {}", dir.display()),
                source: e,
            })?;
            let path = entry.path();
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let removed = if is_dir {
                fs::remove_dir_all(&path)
            } else {
                fs::remove_file(&path)
            };
            removed.map_err(|e| SetupError::Io {
                context: format!("removing {}", path.display()),
                source: e,
            })?;
        }

        Ok(())
    }

    fn remove_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            return Ok(());
        }
        fs::remove_dir_all(dir).map_err(|e| SetupError::Io {
            context: format!("removing directory {}", dir.display()),
            source: e,
        })
    }

    fn is_dir(&self, path: &Path) -> bool {
        fs::symlink_metadata(path)
            .map(|meta| meta.file_type().is_dir())
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dir_creates_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("a/b/project");

        LocalWorkspace.empty_dir(&target).unwrap();

        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn empty_dir_wipes_existing_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let target = tmp.path().join("project");
        fs::create_dir_all(target.join("nested/deeper")).unwrap();
        fs::write(target.join("file.txt"), "old").unwrap();
        fs::write(target.join("nested/deeper/inner.txt"), "old").unwrap();
        fs::write(target.join(".hidden"), "old").unwrap();

        LocalWorkspace.empty_dir(&target).unwrap();

        assert!(target.is_dir());
        assert_eq!(fs::read_dir(&target).unwrap().count(), 0);
    }

    #[test]
    fn remove_dir_deletes_tree() {
        let tmp = tempfile::tempdir().unwrap();
        let git_dir = tmp.path().join(".git");
        fs::create_dir_all(git_dir.join("objects")).unwrap();
        fs::write(git_dir.join("HEAD"), "ref: refs/heads/main\n").unwrap();

        LocalWorkspace.remove_dir(&git_dir).unwrap();

        assert!(!git_dir.exists());
        assert!(tmp.path().exists());
    }

    #[test]
    fn remove_missing_dir_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(LocalWorkspace.remove_dir(&tmp.path().join("nope")).is_ok());
    }

    #[test]
    fn is_dir_distinguishes_files() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("docs");
        fs::write(&file, "not a dir").unwrap();

        assert!(LocalWorkspace.is_dir(tmp.path()));
        assert!(!LocalWorkspace.is_dir(&file));
    }

    #[cfg(unix)]
    #[test]
    fn is_dir_does_not_follow_symlinks() {
        let tmp = tempfile::tempdir().unwrap();
        let real = tmp.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = tmp.path().join("docs");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        assert!(LocalWorkspace.is_dir(&real));
        assert!(!LocalWorkspace.is_dir(&link));
        assert!(!LocalWorkspace.is_dir(&tmp.path().join("missing")));
    }
}
