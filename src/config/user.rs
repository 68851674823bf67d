use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetupError};

pub const DEFAULT_HOST: &str = "bitbucket.org";
pub const DEFAULT_ORGANIZATION: &str = "kineticgrowth";

/// User-level configuration loaded from `~/.config/kinetic-setup/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Host serving both the quick-start templates and the new repository.
    pub host: String,
    /// Owner of the repository created for the new project.
    pub organization: String,
    /// Pre-filled answer for the username prompt.
    pub username: Option<String>,
    /// Push the sandbox branch to `origin` after the initial commit.
    pub push: bool,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            organization: DEFAULT_ORGANIZATION.to_string(),
            username: None,
            push: true,
        }
    }
}

/// Get the path to the user config file.
fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("kinetic-setup").join("config.toml"))
}

/// Load user configuration from the platform config directory.
///
/// Falls back to the defaults when there is no config directory or no file.
pub fn load_user_config() -> Result<UserConfig> {
    match config_path() {
        Some(path) => load_config_file(&path),
        None => Ok(UserConfig::default()),
    }
}

/// Load user configuration from an explicit path.
///
/// Returns the defaults if the file does not exist, and `Err` if it exists
/// but cannot be read or parsed.
pub fn load_config_file(path: &Path) -> Result<UserConfig> {
    if !path.exists() {
        return Ok(UserConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| SetupError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| SetupError::ConfigParse {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
host = "git.example.com"
organization = "acme"
username = "alice"
push = false
"#;
        let config: UserConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.host, "git.example.com");
        assert_eq!(config.organization, "acme");
        assert_eq!(config.username.as_deref(), Some("alice"));
        assert!(!config.push);
    }

    #[test]
    fn parse_empty_config_uses_defaults() {
        let config: UserConfig = toml::from_str("").unwrap();
        assert_eq!(config, UserConfig::default());
        assert_eq!(config.host, "bitbucket.org");
        assert_eq!(config.organization, "kineticgrowth");
        assert!(config.push);
    }

    #[test]
    fn parse_partial_config_keeps_other_defaults() {
        let config: UserConfig = toml::from_str("username = \"bob\"").unwrap();
        assert_eq!(config.username.as_deref(), Some("bob"));
        assert_eq!(config.host, DEFAULT_HOST);
        assert!(config.push);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_file(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, UserConfig::default());
    }

    #[test]
    fn malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not valid [[ toml").unwrap();

        match load_config_file(&path) {
            Err(SetupError::ConfigParse { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected ConfigParse error, got: {other:?}"),
        }
    }

    #[test]
    fn load_user_config_succeeds_without_file() {
        let result = load_user_config();
        assert!(result.is_ok());
    }
}
