use std::path::{Component, Path, PathBuf};

use crate::catalog::{Editor, Ide, MenuChoice, Product};
use crate::error::{Result, SetupError};

const PROJECT_SUFFIX: &str = "-implementation";

/// Everything collected or derived during one wizard run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub customer_name: String,
    pub project_name: String,
    pub target_dir: PathBuf,
    pub product: Option<Product>,
    pub vcs_username: Option<String>,
    pub branch_name: Option<String>,
    pub ide: Option<MenuChoice<Ide>>,
    pub editor: Option<MenuChoice<Editor>>,
}

impl Session {
    /// Start a session for `customer_name`, rooted in `cwd`.
    pub fn new(customer_name: &str, cwd: &Path) -> Result<Self> {
        if customer_name.trim().is_empty() {
            return Err(SetupError::InvalidCustomer);
        }

        let project_name = project_name(customer_name);
        if !is_single_directory_name(&project_name) {
            return Err(SetupError::InvalidProjectPath {
                customer: customer_name.to_string(),
                project: project_name,
            });
        }
        let target_dir = cwd.join(&project_name);

        Ok(Self {
            customer_name: customer_name.to_string(),
            project_name,
            target_dir,
            product: None,
            vcs_username: None,
            branch_name: None,
            ide: None,
            editor: None,
        })
    }

    pub fn repository_source(&self) -> Option<&'static str> {
        self.product.map(Product::repository)
    }

    /// `sandbox/<branch_name>`, once the branch name has been asked for.
    pub fn sandbox_branch(&self) -> Option<String> {
        self.branch_name.as_deref().map(sandbox_branch)
    }
}

/// Derive the project name from a customer name.
///
/// Only the first space (replaced by `-`) and the first `.` (dropped) are
/// touched; the result is lowercased and suffixed with `-implementation`.
pub fn project_name(customer_name: &str) -> String {
    let name = customer_name.replacen(' ', "-", 1).replacen('.', "", 1);
    format!("{}{PROJECT_SUFFIX}", name.to_lowercase())
}

/// True when `name` is exactly one plain path component, so joining it to a
/// directory stays directly inside that directory.
fn is_single_directory_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

pub fn sandbox_branch(branch_name: &str) -> String {
    format!("sandbox/{branch_name}")
}
