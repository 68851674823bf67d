#![allow(unused_assignments)]

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SetupError {
    #[error("Customer name must not be empty")]
    #[diagnostic(help("Pass the customer name as the first argument, e.g. kinetic-setup \"Acme Co.\""))]
    InvalidCustomer,

    #[error("Customer name '{customer}' does not give a directory name inside the current directory")]
    #[diagnostic(help(
        "Leave out '/', '\\' and '..' so the project is created as one directory under the current one"
    ))]
    InvalidProjectPath { customer: String, project: String },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Prompt cancelled by user")]
    PromptCancelled,

    #[error("No answer left for prompt: {prompt}")]
    PromptExhausted { prompt: String },

    #[error("Step ran before the {field} was answered")]
    MissingAnswer { field: &'static str },

    #[error("No template repository selected")]
    #[diagnostic(help("Choose one of the listed products before cloning"))]
    MissingTemplate,

    #[error("git is not installed or not on PATH")]
    #[diagnostic(help("Install git and make sure the `git` command is available"))]
    GitNotFound,

    #[error("`{command}` failed: {reason}")]
    #[diagnostic(help(
        "The project directory may be partially set up; remove it and run the wizard again"
    ))]
    GitCommand { command: String, reason: String },

    #[error("Failed to open the project in {editor}: {reason}")]
    #[diagnostic(help("Open the project directory in your editor manually"))]
    EditorLaunch { editor: String, reason: String },

    #[error("Failed to parse config file {path}")]
    #[diagnostic(help("Check the TOML syntax in your kinetic-setup config.toml"))]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, SetupError>;
