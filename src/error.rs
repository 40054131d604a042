//! Application error types using thiserror
//!
//! Error hierarchy:
//! - CommandError: Failures running commands inside WSL
//! - ReportError: Failures writing the report file
//! - ConfigError: Issues resolving the runtime configuration

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Command execution related errors
    #[error(transparent)]
    Command(#[from] CommandError),

    /// Report writing related errors
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while running a command through `wsl`
#[derive(Error, Debug)]
pub enum CommandError {
    /// The program could not be started
    #[error("failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The blocking wait for the subprocess was interrupted
    #[error("command execution was interrupted: {command}")]
    Interrupted {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Capturing output or waiting for the subprocess failed
    #[error("failed to run '{command}'")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// sudo asked for a password
    #[error(
        "passwordless sudo is not configured in WSL; allow the user to run apt \
         without a password (e.g. a NOPASSWD entry in /etc/sudoers.d)"
    )]
    PasswordRequired,

    /// The requested (or default) distribution does not exist
    #[error("{}", distribution_not_found_message(.name.as_deref(), .available))]
    DistributionNotFound {
        name: Option<String>,
        available: Vec<String>,
    },
}

fn distribution_not_found_message(name: Option<&str>, available: &[String]) -> String {
    match name {
        Some(name) => {
            let mut msg = format!(
                "WSL distribution '{}' not found. Please check the distribution name.",
                name
            );
            if !available.is_empty() {
                msg.push_str(&format!(" Available distributions: {}", available.join(", ")));
            }
            msg
        }
        None => {
            "Default WSL distribution not found. Please make sure WSL is properly installed."
                .to_string()
        }
    }
}

/// Errors related to writing the report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Parent directory could not be created
    #[error("failed to create directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file could not be written
    #[error("failed to write report {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Home directory could not be determined
    #[error("could not determine the home directory for the report file")]
    HomeDirNotFound,
}

impl CommandError {
    /// Creates a new Spawn error
    pub fn spawn(program: impl Into<String>, source: std::io::Error) -> Self {
        CommandError::Spawn {
            program: program.into(),
            source,
        }
    }

    /// Maps an I/O failure during a run, keeping interruptions distinct
    pub fn from_io(command: impl Into<String>, source: std::io::Error) -> Self {
        let command = command.into();
        if source.kind() == std::io::ErrorKind::Interrupted {
            CommandError::Interrupted { command, source }
        } else {
            CommandError::Io { command, source }
        }
    }

    /// Creates a new DistributionNotFound error
    pub fn distribution_not_found(name: Option<&str>, available: Vec<String>) -> Self {
        CommandError::DistributionNotFound {
            name: name.map(str::to_string),
            available,
        }
    }
}

impl ReportError {
    /// Creates a new CreateDir error
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReportError::Write {
            path: path.into(),
            source,
        }
    }
}
