//! Runs apt commands inside a WSL distribution

use super::{CommandExecutor, ExecOutput, SystemExecutor};
use crate::error::CommandError;

/// The WSL front-end executable
pub const WSL_PROGRAM: &str = "wsl";

const SUDO_PASSWORD_MARKER: &str = "sudo: a password is required";
const DISTRIBUTION_NOT_FOUND_MARKERS: [&str; 2] = [
    "WSL distribution name not found",
    "There is no distribution with the supplied name",
];

/// Failure recognized in the output of a non-zero exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownFailure {
    /// sudo could not run without a password
    PasswordRequired,
    /// The target distribution does not exist
    DistributionNotFound,
}

/// Inspect captured output for failures that must abort the run
pub fn classify_failure(output: &str) -> Option<KnownFailure> {
    if output.contains(SUDO_PASSWORD_MARKER) {
        Some(KnownFailure::PasswordRequired)
    } else if DISTRIBUTION_NOT_FOUND_MARKERS
        .iter()
        .any(|marker| output.contains(marker))
    {
        Some(KnownFailure::DistributionNotFound)
    } else {
        None
    }
}

/// Build `wsl [-d <dist>] -e sudo -n <tokens...>` for a whitespace-separated command
pub fn build_wsl_args(distribution: Option<&str>, command: &str) -> Vec<String> {
    let mut argv = vec![WSL_PROGRAM.to_string()];
    if let Some(dist) = distribution {
        argv.push("-d".to_string());
        argv.push(dist.to_string());
    }
    argv.extend(["-e", "sudo", "-n"].map(String::from));
    argv.extend(command.split_whitespace().map(String::from));
    argv
}

/// Runner that executes commands in a WSL distribution with non-interactive sudo
#[derive(Debug)]
pub struct WslRunner<E = SystemExecutor> {
    executor: E,
    distribution: Option<String>,
}

impl WslRunner<SystemExecutor> {
    /// Create a runner that spawns real `wsl` processes
    pub fn system(distribution: Option<String>) -> Self {
        Self::new(SystemExecutor::new(), distribution)
    }
}

impl<E: CommandExecutor> WslRunner<E> {
    /// Create a runner; a blank distribution name selects the WSL default
    pub fn new(executor: E, distribution: Option<String>) -> Self {
        let distribution = distribution
            .map(|d| d.trim().to_string())
            .filter(|d| !d.is_empty());
        Self {
            executor,
            distribution,
        }
    }

    /// The target distribution, `None` for the WSL default
    pub fn distribution(&self) -> Option<&str> {
        self.distribution.as_deref()
    }

    /// Argument vector used for `command`
    pub fn build_args(&self, command: &str) -> Vec<String> {
        build_wsl_args(self.distribution(), command)
    }

    /// Run `command` and return its combined output
    ///
    /// Non-zero exits that are not recognized by [`classify_failure`] are logged
    /// and the captured output is still returned.
    pub fn run(&self, command: &str) -> Result<String, CommandError> {
        let argv = self.build_args(command);
        println!("Executing: {}", argv.join(" "));

        let ExecOutput { exit_code, output } = self.executor.execute(&argv)?;
        if exit_code == Some(0) {
            return Ok(output);
        }

        match classify_failure(&output) {
            Some(KnownFailure::PasswordRequired) => Err(CommandError::PasswordRequired),
            Some(KnownFailure::DistributionNotFound) => {
                let available = match self.distribution() {
                    Some(_) => self.available_distributions(),
                    None => Vec::new(),
                };
                Err(CommandError::distribution_not_found(
                    self.distribution(),
                    available,
                ))
            }
            None => {
                match exit_code {
                    Some(code) => tracing::warn!(
                        command,
                        code,
                        output = %output.trim_end(),
                        "command exited with non-zero status"
                    ),
                    None => tracing::warn!(
                        command,
                        output = %output.trim_end(),
                        "command was terminated by a signal"
                    ),
                }
                Ok(output)
            }
        }
    }

    /// Returns true if `wsl --status` runs and exits successfully
    pub fn is_available(&self) -> bool {
        let argv = [WSL_PROGRAM, "--status"].map(String::from);
        match self.executor.execute(&argv) {
            Ok(result) => result.success(),
            Err(e) => {
                tracing::debug!(error = %e, "wsl --status failed");
                false
            }
        }
    }

    /// Installed distributions reported by `wsl --list --quiet`, empty on failure
    pub fn available_distributions(&self) -> Vec<String> {
        let argv = [WSL_PROGRAM, "--list", "--quiet"].map(String::from);
        match self.executor.execute(&argv) {
            Ok(result) if result.success() => result
                .output
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from)
                .collect(),
            Ok(result) => {
                tracing::debug!(code = ?result.exit_code, "listing distributions failed");
                Vec::new()
            }
            Err(e) => {
                tracing::debug!(error = %e, "listing distributions failed");
                Vec::new()
            }
        }
    }
}
