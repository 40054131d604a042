//! Update check workflow
//!
//! This module handles the fixed sequence of a single run:
//! 1. Refresh the package index (`apt update`)
//! 2. List upgradable packages (`apt list --upgradable`)
//! 3. Parse the listing
//! 4. Write the report

use crate::command::{CommandExecutor, WslRunner};
use crate::domain::UpgradablePackage;
use crate::error::{AppError, CommandError};
use crate::parser::extract_upgradable_packages;
use crate::report::ReportWriter;
use std::path::PathBuf;

/// Command refreshing the package index
pub const REFRESH_COMMAND: &str = "apt update";
/// Command listing upgradable packages
pub const LIST_UPGRADABLE_COMMAND: &str = "apt list --upgradable";

/// Source of package manager output
pub trait PackageSource {
    /// Run a package manager command and return its output
    fn run(&self, command: &str) -> Result<String, CommandError>;
}

impl<E: CommandExecutor> PackageSource for WslRunner<E> {
    fn run(&self, command: &str) -> Result<String, CommandError> {
        WslRunner::run(self, command)
    }
}

/// Result of a completed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorOutcome {
    /// Upgradable packages found, in listing order
    pub packages: Vec<UpgradablePackage>,
    /// Path the report was written to
    pub report_path: PathBuf,
}

impl MonitorOutcome {
    /// Number of upgradable packages
    pub fn count(&self) -> usize {
        self.packages.len()
    }
}

/// Runs one update check and persists the report
pub struct Monitor<S> {
    source: S,
    writer: ReportWriter,
}

impl<S: PackageSource> Monitor<S> {
    /// Create a new monitor
    pub fn new(source: S, writer: ReportWriter) -> Self {
        Self { source, writer }
    }

    /// Run the check; nothing is written if a command fails
    pub fn run(&self) -> Result<MonitorOutcome, AppError> {
        self.source.run(REFRESH_COMMAND)?;
        let listing = self.source.run(LIST_UPGRADABLE_COMMAND)?;

        let packages = extract_upgradable_packages(&listing);
        tracing::info!(count = packages.len(), "parsed upgradable packages");

        let report_path = self.writer.write(&packages)?;
        Ok(MonitorOutcome {
            packages,
            report_path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::ReportConfig;
    use std::cell::RefCell;

    /// Source returning canned listings and recording the commands it was given
    struct StubSource {
        listing: String,
        fail_on: Option<&'static str>,
        commands: RefCell<Vec<String>>,
    }

    impl StubSource {
        fn new(listing: &str) -> Self {
            Self {
                listing: listing.to_string(),
                fail_on: None,
                commands: RefCell::new(Vec::new()),
            }
        }

        fn failing_on(command: &'static str) -> Self {
            Self {
                fail_on: Some(command),
                ..Self::new("")
            }
        }
    }

    impl PackageSource for StubSource {
        fn run(&self, command: &str) -> Result<String, CommandError> {
            self.commands.borrow_mut().push(command.to_string());
            if self.fail_on == Some(command) {
                return Err(CommandError::PasswordRequired);
            }
            if command == LIST_UPGRADABLE_COMMAND {
                Ok(self.listing.clone())
            } else {
                Ok("Reading package lists... Done\n".to_string())
            }
        }
    }

    #[test]
    fn test_run_sequence_and_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(ReportConfig::for_home(temp_dir.path()));
        let source = StubSource::new(
            "Listing...\npkgA/stable [upgradable from 1.0 to 1.1]\npkgB/stable [upgradable from 2.0 to 2.1]\n",
        );
        let monitor = Monitor::new(source, writer);

        let outcome = monitor.run().unwrap();
        assert_eq!(outcome.count(), 2);
        assert_eq!(outcome.report_path, temp_dir.path().join(".wsl-monitor"));
        assert_eq!(
            *monitor.source.commands.borrow(),
            vec!["apt update", "apt list --upgradable"]
        );

        let content = std::fs::read_to_string(&outcome.report_path).unwrap();
        assert!(content.contains("Upgradable packages: 2"));
        assert!(content.contains("• pkgA: 1.0 to 1.1"));
        assert!(content.contains("• pkgB: 2.0 to 2.1"));
    }

    #[test]
    fn test_refresh_failure_skips_listing_and_report() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(ReportConfig::for_home(temp_dir.path()));
        let monitor = Monitor::new(StubSource::failing_on(REFRESH_COMMAND), writer);

        let err = monitor.run().unwrap_err();
        assert!(matches!(err, AppError::Command(CommandError::PasswordRequired)));
        assert_eq!(monitor.source.commands.borrow().len(), 1);
        assert!(!temp_dir.path().join(".wsl-monitor").exists());
    }

    #[test]
    fn test_list_failure_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let writer = ReportWriter::new(ReportConfig::for_home(temp_dir.path()));
        let monitor = Monitor::new(StubSource::failing_on(LIST_UPGRADABLE_COMMAND), writer);

        assert!(monitor.run().is_err());
        assert!(!temp_dir.path().join(".wsl-monitor").exists());
    }
}
