//! Report file writer

use super::{render_report, ReportConfig};
use crate::domain::UpgradablePackage;
use crate::error::ReportError;
use chrono::{Local, NaiveDateTime};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes the report to the configured path, replacing previous content
#[derive(Debug, Clone)]
pub struct ReportWriter {
    config: ReportConfig,
}

impl ReportWriter {
    /// Create a new writer
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// The configured report path
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Write the report stamped with the current local time
    pub fn write(&self, packages: &[UpgradablePackage]) -> Result<PathBuf, ReportError> {
        self.write_at(packages, Local::now().naive_local())
    }

    /// Write the report stamped with `now`
    pub fn write_at(
        &self,
        packages: &[UpgradablePackage],
        now: NaiveDateTime,
    ) -> Result<PathBuf, ReportError> {
        let path = &self.config.path;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ReportError::create_dir(parent, e))?;
            }
        }

        let content = render_report(&self.config, packages, now);
        let file = File::create(path).map_err(|e| ReportError::write(path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ReportError::write(path, e))?;

        tracing::debug!(path = %path.display(), packages = packages.len(), "report written");
        Ok(path.clone())
    }
}
