//! Report configuration

use crate::error::ConfigError;
use std::path::{Path, PathBuf};

/// Report file name inside the home directory
pub const OUTPUT_FILE_NAME: &str = ".wsl-monitor";
/// Default title label
pub const DEFAULT_TITLE: &str = "WSL Update Check";
/// Default timestamp pattern (`yyyy-MM-dd HH:mm:ss`)
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
/// Default bullet for package lines
pub const DEFAULT_BULLET: &str = "•";

/// Where and how the report is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Report file path
    pub path: PathBuf,
    /// Label on the title line
    pub title: String,
    /// chrono format string for the title timestamp
    pub timestamp_format: String,
    /// Bullet written in front of each package line
    pub bullet: String,
}

impl ReportConfig {
    /// Create a configuration with default formatting for `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            title: DEFAULT_TITLE.to_string(),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            bullet: DEFAULT_BULLET.to_string(),
        }
    }

    /// Configuration for `<home>/.wsl-monitor`
    pub fn for_home(home: &Path) -> Self {
        Self::new(home.join(OUTPUT_FILE_NAME))
    }

    /// Configuration for the current user's home directory
    pub fn from_env() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;
        Ok(Self::for_home(&home))
    }

    /// Sets the title label (builder pattern)
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the bullet (builder pattern)
    pub fn with_bullet(mut self, bullet: impl Into<String>) -> Self {
        self.bullet = bullet.into();
        self
    }
}
