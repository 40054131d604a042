//! CLI argument parsing module for wsl-monitor

use clap::Parser;

/// Check a WSL distribution for upgradable apt packages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "wsl-monitor",
    version,
    about = "Check a WSL distribution for upgradable apt packages"
)]
pub struct CliArgs {
    /// WSL distribution to check (default: the WSL default distribution)
    pub distribution: Option<String>,
}

impl CliArgs {
    /// Name shown in status output
    pub fn distribution_label(&self) -> &str {
        match self.distribution.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "default",
        }
    }
}
