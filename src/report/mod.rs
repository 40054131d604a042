//! Report rendering and persistence
//!
//! This module provides:
//! - `ReportConfig` with the output path and formatting settings
//! - Plain-text rendering of the upgradable package list
//! - `ReportWriter`, which replaces the report file on every run

mod config;
mod writer;

pub use config::{
    ReportConfig, DEFAULT_BULLET, DEFAULT_TIMESTAMP_FORMAT, DEFAULT_TITLE, OUTPUT_FILE_NAME,
};
pub use writer::ReportWriter;

use crate::domain::UpgradablePackage;
use chrono::NaiveDateTime;

const SEPARATOR: &str = "----------------------------------------";
const UP_TO_DATE: &str = "Your system is up to date.";
const NO_PACKAGES: &str = "No packages found.";

/// Render the bullet list, one `<bullet> <name>: <transition>` line per package
///
/// An empty list renders as `No packages found.`
pub fn format_package_list(config: &ReportConfig, packages: &[UpgradablePackage]) -> String {
    if packages.is_empty() {
        return NO_PACKAGES.to_string();
    }
    packages
        .iter()
        .map(|pkg| format!("{} {}", config.bullet, pkg))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the full report text for a check performed at `now`
pub fn render_report(
    config: &ReportConfig,
    packages: &[UpgradablePackage],
    now: NaiveDateTime,
) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} - {}\n",
        config.title,
        now.format(&config.timestamp_format)
    ));
    out.push_str(SEPARATOR);
    out.push('\n');
    out.push_str(&format!("Upgradable packages: {}\n\n", packages.len()));

    if packages.is_empty() {
        out.push_str(UP_TO_DATE);
    } else {
        out.push_str("Details:\n");
        out.push_str(&format_package_list(config, packages));
    }
    out.push('\n');
    out
}
