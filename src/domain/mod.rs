//! Core domain models for wsl-monitor
//!
//! This module contains the types shared between the runner, parser and report:
//! - Upgradable package entries parsed from apt output

mod package;

pub use package::UpgradablePackage;
