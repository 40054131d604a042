//! wsl-monitor - apt update checker for WSL distributions
//!
//! This library provides the pieces of a single update check:
//! - Running apt inside WSL with non-interactive sudo
//! - Parsing `apt list --upgradable` output
//! - Writing a timestamped report to `~/.wsl-monitor`

pub mod cli;
pub mod command;
pub mod domain;
pub mod error;
pub mod monitor;
pub mod parser;
pub mod report;
