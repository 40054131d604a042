//! wsl-monitor - apt update checker for WSL distributions
//!
//! Runs `apt update` and `apt list --upgradable` inside WSL and writes the
//! upgradable packages to `~/.wsl-monitor`.

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use wsl_monitor::cli::CliArgs;
use wsl_monitor::command::WslRunner;
use wsl_monitor::monitor::Monitor;
use wsl_monitor::report::{ReportConfig, ReportWriter};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "Error:".red().bold(), e);
            for cause in e.chain().skip(1) {
                eprintln!("  caused by: {}", cause);
            }
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = ReportConfig::from_env()?;

    println!(
        "Starting WSL Monitor for distribution: {}",
        args.distribution_label().bold()
    );
    println!("Results will be written to: {}", config.path.display());

    let runner = WslRunner::system(args.distribution);
    if !runner.is_available() {
        tracing::warn!("`wsl --status` failed; WSL may not be installed or enabled");
    }
    let monitor = Monitor::new(runner, ReportWriter::new(config));
    let outcome = monitor.run()?;

    println!(
        "{} Found {} upgradable packages.",
        "WSL update check completed.".green(),
        outcome.count()
    );
    Ok(())
}
