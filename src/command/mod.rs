//! Command execution inside WSL
//!
//! This module provides:
//! - The `CommandExecutor` seam that spawns a program and captures its output
//! - `SystemExecutor`, which runs real processes with stderr merged into stdout
//! - `WslRunner`, which wraps apt commands in `wsl ... -e sudo -n` and
//!   classifies known failures

#[cfg(test)]
mod log_capture;
mod runner;

pub use runner::{build_wsl_args, classify_failure, KnownFailure, WslRunner, WSL_PROGRAM};

use crate::error::CommandError;
use std::io::{self, Read};
use std::process::{Command, Stdio};

/// Captured result of a finished subprocess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecOutput {
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Combined stdout and stderr text
    pub output: String,
}

impl ExecOutput {
    /// Create a new captured output
    pub fn new(exit_code: Option<i32>, output: impl Into<String>) -> Self {
        Self {
            exit_code,
            output: output.into(),
        }
    }

    /// Returns true if the process exited with code 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Trait for running a program given its full argument vector
pub trait CommandExecutor {
    /// Run `argv[0]` with the remaining arguments and wait for it to finish
    fn execute(&self, argv: &[String]) -> Result<ExecOutput, CommandError>;
}

/// Executor that spawns real processes
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    /// Create a new system executor
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, argv: &[String]) -> Result<ExecOutput, CommandError> {
        let command_line = argv.join(" ");
        let Some((program, args)) = argv.split_first() else {
            return Err(CommandError::from_io(
                command_line,
                io::Error::new(io::ErrorKind::InvalidInput, "empty command"),
            ));
        };

        // Both streams share one pipe so diagnostics stay interleaved with data
        let (mut reader, writer) =
            io::pipe().map_err(|e| CommandError::from_io(&command_line, e))?;
        let writer_err = writer
            .try_clone()
            .map_err(|e| CommandError::from_io(&command_line, e))?;

        let mut command = Command::new(program);
        command
            .args(args)
            .env("WSL_UTF8", "1")
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_err);

        let mut child = command
            .spawn()
            .map_err(|e| CommandError::spawn(program.as_str(), e))?;
        // The Command still owns the write ends; drop it or the read never sees EOF
        drop(command);

        let mut bytes = Vec::new();
        let read_result = reader.read_to_end(&mut bytes);
        let status = child
            .wait()
            .map_err(|e| CommandError::from_io(&command_line, e))?;
        read_result.map_err(|e| CommandError::from_io(&command_line, e))?;

        tracing::debug!(command = %command_line, code = ?status.code(), "command finished");

        Ok(ExecOutput::new(status.code(), decode_output(&bytes)))
    }
}

/// Decode captured bytes, dropping the NULs left over from UTF-16 output of wsl.exe
pub fn decode_output(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).replace('\0', "")
}
