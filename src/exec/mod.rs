//! Command execution abstraction layer
//!
//! This module provides a trait-based abstraction over external command
//! execution, allowing for multiple implementations including real process
//! spawning and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [CommandRunner] trait, which defines the
//! single operation the taggers need: run a program with arguments and
//! capture its output. The concrete implementations include:
//!
//! - [system::SystemRunner]: A real implementation using `std::process::Command`
//! - [mock::MockRunner]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [CommandRunner] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod mock;
pub mod system;

pub use mock::MockRunner;
pub use system::SystemRunner;

use thiserror::Error;

/// Captured output of a finished command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Raw bytes written to standard output
    pub stdout: Vec<u8>,
    /// Raw bytes written to standard error
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    /// Interpret stdout as UTF-8, replacing invalid sequences
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }
}

/// Errors from running an external command
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to start '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("'{program}' failed with exit code {code:?}: {stderr}")]
    Failed {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}

/// Common command execution trait for abstraction
///
/// This trait abstracts external command execution to allow for multiple
/// implementations including real process spawning and mock implementations
/// for testing.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// A command that cannot be started or that exits non-zero is an [ExecError];
/// callers wrap it into the stage-specific [crate::error::TagError] variant.
///
/// ## Implementations
///
/// - [SystemRunner](system::SystemRunner): Real implementation spawning child processes
/// - [MockRunner](mock::MockRunner): Test implementation returning scripted outputs
pub trait CommandRunner: Send + Sync {
    /// Run a program with arguments and capture its output
    ///
    /// Blocks until the child exits. Standard output and standard error are
    /// captured separately. If `stdin` is given, the bytes are piped to the
    /// child's standard input before waiting.
    ///
    /// # Arguments
    /// * `program` - Name or path of the executable
    /// * `args` - Argument list, one entry per argument
    /// * `stdin` - Optional bytes to feed to the child's standard input
    ///
    /// # Returns
    /// * `Ok(CommandOutput)` - The child exited with status zero
    /// * `Err(ExecError)` - The child could not be started, or exited non-zero
    fn run(
        &self,
        program: &str,
        args: &[&str],
        stdin: Option<&[u8]>,
    ) -> std::result::Result<CommandOutput, ExecError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_output_stdout_text() {
        let out = CommandOutput {
            stdout: b"abc123\n".to_vec(),
            stderr: Vec::new(),
        };
        assert_eq!(out.stdout_text(), "abc123\n");
    }

    #[test]
    fn test_command_output_stdout_text_lossy() {
        let out = CommandOutput {
            stdout: vec![0xff, 0xfe],
            stderr: Vec::new(),
        };
        // Invalid UTF-8 is replaced rather than panicking
        assert!(!out.stdout_text().is_empty());
    }

    #[test]
    fn test_exec_error_display() {
        let err = ExecError::Failed {
            program: "git".to_string(),
            code: Some(1),
            stderr: "boom".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("git"));
        assert!(msg.contains("boom"));
    }
}
