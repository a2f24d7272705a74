use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::exec::{CommandOutput, CommandRunner, ExecError};

/// Real command runner that spawns child processes
///
/// Commands run in the current working directory unless one is set with
/// [SystemRunner::in_dir]. No timeout is imposed; a hanging child blocks
/// the caller.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner {
    working_dir: Option<PathBuf>,
}

impl SystemRunner {
    /// Create a runner that executes in the current working directory
    pub fn new() -> Self {
        SystemRunner { working_dir: None }
    }

    /// Create a runner that executes in the given directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        SystemRunner {
            working_dir: Some(dir.into()),
        }
    }
}

impl CommandRunner for SystemRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        stdin: Option<&[u8]>,
    ) -> Result<CommandOutput, ExecError> {
        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(if stdin.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        let mut child = cmd.spawn().map_err(|e| ExecError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

        if let Some(input) = stdin {
            // Take the handle so it is closed before waiting, otherwise the
            // child may block reading an open pipe.
            if let Some(mut pipe) = child.stdin.take() {
                pipe.write_all(input).map_err(|e| ExecError::Spawn {
                    program: program.to_string(),
                    source: e,
                })?;
            }
        }

        let output = child.wait_with_output().map_err(|e| ExecError::Spawn {
            program: program.to_string(),
            source: e,
        })?;

        if !output.status.success() {
            return Err(ExecError::Failed {
                program: program.to_string(),
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(CommandOutput {
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
