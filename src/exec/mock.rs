use std::collections::HashMap;
use std::sync::Mutex;

use crate::exec::{CommandOutput, CommandRunner, ExecError};

/// Scripted response for one invocation shape
#[derive(Debug, Clone)]
enum Scripted {
    Output(CommandOutput),
    Failure { code: Option<i32>, stderr: String },
}

/// Mock command runner for testing without spawning processes
///
/// Responses are keyed by the full invocation shape (program followed by
/// its arguments). Every invocation is recorded so tests can assert which
/// commands were and were not issued.
#[derive(Debug, Default)]
pub struct MockRunner {
    responses: HashMap<Vec<String>, Scripted>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl MockRunner {
    /// Create a new empty mock runner
    pub fn new() -> Self {
        MockRunner {
            responses: HashMap::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Script a successful response with the given stdout bytes
    pub fn respond(&mut self, program: &str, args: &[&str], stdout: impl Into<Vec<u8>>) {
        self.responses.insert(
            Self::key(program, args),
            Scripted::Output(CommandOutput {
                stdout: stdout.into(),
                stderr: Vec::new(),
            }),
        );
    }

    /// Script a failure (non-zero exit) for the given invocation
    pub fn fail_on(&mut self, program: &str, args: &[&str], stderr: impl Into<String>) {
        self.responses.insert(
            Self::key(program, args),
            Scripted::Failure {
                code: Some(1),
                stderr: stderr.into(),
            },
        );
    }

    /// All invocations issued so far, program first
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    /// Whether an invocation with this shape was issued
    pub fn was_called(&self, program: &str, args: &[&str]) -> bool {
        let key = Self::key(program, args);
        self.calls.lock().unwrap().iter().any(|c| *c == key)
    }

    fn key(program: &str, args: &[&str]) -> Vec<String> {
        let mut key = Vec::with_capacity(args.len() + 1);
        key.push(program.to_string());
        key.extend(args.iter().map(|a| a.to_string()));
        key
    }
}

impl CommandRunner for MockRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        _stdin: Option<&[u8]>,
    ) -> Result<CommandOutput, ExecError> {
        let key = Self::key(program, args);
        self.calls.lock().unwrap().push(key.clone());

        match self.responses.get(&key) {
            Some(Scripted::Output(output)) => Ok(output.clone()),
            Some(Scripted::Failure { code, stderr }) => Err(ExecError::Failed {
                program: program.to_string(),
                code: *code,
                stderr: stderr.clone(),
            }),
            None => Err(ExecError::Failed {
                program: program.to_string(),
                code: None,
                stderr: format!("no scripted response for {:?}", key),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_runner_scripted_output() {
        let mut runner = MockRunner::new();
        runner.respond("git", &["rev-parse", "HEAD"], b"abc123\n".to_vec());

        let out = runner.run("git", &["rev-parse", "HEAD"], None).unwrap();
        assert_eq!(out.stdout_text(), "abc123\n");
    }

    #[test]
    fn test_mock_runner_scripted_failure() {
        let mut runner = MockRunner::new();
        runner.fail_on("git", &["status", "--porcelain"], "fatal: not a repo");

        let err = runner
            .run("git", &["status", "--porcelain"], None)
            .unwrap_err();
        assert!(err.to_string().contains("fatal: not a repo"));
    }

    #[test]
    fn test_mock_runner_records_calls() {
        let mut runner = MockRunner::new();
        runner.respond("git", &["diff"], b"".to_vec());

        runner.run("git", &["diff"], None).unwrap();

        assert!(runner.was_called("git", &["diff"]));
        assert!(!runner.was_called("git", &["rev-parse", "HEAD"]));
        assert_eq!(runner.calls().len(), 1);
    }

    #[test]
    fn test_mock_runner_unscripted_invocation_fails() {
        let runner = MockRunner::new();
        let result = runner.run("git", &["status", "--porcelain"], None);
        assert!(result.is_err());
    }
}
