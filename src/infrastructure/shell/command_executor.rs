//! Command executor for running external programs
//!
//! Toolchain detection goes through [`CommandExecutor`] so it can be tested
//! without spawning real processes.

use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

use crate::core::{Error, Result};

/// Trait for executing external commands
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` with `args` to completion, capturing its output
    async fn run(&self, command: &str, args: &[String]) -> Result<CommandOutput>;
}

/// Result of command execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Check if the command was successful
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Default command executor using tokio::process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessCommandExecutor;

impl ProcessCommandExecutor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for ProcessCommandExecutor {
    async fn run(&self, command: &str, args: &[String]) -> Result<CommandOutput> {
        let output = Command::new(command)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| Error::ProcessStart {
                command: command.to_string(),
                message: e.to_string(),
            })?;

        Ok(CommandOutput {
            // Killed by a signal
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Mock command executor for testing
#[cfg(test)]
pub struct MockCommandExecutor {
    pub results: std::collections::HashMap<String, CommandOutput>,
    pub calls: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl MockCommandExecutor {
    pub fn new() -> Self {
        Self {
            results: std::collections::HashMap::new(),
            calls: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Respond to `command_line` (command and args joined by spaces)
    pub fn with_result(
        mut self,
        command_line: &str,
        exit_code: i32,
        stdout: &str,
        stderr: &str,
    ) -> Self {
        self.results.insert(
            command_line.to_string(),
            CommandOutput {
                exit_code,
                stdout: stdout.to_string(),
                stderr: stderr.to_string(),
            },
        );
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl CommandExecutor for MockCommandExecutor {
    async fn run(&self, command: &str, args: &[String]) -> Result<CommandOutput> {
        let command_line = std::iter::once(command.to_string())
            .chain(args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");
        self.calls.lock().unwrap().push(command_line.clone());

        // Unknown commands behave like a missing binary
        self.results
            .get(&command_line)
            .cloned()
            .ok_or_else(|| Error::ProcessStart {
                command: command.to_string(),
                message: "No such file or directory (os error 2)".to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_executor_success() {
        let executor = ProcessCommandExecutor::new();

        let result = executor
            .run("echo", &["hello".to_string()])
            .await
            .unwrap();

        assert!(result.is_success());
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("hello"));
        assert!(result.stderr.is_empty());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_process_executor_failure() {
        let executor = ProcessCommandExecutor::new();

        let result = executor
            .run("sh", &["-c".to_string(), "exit 3".to_string()])
            .await
            .unwrap();

        assert!(!result.is_success());
        assert_eq!(result.exit_code, 3);
    }

    #[tokio::test]
    async fn test_process_executor_missing_binary() {
        let executor = ProcessCommandExecutor::new();

        let result = executor
            .run("definitely-not-a-real-toolchain-binary", &[])
            .await;

        match result {
            Err(Error::ProcessStart { command, .. }) => {
                assert_eq!(command, "definitely-not-a-real-toolchain-binary");
            }
            other => panic!("Expected ProcessStart error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_mock_command_executor() {
        let executor = MockCommandExecutor::new()
            .with_result("test1", 0, "output1", "")
            .with_result("test2 --flag", 1, "", "error");

        let result1 = executor.run("test1", &[]).await.unwrap();
        assert!(result1.is_success());
        assert_eq!(result1.stdout, "output1");

        let result2 = executor.run("test2", &["--flag".to_string()]).await.unwrap();
        assert!(!result2.is_success());
        assert_eq!(result2.stderr, "error");

        assert!(executor.run("test3", &[]).await.is_err());
        assert_eq!(executor.call_count(), 3);
    }
}
