use crate::KeygenError;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Stdio};

/// Captured output of a finished key generation process.
#[derive(Debug, Clone)]
pub struct CommandRunOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Locates and executes `ssh-keygen`.
///
/// Runs block until the process exits; there is no timeout.
#[derive(Debug, Clone)]
pub struct KeygenCommandRunner {
    executable: String,
}

impl Default for KeygenCommandRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl KeygenCommandRunner {
    pub fn new() -> Self {
        Self::with_executable(resolve_ssh_keygen_executable(
            std::env::var("SSH_KEYGEN_PATH").ok(),
        ))
    }

    pub fn with_executable(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    pub fn run<I, S>(&self, args: I) -> Result<CommandRunOutput, KeygenError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut cmd = Command::new(&self.executable);
        cmd.args(args);
        // A closed stdin makes interactive prompts (passphrase, overwrite) fail fast.
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        tracing::debug!(executable = %self.executable, "running key generation tool");

        let output = cmd.output().map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                KeygenError::ToolNotInstalled {
                    executable: self.executable.clone(),
                }
            } else {
                KeygenError::CommandFailed {
                    message: format!("failed to execute {}: {err}", self.executable),
                    exit_code: None,
                    stderr: String::new(),
                }
            }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if output.status.success() {
            return Ok(CommandRunOutput { stdout, stderr });
        }

        Err(classify_failed_command(
            output.status.code(),
            &stdout,
            &stderr,
        ))
    }
}

/// `SSH_KEYGEN_PATH` wins, then well-known install locations, then `$PATH`.
fn resolve_ssh_keygen_executable(env_value: Option<String>) -> String {
    if let Some(path) = env_value {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return trimmed.to_string();
        }
    }

    for candidate in [
        "/usr/bin/ssh-keygen",
        "/usr/local/bin/ssh-keygen",
        "/opt/homebrew/bin/ssh-keygen",
    ] {
        if Path::new(candidate).exists() {
            return candidate.to_string();
        }
    }

    "ssh-keygen".to_string()
}

fn classify_failed_command(exit_code: Option<i32>, stdout: &str, stderr: &str) -> KeygenError {
    KeygenError::CommandFailed {
        message: non_empty(
            stderr,
            stdout,
            &format!("key generation exited with status {exit_code:?}"),
        ),
        exit_code,
        stderr: stderr.to_string(),
    }
}

fn non_empty(primary: &str, secondary: &str, fallback: &str) -> String {
    if !primary.trim().is_empty() {
        primary.to_string()
    } else if !secondary.trim().is_empty() {
        secondary.to_string()
    } else {
        fallback.to_string()
    }
}
