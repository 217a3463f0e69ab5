//! Shell command runner.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;

use crate::error::CommandError;

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub command: String,
    pub working_dir: PathBuf,
    /// Exit code, `None` if the process was terminated by a signal.
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }

    /// Human-readable exit status.
    pub fn status_label(&self) -> String {
        match self.status {
            Some(code) => format!("exit code {code}"),
            None => "termination by signal".into(),
        }
    }

    /// Converts a non-zero exit into [`CommandError::Failed`].
    pub fn into_result(self) -> Result<Self, CommandError> {
        if self.success() {
            Ok(self)
        } else {
            Err(CommandError::Failed {
                status: self.status_label(),
                command: self.command,
                stderr: self.stderr,
            })
        }
    }
}

/// Runs `command` through the platform shell inside `working_dir` and waits
/// for it to exit.
///
/// Stdin is closed; stdout and stderr are captured as lossy UTF-8. A
/// non-zero exit is returned as a normal [`CommandOutput`].
pub async fn run_in_dir(command: &str, working_dir: &Path) -> Result<CommandOutput, CommandError> {
    if !working_dir.is_dir() {
        return Err(CommandError::MissingWorkingDir(working_dir.to_path_buf()));
    }

    tracing::info!(command, dir = %working_dir.display(), "running command");

    let output = shell(command)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .output()
        .await
        .map_err(|source| CommandError::Spawn {
            command: command.to_string(),
            source,
        })?;

    let result = CommandOutput {
        command: command.to_string(),
        working_dir: working_dir.to_path_buf(),
        status: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    };

    tracing::debug!(command, status = ?result.status, "command finished");
    Ok(result)
}

/// Logs captured stdout at info and stderr at warn, one event per line.
pub fn log_output(output: &CommandOutput) {
    for line in output.stdout.lines().filter(|l| !l.trim().is_empty()) {
        tracing::info!(target: "droidship::stdout", "{line}");
    }
    for line in output.stderr.lines().filter(|l| !l.trim().is_empty()) {
        tracing::warn!(target: "droidship::stderr", "{line}");
    }
}

#[cfg(windows)]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", command]);
    cmd
}

#[cfg(not(windows))]
fn shell(command: &str) -> Command {
    let mut cmd = Command::new("sh");
    cmd.args(["-c", command]);
    cmd
}
