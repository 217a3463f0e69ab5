//! Error types for command invocation.

use std::path::PathBuf;

/// Errors produced while invoking an external command.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("working directory does not exist: {}", .0.display())]
    MissingWorkingDir(PathBuf),

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}{}", stderr_suffix(.stderr))]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },
}

fn stderr_suffix(stderr: &str) -> String {
    let trimmed = stderr.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        format!(": {trimmed}")
    }
}
