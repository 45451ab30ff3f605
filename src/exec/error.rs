// ABOUTME: Error types for command execution.
// ABOUTME: Distinguishes exhausted retries from a shell that could not be spawned.

/// Terminal failures raised by the command runner.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Every attempt exited non-zero.
    #[error("command failed after {attempts} attempt(s) ({}): {command}", exit_label(.exit_code))]
    Failed {
        command: String,
        exit_code: Option<i32>,
        attempts: u32,
    },

    /// The host shell could not be started at all.
    #[error("failed to spawn `{command}`: {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },
}

impl CommandError {
    pub fn command(&self) -> &str {
        match self {
            CommandError::Failed { command, .. } | CommandError::Spawn { command, .. } => command,
        }
    }

    /// Attempts made before giving up. A spawn failure counts its single attempt.
    pub fn attempts(&self) -> u32 {
        match self {
            CommandError::Failed { attempts, .. } => *attempts,
            CommandError::Spawn { .. } => 1,
        }
    }
}

pub(crate) fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("last exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}
