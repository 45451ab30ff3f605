// ABOUTME: Host shell seam for running a single command attempt.
// ABOUTME: Output is captured in full, never streamed.

use async_trait::async_trait;
use std::collections::HashMap;
use std::process::Stdio;
use tokio::process::Command;

/// Captured result of one process run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs one command line to completion.
#[async_trait]
pub trait Shell: Send + Sync {
    async fn run(&self, command: &str) -> std::io::Result<ProcessOutput>;
}

/// Runs commands through `sh -c` (or `cmd /C` on Windows).
#[derive(Debug, Clone, Default)]
pub struct HostShell {
    env: HashMap<String, String>,
}

impl HostShell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extra environment variables set for every command.
    pub fn with_env(env: HashMap<String, String>) -> Self {
        Self { env }
    }

    fn command(command: &str) -> Command {
        if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        }
    }
}

#[async_trait]
impl Shell for HostShell {
    async fn run(&self, command: &str) -> std::io::Result<ProcessOutput> {
        tracing::debug!(command, "spawning shell");

        let output = Self::command(command)
            .envs(&self.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await?;

        Ok(ProcessOutput {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            exit_code: output.status.code(),
        })
    }
}
