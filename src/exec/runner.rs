// ABOUTME: Retrying command runner.
// ABOUTME: Repeats a shell command until it exits zero or the attempt budget runs out.

use super::error::{CommandError, exit_label};
use super::shell::{HostShell, ProcessOutput, Shell};
use crate::delay::{Delay, TokioDelay};
use crate::log::Logger;
use std::time::Duration;

/// Wait between failed attempts when none is configured.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// What to run and how often to try.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    command: String,
    max_attempts: u32,
    delay: Duration,
}

impl CommandSpec {
    /// A single-attempt spec with the default 5s delay.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            max_attempts: 1,
            delay: DEFAULT_RETRY_DELAY,
        }
    }

    /// Set the attempt budget. Values below 1 are raised to 1.
    pub fn attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Set the wait between failed attempts.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn retry_delay(&self) -> Duration {
        self.delay
    }
}

/// Output of the attempt that exited zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    /// Attempts used, including the successful one.
    pub attempts: u32,
}

/// Runs commands with retries, logging every attempt.
pub struct CommandRunner<S = HostShell, D = TokioDelay> {
    shell: S,
    delay: D,
    log: Logger,
}

impl CommandRunner {
    pub fn new(log: Logger) -> Self {
        Self::with_parts(HostShell::new(), TokioDelay, log)
    }
}

impl<S: Shell, D: Delay> CommandRunner<S, D> {
    pub fn with_parts(shell: S, delay: D, log: Logger) -> Self {
        Self { shell, delay, log }
    }

    /// Run `spec` until it exits zero.
    ///
    /// A zero exit returns immediately. A non-zero exit waits `spec.delay` and
    /// retries while attempts remain; after the last attempt the failure is returned.
    /// A shell that cannot be spawned fails at once without retrying.
    pub async fn execute(&self, spec: &CommandSpec) -> Result<CommandResult, CommandError> {
        let max = spec.max_attempts;
        let mut last_exit = None;

        for attempt in 1..=max {
            self.log.log(format!(
                "Running command (attempt {attempt}/{max}): {}",
                spec.command
            ));

            let output = self.shell.run(&spec.command).await.map_err(|source| {
                self.log
                    .log(format!("Failed to spawn command: {}: {source}", spec.command));
                CommandError::Spawn {
                    command: spec.command.clone(),
                    source,
                }
            })?;

            self.record_output(&output);

            if output.success() {
                tracing::debug!(command = %spec.command, attempt, "command succeeded");
                return Ok(CommandResult {
                    stdout: output.stdout,
                    stderr: output.stderr,
                    exit_code: 0,
                    attempts: attempt,
                });
            }

            last_exit = output.exit_code;
            self.log
                .log(format!("Command failed ({})", exit_label(&output.exit_code)));

            if attempt < max {
                self.log.log(format!("Retrying in {:?}...", spec.delay));
                self.delay.wait(spec.delay).await;
            }
        }

        tracing::warn!(command = %spec.command, attempts = max, "command exhausted retries");
        Err(CommandError::Failed {
            command: spec.command.clone(),
            exit_code: last_exit,
            attempts: max,
        })
    }

    fn record_output(&self, output: &ProcessOutput) {
        self.log.log(format!("STDOUT: {}", output.stdout.trim_end()));
        if !output.stderr.trim().is_empty() {
            self.log.log(format!("STDERR: {}", output.stderr.trim_end()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_defaults_to_single_attempt() {
        let spec = CommandSpec::new("docker-compose build");
        assert_eq!(spec.max_attempts(), 1);
        assert_eq!(spec.retry_delay(), Duration::from_secs(5));
    }

    #[test]
    fn zero_attempts_are_raised_to_one() {
        let spec = CommandSpec::new("true").attempts(0);
        assert_eq!(spec.max_attempts(), 1);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn runs_real_command_through_host_shell() {
        let (log, sink) = Logger::memory();
        let runner = CommandRunner::new(log);

        let result = runner
            .execute(&CommandSpec::new("echo deployed"))
            .await
            .unwrap();

        assert_eq!(result.exit_code, 0);
        assert_eq!(result.attempts, 1);
        assert_eq!(result.stdout.trim(), "deployed");
        assert!(sink.contains("Running command (attempt 1/1): echo deployed"));
        assert!(sink.contains("STDOUT: deployed"));
        assert!(!sink.contains("STDERR"));
    }
}
