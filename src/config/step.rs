// ABOUTME: Command step and health check settings for a single phase.
// ABOUTME: Unset budgets fall back to the per-phase defaults when the plan is built.

use serde::Deserialize;
use std::time::Duration;

use crate::exec::{CommandSpec, DEFAULT_RETRY_DELAY};
use crate::probe::{DEFAULT_PROBE_ATTEMPTS, DEFAULT_PROBE_TIMEOUT, DEFAULT_PROBE_WAIT, ProbeSpec};

use super::deserialize::deserialize_endpoints;
use nonempty::NonEmpty;

/// One shell command with an optional retry budget.
///
/// Accepts either a bare string or a mapping with `command`, `attempts` and `delay`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "StepEntry")]
pub struct CommandStep {
    pub command: String,
    pub attempts: Option<u32>,
    pub delay: Option<Duration>,
}

impl CommandStep {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            attempts: None,
            delay: None,
        }
    }

    /// Build the runner spec, using `default_attempts` when none was configured.
    pub fn to_spec(&self, default_attempts: u32) -> CommandSpec {
        CommandSpec::new(self.command.clone())
            .attempts(self.attempts.unwrap_or(default_attempts))
            .delay(self.delay.unwrap_or(DEFAULT_RETRY_DELAY))
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StepEntry {
    Simple(String),
    Detailed {
        command: String,
        #[serde(default)]
        attempts: Option<u32>,
        #[serde(default, with = "humantime_serde")]
        delay: Option<Duration>,
    },
}

impl From<StepEntry> for CommandStep {
    fn from(entry: StepEntry) -> Self {
        match entry {
            StepEntry::Simple(command) => CommandStep::new(command),
            StepEntry::Detailed {
                command,
                attempts,
                delay,
            } => CommandStep {
                command,
                attempts,
                delay,
            },
        }
    }
}

/// Health endpoints polled during service verification.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct VerifyConfig {
    #[serde(
        default = "default_endpoints",
        deserialize_with = "deserialize_endpoints"
    )]
    pub endpoints: NonEmpty<String>,

    #[serde(default = "default_probe_attempts")]
    pub attempts: u32,

    #[serde(default = "default_wait", with = "humantime_serde")]
    pub wait: Duration,

    #[serde(default = "default_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

impl VerifyConfig {
    pub fn to_specs(&self) -> NonEmpty<ProbeSpec> {
        self.endpoints.clone().map(|url| {
            ProbeSpec::new(url)
                .attempts(self.attempts)
                .wait(self.wait)
                .timeout(self.timeout)
        })
    }
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            endpoints: default_endpoints(),
            attempts: default_probe_attempts(),
            wait: default_wait(),
            timeout: default_timeout(),
        }
    }
}

fn default_endpoints() -> NonEmpty<String> {
    NonEmpty {
        head: "http://localhost:6333/health".to_string(),
        tail: vec!["http://localhost:11434".to_string()],
    }
}

fn default_probe_attempts() -> u32 {
    DEFAULT_PROBE_ATTEMPTS
}

fn default_wait() -> Duration {
    DEFAULT_PROBE_WAIT
}

fn default_timeout() -> Duration {
    DEFAULT_PROBE_TIMEOUT
}
