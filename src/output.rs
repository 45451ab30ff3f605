// ABOUTME: Output formatting for CLI feedback.
// ABOUTME: Supports normal, quiet (CI), and JSON output modes.

use serde::Serialize;
use std::time::Instant;

use crate::deploy::DeploymentOutcome;

/// Output mode for CLI feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-friendly output; the deployment log is mirrored to the console
    Normal,
    /// Minimal output for CI (only final result)
    Quiet,
    /// JSON lines for scripting
    Json,
}

/// Handles CLI output based on the configured mode.
pub struct Output {
    mode: OutputMode,
    start_time: Option<Instant>,
}

impl Output {
    pub fn new(mode: OutputMode) -> Self {
        Self {
            mode,
            start_time: None,
        }
    }

    /// Whether deployment log lines should also go to the console.
    pub fn mirrors_log(&self) -> bool {
        self.mode == OutputMode::Normal
    }

    /// Start timing an operation.
    pub fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Get elapsed time since timer started.
    pub fn elapsed_secs(&self) -> f64 {
        self.start_time
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0)
    }

    fn duration(&self) -> Option<f64> {
        self.start_time.map(|_| self.elapsed_secs())
    }

    /// Print a result line that every non-JSON mode shows.
    pub fn line(&self, message: &str) {
        if self.mode != OutputMode::Json {
            println!("{message}");
        }
    }

    /// Emit an arbitrary JSON document (JSON mode only).
    pub fn json<T: Serialize>(&self, value: &T) {
        if self.mode == OutputMode::Json
            && let Ok(json) = serde_json::to_string(value)
        {
            println!("{json}");
        }
    }

    /// Print a success message with optional timing.
    pub fn success(&self, message: &str) {
        match self.mode {
            OutputMode::Normal => match self.duration() {
                Some(elapsed) => println!("{message} ({elapsed:.1}s)"),
                None => println!("{message}"),
            },
            OutputMode::Quiet => println!("{message}"),
            OutputMode::Json => self.event("success", message, None),
        }
    }

    /// Print an error message.
    pub fn error(&self, message: &str) {
        match self.mode {
            OutputMode::Normal | OutputMode::Quiet => eprintln!("Error: {message}"),
            OutputMode::Json => {
                let event = JsonEvent {
                    event: "error",
                    message,
                    duration_secs: self.duration(),
                    outcome: None,
                };
                if let Ok(json) = serde_json::to_string(&event) {
                    eprintln!("{json}");
                }
            }
        }
    }

    /// Report the terminal outcome of a deployment run.
    pub fn outcome(&self, outcome: &DeploymentOutcome) {
        let message = match outcome {
            DeploymentOutcome::Success => "Deployment complete!".to_string(),
            DeploymentOutcome::Failure { phase, error, .. } => {
                format!("Deployment failed during {phase}: {error}")
            }
        };

        match (self.mode, outcome.is_success()) {
            (OutputMode::Json, success) => {
                let event = if success { "success" } else { "failure" };
                self.event(event, &message, Some(outcome));
            }
            (_, true) => self.success(&message),
            // Normal mode mirrors the orchestrator's failure line from the deployment log.
            (OutputMode::Quiet, false) => eprintln!("{message}"),
            (OutputMode::Normal, false) => {}
        }
    }

    fn event(&self, event: &str, message: &str, outcome: Option<&DeploymentOutcome>) {
        let event = JsonEvent {
            event,
            message,
            duration_secs: self.duration(),
            outcome,
        };
        if let Ok(json) = serde_json::to_string(&event) {
            println!("{json}");
        }
    }
}

#[derive(Serialize)]
struct JsonEvent<'a> {
    event: &'a str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    duration_secs: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'a DeploymentOutcome>,
}
