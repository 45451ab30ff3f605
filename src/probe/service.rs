// ABOUTME: Polls a health endpoint until it answers 2xx or the budget runs out.
// ABOUTME: Failed attempts are logged, never raised, until the last one.

use super::client::{HttpClient, ReqwestClient};
use super::error::ProbeError;
use crate::delay::{Delay, TokioDelay};
use crate::error::Result;
use crate::log::Logger;
use std::time::Duration;

pub const DEFAULT_PROBE_ATTEMPTS: u32 = 5;
pub const DEFAULT_PROBE_WAIT: Duration = Duration::from_secs(3);
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Target and budget for one verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSpec {
    url: String,
    max_attempts: u32,
    wait: Duration,
    timeout: Duration,
}

impl ProbeSpec {
    /// Five attempts, 3s apart, each with a 5s timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_attempts: DEFAULT_PROBE_ATTEMPTS,
            wait: DEFAULT_PROBE_WAIT,
            timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    /// Set the attempt budget. Values below 1 are raised to 1.
    pub fn attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    pub fn wait(mut self, wait: Duration) -> Self {
        self.wait = wait;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn poll_interval(&self) -> Duration {
        self.wait
    }

    pub fn request_timeout(&self) -> Duration {
        self.timeout
    }
}

pub struct ServiceProbe<C = ReqwestClient, D = TokioDelay> {
    client: C,
    delay: D,
    log: Logger,
}

impl ServiceProbe {
    pub fn new(log: Logger) -> Result<Self> {
        Ok(Self::with_parts(ReqwestClient::new()?, TokioDelay, log))
    }
}

impl<C: HttpClient, D: Delay> ServiceProbe<C, D> {
    pub fn with_parts(client: C, delay: D, log: Logger) -> Self {
        Self { client, delay, log }
    }

    /// Poll `spec.url` until it answers 2xx.
    ///
    /// Returns `true` on the first successful response. Non-2xx statuses and
    /// transport errors consume an attempt; there is no wait after the last one.
    pub async fn verify(&self, spec: &ProbeSpec) -> std::result::Result<bool, ProbeError> {
        let max = spec.max_attempts;
        self.log.log(format!("Verifying service at {}", spec.url));

        for attempt in 1..=max {
            let failure = match self.client.get_status(&spec.url, spec.timeout).await {
                Ok(status) if (200..300).contains(&status) => {
                    self.log.log(format!(
                        "Service at {} responded successfully (HTTP {status}).",
                        spec.url
                    ));
                    return Ok(true);
                }
                Ok(status) => format!("HTTP {status}"),
                Err(e) => e.to_string(),
            };

            tracing::debug!(url = %spec.url, attempt, %failure, "probe attempt failed");
            self.log.log(format!("Attempt {attempt}/{max} failed: {failure}"));

            if attempt < max {
                self.delay.wait(spec.wait).await;
            }
        }

        self.log.log(format!(
            "Failed to verify service at {} after {max} attempts.",
            spec.url
        ));
        Err(ProbeError::Unreachable {
            url: spec.url.clone(),
            attempts: max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_defaults_match_health_check_budget() {
        let spec = ProbeSpec::new("http://localhost:6333/health");
        assert_eq!(spec.max_attempts(), 5);
        assert_eq!(spec.poll_interval(), Duration::from_secs(3));
        assert_eq!(spec.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn zero_attempts_are_raised_to_one() {
        assert_eq!(ProbeSpec::new("http://x").attempts(0).max_attempts(), 1);
    }
}
