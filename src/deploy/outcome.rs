// ABOUTME: Terminal value of one deployment run.
// ABOUTME: Success, or the failing phase with its error description.

use serde::Serialize;

use super::error::{PhaseError, PhaseErrorKind};
use super::phase::DeploymentPhase;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DeploymentOutcome {
    Success,
    Failure {
        phase: DeploymentPhase,
        kind: PhaseErrorKind,
        error: String,
    },
}

impl DeploymentOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, DeploymentOutcome::Success)
    }

    /// Phase that ended the run, if it failed.
    pub fn failed_phase(&self) -> Option<DeploymentPhase> {
        match self {
            DeploymentOutcome::Success => None,
            DeploymentOutcome::Failure { phase, .. } => Some(*phase),
        }
    }
}

impl From<PhaseError> for DeploymentOutcome {
    fn from(err: PhaseError) -> Self {
        DeploymentOutcome::Failure {
            phase: err.phase(),
            kind: err.kind(),
            error: err.cause(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::ProbeError;

    #[test]
    fn failure_serializes_with_phase_and_kind() {
        let outcome = DeploymentOutcome::from(PhaseError::Probe {
            phase: DeploymentPhase::VerifyServices,
            source: ProbeError::Unreachable {
                url: "http://localhost:6333/health".to_string(),
                attempts: 5,
            },
        });

        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "failure");
        assert_eq!(json["phase"], "verify_services");
        assert_eq!(json["kind"], "service_unreachable");
        assert!(!outcome.is_success());
        assert_eq!(outcome.failed_phase(), Some(DeploymentPhase::VerifyServices));
    }

    #[test]
    fn success_serializes_status_only() {
        let json = serde_json::to_string(&DeploymentOutcome::Success).unwrap();
        assert_eq!(json, r#"{"status":"success"}"#);
    }
}
