// ABOUTME: Phase failure wrapping for the deployment orchestrator.
// ABOUTME: Ties a command or probe failure to the phase that triggered it.

use snafu::Snafu;

use super::phase::DeploymentPhase;
use crate::exec::CommandError;
use crate::probe::ProbeError;

/// A phase that could not complete.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum PhaseError {
    #[snafu(display("{phase} failed: {source}"))]
    Command {
        phase: DeploymentPhase,
        source: CommandError,
    },

    #[snafu(display("{phase} failed: {source}"))]
    Probe {
        phase: DeploymentPhase,
        source: ProbeError,
    },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseErrorKind {
    /// A command exited non-zero on every attempt.
    CommandFailure,
    /// A command could not be spawned.
    SpawnFailure,
    /// A health endpoint never answered 2xx.
    ServiceUnreachable,
}

impl PhaseError {
    pub fn phase(&self) -> DeploymentPhase {
        match self {
            PhaseError::Command { phase, .. } | PhaseError::Probe { phase, .. } => *phase,
        }
    }

    pub fn kind(&self) -> PhaseErrorKind {
        match self {
            PhaseError::Command {
                source: CommandError::Failed { .. },
                ..
            } => PhaseErrorKind::CommandFailure,
            PhaseError::Command {
                source: CommandError::Spawn { .. },
                ..
            } => PhaseErrorKind::SpawnFailure,
            PhaseError::Probe { .. } => PhaseErrorKind::ServiceUnreachable,
        }
    }

    /// Root cause without the phase prefix.
    pub fn cause(&self) -> String {
        match self {
            PhaseError::Command { source, .. } => source.to_string(),
            PhaseError::Probe { source, .. } => source.to_string(),
        }
    }
}
