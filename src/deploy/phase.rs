// ABOUTME: The ordered phases of a deployment run.
// ABOUTME: Phases execute strictly in declaration order and are never re-entered.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeploymentPhase {
    /// Bootstrap the host and the secondary execution environment.
    InstallDependencies,
    /// Build container images.
    BuildImages,
    /// Start containers in the background.
    StartContainers,
    /// Poll health endpoints until every service answers.
    VerifyServices,
    /// Hand off to the downstream orchestration process.
    RunDownstreamOrchestrator,
}

impl DeploymentPhase {
    /// Every phase in execution order.
    pub const ALL: [DeploymentPhase; 5] = [
        DeploymentPhase::InstallDependencies,
        DeploymentPhase::BuildImages,
        DeploymentPhase::StartContainers,
        DeploymentPhase::VerifyServices,
        DeploymentPhase::RunDownstreamOrchestrator,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            DeploymentPhase::InstallDependencies => "InstallDependencies",
            DeploymentPhase::BuildImages => "BuildImages",
            DeploymentPhase::StartContainers => "StartContainers",
            DeploymentPhase::VerifyServices => "VerifyServices",
            DeploymentPhase::RunDownstreamOrchestrator => "RunDownstreamOrchestrator",
        }
    }

    /// Progress line logged when the phase begins.
    pub fn banner(&self) -> &'static str {
        match self {
            DeploymentPhase::InstallDependencies => "Installing dependencies...",
            DeploymentPhase::BuildImages => "Building container images...",
            DeploymentPhase::StartContainers => "Starting containers...",
            DeploymentPhase::VerifyServices => "Verifying services...",
            DeploymentPhase::RunDownstreamOrchestrator => "Running downstream orchestrator...",
        }
    }

    /// 1-based position in the run.
    pub fn ordinal(&self) -> usize {
        *self as usize + 1
    }

    pub fn next(&self) -> Option<DeploymentPhase> {
        Self::ALL.get(self.ordinal()).copied()
    }
}

impl fmt::Display for DeploymentPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_are_strictly_ordered() {
        let mut sorted = DeploymentPhase::ALL;
        sorted.sort();
        assert_eq!(sorted, DeploymentPhase::ALL);
    }

    #[test]
    fn next_walks_the_sequence_once() {
        let mut walked = vec![DeploymentPhase::InstallDependencies];
        while let Some(next) = walked.last().and_then(|p| p.next()) {
            walked.push(next);
        }
        assert_eq!(walked, DeploymentPhase::ALL.to_vec());
        assert_eq!(DeploymentPhase::RunDownstreamOrchestrator.next(), None);
    }

    #[test]
    fn ordinals_are_one_based() {
        assert_eq!(DeploymentPhase::InstallDependencies.ordinal(), 1);
        assert_eq!(DeploymentPhase::RunDownstreamOrchestrator.ordinal(), 5);
    }
}
