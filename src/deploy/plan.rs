// ABOUTME: Commands and health checks executed by each deployment phase.
// ABOUTME: The default plan is the one an empty configuration file describes.

use nonempty::NonEmpty;
use std::fmt;

use super::phase::DeploymentPhase;
use crate::config::Config;
use crate::exec::CommandSpec;
use crate::probe::ProbeSpec;

/// Everything the orchestrator runs, grouped by phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentPlan {
    /// Host bootstrap first, then the secondary environment.
    pub install: Vec<CommandSpec>,
    pub build: CommandSpec,
    pub start: CommandSpec,
    /// Verified sequentially, in order.
    pub verify: NonEmpty<ProbeSpec>,
    pub downstream: CommandSpec,
}

impl Default for DeploymentPlan {
    /// The plan described by an empty configuration file.
    fn default() -> Self {
        Config::default().plan()
    }
}

/// One unit of work inside a phase.
#[derive(Debug, Clone, Copy)]
pub enum PlanStep<'a> {
    Command(&'a CommandSpec),
    Probe(&'a ProbeSpec),
}

impl DeploymentPlan {
    /// Steps of `phase` in execution order.
    pub fn steps(&self, phase: DeploymentPhase) -> Vec<PlanStep<'_>> {
        match phase {
            DeploymentPhase::InstallDependencies => {
                self.install.iter().map(PlanStep::Command).collect()
            }
            DeploymentPhase::BuildImages => vec![PlanStep::Command(&self.build)],
            DeploymentPhase::StartContainers => vec![PlanStep::Command(&self.start)],
            DeploymentPhase::VerifyServices => self.verify.iter().map(PlanStep::Probe).collect(),
            DeploymentPhase::RunDownstreamOrchestrator => {
                vec![PlanStep::Command(&self.downstream)]
            }
        }
    }
}

impl fmt::Display for PlanStep<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanStep::Command(spec) => write!(
                f,
                "run `{}` (attempts: {}, delay: {:?})",
                spec.command(),
                spec.max_attempts(),
                spec.retry_delay()
            ),
            PlanStep::Probe(spec) => write!(
                f,
                "probe {} (attempts: {}, wait: {:?}, timeout: {:?})",
                spec.url(),
                spec.max_attempts(),
                spec.poll_interval(),
                spec.request_timeout()
            ),
        }
    }
}
