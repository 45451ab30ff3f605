// ABOUTME: Runs the deployment phases in order and reports a terminal outcome.
// ABOUTME: The only place where component errors become values.

use snafu::ResultExt;

use super::error::{CommandSnafu, PhaseError, ProbeSnafu};
use super::outcome::DeploymentOutcome;
use super::phase::DeploymentPhase;
use super::plan::{DeploymentPlan, PlanStep};
use crate::delay::{Delay, TokioDelay};
use crate::error::Result;
use crate::exec::{CommandRunner, HostShell, Shell};
use crate::log::Logger;
use crate::probe::{HttpClient, ReqwestClient, ServiceProbe};

/// Sequences the deployment phases.
///
/// Phases run strictly in order and the first failure ends the run. Completed
/// phases are not rolled back, so a later run repeats them from the top; the
/// configured commands must tolerate being re-run (rebuilding an existing image,
/// re-starting running containers).
pub struct DeploymentOrchestrator<S = HostShell, C = ReqwestClient, D = TokioDelay> {
    plan: DeploymentPlan,
    runner: CommandRunner<S, D>,
    probe: ServiceProbe<C, D>,
    log: Logger,
}

impl DeploymentOrchestrator {
    /// Orchestrator using the host shell, a reqwest client and tokio timers.
    pub fn new(plan: DeploymentPlan, shell: HostShell, log: Logger) -> Result<Self> {
        Ok(Self::with_parts(
            plan,
            CommandRunner::with_parts(shell, TokioDelay, log.clone()),
            ServiceProbe::new(log.clone())?,
            log,
        ))
    }
}

impl<S: Shell, C: HttpClient, D: Delay> DeploymentOrchestrator<S, C, D> {
    pub fn with_parts(
        plan: DeploymentPlan,
        runner: CommandRunner<S, D>,
        probe: ServiceProbe<C, D>,
        log: Logger,
    ) -> Self {
        Self {
            plan,
            runner,
            probe,
            log,
        }
    }

    /// Run every phase once, in order.
    ///
    /// Never fails: the first phase error is logged and returned as
    /// [`DeploymentOutcome::Failure`].
    pub async fn run_full_cycle(&self) -> DeploymentOutcome {
        let host = gethostname::gethostname();
        self.log
            .log(format!("Deployment started on {}", host.to_string_lossy()));

        let mut current = Some(DeploymentPhase::InstallDependencies);
        while let Some(phase) = current {
            if let Err(err) = self.run_phase(phase).await {
                return self.fail(err);
            }
            current = phase.next();
        }

        self.log.log("Deployment completed successfully.");
        DeploymentOutcome::Success
    }

    /// Run one phase on its own, converting a failure into an outcome like
    /// [`run_full_cycle`](Self::run_full_cycle) does.
    pub async fn run_single_phase(&self, phase: DeploymentPhase) -> DeploymentOutcome {
        match self.run_phase(phase).await {
            Ok(()) => DeploymentOutcome::Success,
            Err(err) => self.fail(err),
        }
    }

    fn fail(&self, err: PhaseError) -> DeploymentOutcome {
        tracing::debug!(phase = %err.phase(), error = %err, "deployment failed");
        self.log.log(format!(
            "Deployment failed during {}: {}",
            err.phase(),
            err.cause()
        ));
        DeploymentOutcome::from(err)
    }

    /// Run the steps of a single phase, stopping at the first failing step.
    pub async fn run_phase(&self, phase: DeploymentPhase) -> std::result::Result<(), PhaseError> {
        tracing::info!(%phase, "starting phase");
        self.log.log(format!(
            "[{}/{}] {phase}: {}",
            phase.ordinal(),
            DeploymentPhase::ALL.len(),
            phase.banner()
        ));

        for step in self.plan.steps(phase) {
            match step {
                PlanStep::Command(spec) => {
                    self.runner
                        .execute(spec)
                        .await
                        .context(CommandSnafu { phase })?;
                }
                PlanStep::Probe(spec) => {
                    self.probe.verify(spec).await.context(ProbeSnafu { phase })?;
                }
            }
        }

        self.log.log(format!("{phase} complete."));
        Ok(())
    }
}
