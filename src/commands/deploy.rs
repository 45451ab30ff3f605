// ABOUTME: Deploy and verify command implementations.
// ABOUTME: Runs the full phase sequence, or only service verification, and maps failure to an error.

use super::context::{build_orchestrator, load_config};
use crate::cli::ConfigArgs;
use stackpilot::deploy::{DeploymentOutcome, DeploymentPhase};
use stackpilot::error::{Error, Result};
use stackpilot::output::Output;

/// Run every phase; a failed run becomes an error so the process exits non-zero.
pub async fn deploy(args: &ConfigArgs, mut output: Output) -> Result<()> {
    let loaded = load_config(args)?;
    let orchestrator = build_orchestrator(&loaded, &output)?;

    output.start_timer();
    let outcome = orchestrator.run_full_cycle().await;
    output.outcome(&outcome);

    into_result(outcome)
}

/// Poll the health endpoints without touching anything else.
pub async fn verify(args: &ConfigArgs, mut output: Output) -> Result<()> {
    let loaded = load_config(args)?;
    let orchestrator = build_orchestrator(&loaded, &output)?;

    output.start_timer();
    let outcome = orchestrator
        .run_single_phase(DeploymentPhase::VerifyServices)
        .await;

    match &outcome {
        DeploymentOutcome::Success => output.success("All services healthy"),
        failure => output.outcome(failure),
    }

    into_result(outcome)
}

fn into_result(outcome: DeploymentOutcome) -> Result<()> {
    match outcome.failed_phase() {
        None => Ok(()),
        Some(phase) => Err(Error::DeploymentFailed(phase.to_string())),
    }
}
