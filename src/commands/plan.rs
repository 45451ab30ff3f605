// ABOUTME: Plan command implementation.
// ABOUTME: Lists each phase and its steps in execution order without running them.

use super::context::load_config;
use crate::cli::ConfigArgs;
use serde::Serialize;
use stackpilot::deploy::{DeploymentPhase, DeploymentPlan};
use stackpilot::error::Result;
use stackpilot::output::Output;

#[derive(Serialize)]
struct PhaseSummary {
    phase: DeploymentPhase,
    steps: Vec<String>,
}

pub fn plan(args: &ConfigArgs, output: &Output) -> Result<()> {
    let loaded = load_config(args)?;
    let plan = loaded.config.plan();

    output.json(&summarize(&plan));
    for phase in DeploymentPhase::ALL {
        output.line(&format!("{}. {phase}", phase.ordinal()));
        for step in plan.steps(phase) {
            output.line(&format!("   - {step}"));
        }
    }

    Ok(())
}

fn summarize(plan: &DeploymentPlan) -> Vec<PhaseSummary> {
    DeploymentPhase::ALL
        .into_iter()
        .map(|phase| PhaseSummary {
            phase,
            steps: plan.steps(phase).iter().map(ToString::to_string).collect(),
        })
        .collect()
}
