// ABOUTME: Phased deployment orchestration.
// ABOUTME: Exports phases, the plan, the orchestrator and the run outcome.

mod error;
mod orchestrator;
mod outcome;
mod phase;
mod plan;

pub use error::{PhaseError, PhaseErrorKind};
pub use orchestrator::DeploymentOrchestrator;
pub use outcome::DeploymentOutcome;
pub use phase::DeploymentPhase;
pub use plan::{DeploymentPlan, PlanStep};
