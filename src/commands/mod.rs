// ABOUTME: Command module aggregator for the stackpilot CLI.
// ABOUTME: Re-exports deploy, verify and plan command handlers.

mod context;
mod deploy;
mod plan;

pub use deploy::{deploy, verify};
pub use plan::plan;
