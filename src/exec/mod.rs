// ABOUTME: External command execution with bounded retries.
// ABOUTME: Exports the shell seam, the retrying runner and their error types.

mod error;
mod runner;
mod shell;

pub use error::CommandError;
pub use runner::{CommandResult, CommandRunner, CommandSpec, DEFAULT_RETRY_DELAY};
pub use shell::{HostShell, ProcessOutput, Shell};
