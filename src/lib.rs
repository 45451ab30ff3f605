// ABOUTME: Library root for stackpilot - exposes the deployment core for embedding and testing.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod delay;
pub mod deploy;
pub mod error;
pub mod exec;
pub mod log;
pub mod output;
pub mod probe;
