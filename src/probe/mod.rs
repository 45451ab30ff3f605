// ABOUTME: HTTP health polling for services started by the deployment.
// ABOUTME: Exports the HTTP client seam, the polling probe and their error types.

mod client;
mod error;
mod service;

pub use client::{HttpClient, ReqwestClient};
pub use error::{ProbeError, TransportError};
pub use service::{
    DEFAULT_PROBE_ATTEMPTS, DEFAULT_PROBE_TIMEOUT, DEFAULT_PROBE_WAIT, ProbeSpec, ServiceProbe,
};
