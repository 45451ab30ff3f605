// ABOUTME: Error types for service health probing.
// ABOUTME: Transport errors are per-attempt; ProbeError is terminal.

use std::time::Duration;

/// Why a single GET produced no response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("timed out after {0:?}")]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),
}

/// Terminal failure of a health probe.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProbeError {
    #[error("service at {url} unreachable after {attempts} attempt(s)")]
    Unreachable { url: String, attempts: u32 },
}
