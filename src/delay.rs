// ABOUTME: Wait source used between retry attempts and probe polls.
// ABOUTME: Production waits on the tokio timer; tests substitute a recording fake.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the caller between attempts.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Waits on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
