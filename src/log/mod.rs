// ABOUTME: Deployment log shared by the runner, the probe and the orchestrator.
// ABOUTME: Appends timestamped lines to a persistent file and mirrors them to the console.

mod file;
mod memory;

pub use file::FileLog;
pub use memory::MemoryLog;

use std::sync::Arc;

/// Destination for deployment log lines.
pub trait LogSink: Send + Sync {
    /// Append one message. Sinks never fail the caller; write errors are reported via tracing.
    fn append(&self, message: &str);
}

/// Handle to the deployment log, injected into every component at construction.
#[derive(Clone)]
pub struct Logger {
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self { sink }
    }

    /// Create a logger backed by an in-memory sink, returning both.
    pub fn memory() -> (Self, Arc<MemoryLog>) {
        let sink = Arc::new(MemoryLog::default());
        (Self::new(sink.clone()), sink)
    }

    pub fn log(&self, message: impl AsRef<str>) {
        self.sink.append(message.as_ref());
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}
