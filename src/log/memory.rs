// ABOUTME: In-memory log sink used by tests and embedding callers.
// ABOUTME: Keeps every appended message in order.

use super::LogSink;
use parking_lot::Mutex;

#[derive(Debug, Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    /// Snapshot of all messages appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Whether any message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|line| line.contains(needle))
    }

    /// Number of messages containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.lines
            .lock()
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl LogSink for MemoryLog {
    fn append(&self, message: &str) {
        self.lines.lock().push(message.to_string());
    }
}
