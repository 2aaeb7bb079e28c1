//! In-memory sink for tests and demos

use crate::core::{Result, Sink};
use parking_lot::Mutex;
use std::sync::Arc;

/// Collects lines into a shared in-memory buffer.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// logger owns another and read back everything written through
/// [`BufferSink::contents`].
#[derive(Clone, Default)]
pub struct BufferSink {
    buffer: Arc<Mutex<String>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, one newline-terminated line per event.
    pub fn contents(&self) -> String {
        self.buffer.lock().clone()
    }

    /// Written lines without their terminators.
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }
}

impl Sink for BufferSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        let mut buffer = self.buffer.lock();
        buffer.push_str(line);
        buffer.push('\n');
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "buffer"
    }
}
