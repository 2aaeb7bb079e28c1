//! Console sink implementation

use crate::core::{Result, Sink};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes each event as one line to stdout (or stderr).
///
/// The standard stream handle is locked for the duration of each write,
/// so lines from concurrent loggers never interleave.
pub struct ConsoleSink {
    stream: Stream,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Write lines to stderr instead of stdout.
    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn write_line(&mut self, line: &str) -> Result<()> {
        match self.stream {
            Stream::Stdout => {
                let mut handle = std::io::stdout().lock();
                writeln!(handle, "{}", line)?;
            }
            Stream::Stderr => {
                let mut handle = std::io::stderr().lock();
                writeln!(handle, "{}", line)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => std::io::stdout().flush()?,
            Stream::Stderr => std::io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
