//! Sink trait for serialized log lines

use super::error::Result;

/// Destination for serialized log lines.
///
/// `write_line` receives the bare JSON document and appends the line
/// terminator itself, so one call produces exactly one line. A sink
/// shared across loggers must not interleave partial lines; the logger
/// serializes writes through a lock, and a sink used elsewhere carries
/// that responsibility on its own.
pub trait Sink: Send {
    fn write_line(&mut self, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
