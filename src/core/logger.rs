//! Logger facade
//!
//! The public surface of the crate: severity methods, scoped-context
//! derivation via [`Logger::with`], and structured error attachment.
//! Every emission is synchronous call-and-return: normalize, merge,
//! validate, serialize, write, in that order, with no queueing.

use parking_lot::Mutex;
use std::sync::Arc;

use super::entry::EntryBuilder;
use super::error::{LoggerError, Result};
use super::error_info::ErrorInfo;
use super::log_level::LogLevel;
use super::message::Message;
use super::properties::PropertyMap;
use super::sink::Sink;
use super::timestamp::{Clock, SystemClock};
use crate::sinks::ConsoleSink;

/// Emits structured JSON log events, one line per call.
///
/// Cloned and derived loggers share the service name, clock, and sink;
/// the scoped context is immutable and owned per instance.
///
/// # Examples
///
/// ```
/// use ecs_logger_core::prelude::*;
///
/// let sink = BufferSink::new();
/// let logger = Logger::builder("petshop").sink(sink.clone()).build()?;
///
/// logger.info("Guinea pigs arrived")?;
/// assert!(sink.contents().contains("\"log\":{\"level\":\"info\"}"));
/// # Ok::<(), LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    service_name: Arc<str>,
    scoped: Arc<PropertyMap>,
    clock: Arc<dyn Clock>,
    sink: Arc<Mutex<Box<dyn Sink>>>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use ecs_logger_core::prelude::*;
    ///
    /// let logger = Logger::builder("petshop")
    ///     .sink(BufferSink::new())
    ///     .build()?;
    /// # Ok::<(), LoggerError>(())
    /// ```
    pub fn builder(service_name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(service_name.into())
    }

    /// Logger writing to the given sink with the system clock and no
    /// scoped context. Fails when the service name is blank.
    pub fn new(service_name: impl Into<String>, sink: impl Sink + 'static) -> Result<Self> {
        Self::builder(service_name).sink(sink).build()
    }

    /// Derive an independent logger whose scoped context is `extra`.
    ///
    /// The derived logger shares this logger's service name, clock, and
    /// sink. Its context replaces the parent's rather than merging with
    /// it, and nothing propagates back to the parent.
    #[must_use]
    pub fn with(&self, extra: PropertyMap) -> Logger {
        Logger {
            service_name: Arc::clone(&self.service_name),
            scoped: Arc::new(extra),
            clock: Arc::clone(&self.clock),
            sink: Arc::clone(&self.sink),
        }
    }

    /// Emit one event at the given level.
    pub fn log(&self, level: LogLevel, message: impl Into<Message>) -> Result<()> {
        self.emit(level, message.into(), None)
    }

    #[inline]
    pub fn debug(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    #[inline]
    pub fn info(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    #[inline]
    pub fn warn(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    /// Alias for [`Logger::warn`].
    #[inline]
    pub fn warning(&self, message: impl Into<Message>) -> Result<()> {
        self.warn(message)
    }

    #[inline]
    pub fn error(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<Message>) -> Result<()> {
        self.log(LogLevel::Fatal, message)
    }

    /// Alias for [`Logger::fatal`].
    #[inline]
    pub fn critical(&self, message: impl Into<Message>) -> Result<()> {
        self.fatal(message)
    }

    /// Error-level emission enriched with structured error details.
    pub fn error_with(&self, message: impl Into<Message>, error: &ErrorInfo) -> Result<()> {
        self.emit(LogLevel::Error, message.into(), Some(error))
    }

    /// Fatal-level emission enriched with structured error details.
    pub fn fatal_with(&self, message: impl Into<Message>, error: &ErrorInfo) -> Result<()> {
        self.emit(LogLevel::Fatal, message.into(), Some(error))
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    pub fn scoped_context(&self) -> &PropertyMap {
        &self.scoped
    }

    fn emit(&self, level: LogLevel, message: Message, error: Option<&ErrorInfo>) -> Result<()> {
        let mut builder = EntryBuilder::new(&self.service_name, level, self.clock.now())
            .scoped_context(&self.scoped);
        if let Some(info) = error {
            builder = builder.error(info);
        }

        let event = builder.build(message)?;
        let line = event.to_json()?;
        self.sink.lock().write_line(&line)
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use ecs_logger_core::prelude::*;
/// use chrono::{TimeZone, Utc};
/// use serde_json::json;
///
/// let instant = Utc.with_ymd_and_hms(2020, 5, 11, 15, 1, 1).single().expect("valid datetime");
/// let scoped = json!({"service": {"type": "shop"}})
///     .as_object()
///     .cloned()
///     .expect("object literal");
///
/// let logger = Logger::builder("petshop")
///     .sink(BufferSink::new())
///     .clock(FixedClock(instant))
///     .scoped(scoped)
///     .build()?;
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    service_name: String,
    scoped: PropertyMap,
    clock: Arc<dyn Clock>,
    sink: Option<Box<dyn Sink>>,
}

impl LoggerBuilder {
    fn new(service_name: String) -> Self {
        Self {
            service_name,
            scoped: PropertyMap::new(),
            clock: Arc::new(SystemClock),
            sink: None,
        }
    }

    /// Default properties merged into every event this logger emits.
    #[must_use = "builder methods return a new value"]
    pub fn scoped(mut self, scoped: PropertyMap) -> Self {
        self.scoped = scoped;
        self
    }

    /// Inject a clock collaborator. Defaults to [`SystemClock`].
    #[must_use = "builder methods return a new value"]
    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Set the output sink. Defaults to [`ConsoleSink`] on stdout.
    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the Logger. Fails with [`LoggerError::MissingServiceName`]
    /// when the service name trims to empty.
    pub fn build(self) -> Result<Logger> {
        if self.service_name.trim().is_empty() {
            return Err(LoggerError::MissingServiceName);
        }

        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(ConsoleSink::new()));

        Ok(Logger {
            service_name: Arc::from(self.service_name),
            scoped: Arc::new(self.scoped),
            clock: self.clock,
            sink: Arc::new(Mutex::new(sink)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::BufferSink;
    use serde_json::json;

    fn props(value: serde_json::Value) -> PropertyMap {
        match value {
            serde_json::Value::Object(map) => map,
            other => panic!("expected a JSON object, got {}", other),
        }
    }

    #[test]
    fn test_blank_service_name_rejected() {
        let result = Logger::builder("  ").sink(BufferSink::new()).build();
        assert!(matches!(result, Err(LoggerError::MissingServiceName)));
    }

    #[test]
    fn test_empty_service_name_rejected() {
        let result = Logger::builder("").sink(BufferSink::new()).build();
        assert!(matches!(result, Err(LoggerError::MissingServiceName)));
    }

    #[test]
    fn test_emission_writes_one_line() {
        let sink = BufferSink::new();
        let logger = Logger::builder("petshop")
            .sink(sink.clone())
            .build()
            .expect("valid service name");

        logger.info("Guinea pigs arrived").expect("emission succeeds");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let parsed: serde_json::Value =
            serde_json::from_str(&lines[0]).expect("line is valid JSON");
        assert_eq!(parsed["message"], json!("Guinea pigs arrived"));
    }

    #[test]
    fn test_validation_failure_writes_nothing() {
        let sink = BufferSink::new();
        let logger = Logger::builder("petshop")
            .sink(sink.clone())
            .build()
            .expect("valid service name");

        assert!(logger.info("").is_err());
        assert!(sink.contents().is_empty());
    }

    #[test]
    fn test_with_replaces_scoped_context() {
        let sink = BufferSink::new();
        let logger = Logger::builder("petshop")
            .sink(sink.clone())
            .scoped(props(json!({"request": {"method": "get"}})))
            .build()
            .expect("valid service name");

        let derived = logger.with(props(json!({"trace": {"id": "abc"}})));

        assert!(derived.scoped_context().contains_key("trace"));
        assert!(!derived.scoped_context().contains_key("request"));
        assert!(logger.scoped_context().contains_key("request"));
    }

    #[test]
    fn test_derived_logger_shares_sink() {
        let sink = BufferSink::new();
        let logger = Logger::builder("petshop")
            .sink(sink.clone())
            .build()
            .expect("valid service name");

        let derived = logger.with(props(json!({"trace": {"id": "abc"}})));
        derived.info("from child").expect("emission succeeds");
        logger.info("from parent").expect("emission succeeds");

        assert_eq!(sink.lines().len(), 2);
    }
}
