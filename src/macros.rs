//! Logging macros for ergonomic message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each expands to
//! the corresponding `Logger` method and yields its `Result`.
//!
//! # Examples
//!
//! ```
//! use ecs_logger_core::prelude::*;
//! use ecs_logger_core::info;
//!
//! let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
//!
//! // Basic logging
//! info!(logger, "Server started")?;
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port)?;
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use ecs_logger_core::prelude::*;
/// # let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
/// use ecs_logger_core::log;
/// log!(logger, LogLevel::Info, "Simple message")?;
/// log!(logger, LogLevel::Error, "Error code: {}", 500)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use ecs_logger_core::prelude::*;
/// # let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
/// use ecs_logger_core::debug;
/// debug!(logger, "Counter value: {}", 10)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use ecs_logger_core::prelude::*;
/// # let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
/// use ecs_logger_core::info;
/// info!(logger, "Processing {} items", 100)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use ecs_logger_core::prelude::*;
/// # let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
/// use ecs_logger_core::warn;
/// warn!(logger, "Retry attempt {} of {}", 3, 5)?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use ecs_logger_core::prelude::*;
/// # let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
/// use ecs_logger_core::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
///
/// # Examples
///
/// ```
/// # use ecs_logger_core::prelude::*;
/// # let logger = Logger::builder("petshop").sink(BufferSink::new()).build()?;
/// use ecs_logger_core::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full")?;
/// # Ok::<(), LoggerError>(())
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LogLevel, Logger};
    use crate::sinks::BufferSink;

    fn logger_with_sink() -> (Logger, BufferSink) {
        let sink = BufferSink::new();
        let logger = Logger::builder("petshop")
            .sink(sink.clone())
            .build()
            .expect("valid service name");
        (logger, sink)
    }

    #[test]
    fn test_log_macro() {
        let (logger, sink) = logger_with_sink();
        log!(logger, LogLevel::Info, "Formatted: {}", 42).expect("emission succeeds");
        assert!(sink.contents().contains("Formatted: 42"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, sink) = logger_with_sink();

        debug!(logger, "Count: {}", 5).expect("emission succeeds");
        info!(logger, "Items: {}", 100).expect("emission succeeds");
        warn!(logger, "Retry {} of {}", 1, 3).expect("emission succeeds");
        error!(logger, "Code: {}", 500).expect("emission succeeds");
        fatal!(logger, "Critical failure: {}", "system").expect("emission succeeds");

        let lines = sink.lines();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].contains("\"level\":\"debug\""));
        assert!(lines[4].contains("\"level\":\"fatal\""));
    }

    #[test]
    fn test_macro_propagates_validation_error() {
        let (logger, sink) = logger_with_sink();
        assert!(info!(logger, "{}", "   ").is_err());
        assert!(sink.contents().is_empty());
    }
}
