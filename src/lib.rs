//! # ECS Logger Core
//!
//! A structured JSON logging core: dotted-key normalization, deep-merged
//! scoped context, and one ECS-style JSON line per event.
//!
//! ## Features
//!
//! - **Nested Fields**: Dotted keys (`"pet.name"`) and nested objects mix freely
//! - **Scoped Context**: Derive loggers carrying default properties with `with`
//! - **Deterministic Merging**: Envelope < scoped context < call-site message
//! - **Validated Events**: Every emitted event carries a non-empty message

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        deep_merge, normalize, Clock, EntryBuilder, ErrorInfo, FixedClock, LogEvent, LogLevel,
        Logger, LoggerBuilder, LoggerError, Message, PropertyMap, Result, Sink, SystemClock,
    };
    pub use crate::sinks::{BufferSink, ConsoleSink, FileSink};
}

pub use crate::core::{
    deep_merge, normalize, Clock, EntryBuilder, ErrorInfo, FixedClock, LogEvent, LogLevel, Logger,
    LoggerBuilder, LoggerError, Message, PropertyMap, Result, Sink, SystemClock,
};
pub use crate::sinks::{BufferSink, ConsoleSink, FileSink};
