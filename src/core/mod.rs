//! Core logging types and the normalization/merge engine

pub mod entry;
pub mod error;
pub mod error_info;
pub mod log_level;
pub mod logger;
pub mod message;
pub mod properties;
pub mod sink;
pub mod timestamp;

pub use entry::{EntryBuilder, LogEvent};
pub use error::{LoggerError, Result};
pub use error_info::ErrorInfo;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder};
pub use message::Message;
pub use properties::{deep_merge, normalize, PropertyMap};
pub use sink::Sink;
pub use timestamp::{format_timestamp, Clock, FixedClock, SystemClock};
