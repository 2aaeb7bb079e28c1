//! Log event assembly and validation
//!
//! [`EntryBuilder`] composes one [`LogEvent`] per emission from three
//! layers with fixed precedence: envelope < scoped context < call-site
//! message. Both outer layers are normalized before merging, and the
//! message is validated so every emitted event carries a non-empty string
//! `message`.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::error::{LoggerError, Result};
use super::error_info::ErrorInfo;
use super::log_level::LogLevel;
use super::message::Message;
use super::properties::{deep_merge, normalize, PropertyMap};
use super::timestamp::format_timestamp;

/// A fully assembled, normalized event, ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    fields: PropertyMap,
}

impl LogEvent {
    pub fn fields(&self) -> &PropertyMap {
        &self.fields
    }

    /// Serialize as a single JSON document with no trailing newline.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.fields)?)
    }
}

/// Assembles one [`LogEvent`] from the fixed envelope, a scoped context,
/// and the call-site message.
///
/// # Examples
///
/// ```
/// use ecs_logger_core::core::entry::EntryBuilder;
/// use ecs_logger_core::core::log_level::LogLevel;
/// use chrono::{TimeZone, Utc};
///
/// let timestamp = Utc.with_ymd_and_hms(2020, 5, 11, 15, 1, 1).single().expect("valid datetime");
/// let event = EntryBuilder::new("petshop", LogLevel::Error, timestamp)
///     .build("Out of pets exception".into())?;
///
/// assert_eq!(
///     event.to_json()?,
///     r#"{"@timestamp":"2020-05-11T15:01:01.000Z","service":{"name":"petshop"},"log":{"level":"error"},"message":"Out of pets exception"}"#
/// );
/// # Ok::<(), ecs_logger_core::core::error::LoggerError>(())
/// ```
pub struct EntryBuilder<'a> {
    service_name: &'a str,
    level: LogLevel,
    timestamp: DateTime<Utc>,
    scoped: Option<&'a PropertyMap>,
    error: Option<&'a ErrorInfo>,
}

impl<'a> EntryBuilder<'a> {
    pub fn new(service_name: &'a str, level: LogLevel, timestamp: DateTime<Utc>) -> Self {
        Self {
            service_name,
            level,
            timestamp,
            scoped: None,
            error: None,
        }
    }

    /// Default properties merged into the event below the message layer.
    #[must_use]
    pub fn scoped_context(mut self, scoped: &'a PropertyMap) -> Self {
        self.scoped = Some(scoped);
        self
    }

    /// Structured error details, merged as the base of the message layer
    /// so caller-supplied `error.*` fields win.
    #[must_use]
    pub fn error(mut self, error: &'a ErrorInfo) -> Self {
        self.error = Some(error);
        self
    }

    /// Validate the message, apply error enrichment, and merge the three
    /// layers into the final event.
    pub fn build(self, message: Message) -> Result<LogEvent> {
        let message_layer = self.validated_message(message)?;
        let message_layer = match self.error {
            Some(info) => deep_merge(&error_fields(info), &message_layer),
            None => message_layer,
        };

        let scoped = match self.scoped {
            Some(scoped) => normalize(scoped),
            None => PropertyMap::new(),
        };

        let fields = deep_merge(&deep_merge(&self.envelope(), &scoped), &message_layer);
        Ok(LogEvent { fields })
    }

    /// Fields every event carries regardless of caller input.
    fn envelope(&self) -> PropertyMap {
        let mut service = PropertyMap::new();
        service.insert(
            "name".to_string(),
            Value::String(self.service_name.to_string()),
        );

        let mut log = PropertyMap::new();
        log.insert(
            "level".to_string(),
            Value::String(self.level.as_str().to_string()),
        );

        let mut envelope = PropertyMap::new();
        envelope.insert(
            "@timestamp".to_string(),
            Value::String(format_timestamp(&self.timestamp)),
        );
        envelope.insert("service".to_string(), Value::Object(service));
        envelope.insert("log".to_string(), Value::Object(log));
        envelope
    }

    /// Normalize the message and enforce the message invariants. The
    /// structured form is normalized first so a dotted spelling of
    /// `message` cannot smuggle a non-string past validation.
    fn validated_message(&self, message: Message) -> Result<PropertyMap> {
        match message {
            Message::Text(text) => {
                if text.trim().is_empty() {
                    return Err(LoggerError::EmptyMessage);
                }
                let mut wrapped = PropertyMap::new();
                wrapped.insert("message".to_string(), Value::String(text));
                Ok(wrapped)
            }
            Message::Structured(map) => {
                let normalized = normalize(&map);
                match normalized.get("message") {
                    None => Err(LoggerError::MissingMessageField),
                    Some(Value::String(text)) if text.trim().is_empty() => {
                        Err(LoggerError::EmptyMessage)
                    }
                    Some(Value::String(_)) => Ok(normalized),
                    Some(_) => Err(LoggerError::InvalidMessageType),
                }
            }
        }
    }
}

fn error_fields(info: &ErrorInfo) -> PropertyMap {
    let mut details = PropertyMap::new();
    details.insert(
        "message".to_string(),
        Value::String(info.message().to_string()),
    );
    if let Some(trace) = info.stack_trace() {
        details.insert("stack_trace".to_string(), Value::String(trace.to_string()));
    }

    let mut fields = PropertyMap::new();
    fields.insert("error".to_string(), Value::Object(details));
    fields
}
