//! Message-kind dispatch for emission calls
//!
//! A call-site message is either plain text or a structured property map.
//! The distinction is resolved once at the API boundary; downstream code
//! matches on the variant instead of inspecting value types.

use serde_json::Value;

use super::error::LoggerError;
use super::properties::PropertyMap;

/// A call-site log message.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Plain text, wrapped into `{"message": ...}` during assembly.
    Text(String),
    /// Structured properties; must carry a non-empty `"message"` field.
    Structured(PropertyMap),
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<PropertyMap> for Message {
    fn from(map: PropertyMap) -> Self {
        Message::Structured(map)
    }
}

impl TryFrom<Value> for Message {
    type Error = LoggerError;

    /// Resolve a dynamic JSON value. Anything that is neither a string
    /// nor an object is rejected.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(text) => Ok(Message::Text(text)),
            Value::Object(map) => Ok(Message::Structured(map)),
            _ => Err(LoggerError::InvalidMessageType),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_str() {
        assert_eq!(
            Message::from("a dog barked"),
            Message::Text("a dog barked".to_string())
        );
    }

    #[test]
    fn test_try_from_string_value() {
        let message = Message::try_from(json!("hello")).expect("string is a valid message");
        assert_eq!(message, Message::Text("hello".to_string()));
    }

    #[test]
    fn test_try_from_object_value() {
        let message = Message::try_from(json!({"message": "hello"}))
            .expect("object is a valid message");
        assert!(matches!(message, Message::Structured(_)));
    }

    #[test]
    fn test_try_from_rejects_other_types() {
        for value in [json!(42), json!(true), json!(null), json!([1, 2])] {
            assert!(matches!(
                Message::try_from(value),
                Err(LoggerError::InvalidMessageType)
            ));
        }
    }
}
