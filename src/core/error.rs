//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Logger constructed with an empty or blank service name
    #[error("service name must not be empty")]
    MissingServiceName,

    /// Message is neither a string nor a structured map
    #[error("log message must be a string or an object")]
    InvalidMessageType,

    /// Structured message lacks a 'message' field
    #[error("log object must have a 'message' property")]
    MissingMessageField,

    /// Message is empty after trimming
    #[error("the 'message' property of a log object must not be empty")]
    EmptyMessage,

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from a sink write or flush
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LoggerError {
    /// Whether this error was raised by event validation rather than by
    /// serialization or a sink. A validation failure means no line was
    /// written.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            LoggerError::MissingServiceName
                | LoggerError::InvalidMessageType
                | LoggerError::MissingMessageField
                | LoggerError::EmptyMessage
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LoggerError::MissingServiceName.to_string(),
            "service name must not be empty"
        );
        assert_eq!(
            LoggerError::MissingMessageField.to_string(),
            "log object must have a 'message' property"
        );
        assert_eq!(
            LoggerError::EmptyMessage.to_string(),
            "the 'message' property of a log object must not be empty"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(LoggerError::EmptyMessage.is_validation());
        assert!(LoggerError::InvalidMessageType.is_validation());

        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        assert!(!LoggerError::Io(io_err).is_validation());
    }
}
