//! Structured error attachment for error-level emissions

use std::error::Error as StdError;

/// Error details attached alongside a message on `error`/`fatal` calls.
///
/// Rendered as `error.message` and, when a trace is present, as
/// `error.stack_trace` with frames joined by newlines. Created and
/// discarded within a single emission call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    message: String,
    stack_trace: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            stack_trace: None,
        }
    }

    /// Attach a stack trace; `lines` are joined with `'\n'`. An empty
    /// iterator leaves the trace absent.
    #[must_use]
    pub fn with_stack_trace<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = lines
            .into_iter()
            .map(|line| line.as_ref().to_string())
            .collect::<Vec<_>>()
            .join("\n");
        self.stack_trace = (!joined.is_empty()).then_some(joined);
        self
    }

    /// Capture a `std::error::Error`, recording its `source()` chain as
    /// the trace (one frame per line). An error without a source chain
    /// carries no trace.
    pub fn from_error(error: &(dyn StdError + 'static)) -> Self {
        let mut frames = Vec::new();
        let mut cause = error.source();
        while let Some(current) = cause {
            frames.push(current.to_string());
            cause = current.source();
        }

        Self {
            message: error.to_string(),
            stack_trace: (!frames.is_empty()).then(|| frames.join("\n")),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn stack_trace(&self) -> Option<&str> {
        self.stack_trace.as_deref()
    }
}
