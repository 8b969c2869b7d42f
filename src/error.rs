use thiserror::Error;

/// Fallback text shown when a failure carries no diagnostic of its own.
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Structured error context for better error handling and debugging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorContext {
    /// Field path or configuration key that caused the error (e.g., "config.endpoint_path", "response.url")
    pub field_path: Option<String>,
    /// Additional context about the error (e.g., expected type, actual value)
    pub details: Option<String>,
    /// Source of the error (e.g., "http_client", "player")
    pub source: Option<String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self {
            field_path: None,
            details: None,
            source: None,
        }
    }

    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Unified error type for the console.
///
/// Empty input is not an error: it is rejected before any request exists.
/// Every variant here collapses into the same failure path in the request
/// controller.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}{}", format_context(.context))]
    Configuration {
        message: String,
        context: ErrorContext,
    },

    #[error("Network transport error: {0}")]
    Transport(#[from] TransportError),

    /// The endpoint answered, but reported failure (non-2xx or `ok: false`).
    #[error("Remote error{}: {message}", format_status(.status))]
    Remote { status: Option<u16>, message: String },

    #[error("Malformed response: {message}{}", format_context(.context))]
    MalformedResponse {
        message: String,
        context: ErrorContext,
    },

    #[error("Playback error: {message}")]
    Playback { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Transport-level failures: the request never produced a usable HTTP answer.
#[derive(Debug, Error)]
pub enum TransportError {
    #[cfg(feature = "native")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}

// Helper function to format error context for display
fn format_context(ctx: &ErrorContext) -> String {
    let mut parts = Vec::new();
    if let Some(ref field) = ctx.field_path {
        parts.push(format!("field: {}", field));
    }
    if let Some(ref details) = ctx.details {
        parts.push(format!("details: {}", details));
    }
    if let Some(ref source) = ctx.source {
        parts.push(format!("source: {}", source));
    }
    if parts.is_empty() {
        String::new()
    } else {
        format!(" ({})", parts.join(", "))
    }
}

fn format_status(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP {})", s)).unwrap_or_default()
}

impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Error::Configuration {
            message: msg.into(),
            context: ErrorContext::new(),
        }
    }

    /// Create a new configuration error with structured context
    pub fn configuration_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::Configuration {
            message: msg.into(),
            context,
        }
    }

    pub fn malformed_with_context(msg: impl Into<String>, context: ErrorContext) -> Self {
        Error::MalformedResponse {
            message: msg.into(),
            context,
        }
    }

    /// Remote failure; an absent or blank message becomes [`UNKNOWN_ERROR`].
    pub fn remote(status: Option<u16>, message: Option<String>) -> Self {
        let message = message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| UNKNOWN_ERROR.to_string());
        Error::Remote { status, message }
    }

    pub fn playback(msg: impl Into<String>) -> Self {
        Error::Playback {
            message: msg.into(),
        }
    }

    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport(TransportError::Other(msg.into()))
    }

    /// Extract error context if available
    pub fn context(&self) -> Option<&ErrorContext> {
        match self {
            Error::Configuration { context, .. }
            | Error::MalformedResponse { context, .. } => Some(context),
            _ => None,
        }
    }

    /// The diagnostic shown to the user after "Error: ".
    ///
    /// Remote failures carry the endpoint's own text verbatim; everything else
    /// falls back to the display form without its category prefix.
    pub fn user_message(&self) -> String {
        let message = match self {
            Error::Remote { message, .. } => message.clone(),
            Error::Configuration { message, .. }
            | Error::MalformedResponse { message, .. }
            | Error::Playback { message } => message.clone(),
            Error::Transport(TransportError::Other(message)) => message.clone(),
            other => other.to_string(),
        };
        if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_without_message_falls_back_to_unknown() {
        let err = Error::remote(Some(500), None);
        assert_eq!(err.user_message(), "Unknown error");

        let blank = Error::remote(None, Some("   ".to_string()));
        assert_eq!(blank.user_message(), "Unknown error");
    }

    #[test]
    fn remote_keeps_endpoint_text() {
        let err = Error::remote(Some(400), Some("Text is required.".to_string()));
        assert_eq!(err.user_message(), "Text is required.");
        assert_eq!(err.to_string(), "Remote error (HTTP 400): Text is required.");
    }

    #[test]
    fn context_is_rendered_in_display() {
        let err = Error::configuration_with_context(
            "endpoint path must not be empty",
            ErrorContext::new().with_field_path("endpoint_path"),
        );
        assert_eq!(
            err.to_string(),
            "Configuration error: endpoint path must not be empty (field: endpoint_path)"
        );
        assert_eq!(err.user_message(), "endpoint path must not be empty");
        assert!(err.context().is_some());
    }
}
