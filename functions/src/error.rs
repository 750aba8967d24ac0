//! Errors surfaced by bindings to user function code

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Result type alias for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

#[derive(Debug, Error)]
pub enum BindingError {
    /// A body was present but was not valid JSON
    #[error("body is not valid JSON: {0}")]
    MalformedContent(#[source] serde_json::Error),

    /// The byte source behind an input stream failed
    #[error("input stream read failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("output binding read before a value was set")]
    OutputNotSet,

    #[error("the {0} environment variable must be provided")]
    MissingEnvironment(&'static str),

    #[error("{0} is not a valid HTTP status code")]
    InvalidStatus(u16),

    #[error("{0:?} is not a valid HTTP method")]
    InvalidMethod(String),

    #[error("{0:?} is not a valid HTTP header name")]
    InvalidHeaderName(String),

    /// Header values must be visible ASCII; carries the header name
    #[error("invalid value for HTTP header {0:?}")]
    InvalidHeaderValue(String),

    #[error("function directory {0:?} is not an absolute path")]
    RelativeDirectory(String),

    #[error("the working directory could not be resolved: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("response body could not be encoded as JSON: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl BindingError {
    /// Whether this error means "the body was present but was not JSON"
    pub fn is_malformed_content(&self) -> bool {
        matches!(self, BindingError::MalformedContent(_))
    }
}

/// Decode a body as a JSON value
pub fn decode_json(body: &[u8]) -> Result<serde_json::Value> {
    decode_json_as(body)
}

/// Decode a body into any deserializable type
pub fn decode_json_as<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|err| {
        tracing::debug!(len = body.len(), error = %err, "body is not valid JSON");
        BindingError::MalformedContent(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_valid_json() {
        let value = decode_json(br#"{"name": "world", "n": [1, 2]}"#).unwrap();
        assert_eq!(value, json!({"name": "world", "n": [1, 2]}));
    }

    #[test]
    fn malformed_json_is_distinguishable() {
        let err = decode_json(b"{not json").unwrap_err();
        assert!(err.is_malformed_content());
        assert!(!BindingError::OutputNotSet.is_malformed_content());
    }

    #[test]
    fn empty_body_is_malformed() {
        assert!(decode_json(b"").unwrap_err().is_malformed_content());
    }

    #[test]
    fn display_names_the_variable() {
        let err = BindingError::MissingEnvironment("FUNC_HANDLER");
        assert_eq!(err.to_string(), "the FUNC_HANDLER environment variable must be provided");
    }

    #[test]
    fn working_directory_failure_is_not_a_stream_error() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "cwd removed");
        let err = BindingError::WorkingDirectory(io);
        assert_eq!(err.to_string(), "the working directory could not be resolved: cwd removed");
        assert!(!matches!(err, BindingError::Io(_)));
    }
}
