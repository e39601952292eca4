//! Core error types for net conversion
//!
//! Every variant is fatal to a single conversion; nothing is retried.

use std::path::Path;

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T, E = GspnError> = std::result::Result<T, E>;

/// Core error types for parsing and rendering nets
#[derive(Error, Debug)]
pub enum GspnError {
    #[error("Unsupported format: no parser registered for '{path}'")]
    UnsupportedFormat { path: String },

    #[error("Malformed input in <{element}>: {reason}")]
    MalformedInput {
        element: String,
        attribute: Option<String>,
        reason: String,
    },

    #[error("Unsupported value '{value}' for {field} (expected {expected})")]
    UnsupportedValue {
        field: String,
        value: String,
        expected: String,
    },

    #[error("Label error: name '{name}' has {separators} '_' separators, at most one is supported")]
    LabelFormat { name: String, separators: usize },

    #[error("Render integrity error: arc {source_name} -> {target_name} references unknown node '{missing}'")]
    RenderIntegrity {
        source_name: String,
        target_name: String,
        missing: String,
    },

    #[error("Config error: {message}")]
    Config { message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl GspnError {
    /// Create an unsupported format error for `path`
    pub fn unsupported_format(path: &Path) -> Self {
        Self::UnsupportedFormat {
            path: path.display().to_string(),
        }
    }

    /// Create a structural error not tied to a single attribute
    pub fn malformed(element: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedInput {
            element: element.into(),
            attribute: None,
            reason: reason.into(),
        }
    }

    /// Create an error for a required attribute that is absent
    pub fn missing_attribute(element: impl Into<String>, attribute: &str) -> Self {
        Self::MalformedInput {
            element: element.into(),
            attribute: Some(attribute.to_string()),
            reason: format!("missing required attribute '{}'", attribute),
        }
    }

    /// Create an error for an attribute whose value cannot be interpreted
    pub fn invalid_attribute(
        element: impl Into<String>,
        attribute: &str,
        value: &str,
        expected: &str,
    ) -> Self {
        Self::MalformedInput {
            element: element.into(),
            attribute: Some(attribute.to_string()),
            reason: format!("attribute '{}' = '{}' is not {}", attribute, value, expected),
        }
    }

    /// Create an unsupported value error
    pub fn unsupported_value(
        field: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::UnsupportedValue {
            field: field.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    /// Create a config error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_attribute() {
        let error = GspnError::missing_attribute("place", "x");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Malformed input"));
        assert!(error_msg.contains("<place>"));
        assert!(error_msg.contains("'x'"));
        match error {
            GspnError::MalformedInput { attribute, .. } => {
                assert_eq!(attribute.as_deref(), Some("x"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_attribute() {
        let error = GspnError::invalid_attribute("place 'P1'", "marking", "-1", "a token count");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("place 'P1'"));
        assert!(error_msg.contains("'-1'"));
        assert!(error_msg.contains("a token count"));
    }

    #[test]
    fn test_unsupported_value() {
        let error = GspnError::unsupported_value("arc kind", "RESET", "INPUT, OUTPUT or INHIBITOR");
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("Unsupported value 'RESET'"));
        assert!(error_msg.contains("arc kind"));
    }

    #[test]
    fn test_unsupported_format() {
        let error = GspnError::unsupported_format(Path::new("net.xyz"));
        assert!(format!("{}", error).contains("net.xyz"));
    }

    #[test]
    fn test_io_error_conversion() {
        use std::io;
        let io_err = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error: GspnError = io_err.into();
        let error_msg = format!("{}", error);
        assert!(error_msg.contains("IO error"));
        assert!(error_msg.contains("File not found"));
    }
}
