// Error types module

use std::fmt;

/// Errors surfaced at the parsing boundary.
///
/// The URL rewriting operations themselves never fail: unrecognized URLs
/// pass through unchanged. `TransformError` only occurs when turning
/// string tokens into typed options (CLI flags, registry files).
#[derive(Debug, Clone)]
pub enum TransformError {
    /// Invalid transformation parameter (unknown token, out-of-range value)
    InvalidParameter { param: String, message: String },
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidParameter { param, message } => {
                write!(f, "Invalid parameter '{}': {}", param, message)
            }
        }
    }
}

impl std::error::Error for TransformError {}

impl TransformError {
    /// Helper constructor for the common parameter-error pattern
    pub fn invalid_param(param: impl Into<String>, message: impl Into<String>) -> Self {
        TransformError::InvalidParameter {
            param: param.into(),
            message: message.into(),
        }
    }
}
