//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or empty
    Empty { field: &'static str },

    /// Field could not be decoded (e.g. invalid UTF-8 percent-encoding)
    Malformed { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} is required", field),
            Self::Malformed { field } => write!(f, "{} is malformed", field),
        }
    }
}

impl std::error::Error for ValidationError {}
