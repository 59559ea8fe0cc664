//! Exact-match filter values taken from a path segment

use super::ValidationError;

/// A non-empty value bound as an exact-match `WHERE column = ?` filter.
///
/// Only presence is checked. Whitespace, case and any other content are
/// passed through to the database untouched, so matching follows the
/// column collation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterValue(String);

impl FilterValue {
    /// Create a filter value, rejecting an empty segment.
    ///
    /// `field` is the human-readable name used in the error message.
    ///
    /// # Example
    /// ```
    /// use hospital_server::models::FilterValue;
    ///
    /// assert!(FilterValue::new("Lanni", "First name").is_ok());
    /// assert!(FilterValue::new("", "First name").is_err());
    /// ```
    pub fn new(s: &str, field: &'static str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the filter value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
