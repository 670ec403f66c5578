//! PhoneNumber value object.

use super::errors::{FieldError, FieldFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[0-9\s\-()]{10,}$").expect("Failed to compile phone regex")
});

/// A type-safe wrapper for phone numbers.
///
/// Accepts an optional leading `+` followed by at least ten characters drawn
/// from digits, whitespace, hyphens and parentheses.
///
/// # Example
///
/// ```
/// use site_intake::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("+234-704-002-3236").unwrap();
/// assert_eq!(phone.as_str(), "+234-704-002-3236");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Malformed(FieldFormat::Phone)` if the format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, FieldError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(FieldError::Malformed(FieldFormat::Phone));
        }

        Ok(Self(phone))
    }

    /// Check the phone shape without constructing a value.
    pub fn is_valid(phone: &str) -> bool {
        PHONE_REGEX.is_match(phone)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
