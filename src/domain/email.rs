//! EmailAddress value object.

use super::errors::{FieldError, FieldFormat};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// The check is a shape check only: a run of non-whitespace, non-`@`
/// characters, an `@`, another such run, a `.`, and a final run.
///
/// # Example
///
/// ```
/// use site_intake::domain::EmailAddress;
///
/// let email = EmailAddress::new("user@example.com").unwrap();
/// assert_eq!(email.as_str(), "user@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new EmailAddress, validating the format.
    ///
    /// The value is checked as given; surrounding whitespace makes it invalid.
    ///
    /// # Errors
    ///
    /// Returns `FieldError::Malformed(FieldFormat::Email)` if the shape does not match.
    pub fn new(email: impl Into<String>) -> Result<Self, FieldError> {
        let email = email.into();

        if !Self::is_valid(&email) {
            return Err(FieldError::Malformed(FieldFormat::Email));
        }

        Ok(Self(email))
    }

    /// Check the `local@domain.tld` shape without constructing a value.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        let email = EmailAddress::new("a@b.co").unwrap();
        assert_eq!(email.as_str(), "a@b.co");
    }

    #[test]
    fn test_email_validates_format() {
        assert!(EmailAddress::new("a@b").is_err());
        assert!(EmailAddress::new("ab.co").is_err());
        assert!(EmailAddress::new("@b.co").is_err());
        assert!(EmailAddress::new("a@.co").is_err());
        assert!(EmailAddress::new("a@b.").is_err());
        assert!(EmailAddress::new("a b@c.co").is_err());
        assert!(EmailAddress::new(" a@b.co").is_err());
        assert!(EmailAddress::new("user.name+tag@example.co.uk").is_ok());
    }

    #[test]
    fn test_email_error_kind() {
        assert_eq!(
            EmailAddress::new("nope").unwrap_err(),
            FieldError::Malformed(FieldFormat::Email)
        );
    }

    #[test]
    fn test_email_display() {
        let email = EmailAddress::new("user@example.com").unwrap();
        assert_eq!(format!("{}", email), "user@example.com");
    }
}
