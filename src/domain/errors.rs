//! Field-level validation errors.

use serde::{Serialize, Serializer};
use std::fmt;

/// The value shape a field failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldFormat {
    /// `local@domain.tld`
    Email,

    /// Optional `+` followed by ten or more digits, spaces, hyphens or parentheses.
    Phone,

    /// Calendar date in `YYYY-MM-DD` form.
    Date,
}

/// Errors that can occur when validating a single form field.
///
/// These are always user-input errors: they are reported next to the
/// offending field and block message construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// The field is absent or blank after trimming.
    Required,

    /// The field is present but does not have the expected shape.
    Malformed(FieldFormat),

    /// The booking date lies before the start of the current day.
    PastDate,
}

impl FieldError {
    /// Stable machine-readable code for the error.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Malformed(_) => "bad_format",
            Self::PastDate => "must_be_future",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => write!(f, "This field is required"),
            Self::Malformed(FieldFormat::Email) => write!(f, "Please enter a valid email address"),
            Self::Malformed(FieldFormat::Phone) => write!(f, "Please enter a valid phone number"),
            Self::Malformed(FieldFormat::Date) => write!(f, "Please enter a valid date"),
            Self::PastDate => write!(f, "Please select a future date"),
        }
    }
}

impl std::error::Error for FieldError {}

// Serialized as the display text so interface layers can show it verbatim
impl Serialize for FieldError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
