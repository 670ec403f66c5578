//! Error types for the intake server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Field-level input errors live in [`crate::domain::FieldError`]; the types here
//! wrap them at the service boundary.

use crate::models::ValidationReport;
use thiserror::Error;

/// Errors that can occur while handling a form submission.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// One or more fields failed validation
    #[error("Submission rejected: {} field(s) failed validation", .0.error_count())]
    Rejected(ValidationReport),

    /// The redirect could not be scheduled
    #[error("Redirect dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}

impl IntakeError {
    /// The validation report, if this is a rejection.
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Rejected(report) => Some(report),
            Self::Dispatch(_) => None,
        }
    }
}

/// Errors that can occur when handing a deep link to the messaging app.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// No async runtime is available to run the delayed redirect
    #[error("No async runtime available to schedule the redirect")]
    NoRuntime,

    /// The platform opener could not be launched
    #[error("Failed to launch link opener: {0}")]
    Io(#[from] std::io::Error),

    /// The opener ran but reported failure
    #[error("Link opener failed: {0}")]
    OpenFailed(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with IntakeError
pub type IntakeResult<T> = Result<T, IntakeError>;

/// Convenience type alias for Results with DispatchError
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
