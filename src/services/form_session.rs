//! Display state of a single form.
//!
//! Mirrors what the page shows: the values being edited, the inline error
//! under each failing field, and the banner above the form.

use super::intake_service::{IntakeService, Submitted};
use crate::domain::FieldError;
use crate::error::{IntakeError, IntakeResult};
use crate::models::{FormSchema, FormSubmission, Notice};
use indexmap::IndexMap;

/// Banner text shown when a submit attempt is rejected.
pub const REJECTED_TEXT: &str = "Please correct the highlighted fields and try again.";

/// One form on the page.
#[derive(Debug, Clone)]
pub struct FormSession {
    values: FormSubmission,
    field_errors: IndexMap<&'static str, FieldError>,
    notice: Option<Notice>,
}

impl FormSession {
    pub fn new(schema: FormSchema) -> Self {
        Self {
            values: FormSubmission::new(schema),
            field_errors: IndexMap::new(),
            notice: None,
        }
    }

    pub fn schema(&self) -> FormSchema {
        self.values.schema
    }

    /// Type into a field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.set(name, value);
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name)
    }

    /// Whether every field is empty.
    pub fn is_blank(&self) -> bool {
        self.values.values.values().all(|v| v.is_empty())
    }

    /// Inline error currently shown under `name`.
    pub fn field_error(&self, name: &str) -> Option<FieldError> {
        self.field_errors.get(name).copied()
    }

    /// All inline errors currently shown, in schema order.
    pub fn field_errors(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        self.field_errors.iter().map(|(f, e)| (*f, *e))
    }

    /// The banner, unless it has expired.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().filter(|n| !n.is_expired())
    }

    /// Dismiss the banner early.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Submit the form.
    ///
    /// Starting a submit clears every inline error and the banner. On
    /// rejection each failing field gets its error; on acceptance the
    /// values are cleared and the success banner shown.
    pub fn submit(&mut self, service: &dyn IntakeService) -> IntakeResult<Submitted> {
        self.field_errors.clear();
        self.notice = None;

        match service.submit(&self.values) {
            Ok(submitted) => {
                self.values.clear();
                self.notice = Some(submitted.notice.clone());
                Ok(submitted)
            }
            Err(IntakeError::Rejected(report)) => {
                self.field_errors.extend(report.errors());
                self.notice = Some(Notice::error(REJECTED_TEXT, service.notice_ttl()));
                Err(IntakeError::Rejected(report))
            }
            Err(e) => {
                tracing::warn!("Submission could not be completed: {}", e);
                self.notice = Some(Notice::error(e.to_string(), service.notice_ttl()));
                Err(e)
            }
        }
    }
}
