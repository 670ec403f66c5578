//! Submission validator.

use super::clock::{Clock, LocalClock};
use crate::domain::{BookingDate, EmailAddress, FieldError, PhoneNumber};
use crate::models::{
    BookingRequest, ContactMessage, FieldKind, FieldSpec, FormSchema, FormSubmission,
    ValidationReport,
};
use chrono::NaiveDate;
use indexmap::IndexMap;
use std::sync::Arc;

/// A submission that passed validation, in typed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedForm {
    Booking(BookingRequest),
    Contact(ContactMessage),
}

impl ValidatedForm {
    pub fn schema(&self) -> FormSchema {
        match self {
            Self::Booking(_) => FormSchema::Booking,
            Self::Contact(_) => FormSchema::Contact,
        }
    }
}

/// Validates submissions against their schema.
#[derive(Clone)]
pub struct FormValidator {
    clock: Arc<dyn Clock>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(Arc::new(LocalClock))
    }
}

impl FormValidator {
    /// Create a validator that reads "today" from `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Today's date as a `YYYY-MM-DD` floor for date pickers.
    pub fn min_booking_date(&self) -> String {
        BookingDate::min_for(self.clock.today())
    }

    /// Validate a submission.
    ///
    /// Every schema field is checked by the rule its `FieldKind` names, and
    /// no field stops the others from being checked.
    ///
    /// # Errors
    ///
    /// Returns the full report, with every failing field, if any field fails.
    pub fn validate(&self, submission: &FormSubmission) -> Result<ValidatedForm, ValidationReport> {
        let schema = submission.schema;
        let today = self.clock.today();
        let mut report = ValidationReport::new(schema);
        let mut fields = CheckedFields::default();

        for spec in schema.fields() {
            if let Some(value) = report.record(spec.name, check(submission, spec, today)) {
                fields.0.insert(spec.name, value);
            }
        }

        if !report.is_valid() {
            tracing::debug!(
                schema = %schema,
                failing = report.error_count(),
                "Submission rejected"
            );
            return Err(report);
        }

        let form = match schema {
            FormSchema::Booking => fields.booking().map(ValidatedForm::Booking),
            FormSchema::Contact => fields.contact().map(ValidatedForm::Contact),
        };
        form.ok_or(report)
    }

    /// Validate and return the per-field report whatever the outcome.
    pub fn report(&self, submission: &FormSubmission) -> ValidationReport {
        match self.validate(submission) {
            Ok(_) => ValidationReport::all_valid(submission.schema),
            Err(report) => report,
        }
    }
}

/// A field value after its rule has passed.
enum Checked<'a> {
    Text(&'a str),
    Email(EmailAddress),
    Phone(PhoneNumber),
    Date(BookingDate),
    Optional(Option<&'a str>),
}

/// Apply the rule for one field. Within a field the first failing rule wins.
fn check<'a>(
    s: &'a FormSubmission,
    spec: &FieldSpec,
    today: NaiveDate,
) -> Result<Checked<'a>, FieldError> {
    if spec.kind == FieldKind::Optional {
        return Ok(Checked::Optional(s.provided(spec.name)));
    }

    let value = s.provided(spec.name).ok_or(FieldError::Required)?;
    match spec.kind {
        FieldKind::Email => EmailAddress::new(value).map(Checked::Email),
        FieldKind::Phone => PhoneNumber::new(value).map(Checked::Phone),
        FieldKind::Date => BookingDate::parse(value, today).map(Checked::Date),
        FieldKind::Text | FieldKind::Optional => Ok(Checked::Text(value)),
    }
}

/// Checked values by field name, taken out one by one to build typed forms.
#[derive(Default)]
struct CheckedFields<'a>(IndexMap<&'static str, Checked<'a>>);

impl<'a> CheckedFields<'a> {
    fn text(&mut self, name: &str) -> Option<String> {
        match self.0.swap_remove(name)? {
            Checked::Text(value) => Some(value.to_string()),
            _ => None,
        }
    }

    fn email(&mut self, name: &str) -> Option<EmailAddress> {
        match self.0.swap_remove(name)? {
            Checked::Email(email) => Some(email),
            _ => None,
        }
    }

    fn phone(&mut self, name: &str) -> Option<PhoneNumber> {
        match self.0.swap_remove(name)? {
            Checked::Phone(phone) => Some(phone),
            _ => None,
        }
    }

    fn date(&mut self, name: &str) -> Option<BookingDate> {
        match self.0.swap_remove(name)? {
            Checked::Date(date) => Some(date),
            _ => None,
        }
    }

    fn optional(&mut self, name: &str) -> Option<Option<String>> {
        match self.0.swap_remove(name)? {
            Checked::Optional(value) => Some(value.map(str::to_string)),
            _ => None,
        }
    }

    fn booking(mut self) -> Option<BookingRequest> {
        Some(BookingRequest {
            full_name: self.text("fullName")?,
            email: self.email("email")?,
            phone: self.phone("phone")?,
            service: self.text("service")?,
            date: self.date("date")?,
            time: self.text("time")?,
            location: self.text("location")?,
            description: self.optional("description")?,
            budget: self.optional("budget")?,
        })
    }

    fn contact(mut self) -> Option<ContactMessage> {
        Some(ContactMessage {
            name: self.text("contactName")?,
            email: self.email("contactEmail")?,
            subject: self.text("subject")?,
            body: self.text("message")?,
        })
    }
}
