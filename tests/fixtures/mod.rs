//! Test fixtures and sample submissions.
//!
//! Every fixture is pinned to the same "today" so date checks are stable.

use chrono::NaiveDate;
use site_intake::{
    DeepLinkTarget, FixedClock, FormSchema, FormSubmission, FormValidator, IntakeServiceImpl,
    LinkOpener, Metrics, RedirectScheduler,
};
use std::sync::Arc;
use std::time::Duration;

/// The date all fixtures treat as today.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// `today()` shifted by `days`, formatted for the date field.
#[allow(dead_code)]
pub fn date_offset(days: i64) -> String {
    (today() + chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

/// A validator pinned to `today()`.
#[allow(dead_code)]
pub fn validator() -> FormValidator {
    FormValidator::new(Arc::new(FixedClock(today())))
}

/// A booking with every required field valid and no optional fields.
#[allow(dead_code)]
pub fn valid_booking() -> FormSubmission {
    FormSubmission::new(FormSchema::Booking)
        .with("fullName", "Chidi Okafor")
        .with("email", "chidi@example.com")
        .with("phone", "+234-704-002-3236")
        .with("service", "aerial-photography")
        .with("date", date_offset(0))
        .with("time", "14:30")
        .with("location", "Victoria Island, Lagos")
}

/// A contact message with every field valid.
#[allow(dead_code)]
pub fn valid_contact() -> FormSubmission {
    FormSubmission::new(FormSchema::Contact)
        .with("contactName", "Chidi Okafor")
        .with("contactEmail", "chidi@example.com")
        .with("subject", "Survey pricing")
        .with("message", "How much for a 5 hectare plot?")
}

/// An intake service pinned to `today()` with the default delays.
#[allow(dead_code)]
pub fn intake_service(opener: Arc<dyn LinkOpener>, metrics: Metrics) -> IntakeServiceImpl {
    let scheduler = RedirectScheduler::new(Duration::from_millis(2000), opener, metrics.clone());
    IntakeServiceImpl::new(
        validator(),
        DeepLinkTarget::default(),
        scheduler,
        metrics,
        Duration::from_millis(5000),
    )
}
