//! Intake service layer.
//!
//! Validation, message rendering and redirect scheduling for one submission.

use crate::config::Config;
use crate::dispatch::{LinkOpener, RedirectHandle, RedirectScheduler};
use crate::error::{IntakeError, IntakeResult};
use crate::message::{self, DeepLink, DeepLinkTarget, OutboundMessage};
use crate::metrics::Metrics;
use crate::models::{FormSchema, FormSubmission, Notice};
use crate::validation::FormValidator;
use std::sync::Arc;
use std::time::Duration;

/// Banner text shown once a booking has been accepted.
pub const BOOKING_ACCEPTED_TEXT: &str =
    "Booking request prepared! You will be redirected to WhatsApp to send your booking details.";

/// Banner text shown once a contact message has been accepted.
pub const CONTACT_ACCEPTED_TEXT: &str =
    "Message prepared! You will be redirected to WhatsApp to send your message.";

/// Success banner text for a schema.
pub fn accepted_text(schema: FormSchema) -> &'static str {
    match schema {
        FormSchema::Booking => BOOKING_ACCEPTED_TEXT,
        FormSchema::Contact => CONTACT_ACCEPTED_TEXT,
    }
}

/// The message and link built from a valid submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedMessage {
    pub schema: FormSchema,
    pub message: OutboundMessage,
    pub link: DeepLink,
}

/// An accepted submission with its redirect pending.
#[derive(Debug)]
pub struct Submitted {
    pub prepared: PreparedMessage,
    pub notice: Notice,
    pub redirect: RedirectHandle,
}

/// Intake service trait for business operations.
pub trait IntakeService: Send + Sync {
    /// Validate a submission and build its message and link.
    ///
    /// Pure: nothing is scheduled and no metrics are recorded.
    fn prepare(&self, submission: &FormSubmission) -> IntakeResult<PreparedMessage>;

    /// Validate, build, and schedule the redirect.
    ///
    /// A rejected submission never schedules anything.
    fn submit(&self, submission: &FormSubmission) -> IntakeResult<Submitted>;

    /// Earliest date the booking form accepts, as `YYYY-MM-DD`.
    fn min_booking_date(&self) -> String;

    /// How long banners stay visible.
    fn notice_ttl(&self) -> Duration;
}

/// Default implementation of IntakeService.
#[derive(Clone)]
pub struct IntakeServiceImpl {
    validator: FormValidator,
    target: DeepLinkTarget,
    scheduler: RedirectScheduler,
    metrics: Metrics,
    notice_ttl: Duration,
}

impl IntakeServiceImpl {
    /// Create a new intake service.
    pub fn new(
        validator: FormValidator,
        target: DeepLinkTarget,
        scheduler: RedirectScheduler,
        metrics: Metrics,
        notice_ttl: Duration,
    ) -> Self {
        Self {
            validator,
            target,
            scheduler,
            metrics,
            notice_ttl,
        }
    }

    /// Build the service from configuration, using the local calendar for dates.
    pub fn from_config(config: &Config, opener: Arc<dyn LinkOpener>, metrics: Metrics) -> Self {
        let scheduler = RedirectScheduler::new(config.redirect_delay(), opener, metrics.clone());
        Self::new(
            FormValidator::default(),
            config.deep_link_target(),
            scheduler,
            metrics,
            config.notice_ttl(),
        )
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn redirect_delay(&self) -> Duration {
        self.scheduler.delay()
    }
}

impl IntakeService for IntakeServiceImpl {
    fn prepare(&self, submission: &FormSubmission) -> IntakeResult<PreparedMessage> {
        let form = self
            .validator
            .validate(submission)
            .map_err(IntakeError::Rejected)?;

        let message = message::render(&form);
        let link = self.target.link_for(&message);

        Ok(PreparedMessage {
            schema: form.schema(),
            message,
            link,
        })
    }

    fn submit(&self, submission: &FormSubmission) -> IntakeResult<Submitted> {
        let unknown: Vec<&str> = submission.unknown_fields().collect();
        if !unknown.is_empty() {
            tracing::debug!(fields = ?unknown, "Ignoring fields outside the schema");
        }

        let prepared = match self.prepare(submission) {
            Ok(prepared) => prepared,
            Err(e) => {
                if let Some(report) = e.report() {
                    self.metrics.record_rejected(report.error_count());
                    tracing::info!(
                        schema = %submission.schema,
                        failing = report.error_count(),
                        "Submission rejected"
                    );
                }
                return Err(e);
            }
        };

        let redirect = self.scheduler.schedule(prepared.link.clone())?;
        self.metrics.record_accepted();

        tracing::info!(
            schema = %prepared.schema,
            message_len = prepared.message.as_str().len(),
            "Submission accepted"
        );

        let notice = Notice::success(accepted_text(prepared.schema), self.notice_ttl);

        Ok(Submitted {
            prepared,
            notice,
            redirect,
        })
    }

    fn min_booking_date(&self) -> String {
        self.validator.min_booking_date()
    }

    fn notice_ttl(&self) -> Duration {
        self.notice_ttl
    }
}
