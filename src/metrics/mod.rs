//! Basic metrics instrumentation for form intake.
//!
//! Counts submissions by outcome and redirects by how they ended.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Metrics collector for intake activity.
#[derive(Debug, Clone)]
pub struct Metrics {
    /// Submissions that passed validation
    submissions_accepted_total: Arc<AtomicU64>,

    /// Submissions rejected with field errors
    submissions_rejected_total: Arc<AtomicU64>,

    /// Individual field errors reported across all rejections
    field_errors_total: Arc<AtomicU64>,

    /// Redirects handed to the opener
    redirects_opened_total: Arc<AtomicU64>,

    /// Redirects cancelled before the delay elapsed
    redirects_cancelled_total: Arc<AtomicU64>,

    /// Redirects whose opener reported an error
    redirects_failed_total: Arc<AtomicU64>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            submissions_accepted_total: Arc::new(AtomicU64::new(0)),
            submissions_rejected_total: Arc::new(AtomicU64::new(0)),
            field_errors_total: Arc::new(AtomicU64::new(0)),
            redirects_opened_total: Arc::new(AtomicU64::new(0)),
            redirects_cancelled_total: Arc::new(AtomicU64::new(0)),
            redirects_failed_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an accepted submission.
    pub fn record_accepted(&self) {
        self.submissions_accepted_total
            .fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected submission and how many fields failed.
    pub fn record_rejected(&self, field_errors: usize) {
        self.submissions_rejected_total
            .fetch_add(1, Ordering::Relaxed);
        self.field_errors_total
            .fetch_add(field_errors as u64, Ordering::Relaxed);
    }

    pub fn record_redirect_opened(&self) {
        self.redirects_opened_total.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirect_cancelled(&self) {
        self.redirects_cancelled_total
            .fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_redirect_failed(&self) {
        self.redirects_failed_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total accepted submissions.
    pub fn submissions_accepted_total(&self) -> u64 {
        self.submissions_accepted_total.load(Ordering::Relaxed)
    }

    /// Get total rejected submissions.
    pub fn submissions_rejected_total(&self) -> u64 {
        self.submissions_rejected_total.load(Ordering::Relaxed)
    }

    /// Get total field errors reported.
    pub fn field_errors_total(&self) -> u64 {
        self.field_errors_total.load(Ordering::Relaxed)
    }

    /// Get total redirects opened.
    pub fn redirects_opened_total(&self) -> u64 {
        self.redirects_opened_total.load(Ordering::Relaxed)
    }

    /// Get total redirects cancelled.
    pub fn redirects_cancelled_total(&self) -> u64 {
        self.redirects_cancelled_total.load(Ordering::Relaxed)
    }

    /// Get total redirects that failed to open.
    pub fn redirects_failed_total(&self) -> u64 {
        self.redirects_failed_total.load(Ordering::Relaxed)
    }

    /// Share of submissions that were rejected, 0.0 when none were made.
    pub fn rejection_rate(&self) -> f64 {
        let rejected = self.submissions_rejected_total();
        let total = rejected + self.submissions_accepted_total();
        if total == 0 {
            0.0
        } else {
            rejected as f64 / total as f64
        }
    }

    /// Reset all metrics to zero.
    pub fn reset(&self) {
        self.submissions_accepted_total.store(0, Ordering::Relaxed);
        self.submissions_rejected_total.store(0, Ordering::Relaxed);
        self.field_errors_total.store(0, Ordering::Relaxed);
        self.redirects_opened_total.store(0, Ordering::Relaxed);
        self.redirects_cancelled_total.store(0, Ordering::Relaxed);
        self.redirects_failed_total.store(0, Ordering::Relaxed);
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            submissions_accepted_total: self.submissions_accepted_total(),
            submissions_rejected_total: self.submissions_rejected_total(),
            field_errors_total: self.field_errors_total(),
            redirects_opened_total: self.redirects_opened_total(),
            redirects_cancelled_total: self.redirects_cancelled_total(),
            redirects_failed_total: self.redirects_failed_total(),
            rejection_rate: self.rejection_rate(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MetricsSummary {
    pub submissions_accepted_total: u64,
    pub submissions_rejected_total: u64,
    pub field_errors_total: u64,
    pub redirects_opened_total: u64,
    pub redirects_cancelled_total: u64,
    pub redirects_failed_total: u64,
    pub rejection_rate: f64,
}
