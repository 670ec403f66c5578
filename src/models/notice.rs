//! Transient banner shown above a form.

use serde::Serialize;
use std::time::Duration;
use tokio::time::Instant;

/// Banner styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A banner that disappears on its own once its time-to-live has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    expires_at: Instant,
}

impl Notice {
    /// Show a notice now that expires after `ttl`.
    pub fn new(kind: NoticeKind, text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind,
            text: text.into(),
            expires_at: Instant::now() + ttl,
        }
    }

    pub fn success(text: impl Into<String>, ttl: Duration) -> Self {
        Self::new(NoticeKind::Success, text, ttl)
    }

    pub fn error(text: impl Into<String>, ttl: Duration) -> Self {
        Self::new(NoticeKind::Error, text, ttl)
    }

    /// Whether the notice has expired at `now`.
    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    /// Time left before the notice expires.
    pub fn remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}
