//! Delayed, cancelable redirect.

use super::opener::LinkOpener;
use crate::error::{DispatchError, DispatchResult};
use crate::message::DeepLink;
use crate::metrics::Metrics;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::Instant;

/// How a scheduled redirect ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectStatus {
    /// The opener was invoked and reported success.
    Opened,
    /// The redirect was cancelled before the delay elapsed.
    Cancelled,
    /// The opener reported an error, or the task died.
    Failed,
}

/// Schedules deep links to be opened after a fixed delay.
#[derive(Clone)]
pub struct RedirectScheduler {
    delay: Duration,
    opener: Arc<dyn LinkOpener>,
    metrics: Metrics,
}

impl RedirectScheduler {
    pub fn new(delay: Duration, opener: Arc<dyn LinkOpener>, metrics: Metrics) -> Self {
        Self {
            delay,
            opener,
            metrics,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Open `link` once the delay has elapsed, unless cancelled first.
    ///
    /// The delay starts now, not when the task is first polled. Dropping the
    /// returned handle leaves the redirect scheduled.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::NoRuntime` when called outside a tokio runtime.
    pub fn schedule(&self, link: DeepLink) -> DispatchResult<RedirectHandle> {
        let runtime = Handle::try_current().map_err(|_| DispatchError::NoRuntime)?;

        let deadline = Instant::now() + self.delay;
        let (cancel_tx, cancel_rx) = oneshot::channel::<()>();
        let opener = self.opener.clone();
        let metrics = self.metrics.clone();

        let task = runtime.spawn(async move {
            let mut cancel_rx = cancel_rx;

            let elapsed = tokio::select! {
                biased;

                // A dropped sender resolves to Err and disables this branch
                Ok(()) = &mut cancel_rx => false,
                _ = tokio::time::sleep_until(deadline) => true,
            };

            // Past this point a late cancel() must report failure
            cancel_rx.close();
            if !elapsed || cancel_rx.try_recv().is_ok() {
                tracing::debug!("Redirect cancelled before delay elapsed");
                metrics.record_redirect_cancelled();
                return RedirectStatus::Cancelled;
            }

            match opener.open(&link).await {
                Ok(()) => {
                    tracing::info!("Redirect dispatched");
                    metrics.record_redirect_opened();
                    RedirectStatus::Opened
                }
                Err(e) => {
                    tracing::warn!("Redirect could not be opened: {}", e);
                    metrics.record_redirect_failed();
                    RedirectStatus::Failed
                }
            }
        });

        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Redirect scheduled");

        Ok(RedirectHandle {
            cancel: Some(cancel_tx),
            task,
        })
    }
}

/// A pending redirect.
#[derive(Debug)]
pub struct RedirectHandle {
    cancel: Option<oneshot::Sender<()>>,
    task: JoinHandle<RedirectStatus>,
}

impl RedirectHandle {
    /// Cancel the redirect.
    ///
    /// Returns `true` only if the link will not be opened. Once the delay has
    /// elapsed this returns `false`, even while the opener is still running.
    pub fn cancel(&mut self) -> bool {
        match self.cancel.take() {
            Some(tx) => tx.send(()).is_ok(),
            None => false,
        }
    }

    /// Whether the redirect has completed, one way or another.
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Wait for the redirect to complete.
    pub async fn wait(self) -> RedirectStatus {
        let Self { cancel, task } = self;
        // Keep the sender alive while waiting so the task is not disturbed
        let _cancel = cancel;
        task.await.unwrap_or(RedirectStatus::Failed)
    }
}
