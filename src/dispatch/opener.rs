//! Link openers.

use crate::error::{DispatchError, DispatchResult};
use crate::message::DeepLink;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::process::Command;

/// Opens a deep link in whatever the platform offers as a new browsing context.
///
/// Implementations must not block the runtime for long; failures are
/// reported back but never retried.
#[async_trait]
pub trait LinkOpener: Send + Sync {
    async fn open(&self, link: &DeepLink) -> DispatchResult<()>;
}

/// Records the link in the log and does nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingOpener;

#[async_trait]
impl LinkOpener for LoggingOpener {
    async fn open(&self, link: &DeepLink) -> DispatchResult<()> {
        tracing::info!(link = %link, "Redirect ready");
        Ok(())
    }
}

/// Launches the platform URL handler (`xdg-open`, `open` or `start`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

/// Run an opener command to completion.
///
/// A non-zero exit becomes `DispatchError::OpenFailed`.
async fn run(mut cmd: Command) -> DispatchResult<()> {
    // stdout carries the MCP stream; keep the child off it
    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .status()
        .await
        .map_err(DispatchError::Io)?;

    if !status.success() {
        return Err(DispatchError::OpenFailed(status.to_string()));
    }

    tracing::debug!("System link opener exited cleanly");
    Ok(())
}

#[async_trait]
impl LinkOpener for SystemOpener {
    async fn open(&self, link: &DeepLink) -> DispatchResult<()> {
        run(Self::command(link.as_str())).await
    }
}
