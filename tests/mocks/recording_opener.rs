use async_trait::async_trait;
use site_intake::error::{DispatchError, DispatchResult};
use site_intake::{DeepLink, LinkOpener};
use std::sync::{Arc, Mutex};

/// Mock opener that records every link it is asked to open.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<DeepLink>>>,
    fail: bool,
}

#[allow(dead_code)]
impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    /// An opener that records the link and then reports failure.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<DeepLink> {
        self.opened.lock().unwrap().clone()
    }

    pub fn open_count(&self) -> usize {
        self.opened.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkOpener for RecordingOpener {
    async fn open(&self, link: &DeepLink) -> DispatchResult<()> {
        self.opened.lock().unwrap().push(link.clone());
        if self.fail {
            return Err(DispatchError::OpenFailed("browser unavailable".to_string()));
        }
        Ok(())
    }
}
