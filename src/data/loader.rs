//! Startup site-list loading
//!
//! The site document is fetched exactly once per session. The fetch runs
//! on the async runtime and hands its result back over a bounded channel;
//! the main thread drains that channel from its event loop and populates
//! the registries from there, so no shared state is touched off-thread.

use crate::{data::sites::SiteCollection, Result};
use crossbeam_channel::{bounded, Receiver, Sender};

#[cfg(feature = "debug")]
use log::{debug, warn};

/// Downloads and parses the site document
pub async fn fetch_sites(endpoint: &str) -> Result<SiteCollection> {
    let response = reqwest::get(endpoint).await?;
    let text = response.text().await?;

    #[cfg(feature = "debug")]
    debug!("Downloaded {} bytes from {}", text.len(), endpoint);

    SiteCollection::from_str(&text)
}

/// One-shot loader handle owned by the viewer
pub struct SiteLoader {
    result_tx: Sender<Result<SiteCollection>>,
    result_rx: Receiver<Result<SiteCollection>>,
    started: bool,
}

impl SiteLoader {
    pub fn new() -> Self {
        let (result_tx, result_rx) = bounded(1);
        Self {
            result_tx,
            result_rx,
            started: false,
        }
    }

    /// Spawns the single fetch task. Returns `false` without issuing a
    /// second request when a fetch was already started this session.
    #[cfg(feature = "tokio-runtime")]
    pub fn start(&mut self, endpoint: String) -> bool {
        if self.started {
            return false;
        }
        self.started = true;

        let result_tx = self.result_tx.clone();
        tokio::spawn(async move {
            let result = fetch_sites(&endpoint).await;

            #[cfg(feature = "debug")]
            if let Err(e) = &result {
                warn!("Site list fetch from {} failed: {}", endpoint, e);
            }

            let _ = result_tx.send(result);
        });
        true
    }

    /// Feeds a result in directly, for embeddings that load the document
    /// themselves (from disk, tests, a different runtime). Counts as the
    /// session's one fetch.
    pub fn complete_with(&mut self, result: Result<SiteCollection>) -> bool {
        if self.started {
            return false;
        }
        self.started = true;
        let _ = self.result_tx.send(result);
        true
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Non-blocking poll for the fetch outcome
    pub fn try_take(&mut self) -> Option<Result<SiteCollection>> {
        self.result_rx.try_recv().ok()
    }
}

impl Default for SiteLoader {
    fn default() -> Self {
        Self::new()
    }
}
