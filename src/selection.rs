//! Company data loader
//!
//! Owns the current ticker selection and its two derived artifacts. Each
//! selection bumps a generation counter; results are applied only if their
//! generation is still current, so a late response for a superseded ticker
//! is discarded rather than written over the newer selection.

use crate::cache::ArtifactCache;
use crate::models::{CompanyDetails, Ticker};
use crate::transport::DataTransport;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Snapshot of the selection lifecycle: idle → loading → loaded | failed,
/// re-armed by every `select` call.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    pub current: Option<Ticker>,
    pub details: Option<CompanyDetails>,
    pub artifact_path: Option<PathBuf>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct CompanyDataLoader {
    transport: Arc<dyn DataTransport>,
    cache: ArtifactCache,
    state: RwLock<SelectionState>,
    generation: AtomicU64,
}

impl CompanyDataLoader {
    pub fn new(transport: Arc<dyn DataTransport>, cache: ArtifactCache) -> Self {
        Self {
            transport,
            cache,
            state: RwLock::new(SelectionState::default()),
            generation: AtomicU64::new(0),
        }
    }

    /// Load details and logo for a ticker.
    ///
    /// Immediately invalidates the previous selection's data, then runs both
    /// sub-fetches concurrently and waits for both to settle. The combined
    /// result is all-or-nothing: if either half fails, both stay absent and
    /// the failure reason is surfaced. Reselecting the current ticker still
    /// triggers a full re-fetch.
    pub async fn select(&self, ticker: Ticker) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut state = self.state.write().await;
            *state = SelectionState {
                current: Some(ticker),
                details: None,
                artifact_path: None,
                loading: true,
                error: None,
            };
        }

        info!(ticker = %ticker, "Loading company data");

        let details_fut = self.transport.fetch_details(ticker);
        let artifact_fut = async {
            let bytes = self.transport.fetch_artifact(ticker).await?;
            self.cache.store(ticker, &bytes).await
        };

        let (details, artifact) = tokio::join!(details_fut, artifact_fut);

        let mut state = self.state.write().await;

        // A newer select call has taken over; its results own the state now.
        if self.generation.load(Ordering::SeqCst) != generation {
            debug!(ticker = %ticker, "Discarding result for superseded selection");
            return;
        }

        match (details, artifact) {
            (Ok(details), Ok(path)) => {
                info!(ticker = %ticker, "Company data loaded");
                state.details = Some(details);
                state.artifact_path = Some(path);
                state.loading = false;
                state.error = None;
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(ticker = %ticker, "Company data load failed: {}", e);
                state.details = None;
                state.artifact_path = None;
                state.loading = false;
                state.error = Some(e.to_string());
            }
        }
    }

    pub async fn state(&self) -> SelectionState {
        self.state.read().await.clone()
    }
}
