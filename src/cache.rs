//! Local blob cache for downloaded logo artifacts
//!
//! One slot per ticker symbol, path derived deterministically, silently
//! overwritten on every re-fetch. No eviction; growth is bounded by the
//! closed ticker enumeration.

use crate::error::CompanionError;
use crate::models::Ticker;
use crate::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ArtifactCache {
    dir: PathBuf,
}

impl ArtifactCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Deterministic cache path for a ticker's logo.
    pub fn path_for(&self, ticker: Ticker) -> PathBuf {
        self.dir.join(format!("{}.png", ticker.as_str()))
    }

    /// Write the downloaded bytes into the ticker's slot and return the
    /// local path. Overwrites any previous artifact for the same symbol.
    pub async fn store(&self, ticker: Ticker, bytes: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await.map_err(|e| {
            CompanionError::CacheWrite(format!(
                "failed to create cache dir {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.path_for(ticker);
        tokio::fs::write(&path, bytes).await.map_err(|e| {
            CompanionError::CacheWrite(format!("failed to write {}: {}", path.display(), e))
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "Cached logo artifact");
        Ok(path)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}
