//! Picture and diagnostic artifact collection.
//!
//! [`ArtifactStore`] is the collaborator the extraction pipeline hands its
//! side outputs to: card pictures, and page/card source snapshots when a step
//! fails. In an HTTP-driven session the page source is the
//! screenshot-equivalent artifact, stored as `error_<step>.html`.

use crate::errors::Result;
use reqwest::Client;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Collector for downloaded pictures and failure snapshots.
pub trait ArtifactStore {
    /// Download the image at `src` and store it under `stem`. Returns the
    /// path of the stored artifact.
    async fn save_picture(&self, stem: &str, src: &str) -> Result<PathBuf>;

    /// Persist page or card source for a failed step. Returns the path of
    /// the stored artifact.
    async fn save_error_snapshot(&self, stem: &str, body: &str) -> Result<PathBuf>;
}

/// Filesystem-backed store writing under `<output>/pictures` and
/// `<output>/snapshots`.
pub struct FsArtifactStore {
    client: Client,
    pictures_dir: PathBuf,
    snapshots_dir: PathBuf,
}

impl FsArtifactStore {
    /// Create both artifact directories under `output_dir`. The client is
    /// shared with the browser session so the run keeps a single pool.
    pub async fn create(client: Client, output_dir: &Path) -> Result<Self> {
        let pictures_dir = output_dir.join("pictures");
        let snapshots_dir = output_dir.join("snapshots");
        fs::create_dir_all(&pictures_dir).await?;
        fs::create_dir_all(&snapshots_dir).await?;
        Ok(Self {
            client,
            pictures_dir,
            snapshots_dir,
        })
    }
}

impl ArtifactStore for FsArtifactStore {
    async fn save_picture(&self, stem: &str, src: &str) -> Result<PathBuf> {
        let bytes = self
            .client
            .get(src)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;
        let path = self.pictures_dir.join(format!("{stem}.png"));
        fs::write(&path, &bytes).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "Stored picture");
        Ok(path)
    }

    async fn save_error_snapshot(&self, stem: &str, body: &str) -> Result<PathBuf> {
        let path = self.snapshots_dir.join(format!("error_{stem}.html"));
        fs::write(&path, body).await?;
        info!(path = %path.display(), "Stored error snapshot");
        Ok(path)
    }
}
