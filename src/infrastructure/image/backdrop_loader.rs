//! Off-thread decoding of carousel slides.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use image::DynamicImage;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Slide loading error variants.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum BackdropError {
    #[error("image not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {}: {message}", .path.display())]
    Decode { path: PathBuf, message: String },

    #[error("decode task failed: {0}")]
    Task(String),
}

/// Message sent when a slide finishes loading.
#[derive(Debug)]
pub struct BackdropLoadedEvent {
    /// Position of the slide in the carousel.
    pub index: usize,
    /// The decoded image, or the reason it is unavailable.
    pub result: Result<Arc<DynamicImage>, BackdropError>,
}

/// Loads carousel slides from disk.
#[derive(Debug, Clone)]
pub struct BackdropLoader {
    paths: Vec<PathBuf>,
}

impl BackdropLoader {
    /// Creates loader for the given ordered slide paths.
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Returns slide paths in display order.
    #[must_use]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Spawns one task per slide, each reporting on `event_tx`.
    pub fn spawn_all(&self, event_tx: &mpsc::UnboundedSender<BackdropLoadedEvent>) {
        for (index, path) in self.paths.iter().cloned().enumerate() {
            let tx = event_tx.clone();
            tokio::spawn(async move {
                let result = Self::load(&path).await;
                if let Err(ref e) = result {
                    warn!(index, error = %e, "Carousel image unavailable, using placeholder");
                }
                let _ = tx.send(BackdropLoadedEvent { index, result });
            });
        }
    }

    /// Reads and decodes one image.
    ///
    /// # Errors
    /// Returns error if the file is missing, unreadable or not an image.
    pub async fn load(path: &Path) -> Result<Arc<DynamicImage>, BackdropError> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BackdropError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                BackdropError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let decoded = tokio::task::spawn_blocking(move || image::load_from_memory(&bytes))
            .await
            .map_err(|e| BackdropError::Task(e.to_string()))?
            .map_err(|e| BackdropError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        debug!(
            path = %path.display(),
            width = decoded.width(),
            height = decoded.height(),
            "Carousel image decoded"
        );

        Ok(Arc::new(decoded))
    }
}
