#![doc = include_str!("../README.md")]

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

use plantstore_core::{ImageRef, ImageStore, StorageError, UPLOADS_PREFIX};

/// Stores uploaded images as flat files in one directory.
#[derive(Debug, Clone)]
pub struct FsImageStore {
    root: PathBuf,
}

impl FsImageStore {
    /// Create a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve `image` to a file path inside the uploads directory.
    pub fn resolve(&self, image: &ImageRef) -> Result<PathBuf, StorageError> {
        let invalid = || StorageError::InvalidReference(image.as_str().to_string());

        let name = image
            .as_str()
            .strip_prefix(UPLOADS_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(invalid)?;

        if name.is_empty()
            || name == "."
            || name == ".."
            || name.contains(['/', '\\', '\0'])
        {
            return Err(invalid());
        }

        Ok(self.root.join(name))
    }
}

fn io_error(path: &Path, e: &std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

/// Write `bytes` to a fresh file at `path` and flush it to disk.
async fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.sync_all().await
}

#[async_trait]
impl ImageStore for FsImageStore {
    async fn save(&self, image: &ImageRef, bytes: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve(image)?;
        debug!(
            target: "plantstore.images",
            image = %image,
            full_path = %full_path.display(),
            size = bytes.len(),
            "Saving image"
        );

        fs::create_dir_all(&self.root).await.map_err(|e| {
            warn!(target: "plantstore.images", dir = %self.root.display(), error = %e, "create_dir_all failed");
            io_error(&self.root, &e)
        })?;

        // Write to a sibling temp file, then rename into place
        let temp_path = full_path.with_extension("part");
        let saved = match write_synced(&temp_path, bytes).await {
            Ok(()) => fs::rename(&temp_path, &full_path).await.map_err(|e| {
                warn!(
                    target: "plantstore.images",
                    from = %temp_path.display(),
                    to = %full_path.display(),
                    error = %e,
                    "rename failed"
                );
                io_error(&full_path, &e)
            }),
            Err(e) => Err(io_error(&temp_path, &e)),
        };

        if saved.is_err() {
            let _ = fs::remove_file(&temp_path).await;
        }
        saved
    }

    async fn remove(&self, image: &ImageRef) -> Result<(), StorageError> {
        let full_path = self.resolve(image)?;
        match fs::remove_file(&full_path).await {
            Ok(()) => {
                debug!(target: "plantstore.images", image = %image, "Removed image");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error(&full_path, &e)),
        }
    }
}
