//! Image storage trait definition.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::ImageRef;

/// Storage for uploaded image bytes, addressed by [`ImageRef`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist `bytes` as the file behind `image`.
    async fn save(&self, image: &ImageRef, bytes: &[u8]) -> Result<(), StorageError>;

    /// Remove the file behind `image`.
    ///
    /// Removing a file that is already gone is not an error.
    async fn remove(&self, image: &ImageRef) -> Result<(), StorageError>;
}
