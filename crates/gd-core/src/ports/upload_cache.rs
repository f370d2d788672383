use async_trait::async_trait;

use crate::gif::GifEntry;

/// Bounded cache of locally stored uploads.
///
/// Both operations are infallible from the caller's side: persistence is
/// best-effort, so implementations log storage problems and carry on.
#[async_trait]
pub trait UploadCachePort: Send + Sync {
    /// Persisted entries, or an empty list if storage is absent or corrupt.
    async fn load(&self) -> Vec<GifEntry>;

    /// Keeps only the most recently appended entries up to the capacity.
    async fn save(&self, entries: &[GifEntry]);
}
