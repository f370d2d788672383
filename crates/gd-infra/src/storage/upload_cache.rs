use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, warn};

use gd_core::gif::limits::{UPLOAD_CACHE_CAPACITY, UPLOAD_CACHE_KEY};
use gd_core::gif::stamp;
use gd_core::ports::{KeyValueStorePort, UploadCachePort};
use gd_core::{GifEntry, Provenance};

/// Upload cache persisted as one JSON array under `uploadedGifs`.
///
/// 本地上传缓存：最多保留最近的 20 条，读写失败只记录日志。
pub struct UploadCacheRepository {
    store: Arc<dyn KeyValueStorePort>,
}

impl UploadCacheRepository {
    pub fn new(store: Arc<dyn KeyValueStorePort>) -> Self {
        Self { store }
    }
}

/// The most recently appended `UPLOAD_CACHE_CAPACITY` entries.
fn most_recent(entries: &[GifEntry]) -> &[GifEntry] {
    let start = entries.len().saturating_sub(UPLOAD_CACHE_CAPACITY);
    &entries[start..]
}

#[async_trait]
impl UploadCachePort for UploadCacheRepository {
    async fn load(&self) -> Vec<GifEntry> {
        let raw = match self.store.get(UPLOAD_CACHE_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!(error = %e, "Failed to read upload cache");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<GifEntry>>(&raw) {
            Ok(entries) => {
                debug!(count = entries.len(), "Loaded upload cache");
                stamp(entries, Provenance::Local)
            }
            Err(e) => {
                warn!(error = %e, "Upload cache is corrupt, ignoring it");
                Vec::new()
            }
        }
    }

    async fn save(&self, entries: &[GifEntry]) {
        let kept = most_recent(entries);
        if kept.len() < entries.len() {
            debug!(
                dropped = entries.len() - kept.len(),
                "Trimming upload cache to capacity"
            );
        }

        let json = match serde_json::to_string(kept) {
            Ok(json) => json,
            Err(e) => {
                error!(error = %e, "Failed to serialize upload cache");
                return;
            }
        };

        if let Err(e) = self.store.set(UPLOAD_CACHE_KEY, &json).await {
            error!(error = %e, "Failed to persist upload cache");
        }
    }
}
