use std::sync::Arc;

use tokio::sync::Mutex;

use gd_core::ports::UploadCachePort;
use gd_core::GifEntry;

use crate::state::SharedPickerState;

/// Write path for the in-memory `local` group and its persisted copy.
///
/// Every change to `local` and the `save` that follows it run under one
/// write lock, so the store always ends up holding the latest `local`.
/// The state lock itself is released before `save` is awaited.
///
/// 本地上传列表的写入通道：修改与持久化在同一把写锁内按顺序完成。
#[derive(Clone)]
pub struct LocalStore {
    upload_cache: Arc<dyn UploadCachePort>,
    state: SharedPickerState,
    write_lock: Arc<Mutex<()>>,
}

impl LocalStore {
    pub fn new(upload_cache: Arc<dyn UploadCachePort>, state: SharedPickerState) -> Self {
        Self {
            upload_cache,
            state,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Applies `change` to `local`, then persists the result.
    pub async fn update<R>(&self, change: impl FnOnce(&mut Vec<GifEntry>) -> R) -> R {
        let _write = self.write_lock.lock().await;

        let (result, snapshot) = {
            let mut state = self.state.lock().await;
            let result = change(&mut state.local);
            (result, state.local.clone())
        };
        self.upload_cache.save(&snapshot).await;

        result
    }
}
