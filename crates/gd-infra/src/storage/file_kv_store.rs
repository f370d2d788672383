use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use gd_core::ports::KeyValueStorePort;
use gd_core::KeyValueStoreError;
use tokio::fs;
use tokio::sync::Mutex;

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes are serialized; concurrent `set`s would otherwise share one temp file.
pub struct FileKeyValueStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys become file names, so anything that could escape `dir` is refused.
    fn path_for(&self, key: &str) -> Result<PathBuf, KeyValueStoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(KeyValueStoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Writes to a sibling temp file, then renames over the target.
    async fn atomic_write(&self, path: &Path, content: &str) -> Result<(), KeyValueStoreError> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            KeyValueStoreError::Io(format!("create storage dir failed: {}: {e}", self.dir.display()))
        })?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await.map_err(|e| {
            KeyValueStoreError::Io(format!("write temp file failed: {}: {e}", tmp_path.display()))
        })?;

        fs::rename(&tmp_path, path).await.map_err(|e| {
            KeyValueStoreError::Io(format!(
                "rename temp file failed: {} -> {}: {e}",
                tmp_path.display(),
                path.display()
            ))
        })
    }
}

#[async_trait]
impl KeyValueStorePort for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(KeyValueStoreError::Io(format!(
                "read failed: {}: {e}",
                path.display()
            ))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError> {
        let path = self.path_for(key)?;
        let _write = self.write_lock.lock().await;
        self.atomic_write(&path, value).await
    }
}
