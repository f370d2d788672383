use async_trait::async_trait;

use crate::error::KeyValueStoreError;

/// Durable string key-value storage.
///
/// 持久化键值存储端口。
#[async_trait]
pub trait KeyValueStorePort: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    async fn get(&self, key: &str) -> Result<Option<String>, KeyValueStoreError>;

    /// Overwrites any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), KeyValueStoreError>;
}
