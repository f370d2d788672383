//! Durable storage adapters.

mod file_kv_store;
mod upload_cache;

pub use file_kv_store::FileKeyValueStore;
pub use upload_cache::UploadCacheRepository;
