//! # Dependency Injection / 依赖注入模块
//!
//! Creates the `gd-infra` adapters and hands them to the picker as ports.
//! This is the only place that depends on `gd-infra` and `gd-app` together;
//! it assembles, it does not decide.
//!
//! 只负责组装，不包含业务决策。

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use gd_app::{AppDeps, AppPaths, GifPicker, PickerHost};
use gd_core::config::AppConfig;
use gd_core::ports::*;
use gd_core::GifEntry;
use gd_infra::{
    Base64InlineEncoder, FileKeyValueStore, HttpCatalogClient, ReqwestTransport, StaticIdentity,
    SystemClock, UploadCacheRepository,
};
use tracing::info;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
/// 依赖注入错误（基础设施初始化失败）
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("HTTP transport initialization failed: {0}")]
    TransportInit(String),

    #[error("Failed to read static GIFs from {path}: {reason}")]
    CallerEntries { path: String, reason: String },
}

/// Builds every port implementation from resolved configuration.
pub fn wire_dependencies(config: &AppConfig) -> WiringResult<AppDeps> {
    let timeout =
        (config.request_timeout_secs > 0).then(|| Duration::from_secs(config.request_timeout_secs));
    let transport: Arc<dyn HttpTransportPort> = Arc::new(
        ReqwestTransport::new(timeout).map_err(|e| WiringError::TransportInit(e.to_string()))?,
    );
    let encoder: Arc<dyn InlineEncoderPort> = Arc::new(Base64InlineEncoder);
    let catalog: Arc<dyn CatalogPort> = Arc::new(HttpCatalogClient::new(
        transport.clone(),
        encoder.clone(),
        config.catalog_base_url.clone(),
    ));

    let paths = AppPaths::from_data_dir(&config.data_dir);
    let store: Arc<dyn KeyValueStorePort> = Arc::new(FileKeyValueStore::new(paths.storage_dir));
    let upload_cache: Arc<dyn UploadCachePort> = Arc::new(UploadCacheRepository::new(store));

    info!(
        catalog = %config.catalog_base_url,
        data_dir = %config.data_dir.display(),
        timeout_secs = config.request_timeout_secs,
        "Wired gifdock dependencies"
    );

    Ok(AppDeps {
        catalog,
        transport,
        upload_cache,
        encoder,
        identity: Arc::new(StaticIdentity::new(config.user_id.clone())),
        clock: Arc::new(SystemClock),
    })
}

/// Reads caller-supplied entries: a JSON array of GIF entries.
/// An empty path means the host supplies none.
pub fn load_caller_entries(path: &Path) -> WiringResult<Vec<GifEntry>> {
    if path.as_os_str().is_empty() {
        return Ok(Vec::new());
    }

    let to_error = |reason: String| WiringError::CallerEntries {
        path: path.display().to_string(),
        reason,
    };
    let content = std::fs::read_to_string(path).map_err(|e| to_error(e.to_string()))?;
    serde_json::from_str(&content).map_err(|e| to_error(e.to_string()))
}

/// Wires dependencies and constructs the picker in one step.
pub fn build_picker(config: &AppConfig, host: PickerHost) -> WiringResult<GifPicker> {
    let caller = load_caller_entries(&config.static_gifs_path)?;
    let deps = wire_dependencies(config)?;
    Ok(GifPicker::new(deps, host, caller))
}
