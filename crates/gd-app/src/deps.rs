//! # Application Dependencies / 应用依赖
//!
//! Dependency grouping for picker construction. Not a builder: no defaults,
//! no build steps, every port is required.
//!
//! 构造选择器所需的依赖分组，仅用于参数打包。

use std::sync::Arc;

use gd_core::ports::*;

/// Ports owned by the infrastructure layer.
/// 基础设施层提供的端口。
pub struct AppDeps {
    // Catalog / 远程目录
    pub catalog: Arc<dyn CatalogPort>,
    /// Used directly for the pick-time size probe.
    pub transport: Arc<dyn HttpTransportPort>,

    // Local storage / 本地存储
    pub upload_cache: Arc<dyn UploadCachePort>,
    pub encoder: Arc<dyn InlineEncoderPort>,

    // System / 系统
    pub identity: Arc<dyn IdentityPort>,
    pub clock: Arc<dyn ClockPort>,
}
