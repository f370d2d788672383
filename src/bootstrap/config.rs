//! # Configuration Loader / 配置加载器
//!
//! `load_config` is pure data loading: read the TOML file, map it to
//! [`AppConfig`], report I/O and parse errors with context. It performs no
//! validation and fills in no defaults.
//!
//! `resolve_config` is the single place defaults are applied.
//!
//! 仅纯数据加载；默认值只在 `resolve_config` 中补齐。

use std::path::PathBuf;

use anyhow::Context;
use gd_core::config::AppConfig;

pub const CATALOG_URL_ENV: &str = "GIFDOCK_CATALOG_URL";
pub const DEFAULT_CATALOG_URL: &str = "http://localhost:5000";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// Empty strings and missing sections are accepted as facts.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<config dir>/gifdock/config.toml`, read when `--config` is not given
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gifdock").join("config.toml"))
}

/// Fills empty fields with environment or platform defaults
/// 用环境变量或平台默认值补齐空字段
///
/// - catalog url: `GIFDOCK_CATALOG_URL`, then `http://localhost:5000`
/// - data dir: `<local data dir>/gifdock`
pub fn resolve_config(config: AppConfig) -> AppConfig {
    resolve_with(
        config,
        std::env::var(CATALOG_URL_ENV).ok(),
        dirs::data_local_dir(),
    )
}

fn resolve_with(
    mut config: AppConfig,
    env_catalog_url: Option<String>,
    data_local_dir: Option<PathBuf>,
) -> AppConfig {
    if config.catalog_base_url.trim().is_empty() {
        config.catalog_base_url = env_catalog_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string());
    }

    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = data_local_dir
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gifdock");
    }

    config
}
