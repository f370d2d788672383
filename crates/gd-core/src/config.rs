//! # Pure Data Module / 纯数据模块
//!
//! Configuration DTO and its TOML mapping. No validation and no defaults
//! live here: empty strings and zero values are facts, the bootstrap layer
//! decides what they mean.
//!
//! 此模块只包含配置数据结构与 TOML 映射，禁止验证逻辑与默认值计算。

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Catalog service base url (may be empty)
    pub catalog_base_url: String,

    /// Per-request timeout in seconds, 0 means no timeout
    pub request_timeout_secs: u64,

    /// Identity used to scope catalog requests (may be empty)
    pub user_id: String,

    /// Root directory for the upload cache and logs (path info only)
    pub data_dir: PathBuf,

    /// JSON file of caller-supplied entries (path info only)
    pub static_gifs_path: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            catalog_base_url: str_at("catalog", "base_url"),
            request_timeout_secs: toml_value
                .get("catalog")
                .and_then(|c| c.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            user_id: str_at("identity", "user_id"),
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
            static_gifs_path: PathBuf::from(str_at("picker", "static_gifs_path")),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            catalog_base_url: String::new(),
            request_timeout_secs: 0,
            user_id: String::new(),
            data_dir: PathBuf::new(),
            static_gifs_path: PathBuf::new(),
        }
    }
}
