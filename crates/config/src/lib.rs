//! voi-config - 配置加载库

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use secrecy::Secret;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load config: {0}")]
    Load(#[from] figment::Error),
}

/// 服务器配置
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// SAP 网关配置
///
/// 指向通往本地 SAP 系统的云集成网关。供应商、账户类型等
/// 查询参数是固定的，与原始服务保持一致。
#[derive(Debug, Clone, Deserialize)]
pub struct SapConfig {
    pub base_url: String,
    #[serde(default = "default_service_path")]
    pub service_path: String,
    #[serde(default = "default_sap_client")]
    pub sap_client: String,
    #[serde(default = "default_supplier")]
    pub supplier: String,
    #[serde(default = "default_account_type")]
    pub account_type: String,
    #[serde(default = "default_line_items_top")]
    pub line_items_top: u32,
    #[serde(default = "default_summary_top")]
    pub summary_top: u32,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

fn default_service_path() -> String {
    "/sap/opu/odata/sap/FAP_VENDOR_LINE_ITEMS_SRV/Items".to_string()
}

fn default_sap_client() -> String {
    "100".to_string()
}

fn default_supplier() -> String {
    "2007".to_string()
}

fn default_account_type() -> String {
    "K".to_string()
}

fn default_line_items_top() -> u32 {
    500
}

fn default_summary_top() -> u32 {
    1000
}

/// 遥测配置
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub server: ServerConfig,
    pub sap: SapConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config: Self = Figment::new()
            .merge(Toml::file(format!("{}/default.toml", config_dir)))
            .merge(Toml::file(format!("{}/{}.toml", config_dir, env)))
            .merge(Env::prefixed("").split("_"))
            .extract()?;

        Ok(config)
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }

    /// 是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app_env == "development"
    }
}
