//! 配置管理模块
//!
//! 支持多格式配置文件加载，环境变量覆盖，以及类型安全的配置访问。

use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::Path;

use crate::observability::ObservabilityConfig;

/// 服务配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service_name: String,
    pub environment: String,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            service_name: "receipt-processor".to_string(),
            environment: "development".to_string(),
            server: ServerConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

impl AppConfig {
    /// 从配置文件和环境变量加载配置
    ///
    /// 加载顺序（后加载的会覆盖先加载的同名配置项）：
    /// 1. config/default.toml（默认配置）
    /// 2. config/{environment}.toml（环境特定配置）
    /// 3. config/{service_name}.toml（服务特定配置）
    /// 4. 监听地址环境变量（RECEIPT_SERVER_HOST / RECEIPT_SERVER_PORT）
    /// 5. 服务特定端口环境变量（如 RECEIPT_PROCESSOR_PORT），仅在未设置 RECEIPT_SERVER_PORT 时生效
    ///
    /// 所有配置文件均为可选，缺失的配置项使用默认值。
    pub fn load(service_name: &str) -> Result<Self, ConfigError> {
        let env = std::env::var("RECEIPT_ENV").unwrap_or_else(|_| "development".to_string());

        let config_dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

        let builder = Config::builder()
            .set_default("service_name", service_name)?
            .set_default("environment", env.clone())?
            .add_source(File::from(Path::new(&config_dir).join("default.toml")).required(false))
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", env))).required(false),
            )
            .add_source(
                File::from(Path::new(&config_dir).join(format!("{}.toml", service_name)))
                    .required(false),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;

        // 环境变量只允许覆盖监听地址
        if let Some(host) = std::env::var("RECEIPT_SERVER_HOST").ok().filter(|h| !h.is_empty()) {
            config.server.host = host;
        }
        if let Some(port) = Self::port_from_env("RECEIPT_SERVER_PORT")
            .or_else(|| Self::get_service_port_from_env(service_name))
        {
            config.server.port = port;
        }

        Ok(config)
    }

    /// 从环境变量获取服务特定端口
    ///
    /// 将 "receipt-processor" 转换为 "RECEIPT_PROCESSOR_PORT"
    fn get_service_port_from_env(service_name: &str) -> Option<u16> {
        let env_var_name = format!("{}_PORT", service_name.to_uppercase().replace('-', "_"));
        Self::port_from_env(&env_var_name)
    }

    fn port_from_env(name: &str) -> Option<u16> {
        std::env::var(name).ok().and_then(|v| v.parse().ok())
    }

    /// 获取服务地址
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
