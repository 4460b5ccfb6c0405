//! 配置管理模块
//! 支持从环境变量和配置文件加载配置
//!
//! 导入流水线本身不读取环境变量或文件，只接收 `ImportConfig` 值；
//! 这里的加载函数供宿主应用在构造 `KeyImporter` 之前调用。

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// 应用配置结构体
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub import: ImportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// 密钥导入配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// 接受 32 字节种子
    pub allow_seed32: bool,
    /// 接受 64 字节扩展私钥
    pub allow_expanded64: bool,
    /// 扩展私钥内嵌公钥与派生结果不一致时拒绝导入（默认只告警）
    pub reject_inconsistent_expanded: bool,
    /// 必须提供预期地址
    pub require_expected_address: bool,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String, // "json" or "text"
}

fn env_flag(name: &str, default: bool) -> bool {
    std::env::var(name)
        .ok()
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(default)
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            allow_seed32: env_flag("KEYIMPORT_ALLOW_SEED32", true),
            allow_expanded64: env_flag("KEYIMPORT_ALLOW_EXPANDED64", true),
            reject_inconsistent_expanded: env_flag("KEYIMPORT_REJECT_INCONSISTENT", false),
            require_expected_address: env_flag("KEYIMPORT_REQUIRE_EXPECTED", false),
        }
    }
}

impl ImportConfig {
    /// 不读环境变量的宽松默认值
    pub fn permissive() -> Self {
        Self {
            allow_seed32: true,
            allow_expanded64: true,
            reject_inconsistent_expanded: false,
            require_expected_address: false,
        }
    }

    /// 严格模式：内嵌公钥必须一致，且必须提供预期地址
    pub fn strict() -> Self {
        Self {
            reject_inconsistent_expanded: true,
            require_expected_address: true,
            ..Self::permissive()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            format: std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".into()),
        }
    }
}

impl Config {
    /// 从环境变量加载配置
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            import: ImportConfig::default(),
            logging: LoggingConfig::default(),
        })
    }

    /// 从配置文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).with_context(|| "Failed to parse config file as TOML")
    }

    /// 从环境变量和配置文件合并加载（配置文件优先级更高）
    pub fn from_env_and_file<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = Self::from_env()?;

        if let Some(path) = path {
            if path.as_ref().exists() {
                config = Self::from_file(path)?;
            }
        }

        Ok(config)
    }

    /// 验证配置有效性
    pub fn validate(&self) -> Result<()> {
        if !self.import.allow_seed32 && !self.import.allow_expanded64 {
            anyhow::bail!("At least one of allow_seed32 / allow_expanded64 must be enabled");
        }

        // 验证日志级别
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.to_lowercase().as_str()) {
            anyhow::bail!("LOG_LEVEL must be one of: {:?}", valid_levels);
        }

        // 验证日志格式
        if self.logging.format != "json" && self.logging.format != "text" {
            anyhow::bail!("LOG_FORMAT must be 'json' or 'text'");
        }

        Ok(())
    }
}
