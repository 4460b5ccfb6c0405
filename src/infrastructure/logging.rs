//! 日志系统配置模块
//! 供宿主应用初始化结构化日志；库本身只发出 tracing 事件

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

use crate::config::LoggingConfig;

/// 初始化日志系统
pub fn init_logging(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error>> {
    // 设置日志级别过滤器
    let filter = build_filter(config);

    // 根据配置选择日志格式
    if config.format == "json" {
        Registry::default()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()?;
    } else {
        Registry::default()
            .with(filter)
            .with(fmt::layer().with_ansi(true))
            .try_init()?;
    }

    Ok(())
}

/// 环境变量 RUST_LOG 优先，否则使用配置中的级别
fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level))
}

/// 简化初始化（使用默认配置）
pub fn init_default_logging() {
    let config = LoggingConfig::default();
    init_logging(&config).unwrap_or_else(|e| {
        eprintln!("Failed to initialize logging: {}", e);
    });
}
