//! 基础设施：日志初始化与脱敏

pub mod log_redact;
pub mod logging;
