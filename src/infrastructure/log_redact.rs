//! 日志脱敏
//! 私钥材料永不进入日志；地址和公钥只显示首尾

use serde::Serialize;

use crate::domain::key_import::ImportedKey;
use crate::error::ImportError;

/// 可脱敏trait
pub trait SensitiveRedact {
    fn redact(&self) -> String;
}

/// 脱敏十六进制字符串（显示前缀和后缀）
pub fn redact_hex_string(hex: &str, show_chars: usize) -> String {
    if hex.len() <= show_chars * 2 {
        return "*".repeat(hex.len());
    }

    let prefix = &hex[..show_chars];
    let suffix = &hex[hex.len() - show_chars..];
    format!("{}...{}", prefix, suffix)
}

/// 脱敏地址（显示前6位和后4位）
pub fn redact_address(address: &str) -> String {
    if address.len() < 10 || !address.is_ascii() {
        return "*".repeat(address.chars().count());
    }

    let prefix = &address[..6];
    let suffix = &address[address.len() - 4..];
    format!("{}...{}", prefix, suffix)
}

/// 导入结果脱敏
#[derive(Debug, Serialize)]
pub struct RedactedImportedKey {
    pub address: String,
    pub public_key: String,
    pub format: &'static str,
    pub embedded_key_diverged: bool,
    // 不包含：seed, private_scalar
}

impl SensitiveRedact for ImportedKey {
    fn redact(&self) -> String {
        serde_json::to_string(&RedactedImportedKey {
            address: redact_address(self.address.as_str()),
            public_key: redact_hex_string(&hex::encode(self.keypair.public_key()), 8),
            format: self.format.as_str(),
            embedded_key_diverged: self.embedded_key.is_diverged(),
        })
        .unwrap_or_else(|_| "{ redacted }".to_string())
    }
}

/// 导入错误脱敏（错误消息只含地址和长度，地址仍做截断）
#[derive(Debug, Serialize)]
pub struct RedactedImportError {
    pub code: &'static str,
    pub derived: Option<String>,
    pub expected: Option<String>,
}

impl SensitiveRedact for ImportError {
    fn redact(&self) -> String {
        let (derived, expected) = match self {
            ImportError::Mismatch(mismatch) => (
                Some(redact_address(mismatch.derived.as_str())),
                Some(redact_address(mismatch.expected.as_str())),
            ),
            ImportError::InconsistentExpandedKey { derived, embedded } => (
                Some(redact_address(derived.as_str())),
                Some(redact_address(embedded)),
            ),
            _ => (None, None),
        };

        serde_json::to_string(&RedactedImportError {
            code: self.code(),
            derived,
            expected,
        })
        .unwrap_or_else(|_| "{ redacted }".to_string())
    }
}
