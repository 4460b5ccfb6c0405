//! 密钥材料数据模型
//!
//! 原始输入、解码后的字节以及格式标签

use std::fmt;

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// ed25519 种子长度
pub const SEED_LEN: usize = 32;
/// 公钥长度
pub const PUBLIC_KEY_LEN: usize = 32;
/// 扩展私钥长度（seed || public key）
pub const EXPANDED_SECRET_LEN: usize = SEED_LEN + PUBLIC_KEY_LEN;

/// 用户提供的原始密钥输入
///
/// `Text` 由解码器自动识别编码；`Base58` / `Hex` 由调用方显式标注，
/// 不做识别。`ByteArray` 是已解析的 JSON 数组形式，元素可能越界。
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub enum RawKeyInput {
    Text(String),
    Base58(String),
    Hex(String),
    ByteArray(Vec<i64>),
}

impl fmt::Debug for RawKeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            RawKeyInput::Text(_) => "Text",
            RawKeyInput::Base58(_) => "Base58",
            RawKeyInput::Hex(_) => "Hex",
            RawKeyInput::ByteArray(_) => "ByteArray",
        };
        write!(f, "RawKeyInput::{}([REDACTED])", kind)
    }
}

impl From<&str> for RawKeyInput {
    fn from(text: &str) -> Self {
        RawKeyInput::Text(text.to_string())
    }
}

impl From<String> for RawKeyInput {
    fn from(text: String) -> Self {
        RawKeyInput::Text(text)
    }
}

impl From<Vec<i64>> for RawKeyInput {
    fn from(values: Vec<i64>) -> Self {
        RawKeyInput::ByteArray(values)
    }
}

impl From<&[u8]> for RawKeyInput {
    fn from(bytes: &[u8]) -> Self {
        RawKeyInput::ByteArray(bytes.iter().map(|&b| i64::from(b)).collect())
    }
}

/// 解码后的密钥字节
///
/// 不可变、不可复制，drop 时清零
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyBytes(Vec<u8>);

impl KeyBytes {
    pub(crate) fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyBytes({} bytes, [REDACTED])", self.0.len())
    }
}

/// 密钥材料格式标签
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyFormat {
    /// 32 字节 ed25519 种子
    Seed32,
    /// 64 字节 seed || public key
    ExpandedSecret64,
    Unrecognized,
}

impl KeyFormat {
    /// 按长度分类，只看长度不看内容
    pub fn from_len(len: usize) -> Self {
        match len {
            SEED_LEN => KeyFormat::Seed32,
            EXPANDED_SECRET_LEN => KeyFormat::ExpandedSecret64,
            _ => KeyFormat::Unrecognized,
        }
    }

    pub fn expected_len(&self) -> Option<usize> {
        match self {
            KeyFormat::Seed32 => Some(SEED_LEN),
            KeyFormat::ExpandedSecret64 => Some(EXPANDED_SECRET_LEN),
            KeyFormat::Unrecognized => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyFormat::Seed32 => "seed32",
            KeyFormat::ExpandedSecret64 => "expanded_secret64",
            KeyFormat::Unrecognized => "unrecognized",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_len() {
        assert_eq!(KeyFormat::from_len(32), KeyFormat::Seed32);
        assert_eq!(KeyFormat::from_len(64), KeyFormat::ExpandedSecret64);
        assert_eq!(KeyFormat::from_len(0), KeyFormat::Unrecognized);
        assert_eq!(KeyFormat::from_len(65), KeyFormat::Unrecognized);
    }

    #[test]
    fn test_expected_len_matches_classification() {
        for format in [KeyFormat::Seed32, KeyFormat::ExpandedSecret64] {
            let len = format.expected_len().unwrap();
            assert_eq!(KeyFormat::from_len(len), format);
        }
        assert_eq!(KeyFormat::Unrecognized.expected_len(), None);
    }

    #[test]
    fn test_debug_redacts_contents() {
        let bytes = KeyBytes::new(vec![0xAB; 32]);
        let rendered = format!("{:?}", bytes);
        assert_eq!(rendered, "KeyBytes(32 bytes, [REDACTED])");

        let input = RawKeyInput::Hex("deadbeef".to_string());
        assert!(!format!("{:?}", input).contains("deadbeef"));
    }
}
