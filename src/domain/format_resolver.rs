//! 密钥格式识别
//!
//! 长度是唯一可靠的信号：任意 32 字节串与 ed25519 种子在内容上无法区分，
//! 因此这里不做任何基于内容的猜测。

use crate::domain::key_material::{KeyBytes, KeyFormat};
use crate::error::ResolveError;

pub struct FormatResolver;

impl FormatResolver {
    /// 32 字节 → `Seed32`，64 字节 → `ExpandedSecret64`，其余长度报错
    pub fn resolve(bytes: &KeyBytes) -> Result<KeyFormat, ResolveError> {
        match KeyFormat::from_len(bytes.len()) {
            KeyFormat::Unrecognized => {
                tracing::debug!(len = bytes.len(), "unsupported key length");
                Err(ResolveError::UnsupportedLength(bytes.len()))
            }
            format => {
                tracing::debug!(format = format.as_str(), "key format resolved");
                Ok(format)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_dispatch() {
        for len in 0..=130 {
            let bytes = KeyBytes::new(vec![0x5a; len]);
            let result = FormatResolver::resolve(&bytes);
            match len {
                32 => assert_eq!(result, Ok(KeyFormat::Seed32)),
                64 => assert_eq!(result, Ok(KeyFormat::ExpandedSecret64)),
                _ => assert_eq!(result, Err(ResolveError::UnsupportedLength(len))),
            }
        }
    }

    #[test]
    fn test_content_is_ignored() {
        // 全零和全 0xff 的 32 字节都视为种子
        assert_eq!(
            FormatResolver::resolve(&KeyBytes::new(vec![0; 32])),
            Ok(KeyFormat::Seed32)
        );
        assert_eq!(
            FormatResolver::resolve(&KeyBytes::new(vec![0xff; 32])),
            Ok(KeyFormat::Seed32)
        );
    }
}
