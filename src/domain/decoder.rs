//! 密钥输入解码
//!
//! 支持 base58、hex 和 JSON 整数数组三种文本形式。
//! base58 使用 Bitcoin/Solana 字母表，前导 `1` 还原为前导 0x00 字节。

use zeroize::Zeroizing;

use crate::domain::key_material::{KeyBytes, RawKeyInput, EXPANDED_SECRET_LEN, SEED_LEN};
use crate::error::DecodeError;

/// 识别出的文本编码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Base58,
    Hex,
    JsonArray,
}

/// 解码器
pub struct Decoder;

impl Decoder {
    /// 将原始输入解码为密钥字节
    pub fn decode(input: &RawKeyInput) -> Result<KeyBytes, DecodeError> {
        let bytes = match input {
            RawKeyInput::Text(text) => {
                let text = non_empty(text)?;
                match Self::detect_encoding(text) {
                    TextEncoding::JsonArray => decode_json_array(text)?,
                    TextEncoding::Hex => decode_hex(text)?,
                    TextEncoding::Base58 => decode_base58(text)?,
                }
            }
            RawKeyInput::Base58(text) => decode_base58(non_empty(text)?)?,
            RawKeyInput::Hex(text) => decode_hex(non_empty(text)?)?,
            RawKeyInput::ByteArray(values) => bytes_from_integers(values)?,
        };

        tracing::debug!(len = bytes.len(), "key input decoded");
        Ok(KeyBytes::new(bytes))
    }

    /// 识别文本编码
    ///
    /// 顺序：`[` 开头为 JSON 数组；`0x` 前缀为 hex；
    /// 全部为 hex 字符且长度为 64 或 128 为 hex；其余按 base58 处理。
    pub fn detect_encoding(text: &str) -> TextEncoding {
        let text = text.trim();
        if text.starts_with('[') {
            return TextEncoding::JsonArray;
        }
        if text.starts_with("0x") || text.starts_with("0X") {
            return TextEncoding::Hex;
        }
        let hex_width = text.len() == SEED_LEN * 2 || text.len() == EXPANDED_SECRET_LEN * 2;
        if hex_width && text.chars().all(|c| c.is_ascii_hexdigit()) {
            return TextEncoding::Hex;
        }
        TextEncoding::Base58
    }
}

fn non_empty(text: &str) -> Result<&str, DecodeError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::EmptyInput);
    }
    Ok(trimmed)
}

fn decode_base58(text: &str) -> Result<Vec<u8>, DecodeError> {
    bs58::decode(text).into_vec().map_err(|e| match e {
        bs58::decode::Error::InvalidCharacter { character, index } => {
            DecodeError::InvalidCharacter { character, index }
        }
        bs58::decode::Error::NonAsciiCharacter { index } => DecodeError::InvalidCharacter {
            character: char_at_byte(text, index),
            index,
        },
        // 其余错误（缓冲区等）不会出现在 into_vec 路径上，按首个非法字符上报
        _ => first_non_base58(text),
    })
}

fn decode_hex(text: &str) -> Result<Vec<u8>, DecodeError> {
    let (prefix_len, digits) = match text.get(..2) {
        Some("0x") | Some("0X") => (2, &text[2..]),
        _ => (0, text),
    };
    if digits.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    hex::decode(digits).map_err(|e| match e {
        hex::FromHexError::InvalidHexCharacter { c, index } => DecodeError::InvalidCharacter {
            character: c,
            index: index + prefix_len,
        },
        hex::FromHexError::OddLength | hex::FromHexError::InvalidStringLength => {
            DecodeError::OddHexLength(digits.len())
        }
    })
}

fn decode_json_array(text: &str) -> Result<Vec<u8>, DecodeError> {
    let values: Zeroizing<Vec<i64>> = Zeroizing::new(
        serde_json::from_str(text).map_err(|e| DecodeError::InvalidJson(e.to_string()))?,
    );
    bytes_from_integers(&values)
}

fn bytes_from_integers(values: &[i64]) -> Result<Vec<u8>, DecodeError> {
    if values.is_empty() {
        return Err(DecodeError::EmptyInput);
    }

    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            u8::try_from(value).map_err(|_| DecodeError::ByteOutOfRange { index, value })
        })
        .collect()
}

const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn first_non_base58(text: &str) -> DecodeError {
    text.char_indices()
        .find(|(_, c)| !BASE58_ALPHABET.contains(*c))
        .map(|(index, character)| DecodeError::InvalidCharacter { character, index })
        .unwrap_or(DecodeError::EmptyInput)
}

fn char_at_byte(text: &str, index: usize) -> char {
    text.get(index..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(char::REPLACEMENT_CHARACTER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_text(text: &str) -> Result<KeyBytes, DecodeError> {
        Decoder::decode(&RawKeyInput::from(text))
    }

    #[test]
    fn test_detect_encoding() {
        assert_eq!(Decoder::detect_encoding("[1,2,3]"), TextEncoding::JsonArray);
        assert_eq!(Decoder::detect_encoding("0xdead"), TextEncoding::Hex);
        assert_eq!(Decoder::detect_encoding(&"ab".repeat(32)), TextEncoding::Hex);
        assert_eq!(Decoder::detect_encoding(&"ab".repeat(64)), TextEncoding::Hex);
        // 长度不是 hex 宽度时按 base58 处理
        assert_eq!(Decoder::detect_encoding("abcdef"), TextEncoding::Base58);
        assert_eq!(
            Decoder::detect_encoding("4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS"),
            TextEncoding::Base58
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_text("").unwrap_err(), DecodeError::EmptyInput);
        assert_eq!(decode_text("   \n").unwrap_err(), DecodeError::EmptyInput);
        assert_eq!(
            Decoder::decode(&RawKeyInput::ByteArray(vec![])).unwrap_err(),
            DecodeError::EmptyInput
        );
        assert_eq!(decode_text("[]").unwrap_err(), DecodeError::EmptyInput);
        assert_eq!(decode_text("0x").unwrap_err(), DecodeError::EmptyInput);
    }

    #[test]
    fn test_base58_invalid_character() {
        // '0'、'O'、'I'、'l' 不在 base58 字母表中
        let err = decode_text("abc0def").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                character: '0',
                index: 3
            }
        );

        let err = Decoder::decode(&RawKeyInput::Base58("11lI".to_string())).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::InvalidCharacter { character: 'l', index: 2 }
        ));
    }

    #[test]
    fn test_base58_preserves_leading_zero_bytes() {
        let bytes = decode_text("11111111111111111111111111111111").unwrap();
        assert_eq!(bytes.as_bytes(), &[0u8; 32]);

        let bytes = Decoder::decode(&RawKeyInput::Base58("112".to_string())).unwrap();
        assert_eq!(bytes.as_bytes(), &[0, 0, 1]);
    }

    #[test]
    fn test_hex_decoding() {
        let hex_seed = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
        let bytes = decode_text(hex_seed).unwrap();
        assert_eq!(bytes.len(), 32);
        assert_eq!(bytes.as_bytes()[0], 0x9d);

        let prefixed = decode_text(&format!("0x{}", hex_seed.to_uppercase())).unwrap();
        assert_eq!(prefixed.as_bytes(), bytes.as_bytes());
    }

    #[test]
    fn test_hex_errors() {
        let err = Decoder::decode(&RawKeyInput::Hex("abc".to_string())).unwrap_err();
        assert_eq!(err, DecodeError::OddHexLength(3));

        let err = decode_text("0xzz").unwrap_err();
        assert_eq!(
            err,
            DecodeError::InvalidCharacter {
                character: 'z',
                index: 2
            }
        );
    }

    #[test]
    fn test_json_array() {
        let text = format!("[{}]", vec!["7"; 32].join(", "));
        let bytes = decode_text(&text).unwrap();
        assert_eq!(bytes.as_bytes(), &[7u8; 32]);

        let err = decode_text("[1, 2, 300]").unwrap_err();
        assert_eq!(
            err,
            DecodeError::ByteOutOfRange {
                index: 2,
                value: 300
            }
        );

        let err = Decoder::decode(&RawKeyInput::ByteArray(vec![1, -1])).unwrap_err();
        assert_eq!(err, DecodeError::ByteOutOfRange { index: 1, value: -1 });

        assert!(matches!(
            decode_text("[1, 2,").unwrap_err(),
            DecodeError::InvalidJson(_)
        ));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let bytes = decode_text("  4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS\n").unwrap();
        assert_eq!(bytes.len(), 32);
    }
}
