//! 钱包地址
//!
//! 地址就是 32 字节公钥的 base58 编码，不附加校验和。

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::key_material::PUBLIC_KEY_LEN;
use crate::error::AddressError;

/// base58 钱包地址
///
/// 只能由 `AddressEncoder::encode` 或 `WalletAddress::parse` 构造，
/// 两者都保证是规范编码，因此字符串相等当且仅当公钥相等。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    /// 解析外部提供的地址文本
    pub fn parse(text: &str) -> Result<Self, AddressError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AddressError::Empty);
        }

        let decoded = bs58::decode(text).into_vec().map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                AddressError::InvalidCharacter { character, index }
            }
            bs58::decode::Error::NonAsciiCharacter { index } => AddressError::InvalidCharacter {
                character: text[index..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER),
                index,
            },
            _ => AddressError::InvalidLength(0),
        })?;

        let public_key: [u8; PUBLIC_KEY_LEN] = decoded
            .as_slice()
            .try_into()
            .map_err(|_| AddressError::InvalidLength(decoded.len()))?;

        Ok(AddressEncoder::encode(&public_key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 地址对应的公钥字节
    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        let mut out = [0u8; PUBLIC_KEY_LEN];
        // 构造时已保证是 32 字节的规范 base58
        if let Ok(written) = bs58::decode(&self.0).onto(&mut out[..]) {
            debug_assert_eq!(written, PUBLIC_KEY_LEN);
        }
        out
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for WalletAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

impl AsRef<str> for WalletAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// 地址编码器
pub struct AddressEncoder;

impl AddressEncoder {
    /// 公钥 → base58 地址，全函数
    pub fn encode(public_key: &[u8; PUBLIC_KEY_LEN]) -> WalletAddress {
        WalletAddress(bs58::encode(public_key).into_string())
    }
}
