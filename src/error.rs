//! 错误类型
//!
//! 导入流水线每一级都有自己的错误枚举，`ImportError` 汇总全部失败。
//! 所有错误都携带足够的结构化上下文（字节长度、非法字符、两个地址），
//! 调用方可以据此给出可操作的提示。

use thiserror::Error;

use crate::domain::address::WalletAddress;
use crate::domain::key_material::KeyFormat;

/// 原始输入解码失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("key input is empty")]
    EmptyInput,

    #[error("invalid character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("hex input has odd length {0}")]
    OddHexLength(usize),

    #[error("array element {index} is {value}, expected 0..=255")]
    ByteOutOfRange { index: usize, value: i64 },

    #[error("invalid JSON key array: {0}")]
    InvalidJson(String),
}

/// 字节长度无法映射到任何已知格式
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("unsupported key length {0} bytes (expected 32 or 64)")]
    UnsupportedLength(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeriveError {
    /// 曲线库拒绝退化种子时使用；ed25519-dalek 对任意 32 字节种子都是全函数
    #[error("curve arithmetic rejected the private scalar")]
    InvalidScalar,

    #[error("key format {format:?} does not match a {len}-byte buffer")]
    FormatMismatch { format: KeyFormat, len: usize },
}

/// 外部地址文本解析失败
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    #[error("address is empty")]
    Empty,

    #[error("invalid address character {character:?} at position {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("address decodes to {0} bytes, expected 32")]
    InvalidLength(usize),
}

/// 派生地址与调用方预期地址不一致
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("derived address {derived} does not match expected address {expected}")]
pub struct MismatchError {
    pub derived: WalletAddress,
    pub expected: WalletAddress,
}

/// 导入流水线的统一错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Derive(#[from] DeriveError),

    #[error(transparent)]
    Mismatch(#[from] MismatchError),

    #[error("invalid expected address: {0}")]
    InvalidExpectedAddress(#[source] AddressError),

    #[error("key format {0:?} is disabled by configuration")]
    FormatDisabled(KeyFormat),

    #[error("expanded key embeds public key {embedded}, but its seed derives {derived}")]
    InconsistentExpandedKey {
        derived: WalletAddress,
        embedded: String,
    },

    #[error("an expected address is required to import this key")]
    ExpectedAddressRequired,
}

impl ImportError {
    /// 稳定的错误码，供调用方做本地化或埋点
    pub fn code(&self) -> &'static str {
        match self {
            ImportError::Decode(DecodeError::EmptyInput) => "empty_input",
            ImportError::Decode(DecodeError::InvalidCharacter { .. }) => "invalid_character",
            ImportError::Decode(DecodeError::OddHexLength(_)) => "odd_hex_length",
            ImportError::Decode(DecodeError::ByteOutOfRange { .. }) => "byte_out_of_range",
            ImportError::Decode(DecodeError::InvalidJson(_)) => "invalid_json",
            ImportError::Resolve(ResolveError::UnsupportedLength(_)) => "unsupported_length",
            ImportError::Derive(DeriveError::InvalidScalar) => "invalid_scalar",
            ImportError::Derive(DeriveError::FormatMismatch { .. }) => "format_mismatch",
            ImportError::Mismatch(_) => "address_mismatch",
            ImportError::InvalidExpectedAddress(_) => "invalid_expected_address",
            ImportError::FormatDisabled(_) => "format_disabled",
            ImportError::InconsistentExpandedKey { .. } => "inconsistent_expanded_key",
            ImportError::ExpectedAddressRequired => "expected_address_required",
        }
    }

    /// 是否由用户输入本身造成（可提示用户修改后重试）
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            ImportError::Decode(_)
                | ImportError::Resolve(_)
                | ImportError::InvalidExpectedAddress(_)
                | ImportError::ExpectedAddressRequired
        )
    }
}
