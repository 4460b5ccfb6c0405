//! ed25519 密钥对派生
//!
//! 唯一规则：公钥总是由种子重新计算。64 字节扩展私钥只取前 32 字节作为种子，
//! 后 32 字节（导出方缓存的公钥）一律丢弃，不参与派生。
//! 这样即使后半段损坏或被篡改，也不会得到前后不一致的密钥对。

use std::fmt;

use ed25519_dalek::{SigningKey, VerifyingKey};
use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha512};
use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::domain::key_material::{
    KeyBytes, KeyFormat, EXPANDED_SECRET_LEN, PUBLIC_KEY_LEN, SEED_LEN,
};
use crate::error::DeriveError;

/// 派生得到的 ed25519 密钥对
///
/// 只能移动不能复制；内部 `SigningKey` 在 drop 时清零。
/// 调用方应尽快把私钥交给签名组件并释放本对象。
pub struct Keypair {
    signing_key: SigningKey,
    public_key: [u8; PUBLIC_KEY_LEN],
}

impl Keypair {
    /// 由 32 字节种子派生（RFC 8032 标准展开）
    pub fn from_seed(seed: &[u8; SEED_LEN]) -> Self {
        let signing_key = SigningKey::from_bytes(seed);
        let public_key = signing_key.verifying_key().to_bytes();
        Self {
            signing_key,
            public_key,
        }
    }

    /// 32 字节种子
    pub fn seed(&self) -> &[u8; SEED_LEN] {
        self.signing_key.as_bytes()
    }

    /// 私有标量：SHA-512(seed) 前 32 字节，按 ed25519 约定 clamp
    pub fn private_scalar(&self) -> Zeroizing<[u8; 32]> {
        let mut hasher = Sha512::new();
        hasher.update(self.seed());
        let mut digest = Zeroizing::new([0u8; 64]);
        hasher.finalize_into(GenericArray::from_mut_slice(&mut digest[..]));

        let mut scalar = Zeroizing::new([0u8; 32]);
        scalar.copy_from_slice(&digest[..32]);

        scalar[0] &= 248; // 清除最低 3 位
        scalar[31] &= 127; // 清除最高位
        scalar[31] |= 64; // 设置次高位
        scalar
    }

    pub fn public_key(&self) -> [u8; PUBLIC_KEY_LEN] {
        self.public_key
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// 交给外部签名组件使用
    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    /// 导出为 64 字节 seed || public key（Solana keypair 布局）
    pub fn to_expanded_bytes(&self) -> Zeroizing<[u8; EXPANDED_SECRET_LEN]> {
        let mut bytes = Zeroizing::new([0u8; EXPANDED_SECRET_LEN]);
        bytes[..SEED_LEN].copy_from_slice(self.seed());
        bytes[SEED_LEN..].copy_from_slice(&self.public_key);
        bytes
    }

    /// 64 字节导出形式的 base58 文本
    pub fn to_base58_string(&self) -> Zeroizing<String> {
        Zeroizing::new(bs58::encode(&self.to_expanded_bytes()[..]).into_string())
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Keypair")
            .field("public_key", &hex::encode(self.public_key))
            .field("private", &"[REDACTED]")
            .finish()
    }
}

/// 扩展私钥中被丢弃的公钥半段与重新计算结果的比对
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedKeyCheck {
    /// 输入是 32 字节种子，没有内嵌公钥
    NotPresent,
    Consistent,
    /// 内嵌公钥与种子派生的公钥不同
    Diverged { embedded: [u8; PUBLIC_KEY_LEN] },
}

impl EmbeddedKeyCheck {
    pub fn is_diverged(&self) -> bool {
        matches!(self, EmbeddedKeyCheck::Diverged { .. })
    }
}

/// 密钥对派生器
pub struct KeypairDeriver;

impl KeypairDeriver {
    /// 按格式派生密钥对
    ///
    /// 相同输入总是得到逐字节相同的结果，不使用随机数和外部状态。
    pub fn derive(bytes: &KeyBytes, format: KeyFormat) -> Result<Keypair, DeriveError> {
        let mismatch = || DeriveError::FormatMismatch {
            format,
            len: bytes.len(),
        };

        if format.expected_len() != Some(bytes.len()) {
            return Err(mismatch());
        }

        let seed: &[u8; SEED_LEN] = match format {
            KeyFormat::Seed32 => bytes.as_bytes().try_into().map_err(|_| mismatch())?,
            // 后 32 字节不可信，直接丢弃
            KeyFormat::ExpandedSecret64 => bytes.as_bytes()[..SEED_LEN]
                .try_into()
                .map_err(|_| mismatch())?,
            KeyFormat::Unrecognized => return Err(mismatch()),
        };

        let keypair = Keypair::from_seed(seed);
        tracing::debug!(format = format.as_str(), "keypair derived");
        Ok(keypair)
    }

    /// 比对扩展私钥内嵌的公钥（常量时间），仅用于诊断
    pub fn inspect_embedded(bytes: &KeyBytes, keypair: &Keypair) -> EmbeddedKeyCheck {
        if bytes.len() != EXPANDED_SECRET_LEN {
            return EmbeddedKeyCheck::NotPresent;
        }

        let embedded = &bytes.as_bytes()[SEED_LEN..];
        if bool::from(embedded.ct_eq(&keypair.public_key()[..])) {
            EmbeddedKeyCheck::Consistent
        } else {
            let mut copy = [0u8; PUBLIC_KEY_LEN];
            copy.copy_from_slice(embedded);
            EmbeddedKeyCheck::Diverged { embedded: copy }
        }
    }
}
