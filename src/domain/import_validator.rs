//! 导入结果校验
//!
//! 调用方已知预期地址时，在密钥对被用于签名之前发现格式误判。

use crate::domain::address::WalletAddress;
use crate::domain::key_import::ImportedKey;
use crate::error::MismatchError;

/// 校验结论
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Accepted(WalletAddress),
    Rejected(MismatchError),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn into_result(self) -> Result<WalletAddress, MismatchError> {
        match self {
            Outcome::Accepted(address) => Ok(address),
            Outcome::Rejected(mismatch) => Err(mismatch),
        }
    }
}

pub struct ImportValidator;

impl ImportValidator {
    /// 未提供预期地址或地址一致 → `Accepted`；不一致 → `Rejected`，携带两个地址
    pub fn validate(imported: &ImportedKey, expected: Option<&WalletAddress>) -> Outcome {
        Self::check_address(&imported.address, expected)
    }

    pub(crate) fn check_address(
        derived: &WalletAddress,
        expected: Option<&WalletAddress>,
    ) -> Outcome {
        match expected {
            Some(expected) if expected != derived => Outcome::Rejected(MismatchError {
                derived: derived.clone(),
                expected: expected.clone(),
            }),
            _ => Outcome::Accepted(derived.clone()),
        }
    }
}
