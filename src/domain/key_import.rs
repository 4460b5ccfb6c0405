//! 私钥导入服务
//!
//! 把解码、格式识别、派生、地址编码和校验串成一次调用。
//! 纯计算：不做 I/O，不缓存派生出的私钥材料。

use crate::config::ImportConfig;
use crate::domain::address::{AddressEncoder, WalletAddress};
use crate::domain::decoder::Decoder;
use crate::domain::derivation::{EmbeddedKeyCheck, Keypair, KeypairDeriver};
use crate::domain::format_resolver::FormatResolver;
use crate::domain::import_validator::{ImportValidator, Outcome};
use crate::domain::key_material::{KeyFormat, RawKeyInput};
use crate::error::ImportError;
use crate::infrastructure::log_redact::redact_address;

/// 导入成功的结果
#[derive(Debug)]
pub struct ImportedKey {
    pub keypair: Keypair,
    pub address: WalletAddress,
    pub format: KeyFormat,
    pub embedded_key: EmbeddedKeyCheck,
}

impl ImportedKey {
    /// 交出密钥对，其余信息随之释放
    pub fn into_keypair(self) -> Keypair {
        self.keypair
    }
}

/// 私钥导入服务
#[derive(Debug, Clone)]
pub struct KeyImporter {
    config: ImportConfig,
}

impl Default for KeyImporter {
    fn default() -> Self {
        Self::new(ImportConfig::permissive())
    }
}

impl KeyImporter {
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// 导入私钥
    ///
    /// # 流程
    /// 1. 解码原始输入
    /// 2. 按长度识别格式
    /// 3. 由种子派生密钥对（扩展私钥的后半段被丢弃）
    /// 4. 编码地址并检查内嵌公钥
    /// 5. 与预期地址比对
    pub fn import(
        &self,
        input: &RawKeyInput,
        expected_address: Option<&str>,
    ) -> Result<ImportedKey, ImportError> {
        let (imported, outcome) = self.import_with_outcome(input, expected_address)?;
        match outcome {
            Outcome::Accepted(_) => Ok(imported),
            Outcome::Rejected(mismatch) => {
                tracing::warn!(
                    derived = %redact_address(mismatch.derived.as_str()),
                    expected = %redact_address(mismatch.expected.as_str()),
                    "key import rejected: address mismatch"
                );
                Err(ImportError::Mismatch(mismatch))
            }
        }
    }

    /// 导入私钥，并把校验结论作为值返回而不是错误
    pub fn import_with_outcome(
        &self,
        input: &RawKeyInput,
        expected_address: Option<&str>,
    ) -> Result<(ImportedKey, Outcome), ImportError> {
        // 预期地址先解析，格式错误时不必派生私钥
        let expected = expected_address
            .map(WalletAddress::parse)
            .transpose()
            .map_err(ImportError::InvalidExpectedAddress)?;
        if expected.is_none() && self.config.require_expected_address {
            return Err(ImportError::ExpectedAddressRequired);
        }

        // 1. 解码
        let bytes = Decoder::decode(input)?;

        // 2. 识别格式
        let format = FormatResolver::resolve(&bytes)?;
        self.ensure_enabled(format)?;

        // 3. 派生
        let keypair = KeypairDeriver::derive(&bytes, format)?;

        // 4. 地址与内嵌公钥
        let address = AddressEncoder::encode(&keypair.public_key());
        let embedded_key = KeypairDeriver::inspect_embedded(&bytes, &keypair);
        drop(bytes);

        if let EmbeddedKeyCheck::Diverged { embedded } = embedded_key {
            let embedded = AddressEncoder::encode(&embedded);
            tracing::warn!(
                derived = %redact_address(address.as_str()),
                embedded = %redact_address(embedded.as_str()),
                "expanded key embeds a public key that its seed does not derive"
            );
            if self.config.reject_inconsistent_expanded {
                return Err(ImportError::InconsistentExpandedKey {
                    derived: address,
                    embedded: embedded.to_string(),
                });
            }
        }

        let imported = ImportedKey {
            keypair,
            address,
            format,
            embedded_key,
        };

        // 5. 校验
        let outcome = ImportValidator::validate(&imported, expected.as_ref());
        tracing::info!(
            address = %redact_address(imported.address.as_str()),
            format = format.as_str(),
            accepted = outcome.is_accepted(),
            "key import completed"
        );

        Ok((imported, outcome))
    }

    fn ensure_enabled(&self, format: KeyFormat) -> Result<(), ImportError> {
        let enabled = match format {
            KeyFormat::Seed32 => self.config.allow_seed32,
            KeyFormat::ExpandedSecret64 => self.config.allow_expanded64,
            KeyFormat::Unrecognized => false,
        };
        if enabled {
            Ok(())
        } else {
            Err(ImportError::FormatDisabled(format))
        }
    }
}
