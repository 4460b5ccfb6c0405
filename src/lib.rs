//! IronKey - ed25519 私钥导入核心
//!
//! 把格式不确定的私钥材料（32 字节种子、64 字节扩展私钥；base58、hex、
//! JSON 数组）确定性地还原为用户想要的那一个密钥对及其钱包地址，否则明确失败。

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// 重新导出常用类型
pub use domain::{ImportedKey, KeyImporter, Outcome, RawKeyInput, WalletAddress};
pub use error::{
    AddressError, DecodeError, DeriveError, ImportError, MismatchError, ResolveError,
};

// 统一模块导出
pub mod prelude {
    pub use crate::{
        config::{Config, ImportConfig},
        domain::{
            AddressEncoder, Decoder, EmbeddedKeyCheck, FormatResolver, ImportValidator,
            ImportedKey, KeyBytes, KeyFormat, KeyImporter, Keypair, KeypairDeriver, Outcome,
            RawKeyInput, WalletAddress,
        },
        error::{ImportError, MismatchError},
    };
}
