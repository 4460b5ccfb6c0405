//! Domain 模块
//!
//! 私钥导入流水线：Decoder → FormatResolver → KeypairDeriver → AddressEncoder → ImportValidator

pub mod address;
pub mod decoder;
pub mod derivation;
pub mod format_resolver;
pub mod import_validator;
pub mod key_import;
pub mod key_material;

// 重新导出常用类型
pub use address::{AddressEncoder, WalletAddress};
pub use decoder::{Decoder, TextEncoding};
pub use derivation::{EmbeddedKeyCheck, Keypair, KeypairDeriver};
pub use format_resolver::FormatResolver;
pub use import_validator::{ImportValidator, Outcome};
pub use key_import::{ImportedKey, KeyImporter};
pub use key_material::{KeyBytes, KeyFormat, RawKeyInput};
