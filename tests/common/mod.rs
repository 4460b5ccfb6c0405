//! 测试辅助模块
//! 已知向量与输入构造工具

#![allow(dead_code)]

/// 64 字节扩展私钥（base58），前 32 字节为种子
pub const EXPANDED_KEY_B58: &str =
    "5A5BmQFg6q6s7dBXeLBsy3HuTwYSeDk5coHmqtoXcd8s3TCXYsKLts4vdmAQfgospX7Un1JEWMu7kmp9rAhUP2wN";

/// 上面扩展私钥的种子派生出的地址
pub const EXPANDED_KEY_ADDRESS: &str = "2UXVF3VjRHThrfK6HTjDFzH4WogX2aQ9d8cBMPsYyVNt";

/// 上面扩展私钥的种子（hex）
pub const EXPANDED_KEY_SEED_HEX: &str =
    "cfe4385aa62be1694e47b8e8de95239d642b7ea98ecedde1114dd6cc6ba9a6da";

/// RFC 8032 7.1 TEST 1
pub const RFC8032_SEED_HEX: &str =
    "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
pub const RFC8032_PUBLIC_HEX: &str =
    "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

/// 全零种子派生出的地址
pub const ZERO_SEED_ADDRESS: &str = "4zvwRjXUKGfvwnParsHAS3HuSVzV5cA4McphgmoCtajS";

/// 把字节渲染为 solana-keygen 风格的 JSON 数组
pub fn json_array(bytes: &[u8]) -> String {
    let items: Vec<String> = bytes.iter().map(|b| b.to_string()).collect();
    format!("[{}]", items.join(","))
}

/// seed || tail
pub fn concat(seed: &[u8], tail: &[u8]) -> Vec<u8> {
    let mut out = seed.to_vec();
    out.extend_from_slice(tail);
    out
}
