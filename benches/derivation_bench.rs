//! 私钥导入性能基准测试
//! 使用criterion进行性能测试

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ironkey::domain::{Decoder, FormatResolver, KeyImporter, KeypairDeriver, RawKeyInput};

const EXPANDED_KEY_B58: &str =
    "5A5BmQFg6q6s7dBXeLBsy3HuTwYSeDk5coHmqtoXcd8s3TCXYsKLts4vdmAQfgospX7Un1JEWMu7kmp9rAhUP2wN";

fn bench_decode(c: &mut Criterion) {
    let input = RawKeyInput::from(EXPANDED_KEY_B58);
    c.bench_function("decode_base58_expanded", |b| {
        b.iter(|| Decoder::decode(black_box(&input)))
    });
}

fn bench_derive(c: &mut Criterion) {
    let bytes = Decoder::decode(&RawKeyInput::from(EXPANDED_KEY_B58)).unwrap();
    let format = FormatResolver::resolve(&bytes).unwrap();
    c.bench_function("derive_expanded_secret64", |b| {
        b.iter(|| KeypairDeriver::derive(black_box(&bytes), black_box(format)))
    });
}

fn bench_full_import(c: &mut Criterion) {
    let importer = KeyImporter::default();
    let input = RawKeyInput::from(EXPANDED_KEY_B58);
    c.bench_function("import_with_expected_address", |b| {
        b.iter(|| {
            importer.import(
                black_box(&input),
                Some("2UXVF3VjRHThrfK6HTjDFzH4WogX2aQ9d8cBMPsYyVNt"),
            )
        })
    });
}

criterion_group!(benches, bench_decode, bench_derive, bench_full_import);
criterion_main!(benches);
