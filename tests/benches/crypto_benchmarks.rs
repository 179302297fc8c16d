//! # Ether-Probe Crypto Benchmarks
//!
//! | Crate | Operation |
//! |-------|-----------|
//! | ep-01 Key Material | Key generation, address derivation, hex codecs |
//! | ep-02 Signature Verification | Public key recovery, full verify |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ep_01_key_material::{
    decode_public_key, derive_address, encode_public_key, generate_key_pair, keccak256,
    InsecureTestEntropy, KeyPair, OsEntropy,
};
use ep_02_signature_verification::{
    recover_public_key, verify_signature, RecoverableSignature, VerifierConfig,
};
use k256::ecdsa::SigningKey;
use rand::Rng;
use std::time::Duration;

fn signed(pair: &KeyPair, message: &[u8]) -> Vec<u8> {
    let key = SigningKey::from_slice(&pair.private_key().to_bytes()[..]).unwrap();
    let (signature, recid) = key.sign_prehash_recoverable(&keccak256(message)).unwrap();
    let mut bytes = signature.to_bytes().to_vec();
    bytes.push(recid.to_byte());
    bytes
}

// ============================================================================
// EP-01: Key Material
// ============================================================================

fn bench_key_material(c: &mut Criterion) {
    let mut group = c.benchmark_group("ep-01-key-material");

    let os = OsEntropy::new();
    group.bench_function("generate_key_pair_os", |b| {
        b.iter(|| black_box(generate_key_pair(&os).unwrap()))
    });

    let seeded = InsecureTestEntropy::from_seed(7);
    group.bench_function("generate_key_pair_seeded", |b| {
        b.iter(|| black_box(generate_key_pair(&seeded).unwrap()))
    });

    let (pair, _) = generate_key_pair(&seeded).unwrap();
    group.bench_function("derive_address", |b| {
        b.iter(|| black_box(derive_address(black_box(pair.public_key()))))
    });

    let encoded = encode_public_key(pair.public_key());
    group.bench_function("decode_public_key", |b| {
        b.iter(|| black_box(decode_public_key(black_box(&encoded)).unwrap()))
    });

    for size in [32usize, 1024, 16 * 1024] {
        let data: Vec<u8> = (0..size).map(|_| rand::thread_rng().gen()).collect();
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("keccak256", size), &data, |b, data| {
            b.iter(|| black_box(keccak256(data)))
        });
    }

    group.finish();
}

// ============================================================================
// EP-02: Signature Verification
// ============================================================================

fn bench_signature_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("ep-02-signature-verification");
    group.measurement_time(Duration::from_secs(10));

    let (pair, _) = generate_key_pair(&OsEntropy::new()).unwrap();
    let message = b"benchmark transfer payload";
    let bytes = signed(&pair, message);
    let signature = RecoverableSignature::from_bytes(&bytes).unwrap();
    let hash = keccak256(message);
    let claimed = encode_public_key(pair.public_key());
    let config = VerifierConfig::default();

    group.bench_function("recover_public_key", |b| {
        b.iter(|| black_box(recover_public_key(&hash, &signature, &config).unwrap()))
    });

    group.bench_function("verify_signature", |b| {
        b.iter(|| black_box(verify_signature(message, &bytes, &claimed, &config).unwrap()))
    });

    let strict = VerifierConfig::strict();
    group.bench_function("verify_signature_strict", |b| {
        b.iter(|| black_box(verify_signature(message, &bytes, &claimed, &strict).unwrap()))
    });

    for size in [10usize, 100] {
        let batch: Vec<(Vec<u8>, Vec<u8>)> = (0..size)
            .map(|i| {
                let message = format!("message_{i}").into_bytes();
                let signature = signed(&pair, &message);
                (message, signature)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(
            BenchmarkId::new("verify_batch", size),
            &batch,
            |b, batch| {
                b.iter(|| {
                    let valid = batch
                        .iter()
                        .filter(|(m, s)| verify_signature(m, s, &claimed, &config) == Ok(true))
                        .count();
                    black_box(valid)
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_key_material, bench_signature_verification);
criterion_main!(benches);
