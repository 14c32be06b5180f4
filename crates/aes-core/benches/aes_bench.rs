use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{decrypt_cbc, encrypt_block, encrypt_cbc, encrypt_ecb, MasterKey};

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
    let mut group = c.benchmark_group("block");
    for key_len in [16usize, 24, 32] {
        let mut key_bytes = vec![0u8; key_len];
        rng.fill_bytes(&mut key_bytes);
        let key = MasterKey::from_bytes(&key_bytes).expect("valid key length");
        group.bench_function(BenchmarkId::new("expand_key", key_len * 8), |b| {
            b.iter(|| key.expand());
        });

        let round_keys = key.expand();
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        group.bench_function(BenchmarkId::new("encrypt_block", key_len * 8), |b| {
            b.iter(|| encrypt_block(&block, &round_keys));
        });
    }
    group.finish();
}

fn bench_modes(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
    let key = MasterKey::from([0u8; 16]);
    let iv = [0u8; 16];

    let mut group = c.benchmark_group("modes");
    group.sample_size(20);
    for size in [64usize, 1024, 16 * 1024] {
        let mut data = vec![0u8; size];
        rng.fill_bytes(&mut data);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("ecb_encrypt", size), &data, |b, data| {
            b.iter(|| encrypt_ecb(data, &key));
        });
        group.bench_with_input(BenchmarkId::new("cbc_encrypt", size), &data, |b, data| {
            b.iter(|| encrypt_cbc(data, &key, &iv));
        });
        let ciphertext = encrypt_cbc(&data, &key, &iv).expect("encrypt");
        group.bench_with_input(
            BenchmarkId::new("cbc_decrypt", size),
            &ciphertext,
            |b, ct| {
                b.iter(|| decrypt_cbc(ct, &key, &iv));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_block, bench_modes);
criterion_main!(benches);
