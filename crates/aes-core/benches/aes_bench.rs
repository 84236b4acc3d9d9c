use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;

use aes_core::{encrypt, encrypt_block, KeySchedule};

fn bench_key_schedule(c: &mut Criterion) {
    let mut group = c.benchmark_group("key_schedule");
    for key_len in [16usize, 24, 32] {
        let key = vec![0x2bu8; key_len];
        group.bench_with_input(BenchmarkId::from_parameter(key_len * 8), &key, |b, key| {
            b.iter(|| KeySchedule::new(key));
        });
    }
    group.finish();
}

fn bench_block(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
    let mut group = c.benchmark_group("encrypt_block");
    for key_len in [16usize, 24, 32] {
        let mut key = vec![0u8; key_len];
        rng.fill_bytes(&mut key);
        let round_keys = KeySchedule::new(&key).expect("valid key");
        let mut block = [0u8; 16];
        rng.fill_bytes(&mut block);
        group.bench_function(BenchmarkId::from_parameter(key_len * 8), |b| {
            b.iter(|| encrypt_block(&block, &round_keys));
        });
    }
    group.finish();
}

fn bench_ecb(c: &mut Criterion) {
    let mut rng = ChaCha20Rng::from_seed([4u8; 32]);
    let mut key = [0u8; 16];
    let mut message = vec![0u8; 4096];
    rng.fill_bytes(&mut key);
    rng.fill_bytes(&mut message);

    let mut group = c.benchmark_group("ecb");
    group.sample_size(20);
    group.throughput(Throughput::Bytes(message.len() as u64));
    group.bench_function("encrypt_4k", |b| {
        b.iter(|| encrypt(&message, &key));
    });
    group.finish();
}

criterion_group!(benches, bench_key_schedule, bench_block, bench_ecb);
criterion_main!(benches);
