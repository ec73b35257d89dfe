use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use blockpipe_core::chunking::ChunkSet;
use blockpipe_core::cipher::{ChunkCipher, KeyMaterial, KeystreamCipher};

fn bench_split(c: &mut Criterion) {
    let data = vec![0xA5u8; 4 * 1024 * 1024];
    let mut group = c.benchmark_group("split");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for &chunk_size in &[64 * 1024usize, 256 * 1024, 1024 * 1024] {
        group.bench_with_input(
            BenchmarkId::from_parameter(chunk_size),
            &chunk_size,
            |b, &chunk_size| {
                b.iter(|| ChunkSet::split(&data, chunk_size).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_keystream(c: &mut Criterion) {
    let cipher = KeystreamCipher::new();
    let keys = KeyMaterial::new([0x42u8; 32], [0x17u8; 16]);
    let chunk = vec![0x5Au8; 64 * 1024];

    let mut group = c.benchmark_group("keystream");
    group.throughput(Throughput::Bytes(chunk.len() as u64));
    group.bench_function("encrypt_64k_chunk", |b| {
        b.iter(|| cipher.encrypt_chunk(&chunk, &keys, 7).unwrap());
    });
    group.finish();
}

criterion_group!(benches, bench_split, bench_keystream);
criterion_main!(benches);
