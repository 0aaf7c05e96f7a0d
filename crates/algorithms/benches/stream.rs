//! Benchmarks for the stream cipher engines
//!
//! Measures keystream throughput through `process_bytes` at a few message
//! sizes, plus the per-byte `return_byte` path for RC4.

use cipherkit_algorithms::stream::{
    ChaCha, Grain128, GrainV1, Hc128, Hc256, Isaac, Rc4, Salsa20, Vmpc, VmpcKsa3,
};
use cipherkit_algorithms::{CipherParameters, StreamCipher};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SIZES: [usize; 3] = [64, 1024, 16384];

fn random_bytes(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}

fn params(rng: &mut ChaCha8Rng, key_len: usize, iv_len: Option<usize>) -> CipherParameters {
    let key = random_bytes(rng, key_len);
    match iv_len {
        Some(n) => {
            let iv = random_bytes(rng, n);
            CipherParameters::with_iv(CipherParameters::key(&key), &iv)
        }
        None => CipherParameters::key(&key),
    }
}

fn bench_engine<S: StreamCipher>(
    c: &mut Criterion,
    name: &str,
    mut engine: S,
    key_len: usize,
    iv_len: Option<usize>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    engine.init(params(&mut rng, key_len, iv_len)).unwrap();

    let mut group = c.benchmark_group(format!("stream_{}", name));
    for size in SIZES {
        let data = random_bytes(&mut rng, size);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            let mut out = vec![0u8; data.len()];
            b.iter(|| {
                engine
                    .process_bytes(black_box(data), 0, data.len(), &mut out, 0)
                    .unwrap();
                black_box(&out);
            });
        });
    }
    group.finish();
}

fn bench_process_bytes(c: &mut Criterion) {
    bench_engine(c, "rc4", Rc4::new(), 16, None);
    bench_engine(c, "salsa20", Salsa20::new(), 32, Some(8));
    bench_engine(c, "chacha20", ChaCha::new(), 32, Some(8));
    bench_engine(c, "hc128", Hc128::new(), 16, Some(16));
    bench_engine(c, "hc256", Hc256::new(), 32, Some(32));
    bench_engine(c, "grain_v1", GrainV1::new(), 10, Some(8));
    bench_engine(c, "grain128", Grain128::new(), 16, Some(12));
    bench_engine(c, "isaac", Isaac::new(), 32, None);
    bench_engine(c, "vmpc", Vmpc::new(), 16, Some(16));
    bench_engine(c, "vmpc_ksa3", VmpcKsa3::new(), 16, Some(16));
}

/// Benchmark the byte-at-a-time path
fn bench_return_byte(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut rc4 = Rc4::new();
    rc4.init(params(&mut rng, 16, None)).unwrap();

    let mut group = c.benchmark_group("stream_return_byte");
    group.throughput(Throughput::Bytes(1));
    group.bench_function("rc4", |b| {
        b.iter(|| black_box(rc4.return_byte(black_box(0x5a)).unwrap()));
    });
    group.finish();
}

/// Benchmark re-keying cost, dominated by the large-state key schedules
fn bench_setup(c: &mut Criterion) {
    let mut group = c.benchmark_group("stream_setup");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    let hc = params(&mut rng, 32, Some(32));
    group.bench_function("hc256", |b| {
        let mut engine = Hc256::new();
        b.iter(|| engine.init(black_box(hc.clone())).unwrap());
    });

    let isaac = params(&mut rng, 32, None);
    group.bench_function("isaac", |b| {
        let mut engine = Isaac::new();
        b.iter(|| engine.init(black_box(isaac.clone())).unwrap());
    });

    let vmpc = params(&mut rng, 16, Some(16));
    group.bench_function("vmpc", |b| {
        let mut engine = Vmpc::new();
        b.iter(|| engine.init(black_box(vmpc.clone())).unwrap());
    });

    group.finish();
}

criterion_group!(benches, bench_process_bytes, bench_return_byte, bench_setup);
criterion_main!(benches);
