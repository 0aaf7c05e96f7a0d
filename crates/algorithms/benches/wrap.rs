//! Benchmarks for the key-wrap engines
//!
//! Wrap and unwrap of a 32-byte key (24 for Triple-DES) under each scheme.

use cipherkit_algorithms::block::{Aes, Serpent};
use cipherkit_algorithms::wrap::{AesWrap, AesWrapPad, DesEdeWrap, Rc2Wrap, Rfc3211Wrap};
use cipherkit_algorithms::{CipherParameters, Direction, Wrapper};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn random_bytes(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rng.fill(&mut bytes[..]);
    bytes
}

/// Wrap once, then time wrap and unwrap separately
fn bench_pair<W: Wrapper>(
    c: &mut Criterion,
    name: &str,
    mut wrapper: W,
    mut unwrapper: W,
    wrap_params: CipherParameters,
    unwrap_params: CipherParameters,
    key: &[u8],
) {
    wrapper.init(Direction::Encrypt, wrap_params).unwrap();
    unwrapper.init(Direction::Decrypt, unwrap_params).unwrap();
    let wrapped = wrapper.wrap(key, 0, key.len()).unwrap();

    let mut group = c.benchmark_group(format!("wrap_{}", name));
    group.throughput(Throughput::Bytes(key.len() as u64));

    group.bench_function("wrap", |b| {
        b.iter(|| black_box(wrapper.wrap(black_box(key), 0, key.len()).unwrap()));
    });
    group.bench_function("unwrap", |b| {
        b.iter(|| black_box(unwrapper.unwrap(black_box(&wrapped), 0, wrapped.len()).unwrap()));
    });

    group.finish();
}

fn bench_rfc3394(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let kek = random_bytes(&mut rng, 16);
    let key = random_bytes(&mut rng, 32);

    bench_pair(
        c,
        "aes_rfc3394",
        AesWrap::new(Aes::new()),
        AesWrap::new(Aes::new()),
        CipherParameters::key(&kek),
        CipherParameters::key(&kek),
        &key,
    );
}

fn bench_rfc5649(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let kek = random_bytes(&mut rng, 16);
    let key = random_bytes(&mut rng, 29);

    bench_pair(
        c,
        "aes_rfc5649",
        AesWrapPad::new(Aes::new()),
        AesWrapPad::new(Aes::new()),
        CipherParameters::key(&kek),
        CipherParameters::key(&kek),
        &key,
    );
}

fn bench_rfc3211(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let kek = random_bytes(&mut rng, 32);
    let iv = random_bytes(&mut rng, 16);
    let key = random_bytes(&mut rng, 32);

    let with_iv = CipherParameters::with_iv(CipherParameters::key(&kek), &iv);
    bench_pair(
        c,
        "serpent_rfc3211",
        Rfc3211Wrap::new(Serpent::new()),
        Rfc3211Wrap::new(Serpent::new()),
        CipherParameters::with_random(with_iv.clone(), ChaCha8Rng::seed_from_u64(42)),
        with_iv,
        &key,
    );
}

fn bench_cms(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let kek = random_bytes(&mut rng, 24);
    let key = random_bytes(&mut rng, 24);

    bench_pair(
        c,
        "desede_cms",
        DesEdeWrap::new(),
        DesEdeWrap::new(),
        CipherParameters::with_random(CipherParameters::key(&kek), ChaCha8Rng::seed_from_u64(42)),
        CipherParameters::key(&kek),
        &key,
    );

    let rc2_kek = random_bytes(&mut rng, 16);
    let rc2_key = random_bytes(&mut rng, 16);
    bench_pair(
        c,
        "rc2_cms",
        Rc2Wrap::new(),
        Rc2Wrap::new(),
        CipherParameters::with_random(
            CipherParameters::rc2(&rc2_kek, 128),
            ChaCha8Rng::seed_from_u64(42),
        ),
        CipherParameters::rc2(&rc2_kek, 128),
        &rc2_key,
    );
}

criterion_group!(benches, bench_rfc3394, bench_rfc5649, bench_rfc3211, bench_cms);
criterion_main!(benches);
