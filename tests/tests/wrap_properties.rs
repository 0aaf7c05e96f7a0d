//! Property-based tests for the key-wrap engines

use cipherkit_algorithms::block::{Aes, Camellia, Serpent, Twofish};
use cipherkit_algorithms::wrap::{
    AesWrap, AesWrapPad, CamelliaWrap, DesEdeWrap, Rc2Wrap, Rfc3211Wrap, SerpentWrap, TwofishWrap,
};
use cipherkit_api::{CipherParameters, Direction, Error, Wrapper};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Wrap `key` with one engine and unwrap it with a fresh one
fn round_trip<W: Wrapper>(
    mut wrapper: W,
    mut unwrapper: W,
    wrap_params: CipherParameters,
    unwrap_params: CipherParameters,
    key: &[u8],
) -> (Vec<u8>, W) {
    wrapper.init(Direction::Encrypt, wrap_params).unwrap();
    unwrapper.init(Direction::Decrypt, unwrap_params).unwrap();
    let wrapped = wrapper.wrap(key, 0, key.len()).unwrap();
    let unwrapped = unwrapper.unwrap(&wrapped, 0, wrapped.len()).unwrap();
    assert_eq!(unwrapped.as_slice(), key);
    (wrapped, unwrapper)
}

fn assert_rejected<W: Wrapper>(unwrapper: &mut W, wrapped: &[u8]) {
    let err = unwrapper.unwrap(wrapped, 0, wrapped.len()).unwrap_err();
    assert!(matches!(err, Error::InvalidCiphertext { .. }), "unexpected {:?}", err);
}

fn flip(data: &[u8], bit: usize) -> Vec<u8> {
    let mut out = data.to_vec();
    let bit = bit % (out.len() * 8);
    out[bit / 8] ^= 1 << (bit % 8);
    out
}

fn semiblocks() -> impl Strategy<Value = Vec<u8>> {
    (2usize..8).prop_flat_map(|n| prop::collection::vec(any::<u8>(), n * 8))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn rfc3394_round_trips_and_detects_flips(kek in any::<[u8; 32]>(), key in semiblocks(), bit in any::<usize>()) {
        let p = || CipherParameters::key(&kek);

        let (wrapped, mut un) = round_trip(AesWrap::default(), AesWrap::default(), p(), p(), &key);
        prop_assert_eq!(wrapped.len(), key.len() + 8);
        assert_rejected(&mut un, &flip(&wrapped, bit));

        let (wrapped, mut un) = round_trip(CamelliaWrap::default(), CamelliaWrap::default(), p(), p(), &key);
        assert_rejected(&mut un, &flip(&wrapped, bit));

        let (wrapped, mut un) = round_trip(SerpentWrap::default(), SerpentWrap::default(), p(), p(), &key);
        assert_rejected(&mut un, &flip(&wrapped, bit));

        let (wrapped, mut un) = round_trip(TwofishWrap::default(), TwofishWrap::default(), p(), p(), &key);
        assert_rejected(&mut un, &flip(&wrapped, bit));
    }

    #[test]
    fn rfc3394_custom_iv_must_match(kek in any::<[u8; 16]>(), iv in any::<[u8; 8]>(), key in semiblocks()) {
        let with_iv = CipherParameters::with_iv(CipherParameters::key(&kek), &iv);
        let (wrapped, _) = round_trip(AesWrap::default(), AesWrap::default(), with_iv.clone(), with_iv, &key);

        let mut default_iv = AesWrap::new(Aes::new());
        default_iv.init(Direction::Decrypt, CipherParameters::key(&kek)).unwrap();
        prop_assume!(iv != [0xa6; 8]);
        assert_rejected(&mut default_iv, &wrapped);
    }

    #[test]
    fn rfc5649_round_trips_any_length(kek in any::<[u8; 16]>(),
                                      key in prop::collection::vec(any::<u8>(), 1..64),
                                      bit in any::<usize>()) {
        let p = || CipherParameters::key(&kek);
        let (wrapped, mut un) = round_trip(AesWrapPad::default(), AesWrapPad::default(), p(), p(), &key);
        prop_assert_eq!(wrapped.len(), (key.len() + 7) / 8 * 8 + 8);
        prop_assert!(wrapped.len() >= 16);
        assert_rejected(&mut un, &flip(&wrapped, bit));
    }

    #[test]
    fn rfc3211_round_trips(kek in any::<[u8; 16]>(),
                           iv in any::<[u8; 16]>(),
                           key in prop::collection::vec(any::<u8>(), 0..=64),
                           seed in any::<u64>(),
                           bit in 0usize..128) {
        let with_iv = || CipherParameters::with_iv(CipherParameters::key(&kek), &iv);
        let (wrapped, mut un) = round_trip(
            Rfc3211Wrap::new(Aes::new()),
            Rfc3211Wrap::new(Aes::new()),
            CipherParameters::with_random(with_iv(), ChaCha8Rng::seed_from_u64(seed)),
            with_iv(),
            &key,
        );
        prop_assert_eq!(wrapped.len() % 16, 0);
        prop_assert!(wrapped.len() >= 32);
        prop_assert!(wrapped.len() >= key.len() + 4);

        // The length byte and check bytes live in the first block
        assert_rejected(&mut un, &flip(&wrapped, bit));
    }

    #[test]
    fn rfc3211_over_other_engines(kek in any::<[u8; 32]>(), iv in any::<[u8; 16]>(), key in prop::collection::vec(any::<u8>(), 1..40)) {
        let with_iv = || CipherParameters::with_iv(CipherParameters::key(&kek), &iv);
        round_trip(
            Rfc3211Wrap::new(Serpent::new()),
            Rfc3211Wrap::new(Serpent::new()),
            CipherParameters::with_random(with_iv(), ChaCha8Rng::seed_from_u64(42)),
            with_iv(),
            &key,
        );
        round_trip(
            Rfc3211Wrap::new(Twofish::new()),
            Rfc3211Wrap::new(Twofish::new()),
            CipherParameters::with_random(with_iv(), ChaCha8Rng::seed_from_u64(42)),
            with_iv(),
            &key,
        );
        round_trip(
            Rfc3211Wrap::new(Camellia::new()),
            Rfc3211Wrap::new(Camellia::new()),
            CipherParameters::with_random(with_iv(), ChaCha8Rng::seed_from_u64(42)),
            with_iv(),
            &key,
        );
    }

    #[test]
    fn desede_cms_round_trips(kek in any::<[u8; 24]>(),
                              blocks in 1usize..4,
                              material in prop::collection::vec(any::<u8>(), 24),
                              seed in any::<u64>(),
                              bit in any::<usize>()) {
        let key = &material[..blocks * 8];
        let (wrapped, mut un) = round_trip(
            DesEdeWrap::new(),
            DesEdeWrap::new(),
            CipherParameters::with_random(CipherParameters::key(&kek), ChaCha8Rng::seed_from_u64(seed)),
            CipherParameters::key(&kek),
            key,
        );
        prop_assert_eq!(wrapped.len(), key.len() + 16);
        assert_rejected(&mut un, &flip(&wrapped, bit));
    }

    #[test]
    fn rc2_cms_round_trips(kek in any::<[u8; 16]>(),
                           bits in prop::sample::select(vec![40usize, 64, 128]),
                           key in prop::collection::vec(any::<u8>(), 1..40),
                           seed in any::<u64>(),
                           bit in any::<usize>()) {
        let (wrapped, mut un) = round_trip(
            Rc2Wrap::new(),
            Rc2Wrap::new(),
            CipherParameters::with_random(CipherParameters::rc2(&kek, bits), ChaCha8Rng::seed_from_u64(seed)),
            CipherParameters::rc2(&kek, bits),
            &key,
        );
        prop_assert_eq!(wrapped.len() % 8, 0);
        assert_rejected(&mut un, &flip(&wrapped, bit));
    }
}

#[test]
fn rc2_wrapped_length_covers_length_byte() {
    let kek = [0x11u8; 16];
    for len in 1..=24usize {
        let key = vec![0x5au8; len];
        let (wrapped, _) = round_trip(
            Rc2Wrap::new(),
            Rc2Wrap::new(),
            CipherParameters::with_random(CipherParameters::rc2(&kek, 128), ChaCha8Rng::seed_from_u64(42)),
            CipherParameters::rc2(&kek, 128),
            &key,
        );
        assert_eq!(wrapped.len(), 8 + (len + 1 + 7) / 8 * 8 + 8);
    }
}
