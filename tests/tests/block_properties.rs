//! Property-based tests shared by every block engine

use cipherkit_algorithms::block::{Aes, Cbc, Rijndael};
use cipherkit_api::{BlockCipher, CipherParameters, Direction};
use cipherkit_tests::block_cases;
use proptest::prelude::*;

fn key_material() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 255)
}

fn block_material() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 32)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_engine_decrypts_what_it_encrypts(material in key_material(), block in block_material()) {
        for case in block_cases() {
            for &key_len in case.key_sizes {
                let key = &material[..key_len];

                let mut enc = (case.make)();
                enc.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
                let bs = enc.block_size();
                let pt = &block[..bs];

                let mut ct = vec![0u8; bs];
                prop_assert_eq!(enc.process_block(pt, 0, &mut ct, 0).unwrap(), bs);

                let mut dec = (case.make)();
                dec.init(Direction::Decrypt, CipherParameters::key(key)).unwrap();
                let mut back = vec![0u8; bs];
                dec.process_block(&ct, 0, &mut back, 0).unwrap();

                prop_assert_eq!(&back[..], pt, "{} with {}-byte key", case.name, key_len);
            }
        }
    }

    #[test]
    fn process_block_is_stateless(material in key_material(), block in block_material()) {
        for case in block_cases() {
            let key = &material[..case.key_sizes[0]];
            let mut engine = (case.make)();
            engine.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
            let bs = engine.block_size();

            let mut first = vec![0u8; bs];
            let mut second = vec![0u8; bs];
            engine.process_block(&block[..bs], 0, &mut first, 0).unwrap();
            engine.reset();
            engine.process_block(&block[..bs], 0, &mut second, 0).unwrap();
            prop_assert_eq!(first, second, "{}", case.name);
        }
    }

    #[test]
    fn rijndael_128_agrees_with_aes(key_len in prop::sample::select(vec![16usize, 24, 32]),
                                    material in key_material(),
                                    block in block_material()) {
        let key = &material[..key_len];
        let mut aes = Aes::new();
        let mut rijndael = Rijndael::new(128).unwrap();
        aes.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
        rijndael.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();

        let mut a = [0u8; 16];
        let mut r = [0u8; 16];
        aes.process_block(&block[..16], 0, &mut a, 0).unwrap();
        rijndael.process_block(&block[..16], 0, &mut r, 0).unwrap();
        prop_assert_eq!(a, r);
    }

    #[test]
    fn cbc_round_trips_over_every_engine(material in key_material(),
                                         data in prop::collection::vec(any::<u8>(), 0..128)) {
        for case in block_cases() {
            let key = &material[..case.key_sizes[0]];
            let mut cbc = Cbc::new((case.make)());
            let bs = cbc.block_size();
            let iv = &material[200..200 + bs];
            let len = data.len() - data.len() % bs;
            let msg = &data[..len];

            cbc.init(Direction::Encrypt, CipherParameters::with_iv(CipherParameters::key(key), iv)).unwrap();
            let mut ct = vec![0u8; len];
            for off in (0..len).step_by(bs) {
                cbc.process_block(msg, off, &mut ct, off).unwrap();
            }

            cbc.init(Direction::Decrypt, CipherParameters::with_iv(CipherParameters::key(key), iv)).unwrap();
            let mut pt = vec![0u8; len];
            for off in (0..len).step_by(bs) {
                cbc.process_block(&ct, off, &mut pt, off).unwrap();
            }
            prop_assert_eq!(&pt[..], msg, "{}/CBC", case.name);
        }
    }

    #[test]
    fn output_outside_the_window_is_untouched(material in key_material(),
                                              block in block_material(),
                                              out_off in 1usize..24,
                                              sentinel in any::<u8>()) {
        for case in block_cases() {
            let key = &material[..case.key_sizes[0]];
            let mut engine = (case.make)();
            engine.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
            let bs = engine.block_size();

            let mut expected = vec![0u8; bs];
            engine.process_block(&block[..bs], 0, &mut expected, 0).unwrap();

            let mut out = vec![sentinel; out_off + bs + 16];
            prop_assert_eq!(engine.process_block(&block[..bs], 0, &mut out, out_off).unwrap(), bs);
            prop_assert_eq!(&out[out_off..out_off + bs], &expected[..], "{}", case.name);
            prop_assert!(out[..out_off].iter().all(|&b| b == sentinel), "{} wrote before the window", case.name);
            prop_assert!(out[out_off + bs..].iter().all(|&b| b == sentinel), "{} wrote past the window", case.name);
        }
    }

    #[test]
    fn short_output_is_rejected(material in key_material()) {
        for case in block_cases() {
            let key = &material[..case.key_sizes[0]];
            let mut engine = (case.make)();
            engine.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
            let bs = engine.block_size();

            let input = vec![0u8; bs];
            let mut out = vec![0u8; bs];
            prop_assert!(engine.process_block(&input, 0, &mut out, 1).is_err(), "{}", case.name);
            if bs > 1 {
                prop_assert!(engine.process_block(&input, 1, &mut out, 0).is_err(), "{}", case.name);
            }
        }
    }
}

#[test]
fn uniform_blocks_round_trip() {
    let material: Vec<u8> = (0..=254).collect();
    for case in block_cases() {
        for &key_len in case.key_sizes {
            let key = &material[..key_len];
            let mut enc = (case.make)();
            let mut dec = (case.make)();
            enc.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
            dec.init(Direction::Decrypt, CipherParameters::key(key)).unwrap();
            let bs = enc.block_size();

            for fill in [0x00u8, 0xff] {
                let pt = vec![fill; bs];
                let mut ct = vec![0u8; bs];
                let mut back = vec![0u8; bs];
                enc.process_block(&pt, 0, &mut ct, 0).unwrap();
                dec.process_block(&ct, 0, &mut back, 0).unwrap();
                assert_eq!(back, pt, "{} with {}-byte key, fill {:02x}", case.name, key_len, fill);
            }
        }
    }
}
