//! Property-based tests shared by every stream engine

use cipherkit_api::StreamCipher;
use cipherkit_tests::{stream_cases, MAX_STREAM_MATERIAL};
use proptest::prelude::*;

fn material() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), MAX_STREAM_MATERIAL)
}

fn message() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..300)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn bytewise_matches_bulk(material in material(), msg in message()) {
        for case in stream_cases() {
            let mut bulk = (case.make)();
            bulk.init(case.params(&material)).unwrap();
            let mut expected = vec![0u8; msg.len()];
            bulk.process_bytes(&msg, 0, msg.len(), &mut expected, 0).unwrap();

            let mut bytewise = (case.make)();
            bytewise.init(case.params(&material)).unwrap();
            let actual: Vec<u8> = msg.iter().map(|&b| bytewise.return_byte(b).unwrap()).collect();

            prop_assert_eq!(actual, expected, "{}", case.name);
        }
    }

    #[test]
    fn split_calls_match_one_call(material in material(), msg in message(), split in 0usize..300) {
        let split = split.min(msg.len());
        for case in stream_cases() {
            let mut whole = (case.make)();
            whole.init(case.params(&material)).unwrap();
            let mut expected = vec![0u8; msg.len()];
            whole.process_bytes(&msg, 0, msg.len(), &mut expected, 0).unwrap();

            let mut parts = (case.make)();
            parts.init(case.params(&material)).unwrap();
            let mut actual = vec![0u8; msg.len()];
            parts.process_bytes(&msg, 0, split, &mut actual, 0).unwrap();
            parts.process_bytes(&msg, split, msg.len() - split, &mut actual, split).unwrap();

            prop_assert_eq!(actual, expected, "{}", case.name);
        }
    }

    #[test]
    fn applying_twice_restores_plaintext(material in material(), msg in message()) {
        for case in stream_cases() {
            let mut enc = (case.make)();
            enc.init(case.params(&material)).unwrap();
            let mut ct = vec![0u8; msg.len()];
            enc.process_bytes(&msg, 0, msg.len(), &mut ct, 0).unwrap();

            let mut dec = (case.make)();
            dec.init(case.params(&material)).unwrap();
            let mut pt = vec![0u8; msg.len()];
            dec.process_bytes(&ct, 0, ct.len(), &mut pt, 0).unwrap();

            prop_assert_eq!(pt, msg.clone(), "{}", case.name);
        }
    }

    #[test]
    fn reset_restarts_the_keystream(material in material(), msg in message()) {
        for case in stream_cases() {
            let mut engine = (case.make)();
            engine.init(case.params(&material)).unwrap();

            let mut first = vec![0u8; msg.len()];
            engine.process_bytes(&msg, 0, msg.len(), &mut first, 0).unwrap();

            engine.reset();
            let mut second = vec![0u8; msg.len()];
            engine.process_bytes(&msg, 0, msg.len(), &mut second, 0).unwrap();
            prop_assert_eq!(&first, &second, "{}", case.name);

            engine.reset();
            engine.reset();
            let mut third = vec![0u8; msg.len()];
            engine.process_bytes(&msg, 0, msg.len(), &mut third, 0).unwrap();
            prop_assert_eq!(&first, &third, "{} after double reset", case.name);
        }
    }

    #[test]
    fn oversized_windows_are_rejected(material in material(), len in 1usize..64) {
        for case in stream_cases() {
            let mut engine = (case.make)();
            engine.init(case.params(&material)).unwrap();

            let input = vec![0u8; len];
            let mut short = vec![0u8; len - 1];
            prop_assert!(engine.process_bytes(&input, 0, len, &mut short, 0).is_err(), "{}", case.name);
            prop_assert!(engine.process_bytes(&input, 1, len, &mut vec![0u8; len], 0).is_err(), "{}", case.name);
        }
    }
}

#[test]
fn material_covers_every_case() {
    for case in stream_cases() {
        assert!(case.material_len() <= MAX_STREAM_MATERIAL, "{}", case.name);
    }
}
