use super::*;

fn keystream<V: Variant>(key: &str, iv: &str, len: usize) -> String {
    let key = hex::decode(key).unwrap();
    let iv = hex::decode(iv).unwrap();

    let mut grain = Grain::<V>::new();
    grain.init(CipherParameters::with_iv(CipherParameters::key(&key), &iv)).unwrap();
    let mut out = vec![0u8; len];
    grain.process_bytes(&vec![0u8; len], 0, len, &mut out, 0).unwrap();
    hex::encode(out)
}

#[test]
fn test_grain_v1_vectors() {
    assert_eq!(
        keystream::<GrainV1Variant>("00000000000000000000", "0000000000000000", 10),
        "dee931cf1662a72f77d0"
    );
    assert_eq!(
        keystream::<GrainV1Variant>("0123456789abcdef1234", "0123456789abcdef", 10),
        "7f362bd3f7abae203664"
    );
}

#[test]
fn test_grain128_vectors() {
    assert_eq!(
        keystream::<Grain128Variant>(
            "00000000000000000000000000000000",
            "000000000000000000000000",
            16
        ),
        "f09b7bf7d7f6b5c2de2ffc73ac21397f"
    );
    assert_eq!(
        keystream::<Grain128Variant>(
            "0123456789abcdef123456789abcdef0",
            "0123456789abcdef12345678",
            16
        ),
        "afb5babfa8de896b4b9c6acaf7c4fbfd"
    );
}

#[test]
fn test_bytewise_matches_bulk_and_reset() {
    let key = [0x42u8; 16];
    let iv = [0x24u8; 12];
    let mut grain = Grain128::new();
    grain.init(CipherParameters::with_iv(CipherParameters::key(&key), &iv)).unwrap();

    let mut bulk = [0u8; 37];
    grain.process_bytes(&[0u8; 37], 0, 37, &mut bulk, 0).unwrap();

    grain.reset();
    let bytewise: Vec<u8> = (0..37).map(|_| grain.return_byte(0).unwrap()).collect();
    assert_eq!(&bulk[..], &bytewise[..]);
}

#[test]
fn test_parameter_checks() {
    let mut v1 = GrainV1::new();
    assert_eq!(v1.algorithm_name(), "Grain v1");
    assert!(v1.return_byte(0).is_err());
    assert!(v1.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 16]), &[0u8; 8])).is_err());
    assert!(v1.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 10]), &[0u8; 12])).is_err());
    assert!(v1.init(CipherParameters::key(&[0u8; 10])).is_err());

    let mut g128 = Grain128::new();
    assert_eq!(g128.algorithm_name(), "Grain-128");
    assert!(g128.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 10]), &[0u8; 12])).is_err());
    assert!(g128.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 16]), &[0u8; 8])).is_err());
}
