use super::*;

// RFC 2268 section 5
const VECTORS: [(&str, usize, &str, &str); 7] = [
    ("0000000000000000", 63, "0000000000000000", "ebb773f993278eff"),
    ("ffffffffffffffff", 64, "ffffffffffffffff", "278b27e42e2f0d49"),
    ("3000000000000000", 64, "1000000000000001", "30649edf9be7d2c2"),
    ("88", 64, "0000000000000000", "61a8a244adacccf0"),
    ("88bca90e90875a", 64, "0000000000000000", "6ccf4308974c267f"),
    ("88bca90e90875a7f0f79c384627bafb2", 64, "0000000000000000", "1a807d272bbe5db1"),
    ("88bca90e90875a7f0f79c384627bafb2", 128, "0000000000000000", "2269552ab0f85ca6"),
];

#[test]
fn test_rfc2268_vectors() {
    for (key, bits, pt, ct) in VECTORS {
        let key = hex::decode(key).unwrap();
        let pt = hex::decode(pt).unwrap();
        let ct = hex::decode(ct).unwrap();

        let mut rc2 = Rc2::new();
        rc2.init(Direction::Encrypt, CipherParameters::rc2(&key, bits)).unwrap();
        let mut out = [0u8; 8];
        rc2.process_block(&pt, 0, &mut out, 0).unwrap();
        assert_eq!(&out[..], &ct[..], "key {} bits {}", hex::encode(&key), bits);

        rc2.init(Direction::Decrypt, CipherParameters::rc2(&key, bits)).unwrap();
        rc2.process_block(&ct, 0, &mut out, 0).unwrap();
        assert_eq!(&out[..], &pt[..]);
    }
}

#[test]
fn test_plain_key_uses_full_length() {
    let key = hex::decode("88bca90e90875a7f0f79c384627bafb2").unwrap();

    let mut plain = Rc2::new();
    plain.init(Direction::Encrypt, CipherParameters::key(&key)).unwrap();
    let mut explicit = Rc2::new();
    explicit.init(Direction::Encrypt, CipherParameters::rc2(&key, 128)).unwrap();

    let mut a = [0u8; 8];
    let mut b = [0u8; 8];
    plain.process_block(&[0u8; 8], 0, &mut a, 0).unwrap();
    explicit.process_block(&[0u8; 8], 0, &mut b, 0).unwrap();
    assert_eq!(a, b);
    assert_eq!(&a[..], &hex::decode("2269552ab0f85ca6").unwrap()[..]);
}

#[test]
fn test_parameter_bounds() {
    let mut rc2 = Rc2::new();
    assert!(rc2.init(Direction::Encrypt, CipherParameters::key(&[])).is_err());
    assert!(rc2.init(Direction::Encrypt, CipherParameters::key(&[0u8; 129])).is_err());
    assert!(rc2.init(Direction::Encrypt, CipherParameters::rc2(&[1u8; 8], 0)).is_err());
    assert!(rc2.init(Direction::Encrypt, CipherParameters::rc2(&[1u8; 8], 1025)).is_err());
    assert!(rc2.init(Direction::Encrypt, CipherParameters::rc2(&[1u8; 8], 1024)).is_ok());
    assert!(rc2.init(Direction::Encrypt, CipherParameters::rc5(&[1u8; 8], 12)).is_err());
}
