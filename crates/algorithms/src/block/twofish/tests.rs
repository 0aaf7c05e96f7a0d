use super::*;

fn roundtrip(key: &str, pt: &str, ct: &str) {
    let key = hex::decode(key).unwrap();
    let pt = hex::decode(pt).unwrap();
    let ct = hex::decode(ct).unwrap();

    let mut twofish = Twofish::new();
    twofish.init(Direction::Encrypt, CipherParameters::key(&key)).unwrap();
    let mut out = [0u8; 16];
    twofish.process_block(&pt, 0, &mut out, 0).unwrap();
    assert_eq!(&out[..], &ct[..]);

    twofish.init(Direction::Decrypt, CipherParameters::key(&key)).unwrap();
    twofish.process_block(&ct, 0, &mut out, 0).unwrap();
    assert_eq!(&out[..], &pt[..]);
}

#[test]
fn test_q_permutations() {
    assert_eq!(Q0[0], 0xA9);
    assert_eq!(Q1[0], 0x75);
}

#[test]
fn test_published_vectors() {
    // Twofish paper, ecb_tbl / ecb_ival
    roundtrip(
        "00000000000000000000000000000000",
        "00000000000000000000000000000000",
        "9f589f5cf6122c32b6bfec2f2ae8c35a",
    );
    roundtrip(
        "00000000000000000000000000000000",
        "9f589f5cf6122c32b6bfec2f2ae8c35a",
        "d491db16e7b1c39e86cb086b789f5419",
    );
    roundtrip(
        "0123456789abcdeffedcba98765432100011223344556677",
        "00000000000000000000000000000000",
        "cfd1d2e5a9be9cdf501f13b892bd2248",
    );
    roundtrip(
        "0123456789abcdeffedcba987654321000112233445566778899aabbccddeeff",
        "00000000000000000000000000000000",
        "37527be0052334b89f0cfccae87cfa20",
    );
}

#[test]
fn test_64_bit_key() {
    roundtrip(
        "0000000000000000",
        "00000000000000000000000000000000",
        "515b78c06ea3f058434c507310c2d874",
    );
    roundtrip(
        "0123456789abcdef",
        "00112233445566778899aabbccddeeff",
        "3dfe71a2ad1a75abbe554bcd20dfa9e6",
    );
}

#[test]
fn test_rejects_other_key_sizes() {
    let mut twofish = Twofish::new();
    for len in [0usize, 7, 12, 20, 40] {
        assert!(twofish
            .init(Direction::Encrypt, CipherParameters::key(&vec![0u8; len]))
            .is_err());
    }
}
