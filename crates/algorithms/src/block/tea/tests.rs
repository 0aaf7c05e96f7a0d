use super::*;

fn check(key: &str, pt: &str, ct: &str) {
    let key = hex::decode(key).unwrap();
    let pt = hex::decode(pt).unwrap();

    let mut tea = Tea::new();
    tea.init(Direction::Encrypt, CipherParameters::key(&key)).unwrap();
    let mut out = [0u8; 8];
    tea.process_block(&pt, 0, &mut out, 0).unwrap();
    assert_eq!(hex::encode(out), ct);

    tea.init(Direction::Decrypt, CipherParameters::key(&key)).unwrap();
    let mut back = [0u8; 8];
    tea.process_block(&out, 0, &mut back, 0).unwrap();
    assert_eq!(&back[..], &pt[..]);
}

#[test]
fn test_vectors() {
    check("00000000000000000000000000000000", "0000000000000000", "41ea3a0a94baa940");
    check("0123456712345678234567893456789a", "0102030405060708", "773dc179878a81c0");
}

#[test]
fn test_key_size() {
    let mut tea = Tea::new();
    assert!(tea.init(Direction::Encrypt, CipherParameters::key(&[0u8; 8])).is_err());
}
