use super::*;

fn run<E: BlockCipher>(engine: &mut E, direction: Direction, key: &str, input: &str) -> String {
    let key = hex::decode(key).unwrap();
    let input = hex::decode(input).unwrap();
    engine.init(direction, CipherParameters::key(&key)).unwrap();
    let mut out = [0u8; 8];
    engine.process_block(&input, 0, &mut out, 0).unwrap();
    hex::encode(out)
}

#[test]
fn test_des_textbook_vector() {
    let mut des = Des::new();
    assert_eq!(
        run(&mut des, Direction::Encrypt, "133457799bbcdff1", "0123456789abcdef"),
        "85e813540f0ab405"
    );
    assert_eq!(
        run(&mut des, Direction::Decrypt, "133457799bbcdff1", "85e813540f0ab405"),
        "0123456789abcdef"
    );
    assert_eq!(
        run(&mut des, Direction::Encrypt, "0000000000000000", "0000000000000000"),
        "8ca64de9c1b123a7"
    );
}

#[test]
fn test_sp_boxes_cover_all_output_bits() {
    let mut mask = 0u32;
    for sp in SP.iter() {
        for v in sp.iter() {
            mask |= v;
        }
    }
    assert_eq!(mask, u32::MAX);
}

#[test]
fn test_desede_three_key() {
    // SP 800-67 example
    let key = "0123456789abcdef23456789abcdef01456789abcdef0123";
    let mut ede = DesEde::new();
    assert_eq!(run(&mut ede, Direction::Encrypt, key, "5468652071756663"), "a826fd8ce53b855f");
    assert_eq!(run(&mut ede, Direction::Decrypt, key, "a826fd8ce53b855f"), "5468652071756663");
}

#[test]
fn test_desede_two_key() {
    let key = "0123456789abcdef23456789abcdef01";
    let mut ede = DesEde::new();
    assert_eq!(run(&mut ede, Direction::Encrypt, key, "5468652071756663"), "c44862f70cf2fbdc");
    assert_eq!(run(&mut ede, Direction::Decrypt, key, "c44862f70cf2fbdc"), "5468652071756663");
}

#[test]
fn test_desede_with_equal_keys_is_des() {
    let mut ede = DesEde::new();
    let mut des = Des::new();
    let k = "133457799bbcdff1";
    assert_eq!(
        run(&mut ede, Direction::Encrypt, &k.repeat(3), "0123456789abcdef"),
        run(&mut des, Direction::Encrypt, k, "0123456789abcdef")
    );
}

#[test]
fn test_key_sizes() {
    let mut des = Des::new();
    assert!(des.init(Direction::Encrypt, CipherParameters::key(&[0u8; 7])).is_err());
    let mut ede = DesEde::new();
    assert!(ede.init(Direction::Encrypt, CipherParameters::key(&[0u8; 8])).is_err());
    assert!(ede.init(Direction::Encrypt, CipherParameters::key(&[0u8; 24])).is_ok());
    assert_eq!(ede.algorithm_name(), "DESede");
}
