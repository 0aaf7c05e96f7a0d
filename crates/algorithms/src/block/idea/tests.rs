use super::*;

#[test]
fn test_reference_vector() {
    let key = hex::decode("00010002000300040005000600070008").unwrap();
    let pt = hex::decode("0000000100020003").unwrap();

    let mut idea = Idea::new();
    idea.init(Direction::Encrypt, CipherParameters::key(&key)).unwrap();
    let mut ct = [0u8; 8];
    idea.process_block(&pt, 0, &mut ct, 0).unwrap();
    assert_eq!(hex::encode(ct), "11fbed2b01986de5");

    idea.init(Direction::Decrypt, CipherParameters::key(&key)).unwrap();
    let mut back = [0u8; 8];
    idea.process_block(&ct, 0, &mut back, 0).unwrap();
    assert_eq!(&back[..], &pt[..]);
}

#[test]
fn test_group_operations() {
    // 0 stands for 2^16, which is -1 mod 2^16 + 1
    assert_eq!(mul(0, 0), 1);
    assert_eq!(mul(0, 2), 0xFFFF);
    for x in [1u16, 2, 3, 0x1234, 0xFFFF, 0] {
        assert_eq!(mul(x, mul_inv(x)), 1, "x = {:#x}", x);
    }
}

#[test]
fn test_key_size() {
    let mut idea = Idea::new();
    assert!(idea.init(Direction::Encrypt, CipherParameters::key(&[0u8; 15])).is_err());
    assert_eq!(idea.algorithm_name(), "IDEA");
}
