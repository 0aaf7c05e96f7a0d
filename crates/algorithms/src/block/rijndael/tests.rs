use super::*;
use crate::block::aes::Aes;

const KEY: &str = "2b7e151628aed2a6abf7158809cf4f3c762e7160f38b4da56a784d9045190cfe";
const PT: &str = "3243f6a8885a308d313198a2e03707344a4093822299f31d0082efa98ec4e6c8";

fn check(block_bits: usize, key_bits: usize, expected: &str) {
    let key = hex::decode(KEY).unwrap();
    let pt = hex::decode(PT).unwrap();
    let key = &key[..key_bits / 8];
    let pt = &pt[..block_bits / 8];
    let expected = hex::decode(expected).unwrap();

    let mut engine = Rijndael::new(block_bits).unwrap();
    engine.init(Direction::Encrypt, CipherParameters::key(key)).unwrap();
    let mut ct = vec![0u8; block_bits / 8];
    assert_eq!(engine.process_block(pt, 0, &mut ct, 0).unwrap(), block_bits / 8);
    assert_eq!(ct, expected, "Rijndael-{} with {}-bit key", block_bits, key_bits);

    engine.init(Direction::Decrypt, CipherParameters::key(key)).unwrap();
    let mut back = vec![0u8; block_bits / 8];
    engine.process_block(&ct, 0, &mut back, 0).unwrap();
    assert_eq!(back, pt);
}

#[test]
fn test_reference_vectors() {
    check(128, 128, "3925841d02dc09fbdc118597196a0b32");
    check(160, 128, "16e73aec921314c29df905432bc8968ab64b1f51");
    check(160, 160, "0553eb691670dd8a5a5b5addf1aa7450f7a0e587");
    check(192, 192, "725ae43b5f3161de806a7c93e0bca93c967ec1ae1b71e1cf");
    check(224, 160, "08b99944edfce33a2acb131183ab0168446b2d15e958480010f545e3");
    check(224, 224, "ef529598ecbce297811b49bbed2c33bbe1241d6e1a833dbe119569e8");
    check(256, 128, "7d15479076b69a46ffb3b3beae97ad8313f622f67fedb487de9f06b9ed9c8f19");
    check(256, 256, "a49406115dfb30a40418aafa4869b7c6a886ff31602a7dd19c889dc64f7e4e7a");
}

#[test]
fn test_128_bit_block_agrees_with_aes() {
    for key_len in [16usize, 24, 32] {
        let key: Vec<u8> = (0..key_len as u8).collect();
        let pt: Vec<u8> = (0..16u8).map(|b| b.wrapping_mul(17)).collect();

        let mut aes = Aes::new();
        aes.init(Direction::Encrypt, CipherParameters::key(&key)).unwrap();
        let mut rijndael = Rijndael::new(128).unwrap();
        rijndael.init(Direction::Encrypt, CipherParameters::key(&key)).unwrap();

        let mut a = [0u8; 16];
        let mut r = [0u8; 16];
        aes.process_block(&pt, 0, &mut a, 0).unwrap();
        rijndael.process_block(&pt, 0, &mut r, 0).unwrap();
        assert_eq!(a, r);
    }
}

#[test]
fn test_rejects_bad_widths_and_keys() {
    assert!(Rijndael::new(64).is_err());
    assert!(Rijndael::new(257).is_err());

    let mut engine = Rijndael::new(192).unwrap();
    assert_eq!(engine.block_size(), 24);
    assert!(engine.init(Direction::Encrypt, CipherParameters::key(&[0u8; 18])).is_err());
}
