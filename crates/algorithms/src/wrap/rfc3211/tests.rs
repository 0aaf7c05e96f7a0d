use super::*;
use crate::block::{Aes, DesEde, NullCipher};
use crate::wrap::FixedRng;

fn padding() -> FixedRng {
    FixedRng::new(&(0xa0..=0xbf).collect::<Vec<u8>>())
}

fn aes_params(with_random: bool) -> CipherParameters {
    let kek: Vec<u8> = (0..16).collect();
    let iv: Vec<u8> = (0xf0..=0xff).collect();
    let params = CipherParameters::with_iv(CipherParameters::key(&kek), &iv);
    if with_random {
        CipherParameters::with_random(params, padding())
    } else {
        params
    }
}

fn wrap<E: BlockCipher>(engine: E, params: CipherParameters, key: &[u8]) -> Vec<u8> {
    let mut wrapper = Rfc3211Wrap::new(engine);
    wrapper.init(Direction::Encrypt, params).unwrap();
    wrapper.wrap(key, 0, key.len()).unwrap()
}

fn unwrap<E: BlockCipher>(engine: E, params: CipherParameters, wrapped: &[u8]) -> Result<SecretVec> {
    let mut unwrapper = Rfc3211Wrap::new(engine);
    unwrapper.init(Direction::Decrypt, params)?;
    unwrapper.unwrap(wrapped, 0, wrapped.len())
}

#[test]
fn test_aes_known_output() {
    let key = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let wrapped = wrap(Aes::new(), aes_params(true), &key);
    assert_eq!(
        hex::encode(&wrapped),
        "1ce4709c5b9cc57bec52299311e2aced7fe9c5c6ec20eb4e33f1a094f410aa13"
    );
    assert_eq!(unwrap(Aes::new(), aes_params(false), &wrapped).unwrap().as_slice(), &key[..]);
}

#[test]
fn test_one_byte_key_still_fills_two_blocks() {
    let wrapped = wrap(Aes::new(), aes_params(true), &[0x5a]);
    assert_eq!(
        hex::encode(&wrapped),
        "e0b775b33f047145286167162cdc230084f57598f676480bf743438551363532"
    );
    assert_eq!(unwrap(Aes::new(), aes_params(false), &wrapped).unwrap().as_slice(), &[0x5a]);
}

#[test]
fn test_desede_known_output() {
    let kek = hex::decode("8ad8274e56f46773e4ecb5e2b4bd2c7d42f8b6e1ec7a85f7").unwrap();
    let iv = hex::decode("c3d1a8f8d5b1f4e2").unwrap();
    let key = hex::decode("0123456789abcdeffedcba9876543210").unwrap();
    let params = || CipherParameters::with_iv(CipherParameters::key(&kek), &iv);

    let wrapped = wrap(DesEde::new(), CipherParameters::with_random(params(), padding()), &key);
    assert_eq!(hex::encode(&wrapped), "28ec92d5de9adf11e6d7b486b130d1cf22eabd0752f8df64");
    assert_eq!(unwrap(DesEde::new(), params(), &wrapped).unwrap().as_slice(), &key[..]);
}

#[test]
fn test_empty_and_longest_keys_round_trip() {
    for len in [0usize, 3, 12, 13, 255] {
        let key: Vec<u8> = (0..len).map(|i| i as u8).collect();
        let wrapped = wrap(Aes::new(), aes_params(true), &key);
        assert_eq!(wrapped.len() % 16, 0);
        assert!(wrapped.len() >= 32);
        assert_eq!(unwrap(Aes::new(), aes_params(false), &wrapped).unwrap().as_slice(), &key[..]);
    }
}

#[test]
fn test_corrupted_check_value_is_rejected() {
    let key = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    let wrapped = wrap(Aes::new(), aes_params(true), &key);

    // Flipping bits of the first block garbles the header after both passes
    for bit in 0..128 {
        let mut corrupted = wrapped.clone();
        corrupted[bit / 8] ^= 1 << (bit % 8);
        assert!(unwrap(Aes::new(), aes_params(false), &corrupted).is_err(), "bit {}", bit);
    }
}

#[test]
fn test_length_and_parameter_errors() {
    let mut wrapper = Rfc3211Wrap::new(Aes::new());
    assert!(matches!(
        wrapper.init(Direction::Encrypt, CipherParameters::key(&[0u8; 16])),
        Err(Error::Init(api::InitError::WrongParameterType { .. }))
    ));
    assert!(matches!(
        wrapper.init(
            Direction::Encrypt,
            CipherParameters::with_iv(CipherParameters::key(&[0u8; 16]), &[0u8; 8])
        ),
        Err(Error::Init(api::InitError::InvalidIvLength { actual: 8, .. }))
    ));

    wrapper.init(Direction::Encrypt, aes_params(true)).unwrap();
    assert!(matches!(
        wrapper.wrap(&[0u8; 256], 0, 256),
        Err(Error::Cipher(CipherError::InvalidInputLength { actual: 256, .. }))
    ));

    wrapper.init(Direction::Decrypt, aes_params(false)).unwrap();
    assert!(matches!(
        wrapper.unwrap(&[0u8; 16], 0, 16),
        Err(Error::Cipher(CipherError::InvalidInputLength { actual: 16, .. }))
    ));
    assert!(matches!(
        wrapper.unwrap(&[0u8; 40], 0, 40),
        Err(Error::Cipher(CipherError::InvalidInputLength { actual: 40, .. }))
    ));
}

#[test]
fn test_one_byte_engine_needs_room_for_the_check_bytes() {
    let params = || CipherParameters::with_iv(CipherParameters::key(&[0u8; 1]), &[0x5a]);

    let mut unwrapper = Rfc3211Wrap::new(NullCipher::new());
    unwrapper.init(Direction::Decrypt, params()).unwrap();
    for len in 2..HEADER + 3 {
        assert!(
            matches!(
                unwrapper.unwrap(&[0u8; 8], 0, len),
                Err(Error::Cipher(CipherError::InvalidInputLength { actual, .. })) if actual == len
            ),
            "{}-byte input",
            len
        );
    }

    for key in [&[][..], &[0x42][..], &[0x42, 0x43, 0x44, 0x45][..]] {
        let wrapped = wrap(NullCipher::new(), CipherParameters::with_random(params(), padding()), key);
        assert!(wrapped.len() >= HEADER + 3);
        assert_eq!(unwrap(NullCipher::new(), params(), &wrapped).unwrap().as_slice(), key);
    }
}

#[test]
fn test_name() {
    assert_eq!(Rfc3211Wrap::new(Aes::new()).algorithm_name(), "AES/RFC3211Wrap");
}
