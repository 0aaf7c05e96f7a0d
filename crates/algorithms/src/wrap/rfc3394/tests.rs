use super::*;
use api::{CipherError, InitError};

fn wrap_hex<E: BlockCipher>(mut wrapper: Rfc3394Wrap<E>, params: CipherParameters, key: &str) -> String {
    let key = hex::decode(key).unwrap();
    wrapper.init(Direction::Encrypt, params).unwrap();
    hex::encode(wrapper.wrap(&key, 0, key.len()).unwrap())
}

fn unwrap_hex<E: BlockCipher>(
    mut wrapper: Rfc3394Wrap<E>,
    params: CipherParameters,
    wrapped: &str,
) -> Result<String> {
    let wrapped = hex::decode(wrapped).unwrap();
    wrapper.init(Direction::Decrypt, params)?;
    wrapper
        .unwrap(&wrapped, 0, wrapped.len())
        .map(|key| hex::encode(key.as_slice()))
}

fn kek(len: u8) -> CipherParameters {
    CipherParameters::key(&(0..len).collect::<Vec<_>>())
}

#[test]
fn test_rfc3394_section4_vectors() {
    let cases = [
        (16, "00112233445566778899aabbccddeeff", "1fa68b0a8112b447aef34bd8fb5a7b829d3e862371d2cfe5"),
        (24, "00112233445566778899aabbccddeeff", "96778b25ae6ca435f92b5b97c050aed2468ab8a17ad84e5d"),
        (32, "00112233445566778899aabbccddeeff", "64e8c3f9ce0f5ba263e9777905818a2a93c8191e7d6e8ae7"),
        (
            24,
            "00112233445566778899aabbccddeeff0001020304050607",
            "031d33264e15d33268f24ec260743edce1c6c7ddee725a936ba814915c6762d2",
        ),
        (
            32,
            "00112233445566778899aabbccddeeff000102030405060708090a0b0c0d0e0f",
            "28c9f404c4b810f4cbccb35cfb87f8263f5786e2d80ed326cbc7f0e71a99f43bfb988b9b7a02dd21",
        ),
    ];

    for (kek_len, key, wrapped) in cases {
        assert_eq!(wrap_hex(AesWrap::default(), kek(kek_len), key), wrapped);
        assert_eq!(unwrap_hex(AesWrap::default(), kek(kek_len), wrapped).unwrap(), key);
    }
}

#[test]
fn test_camellia_rfc3657_vector() {
    let key = "00112233445566778899aabbccddeeff";
    let wrapped = "635d6ac46eedebd3a7f4a06421a4cbd1746b24795ba2f708";
    assert_eq!(wrap_hex(CamelliaWrap::default(), kek(16), key), wrapped);
    assert_eq!(unwrap_hex(CamelliaWrap::default(), kek(16), wrapped).unwrap(), key);
}

#[test]
fn test_single_semiblock_runs_all_six_passes() {
    let wrapped = wrap_hex(AesWrap::default(), kek(16), "0011223344556677");
    assert_eq!(wrapped, "b82669ca42cb86233b5e5cfeacee620b");
    assert_eq!(unwrap_hex(AesWrap::default(), kek(16), &wrapped).unwrap(), "0011223344556677");

    // Agrees with the semiblock passes driven by hand
    let mut aes = Aes::new();
    aes.init(Direction::Encrypt, kek(16)).unwrap();
    let mut a = RFC3394_DEFAULT_IV;
    let mut r = hex::decode("0011223344556677").unwrap();
    wrap_semiblocks(&mut aes, &mut a, &mut r).unwrap();
    assert_eq!(hex::encode([&a[..], &r[..]].concat()), wrapped);

    // A single raw block encryption of IV || P is not a valid wrap
    assert_eq!(
        unwrap_hex(AesWrap::default(), kek(16), "f4740052e82a225174ce86fbd7b805e7"),
        Err(Error::invalid_ciphertext(ALGORITHM))
    );
}

#[test]
fn test_caller_supplied_iv() {
    let iv = hex::decode("0123456789abcdef").unwrap();
    let params = || CipherParameters::with_iv(kek(16), &iv);
    let key = "00112233445566778899aabbccddeeff";
    let wrapped = "a0f76f4b09e1f2191b8d94da2ca57adfd45ee9732992a98f";

    assert_eq!(wrap_hex(AesWrap::default(), params(), key), wrapped);
    assert_eq!(unwrap_hex(AesWrap::default(), params(), wrapped).unwrap(), key);
    assert_eq!(
        unwrap_hex(AesWrap::default(), kek(16), wrapped),
        Err(Error::invalid_ciphertext(ALGORITHM))
    );
}

#[test]
fn test_every_bit_flip_is_rejected() {
    let wrapped = hex::decode("1fa68b0a8112b447aef34bd8fb5a7b829d3e862371d2cfe5").unwrap();
    let mut unwrapper = AesWrap::default();
    unwrapper.init(Direction::Decrypt, kek(16)).unwrap();

    for bit in 0..wrapped.len() * 8 {
        let mut corrupted = wrapped.clone();
        corrupted[bit / 8] ^= 1 << (bit % 8);
        assert_eq!(
            unwrapper.unwrap(&corrupted, 0, corrupted.len()).unwrap_err(),
            Error::invalid_ciphertext(ALGORITHM)
        );
    }
}

#[test]
fn test_length_and_direction_errors() {
    let mut wrapper = AesWrap::default();
    assert_eq!(
        wrapper.wrap(&[0u8; 16], 0, 16).unwrap_err(),
        Error::Cipher(CipherError::NotInitialized { algorithm: ALGORITHM })
    );

    wrapper.init(Direction::Encrypt, kek(16)).unwrap();
    assert!(matches!(
        wrapper.wrap(&[], 0, 0),
        Err(Error::Cipher(CipherError::InvalidInputLength { actual: 0, .. }))
    ));
    assert!(matches!(
        wrapper.wrap(&[0u8; 12], 0, 12),
        Err(Error::Cipher(CipherError::InvalidInputLength { actual: 12, .. }))
    ));
    assert!(matches!(
        wrapper.wrap(&[0u8; 16], 8, 16),
        Err(Error::Cipher(CipherError::InputTooShort { .. }))
    ));
    assert!(matches!(
        wrapper.unwrap(&[0u8; 24], 0, 24),
        Err(Error::Cipher(CipherError::WrongDirection { operation: "unwrapping", .. }))
    ));

    wrapper.init(Direction::Decrypt, kek(16)).unwrap();
    assert!(matches!(
        wrapper.unwrap(&[0u8; 8], 0, 8),
        Err(Error::Cipher(CipherError::InvalidInputLength { actual: 8, .. }))
    ));
}

#[test]
fn test_rejects_bad_parameters() {
    let mut wrapper = AesWrap::default();
    assert!(matches!(
        wrapper.init(Direction::Encrypt, CipherParameters::with_iv(kek(16), &[0u8; 16])),
        Err(Error::Init(InitError::InvalidIvLength { actual: 16, .. }))
    ));
    assert!(matches!(
        wrapper.init(Direction::Encrypt, CipherParameters::iv_only(&[0u8; 8])),
        Err(Error::Init(InitError::WrongParameterType { .. }))
    ));

    let mut narrow = Rfc3394Wrap::new(crate::block::Des::new());
    assert!(matches!(
        narrow.init(Direction::Encrypt, CipherParameters::key(&[0u8; 8])),
        Err(Error::Init(InitError::InvalidParameter { name: "cipher", .. }))
    ));
}

#[test]
fn test_offset_and_names() {
    let mut input = vec![0xEE; 5];
    input.extend_from_slice(&hex::decode("00112233445566778899aabbccddeeff").unwrap());

    let mut wrapper = AesWrap::default();
    assert_eq!(wrapper.algorithm_name(), "AES");
    wrapper.init(Direction::Encrypt, kek(16)).unwrap();
    assert_eq!(
        hex::encode(wrapper.wrap(&input, 5, 16).unwrap()),
        "1fa68b0a8112b447aef34bd8fb5a7b829d3e862371d2cfe5"
    );
    assert_eq!(CamelliaWrap::default().algorithm_name(), "Camellia");
}
