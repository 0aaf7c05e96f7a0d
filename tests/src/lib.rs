//! Shared fixtures for the cipherkit property tests
//!
//! Each engine family is listed once here, together with the key and IV
//! shapes it accepts, so the property suites can iterate over all of them.

use cipherkit_algorithms::block::{
    Aes, Camellia, Cast5, Cast6, Des, DesEde, Idea, Noekeon, NullCipher, Rc2, Rc532, Rc564, Rc6,
    Rijndael, Serpent, Tea, Twofish, Xtea,
};
use cipherkit_algorithms::stream::{
    ChaCha, Grain128, GrainV1, Hc128, Hc256, Isaac, Rc4, Salsa20, Vmpc, VmpcKsa3,
};
use cipherkit_api::{BlockCipher, CipherParameters, StreamCipher};

/// A block engine constructor and the key lengths it accepts
pub struct BlockCase {
    pub name: &'static str,
    pub make: fn() -> Box<dyn BlockCipher>,
    pub key_sizes: &'static [usize],
}

fn rijndael(block_bits: usize) -> Box<dyn BlockCipher> {
    Box::new(Rijndael::new(block_bits).expect("supported block width"))
}

/// Every block engine in the library
pub fn block_cases() -> Vec<BlockCase> {
    vec![
        BlockCase { name: "AES", make: || Box::new(Aes::new()), key_sizes: &[16, 24, 32] },
        BlockCase { name: "Camellia", make: || Box::new(Camellia::new()), key_sizes: &[16, 24, 32] },
        BlockCase { name: "CAST5", make: || Box::new(Cast5::new()), key_sizes: &[5, 10, 16] },
        BlockCase { name: "CAST6", make: || Box::new(Cast6::new()), key_sizes: &[16, 20, 32] },
        BlockCase { name: "DES", make: || Box::new(Des::new()), key_sizes: &[8] },
        BlockCase { name: "DESede", make: || Box::new(DesEde::new()), key_sizes: &[16, 24] },
        BlockCase { name: "IDEA", make: || Box::new(Idea::new()), key_sizes: &[16] },
        BlockCase { name: "Noekeon", make: || Box::new(Noekeon::new()), key_sizes: &[16] },
        BlockCase { name: "Null", make: || Box::new(NullCipher::new()), key_sizes: &[0, 16] },
        BlockCase { name: "RC2", make: || Box::new(Rc2::new()), key_sizes: &[1, 5, 16, 128] },
        BlockCase { name: "RC5-32", make: || Box::new(Rc532::new()), key_sizes: &[1, 16, 255] },
        BlockCase { name: "RC5-64", make: || Box::new(Rc564::new()), key_sizes: &[1, 16, 255] },
        BlockCase { name: "RC6", make: || Box::new(Rc6::new()), key_sizes: &[16, 24, 32] },
        BlockCase { name: "Rijndael-128", make: || rijndael(128), key_sizes: &[16, 20, 24, 28, 32] },
        BlockCase { name: "Rijndael-160", make: || rijndael(160), key_sizes: &[16, 24, 32] },
        BlockCase { name: "Rijndael-192", make: || rijndael(192), key_sizes: &[16, 24, 32] },
        BlockCase { name: "Rijndael-224", make: || rijndael(224), key_sizes: &[16, 24, 32] },
        BlockCase { name: "Rijndael-256", make: || rijndael(256), key_sizes: &[16, 24, 32] },
        BlockCase { name: "Serpent", make: || Box::new(Serpent::new()), key_sizes: &[1, 16, 24, 32] },
        BlockCase { name: "TEA", make: || Box::new(Tea::new()), key_sizes: &[16] },
        BlockCase { name: "Twofish", make: || Box::new(Twofish::new()), key_sizes: &[8, 16, 24, 32] },
        BlockCase { name: "XTEA", make: || Box::new(Xtea::new()), key_sizes: &[16] },
    ]
}

/// A stream engine constructor and the key/IV shape it accepts
pub struct StreamCase {
    pub name: &'static str,
    pub make: fn() -> Box<dyn StreamCipher>,
    pub key_len: usize,
    pub iv_len: Option<usize>,
}

impl StreamCase {
    /// Build init parameters from the leading bytes of `material`
    pub fn params(&self, material: &[u8]) -> CipherParameters {
        let key = &material[..self.key_len];
        match self.iv_len {
            Some(n) => CipherParameters::with_iv(
                CipherParameters::key(key),
                &material[self.key_len..self.key_len + n],
            ),
            None => CipherParameters::key(key),
        }
    }

    /// Bytes of key material `params` consumes
    pub fn material_len(&self) -> usize {
        self.key_len + self.iv_len.unwrap_or(0)
    }
}

/// Every stream engine in the library
pub fn stream_cases() -> Vec<StreamCase> {
    vec![
        StreamCase { name: "RC4", make: || Box::new(Rc4::new()), key_len: 16, iv_len: None },
        StreamCase { name: "Salsa20", make: || Box::new(Salsa20::new()), key_len: 32, iv_len: Some(8) },
        StreamCase { name: "Salsa20-128", make: || Box::new(Salsa20::new()), key_len: 16, iv_len: Some(8) },
        StreamCase { name: "ChaCha", make: || Box::new(ChaCha::new()), key_len: 32, iv_len: Some(8) },
        StreamCase { name: "HC-128", make: || Box::new(Hc128::new()), key_len: 16, iv_len: Some(16) },
        StreamCase { name: "HC-256", make: || Box::new(Hc256::new()), key_len: 32, iv_len: Some(32) },
        StreamCase { name: "Grain v1", make: || Box::new(GrainV1::new()), key_len: 10, iv_len: Some(8) },
        StreamCase { name: "Grain-128", make: || Box::new(Grain128::new()), key_len: 16, iv_len: Some(12) },
        StreamCase { name: "ISAAC", make: || Box::new(Isaac::new()), key_len: 32, iv_len: None },
        StreamCase { name: "VMPC", make: || Box::new(Vmpc::new()), key_len: 16, iv_len: Some(16) },
        StreamCase { name: "VMPC-KSA3", make: || Box::new(VmpcKsa3::new()), key_len: 16, iv_len: Some(16) },
    ]
}

/// Longest key material any stream case needs
pub const MAX_STREAM_MATERIAL: usize = 64;
