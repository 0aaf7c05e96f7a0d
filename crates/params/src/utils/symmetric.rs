//! Constants for symmetric encryption algorithms

/// Largest block size of any engine in the library (Rijndael-256)
pub const MAX_BLOCK_SIZE: usize = 32;

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Rijndael block widths in bits
pub const RIJNDAEL_BLOCK_BITS: [usize; 5] = [128, 160, 192, 224, 256];

/// Rijndael key sizes in bytes
pub const RIJNDAEL_KEY_SIZES: [usize; 5] = [16, 20, 24, 28, 32];

/// Serpent block size in bytes
pub const SERPENT_BLOCK_SIZE: usize = 16;

/// Serpent accepts any key up to this many bytes
pub const SERPENT_MAX_KEY_SIZE: usize = 32;

/// Serpent round count
pub const SERPENT_ROUNDS: usize = 32;

/// Twofish block size in bytes
pub const TWOFISH_BLOCK_SIZE: usize = 16;

/// Twofish key sizes in bytes
pub const TWOFISH_KEY_SIZES: [usize; 4] = [8, 16, 24, 32];

/// RC2 block size in bytes
pub const RC2_BLOCK_SIZE: usize = 8;

/// RC2 maximum key size in bytes
pub const RC2_MAX_KEY_SIZE: usize = 128;

/// RC2 maximum effective key length in bits
pub const RC2_MAX_EFFECTIVE_BITS: usize = 1024;

/// RC5 default round count
pub const RC5_DEFAULT_ROUNDS: usize = 12;

/// RC5 maximum round count
pub const RC5_MAX_ROUNDS: usize = 255;

/// RC5 and RC6 maximum key size in bytes
pub const RC5_MAX_KEY_SIZE: usize = 255;

/// RC6 block size in bytes
pub const RC6_BLOCK_SIZE: usize = 16;

/// RC6 round count
pub const RC6_ROUNDS: usize = 20;

/// CAST5 block size in bytes
pub const CAST5_BLOCK_SIZE: usize = 8;

/// CAST5 minimum key size in bytes
pub const CAST5_MIN_KEY_SIZE: usize = 5;

/// CAST5 maximum key size in bytes
pub const CAST5_MAX_KEY_SIZE: usize = 16;

/// CAST6 block size in bytes
pub const CAST6_BLOCK_SIZE: usize = 16;

/// CAST6 maximum key size in bytes
pub const CAST6_MAX_KEY_SIZE: usize = 32;

/// Camellia block size in bytes
pub const CAMELLIA_BLOCK_SIZE: usize = 16;

/// Camellia key sizes in bytes
pub const CAMELLIA_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// IDEA block size in bytes
pub const IDEA_BLOCK_SIZE: usize = 8;

/// IDEA key size in bytes
pub const IDEA_KEY_SIZE: usize = 16;

/// DES block size in bytes
pub const DES_BLOCK_SIZE: usize = 8;

/// DES key size in bytes (parity bits included)
pub const DES_KEY_SIZE: usize = 8;

/// Two-key triple DES key size in bytes
pub const DESEDE_2KEY_SIZE: usize = 16;

/// Three-key triple DES key size in bytes
pub const DESEDE_3KEY_SIZE: usize = 24;

/// TEA and XTEA block size in bytes
pub const TEA_BLOCK_SIZE: usize = 8;

/// TEA and XTEA key size in bytes
pub const TEA_KEY_SIZE: usize = 16;

/// TEA and XTEA cycle count
pub const TEA_ROUNDS: usize = 32;

/// Golden-ratio constant used by TEA, XTEA, Serpent and ISAAC
pub const GOLDEN_RATIO: u32 = 0x9E37_79B9;

/// Noekeon block size in bytes
pub const NOEKEON_BLOCK_SIZE: usize = 16;

/// Noekeon key size in bytes
pub const NOEKEON_KEY_SIZE: usize = 16;

/// Default block size of the null engine
pub const NULL_DEFAULT_BLOCK_SIZE: usize = 1;

/// RC4 maximum key size in bytes
pub const RC4_MAX_KEY_SIZE: usize = 256;

/// Salsa20 and ChaCha keystream block size in bytes
pub const SALSA20_BLOCK_SIZE: usize = 64;

/// Salsa20 and ChaCha IV size in bytes
pub const SALSA20_IV_SIZE: usize = 8;

/// Salsa20 default round count
pub const SALSA20_DEFAULT_ROUNDS: usize = 20;

/// HC-128 key and IV size in bytes
pub const HC128_KEY_SIZE: usize = 16;

/// HC-256 maximum key and IV size in bytes
pub const HC256_KEY_SIZE: usize = 32;

/// Grain v1 key size in bytes
pub const GRAINV1_KEY_SIZE: usize = 10;

/// Grain v1 IV size in bytes
pub const GRAINV1_IV_SIZE: usize = 8;

/// Grain-128 key size in bytes
pub const GRAIN128_KEY_SIZE: usize = 16;

/// Grain-128 IV size in bytes
pub const GRAIN128_IV_SIZE: usize = 12;

/// ISAAC maximum key size in bytes
pub const ISAAC_MAX_KEY_SIZE: usize = 1024;

/// VMPC maximum key and IV size in bytes
pub const VMPC_MAX_KEY_SIZE: usize = 768;

/// Semiblock size used by the RFC 3394 and RFC 5649 wraps
pub const KEY_WRAP_SEMIBLOCK: usize = 8;

/// RFC 3394 default initial value
pub const RFC3394_DEFAULT_IV: [u8; 8] = [0xA6; 8];

/// RFC 5649 alternative initial value prefix
pub const RFC5649_IV_PREFIX: [u8; 4] = [0xA6, 0x59, 0x59, 0xA6];

/// RFC 3211 maximum wrapped key length
pub const RFC3211_MAX_KEY_SIZE: usize = 255;

/// Fixed IV of the second CBC pass in the CMS key wrap (RFC 3217)
pub const CMS_WRAP_IV: [u8; 8] = [0x4a, 0xdd, 0xa2, 0x2c, 0x79, 0xe8, 0x21, 0x05];

/// IV size of the CMS key wrap
pub const CMS_WRAP_IV_SIZE: usize = 8;
