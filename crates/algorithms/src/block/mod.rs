//! Block cipher engines
//!
//! Every engine implements [`BlockCipher`](api::BlockCipher): initialise with
//! a [`Direction`](api::Direction) and [`CipherParameters`](api::CipherParameters),
//! then transform one block per `process_block` call. Chaining is provided by
//! [`Cbc`], which wraps any engine.
//!
//! ## Example usage
//!
//! ```
//! use cipherkit_algorithms::block::{Aes, Cbc};
//! use cipherkit_algorithms::{BlockCipher, CipherParameters, Direction};
//!
//! let key = [0x2bu8; 16];
//! let iv = [0u8; 16];
//! let plaintext = *b"exactly 32 bytes of plaintext!!!";
//!
//! let mut cbc = Cbc::new(Aes::new());
//! cbc.init(Direction::Encrypt, CipherParameters::with_iv(CipherParameters::key(&key), &iv))
//!     .unwrap();
//! let mut ciphertext = [0u8; 32];
//! for off in (0..32).step_by(16) {
//!     cbc.process_block(&plaintext, off, &mut ciphertext, off).unwrap();
//! }
//!
//! cbc.init(Direction::Decrypt, CipherParameters::with_iv(CipherParameters::key(&key), &iv))
//!     .unwrap();
//! let mut decrypted = [0u8; 32];
//! for off in (0..32).step_by(16) {
//!     cbc.process_block(&ciphertext, off, &mut decrypted, off).unwrap();
//! }
//! assert_eq!(plaintext, decrypted);
//! ```

pub mod aes;
pub mod camellia;
pub mod cast;
pub mod des;
pub mod idea;
pub mod modes;
pub mod noekeon;
pub mod null;
pub mod rc2;
pub mod rc5;
pub mod rc6;
pub mod rijndael;
pub mod serpent;
pub mod tea;
pub mod twofish;
pub mod xtea;

// Re-exports
pub use aes::Aes;
pub use camellia::Camellia;
pub use cast::{Cast5, Cast6};
pub use des::{Des, DesEde};
pub use idea::Idea;
pub use modes::Cbc;
pub use noekeon::Noekeon;
pub use null::NullCipher;
pub use rc2::Rc2;
pub use rc5::{Rc5, Rc532, Rc564, Rc5Word};
pub use rc6::Rc6;
pub use rijndael::Rijndael;
pub use serpent::Serpent;
pub use tea::Tea;
pub use twofish::Twofish;
pub use xtea::Xtea;
