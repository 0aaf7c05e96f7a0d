//! Stream cipher engines
//!
//! Every engine implements [`StreamCipher`](api::StreamCipher): initialise
//! with a key (and an IV for all but RC4 and ISAAC), then XOR keystream into
//! data with `process_bytes` or one byte at a time with `return_byte`. The
//! two calls draw from the same keystream position. `reset` rewinds to the
//! state right after `init`.
//!
//! ## Example usage
//!
//! ```
//! use cipherkit_algorithms::stream::Salsa20;
//! use cipherkit_algorithms::{CipherParameters, StreamCipher};
//!
//! let key = [0x80u8; 32];
//! let iv = [0u8; 8];
//! let message = b"attack at dawn";
//!
//! let mut salsa = Salsa20::new();
//! salsa.init(CipherParameters::with_iv(CipherParameters::key(&key), &iv)).unwrap();
//! let mut ciphertext = [0u8; 14];
//! salsa.process_bytes(message, 0, message.len(), &mut ciphertext, 0).unwrap();
//!
//! salsa.reset();
//! let mut recovered = [0u8; 14];
//! salsa.process_bytes(&ciphertext, 0, ciphertext.len(), &mut recovered, 0).unwrap();
//! assert_eq!(&recovered, message);
//! ```

pub mod grain;
pub mod hc128;
pub mod hc256;
pub mod isaac;
pub mod rc4;
pub mod salsa20;
pub mod vmpc;

// Re-exports
pub use grain::{Grain, Grain128, GrainV1};
pub use hc128::Hc128;
pub use hc256::Hc256;
pub use isaac::Isaac;
pub use rc4::Rc4;
pub use salsa20::{ChaCha, ChaChaCore, Core, Salsa, Salsa20, SalsaCore};
pub use vmpc::{Vmpc, VmpcKsa3};
