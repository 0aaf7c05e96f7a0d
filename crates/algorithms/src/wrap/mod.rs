//! Key-wrap engines
//!
//! Every engine implements [`Wrapper`](api::Wrapper). An engine initialised
//! for [`Direction::Encrypt`](api::Direction::Encrypt) wraps and one
//! initialised for `Decrypt` unwraps; calling the other operation fails with
//! `WrongDirection`. Unwrapped keys come back as [`SecretVec`](common::SecretVec),
//! and a failed integrity check is `InvalidCiphertext` with no detail about
//! where the check failed.
//!
//! ## Example usage
//!
//! ```
//! use cipherkit_algorithms::wrap::AesWrap;
//! use cipherkit_algorithms::{CipherParameters, Direction, Wrapper};
//!
//! let kek = [0x42u8; 16];
//! let key = [0x17u8; 32];
//!
//! let mut wrapper = AesWrap::default();
//! wrapper.init(Direction::Encrypt, CipherParameters::key(&kek)).unwrap();
//! let wrapped = wrapper.wrap(&key, 0, key.len()).unwrap();
//! assert_eq!(wrapped.len(), key.len() + 8);
//!
//! wrapper.init(Direction::Decrypt, CipherParameters::key(&kek)).unwrap();
//! let unwrapped = wrapper.unwrap(&wrapped, 0, wrapped.len()).unwrap();
//! assert_eq!(unwrapped.as_slice(), &key);
//! ```

pub mod cms;
pub mod rfc3211;
pub mod rfc3394;
pub mod rfc5649;

pub use cms::{CmsWrap, DesEdePayload, DesEdeWrap, Payload, Rc2Payload, Rc2Wrap};
pub use rfc3211::Rfc3211Wrap;
pub use rfc3394::{AesWrap, CamelliaWrap, Rfc3394Wrap, SerpentWrap, TwofishWrap};
pub use rfc5649::{AesWrapPad, Rfc5649Wrap};

use api::{BlockCipher, CipherParameters, SharedRandom};

use crate::block::Cbc;
use crate::error::{validate, CipherError, Result};

/// Reject an operation that does not match the configured direction
fn check_direction(algorithm: &'static str, encrypting: bool, wrapping: bool) -> Result<()> {
    if encrypting != wrapping {
        let operation = if wrapping { "wrapping" } else { "unwrapping" };
        return Err(CipherError::WrongDirection { algorithm, operation }.into());
    }
    Ok(())
}

/// Peel an optional random source off the parameters
fn split_random(params: CipherParameters) -> (CipherParameters, Option<SharedRandom>) {
    match params {
        CipherParameters::WithRandom(with_random) => {
            let (inner, random) = with_random.into_parts();
            (inner, Some(random))
        }
        other => (other, None),
    }
}

/// The caller's random source, or the operating system's under `std`
#[cfg(feature = "std")]
fn random_or_default(_algorithm: &'static str, random: Option<SharedRandom>) -> Result<SharedRandom> {
    use alloc::rc::Rc;
    use core::cell::RefCell;

    Ok(random.unwrap_or_else(|| Rc::new(RefCell::new(rand::rngs::OsRng))))
}

#[cfg(not(feature = "std"))]
fn random_or_default(algorithm: &'static str, random: Option<SharedRandom>) -> Result<SharedRandom> {
    random.ok_or_else(|| validate::wrong_parameter(algorithm, "ParametersWithRandom"))
}

/// Run every block of `buf` through `cbc` in place
fn cbc_in_place<E: BlockCipher>(cbc: &mut Cbc<E>, buf: &mut [u8]) -> Result<()> {
    let bs = cbc.block_size();
    for off in (0..buf.len()).step_by(bs) {
        cbc.process_block_in_place(buf, off)?;
    }
    Ok(())
}

/// Bounds check shared by `wrap` and `unwrap`
fn input_window(context: &'static str, input: &[u8], in_off: usize, len: usize) -> Result<()> {
    validate::input(context, input.len(), in_off, len)
}

/// Replays a fixed byte pattern, for reproducing published padding
#[cfg(test)]
pub(crate) struct FixedRng {
    bytes: alloc::vec::Vec<u8>,
    pos: usize,
}

#[cfg(test)]
impl FixedRng {
    pub(crate) fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            pos: 0,
        }
    }
}

#[cfg(test)]
impl rand::RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for b in dest {
            *b = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> core::result::Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
impl rand::CryptoRng for FixedRng {}
