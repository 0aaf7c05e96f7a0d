//! RFC 3394 key wrap
//!
//! The wrapped key is `n` 64-bit semiblocks run through six passes of the
//! block cipher, each pass chaining an integrity register `A` through every
//! semiblock with the step counter XORed into it. Unwrapping runs the passes
//! backwards and accepts only if `A` comes back as the initial value. The
//! passes run for every `n`, including a single semiblock.
//!
//! Any 128-bit block cipher works; [`AesWrap`], [`CamelliaWrap`],
//! [`SerpentWrap`] and [`TwofishWrap`] name the common pairings.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use api::{BlockCipher, CipherParameters, Direction, Wrapper};
use byteorder::{BigEndian, ByteOrder};
use common::SecretVec;
use internal::constant_time::ct_eq;
use log::{debug, trace};
use params::utils::symmetric::{KEY_WRAP_SEMIBLOCK, RFC3394_DEFAULT_IV};
use zeroize::Zeroize;

use super::{check_direction, input_window, split_random};
use crate::block::{Aes, Camellia, Serpent, Twofish};
use crate::error::{validate, Error, Result};

const ALGORITHM: &str = "RFC3394Wrap";

/// Block size the wrap is defined over
pub(crate) const WRAP_BLOCK: usize = 2 * KEY_WRAP_SEMIBLOCK;

/// Forward passes over `a || r`, where `r` is a whole number of semiblocks
pub(crate) fn wrap_semiblocks<E: BlockCipher>(
    engine: &mut E,
    a: &mut [u8; KEY_WRAP_SEMIBLOCK],
    r: &mut [u8],
) -> Result<()> {
    let n = r.len() / KEY_WRAP_SEMIBLOCK;
    let mut block = [0u8; WRAP_BLOCK];

    for j in 0..6 {
        for i in 0..n {
            let ri = &mut r[i * KEY_WRAP_SEMIBLOCK..(i + 1) * KEY_WRAP_SEMIBLOCK];
            block[..KEY_WRAP_SEMIBLOCK].copy_from_slice(&a[..]);
            block[KEY_WRAP_SEMIBLOCK..].copy_from_slice(ri);
            engine.process_block_in_place(&mut block, 0)?;

            let t = (n * j + i + 1) as u64;
            let counter = BigEndian::read_u64(&block[..KEY_WRAP_SEMIBLOCK]) ^ t;
            BigEndian::write_u64(&mut a[..], counter);
            ri.copy_from_slice(&block[KEY_WRAP_SEMIBLOCK..]);
        }
    }
    block.zeroize();
    Ok(())
}

/// Inverse of [`wrap_semiblocks`]
pub(crate) fn unwrap_semiblocks<E: BlockCipher>(
    engine: &mut E,
    a: &mut [u8; KEY_WRAP_SEMIBLOCK],
    r: &mut [u8],
) -> Result<()> {
    let n = r.len() / KEY_WRAP_SEMIBLOCK;
    let mut block = [0u8; WRAP_BLOCK];

    for j in (0..6).rev() {
        for i in (0..n).rev() {
            let ri = &mut r[i * KEY_WRAP_SEMIBLOCK..(i + 1) * KEY_WRAP_SEMIBLOCK];
            let t = (n * j + i + 1) as u64;
            BigEndian::write_u64(&mut block[..KEY_WRAP_SEMIBLOCK], BigEndian::read_u64(&a[..]) ^ t);
            block[KEY_WRAP_SEMIBLOCK..].copy_from_slice(ri);
            engine.process_block_in_place(&mut block, 0)?;

            a.copy_from_slice(&block[..KEY_WRAP_SEMIBLOCK]);
            ri.copy_from_slice(&block[KEY_WRAP_SEMIBLOCK..]);
        }
    }
    block.zeroize();
    Ok(())
}

/// Check the engine has the 128-bit block the wrap needs
pub(crate) fn check_block_size<E: BlockCipher>(context: &'static str, engine: &E) -> Result<()> {
    validate::parameter(
        context,
        engine.block_size() == WRAP_BLOCK,
        "cipher",
        "key wrap needs a 128-bit block cipher",
    )
}

/// RFC 3394 key wrap over a 128-bit block cipher
pub struct Rfc3394Wrap<E: BlockCipher> {
    engine: E,
    iv: [u8; KEY_WRAP_SEMIBLOCK],
    wrapping: bool,
    initialized: bool,
}

/// AES key wrap (RFC 3394)
pub type AesWrap = Rfc3394Wrap<Aes>;
/// Camellia key wrap (RFC 3657)
pub type CamelliaWrap = Rfc3394Wrap<Camellia>;
/// Serpent under the RFC 3394 construction
pub type SerpentWrap = Rfc3394Wrap<Serpent>;
/// Twofish under the RFC 3394 construction
pub type TwofishWrap = Rfc3394Wrap<Twofish>;

impl<E: BlockCipher> Rfc3394Wrap<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            iv: RFC3394_DEFAULT_IV,
            wrapping: false,
            initialized: false,
        }
    }
}

impl<E: BlockCipher + Default> Default for Rfc3394Wrap<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: BlockCipher> Wrapper for Rfc3394Wrap<E> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        self.engine.algorithm_name()
    }

    /// Accepts a key, optionally with an 8-byte IV; a random source is ignored
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        self.initialized = false;
        check_block_size(ALGORITHM, &self.engine)?;

        let (params, _) = split_random(params);
        let key = match params {
            CipherParameters::WithIv(with_iv) => {
                validate::iv_length(ALGORITHM, with_iv.iv().len(), KEY_WRAP_SEMIBLOCK)?;
                let (inner, iv) = with_iv.into_parts();
                self.iv.copy_from_slice(iv.as_slice());
                inner.ok_or_else(|| validate::wrong_parameter(ALGORITHM, "ParametersWithIv(KeyParameter)"))?
            }
            other => {
                self.iv = RFC3394_DEFAULT_IV;
                other
            }
        };
        trace!("{} init: {:?}", ALGORITHM, direction);

        self.engine.init(direction, key)?;
        self.wrapping = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn wrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<Vec<u8>> {
        validate::initialized(ALGORITHM, self.initialized)?;
        check_direction(ALGORITHM, self.wrapping, true)?;
        input_window(ALGORITHM, input, in_off, len)?;
        validate::multiple_of(ALGORITHM, len, KEY_WRAP_SEMIBLOCK, KEY_WRAP_SEMIBLOCK)?;

        let mut out = Vec::with_capacity(len + KEY_WRAP_SEMIBLOCK);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(&input[in_off..in_off + len]);

        let mut a = self.iv;
        wrap_semiblocks(&mut self.engine, &mut a, &mut out[KEY_WRAP_SEMIBLOCK..])?;
        out[..KEY_WRAP_SEMIBLOCK].copy_from_slice(&a);
        Ok(out)
    }

    fn unwrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<SecretVec> {
        validate::initialized(ALGORITHM, self.initialized)?;
        check_direction(ALGORITHM, self.wrapping, false)?;
        input_window(ALGORITHM, input, in_off, len)?;
        validate::multiple_of(ALGORITHM, len, KEY_WRAP_SEMIBLOCK, WRAP_BLOCK)?;

        let mut buf = SecretVec::from_slice(&input[in_off..in_off + len]);
        let mut a = [0u8; KEY_WRAP_SEMIBLOCK];

        a.copy_from_slice(&buf.as_slice()[..KEY_WRAP_SEMIBLOCK]);
        unwrap_semiblocks(&mut self.engine, &mut a, &mut buf.as_mut_slice()[KEY_WRAP_SEMIBLOCK..])?;

        if !ct_eq(a, self.iv) {
            debug!("{}: integrity check failed", ALGORITHM);
            return Err(Error::invalid_ciphertext(ALGORITHM));
        }
        Ok(SecretVec::from_slice(&buf.as_slice()[KEY_WRAP_SEMIBLOCK..]))
    }
}

impl<E: BlockCipher> Drop for Rfc3394Wrap<E> {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}

#[cfg(test)]
mod tests;
