//! RFC 5649 key wrap with padding
//!
//! Keys of any non-zero length are zero-padded to a multiple of 8 bytes and
//! wrapped with the RFC 3394 passes under the alternative initial value
//! `A65959A6 || MLI`, where MLI is the unpadded length. A key of at most
//! 8 bytes is a single raw block encryption.

use alloc::borrow::Cow;
use alloc::vec::Vec;

use api::{BlockCipher, CipherParameters, Direction, Wrapper};
use byteorder::{BigEndian, ByteOrder};
use common::SecretVec;
use internal::constant_time::{ct_eq_choice, ct_gt, ct_is_zero};
use log::{debug, trace};
use params::utils::symmetric::{KEY_WRAP_SEMIBLOCK, RFC5649_IV_PREFIX};
use subtle::{Choice, ConditionallySelectable};
use zeroize::Zeroize;

use super::rfc3394::{check_block_size, unwrap_semiblocks, wrap_semiblocks, WRAP_BLOCK};
use super::{check_direction, input_window, split_random};
use crate::block::Aes;
use crate::error::{validate, CipherError, Error, Result};

const ALGORITHM: &str = "RFC5649Wrap";

/// RFC 5649 key wrap over a 128-bit block cipher
pub struct Rfc5649Wrap<E: BlockCipher> {
    engine: E,
    prefix: [u8; 4],
    wrapping: bool,
    initialized: bool,
}

/// AES key wrap with padding
pub type AesWrapPad = Rfc5649Wrap<Aes>;

impl<E: BlockCipher> Rfc5649Wrap<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            prefix: RFC5649_IV_PREFIX,
            wrapping: false,
            initialized: false,
        }
    }

    /// True when `padded[..]` is a valid recovery for the integrity register `a`
    fn check(&self, a: &[u8; KEY_WRAP_SEMIBLOCK], padded: &[u8]) -> (Choice, usize) {
        let mli = BigEndian::read_u32(&a[4..]);
        let n = padded.len() as u32;

        let mut valid = ct_eq_choice(&a[..4], self.prefix);
        valid &= ct_gt(mli, n.saturating_sub(KEY_WRAP_SEMIBLOCK as u32));
        valid &= !ct_gt(mli, n);

        // Bytes at or past the MLI in the last semiblock must be zero
        let tail_start = padded.len() - KEY_WRAP_SEMIBLOCK;
        let mut tail = [0u8; KEY_WRAP_SEMIBLOCK];
        for (k, t) in tail.iter_mut().enumerate() {
            let in_pad = !ct_gt(mli, (tail_start + k) as u32);
            *t = u8::conditional_select(&0, &padded[tail_start + k], in_pad);
        }
        valid &= ct_is_zero(&tail);

        let len = if bool::from(valid) { mli as usize } else { 0 };
        (valid, len)
    }
}

impl<E: BlockCipher + Default> Default for Rfc5649Wrap<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: BlockCipher> Wrapper for Rfc5649Wrap<E> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        self.engine.algorithm_name()
    }

    /// Accepts a key, optionally with a 4-byte IV prefix; a random source is ignored
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        self.initialized = false;
        check_block_size(ALGORITHM, &self.engine)?;

        let (params, _) = split_random(params);
        let key = match params {
            CipherParameters::WithIv(with_iv) => {
                validate::iv_length(ALGORITHM, with_iv.iv().len(), RFC5649_IV_PREFIX.len())?;
                let (inner, iv) = with_iv.into_parts();
                self.prefix.copy_from_slice(iv.as_slice());
                inner.ok_or_else(|| validate::wrong_parameter(ALGORITHM, "ParametersWithIv(KeyParameter)"))?
            }
            other => {
                self.prefix = RFC5649_IV_PREFIX;
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
        validate::multiple_of(ALGORITHM, len, 1, 1)?;
        let mli = u32::try_from(len).map_err(|_| CipherError::InvalidInputLength {
            context: ALGORITHM,
            actual: len,
        })?;

        let padded_len = len.div_ceil(KEY_WRAP_SEMIBLOCK) * KEY_WRAP_SEMIBLOCK;
        let mut a = [0u8; KEY_WRAP_SEMIBLOCK];
        a[..4].copy_from_slice(&self.prefix);
        BigEndian::write_u32(&mut a[4..], mli);

        let mut out = Vec::with_capacity(padded_len + KEY_WRAP_SEMIBLOCK);
        out.extend_from_slice(&a);
        out.extend_from_slice(&input[in_off..in_off + len]);
        out.resize(padded_len + KEY_WRAP_SEMIBLOCK, 0);

        if padded_len == KEY_WRAP_SEMIBLOCK {
            self.engine.process_block_in_place(&mut out, 0)?;
        } else {
            wrap_semiblocks(&mut self.engine, &mut a, &mut out[KEY_WRAP_SEMIBLOCK..])?;
            out[..KEY_WRAP_SEMIBLOCK].copy_from_slice(&a);
        }
        Ok(out)
    }

    fn unwrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<SecretVec> {
        validate::initialized(ALGORITHM, self.initialized)?;
        check_direction(ALGORITHM, self.wrapping, false)?;
        input_window(ALGORITHM, input, in_off, len)?;
        validate::multiple_of(ALGORITHM, len, KEY_WRAP_SEMIBLOCK, WRAP_BLOCK)?;

        let mut buf = SecretVec::from_slice(&input[in_off..in_off + len]);
        let mut a = [0u8; KEY_WRAP_SEMIBLOCK];

        if len == WRAP_BLOCK {
            self.engine.process_block_in_place(buf.as_mut_slice(), 0)?;
            a.copy_from_slice(&buf.as_slice()[..KEY_WRAP_SEMIBLOCK]);
        } else {
            a.copy_from_slice(&buf.as_slice()[..KEY_WRAP_SEMIBLOCK]);
            unwrap_semiblocks(&mut self.engine, &mut a, &mut buf.as_mut_slice()[KEY_WRAP_SEMIBLOCK..])?;
        }

        let padded = &buf.as_slice()[KEY_WRAP_SEMIBLOCK..];
        let (valid, key_len) = self.check(&a, padded);
        a.zeroize();
        if !bool::from(valid) {
            debug!("{}: integrity check failed", ALGORITHM);
            return Err(Error::invalid_ciphertext(ALGORITHM));
        }
        Ok(SecretVec::from_slice(&padded[..key_len]))
    }
}
