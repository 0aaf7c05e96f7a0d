//! RFC 3211 password-based key wrap
//!
//! The key is framed as `len || check || key || padding`, where `check` is
//! the complement of the first three key bytes and the random padding
//! brings the frame to a multiple of the block size, at least two blocks.
//! The frame is CBC-encrypted twice, the second pass continuing the chain
//! of the first. Unwrapping recovers the second pass's IV from the last two
//! ciphertext blocks, so only the caller's IV is needed.

use alloc::borrow::Cow;
use alloc::format;
use alloc::vec::Vec;

use api::{BlockCipher, CipherParameters, Direction, SharedRandom, Wrapper};
use common::SecretVec;
use internal::constant_time::ct_eq_choice;
use log::{debug, trace};
use params::utils::symmetric::{MAX_BLOCK_SIZE, RFC3211_MAX_KEY_SIZE};
use rand::RngCore;
use subtle::ConstantTimeGreater;
use zeroize::Zeroize;

use super::{cbc_in_place, check_direction, input_window, random_or_default, split_random};
use crate::block::Cbc;
use crate::error::{validate, CipherError, Error, Result};

const ALGORITHM: &str = "RFC3211Wrap";

/// Bytes of the length and check-value header
const HEADER: usize = 4;

/// RFC 3211 key wrap over CBC of any block cipher
pub struct Rfc3211Wrap<E: BlockCipher> {
    cbc: Cbc<E>,
    iv: [u8; MAX_BLOCK_SIZE],
    random: Option<SharedRandom>,
    wrapping: bool,
    initialized: bool,
}

impl<E: BlockCipher> Rfc3211Wrap<E> {
    pub fn new(engine: E) -> Self {
        Self {
            cbc: Cbc::new(engine),
            iv: [0u8; MAX_BLOCK_SIZE],
            random: None,
            wrapping: false,
            initialized: false,
        }
    }

    /// Restart the chain at `iv`, keeping the key schedule
    fn rechain(&mut self, direction: Direction, iv: &[u8]) -> Result<()> {
        self.cbc.init(direction, CipherParameters::iv_only(iv))
    }
}

impl<E: BlockCipher + Default> Default for Rfc3211Wrap<E> {
    fn default() -> Self {
        Self::new(E::default())
    }
}

impl<E: BlockCipher> Wrapper for Rfc3211Wrap<E> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}/RFC3211Wrap", self.cbc.underlying_cipher().algorithm_name()))
    }

    /// Expects `ParametersWithIv`, optionally inside `ParametersWithRandom`
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        self.initialized = false;
        let (params, random) = split_random(params);

        let with_iv = match params {
            CipherParameters::WithIv(with_iv) if with_iv.parameters().is_some() => with_iv,
            _ => return Err(validate::wrong_parameter(ALGORITHM, "ParametersWithIv(KeyParameter)")),
        };
        let bs = self.cbc.block_size();
        validate::iv_length(ALGORITHM, with_iv.iv().len(), bs)?;
        trace!("{} init: {:?}, {}-byte block", ALGORITHM, direction, bs);

        self.iv[..bs].copy_from_slice(with_iv.iv());
        self.cbc.init(direction, CipherParameters::WithIv(with_iv))?;
        self.random = if direction.is_encrypt() {
            Some(random_or_default(ALGORITHM, random)?)
        } else {
            None
        };
        self.wrapping = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn wrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<Vec<u8>> {
        validate::initialized(ALGORITHM, self.initialized)?;
        check_direction(ALGORITHM, self.wrapping, true)?;
        input_window(ALGORITHM, input, in_off, len)?;
        if len > RFC3211_MAX_KEY_SIZE {
            return Err(CipherError::InvalidInputLength { context: ALGORITHM, actual: len }.into());
        }

        let bs = self.cbc.block_size();
        let framed = HEADER + len;
        // The check bytes are read back even when the key is shorter than three bytes
        let total = framed.max(HEADER + 3).div_ceil(bs).max(2) * bs;

        let mut frame = Vec::with_capacity(total);
        frame.push(len as u8);
        frame.extend_from_slice(&[0u8; 3]);
        frame.extend_from_slice(&input[in_off..in_off + len]);
        frame.resize(total, 0);
        if let Some(random) = &self.random {
            random.borrow_mut().fill_bytes(&mut frame[framed..]);
        }
        for i in 0..3 {
            frame[1 + i] = !frame[HEADER + i];
        }

        self.cbc.reset();
        cbc_in_place(&mut self.cbc, &mut frame)?;
        cbc_in_place(&mut self.cbc, &mut frame)?;
        Ok(frame)
    }

    fn unwrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<SecretVec> {
        validate::initialized(ALGORITHM, self.initialized)?;
        check_direction(ALGORITHM, self.wrapping, false)?;
        input_window(ALGORITHM, input, in_off, len)?;
        let bs = self.cbc.block_size();
        validate::multiple_of(ALGORITHM, len, bs, 2 * bs)?;
        // Narrow engines can yield a frame too short for the header and check bytes
        if len < HEADER + 3 {
            return Err(CipherError::InvalidInputLength { context: ALGORITHM, actual: len }.into());
        }

        let mut frame = SecretVec::from_slice(&input[in_off..in_off + len]);
        let buf = frame.as_mut_slice();
        let mut iv = [0u8; MAX_BLOCK_SIZE];

        // Every block but the first undoes the second pass without its IV
        iv[..bs].copy_from_slice(&buf[..bs]);
        self.rechain(Direction::Decrypt, &iv[..bs])?;
        cbc_in_place(&mut self.cbc, &mut buf[bs..])?;

        // The last first-pass block is the IV of the second pass
        iv[..bs].copy_from_slice(&buf[len - bs..]);
        self.rechain(Direction::Decrypt, &iv[..bs])?;
        cbc_in_place(&mut self.cbc, &mut buf[..bs])?;

        iv[..bs].copy_from_slice(&self.iv[..bs]);
        self.rechain(Direction::Decrypt, &iv[..bs])?;
        cbc_in_place(&mut self.cbc, buf)?;
        iv.zeroize();

        let key_len = buf[0] as usize;
        let mut check = [0u8; 3];
        for (c, b) in check.iter_mut().zip(&buf[1..HEADER]) {
            *c = !b;
        }
        let fits = !(key_len as u32).ct_gt(&((len - HEADER) as u32));
        let valid = ct_eq_choice(check, &buf[HEADER..HEADER + 3]) & fits;

        if !bool::from(valid) {
            debug!("{}: integrity check failed", ALGORITHM);
            return Err(Error::invalid_ciphertext(ALGORITHM));
        }
        Ok(SecretVec::from_slice(&buf[HEADER..HEADER + key_len]))
    }
}

impl<E: BlockCipher> Drop for Rfc3211Wrap<E> {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}

#[cfg(test)]
mod tests;
