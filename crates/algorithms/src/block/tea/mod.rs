//! Tiny Encryption Algorithm
//!
//! 64-bit blocks, 128-bit key, 32 cycles of shift/add/xor mixing driven by
//! multiples of the golden-ratio constant.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{GOLDEN_RATIO, TEA_BLOCK_SIZE, TEA_KEY_SIZE, TEA_ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "TEA";

/// TEA block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Tea {
    key: [u32; 4],
    encrypting: bool,
    initialized: bool,
}

impl Tea {
    pub fn new() -> Self {
        Self {
            key: [0u32; 4],
            encrypting: false,
            initialized: false,
        }
    }

    fn encrypt_block(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        let k = &self.key;
        let mut sum = 0u32;
        for _ in 0..TEA_ROUNDS {
            sum = sum.wrapping_add(GOLDEN_RATIO);
            v0 = v0.wrapping_add(
                (v1 << 4).wrapping_add(k[0]) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k[1]),
            );
            v1 = v1.wrapping_add(
                (v0 << 4).wrapping_add(k[2]) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k[3]),
            );
        }
        (v0, v1)
    }

    fn decrypt_block(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        let k = &self.key;
        let mut sum = GOLDEN_RATIO.wrapping_mul(TEA_ROUNDS as u32);
        for _ in 0..TEA_ROUNDS {
            v1 = v1.wrapping_sub(
                (v0 << 4).wrapping_add(k[2]) ^ v0.wrapping_add(sum) ^ (v0 >> 5).wrapping_add(k[3]),
            );
            v0 = v0.wrapping_sub(
                (v1 << 4).wrapping_add(k[0]) ^ v1.wrapping_add(sum) ^ (v1 >> 5).wrapping_add(k[1]),
            );
            sum = sum.wrapping_sub(GOLDEN_RATIO);
        }
        (v0, v1)
    }
}

impl Default for Tea {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Tea {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());
        validate::key_size(ALGORITHM, key.len(), &[TEA_KEY_SIZE])?;

        BigEndian::read_u32_into(key.key(), &mut self.key);
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        TEA_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, TEA_BLOCK_SIZE)?;

        let v0 = BigEndian::read_u32(&input[in_off..]);
        let v1 = BigEndian::read_u32(&input[in_off + 4..]);
        let (v0, v1) = if self.encrypting {
            self.encrypt_block(v0, v1)
        } else {
            self.decrypt_block(v0, v1)
        };
        BigEndian::write_u32(&mut output[out_off..], v0);
        BigEndian::write_u32(&mut output[out_off + 4..], v1);

        Ok(TEA_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
