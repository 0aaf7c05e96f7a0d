//! XTEA, the corrected Tiny Encryption Algorithm
//!
//! Same block and key size as TEA, but the key word used in each half-round
//! is selected by the running sum.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{GOLDEN_RATIO, TEA_BLOCK_SIZE, TEA_KEY_SIZE, TEA_ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "XTEA";

/// XTEA block cipher
///
/// The per-half-round `sum + k[..]` terms are precomputed at init.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Xtea {
    sum0: [u32; TEA_ROUNDS],
    sum1: [u32; TEA_ROUNDS],
    encrypting: bool,
    initialized: bool,
}

#[inline(always)]
fn mix(v: u32) -> u32 {
    ((v << 4) ^ (v >> 5)).wrapping_add(v)
}

impl Xtea {
    pub fn new() -> Self {
        Self {
            sum0: [0u32; TEA_ROUNDS],
            sum1: [0u32; TEA_ROUNDS],
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8]) {
        let mut k = [0u32; 4];
        BigEndian::read_u32_into(key, &mut k);

        let mut sum = 0u32;
        for i in 0..TEA_ROUNDS {
            self.sum0[i] = sum.wrapping_add(k[(sum & 3) as usize]);
            sum = sum.wrapping_add(GOLDEN_RATIO);
            self.sum1[i] = sum.wrapping_add(k[((sum >> 11) & 3) as usize]);
        }
        k.zeroize();
    }

    fn encrypt_block(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        for i in 0..TEA_ROUNDS {
            v0 = v0.wrapping_add(mix(v1) ^ self.sum0[i]);
            v1 = v1.wrapping_add(mix(v0) ^ self.sum1[i]);
        }
        (v0, v1)
    }

    fn decrypt_block(&self, mut v0: u32, mut v1: u32) -> (u32, u32) {
        for i in (0..TEA_ROUNDS).rev() {
            v1 = v1.wrapping_sub(mix(v0) ^ self.sum1[i]);
            v0 = v0.wrapping_sub(mix(v1) ^ self.sum0[i]);
        }
        (v0, v1)
    }
}

impl Default for Xtea {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Xtea {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());
        validate::key_size(ALGORITHM, key.len(), &[TEA_KEY_SIZE])?;

        self.expand_key(key.key());
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
