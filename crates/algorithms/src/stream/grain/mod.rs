//! Grain v1 and Grain-128 stream ciphers
//!
//! Both members pair a linear and a non-linear feedback register with a
//! filter function over taps from both. Registers are held in a `u128`
//! with bit `i` of the register at bit `i` of the integer; key and IV bytes
//! are loaded least significant bit first. No tap reaches the top
//! [`Variant::CHUNK`] bits, so that many clocks are computed in parallel.

mod grain128;
mod v1;

#[cfg(test)]
mod tests;

pub use grain128::Grain128Variant;
pub use v1::GrainV1Variant;

use alloc::borrow::Cow;
use core::marker::PhantomData;

use api::{CipherParameters, StreamCipher};
use log::trace;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key_iv;

mod sealed {
    pub trait Sealed {}
}

/// Register sizes, taps and feedback of one Grain member
pub trait Variant: Clone + Zeroize + sealed::Sealed {
    const NAME: &'static str;
    const KEY_SIZE: usize;
    const IV_SIZE: usize;
    /// Register length in bits
    const WIDTH: u32;
    /// Clocks computed per step
    const CHUNK: u32;
    /// Initialisation clocks with the output fed back
    const INIT_CLOCKS: u32;

    /// Keystream bits for the next `CHUNK` clocks
    fn output(lfsr: u128, nfsr: u128) -> u128;

    /// Linear feedback for the next `CHUNK` clocks
    fn lfsr_feedback(lfsr: u128) -> u128;

    /// Non-linear feedback for the next `CHUNK` clocks, excluding the LFSR bit
    fn nfsr_feedback(nfsr: u128) -> u128;
}

/// Grain stream cipher over a [`Variant`]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Grain<V: Variant> {
    lfsr: u128,
    nfsr: u128,
    buf: [u8; 4],
    idx: usize,
    key: [u8; 16],
    iv: [u8; 12],
    initialized: bool,
    variant: PhantomData<V>,
}

/// Grain v1: 80-bit key, 64-bit IV
pub type GrainV1 = Grain<GrainV1Variant>;

/// Grain-128: 128-bit key, 96-bit IV
pub type Grain128 = Grain<Grain128Variant>;

impl<V: Variant> Grain<V> {
    const CHUNK_BYTES: usize = (V::CHUNK / 8) as usize;
    const MASK: u128 = (1u128 << V::CHUNK) - 1;

    pub fn new() -> Self {
        Self {
            lfsr: 0,
            nfsr: 0,
            buf: [0u8; 4],
            idx: 4,
            key: [0u8; 16],
            iv: [0u8; 12],
            initialized: false,
            variant: PhantomData,
        }
    }

    /// Clock `CHUNK` times, returning the keystream bits
    fn clock(&mut self, feedback: bool) -> u128 {
        let z = V::output(self.lfsr, self.nfsr) & Self::MASK;
        let mut ls = V::lfsr_feedback(self.lfsr) & Self::MASK;
        let mut nb = (V::nfsr_feedback(self.nfsr) ^ self.lfsr) & Self::MASK;
        if feedback {
            ls ^= z;
            nb ^= z;
        }
        let top = V::WIDTH - V::CHUNK;
        self.lfsr = (self.lfsr >> V::CHUNK) | (ls << top);
        self.nfsr = (self.nfsr >> V::CHUNK) | (nb << top);
        z
    }

    fn setup(&mut self) {
        let mut key = [0u8; 16];
        key[..V::KEY_SIZE].copy_from_slice(&self.key[..V::KEY_SIZE]);
        let mut iv = [0u8; 16];
        iv[..V::IV_SIZE].copy_from_slice(&self.iv[..V::IV_SIZE]);

        let ones = (1u128 << (V::WIDTH - 8 * V::IV_SIZE as u32)) - 1;
        self.nfsr = u128::from_le_bytes(key);
        self.lfsr = u128::from_le_bytes(iv) | (ones << (8 * V::IV_SIZE));
        key.zeroize();
        iv.zeroize();

        for _ in 0..V::INIT_CLOCKS / V::CHUNK {
            self.clock(true);
        }
        self.idx = Self::CHUNK_BYTES;
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        if self.idx == Self::CHUNK_BYTES {
            let z = self.clock(false) as u32;
            self.buf = z.to_le_bytes();
            self.idx = 0;
        }
        let b = self.buf[self.idx];
        self.idx += 1;
        b
    }
}

impl<V: Variant> Default for Grain<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Variant> StreamCipher for Grain<V> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(V::NAME)
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let (key, iv) = expect_key_iv(V::NAME, params)?;
        trace!("{} init: {}-byte key, {}-byte IV", V::NAME, key.len(), iv.len());
        validate::key_size(V::NAME, key.len(), &[V::KEY_SIZE])?;
        validate::iv_length(V::NAME, iv.len(), V::IV_SIZE)?;

        self.key[..V::KEY_SIZE].copy_from_slice(key.key());
        self.iv[..V::IV_SIZE].copy_from_slice(iv.as_slice());
        self.setup();
        self.initialized = true;
        Ok(())
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        validate::initialized(V::NAME, self.initialized)?;
        Ok(input ^ self.next_byte())
    }

    fn process_bytes(
        &mut self,
        input: &[u8],
        in_off: usize,
        len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(V::NAME, self.initialized)?;
        validate::stream_io(V::NAME, input.len(), in_off, len, output.len(), out_off)?;

        for (o, i) in output[out_off..out_off + len].iter_mut().zip(&input[in_off..in_off + len]) {
            *o = i ^ self.next_byte();
        }
        Ok(len)
    }

    fn reset(&mut self) {
        if self.initialized {
            self.setup();
        }
    }
}
