//! RC4 stream cipher
//!
//! A 256-byte permutation keyed by the key-scheduling pass and walked by
//! two indices. Keys of 1 to 256 bytes; no IV.

use alloc::borrow::Cow;

use api::{CipherParameters, StreamCipher};
use common::SecretVec;
use log::trace;
use params::utils::symmetric::RC4_MAX_KEY_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "RC4";

/// RC4 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc4 {
    s: [u8; 256],
    x: u8,
    y: u8,
    key: SecretVec,
    initialized: bool,
}

impl Rc4 {
    pub fn new() -> Self {
        Self {
            s: [0u8; 256],
            x: 0,
            y: 0,
            key: SecretVec::empty(),
            initialized: false,
        }
    }

    fn setup(&mut self) {
        let key = self.key.as_slice();
        for (i, v) in self.s.iter_mut().enumerate() {
            *v = i as u8;
        }
        let mut j = 0u8;
        for i in 0..256 {
            j = j.wrapping_add(self.s[i]).wrapping_add(key[i % key.len()]);
            self.s.swap(i, j as usize);
        }
        self.x = 0;
        self.y = 0;
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        self.x = self.x.wrapping_add(1);
        self.y = self.y.wrapping_add(self.s[self.x as usize]);
        self.s.swap(self.x as usize, self.y as usize);
        let t = self.s[self.x as usize].wrapping_add(self.s[self.y as usize]);
        self.s[t as usize]
    }
}

impl Default for Rc4 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCipher for Rc4 {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {}-byte key", ALGORITHM, key.len());
        validate::key_range(ALGORITHM, key.len(), 1, RC4_MAX_KEY_SIZE)?;

        self.key = SecretVec::from_slice(key.key());
        self.setup();
        self.initialized = true;
        Ok(())
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        validate::initialized(ALGORITHM, self.initialized)?;
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
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::stream_io(ALGORITHM, input.len(), in_off, len, output.len(), out_off)?;

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
