//! VMPC stream cipher and its KSA3 key schedule variant
//!
//! A 256-byte permutation is scrambled by 768 key-scheduling steps over
//! the key, then 768 over the IV. The KSA3 variant runs a third pass over
//! the key. Output is one byte per step.

use alloc::borrow::Cow;

use api::{CipherParameters, StreamCipher};
use common::SecretVec;
use log::trace;
use params::utils::symmetric::VMPC_MAX_KEY_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key_iv;

/// Permutation state shared by both schedules
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct State {
    p: [u8; 256],
    s: u8,
    n: u8,
}

impl State {
    fn identity() -> Self {
        let mut p = [0u8; 256];
        for (i, v) in p.iter_mut().enumerate() {
            *v = i as u8;
        }
        Self { p, s: 0, n: 0 }
    }

    fn schedule(&mut self, material: &[u8]) {
        for m in 0..768 {
            let i = m & 0xff;
            let idx = self
                .s
                .wrapping_add(self.p[i])
                .wrapping_add(material[m % material.len()]);
            self.s = self.p[idx as usize];
            self.p.swap(i, self.s as usize);
        }
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        let n = self.n as usize;
        self.s = self.p[self.s.wrapping_add(self.p[n]) as usize];
        let s = self.s as usize;
        let z = self.p[self.p[self.p[s] as usize].wrapping_add(1) as usize];
        self.p.swap(n, s);
        self.n = self.n.wrapping_add(1);
        z
    }
}

/// VMPC keystream generator
///
/// `extra_pass` selects the KSA3 schedule; [`VmpcKsa3`] wraps it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Vmpc {
    state: State,
    key: SecretVec,
    iv: SecretVec,
    #[zeroize(skip)]
    extra_pass: bool,
    initialized: bool,
}

impl Vmpc {
    pub fn new() -> Self {
        Self {
            state: State::identity(),
            key: SecretVec::empty(),
            iv: SecretVec::empty(),
            extra_pass: false,
            initialized: false,
        }
    }

    fn name(&self) -> &'static str {
        if self.extra_pass {
            "VMPC-KSA3"
        } else {
            "VMPC"
        }
    }

    fn setup(&mut self) {
        self.state = State::identity();
        self.state.schedule(self.key.as_slice());
        self.state.schedule(self.iv.as_slice());
        if self.extra_pass {
            self.state.schedule(self.key.as_slice());
        }
        self.state.n = 0;
    }
}

impl Default for Vmpc {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCipher for Vmpc {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(self.name())
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let name = self.name();
        let (key, iv) = expect_key_iv(name, params)?;
        trace!("{} init: {}-byte key, {}-byte IV", name, key.len(), iv.len());
        validate::key_range(name, key.len(), 1, VMPC_MAX_KEY_SIZE)?;
        validate::iv_range(name, iv.len(), 1, VMPC_MAX_KEY_SIZE)?;

        self.key = SecretVec::from_slice(key.key());
        self.iv = iv;
        self.setup();
        self.initialized = true;
        Ok(())
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        validate::initialized(self.name(), self.initialized)?;
        Ok(input ^ self.state.next_byte())
    }

    fn process_bytes(
        &mut self,
        input: &[u8],
        in_off: usize,
        len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        let name = self.name();
        validate::initialized(name, self.initialized)?;
        validate::stream_io(name, input.len(), in_off, len, output.len(), out_off)?;

        for (o, i) in output[out_off..out_off + len].iter_mut().zip(&input[in_off..in_off + len]) {
            *o = i ^ self.state.next_byte();
        }
        Ok(len)
    }

    fn reset(&mut self) {
        if self.initialized {
            self.setup();
        }
    }
}

/// VMPC with the KSA3 key schedule
#[derive(Clone)]
pub struct VmpcKsa3(Vmpc);

impl VmpcKsa3 {
    pub fn new() -> Self {
        let mut inner = Vmpc::new();
        inner.extra_pass = true;
        Self(inner)
    }
}

impl Default for VmpcKsa3 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCipher for VmpcKsa3 {
    fn algorithm_name(&self) -> Cow<'static, str> {
        self.0.algorithm_name()
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        self.0.init(params)
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        self.0.return_byte(input)
    }

    fn process_bytes(
        &mut self,
        input: &[u8],
        in_off: usize,
        len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        self.0.process_bytes(input, in_off, len, output, out_off)
    }

    fn reset(&mut self) {
        self.0.reset()
    }
}

#[cfg(test)]
mod tests;
