//! Salsa20 and ChaCha keystream generators
//!
//! Both ciphers expand a 16- or 32-byte key, an 8-byte IV and a 64-bit
//! block counter into 64-byte keystream blocks with an ARX permutation.
//! They differ only in the state layout and the quarter-round, which is
//! what a [`Core`] supplies. The counter covers 2^64 blocks; once the last
//! block has been used the engine refuses further output with
//! `KeystreamExhausted`.

mod chacha;

pub use chacha::ChaChaCore;

use alloc::borrow::Cow;
use alloc::format;
use core::marker::PhantomData;

use api::{CipherParameters, StreamCipher};
use byteorder::{ByteOrder, LittleEndian};
use common::SecretVec;
use log::trace;
use params::utils::symmetric::{SALSA20_BLOCK_SIZE, SALSA20_DEFAULT_ROUNDS, SALSA20_IV_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, CipherError, Result};
use crate::keying::expect_key_iv;

pub(crate) const SIGMA: &[u8; 16] = b"expand 32-byte k";
pub(crate) const TAU: &[u8; 16] = b"expand 16-byte k";

mod sealed {
    pub trait Sealed {}
}

/// State layout and permutation of one member of the family
pub trait Core: Clone + Zeroize + sealed::Sealed {
    /// Base algorithm name
    const NAME: &'static str;
    /// Index of the low counter word; the high word follows it
    const COUNTER: usize;

    /// Load constants, key and IV into a fresh state
    fn layout(state: &mut [u32; 16], key: &[u8], iv: &[u8]);

    /// `rounds` rounds of the permutation, without the feed-forward addition
    fn permute(state: &mut [u32; 16], rounds: usize);

    /// Algorithm name for a round count
    fn name(rounds: usize) -> Cow<'static, str>;
}

/// Salsa20 state layout and double-round
#[derive(Clone, Debug, Default, Zeroize)]
pub struct SalsaCore;

impl sealed::Sealed for SalsaCore {}
impl sealed::Sealed for ChaChaCore {}

#[inline(always)]
fn salsa_quarter(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[b] ^= x[a].wrapping_add(x[d]).rotate_left(7);
    x[c] ^= x[b].wrapping_add(x[a]).rotate_left(9);
    x[d] ^= x[c].wrapping_add(x[b]).rotate_left(13);
    x[a] ^= x[d].wrapping_add(x[c]).rotate_left(18);
}

impl Core for SalsaCore {
    const NAME: &'static str = "Salsa20";
    const COUNTER: usize = 8;

    fn layout(state: &mut [u32; 16], key: &[u8], iv: &[u8]) {
        let (constants, k2) = if key.len() == 32 { (SIGMA, &key[16..]) } else { (TAU, key) };
        let c = |i: usize| LittleEndian::read_u32(&constants[4 * i..]);

        state[0] = c(0);
        LittleEndian::read_u32_into(&key[..16], &mut state[1..5]);
        state[5] = c(1);
        LittleEndian::read_u32_into(iv, &mut state[6..8]);
        state[8] = 0;
        state[9] = 0;
        state[10] = c(2);
        LittleEndian::read_u32_into(&k2[..16], &mut state[11..15]);
        state[15] = c(3);
    }

    fn permute(x: &mut [u32; 16], rounds: usize) {
        for _ in 0..rounds / 2 {
            // columns
            salsa_quarter(x, 0, 4, 8, 12);
            salsa_quarter(x, 5, 9, 13, 1);
            salsa_quarter(x, 10, 14, 2, 6);
            salsa_quarter(x, 15, 3, 7, 11);
            // rows
            salsa_quarter(x, 0, 1, 2, 3);
            salsa_quarter(x, 5, 6, 7, 4);
            salsa_quarter(x, 10, 11, 8, 9);
            salsa_quarter(x, 15, 12, 13, 14);
        }
    }

    fn name(rounds: usize) -> Cow<'static, str> {
        if rounds == SALSA20_DEFAULT_ROUNDS {
            Cow::Borrowed(Self::NAME)
        } else {
            Cow::Owned(format!("{}/{}", Self::NAME, rounds))
        }
    }
}

/// Keystream engine over a [`Core`]
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salsa<C: Core> {
    state: [u32; 16],
    keystream: [u8; SALSA20_BLOCK_SIZE],
    index: usize,
    rounds: usize,
    exhausted: bool,
    key: SecretVec,
    iv: [u8; SALSA20_IV_SIZE],
    initialized: bool,
    core: PhantomData<C>,
}

/// Salsa20 with 20, 12 or 8 rounds
pub type Salsa20 = Salsa<SalsaCore>;

/// ChaCha (8-byte IV, 64-bit counter) with 20, 12 or 8 rounds
pub type ChaCha = Salsa<ChaChaCore>;

impl<C: Core> Salsa<C> {
    /// Twenty rounds
    pub fn new() -> Self {
        Self {
            state: [0u32; 16],
            keystream: [0u8; SALSA20_BLOCK_SIZE],
            index: SALSA20_BLOCK_SIZE,
            rounds: SALSA20_DEFAULT_ROUNDS,
            exhausted: false,
            key: SecretVec::empty(),
            iv: [0u8; SALSA20_IV_SIZE],
            initialized: false,
            core: PhantomData,
        }
    }

    /// Reduced-round variant; `rounds` must be 8, 12 or 20
    pub fn with_rounds(rounds: usize) -> Result<Self> {
        validate::parameter(
            C::NAME,
            matches!(rounds, 8 | 12 | 20),
            "rounds",
            "must be 8, 12 or 20",
        )?;
        let mut engine = Self::new();
        engine.rounds = rounds;
        Ok(engine)
    }

    /// Move to the start of keystream block `block`
    pub fn seek(&mut self, block: u64) {
        self.set_counter(block);
        self.exhausted = false;
        self.index = SALSA20_BLOCK_SIZE;
    }

    fn counter(&self) -> u64 {
        (self.state[C::COUNTER] as u64) | ((self.state[C::COUNTER + 1] as u64) << 32)
    }

    fn set_counter(&mut self, counter: u64) {
        self.state[C::COUNTER] = counter as u32;
        self.state[C::COUNTER + 1] = (counter >> 32) as u32;
    }

    fn setup(&mut self) {
        C::layout(&mut self.state, self.key.as_slice(), &self.iv);
        self.index = SALSA20_BLOCK_SIZE;
        self.exhausted = false;
    }

    /// Keystream bytes still available before the counter runs out
    fn available(&self) -> u128 {
        let buffered = (SALSA20_BLOCK_SIZE - self.index) as u128;
        if self.exhausted {
            buffered
        } else {
            buffered + ((1u128 << 64) - self.counter() as u128) * SALSA20_BLOCK_SIZE as u128
        }
    }

    fn generate_block(&mut self) {
        let mut x = self.state;
        C::permute(&mut x, self.rounds);
        for (w, s) in x.iter_mut().zip(self.state.iter()) {
            *w = w.wrapping_add(*s);
        }
        LittleEndian::write_u32_into(&x, &mut self.keystream);
        x.zeroize();

        let next = self.counter().wrapping_add(1);
        self.set_counter(next);
        if next == 0 {
            self.exhausted = true;
        }
        self.index = 0;
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        if self.index == SALSA20_BLOCK_SIZE {
            self.generate_block();
        }
        let b = self.keystream[self.index];
        self.index += 1;
        b
    }

    fn ensure_available(&self, len: usize) -> Result<()> {
        if (len as u128) > self.available() {
            return Err(CipherError::KeystreamExhausted { algorithm: C::NAME }.into());
        }
        Ok(())
    }
}

impl<C: Core> Default for Salsa<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Core> StreamCipher for Salsa<C> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        C::name(self.rounds)
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let (key, iv) = expect_key_iv(C::NAME, params)?;
        trace!("{} init: {}-byte key, {}-byte IV", C::NAME, key.len(), iv.len());
        validate::key_size(C::NAME, key.len(), &[16, 32])?;
        validate::iv_length(C::NAME, iv.len(), SALSA20_IV_SIZE)?;

        self.key = SecretVec::from_slice(key.key());
        self.iv.copy_from_slice(iv.as_slice());
        self.setup();
        self.initialized = true;
        Ok(())
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        validate::initialized(C::NAME, self.initialized)?;
        self.ensure_available(1)?;
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
        validate::initialized(C::NAME, self.initialized)?;
        validate::stream_io(C::NAME, input.len(), in_off, len, output.len(), out_off)?;
        self.ensure_available(len)?;

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
