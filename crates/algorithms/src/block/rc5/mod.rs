//! RC5 block cipher with 32-bit and 64-bit words
//!
//! RC5-w/r/b: two w-bit words per block, `r` rounds of data-dependent
//! rotation, and a key of `b` bytes mixed into the `2r + 2` word schedule.
//! The round count defaults to 12 and can be set with [`Rc5Parameters`](api::Rc5Parameters).

use alloc::borrow::Cow;
use alloc::vec::Vec;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::{RC5_DEFAULT_ROUNDS, RC5_MAX_KEY_SIZE, RC5_MAX_ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Word type of an RC5 variant
pub trait Rc5Word: Copy + Default + Zeroize + sealed::Sealed {
    /// Algorithm name of the variant
    const NAME: &'static str;
    /// Word size in bytes
    const BYTES: usize;
    /// Magic constant `Pw` (from e)
    const P: Self;
    /// Magic constant `Qw` (from the golden ratio)
    const Q: Self;

    fn add(self, other: Self) -> Self;
    fn sub(self, other: Self) -> Self;
    fn xor(self, other: Self) -> Self;
    fn rotl(self, by: Self) -> Self;
    fn rotr(self, by: Self) -> Self;
    fn rotl_by(self, n: u32) -> Self;
    fn read(bytes: &[u8]) -> Self;
    fn write(self, out: &mut [u8]);
}

macro_rules! rc5_word {
    ($t:ty, $name:expr, $p:expr, $q:expr, $read:ident, $write:ident) => {
        impl Rc5Word for $t {
            const NAME: &'static str = $name;
            const BYTES: usize = core::mem::size_of::<$t>();
            const P: Self = $p;
            const Q: Self = $q;

            #[inline(always)]
            fn add(self, other: Self) -> Self {
                self.wrapping_add(other)
            }
            #[inline(always)]
            fn sub(self, other: Self) -> Self {
                self.wrapping_sub(other)
            }
            #[inline(always)]
            fn xor(self, other: Self) -> Self {
                self ^ other
            }
            #[inline(always)]
            fn rotl(self, by: Self) -> Self {
                self.rotate_left((by % <$t>::BITS as $t) as u32)
            }
            #[inline(always)]
            fn rotr(self, by: Self) -> Self {
                self.rotate_right((by % <$t>::BITS as $t) as u32)
            }
            #[inline(always)]
            fn rotl_by(self, n: u32) -> Self {
                self.rotate_left(n)
            }
            #[inline(always)]
            fn read(bytes: &[u8]) -> Self {
                LittleEndian::$read(bytes)
            }
            #[inline(always)]
            fn write(self, out: &mut [u8]) {
                LittleEndian::$write(out, self)
            }
        }
    };
}

rc5_word!(u32, "RC5-32", 0xB7E1_5163, 0x9E37_79B9, read_u32, write_u32);
rc5_word!(u64, "RC5-64", 0xB7E1_5162_8AED_2A6B, 0x9E37_79B9_7F4A_7C15, read_u64, write_u64);

/// RC5 engine generic over its word size
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc5<W: Rc5Word> {
    schedule: Vec<W>,
    rounds: usize,
    encrypting: bool,
    initialized: bool,
}

/// RC5 with 32-bit words and a 64-bit block
pub type Rc532 = Rc5<u32>;

/// RC5 with 64-bit words and a 128-bit block
pub type Rc564 = Rc5<u64>;

impl<W: Rc5Word> Rc5<W> {
    pub fn new() -> Self {
        Self {
            schedule: Vec::new(),
            rounds: RC5_DEFAULT_ROUNDS,
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8], rounds: usize) -> Result<()> {
        validate::key_range(W::NAME, key.len(), 1, RC5_MAX_KEY_SIZE)?;
        validate::parameter(
            W::NAME,
            (1..=RC5_MAX_ROUNDS).contains(&rounds),
            "rounds",
            "must be between 1 and 255",
        )?;

        // key bytes into little-endian words, zero padded
        let c = (key.len() + W::BYTES - 1) / W::BYTES;
        let mut padded = Vec::with_capacity(c * W::BYTES);
        padded.extend_from_slice(key);
        padded.resize(c * W::BYTES, 0);
        let mut l: Vec<W> = padded.chunks_exact(W::BYTES).map(W::read).collect();
        padded.zeroize();

        let t = 2 * (rounds + 1);
        let mut s = Vec::with_capacity(t);
        let mut value = W::P;
        for _ in 0..t {
            s.push(value);
            value = value.add(W::Q);
        }

        let (mut a, mut b) = (W::default(), W::default());
        let (mut i, mut j) = (0, 0);
        for _ in 0..3 * t.max(c) {
            a = s[i].add(a).add(b).rotl_by(3);
            s[i] = a;
            b = l[j].add(a).add(b).rotl(a.add(b));
            l[j] = b;
            i = (i + 1) % t;
            j = (j + 1) % c;
        }
        l.zeroize();

        self.schedule.zeroize();
        self.schedule = s;
        self.rounds = rounds;
        Ok(())
    }

    fn encrypt_block(&self, a: &mut W, b: &mut W) {
        let s = &self.schedule;
        *a = a.add(s[0]);
        *b = b.add(s[1]);
        for i in 1..=self.rounds {
            *a = a.xor(*b).rotl(*b).add(s[2 * i]);
            *b = b.xor(*a).rotl(*a).add(s[2 * i + 1]);
        }
    }

    fn decrypt_block(&self, a: &mut W, b: &mut W) {
        let s = &self.schedule;
        for i in (1..=self.rounds).rev() {
            *b = b.sub(s[2 * i + 1]).rotr(*a).xor(*a);
            *a = a.sub(s[2 * i]).rotr(*b).xor(*b);
        }
        *b = b.sub(s[1]);
        *a = a.sub(s[0]);
    }
}

impl<W: Rc5Word> Default for Rc5<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Rc5Word> BlockCipher for Rc5<W> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(W::NAME)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        self.initialized = false;
        let (key, rounds) = match &params {
            CipherParameters::Rc5(p) => (p.key(), p.rounds()),
            CipherParameters::Key(k) => (k.key(), RC5_DEFAULT_ROUNDS),
            _ => return Err(validate::wrong_parameter(W::NAME, "KeyParameter or Rc5Parameters")),
        };
        trace!(
            "{} init: {:?}, {}-byte key, {} rounds",
            W::NAME,
            direction,
            key.len(),
            rounds
        );

        self.expand_key(key, rounds)?;
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        2 * W::BYTES
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        let bs = self.block_size();
        validate::initialized(W::NAME, self.initialized)?;
        validate::block_io(W::NAME, input.len(), in_off, output.len(), out_off, bs)?;

        let mut a = W::read(&input[in_off..]);
        let mut b = W::read(&input[in_off + W::BYTES..]);
        if self.encrypting {
            self.encrypt_block(&mut a, &mut b);
        } else {
            self.decrypt_block(&mut a, &mut b);
        }
        a.write(&mut output[out_off..]);
        b.write(&mut output[out_off + W::BYTES..]);

        Ok(bs)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
