//! HC-128 stream cipher
//!
//! Two 512-word tables updated in turn, one word per step, with the other
//! table acting as a key-dependent S-box for the output filter. Keystream
//! words are emitted little-endian.

use alloc::borrow::Cow;

use api::{CipherParameters, StreamCipher};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::HC128_KEY_SIZE;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key_iv;

const ALGORITHM: &str = "HC-128";

const TABLE: usize = 512;
const MASK: usize = TABLE - 1;

#[inline(always)]
fn f1(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn f2(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// HC-128 stream cipher with a 128-bit key and 128-bit IV
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hc128 {
    p: [u32; TABLE],
    q: [u32; TABLE],
    cnt: usize,
    buf: [u8; 4],
    idx: usize,
    key: [u8; HC128_KEY_SIZE],
    iv: [u8; HC128_KEY_SIZE],
    initialized: bool,
}

impl Hc128 {
    pub fn new() -> Self {
        Self {
            p: [0u32; TABLE],
            q: [0u32; TABLE],
            cnt: 0,
            buf: [0u8; 4],
            idx: 4,
            key: [0u8; HC128_KEY_SIZE],
            iv: [0u8; HC128_KEY_SIZE],
            initialized: false,
        }
    }

    #[inline(always)]
    fn g1(x: u32, y: u32, z: u32) -> u32 {
        (x.rotate_right(10) ^ z.rotate_right(23)).wrapping_add(y.rotate_right(8))
    }

    #[inline(always)]
    fn g2(x: u32, y: u32, z: u32) -> u32 {
        (x.rotate_left(10) ^ z.rotate_left(23)).wrapping_add(y.rotate_left(8))
    }

    #[inline(always)]
    fn h1(&self, x: u32) -> u32 {
        self.q[(x & 0xff) as usize].wrapping_add(self.q[256 + ((x >> 16) & 0xff) as usize])
    }

    #[inline(always)]
    fn h2(&self, x: u32) -> u32 {
        self.p[(x & 0xff) as usize].wrapping_add(self.p[256 + ((x >> 16) & 0xff) as usize])
    }

    /// Update P[j] and return its filter value
    #[inline(always)]
    fn update_p(&mut self, j: usize) -> u32 {
        let t = Self::g1(self.p[(j + TABLE - 3) & MASK], self.p[(j + TABLE - 10) & MASK], self.p[(j + 1) & MASK]);
        self.p[j] = self.p[j].wrapping_add(t);
        self.h1(self.p[(j + TABLE - 12) & MASK])
    }

    #[inline(always)]
    fn update_q(&mut self, j: usize) -> u32 {
        let t = Self::g2(self.q[(j + TABLE - 3) & MASK], self.q[(j + TABLE - 10) & MASK], self.q[(j + 1) & MASK]);
        self.q[j] = self.q[j].wrapping_add(t);
        self.h2(self.q[(j + TABLE - 12) & MASK])
    }

    fn step(&mut self) -> u32 {
        let j = self.cnt & MASK;
        let word = if self.cnt < TABLE {
            self.update_p(j) ^ self.p[j]
        } else {
            self.update_q(j) ^ self.q[j]
        };
        self.cnt = (self.cnt + 1) & (2 * TABLE - 1);
        word
    }

    fn setup(&mut self) {
        let mut w = [0u32; 1280];
        LittleEndian::read_u32_into(&self.key, &mut w[0..4]);
        LittleEndian::read_u32_into(&self.key, &mut w[4..8]);
        LittleEndian::read_u32_into(&self.iv, &mut w[8..12]);
        LittleEndian::read_u32_into(&self.iv, &mut w[12..16]);
        for i in 16..1280 {
            w[i] = f2(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(f1(w[i - 15]))
                .wrapping_add(w[i - 16])
                .wrapping_add(i as u32);
        }
        self.p.copy_from_slice(&w[256..768]);
        self.q.copy_from_slice(&w[768..1280]);
        w.zeroize();

        // 1024 steps with the output fed back into the tables
        for j in 0..TABLE {
            let h = self.update_p(j);
            self.p[j] ^= h;
        }
        for j in 0..TABLE {
            let h = self.update_q(j);
            self.q[j] ^= h;
        }

        self.cnt = 0;
        self.idx = 4;
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        if self.idx == 4 {
            let word = self.step();
            LittleEndian::write_u32(&mut self.buf, word);
            self.idx = 0;
        }
        let b = self.buf[self.idx];
        self.idx += 1;
        b
    }
}

impl Default for Hc128 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCipher for Hc128 {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let (key, iv) = expect_key_iv(ALGORITHM, params)?;
        trace!("{} init: {}-byte key, {}-byte IV", ALGORITHM, key.len(), iv.len());
        validate::key_size(ALGORITHM, key.len(), &[HC128_KEY_SIZE])?;
        validate::iv_length(ALGORITHM, iv.len(), HC128_KEY_SIZE)?;

        self.key.copy_from_slice(key.key());
        self.iv.copy_from_slice(iv.as_slice());
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
