//! HC-256 stream cipher
//!
//! The 256-bit sibling of HC-128: two 1024-word tables, a 32-bit output
//! filter over all four bytes of the selector word and 4096 warm-up steps.
//! A 16-byte key is used twice; an IV shorter than 32 bytes is extended by
//! repeating it from the start.

use alloc::borrow::Cow;

use api::{CipherParameters, StreamCipher};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::{HC128_KEY_SIZE, HC256_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key_iv;

const ALGORITHM: &str = "HC-256";

const TABLE: usize = 1024;
const MASK: usize = TABLE - 1;

#[inline(always)]
fn f1(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline(always)]
fn f2(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}

/// HC-256 stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Hc256 {
    p: [u32; TABLE],
    q: [u32; TABLE],
    cnt: usize,
    buf: [u8; 4],
    idx: usize,
    key: [u8; HC256_KEY_SIZE],
    iv: [u8; HC256_KEY_SIZE],
    initialized: bool,
}

/// Filter through the four byte lanes of `table`
#[inline(always)]
fn h(table: &[u32; TABLE], x: u32) -> u32 {
    table[(x & 0xff) as usize]
        .wrapping_add(table[256 + ((x >> 8) & 0xff) as usize])
        .wrapping_add(table[512 + ((x >> 16) & 0xff) as usize])
        .wrapping_add(table[768 + (x >> 24) as usize])
}

/// One step over `own`, using `other` as the S-box; returns the keystream word
#[inline(always)]
fn update(own: &mut [u32; TABLE], other: &[u32; TABLE], j: usize) -> u32 {
    let x = own[(j + TABLE - 3) & MASK];
    let y = own[(j + 1) & MASK];
    own[j] = own[j]
        .wrapping_add(own[(j + TABLE - 10) & MASK])
        .wrapping_add(x.rotate_right(10) ^ y.rotate_right(23))
        .wrapping_add(other[((x ^ y) & MASK as u32) as usize]);
    h(other, own[(j + TABLE - 12) & MASK]) ^ own[j]
}

impl Hc256 {
    pub fn new() -> Self {
        Self {
            p: [0u32; TABLE],
            q: [0u32; TABLE],
            cnt: 0,
            buf: [0u8; 4],
            idx: 4,
            key: [0u8; HC256_KEY_SIZE],
            iv: [0u8; HC256_KEY_SIZE],
            initialized: false,
        }
    }

    fn step(&mut self) -> u32 {
        let j = self.cnt & MASK;
        let word = if self.cnt < TABLE {
            update(&mut self.p, &self.q, j)
        } else {
            update(&mut self.q, &self.p, j)
        };
        self.cnt = (self.cnt + 1) & (2 * TABLE - 1);
        word
    }

    fn setup(&mut self) {
        let mut w = [0u32; 2560];
        LittleEndian::read_u32_into(&self.key, &mut w[0..8]);
        LittleEndian::read_u32_into(&self.iv, &mut w[8..16]);
        for i in 16..2560 {
            w[i] = f2(w[i - 2])
                .wrapping_add(w[i - 7])
                .wrapping_add(f1(w[i - 15]))
                .wrapping_add(w[i - 16])
                .wrapping_add(i as u32);
        }
        self.p.copy_from_slice(&w[512..1536]);
        self.q.copy_from_slice(&w[1536..2560]);
        w.zeroize();

        self.cnt = 0;
        for _ in 0..4096 {
            self.step();
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

impl Default for Hc256 {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCipher for Hc256 {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let (key, iv) = expect_key_iv(ALGORITHM, params)?;
        trace!("{} init: {}-byte key, {}-byte IV", ALGORITHM, key.len(), iv.len());
        validate::key_size(ALGORITHM, key.len(), &[HC128_KEY_SIZE, HC256_KEY_SIZE])?;
        validate::iv_range(ALGORITHM, iv.len(), HC128_KEY_SIZE, HC256_KEY_SIZE)?;

        let key = key.key();
        for (i, k) in self.key.iter_mut().enumerate() {
            *k = key[i % key.len()];
        }
        let iv = iv.as_slice();
        for (i, v) in self.iv.iter_mut().enumerate() {
            *v = iv[i % iv.len()];
        }
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

#[cfg(test)]
mod tests {
    use super::*;

    fn keystream(key: &[u8], iv: &[u8], len: usize) -> String {
        let mut hc = Hc256::new();
        hc.init(CipherParameters::with_iv(CipherParameters::key(key), iv)).unwrap();
        let mut out = vec![0u8; len];
        hc.process_bytes(&vec![0u8; len], 0, len, &mut out, 0).unwrap();
        hex::encode(out)
    }

    #[test]
    fn test_reference_vectors() {
        assert_eq!(
            keystream(&[0u8; 32], &[0u8; 32], 32),
            "5b078985d8f6f30d42c5c02fa6b6795153f06534801f89f24e74248b720b4818"
        );

        let mut key = [0u8; 32];
        key[0] = 0x55;
        assert_eq!(keystream(&key, &[0u8; 32], 16), "1c404afe4fe25fed958f9ad1ae36c06f");
    }

    #[test]
    fn test_short_key_and_iv_are_repeated() {
        let key: Vec<u8> = (0..16).collect();
        let iv: Vec<u8> = (100..120).collect();
        assert_eq!(keystream(&key, &iv, 16), "8fc3e184712876f60ff2a1a8e4304edb");

        let mut long_key = key.clone();
        long_key.extend_from_slice(&key);
        let mut long_iv = iv.clone();
        long_iv.extend_from_slice(&iv[..12]);
        assert_eq!(keystream(&long_key, &long_iv, 16), keystream(&key, &iv, 16));
    }

    #[test]
    fn test_parameter_checks() {
        let mut hc = Hc256::new();
        assert!(hc.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 24]), &[0u8; 32])).is_err());
        assert!(hc.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 32]), &[0u8; 15])).is_err());
        assert!(hc.init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 32]), &[0u8; 33])).is_err());
    }
}
