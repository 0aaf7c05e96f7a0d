//! SHA-1 hash function
//!
//! FIPS 180-4 SHA-1. SHA-1 is broken for collision resistance and is kept
//! here for the RFC 3217 key checksum and similar legacy formats.

use byteorder::{BigEndian, ByteOrder};
use params::utils::hash::{SHA1_BLOCK_SIZE, SHA1_OUTPUT_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Initial hash values
const H0: [u32; 5] = [0x6745_2301, 0xEFCD_AB89, 0x98BA_DCFE, 0x1032_5476, 0xC3D2_E1F0];

const K: [u32; 4] = [0x5A82_7999, 0x6ED9_EBA1, 0x8F1B_BCDC, 0xCA62_C1D6];

/// Incremental SHA-1 hasher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Sha1 {
    h: [u32; 5],
    buffer: [u8; SHA1_BLOCK_SIZE],
    buffer_len: usize,
    /// Total message length in bytes
    total_len: u64,
}

impl Sha1 {
    pub fn new() -> Self {
        Self {
            h: H0,
            buffer: [0u8; SHA1_BLOCK_SIZE],
            buffer_len: 0,
            total_len: 0,
        }
    }

    /// One-shot digest of `data`
    pub fn digest(data: &[u8]) -> [u8; SHA1_OUTPUT_SIZE] {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    fn compress(h: &mut [u32; 5], block: &[u8]) {
        let mut w = [0u32; 80];
        BigEndian::read_u32_into(&block[..SHA1_BLOCK_SIZE], &mut w[..16]);
        for i in 16..80 {
            w[i] = (w[i - 3] ^ w[i - 8] ^ w[i - 14] ^ w[i - 16]).rotate_left(1);
        }

        let [mut a, mut b, mut c, mut d, mut e] = *h;
        for (i, wi) in w.iter().enumerate() {
            let f = match i / 20 {
                0 => (b & c) | (!b & d),
                2 => (b & c) | (b & d) | (c & d),
                _ => b ^ c ^ d,
            };
            let temp = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(K[i / 20])
                .wrapping_add(*wi);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = temp;
        }

        for (hi, v) in h.iter_mut().zip([a, b, c, d, e]) {
            *hi = hi.wrapping_add(v);
        }
        w.zeroize();
    }

    /// Absorb more input
    pub fn update(&mut self, mut data: &[u8]) -> &mut Self {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let take = (SHA1_BLOCK_SIZE - self.buffer_len).min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len < SHA1_BLOCK_SIZE {
                return self;
            }
            Self::compress(&mut self.h, &self.buffer);
            self.buffer_len = 0;
        }

        let mut blocks = data.chunks_exact(SHA1_BLOCK_SIZE);
        for block in &mut blocks {
            Self::compress(&mut self.h, block);
        }
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_len = rest.len();
        self
    }

    /// Pad, process the final block(s) and return the digest
    ///
    /// The hasher is left in its initial state.
    pub fn finalize(&mut self) -> [u8; SHA1_OUTPUT_SIZE] {
        let bit_len = self.total_len.wrapping_mul(8);
        let mut block = [0u8; SHA1_BLOCK_SIZE];
        block[..self.buffer_len].copy_from_slice(&self.buffer[..self.buffer_len]);
        block[self.buffer_len] = 0x80;

        if self.buffer_len >= SHA1_BLOCK_SIZE - 8 {
            Self::compress(&mut self.h, &block);
            block = [0u8; SHA1_BLOCK_SIZE];
        }
        BigEndian::write_u64(&mut block[SHA1_BLOCK_SIZE - 8..], bit_len);
        Self::compress(&mut self.h, &block);

        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        BigEndian::write_u32_into(&self.h, &mut out);

        block.zeroize();
        *self = Self::new();
        out
    }
}

impl Default for Sha1 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
