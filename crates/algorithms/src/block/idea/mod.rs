//! IDEA block cipher
//!
//! Eight rounds mixing three group operations on 16-bit words: XOR,
//! addition mod 2^16 and multiplication mod 2^16 + 1 (with 0 standing for
//! 2^16), followed by an output transformation. The 52 decryption subkeys
//! are the inverses of the encryption subkeys in reverse order.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{IDEA_BLOCK_SIZE, IDEA_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "IDEA";

const ROUNDS: usize = 8;
const SUBKEYS: usize = 6 * ROUNDS + 4;
const MODULUS: u64 = 0x1_0001;

/// Multiplication mod 2^16 + 1
#[inline(always)]
fn mul(a: u16, b: u16) -> u16 {
    let a = if a == 0 { 0x1_0000 } else { a as u64 };
    let b = if b == 0 { 0x1_0000 } else { b as u64 };
    ((a * b) % MODULUS) as u16
}

/// Multiplicative inverse mod 2^16 + 1, by Fermat
fn mul_inv(x: u16) -> u16 {
    if x < 2 {
        return x;
    }
    let mut result = 1u64;
    let mut base = x as u64;
    let mut exp = MODULUS - 2;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * base % MODULUS;
        }
        base = base * base % MODULUS;
        exp >>= 1;
    }
    result as u16
}

fn encryption_keys(key: &[u8]) -> [u16; SUBKEYS] {
    let mut z = [0u16; SUBKEYS];
    let mut k = BigEndian::read_u128(key);
    for chunk in z.chunks_mut(8) {
        for (j, w) in chunk.iter_mut().enumerate() {
            *w = (k >> (112 - 16 * j)) as u16;
        }
        k = k.rotate_left(25);
    }
    k.zeroize();
    z
}

fn decryption_keys(z: &[u16; SUBKEYS]) -> [u16; SUBKEYS] {
    let mut d = [0u16; SUBKEYS];
    for r in 0..=ROUNDS {
        let i = 6 * r;
        let j = 6 * (ROUNDS - r);
        d[i] = mul_inv(z[j]);
        d[i + 3] = mul_inv(z[j + 3]);
        if r == 0 || r == ROUNDS {
            d[i + 1] = z[j + 1].wrapping_neg();
            d[i + 2] = z[j + 2].wrapping_neg();
        } else {
            d[i + 1] = z[j + 2].wrapping_neg();
            d[i + 2] = z[j + 1].wrapping_neg();
        }
        if r < ROUNDS {
            d[i + 4] = z[j - 2];
            d[i + 5] = z[j - 1];
        }
    }
    d
}

/// IDEA block cipher with a 128-bit key
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Idea {
    subkeys: [u16; SUBKEYS],
    encrypting: bool,
    initialized: bool,
}

impl Idea {
    pub fn new() -> Self {
        Self {
            subkeys: [0u16; SUBKEYS],
            encrypting: false,
            initialized: false,
        }
    }

    fn crypt(&self, x: &mut [u16; 4]) {
        let z = &self.subkeys;
        let [mut x1, mut x2, mut x3, mut x4] = *x;
        for k in z[..6 * ROUNDS].chunks_exact(6) {
            x1 = mul(x1, k[0]);
            x2 = x2.wrapping_add(k[1]);
            x3 = x3.wrapping_add(k[2]);
            x4 = mul(x4, k[3]);

            let mut t0 = x1 ^ x3;
            let mut t1 = x2 ^ x4;
            t0 = mul(t0, k[4]);
            t1 = t1.wrapping_add(t0);
            t1 = mul(t1, k[5]);
            t0 = t0.wrapping_add(t1);

            x1 ^= t1;
            x4 ^= t0;
            (x2, x3) = (x3 ^ t1, x2 ^ t0);
        }
        let k = &z[6 * ROUNDS..];
        *x = [
            mul(x1, k[0]),
            x3.wrapping_add(k[1]),
            x2.wrapping_add(k[2]),
            mul(x4, k[3]),
        ];
    }
}

impl Default for Idea {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Idea {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());
        validate::key_size(ALGORITHM, key.len(), &[IDEA_KEY_SIZE])?;

        self.initialized = false;
        let mut z = encryption_keys(key.key());
        self.subkeys = if direction.is_encrypt() {
            z
        } else {
            decryption_keys(&z)
        };
        z.zeroize();
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        IDEA_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, IDEA_BLOCK_SIZE)?;

        let mut x = [0u16; 4];
        BigEndian::read_u16_into(&input[in_off..in_off + IDEA_BLOCK_SIZE], &mut x);
        self.crypt(&mut x);
        BigEndian::write_u16_into(&x, &mut output[out_off..out_off + IDEA_BLOCK_SIZE]);

        Ok(IDEA_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
