//! DES and two/three-key triple DES
//!
//! Single DES is the 16-round Feistel network of FIPS 46-3. The S-boxes are
//! folded together with the P permutation at compile time, so a round is an
//! expansion, eight table lookups and an XOR. [`DesEde`] composes three
//! independently keyed [`Des`] instances.

mod desede;
mod tables;

pub use desede::DesEde;

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{DES_BLOCK_SIZE, DES_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;
use tables::{E, FP, IP, P, PC1, PC2, SBOXES, SHIFTS};

const ALGORITHM: &str = "DES";

const ROUNDS: usize = 16;

/// Gather bits of the `width`-bit value `x` in the order given by `table`
const fn permute(x: u64, table: &[u8], width: u32) -> u64 {
    let mut out = 0u64;
    let mut i = 0;
    while i < table.len() {
        out = (out << 1) | ((x >> (width - table[i] as u32)) & 1);
        i += 1;
    }
    out
}

/// S-box `i` merged with the P permutation, indexed by the raw 6-bit input
const fn sp_boxes() -> [[u32; 64]; 8] {
    let mut sp = [[0u32; 64]; 8];
    let mut i = 0;
    while i < 8 {
        let mut b = 0;
        while b < 64 {
            let row = ((b >> 4) & 2) | (b & 1);
            let col = (b >> 1) & 0xf;
            let s = SBOXES[i][row * 16 + col] as u64;
            sp[i][b] = permute(s << ((28 - 4 * i) as u32), &P, 32) as u32;
            b += 1;
        }
        i += 1;
    }
    sp
}

const SP: [[u32; 64]; 8] = sp_boxes();

#[inline(always)]
fn feistel(r: u32, k: u64) -> u32 {
    let x = permute(r as u64, &E, 32) ^ k;
    let mut out = 0u32;
    for (i, sp) in SP.iter().enumerate() {
        out |= sp[((x >> (42 - 6 * i)) & 0x3f) as usize];
    }
    out
}

/// Sixteen 48-bit round keys in encryption order
fn key_schedule(key: &[u8]) -> [u64; ROUNDS] {
    let k = permute(BigEndian::read_u64(key), &PC1, 64);
    let (mut c, mut d) = ((k >> 28) as u32, (k & 0x0fff_ffff) as u32);
    let mut schedule = [0u64; ROUNDS];
    for (sk, &s) in schedule.iter_mut().zip(SHIFTS.iter()) {
        c = ((c << s) | (c >> (28 - s))) & 0x0fff_ffff;
        d = ((d << s) | (d >> (28 - s))) & 0x0fff_ffff;
        *sk = permute(((c as u64) << 28) | d as u64, &PC2, 56);
    }
    c.zeroize();
    d.zeroize();
    schedule
}

/// DES block cipher
///
/// Takes an 8-byte key; parity bits are ignored.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Des {
    schedule: [u64; ROUNDS],
    encrypting: bool,
    initialized: bool,
}

impl Des {
    pub fn new() -> Self {
        Self {
            schedule: [0u64; ROUNDS],
            encrypting: false,
            initialized: false,
        }
    }

    /// Schedule `key` for one direction without going through `init`
    pub(crate) fn keyed(key: &[u8], encrypting: bool) -> Self {
        let mut schedule = key_schedule(key);
        if !encrypting {
            schedule.reverse();
        }
        Self {
            schedule,
            encrypting,
            initialized: true,
        }
    }

    /// One block as a big-endian word
    pub(crate) fn crypt(&self, block: u64) -> u64 {
        let x = permute(block, &IP, 64);
        let (mut l, mut r) = ((x >> 32) as u32, x as u32);
        for &k in self.schedule.iter() {
            (l, r) = (r, l ^ feistel(r, k));
        }
        permute(((r as u64) << 32) | l as u64, &FP, 64)
    }
}

impl Default for Des {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Des {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());
        validate::key_size(ALGORITHM, key.len(), &[DES_KEY_SIZE])?;

        *self = Self::keyed(key.key(), direction.is_encrypt());
        Ok(())
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, DES_BLOCK_SIZE)?;

        let block = BigEndian::read_u64(&input[in_off..]);
        BigEndian::write_u64(&mut output[out_off..], self.crypt(block));

        Ok(DES_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
