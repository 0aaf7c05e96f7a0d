//! Serpent block cipher
//!
//! 32-round substitution-permutation network over four 32-bit words, using
//! the byte order of the NESSIE test vectors (little-endian words).
//!
//! The eight 4-bit S-boxes are applied in bitsliced form. Their boolean
//! representation is derived at compile time from the published tables, so
//! no table is ever indexed with secret data.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::{GOLDEN_RATIO, SERPENT_BLOCK_SIZE, SERPENT_MAX_KEY_SIZE, SERPENT_ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "Serpent";

const SBOXES: [[u8; 16]; 8] = [
    [3, 8, 15, 1, 10, 6, 5, 11, 14, 13, 4, 2, 7, 0, 9, 12],
    [15, 12, 2, 7, 9, 0, 5, 10, 1, 11, 14, 8, 6, 13, 3, 4],
    [8, 6, 7, 9, 3, 12, 10, 15, 13, 1, 14, 4, 0, 11, 5, 2],
    [0, 15, 11, 8, 12, 9, 6, 3, 13, 1, 2, 4, 10, 7, 5, 14],
    [1, 15, 8, 3, 12, 0, 11, 6, 2, 5, 4, 10, 9, 14, 7, 13],
    [15, 5, 2, 11, 4, 10, 9, 12, 0, 3, 14, 8, 13, 6, 7, 1],
    [7, 2, 12, 5, 8, 4, 6, 11, 14, 9, 1, 15, 13, 3, 10, 0],
    [1, 13, 15, 0, 14, 8, 2, 11, 7, 4, 12, 10, 9, 3, 5, 6],
];

const fn invert(sbox: &[u8; 16]) -> [u8; 16] {
    let mut inv = [0u8; 16];
    let mut x = 0;
    while x < 16 {
        inv[sbox[x] as usize] = x as u8;
        x += 1;
    }
    inv
}

/// Algebraic normal form of each output bit: bit `m` of `anf[i]` is set when
/// the monomial over input bits `m` appears in output bit `i`
const fn anf(sbox: &[u8; 16]) -> [u16; 4] {
    let mut out = [0u16; 4];
    let mut i = 0;
    while i < 4 {
        let mut f = [0u8; 16];
        let mut x = 0;
        while x < 16 {
            f[x] = (sbox[x] >> i) & 1;
            x += 1;
        }
        // Möbius transform
        let mut step = 1;
        while step < 16 {
            let mut x = 0;
            while x < 16 {
                if x & step != 0 {
                    f[x] ^= f[x ^ step];
                }
                x += 1;
            }
            step <<= 1;
        }
        let mut x = 0;
        while x < 16 {
            out[i] |= (f[x] as u16) << x;
            x += 1;
        }
        i += 1;
    }
    out
}

const fn anf_all(inverse: bool) -> [[u16; 4]; 8] {
    let mut out = [[0u16; 4]; 8];
    let mut s = 0;
    while s < 8 {
        out[s] = if inverse {
            anf(&invert(&SBOXES[s]))
        } else {
            anf(&SBOXES[s])
        };
        s += 1;
    }
    out
}

const FORWARD: [[u16; 4]; 8] = anf_all(false);
const INVERSE: [[u16; 4]; 8] = anf_all(true);

/// Apply a 4-bit S-box to 32 nibbles in parallel
#[inline]
fn bitslice(anf: &[u16; 4], x: [u32; 4]) -> [u32; 4] {
    let mut mono = [0u32; 16];
    mono[0] = u32::MAX;
    for m in 1..16usize {
        let low = m.trailing_zeros() as usize;
        mono[m] = mono[m & (m - 1)] & x[low];
    }

    let mut y = [0u32; 4];
    for (i, out) in y.iter_mut().enumerate() {
        for (m, word) in mono.iter().enumerate() {
            let take = 0u32.wrapping_sub(((anf[i] >> m) & 1) as u32);
            *out ^= word & take;
        }
    }
    mono.zeroize();
    y
}

#[inline]
fn linear_transform(x: &mut [u32; 4]) {
    x[0] = x[0].rotate_left(13);
    x[2] = x[2].rotate_left(3);
    x[1] ^= x[0] ^ x[2];
    x[3] ^= x[2] ^ (x[0] << 3);
    x[1] = x[1].rotate_left(1);
    x[3] = x[3].rotate_left(7);
    x[0] ^= x[1] ^ x[3];
    x[2] ^= x[3] ^ (x[1] << 7);
    x[0] = x[0].rotate_left(5);
    x[2] = x[2].rotate_left(22);
}

#[inline]
fn inverse_linear_transform(x: &mut [u32; 4]) {
    x[2] = x[2].rotate_right(22);
    x[0] = x[0].rotate_right(5);
    x[2] ^= x[3] ^ (x[1] << 7);
    x[0] ^= x[1] ^ x[3];
    x[3] = x[3].rotate_right(7);
    x[1] = x[1].rotate_right(1);
    x[3] ^= x[2] ^ (x[0] << 3);
    x[1] ^= x[0] ^ x[2];
    x[2] = x[2].rotate_right(3);
    x[0] = x[0].rotate_right(13);
}

#[inline]
fn xor_key(x: &mut [u32; 4], k: &[u32]) {
    for (w, k) in x.iter_mut().zip(k) {
        *w ^= k;
    }
}

/// Serpent block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Serpent {
    subkeys: [u32; 4 * (SERPENT_ROUNDS + 1)],
    encrypting: bool,
    initialized: bool,
}

impl Serpent {
    pub fn new() -> Self {
        Self {
            subkeys: [0u32; 4 * (SERPENT_ROUNDS + 1)],
            encrypting: false,
            initialized: false,
        }
    }

    /// Expands a key of up to 256 bits; shorter keys are padded with a
    /// single set bit followed by zeros
    fn expand_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_range(ALGORITHM, key.len(), 1, SERPENT_MAX_KEY_SIZE)?;

        let mut padded = [0u8; 32];
        padded[..key.len()].copy_from_slice(key);
        if key.len() < 32 {
            padded[key.len()] = 0x01;
        }

        let mut w = [0u32; 140];
        LittleEndian::read_u32_into(&padded, &mut w[..8]);
        for i in 0..132 {
            w[i + 8] = (w[i] ^ w[i + 3] ^ w[i + 5] ^ w[i + 7] ^ GOLDEN_RATIO ^ i as u32).rotate_left(11);
        }

        for i in 0..=SERPENT_ROUNDS {
            let box_index = (3 + 8 * 5 - i) % 8;
            let words = [w[8 + 4 * i], w[9 + 4 * i], w[10 + 4 * i], w[11 + 4 * i]];
            let k = bitslice(&FORWARD[box_index], words);
            self.subkeys[4 * i..4 * i + 4].copy_from_slice(&k);
        }

        padded.zeroize();
        w.zeroize();
        Ok(())
    }

    fn encrypt_block(&self, x: &mut [u32; 4]) {
        for round in 0..SERPENT_ROUNDS {
            xor_key(x, &self.subkeys[4 * round..4 * round + 4]);
            *x = bitslice(&FORWARD[round % 8], *x);
            if round < SERPENT_ROUNDS - 1 {
                linear_transform(x);
            }
        }
        xor_key(x, &self.subkeys[4 * SERPENT_ROUNDS..]);
    }

    fn decrypt_block(&self, x: &mut [u32; 4]) {
        xor_key(x, &self.subkeys[4 * SERPENT_ROUNDS..]);
        for round in (0..SERPENT_ROUNDS).rev() {
            if round < SERPENT_ROUNDS - 1 {
                inverse_linear_transform(x);
            }
            *x = bitslice(&INVERSE[round % 8], *x);
            xor_key(x, &self.subkeys[4 * round..4 * round + 4]);
        }
    }
}

impl Default for Serpent {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Serpent {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());

        self.initialized = false;
        self.expand_key(key.key())?;
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        SERPENT_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, SERPENT_BLOCK_SIZE)?;

        let mut x = [0u32; 4];
        LittleEndian::read_u32_into(&input[in_off..in_off + SERPENT_BLOCK_SIZE], &mut x);
        if self.encrypting {
            self.encrypt_block(&mut x);
        } else {
            self.decrypt_block(&mut x);
        }
        LittleEndian::write_u32_into(&x, &mut output[out_off..out_off + SERPENT_BLOCK_SIZE]);

        Ok(SERPENT_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
