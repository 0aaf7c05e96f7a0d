//! Twofish block cipher
//!
//! 16-round Feistel network with key-dependent S-boxes. The S-box words are
//! derived from the key through the Reed-Solomon code, and each round
//! function combines the `q0`/`q1` permutations with the MDS matrix.
//!
//! Keys of 64, 128, 192 and 256 bits are accepted. At `init` the four
//! key-dependent S-boxes are fused with the MDS columns into 256-entry
//! tables, which makes the round function four lookups.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::{TWOFISH_BLOCK_SIZE, TWOFISH_KEY_SIZES};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "Twofish";

const ROUNDS: usize = 16;
const SUBKEYS: usize = 8 + 2 * ROUNDS;

/// Primitive polynomial for the MDS matrix field
const MDS_POLY: u16 = 0x169;
/// Primitive polynomial for the Reed-Solomon field
const RS_POLY: u16 = 0x14D;

const RHO: u32 = 0x0101_0101;

/// Nibble permutations of q0
const T_Q0: [[u8; 16]; 4] = [
    [0x8, 0x1, 0x7, 0xD, 0x6, 0xF, 0x3, 0x2, 0x0, 0xB, 0x5, 0x9, 0xE, 0xC, 0xA, 0x4],
    [0xE, 0xC, 0xB, 0x8, 0x1, 0x2, 0x3, 0x5, 0xF, 0x4, 0xA, 0x6, 0x7, 0x0, 0x9, 0xD],
    [0xB, 0xA, 0x5, 0xE, 0x6, 0xD, 0x9, 0x0, 0xC, 0x8, 0xF, 0x3, 0x2, 0x4, 0x7, 0x1],
    [0xD, 0x7, 0xF, 0x4, 0x1, 0x2, 0x6, 0xE, 0x9, 0xB, 0x3, 0x0, 0x8, 0x5, 0xC, 0xA],
];

/// Nibble permutations of q1
const T_Q1: [[u8; 16]; 4] = [
    [0x2, 0x8, 0xB, 0xD, 0xF, 0x7, 0x6, 0xE, 0x3, 0x1, 0x9, 0x4, 0x0, 0xA, 0xC, 0x5],
    [0x1, 0xE, 0x2, 0xB, 0x4, 0xC, 0x3, 0x7, 0x6, 0xD, 0xA, 0x5, 0xF, 0x9, 0x0, 0x8],
    [0x4, 0xC, 0x7, 0x5, 0x1, 0x6, 0x9, 0xA, 0x0, 0xE, 0xD, 0x8, 0x2, 0xB, 0x3, 0xF],
    [0xB, 0x9, 0x5, 0x1, 0xC, 0x3, 0xD, 0xE, 0x6, 0x4, 0x7, 0xF, 0x2, 0x0, 0x8, 0xA],
];

const MDS: [[u8; 4]; 4] = [
    [0x01, 0xEF, 0x5B, 0x5B],
    [0x5B, 0xEF, 0xEF, 0x01],
    [0xEF, 0x5B, 0x01, 0xEF],
    [0xEF, 0x01, 0xEF, 0x5B],
];

const RS: [[u8; 8]; 4] = [
    [0x01, 0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E],
    [0xA4, 0x56, 0x82, 0xF3, 0x1E, 0xC6, 0x68, 0xE5],
    [0x02, 0xA1, 0xFC, 0xC1, 0x47, 0xAE, 0x3D, 0x19],
    [0xA4, 0x55, 0x87, 0x5A, 0x58, 0xDB, 0x9E, 0x03],
];

const fn ror4(x: u8, n: u32) -> u8 {
    ((x >> n) | (x << (4 - n))) & 0x0F
}

const fn q_byte(t: &[[u8; 16]; 4], x: u8) -> u8 {
    let a0 = x >> 4;
    let b0 = x & 0x0F;
    let a1 = a0 ^ b0;
    let b1 = a0 ^ ror4(b0, 1) ^ ((a0 << 3) & 0x0F);
    let a2 = t[0][a1 as usize];
    let b2 = t[1][b1 as usize];
    let a3 = a2 ^ b2;
    let b3 = a2 ^ ror4(b2, 1) ^ ((a2 << 3) & 0x0F);
    let a4 = t[2][a3 as usize];
    let b4 = t[3][b3 as usize];
    (b4 << 4) | a4
}

const fn q_table(t: &[[u8; 16]; 4]) -> [u8; 256] {
    let mut out = [0u8; 256];
    let mut x = 0;
    while x < 256 {
        out[x] = q_byte(t, x as u8);
        x += 1;
    }
    out
}

const Q0: [u8; 256] = q_table(&T_Q0);
const Q1: [u8; 256] = q_table(&T_Q1);

/// Multiply in GF(2^8) modulo `poly`
const fn gf_mul(a: u8, b: u8, poly: u16) -> u8 {
    let mut a = a as u16;
    let mut b = b;
    let mut r = 0u16;
    while b != 0 {
        if b & 1 != 0 {
            r ^= a;
        }
        a <<= 1;
        if a & 0x100 != 0 {
            a ^= poly;
        }
        b >>= 1;
    }
    r as u8
}

/// Column `j` of the MDS matrix times `y`, packed little-endian
fn mds_column(j: usize, y: u8) -> u32 {
    let mut z = [0u8; 4];
    for (i, out) in z.iter_mut().enumerate() {
        *out = gf_mul(MDS[i][j], y, MDS_POLY);
    }
    u32::from_le_bytes(z)
}

/// The byte-wise part of `h`: q-box chain keyed by `l`, before the MDS
fn h_bytes(x: [u8; 4], l: &[u32]) -> [u8; 4] {
    let mut y = x;
    let lb = |w: usize| l[w].to_le_bytes();

    if l.len() == 4 {
        let k = lb(3);
        y = [Q1[y[0] as usize] ^ k[0], Q0[y[1] as usize] ^ k[1], Q0[y[2] as usize] ^ k[2], Q1[y[3] as usize] ^ k[3]];
    }
    if l.len() >= 3 {
        let k = lb(2);
        y = [Q1[y[0] as usize] ^ k[0], Q1[y[1] as usize] ^ k[1], Q0[y[2] as usize] ^ k[2], Q0[y[3] as usize] ^ k[3]];
    }
    if l.len() >= 2 {
        let k = lb(1);
        y = [Q0[y[0] as usize] ^ k[0], Q1[y[1] as usize] ^ k[1], Q0[y[2] as usize] ^ k[2], Q1[y[3] as usize] ^ k[3]];
    }
    let k = lb(0);
    [
        Q1[(Q0[y[0] as usize] ^ k[0]) as usize],
        Q0[(Q0[y[1] as usize] ^ k[1]) as usize],
        Q1[(Q1[y[2] as usize] ^ k[2]) as usize],
        Q0[(Q1[y[3] as usize] ^ k[3]) as usize],
    ]
}

/// The full `h` function
fn h(x: u32, l: &[u32]) -> u32 {
    let y = h_bytes(x.to_le_bytes(), l);
    (0..4).fold(0, |acc, j| acc ^ mds_column(j, y[j]))
}

/// Twofish block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Twofish {
    subkeys: [u32; SUBKEYS],
    /// Key-dependent S-boxes fused with the MDS columns
    sbox: [u32; 4 * 256],
    encrypting: bool,
    initialized: bool,
}

impl Twofish {
    pub fn new() -> Self {
        Self {
            subkeys: [0u32; SUBKEYS],
            sbox: [0u32; 4 * 256],
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_size(ALGORITHM, key.len(), &TWOFISH_KEY_SIZES)?;

        let k = key.len() / 8;
        let mut even = [0u32; 4];
        let mut odd = [0u32; 4];
        let mut s = [0u32; 4];

        for i in 0..k {
            even[i] = LittleEndian::read_u32(&key[8 * i..]);
            odd[i] = LittleEndian::read_u32(&key[8 * i + 4..]);

            let mut v = [0u8; 4];
            for (r, out) in v.iter_mut().enumerate() {
                for c in 0..8 {
                    *out ^= gf_mul(RS[r][c], key[8 * i + c], RS_POLY);
                }
            }
            // S words are used in reverse order
            s[k - 1 - i] = u32::from_le_bytes(v);
        }

        for i in 0..SUBKEYS / 2 {
            let a = h((2 * i as u32).wrapping_mul(RHO), &even[..k]);
            let b = h((2 * i as u32 + 1).wrapping_mul(RHO), &odd[..k]).rotate_left(8);
            self.subkeys[2 * i] = a.wrapping_add(b);
            self.subkeys[2 * i + 1] = a.wrapping_add(b.wrapping_mul(2)).rotate_left(9);
        }

        for x in 0..256usize {
            let b = x as u8;
            let y = h_bytes([b, b, b, b], &s[..k]);
            for j in 0..4 {
                self.sbox[256 * j + x] = mds_column(j, y[j]);
            }
        }

        even.zeroize();
        odd.zeroize();
        s.zeroize();
        Ok(())
    }

    #[inline(always)]
    fn g(&self, x: u32) -> u32 {
        let b = x.to_le_bytes();
        self.sbox[b[0] as usize]
            ^ self.sbox[256 + b[1] as usize]
            ^ self.sbox[512 + b[2] as usize]
            ^ self.sbox[768 + b[3] as usize]
    }

    #[inline(always)]
    fn round_function(&self, r0: u32, r1: u32, round: usize) -> (u32, u32) {
        let t0 = self.g(r0);
        let t1 = self.g(r1.rotate_left(8));
        let f0 = t0.wrapping_add(t1).wrapping_add(self.subkeys[2 * round + 8]);
        let f1 = t0
            .wrapping_add(t1.wrapping_mul(2))
            .wrapping_add(self.subkeys[2 * round + 9]);
        (f0, f1)
    }

    fn encrypt_block(&self, x: &mut [u32; 4]) {
        let mut r = [
            x[0] ^ self.subkeys[0],
            x[1] ^ self.subkeys[1],
            x[2] ^ self.subkeys[2],
            x[3] ^ self.subkeys[3],
        ];
        for round in 0..ROUNDS {
            let (f0, f1) = self.round_function(r[0], r[1], round);
            let n2 = (r[2] ^ f0).rotate_right(1);
            let n3 = r[3].rotate_left(1) ^ f1;
            r = [n2, n3, r[0], r[1]];
        }
        for i in 0..4 {
            x[i] = r[(i + 2) % 4] ^ self.subkeys[i + 4];
        }
    }

    fn decrypt_block(&self, x: &mut [u32; 4]) {
        let mut r = [0u32; 4];
        for i in 0..4 {
            r[(i + 2) % 4] = x[i] ^ self.subkeys[i + 4];
        }
        for round in (0..ROUNDS).rev() {
            let (f0, f1) = self.round_function(r[2], r[3], round);
            let p2 = r[0].rotate_left(1) ^ f0;
            let p3 = (r[1] ^ f1).rotate_right(1);
            r = [r[2], r[3], p2, p3];
        }
        for i in 0..4 {
            x[i] = r[i] ^ self.subkeys[i];
        }
    }
}

impl Default for Twofish {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Twofish {
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
        TWOFISH_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, TWOFISH_BLOCK_SIZE)?;

        let mut x = [0u32; 4];
        LittleEndian::read_u32_into(&input[in_off..in_off + TWOFISH_BLOCK_SIZE], &mut x);
        if self.encrypting {
            self.encrypt_block(&mut x);
        } else {
            self.decrypt_block(&mut x);
        }
        LittleEndian::write_u32_into(&x, &mut output[out_off..out_off + TWOFISH_BLOCK_SIZE]);

        Ok(TWOFISH_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
