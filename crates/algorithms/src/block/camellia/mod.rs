//! Camellia block cipher (RFC 3713)
//!
//! 128-bit blocks, 18 rounds for 128-bit keys and 24 rounds for 192- and
//! 256-bit keys, with an FL/FL⁻¹ layer after every six rounds.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{CAMELLIA_BLOCK_SIZE, CAMELLIA_KEY_SIZES};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "Camellia";

#[rustfmt::skip]
const SBOX1: [u8; 256] = [
    112, 130, 44, 236, 179, 39, 192, 229, 228, 133, 87, 53, 234, 12, 174, 65,
    35, 239, 107, 147, 69, 25, 165, 33, 237, 14, 79, 78, 29, 101, 146, 189,
    134, 184, 175, 143, 124, 235, 31, 206, 62, 48, 220, 95, 94, 197, 11, 26,
    166, 225, 57, 202, 213, 71, 93, 61, 217, 1, 90, 214, 81, 86, 108, 77,
    139, 13, 154, 102, 251, 204, 176, 45, 116, 18, 43, 32, 240, 177, 132, 153,
    223, 76, 203, 194, 52, 126, 118, 5, 109, 183, 169, 49, 209, 23, 4, 215,
    20, 88, 58, 97, 222, 27, 17, 28, 50, 15, 156, 22, 83, 24, 242, 34,
    254, 68, 207, 178, 195, 181, 122, 145, 36, 8, 232, 168, 96, 252, 105, 80,
    170, 208, 160, 125, 161, 137, 98, 151, 84, 91, 30, 149, 224, 255, 100, 210,
    16, 196, 0, 72, 163, 247, 117, 219, 138, 3, 230, 218, 9, 63, 221, 148,
    135, 92, 131, 2, 205, 74, 144, 51, 115, 103, 246, 243, 157, 127, 191, 226,
    82, 155, 216, 38, 200, 55, 198, 59, 129, 150, 111, 75, 19, 190, 99, 46,
    233, 121, 167, 140, 159, 110, 188, 142, 41, 245, 249, 182, 47, 253, 180, 89,
    120, 152, 6, 106, 231, 70, 113, 186, 212, 37, 171, 66, 136, 162, 141, 250,
    114, 7, 185, 85, 248, 238, 172, 10, 54, 73, 42, 104, 60, 56, 241, 164,
    64, 40, 211, 123, 187, 201, 67, 193, 21, 227, 173, 244, 119, 199, 128, 158,
];

const fn derived(rotate: u32, pre_rotate: u32) -> [u8; 256] {
    let mut out = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let x = (i as u8).rotate_left(pre_rotate);
        out[i] = SBOX1[x as usize].rotate_left(rotate);
        i += 1;
    }
    out
}

const SBOX2: [u8; 256] = derived(1, 0);
const SBOX3: [u8; 256] = derived(7, 0);
const SBOX4: [u8; 256] = derived(0, 1);

const SIGMA: [u64; 6] = [
    0xA09E_667F_3BCC_908B,
    0xB67A_E858_4CAA_73B2,
    0xC6EF_372F_E94F_82BE,
    0x54FF_53A5_F1D3_6F1C,
    0x10E5_27FA_DE68_2D1D,
    0xB056_88C2_B3E6_C1FD,
];

/// The F function: key addition, S-layer and the P-layer byte mix
fn feistel(x: u64, k: u64) -> u64 {
    let b = (x ^ k).to_be_bytes();
    let t = [
        SBOX1[b[0] as usize],
        SBOX2[b[1] as usize],
        SBOX3[b[2] as usize],
        SBOX4[b[3] as usize],
        SBOX2[b[4] as usize],
        SBOX3[b[5] as usize],
        SBOX4[b[6] as usize],
        SBOX1[b[7] as usize],
    ];
    u64::from_be_bytes([
        t[0] ^ t[2] ^ t[3] ^ t[5] ^ t[6] ^ t[7],
        t[0] ^ t[1] ^ t[3] ^ t[4] ^ t[6] ^ t[7],
        t[0] ^ t[1] ^ t[2] ^ t[4] ^ t[5] ^ t[7],
        t[1] ^ t[2] ^ t[3] ^ t[4] ^ t[5] ^ t[6],
        t[0] ^ t[1] ^ t[5] ^ t[6] ^ t[7],
        t[1] ^ t[2] ^ t[4] ^ t[6] ^ t[7],
        t[2] ^ t[3] ^ t[4] ^ t[5] ^ t[7],
        t[0] ^ t[3] ^ t[4] ^ t[5] ^ t[6],
    ])
}

fn fl(x: u64, k: u64) -> u64 {
    let (mut xl, mut xr) = ((x >> 32) as u32, x as u32);
    let (kl, kr) = ((k >> 32) as u32, k as u32);
    xr ^= (xl & kl).rotate_left(1);
    xl ^= xr | kr;
    ((xl as u64) << 32) | xr as u64
}

fn fl_inv(y: u64, k: u64) -> u64 {
    let (mut yl, mut yr) = ((y >> 32) as u32, y as u32);
    let (kl, kr) = ((k >> 32) as u32, k as u32);
    yl ^= yr | kr;
    yr ^= (yl & kl).rotate_left(1);
    ((yl as u64) << 32) | yr as u64
}

/// High and low halves of `x <<< n`
#[inline(always)]
fn halves(x: u128, n: u32) -> [u64; 2] {
    let r = x.rotate_left(n);
    [(r >> 64) as u64, r as u64]
}

/// Camellia block cipher
///
/// The schedule is stored in processing order, so decryption runs the same
/// loop as encryption over reversed subkeys.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Camellia {
    whitening: [u64; 4],
    round_keys: [u64; 24],
    fl_keys: [u64; 6],
    rounds: usize,
    encrypting: bool,
    initialized: bool,
}

impl Camellia {
    pub fn new() -> Self {
        Self {
            whitening: [0u64; 4],
            round_keys: [0u64; 24],
            fl_keys: [0u64; 6],
            rounds: 18,
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8], encrypting: bool) -> Result<()> {
        validate::key_size(ALGORITHM, key.len(), &CAMELLIA_KEY_SIZES)?;

        let kl = BigEndian::read_u128(&key[..16]);
        let kr = match key.len() {
            16 => 0,
            24 => {
                let r = BigEndian::read_u64(&key[16..]);
                ((r as u128) << 64) | (!r) as u128
            }
            _ => BigEndian::read_u128(&key[16..]),
        };

        let x = kl ^ kr;
        let (mut d1, mut d2) = ((x >> 64) as u64, x as u64);
        d2 ^= feistel(d1, SIGMA[0]);
        d1 ^= feistel(d2, SIGMA[1]);
        d1 ^= (kl >> 64) as u64;
        d2 ^= kl as u64;
        d2 ^= feistel(d1, SIGMA[2]);
        d1 ^= feistel(d2, SIGMA[3]);
        let ka = ((d1 as u128) << 64) | d2 as u128;

        let mut parts = [[0u64; 2]; 12];
        if key.len() == 16 {
            self.rounds = 18;
            let [w0, w1] = halves(kl, 0);
            let [w2, w3] = halves(ka, 111);
            self.whitening = [w0, w1, w2, w3];
            parts[..9].copy_from_slice(&[
                halves(ka, 0),
                halves(kl, 15),
                halves(ka, 15),
                halves(kl, 45),
                [halves(ka, 45)[0], halves(kl, 60)[1]],
                halves(ka, 60),
                halves(kl, 94),
                halves(ka, 94),
                halves(kl, 111),
            ]);
            let [a, b] = halves(ka, 30);
            let [c, d] = halves(kl, 77);
            self.fl_keys = [a, b, c, d, 0, 0];
        } else {
            self.rounds = 24;
            let x = ka ^ kr;
            let (mut d1, mut d2) = ((x >> 64) as u64, x as u64);
            d2 ^= feistel(d1, SIGMA[4]);
            d1 ^= feistel(d2, SIGMA[5]);
            let kb = ((d1 as u128) << 64) | d2 as u128;

            let [w0, w1] = halves(kl, 0);
            let [w2, w3] = halves(kb, 111);
            self.whitening = [w0, w1, w2, w3];
            parts = [
                halves(kb, 0),
                halves(kr, 15),
                halves(ka, 15),
                halves(kb, 30),
                halves(kl, 45),
                halves(ka, 45),
                halves(kr, 60),
                halves(kb, 60),
                halves(kl, 77),
                halves(kr, 94),
                halves(ka, 94),
                halves(kl, 111),
            ];
            let [a, b] = halves(kr, 30);
            let [c, d] = halves(kl, 60);
            let [e, f] = halves(ka, 77);
            self.fl_keys = [a, b, c, d, e, f];
        }

        for (dst, src) in self.round_keys.chunks_exact_mut(2).zip(parts.iter()) {
            dst.copy_from_slice(src);
        }
        parts.zeroize();

        if !encrypting {
            let fl_count = self.rounds / 3 - 2;
            self.round_keys[..self.rounds].reverse();
            self.fl_keys[..fl_count].reverse();
            self.whitening = [self.whitening[2], self.whitening[3], self.whitening[0], self.whitening[1]];
        }
        Ok(())
    }

    fn crypt(&self, block: u128) -> u128 {
        let mut d1 = (block >> 64) as u64 ^ self.whitening[0];
        let mut d2 = block as u64 ^ self.whitening[1];

        for i in 0..self.rounds {
            if i % 2 == 0 {
                d2 ^= feistel(d1, self.round_keys[i]);
            } else {
                d1 ^= feistel(d2, self.round_keys[i]);
            }
            if i % 6 == 5 && i != self.rounds - 1 {
                d1 = fl(d1, self.fl_keys[(i / 6) * 2]);
                d2 = fl_inv(d2, self.fl_keys[(i / 6) * 2 + 1]);
            }
        }

        d2 ^= self.whitening[2];
        d1 ^= self.whitening[3];
        ((d2 as u128) << 64) | d1 as u128
    }
}

impl Default for Camellia {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Camellia {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());

        self.initialized = false;
        self.expand_key(key.key(), direction.is_encrypt())?;
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        CAMELLIA_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, CAMELLIA_BLOCK_SIZE)?;

        let block = BigEndian::read_u128(&input[in_off..]);
        BigEndian::write_u128(&mut output[out_off..], self.crypt(block));

        Ok(CAMELLIA_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
