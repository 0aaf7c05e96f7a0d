use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{CAST5_BLOCK_SIZE, CAST5_MAX_KEY_SIZE, CAST5_MIN_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::sboxes::{S5, S6, S7, S8};
use super::{f1, f2, f3};
use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "CAST5";

/// Keys of at most this many bytes run 12 rounds instead of 16
const SHORT_KEY: usize = 10;

/// Subkey extraction: four S5..S8 lookups plus one extra byte, which goes
/// through S5, S6, S7 and S8 in turn
const EXTRACT: [[[usize; 5]; 4]; 4] = [
    [[0x8, 0x9, 0x7, 0x6, 0x2], [0xA, 0xB, 0x5, 0x4, 0x6], [0xC, 0xD, 0x3, 0x2, 0x9], [0xE, 0xF, 0x1, 0x0, 0xC]],
    [[0x3, 0x2, 0xC, 0xD, 0x8], [0x1, 0x0, 0xE, 0xF, 0xD], [0x7, 0x6, 0x8, 0x9, 0x3], [0x5, 0x4, 0xA, 0xB, 0x7]],
    [[0x3, 0x2, 0xC, 0xD, 0x9], [0x1, 0x0, 0xE, 0xF, 0xC], [0x7, 0x6, 0x8, 0x9, 0x2], [0x5, 0x4, 0xA, 0xB, 0x6]],
    [[0x8, 0x9, 0x7, 0x6, 0x3], [0xA, 0xB, 0x5, 0x4, 0x7], [0xC, 0xD, 0x3, 0x2, 0x8], [0xE, 0xF, 0x1, 0x0, 0xD]],
];

#[inline(always)]
fn sbox_sum(b: &[u8; 16], i: [usize; 4]) -> u32 {
    S5[b[i[0]] as usize] ^ S6[b[i[1]] as usize] ^ S7[b[i[2]] as usize] ^ S8[b[i[3]] as usize]
}

fn x_to_z(x: &[u8; 16], z: &mut [u8; 16]) {
    let w = BigEndian::read_u32(&x[0..4]) ^ sbox_sum(x, [0xD, 0xF, 0xC, 0xE]) ^ S7[x[0x8] as usize];
    BigEndian::write_u32(&mut z[0..4], w);
    let w = BigEndian::read_u32(&x[8..12]) ^ sbox_sum(z, [0x0, 0x2, 0x1, 0x3]) ^ S8[x[0xA] as usize];
    BigEndian::write_u32(&mut z[4..8], w);
    let w = BigEndian::read_u32(&x[12..16]) ^ sbox_sum(z, [0x7, 0x6, 0x5, 0x4]) ^ S5[x[0x9] as usize];
    BigEndian::write_u32(&mut z[8..12], w);
    let w = BigEndian::read_u32(&x[4..8]) ^ sbox_sum(z, [0xA, 0x9, 0xB, 0x8]) ^ S6[x[0xB] as usize];
    BigEndian::write_u32(&mut z[12..16], w);
}

fn z_to_x(z: &[u8; 16], x: &mut [u8; 16]) {
    let w = BigEndian::read_u32(&z[8..12]) ^ sbox_sum(z, [0x5, 0x7, 0x4, 0x6]) ^ S7[z[0x0] as usize];
    BigEndian::write_u32(&mut x[0..4], w);
    let w = BigEndian::read_u32(&z[0..4]) ^ sbox_sum(x, [0x0, 0x2, 0x1, 0x3]) ^ S8[z[0x2] as usize];
    BigEndian::write_u32(&mut x[4..8], w);
    let w = BigEndian::read_u32(&z[4..8]) ^ sbox_sum(x, [0x7, 0x6, 0x5, 0x4]) ^ S5[z[0x1] as usize];
    BigEndian::write_u32(&mut x[8..12], w);
    let w = BigEndian::read_u32(&z[12..16]) ^ sbox_sum(x, [0xA, 0x9, 0xB, 0x8]) ^ S6[z[0x3] as usize];
    BigEndian::write_u32(&mut x[12..16], w);
}

fn extract(b: &[u8; 16], table: &[[usize; 5]; 4], out: &mut [u32]) {
    let extra = [&S5, &S6, &S7, &S8];
    for (j, e) in table.iter().enumerate() {
        out[j] = sbox_sum(b, [e[0], e[1], e[2], e[3]]) ^ extra[j][b[e[4]] as usize];
    }
}

/// CAST-128 block cipher (RFC 2144)
///
/// Keys of 5 to 16 bytes; shorter keys are zero-padded to 16 and keys of
/// 80 bits or less run 12 rounds.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cast5 {
    masking: [u32; 16],
    rotation: [u32; 16],
    rounds: usize,
    encrypting: bool,
    initialized: bool,
}

impl Cast5 {
    pub fn new() -> Self {
        Self {
            masking: [0u32; 16],
            rotation: [0u32; 16],
            rounds: 16,
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_range(ALGORITHM, key.len(), CAST5_MIN_KEY_SIZE, CAST5_MAX_KEY_SIZE)?;
        self.rounds = if key.len() <= SHORT_KEY { 12 } else { 16 };

        let mut x = [0u8; 16];
        let mut z = [0u8; 16];
        x[..key.len()].copy_from_slice(key);

        let mut k = [0u32; 32];
        for half in k.chunks_exact_mut(16) {
            x_to_z(&x, &mut z);
            extract(&z, &EXTRACT[0], &mut half[0..4]);
            z_to_x(&z, &mut x);
            extract(&x, &EXTRACT[1], &mut half[4..8]);
            x_to_z(&x, &mut z);
            extract(&z, &EXTRACT[2], &mut half[8..12]);
            z_to_x(&z, &mut x);
            extract(&x, &EXTRACT[3], &mut half[12..16]);
        }

        self.masking.copy_from_slice(&k[..16]);
        for (r, v) in self.rotation.iter_mut().zip(&k[16..]) {
            *r = v & 0x1f;
        }

        x.zeroize();
        z.zeroize();
        k.zeroize();
        Ok(())
    }

    #[inline(always)]
    fn round(&self, i: usize, r: u32) -> u32 {
        let (km, kr) = (self.masking[i], self.rotation[i]);
        match i % 3 {
            0 => f1(r, km, kr),
            1 => f2(r, km, kr),
            _ => f3(r, km, kr),
        }
    }

    fn encrypt_block(&self, l: u32, r: u32) -> (u32, u32) {
        let (mut l, mut r) = (l, r);
        for i in 0..self.rounds {
            (l, r) = (r, l ^ self.round(i, r));
        }
        (r, l)
    }

    fn decrypt_block(&self, l: u32, r: u32) -> (u32, u32) {
        let (mut l, mut r) = (l, r);
        for i in (0..self.rounds).rev() {
            (l, r) = (r, l ^ self.round(i, r));
        }
        (r, l)
    }
}

impl Default for Cast5 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Cast5 {
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
        CAST5_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, CAST5_BLOCK_SIZE)?;

        let l = BigEndian::read_u32(&input[in_off..]);
        let r = BigEndian::read_u32(&input[in_off + 4..]);
        let (l, r) = if self.encrypting {
            self.encrypt_block(l, r)
        } else {
            self.decrypt_block(l, r)
        };
        BigEndian::write_u32(&mut output[out_off..], l);
        BigEndian::write_u32(&mut output[out_off + 4..], r);

        Ok(CAST5_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
