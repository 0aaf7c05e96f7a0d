//! RC2 block cipher (RFC 2268)
//!
//! 64-bit block over four 16-bit words, 16 MIX rounds with two MASH rounds
//! between them. The key expansion honours an effective key length in bits
//! separate from the key length; a plain key uses `8 * len` bits.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::{RC2_BLOCK_SIZE, RC2_MAX_EFFECTIVE_BITS, RC2_MAX_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};

const ALGORITHM: &str = "RC2";

/// Permutation of 0..=255 derived from the digits of pi
const PITABLE: [u8; 256] = [
    0xd9, 0x78, 0xf9, 0xc4, 0x19, 0xdd, 0xb5, 0xed, 0x28, 0xe9, 0xfd, 0x79, 0x4a, 0xa0, 0xd8, 0x9d,
    0xc6, 0x7e, 0x37, 0x83, 0x2b, 0x76, 0x53, 0x8e, 0x62, 0x4c, 0x64, 0x88, 0x44, 0x8b, 0xfb, 0xa2,
    0x17, 0x9a, 0x59, 0xf5, 0x87, 0xb3, 0x4f, 0x13, 0x61, 0x45, 0x6d, 0x8d, 0x09, 0x81, 0x7d, 0x32,
    0xbd, 0x8f, 0x40, 0xeb, 0x86, 0xb7, 0x7b, 0x0b, 0xf0, 0x95, 0x21, 0x22, 0x5c, 0x6b, 0x4e, 0x82,
    0x54, 0xd6, 0x65, 0x93, 0xce, 0x60, 0xb2, 0x1c, 0x73, 0x56, 0xc0, 0x14, 0xa7, 0x8c, 0xf1, 0xdc,
    0x12, 0x75, 0xca, 0x1f, 0x3b, 0xbe, 0xe4, 0xd1, 0x42, 0x3d, 0xd4, 0x30, 0xa3, 0x3c, 0xb6, 0x26,
    0x6f, 0xbf, 0x0e, 0xda, 0x46, 0x69, 0x07, 0x57, 0x27, 0xf2, 0x1d, 0x9b, 0xbc, 0x94, 0x43, 0x03,
    0xf8, 0x11, 0xc7, 0xf6, 0x90, 0xef, 0x3e, 0xe7, 0x06, 0xc3, 0xd5, 0x2f, 0xc8, 0x66, 0x1e, 0xd7,
    0x08, 0xe8, 0xea, 0xde, 0x80, 0x52, 0xee, 0xf7, 0x84, 0xaa, 0x72, 0xac, 0x35, 0x4d, 0x6a, 0x2a,
    0x96, 0x1a, 0xd2, 0x71, 0x5a, 0x15, 0x49, 0x74, 0x4b, 0x9f, 0xd0, 0x5e, 0x04, 0x18, 0xa4, 0xec,
    0xc2, 0xe0, 0x41, 0x6e, 0x0f, 0x51, 0xcb, 0xcc, 0x24, 0x91, 0xaf, 0x50, 0xa1, 0xf4, 0x70, 0x39,
    0x99, 0x7c, 0x3a, 0x85, 0x23, 0xb8, 0xb4, 0x7a, 0xfc, 0x02, 0x36, 0x5b, 0x25, 0x55, 0x97, 0x31,
    0x2d, 0x5d, 0xfa, 0x98, 0xe3, 0x8a, 0x92, 0xae, 0x05, 0xdf, 0x29, 0x10, 0x67, 0x6c, 0xba, 0xc9,
    0xd3, 0x00, 0xe6, 0xcf, 0xe1, 0x9e, 0xa8, 0x2c, 0x63, 0x16, 0x01, 0x3f, 0x58, 0xe2, 0x89, 0xa9,
    0x0d, 0x38, 0x34, 0x1b, 0xab, 0x33, 0xff, 0xb0, 0xbb, 0x48, 0x0c, 0x5f, 0xb9, 0xb1, 0xcd, 0x2e,
    0xc5, 0xf3, 0xdb, 0x47, 0xe5, 0xa5, 0x9c, 0x77, 0x0a, 0xa6, 0x20, 0x68, 0xfe, 0x7f, 0xc1, 0xad,
];

/// Rotation amounts of the four MIX steps
const MIX_ROTATIONS: [u32; 4] = [1, 2, 3, 5];

/// RC2 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc2 {
    working_key: [u16; 64],
    encrypting: bool,
    initialized: bool,
}

impl Rc2 {
    pub fn new() -> Self {
        Self {
            working_key: [0u16; 64],
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8], bits: usize) -> Result<()> {
        validate::key_range(ALGORITHM, key.len(), 1, RC2_MAX_KEY_SIZE)?;
        validate::parameter(
            ALGORITHM,
            (1..=RC2_MAX_EFFECTIVE_BITS).contains(&bits),
            "effective_bits",
            "must be between 1 and 1024",
        )?;

        let mut l = [0u8; 128];
        l[..key.len()].copy_from_slice(key);

        // expand to 128 bytes
        let t = key.len();
        for i in t..128 {
            l[i] = PITABLE[l[i - 1].wrapping_add(l[i - t]) as usize];
        }

        // reduce to the effective key length
        let t8 = (bits + 7) / 8;
        let tm = 0xFFu8 >> ((8 - bits % 8) % 8);
        l[128 - t8] = PITABLE[(l[128 - t8] & tm) as usize];
        for i in (0..128 - t8).rev() {
            l[i] = PITABLE[(l[i + 1] ^ l[i + t8]) as usize];
        }

        for (i, k) in self.working_key.iter_mut().enumerate() {
            *k = u16::from_le_bytes([l[2 * i], l[2 * i + 1]]);
        }
        l.zeroize();
        Ok(())
    }

    fn encrypt_block(&self, r: &mut [u16; 4]) {
        let k = &self.working_key;
        let mut j = 0;
        let mut mix = |r: &mut [u16; 4]| {
            for i in 0..4 {
                let sum = r[i]
                    .wrapping_add(k[j])
                    .wrapping_add(r[(i + 3) % 4] & r[(i + 2) % 4])
                    .wrapping_add(!r[(i + 3) % 4] & r[(i + 1) % 4]);
                r[i] = sum.rotate_left(MIX_ROTATIONS[i]);
                j += 1;
            }
        };
        let mash = |r: &mut [u16; 4]| {
            for i in 0..4 {
                r[i] = r[i].wrapping_add(k[(r[(i + 3) % 4] & 63) as usize]);
            }
        };

        for _ in 0..5 {
            mix(r);
        }
        mash(r);
        for _ in 0..6 {
            mix(r);
        }
        mash(r);
        for _ in 0..5 {
            mix(r);
        }
    }

    fn decrypt_block(&self, r: &mut [u16; 4]) {
        let k = &self.working_key;
        let mut j = 64;
        let mut r_mix = |r: &mut [u16; 4]| {
            for i in (0..4).rev() {
                j -= 1;
                r[i] = r[i]
                    .rotate_right(MIX_ROTATIONS[i])
                    .wrapping_sub(k[j])
                    .wrapping_sub(r[(i + 3) % 4] & r[(i + 2) % 4])
                    .wrapping_sub(!r[(i + 3) % 4] & r[(i + 1) % 4]);
            }
        };
        let r_mash = |r: &mut [u16; 4]| {
            for i in (0..4).rev() {
                r[i] = r[i].wrapping_sub(k[(r[(i + 3) % 4] & 63) as usize]);
            }
        };

        for _ in 0..5 {
            r_mix(r);
        }
        r_mash(r);
        for _ in 0..6 {
            r_mix(r);
        }
        r_mash(r);
        for _ in 0..5 {
            r_mix(r);
        }
    }
}

impl Default for Rc2 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Rc2 {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        self.initialized = false;
        match params {
            CipherParameters::Rc2(p) => {
                trace!(
                    "{} init: {:?}, {}-byte key, {} effective bits",
                    ALGORITHM,
                    direction,
                    p.key().len(),
                    p.effective_bits()
                );
                self.expand_key(p.key(), p.effective_bits())?;
            }
            CipherParameters::Key(k) => {
                trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, k.len());
                self.expand_key(k.key(), k.len() * 8)?;
            }
            _ => return Err(validate::wrong_parameter(ALGORITHM, "KeyParameter or Rc2Parameters")),
        }
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        RC2_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, RC2_BLOCK_SIZE)?;

        let mut r = [0u16; 4];
        LittleEndian::read_u16_into(&input[in_off..in_off + RC2_BLOCK_SIZE], &mut r);
        if self.encrypting {
            self.encrypt_block(&mut r);
        } else {
            self.decrypt_block(&mut r);
        }
        LittleEndian::write_u16_into(&r, &mut output[out_off..out_off + RC2_BLOCK_SIZE]);

        Ok(RC2_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
