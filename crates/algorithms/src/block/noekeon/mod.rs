//! Noekeon block cipher, direct-key mode
//!
//! Sixteen rounds of `Theta`, `Pi1`, `Gamma`, `Pi2` over four 32-bit words.
//! The working key is the cipher key itself; decryption runs `Theta` with
//! the key after passing it through `Theta` under a null key.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{NOEKEON_BLOCK_SIZE, NOEKEON_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "Noekeon";

const ROUNDS: usize = 16;

const ROUND_CONSTANTS: [u32; ROUNDS + 1] = [
    0x80, 0x1b, 0x36, 0x6c, 0xd8, 0xab, 0x4d, 0x9a, 0x2f, 0x5e, 0xbc, 0x63, 0xc6, 0x97, 0x35, 0x6a, 0xd4,
];

#[inline(always)]
fn theta(k: &[u32; 4], a: &mut [u32; 4]) {
    let mut t = a[0] ^ a[2];
    t ^= t.rotate_left(8) ^ t.rotate_left(24);
    a[1] ^= t;
    a[3] ^= t;

    for (w, kw) in a.iter_mut().zip(k) {
        *w ^= kw;
    }

    let mut t = a[1] ^ a[3];
    t ^= t.rotate_left(8) ^ t.rotate_left(24);
    a[0] ^= t;
    a[2] ^= t;
}

#[inline(always)]
fn gamma(a: &mut [u32; 4]) {
    a[1] ^= !a[3] & !a[2];
    a[0] ^= a[2] & a[1];
    a.swap(0, 3);
    a[2] ^= a[0] ^ a[1] ^ a[3];
    a[1] ^= !a[3] & !a[2];
    a[0] ^= a[2] & a[1];
}

#[inline(always)]
fn pi1(a: &mut [u32; 4]) {
    a[1] = a[1].rotate_left(1);
    a[2] = a[2].rotate_left(5);
    a[3] = a[3].rotate_left(2);
}

#[inline(always)]
fn pi2(a: &mut [u32; 4]) {
    a[1] = a[1].rotate_right(1);
    a[2] = a[2].rotate_right(5);
    a[3] = a[3].rotate_right(2);
}

/// Noekeon block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Noekeon {
    working_key: [u32; 4],
    encrypting: bool,
    initialized: bool,
}

impl Noekeon {
    pub fn new() -> Self {
        Self {
            working_key: [0u32; 4],
            encrypting: false,
            initialized: false,
        }
    }

    fn encrypt_block(&self, a: &mut [u32; 4]) {
        let k = &self.working_key;
        for &rc in &ROUND_CONSTANTS[..ROUNDS] {
            a[0] ^= rc;
            theta(k, a);
            pi1(a);
            gamma(a);
            pi2(a);
        }
        a[0] ^= ROUND_CONSTANTS[ROUNDS];
        theta(k, a);
    }

    fn decrypt_block(&self, a: &mut [u32; 4]) {
        let k = &self.working_key;
        for &rc in ROUND_CONSTANTS[1..].iter().rev() {
            theta(k, a);
            a[0] ^= rc;
            pi1(a);
            gamma(a);
            pi2(a);
        }
        theta(k, a);
        a[0] ^= ROUND_CONSTANTS[0];
    }
}

impl Default for Noekeon {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Noekeon {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());
        validate::key_size(ALGORITHM, key.len(), &[NOEKEON_KEY_SIZE])?;

        BigEndian::read_u32_into(key.key(), &mut self.working_key);
        if !direction.is_encrypt() {
            theta(&[0u32; 4], &mut self.working_key);
        }
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        NOEKEON_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, NOEKEON_BLOCK_SIZE)?;

        let mut a = [0u32; 4];
        BigEndian::read_u32_into(&input[in_off..in_off + NOEKEON_BLOCK_SIZE], &mut a);
        if self.encrypting {
            self.encrypt_block(&mut a);
        } else {
            self.decrypt_block(&mut a);
        }
        BigEndian::write_u32_into(&a, &mut output[out_off..out_off + NOEKEON_BLOCK_SIZE]);

        Ok(NOEKEON_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
