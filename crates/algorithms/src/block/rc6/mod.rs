//! RC6 block cipher
//!
//! RC6-32/20: four 32-bit words, 20 rounds, quadratic function
//! `x * (2x + 1)` feeding data-dependent rotations. The key schedule is the
//! RC5 mixing pass over `2r + 4` words.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use params::utils::symmetric::{RC5_MAX_KEY_SIZE, RC6_BLOCK_SIZE, RC6_ROUNDS};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "RC6";

const P32: u32 = 0xB7E1_5163;
const Q32: u32 = 0x9E37_79B9;

const SCHEDULE: usize = 2 * RC6_ROUNDS + 4;

/// RC6 block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc6 {
    schedule: [u32; SCHEDULE],
    encrypting: bool,
    initialized: bool,
}

#[inline(always)]
fn quadratic(x: u32) -> u32 {
    x.wrapping_mul(x.wrapping_mul(2).wrapping_add(1)).rotate_left(5)
}

impl Rc6 {
    pub fn new() -> Self {
        Self {
            schedule: [0u32; SCHEDULE],
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_range(ALGORITHM, key.len(), 1, RC5_MAX_KEY_SIZE)?;

        let c = (key.len() + 3) / 4;
        let mut padded = [0u8; 256];
        padded[..key.len()].copy_from_slice(key);
        let mut l = [0u32; 64];
        LittleEndian::read_u32_into(&padded[..4 * c], &mut l[..c]);

        let s = &mut self.schedule;
        s[0] = P32;
        for i in 1..SCHEDULE {
            s[i] = s[i - 1].wrapping_add(Q32);
        }

        let (mut a, mut b) = (0u32, 0u32);
        let (mut i, mut j) = (0, 0);
        for _ in 0..3 * SCHEDULE.max(c) {
            a = s[i].wrapping_add(a).wrapping_add(b).rotate_left(3);
            s[i] = a;
            b = l[j].wrapping_add(a).wrapping_add(b).rotate_left(a.wrapping_add(b) & 31);
            l[j] = b;
            i = (i + 1) % SCHEDULE;
            j = (j + 1) % c;
        }

        padded.zeroize();
        l.zeroize();
        Ok(())
    }

    fn encrypt_block(&self, x: &mut [u32; 4]) {
        let s = &self.schedule;
        let [mut a, mut b, mut c, mut d] = *x;
        b = b.wrapping_add(s[0]);
        d = d.wrapping_add(s[1]);
        for i in 1..=RC6_ROUNDS {
            let t = quadratic(b);
            let u = quadratic(d);
            a = (a ^ t).rotate_left(u & 31).wrapping_add(s[2 * i]);
            c = (c ^ u).rotate_left(t & 31).wrapping_add(s[2 * i + 1]);
            (a, b, c, d) = (b, c, d, a);
        }
        a = a.wrapping_add(s[2 * RC6_ROUNDS + 2]);
        c = c.wrapping_add(s[2 * RC6_ROUNDS + 3]);
        *x = [a, b, c, d];
    }

    fn decrypt_block(&self, x: &mut [u32; 4]) {
        let s = &self.schedule;
        let [mut a, mut b, mut c, mut d] = *x;
        c = c.wrapping_sub(s[2 * RC6_ROUNDS + 3]);
        a = a.wrapping_sub(s[2 * RC6_ROUNDS + 2]);
        for i in (1..=RC6_ROUNDS).rev() {
            (a, b, c, d) = (d, a, b, c);
            let u = quadratic(d);
            let t = quadratic(b);
            c = c.wrapping_sub(s[2 * i + 1]).rotate_right(t & 31) ^ u;
            a = a.wrapping_sub(s[2 * i]).rotate_right(u & 31) ^ t;
        }
        d = d.wrapping_sub(s[1]);
        b = b.wrapping_sub(s[0]);
        *x = [a, b, c, d];
    }
}

impl Default for Rc6 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Rc6 {
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
        RC6_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, RC6_BLOCK_SIZE)?;

        let mut x = [0u32; 4];
        LittleEndian::read_u32_into(&input[in_off..in_off + RC6_BLOCK_SIZE], &mut x);
        if self.encrypting {
            self.encrypt_block(&mut x);
        } else {
            self.decrypt_block(&mut x);
        }
        LittleEndian::write_u32_into(&x, &mut output[out_off..out_off + RC6_BLOCK_SIZE]);

        Ok(RC6_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
