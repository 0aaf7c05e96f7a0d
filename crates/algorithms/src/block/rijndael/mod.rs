//! Rijndael with variable block width
//!
//! The original Rijndael proposal allows block and key lengths of 128, 160,
//! 192, 224 or 256 bits independently. AES is the 128-bit-block subset; this
//! engine produces identical output for that width.
//!
//! The state is held column-major (`state[row + 4 * column]`) exactly as in
//! AES, and the S-box and column mixing are shared with the AES engine.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use common::security::SecretBuffer;
use log::trace;
use params::utils::symmetric::{MAX_BLOCK_SIZE, RIJNDAEL_BLOCK_BITS, RIJNDAEL_KEY_SIZES};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::aes::{add_round_key, inv_mix_columns, inv_sub_bytes, mix_columns, mul2, sub_bytes, sub_word};
use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "Rijndael";

/// Largest schedule: 8 columns × 15 round keys × 4 bytes
const MAX_SCHEDULE: usize = 480;

/// Row shift offsets indexed by block width in words (4..=8)
const fn shifts(nb: usize) -> [usize; 4] {
    match nb {
        7 => [0, 1, 2, 4],
        8 => [0, 1, 3, 4],
        _ => [0, 1, 2, 3],
    }
}

/// Rijndael block cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rijndael {
    round_keys: SecretBuffer<MAX_SCHEDULE>,
    /// Block width in 32-bit columns
    nb: usize,
    rounds: usize,
    encrypting: bool,
    initialized: bool,
}

impl Rijndael {
    /// Creates an engine for the given block width in bits
    ///
    /// Accepted widths are 128, 160, 192, 224 and 256.
    pub fn new(block_bits: usize) -> Result<Self> {
        validate::parameter(
            ALGORITHM,
            RIJNDAEL_BLOCK_BITS.contains(&block_bits),
            "block_bits",
            "must be 128, 160, 192, 224 or 256",
        )?;

        Ok(Self {
            round_keys: SecretBuffer::zeroed(),
            nb: block_bits / 32,
            rounds: 0,
            encrypting: false,
            initialized: false,
        })
    }

    fn expand_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_size(ALGORITHM, key.len(), &RIJNDAEL_KEY_SIZES)?;

        let nk = key.len() / 4;
        let nb = self.nb;
        let rounds = nk.max(nb) + 6;
        let total = nb * (rounds + 1);

        let mut w = [0u32; MAX_SCHEDULE / 4];
        for (i, word) in w.iter_mut().take(nk).enumerate() {
            *word = u32::from_be_bytes([key[4 * i], key[4 * i + 1], key[4 * i + 2], key[4 * i + 3]]);
        }

        let mut rcon = 1u8;
        for i in nk..total {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = sub_word(temp.rotate_left(8)) ^ ((rcon as u32) << 24);
                rcon = mul2(rcon);
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }

        let round_keys = self.round_keys.as_mut_slice();
        round_keys.zeroize();
        for (i, word) in w.iter().take(total).enumerate() {
            round_keys[4 * i..4 * i + 4].copy_from_slice(&word.to_be_bytes());
        }
        w.zeroize();

        self.rounds = rounds;
        Ok(())
    }

    fn round_key(&self, round: usize) -> &[u8] {
        let len = 4 * self.nb;
        &self.round_keys.as_slice()[round * len..(round + 1) * len]
    }

    fn shift_rows(&self, state: &mut [u8]) {
        let nb = self.nb;
        let offsets = shifts(nb);
        let mut temp = [0u8; MAX_BLOCK_SIZE];
        temp[..4 * nb].copy_from_slice(state);
        for c in 0..nb {
            for (r, shift) in offsets.iter().enumerate().skip(1) {
                state[r + 4 * c] = temp[r + 4 * ((c + shift) % nb)];
            }
        }
    }

    fn inv_shift_rows(&self, state: &mut [u8]) {
        let nb = self.nb;
        let offsets = shifts(nb);
        let mut temp = [0u8; MAX_BLOCK_SIZE];
        temp[..4 * nb].copy_from_slice(state);
        for c in 0..nb {
            for (r, shift) in offsets.iter().enumerate().skip(1) {
                state[r + 4 * ((c + shift) % nb)] = temp[r + 4 * c];
            }
        }
    }

    fn encrypt_block(&self, state: &mut [u8]) {
        add_round_key(state, self.round_key(0));
        for round in 1..self.rounds {
            sub_bytes(state);
            self.shift_rows(state);
            mix_columns(state);
            add_round_key(state, self.round_key(round));
        }
        sub_bytes(state);
        self.shift_rows(state);
        add_round_key(state, self.round_key(self.rounds));
    }

    fn decrypt_block(&self, state: &mut [u8]) {
        add_round_key(state, self.round_key(self.rounds));
        for round in (1..self.rounds).rev() {
            self.inv_shift_rows(state);
            inv_sub_bytes(state);
            add_round_key(state, self.round_key(round));
            inv_mix_columns(state);
        }
        self.inv_shift_rows(state);
        inv_sub_bytes(state);
        add_round_key(state, self.round_key(0));
    }
}

impl BlockCipher for Rijndael {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!(
            "{}-{} init: {:?}, {}-byte key",
            ALGORITHM,
            self.nb * 32,
            direction,
            key.len()
        );

        self.initialized = false;
        self.expand_key(key.key())?;
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        4 * self.nb
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        let bs = self.block_size();
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, bs)?;

        let mut buf = [0u8; MAX_BLOCK_SIZE];
        let state = &mut buf[..bs];
        state.copy_from_slice(&input[in_off..in_off + bs]);
        if self.encrypting {
            self.encrypt_block(state);
        } else {
            self.decrypt_block(state);
        }
        output[out_off..out_off + bs].copy_from_slice(state);
        buf.zeroize();

        Ok(bs)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests;
