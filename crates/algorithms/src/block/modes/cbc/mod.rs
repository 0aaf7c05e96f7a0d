//! Cipher Block Chaining (CBC) mode
//!
//! Each plaintext block is XORed with the previous ciphertext block before
//! encryption; the first block is XORed with the IV. `Cbc` wraps any
//! [`BlockCipher`] and is itself a `BlockCipher` named `"<inner>/CBC"`.
//!
//! Re-initialising with an IV-only [`ParametersWithIv`](api::ParametersWithIv)
//! restarts the chain without rescheduling the key.

use alloc::borrow::Cow;
use alloc::format;

use api::{BlockCipher, CipherParameters, Direction};
use log::trace;
use params::utils::symmetric::MAX_BLOCK_SIZE;
use zeroize::Zeroize;

use crate::error::{validate, Result};

const ALGORITHM: &str = "CBC";

/// CBC mode over an owned block cipher
pub struct Cbc<E: BlockCipher> {
    cipher: E,
    iv: [u8; MAX_BLOCK_SIZE],
    chain: [u8; MAX_BLOCK_SIZE],
    block_size: usize,
    encrypting: bool,
    initialized: bool,
}

impl<E: BlockCipher> Cbc<E> {
    /// Wrap `cipher`; the IV starts as all zeroes
    pub fn new(cipher: E) -> Self {
        let block_size = cipher.block_size();
        Self {
            cipher,
            iv: [0u8; MAX_BLOCK_SIZE],
            chain: [0u8; MAX_BLOCK_SIZE],
            block_size,
            encrypting: false,
            initialized: false,
        }
    }

    /// The wrapped engine
    pub fn underlying_cipher(&self) -> &E {
        &self.cipher
    }

    /// Current chaining value: the IV after `reset`, then the last
    /// ciphertext block
    pub fn chaining_value(&self) -> &[u8] {
        &self.chain[..self.block_size]
    }

    fn encrypt_block(&mut self, input: &[u8], in_off: usize, output: &mut [u8], out_off: usize) -> Result<usize> {
        let bs = self.block_size;
        for (c, i) in self.chain[..bs].iter_mut().zip(&input[in_off..in_off + bs]) {
            *c ^= i;
        }
        let n = self.cipher.process_block(&self.chain[..bs], 0, output, out_off)?;
        self.chain[..bs].copy_from_slice(&output[out_off..out_off + bs]);
        Ok(n)
    }

    fn decrypt_block(&mut self, input: &[u8], in_off: usize, output: &mut [u8], out_off: usize) -> Result<usize> {
        let bs = self.block_size;
        let mut next = [0u8; MAX_BLOCK_SIZE];
        next[..bs].copy_from_slice(&input[in_off..in_off + bs]);

        let n = self.cipher.process_block(input, in_off, output, out_off)?;
        for (o, c) in output[out_off..out_off + bs].iter_mut().zip(&self.chain[..bs]) {
            *o ^= c;
        }
        self.chain[..bs].copy_from_slice(&next[..bs]);
        next.zeroize();
        Ok(n)
    }
}

impl<E: BlockCipher> BlockCipher for Cbc<E> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Owned(format!("{}/CBC", self.cipher.algorithm_name()))
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let was_encrypting = self.encrypting;
        let was_initialized = self.initialized;
        self.initialized = false;

        match params {
            CipherParameters::WithIv(with_iv) => {
                validate::iv_length(ALGORITHM, with_iv.iv().len(), self.block_size)?;
                let (inner, iv) = with_iv.into_parts();
                match inner {
                    Some(inner) => self.cipher.init(direction, inner)?,
                    None => {
                        trace!("{} IV-only re-init: {:?}", ALGORITHM, direction);
                        if !was_initialized || was_encrypting != direction.is_encrypt() {
                            return Err(validate::wrong_parameter(
                                ALGORITHM,
                                "ParametersWithIv(KeyParameter) when changing direction",
                            ));
                        }
                    }
                }
                self.iv[..self.block_size].copy_from_slice(iv.as_slice());
            }
            other => self.cipher.init(direction, other)?,
        }

        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        self.reset();
        Ok(())
    }

    fn block_size(&self) -> usize {
        self.block_size
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, self.block_size)?;

        if self.encrypting {
            self.encrypt_block(input, in_off, output, out_off)
        } else {
            self.decrypt_block(input, in_off, output, out_off)
        }
    }

    /// Restore the chaining value to the IV
    fn reset(&mut self) {
        self.chain = self.iv;
        self.cipher.reset();
    }
}

impl<E: BlockCipher + Clone> Clone for Cbc<E> {
    fn clone(&self) -> Self {
        Self {
            cipher: self.cipher.clone(),
            iv: self.iv,
            chain: self.chain,
            block_size: self.block_size,
            encrypting: self.encrypting,
            initialized: self.initialized,
        }
    }
}

impl<E: BlockCipher> Drop for Cbc<E> {
    fn drop(&mut self) {
        self.iv.zeroize();
        self.chain.zeroize();
    }
}
