//! Identity block engine
//!
//! Copies input to output unchanged. Useful as a stand-in wherever a
//! [`BlockCipher`] is required but no transformation is wanted.

use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use log::trace;
use params::utils::symmetric::{MAX_BLOCK_SIZE, NULL_DEFAULT_BLOCK_SIZE};

use crate::error::{validate, Result};

const ALGORITHM: &str = "Null";

/// Null block cipher with a configurable block size
#[derive(Debug, Clone)]
pub struct NullCipher {
    block_size: usize,
    initialized: bool,
}

impl NullCipher {
    /// Null engine with a one-byte block
    pub fn new() -> Self {
        Self {
            block_size: NULL_DEFAULT_BLOCK_SIZE,
            initialized: false,
        }
    }

    /// Null engine with the given block size, 1 to `MAX_BLOCK_SIZE` bytes
    pub fn with_block_size(block_size: usize) -> Result<Self> {
        validate::parameter(
            ALGORITHM,
            (1..=MAX_BLOCK_SIZE).contains(&block_size),
            "block_size",
            "must be between 1 and 32 bytes",
        )?;
        Ok(Self {
            block_size,
            initialized: false,
        })
    }
}

impl Default for NullCipher {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for NullCipher {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    /// Accepts any parameters
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        trace!("{} init: {:?}, {}", ALGORITHM, direction, params.kind());
        self.initialized = true;
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
        let bs = self.block_size;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, bs)?;

        output[out_off..out_off + bs].copy_from_slice(&input[in_off..in_off + bs]);
        Ok(bs)
    }

    fn reset(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copies_input() {
        let mut null = NullCipher::with_block_size(4).unwrap();
        null.init(Direction::Encrypt, CipherParameters::key(&[])).unwrap();

        let mut out = [0u8; 6];
        assert_eq!(null.process_block(&[9, 1, 2, 3, 4], 1, &mut out, 2).unwrap(), 4);
        assert_eq!(out, [0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_block_size_bounds() {
        assert_eq!(NullCipher::new().block_size(), 1);
        assert!(NullCipher::with_block_size(0).is_err());
        assert!(NullCipher::with_block_size(33).is_err());
        assert!(NullCipher::with_block_size(32).is_ok());
    }

    #[test]
    fn test_requires_init() {
        let mut null = NullCipher::new();
        assert!(null.process_block(&[1], 0, &mut [0u8; 1], 0).is_err());
    }
}
