//! Block cipher contract

use alloc::borrow::Cow;
use alloc::boxed::Box;

use params::utils::symmetric::MAX_BLOCK_SIZE;
use zeroize::Zeroize;

use crate::error::Result;
use crate::parameters::{CipherParameters, Direction};

/// A keyed permutation over fixed-size blocks
///
/// `process_block` is a pure function of the key schedule and the
/// direction: it consumes exactly `block_size()` bytes at `in_off` and
/// writes exactly `block_size()` bytes at `out_off`. Implementations check,
/// in order, that `init` has run, that the input window fits, and that the
/// output window fits.
pub trait BlockCipher {
    /// Algorithm name, e.g. `"AES"` or `"AES/CBC"`
    fn algorithm_name(&self) -> Cow<'static, str>;

    /// Derive the key schedule for `direction`
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()>;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// Transform one block, returning the number of bytes written
    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize>;

    /// Clear per-message state; the key schedule is kept
    fn reset(&mut self);

    /// Transform one block of `buf` at `off` in place
    fn process_block_in_place(&mut self, buf: &mut [u8], off: usize) -> Result<usize> {
        let bs = self.block_size().min(MAX_BLOCK_SIZE);
        let available = buf.len().saturating_sub(off).min(bs);

        let mut block = [0u8; MAX_BLOCK_SIZE];
        if available > 0 {
            block[..available].copy_from_slice(&buf[off..off + available]);
        }
        let result = self.process_block(&block[..available], 0, buf, off);
        block.zeroize();
        result
    }
}

impl<E: BlockCipher + ?Sized> BlockCipher for Box<E> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        (**self).algorithm_name()
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        (**self).init(direction, params)
    }

    fn block_size(&self) -> usize {
        (**self).block_size()
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        (**self).process_block(input, in_off, output, out_off)
    }

    fn reset(&mut self) {
        (**self).reset()
    }

    fn process_block_in_place(&mut self, buf: &mut [u8], off: usize) -> Result<usize> {
        (**self).process_block_in_place(buf, off)
    }
}
