//! Stream cipher contract

use alloc::borrow::Cow;
use alloc::boxed::Box;

use crate::error::Result;
use crate::parameters::CipherParameters;

/// A keystream generator combined with its input by XOR
///
/// Encryption and decryption are the same operation. `process_bytes` over
/// `len` bytes must produce exactly what `len` calls to `return_byte`
/// would.
pub trait StreamCipher {
    /// Algorithm name, e.g. `"Salsa20"` or `"Salsa20/12"`
    fn algorithm_name(&self) -> Cow<'static, str>;

    /// Derive the initial state from the key and IV in `params`
    fn init(&mut self, params: CipherParameters) -> Result<()>;

    /// XOR one byte of keystream into `input`
    fn return_byte(&mut self, input: u8) -> Result<u8>;

    /// XOR `len` bytes of keystream from `input[in_off..]` into `output[out_off..]`
    fn process_bytes(
        &mut self,
        input: &[u8],
        in_off: usize,
        len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize>;

    /// Return to the state right after `init`
    fn reset(&mut self);
}

impl<S: StreamCipher + ?Sized> StreamCipher for Box<S> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        (**self).algorithm_name()
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        (**self).init(params)
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        (**self).return_byte(input)
    }

    fn process_bytes(
        &mut self,
        input: &[u8],
        in_off: usize,
        len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        (**self).process_bytes(input, in_off, len, output, out_off)
    }

    fn reset(&mut self) {
        (**self).reset()
    }
}
