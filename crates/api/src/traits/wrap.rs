//! Key-wrap contract

use alloc::borrow::Cow;
use alloc::vec::Vec;

use common::SecretVec;

use crate::error::Result;
use crate::parameters::{CipherParameters, Direction};

/// A key-wrap engine
///
/// An engine initialised for [`Direction::Encrypt`] only wraps, one
/// initialised for [`Direction::Decrypt`] only unwraps. The wrapped length
/// is a deterministic function of the input length.
pub trait Wrapper {
    /// Algorithm name, e.g. `"AES"` for RFC 3394 over AES
    fn algorithm_name(&self) -> Cow<'static, str>;

    /// Configure the engine for wrapping or unwrapping
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()>;

    /// Wrap `input[in_off..in_off + len]`
    fn wrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<Vec<u8>>;

    /// Unwrap `input[in_off..in_off + len]`, verifying its integrity
    fn unwrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<SecretVec>;
}
