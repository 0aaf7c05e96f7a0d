//! Validation utilities for cipher engines
//!
//! Engines call these guards at the top of `init` and `process_*` so every
//! algorithm reports bounds and key problems the same way. The order in
//! which an engine calls them matters: the initialised check comes first,
//! then input bounds, then output bounds.

use super::{CipherError, Error, InitError, Result};

/// Validate a key length against an accepted set of sizes
#[inline]
pub fn key_size(algorithm: &'static str, actual: usize, accepted: &[usize]) -> Result<()> {
    if !accepted.contains(&actual) {
        return Err(InitError::UnsupportedKeySize { algorithm, actual }.into());
    }
    Ok(())
}

/// Validate a key length against an inclusive range
#[inline]
pub fn key_range(algorithm: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(InitError::UnsupportedKeySize { algorithm, actual }.into());
    }
    Ok(())
}

/// Validate an IV of fixed length
#[inline]
pub fn iv_length(algorithm: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(InitError::InvalidIvLength { algorithm, actual }.into());
    }
    Ok(())
}

/// Validate an IV length against an inclusive range
#[inline]
pub fn iv_range(algorithm: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(InitError::InvalidIvLength { algorithm, actual }.into());
    }
    Ok(())
}

/// Validate a parameter condition
#[inline]
pub fn parameter(
    algorithm: &'static str,
    condition: bool,
    name: &'static str,
    reason: &'static str,
) -> Result<()> {
    if !condition {
        return Err(InitError::InvalidParameter {
            algorithm,
            name,
            reason,
        }
        .into());
    }
    Ok(())
}

/// Build the error for a parameter variant the engine cannot use
#[inline]
pub fn wrong_parameter(algorithm: &'static str, expected: &'static str) -> Error {
    InitError::WrongParameterType {
        algorithm,
        expected,
    }
    .into()
}

/// Validate that `init` has run
#[inline]
pub fn initialized(algorithm: &'static str, initialized: bool) -> Result<()> {
    if !initialized {
        return Err(CipherError::NotInitialized { algorithm }.into());
    }
    Ok(())
}

/// Validate that `len` bytes starting at `off` fit in the input buffer
#[inline]
pub fn input(context: &'static str, buf_len: usize, off: usize, len: usize) -> Result<()> {
    match off.checked_add(len) {
        Some(end) if end <= buf_len => Ok(()),
        _ => Err(CipherError::InputTooShort {
            context,
            needed: off.saturating_add(len),
            available: buf_len,
        }
        .into()),
    }
}

/// Validate that `len` bytes starting at `off` fit in the output buffer
#[inline]
pub fn output(context: &'static str, buf_len: usize, off: usize, len: usize) -> Result<()> {
    match off.checked_add(len) {
        Some(end) if end <= buf_len => Ok(()),
        _ => Err(CipherError::OutputTooShort {
            context,
            needed: off.saturating_add(len),
            available: buf_len,
        }
        .into()),
    }
}

/// Validate both windows of a single-block operation
#[inline]
pub fn block_io(
    context: &'static str,
    input_len: usize,
    in_off: usize,
    output_len: usize,
    out_off: usize,
    block_size: usize,
) -> Result<()> {
    input(context, input_len, in_off, block_size)?;
    output(context, output_len, out_off, block_size)
}

/// Validate both windows of a stream operation over `len` bytes
#[inline]
pub fn stream_io(
    context: &'static str,
    input_len: usize,
    in_off: usize,
    len: usize,
    output_len: usize,
    out_off: usize,
) -> Result<()> {
    input(context, input_len, in_off, len)?;
    output(context, output_len, out_off, len)
}

/// Validate that an input length is a non-zero multiple of `unit`
#[inline]
pub fn multiple_of(context: &'static str, actual: usize, unit: usize, min: usize) -> Result<()> {
    if actual < min || actual % unit != 0 {
        return Err(CipherError::InvalidInputLength { context, actual }.into());
    }
    Ok(())
}

/// Map a failed integrity check to `InvalidCiphertext`
#[inline]
pub fn integrity(valid: bool, context: &'static str) -> Result<()> {
    if !valid {
        return Err(Error::InvalidCiphertext { context });
    }
    Ok(())
}
