//! Parameter unpacking shared by the engines
//!
//! Each engine accepts a small subset of the [`CipherParameters`] variants.
//! These helpers pull out the expected shape or report
//! `WrongParameterType` naming what the engine wanted.

use api::{CipherParameters, KeyParameter};

use crate::error::{validate, Result};

/// Expect a plain key
pub(crate) fn expect_key(algorithm: &'static str, params: CipherParameters) -> Result<KeyParameter> {
    match params {
        CipherParameters::Key(key) => Ok(key),
        _ => Err(validate::wrong_parameter(algorithm, "KeyParameter")),
    }
}

/// Expect a key together with an IV
#[cfg(feature = "stream")]
pub(crate) fn expect_key_iv(
    algorithm: &'static str,
    params: CipherParameters,
) -> Result<(KeyParameter, common::SecretVec)> {
    match params {
        CipherParameters::WithIv(with_iv) => match with_iv.into_parts() {
            (Some(CipherParameters::Key(key)), iv) => Ok((key, iv)),
            _ => Err(validate::wrong_parameter(algorithm, "ParametersWithIv(KeyParameter)")),
        },
        _ => Err(validate::wrong_parameter(algorithm, "ParametersWithIv")),
    }
}
