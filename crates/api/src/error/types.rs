//! Error type definitions for cipher operations

use thiserror::Error;

/// Failure while configuring an engine
///
/// Raised by `init` before any state is derived. The engine is left
/// uninitialized (or in its previous configuration for CBC IV-only re-init).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitError {
    /// The key length is not one the algorithm accepts
    #[error("{algorithm}: unsupported key size of {actual} bytes")]
    UnsupportedKeySize {
        algorithm: &'static str,
        actual: usize,
    },

    /// The parameter variant does not fit the engine
    #[error("{algorithm}: wrong parameter type, expected {expected}")]
    WrongParameterType {
        algorithm: &'static str,
        expected: &'static str,
    },

    /// The IV length is not one the algorithm accepts
    #[error("{algorithm}: invalid IV length of {actual} bytes")]
    InvalidIvLength {
        algorithm: &'static str,
        actual: usize,
    },

    /// Any other rejected parameter (rounds, effective bits, ...)
    #[error("{algorithm}: invalid parameter '{name}': {reason}")]
    InvalidParameter {
        algorithm: &'static str,
        name: &'static str,
        reason: &'static str,
    },
}

/// Failure while processing data through an initialized engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// `process_*` was called before `init`
    #[error("{algorithm} not initialised")]
    NotInitialized { algorithm: &'static str },

    /// Fewer input bytes than the operation consumes
    #[error("{context}: input buffer too short, need {needed} bytes but {available} available")]
    InputTooShort {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// Less output space than the operation produces
    #[error("{context}: output buffer too short, need {needed} bytes but {available} available")]
    OutputTooShort {
        context: &'static str,
        needed: usize,
        available: usize,
    },

    /// The input length is not acceptable for the operation
    #[error("{context}: invalid input length of {actual} bytes")]
    InvalidInputLength {
        context: &'static str,
        actual: usize,
    },

    /// The keystream for this key/IV pair is used up
    #[error("{algorithm}: keystream exhausted, re-initialise with a new IV")]
    KeystreamExhausted { algorithm: &'static str },

    /// A wrap engine was asked to run against its configured direction
    #[error("{algorithm}: not initialised for {operation}")]
    WrongDirection {
        algorithm: &'static str,
        operation: &'static str,
    },
}

/// Primary error type for cipherkit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Init(#[from] InitError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// Integrity or checksum verification failed on unwrap
    #[error("{context}: invalid ciphertext")]
    InvalidCiphertext { context: &'static str },
}

impl Error {
    /// Shorthand for an integrity failure
    pub fn invalid_ciphertext(context: &'static str) -> Self {
        Error::InvalidCiphertext { context }
    }
}

/// Result type for cipherkit operations
pub type Result<T> = core::result::Result<T, Error>;
