//! Public API traits and types for the cipherkit library
//!
//! This crate defines the contract every cipherkit engine implements: the
//! parameter types handed to `init`, the error taxonomy, the validation
//! helpers engines use to enforce buffer and key bounds, and the
//! [`BlockCipher`], [`StreamCipher`] and [`Wrapper`] traits.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod error;
pub mod parameters;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{validate, CipherError, Error, InitError, Result};
pub use parameters::{
    CipherParameters, Direction, KeyParameter, ParametersWithIv, ParametersWithRandom,
    RandomSource, Rc2Parameters, Rc5Parameters, SharedRandom,
};
pub use traits::{BlockCipher, StreamCipher, Wrapper};
