//! Symmetric cipher engines for cipherkit
//!
//! This crate holds the block ciphers, stream ciphers, key-wrap engines and
//! the SHA-1 digest they share. Every engine follows the contract in
//! `cipherkit-api`: construct it empty, `init` it with [`CipherParameters`],
//! then process data. Engines validate every buffer window and report
//! failures as typed [`Error`]s.
//!
//! # Security Features
//!
//! - Key schedules, keystream state and stored keys are zeroized on drop
//! - Wrap integrity checks compare in constant time
//! - No engine logs key, IV or data bytes
//!
//! # Feature flags
//!
//! `block`, `stream`, `wrap` and `hash` select the algorithm groups. `wrap`
//! pulls in `block` and `hash`. `std` enables all four along with the
//! operating-system random source used by the wrap engines.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, CipherError, Error, InitError, Result};

#[cfg(any(feature = "block", feature = "stream"))]
mod keying;

// Engine contract
pub use api::{
    BlockCipher, CipherParameters, Direction, KeyParameter, ParametersWithIv, ParametersWithRandom,
    Rc2Parameters, Rc5Parameters, StreamCipher, Wrapper,
};

// Block cipher implementations
#[cfg(feature = "block")]
pub mod block;
#[cfg(feature = "block")]
pub use block::{Aes, Cbc, DesEde};

// Stream cipher implementations
#[cfg(feature = "stream")]
pub mod stream;
#[cfg(feature = "stream")]
pub use stream::{ChaCha, Rc4, Salsa20};

// Key-wrap implementations
#[cfg(feature = "wrap")]
pub mod wrap;
#[cfg(feature = "wrap")]
pub use wrap::{AesWrap, AesWrapPad, DesEdeWrap, Rc2Wrap, Rfc3211Wrap};

// Hash function implementations
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "hash")]
pub use hash::Sha1;

// Re-export zeroizing containers from cipherkit-common
pub use common::security::{SecretBuffer, SecretVec};
