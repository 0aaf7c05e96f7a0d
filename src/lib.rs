//! # cipherkit
//!
//! Symmetric block ciphers, stream ciphers and key-wrap engines behind one
//! uniform engine contract.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! cipherkit = "0.3"
//! ```
//!
//! ## Features
//!
//! - `block`: block cipher engines and CBC
//! - `stream`: stream cipher engines
//! - `wrap`: key-wrap engines (pulls in `block` and `hash`)
//! - `hash`: the SHA-1 digest used by the CMS wraps
//! - `full` (default): all of the above
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - `cipherkit-api`: engine traits, parameter types and errors
//! - `cipherkit-common`: zeroizing containers
//! - `cipherkit-internal`: constant-time helpers
//! - `cipherkit-params`: algorithm constants
//! - `cipherkit-algorithms`: the engines themselves

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use cipherkit_api as api;
pub use cipherkit_common as common;
pub use cipherkit_internal as internal;
pub use cipherkit_params as params;

// Feature-gated re-exports
#[cfg(any(feature = "block", feature = "stream", feature = "wrap", feature = "hash"))]
pub use cipherkit_algorithms as algorithms;

#[cfg(feature = "block")]
pub use cipherkit_algorithms::block;

#[cfg(feature = "stream")]
pub use cipherkit_algorithms::stream;

#[cfg(feature = "wrap")]
pub use cipherkit_algorithms::wrap;

#[cfg(feature = "hash")]
pub use cipherkit_algorithms::hash;

// Ecosystem crates that appear in the public API
pub use rand;
pub use subtle;
pub use zeroize;

/// Common imports for cipherkit users
pub mod prelude {
    // Error types
    pub use crate::api::{CipherError, Error, InitError, Result};

    // Engine contract
    pub use crate::api::{BlockCipher, StreamCipher, Wrapper};

    // Parameters
    pub use crate::api::{
        CipherParameters, Direction, KeyParameter, ParametersWithIv, ParametersWithRandom,
        Rc2Parameters, Rc5Parameters,
    };

    // Security types
    pub use crate::common::SecretBuffer;

    #[cfg(feature = "alloc")]
    pub use crate::common::SecretVec;
}
