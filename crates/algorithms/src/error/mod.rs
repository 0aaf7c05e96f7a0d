//! Error handling for cipherkit engines
//!
//! Engines share the error taxonomy and validation guards defined by the
//! API crate so callers see one set of error types whichever engine failed.

pub use api::error::{validate, CipherError, Error, InitError, Result};
