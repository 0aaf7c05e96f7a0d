//! Error handling for cipher engines

pub mod types;
pub mod validate;

// Re-export the primary error types and result
pub use types::{CipherError, Error, InitError, Result};
