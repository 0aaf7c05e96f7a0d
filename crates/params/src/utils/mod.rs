//! Constant values for cipherkit cryptographic operations

pub mod hash;
pub mod symmetric;
