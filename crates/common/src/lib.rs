//! Common implementations and shared functionality for cipherkit
//!
//! This crate provides the zeroizing containers that hold key schedules,
//! stored keys and recovered key material across the cipherkit crates.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(all(feature = "alloc", not(feature = "std")))]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::SecretBuffer;

// Conditionally re-export SecretVec only when alloc feature is enabled
#[cfg(feature = "alloc")]
pub use security::secret::SecretVec;

// Re-export memory barrier utilities
pub use security::memory::barrier;
