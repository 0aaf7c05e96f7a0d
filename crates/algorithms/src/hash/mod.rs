//! Hash functions
//!
//! Only SHA-1 is provided. The CMS key wrap uses it for its key checksum;
//! it is exposed for callers that need the same value.

pub mod sha1;

pub use sha1::Sha1;
