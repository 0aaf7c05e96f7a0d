//! Constants for hash functions

/// Output size of SHA-1 in bytes
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// Internal block size of SHA-1 in bytes
pub const SHA1_BLOCK_SIZE: usize = 64;

/// Length of the CMS key checksum taken from the front of a SHA-1 digest
pub const CMS_KEY_CHECKSUM_SIZE: usize = 8;
