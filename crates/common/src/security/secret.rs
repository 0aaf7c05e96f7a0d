//! Zeroizing containers for key schedules and key material
//!
//! Both types wipe their contents on drop and redact them from `Debug`.

use core::convert::{AsMut, AsRef};
use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

#[cfg(all(feature = "alloc", not(feature = "std")))]
use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::vec::Vec;

/// Fixed-size round-key storage for the table-driven engines
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

/// Stream-cipher keys and IVs kept for `reset`, and keys returned by `unwrap`
#[cfg(feature = "alloc")]
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretVec {
    data: Vec<u8>,
}

#[cfg(feature = "alloc")]
impl SecretVec {
    pub fn from_slice(slice: &[u8]) -> Self {
        Self { data: slice.to_vec() }
    }

    /// Placeholder until `init` stores a key
    pub fn empty() -> Self {
        Self { data: Vec::new() }
    }

    /// Working buffer for a wrap frame of `len` bytes
    pub fn zeroed(len: usize) -> Self {
        let mut data = Vec::with_capacity(len);
        data.resize(len, 0);
        Self { data }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(feature = "alloc")]
impl AsRef<[u8]> for SecretVec {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

#[cfg(feature = "alloc")]
impl fmt::Debug for SecretVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretVec(len={}, [REDACTED])", self.data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_buffer_basic() {
        let mut buffer = SecretBuffer::<32>::new([42u8; 32]);
        assert_eq!(buffer.len(), 32);
        assert_eq!(buffer.as_slice()[0], 42);

        buffer.as_mut_slice()[0] = 1;
        assert_eq!(buffer.as_slice()[0], 1);
    }

    #[test]
    fn test_secret_buffer_zeroize() {
        let mut buffer = SecretBuffer::<16>::new([0xAA; 16]);
        buffer.zeroize();
        assert_eq!(buffer.as_slice(), &[0u8; 16]);
    }

    #[test]
    fn test_secret_buffer_debug_is_redacted() {
        let buffer = SecretBuffer::<4>::new([1, 2, 3, 4]);
        assert_eq!(format!("{:?}", buffer), "SecretBuffer<4>([REDACTED])");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn test_secret_vec_operations() {
        let mut vec = SecretVec::from_slice(&[1, 2, 3, 4]);
        assert_eq!(vec.len(), 4);
        vec.as_mut_slice()[0] = 9;
        assert_eq!(vec.as_slice(), &[9, 2, 3, 4]);
        assert!(SecretVec::empty().is_empty());

        assert_eq!(SecretVec::zeroed(5).as_slice(), &[0u8; 5]);
        assert!(format!("{:?}", vec).contains("REDACTED"));
    }
}
