//! Parameter types consumed by engine `init`
//!
//! These are plain data carriers. Engines take a [`CipherParameters`] by
//! value and pick out the variant they understand; anything else is an
//! [`InitError::WrongParameterType`](crate::InitError::WrongParameterType).

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;

use common::SecretVec;
use rand::{CryptoRng, RngCore};

/// Direction an engine is initialised for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    /// True for [`Direction::Encrypt`]
    pub fn is_encrypt(self) -> bool {
        matches!(self, Direction::Encrypt)
    }
}

/// Raw key bytes
#[derive(Clone)]
pub struct KeyParameter {
    key: SecretVec,
}

impl KeyParameter {
    pub fn new(key: &[u8]) -> Self {
        Self {
            key: SecretVec::from_slice(key),
        }
    }

    pub fn key(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl fmt::Debug for KeyParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyParameter(len={}, [REDACTED])", self.key.len())
    }
}

/// Inner parameters plus an IV
///
/// `parameters` is `None` for an IV-only re-initialisation, which CBC uses
/// to restart the chain without re-deriving the key schedule.
#[derive(Clone)]
pub struct ParametersWithIv {
    parameters: Option<Box<CipherParameters>>,
    iv: SecretVec,
}

impl ParametersWithIv {
    pub fn new(parameters: impl Into<CipherParameters>, iv: &[u8]) -> Self {
        Self {
            parameters: Some(Box::new(parameters.into())),
            iv: SecretVec::from_slice(iv),
        }
    }

    /// IV with no key; keeps the engine's existing schedule
    pub fn iv_only(iv: &[u8]) -> Self {
        Self {
            parameters: None,
            iv: SecretVec::from_slice(iv),
        }
    }

    pub fn parameters(&self) -> Option<&CipherParameters> {
        self.parameters.as_deref()
    }

    pub fn iv(&self) -> &[u8] {
        self.iv.as_slice()
    }

    /// Split into the inner parameters and the IV
    pub fn into_parts(self) -> (Option<CipherParameters>, SecretVec) {
        (self.parameters.map(|p| *p), self.iv)
    }
}

impl fmt::Debug for ParametersWithIv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametersWithIv")
            .field("parameters", &self.parameters)
            .field("iv_len", &self.iv.len())
            .finish()
    }
}

/// Any cryptographically secure random source
pub trait RandomSource: RngCore + CryptoRng {}

impl<T: RngCore + CryptoRng> RandomSource for T {}

/// Shared handle to a random source
///
/// Cloning a [`ParametersWithRandom`] clones the handle, so both copies draw
/// from the same generator.
pub type SharedRandom = Rc<RefCell<dyn RandomSource>>;

/// Inner parameters plus a random source
#[derive(Clone)]
pub struct ParametersWithRandom {
    parameters: Box<CipherParameters>,
    random: SharedRandom,
}

impl ParametersWithRandom {
    pub fn new<R: RandomSource + 'static>(parameters: impl Into<CipherParameters>, random: R) -> Self {
        Self {
            parameters: Box::new(parameters.into()),
            random: Rc::new(RefCell::new(random)),
        }
    }

    /// Build from an existing shared handle
    pub fn from_shared(parameters: impl Into<CipherParameters>, random: SharedRandom) -> Self {
        Self {
            parameters: Box::new(parameters.into()),
            random,
        }
    }

    pub fn parameters(&self) -> &CipherParameters {
        &self.parameters
    }

    pub fn random(&self) -> &SharedRandom {
        &self.random
    }

    pub fn into_parts(self) -> (CipherParameters, SharedRandom) {
        (*self.parameters, self.random)
    }
}

impl fmt::Debug for ParametersWithRandom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParametersWithRandom")
            .field("parameters", &self.parameters)
            .finish_non_exhaustive()
    }
}

/// RC2 key with an explicit effective key length in bits
#[derive(Clone)]
pub struct Rc2Parameters {
    key: SecretVec,
    effective_bits: usize,
}

impl Rc2Parameters {
    pub fn new(key: &[u8], effective_bits: usize) -> Self {
        Self {
            key: SecretVec::from_slice(key),
            effective_bits,
        }
    }

    pub fn key(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn effective_bits(&self) -> usize {
        self.effective_bits
    }
}

impl fmt::Debug for Rc2Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rc2Parameters")
            .field("key_len", &self.key.len())
            .field("effective_bits", &self.effective_bits)
            .finish()
    }
}

/// RC5 key with an explicit round count
#[derive(Clone)]
pub struct Rc5Parameters {
    key: SecretVec,
    rounds: usize,
}

impl Rc5Parameters {
    pub fn new(key: &[u8], rounds: usize) -> Self {
        Self {
            key: SecretVec::from_slice(key),
            rounds,
        }
    }

    pub fn key(&self) -> &[u8] {
        self.key.as_slice()
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl fmt::Debug for Rc5Parameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rc5Parameters")
            .field("key_len", &self.key.len())
            .field("rounds", &self.rounds)
            .finish()
    }
}

/// Tagged union of everything an engine can be initialised with
#[derive(Debug, Clone)]
pub enum CipherParameters {
    Key(KeyParameter),
    WithIv(ParametersWithIv),
    WithRandom(ParametersWithRandom),
    Rc2(Rc2Parameters),
    Rc5(Rc5Parameters),
}

impl CipherParameters {
    /// Plain key
    pub fn key(key: &[u8]) -> Self {
        CipherParameters::Key(KeyParameter::new(key))
    }

    /// Inner parameters plus IV
    pub fn with_iv(parameters: impl Into<CipherParameters>, iv: &[u8]) -> Self {
        CipherParameters::WithIv(ParametersWithIv::new(parameters, iv))
    }

    /// IV only, for re-initialising a chaining mode
    pub fn iv_only(iv: &[u8]) -> Self {
        CipherParameters::WithIv(ParametersWithIv::iv_only(iv))
    }

    /// Inner parameters plus random source
    pub fn with_random<R: RandomSource + 'static>(
        parameters: impl Into<CipherParameters>,
        random: R,
    ) -> Self {
        CipherParameters::WithRandom(ParametersWithRandom::new(parameters, random))
    }

    pub fn rc2(key: &[u8], effective_bits: usize) -> Self {
        CipherParameters::Rc2(Rc2Parameters::new(key, effective_bits))
    }

    pub fn rc5(key: &[u8], rounds: usize) -> Self {
        CipherParameters::Rc5(Rc5Parameters::new(key, rounds))
    }

    /// Name of the variant, for error reporting
    pub fn kind(&self) -> &'static str {
        match self {
            CipherParameters::Key(_) => "KeyParameter",
            CipherParameters::WithIv(_) => "ParametersWithIv",
            CipherParameters::WithRandom(_) => "ParametersWithRandom",
            CipherParameters::Rc2(_) => "Rc2Parameters",
            CipherParameters::Rc5(_) => "Rc5Parameters",
        }
    }
}

impl From<KeyParameter> for CipherParameters {
    fn from(p: KeyParameter) -> Self {
        CipherParameters::Key(p)
    }
}

impl From<ParametersWithIv> for CipherParameters {
    fn from(p: ParametersWithIv) -> Self {
        CipherParameters::WithIv(p)
    }
}

impl From<ParametersWithRandom> for CipherParameters {
    fn from(p: ParametersWithRandom) -> Self {
        CipherParameters::WithRandom(p)
    }
}

impl From<Rc2Parameters> for CipherParameters {
    fn from(p: Rc2Parameters) -> Self {
        CipherParameters::Rc2(p)
    }
}

impl From<Rc5Parameters> for CipherParameters {
    fn from(p: Rc5Parameters) -> Self {
        CipherParameters::Rc5(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_debug_never_prints_key_bytes() {
        let params = CipherParameters::with_iv(CipherParameters::key(&[0xAB; 16]), &[0xCD; 8]);
        let printed = format!("{:?}", params);
        assert!(!printed.contains("171"));
        assert!(!printed.contains("AB"));
        assert!(printed.contains("REDACTED"));
    }

    #[test]
    fn test_iv_only_has_no_inner_parameters() {
        let p = ParametersWithIv::iv_only(&[1, 2, 3]);
        assert!(p.parameters().is_none());
        let (inner, iv) = p.into_parts();
        assert!(inner.is_none());
        assert_eq!(iv.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_cloned_random_parameters_share_source() {
        let params = ParametersWithRandom::new(
            CipherParameters::key(&[0u8; 16]),
            ChaCha8Rng::seed_from_u64(42),
        );
        let copy = params.clone();

        let first = params.random().borrow_mut().next_u32();
        let second = copy.random().borrow_mut().next_u32();

        let mut fresh = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(first, fresh.next_u32());
        assert_eq!(second, fresh.next_u32());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(CipherParameters::key(&[1]).kind(), "KeyParameter");
        assert_eq!(CipherParameters::rc2(&[1], 40).kind(), "Rc2Parameters");
        assert_eq!(CipherParameters::rc5(&[1], 12).kind(), "Rc5Parameters");
        assert!(Direction::Encrypt.is_encrypt());
        assert!(!Direction::Decrypt.is_encrypt());
    }
}
