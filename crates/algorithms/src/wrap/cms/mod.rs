//! CMS key wrap for Triple-DES and RC2 (RFC 3217)
//!
//! The key is framed by a [`Payload`], followed by the first 8 bytes of its
//! SHA-1 digest, and CBC-encrypted under a per-wrap IV. The IV is prepended,
//! the whole buffer is byte-reversed and encrypted again under the fixed IV
//! `4ADDA22C79E82105`. This structure comes from an expired draft and is
//! reproduced exactly for interoperability.

use alloc::borrow::Cow;
use alloc::vec::Vec;
use core::marker::PhantomData;

use api::{BlockCipher, CipherParameters, Direction, SharedRandom, Wrapper};
use common::SecretVec;
use internal::constant_time::ct_eq_choice;
use log::{debug, trace};
use params::utils::hash::CMS_KEY_CHECKSUM_SIZE;
use params::utils::symmetric::{CMS_WRAP_IV, CMS_WRAP_IV_SIZE};
use rand::RngCore;
use subtle::{Choice, ConditionallySelectable, ConstantTimeGreater};
use zeroize::Zeroize;

use super::{cbc_in_place, check_direction, input_window, random_or_default, split_random};
use crate::block::{Cbc, DesEde, Rc2};
use crate::error::{validate, CipherError, Error, Result};
use crate::hash::Sha1;

mod sealed {
    pub trait Sealed {}
}

/// Framing of the key inside the checksummed block
pub trait Payload: sealed::Sealed {
    /// Block cipher the wrap runs over
    type Engine: BlockCipher + Default;

    /// Algorithm name reported by the engine
    const ALGORITHM: &'static str;
    /// Error context
    const CONTEXT: &'static str;
    /// Whether framing draws random bytes
    const RANDOM_PADDING: bool;

    /// Frame `key` so its length is a multiple of the block size
    fn encode(key: &[u8], random: Option<&SharedRandom>) -> Result<SecretVec>;

    /// Locate the key inside a recovered frame as `(valid, offset, length)`
    ///
    /// Validity is folded into the checksum comparison by the caller.
    fn decode(frame: &[u8]) -> (Choice, usize, usize);
}

/// Triple-DES framing: the key itself, a whole number of blocks
#[derive(Debug, Clone, Copy)]
pub struct DesEdePayload;

/// RC2 framing: a length byte, the key and random padding to the block size
#[derive(Debug, Clone, Copy)]
pub struct Rc2Payload;

impl sealed::Sealed for DesEdePayload {}
impl sealed::Sealed for Rc2Payload {}

impl Payload for DesEdePayload {
    type Engine = DesEde;

    const ALGORITHM: &'static str = "DESede";
    const CONTEXT: &'static str = "DESedeWrap";
    const RANDOM_PADDING: bool = false;

    fn encode(key: &[u8], _random: Option<&SharedRandom>) -> Result<SecretVec> {
        validate::multiple_of(Self::CONTEXT, key.len(), CMS_WRAP_IV_SIZE, CMS_WRAP_IV_SIZE)?;
        Ok(SecretVec::from_slice(key))
    }

    fn decode(frame: &[u8]) -> (Choice, usize, usize) {
        (Choice::from(1), 0, frame.len())
    }
}

impl Payload for Rc2Payload {
    type Engine = Rc2;

    const ALGORITHM: &'static str = "RC2";
    const CONTEXT: &'static str = "RC2Wrap";
    const RANDOM_PADDING: bool = true;

    fn encode(key: &[u8], random: Option<&SharedRandom>) -> Result<SecretVec> {
        if key.is_empty() || key.len() > u8::MAX as usize {
            return Err(CipherError::InvalidInputLength {
                context: Self::CONTEXT,
                actual: key.len(),
            }
            .into());
        }

        let framed = key.len() + 1;
        let total = framed.div_ceil(CMS_WRAP_IV_SIZE) * CMS_WRAP_IV_SIZE;
        let mut frame = SecretVec::zeroed(total);
        let buf = frame.as_mut_slice();
        buf[0] = key.len() as u8;
        buf[1..framed].copy_from_slice(key);
        if let Some(random) = random {
            random.borrow_mut().fill_bytes(&mut buf[framed..]);
        }
        Ok(frame)
    }

    /// The key must fit the frame with at most one block less a byte of padding
    fn decode(frame: &[u8]) -> (Choice, usize, usize) {
        let len = frame[0] as u32;
        let room = (frame.len() - 1) as u32;
        let fits = !len.ct_gt(&room);
        let short_pad = !room.ct_gt(&(len + CMS_WRAP_IV_SIZE as u32 - 1));
        let valid = fits & short_pad;
        (valid, 1, u32::conditional_select(&0, &len, valid) as usize)
    }
}

/// CMS key wrap over the engine chosen by `P`
pub struct CmsWrap<P: Payload> {
    cbc: Cbc<P::Engine>,
    iv: [u8; CMS_WRAP_IV_SIZE],
    random: Option<SharedRandom>,
    wrapping: bool,
    initialized: bool,
    payload: PhantomData<P>,
}

/// Triple-DES key wrap (RFC 3217 section 3)
pub type DesEdeWrap = CmsWrap<DesEdePayload>;

/// RC2 key wrap (RFC 3217 section 4)
pub type Rc2Wrap = CmsWrap<Rc2Payload>;

fn checksum(data: &[u8]) -> [u8; CMS_KEY_CHECKSUM_SIZE] {
    let mut digest = Sha1::digest(data);
    let mut out = [0u8; CMS_KEY_CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CMS_KEY_CHECKSUM_SIZE]);
    digest.zeroize();
    out
}

impl<P: Payload> CmsWrap<P> {
    pub fn new() -> Self {
        Self {
            cbc: Cbc::new(P::Engine::default()),
            iv: [0u8; CMS_WRAP_IV_SIZE],
            random: None,
            wrapping: false,
            initialized: false,
            payload: PhantomData,
        }
    }

    fn rechain(&mut self, direction: Direction, iv: &[u8]) -> Result<()> {
        self.cbc.init(direction, CipherParameters::iv_only(iv))
    }
}

impl<P: Payload> Default for CmsWrap<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Payload> Wrapper for CmsWrap<P> {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(P::ALGORITHM)
    }

    /// A key (or `Rc2Parameters`) for either direction; an explicit IV only
    /// when wrapping. Without one, wrapping draws a random IV here.
    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        self.initialized = false;
        let (params, random) = split_random(params);

        let (key, iv) = match params {
            CipherParameters::WithIv(with_iv) => {
                if !direction.is_encrypt() {
                    return Err(validate::wrong_parameter(P::CONTEXT, "key without an IV for unwrapping"));
                }
                validate::iv_length(P::CONTEXT, with_iv.iv().len(), CMS_WRAP_IV_SIZE)?;
                let (inner, iv) = with_iv.into_parts();
                let inner = inner.ok_or_else(|| validate::wrong_parameter(P::CONTEXT, "ParametersWithIv(KeyParameter)"))?;
                (inner, Some(iv))
            }
            other => (other, None),
        };
        trace!("{} init: {:?}, caller IV: {}", P::CONTEXT, direction, iv.is_some());

        self.random = None;
        if direction.is_encrypt() {
            if iv.is_none() || P::RANDOM_PADDING {
                self.random = Some(random_or_default(P::CONTEXT, random)?);
            }
            match (iv, &self.random) {
                (Some(iv), _) => self.iv.copy_from_slice(iv.as_slice()),
                (None, Some(random)) => random.borrow_mut().fill_bytes(&mut self.iv),
                (None, None) => {}
            }
        }

        self.cbc.init(direction, CipherParameters::with_iv(key, &CMS_WRAP_IV))?;
        self.wrapping = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn wrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<Vec<u8>> {
        validate::initialized(P::CONTEXT, self.initialized)?;
        check_direction(P::CONTEXT, self.wrapping, true)?;
        input_window(P::CONTEXT, input, in_off, len)?;

        let frame = P::encode(&input[in_off..in_off + len], self.random.as_ref())?;
        let mut out = Vec::with_capacity(CMS_WRAP_IV_SIZE + frame.len() + CMS_KEY_CHECKSUM_SIZE);
        out.extend_from_slice(&self.iv);
        out.extend_from_slice(frame.as_slice());
        out.extend_from_slice(&checksum(frame.as_slice()));

        let iv = self.iv;
        self.rechain(Direction::Encrypt, &iv)?;
        cbc_in_place(&mut self.cbc, &mut out[CMS_WRAP_IV_SIZE..])?;

        out.reverse();
        self.rechain(Direction::Encrypt, &CMS_WRAP_IV)?;
        cbc_in_place(&mut self.cbc, &mut out)?;
        Ok(out)
    }

    fn unwrap(&mut self, input: &[u8], in_off: usize, len: usize) -> Result<SecretVec> {
        validate::initialized(P::CONTEXT, self.initialized)?;
        check_direction(P::CONTEXT, self.wrapping, false)?;
        input_window(P::CONTEXT, input, in_off, len)?;
        validate::multiple_of(
            P::CONTEXT,
            len,
            CMS_WRAP_IV_SIZE,
            2 * CMS_WRAP_IV_SIZE + CMS_KEY_CHECKSUM_SIZE,
        )?;

        let mut buf = SecretVec::from_slice(&input[in_off..in_off + len]);
        let data = buf.as_mut_slice();
        self.rechain(Direction::Decrypt, &CMS_WRAP_IV)?;
        cbc_in_place(&mut self.cbc, data)?;

        data.reverse();
        let mut iv = [0u8; CMS_WRAP_IV_SIZE];
        iv.copy_from_slice(&data[..CMS_WRAP_IV_SIZE]);
        self.rechain(Direction::Decrypt, &iv)?;
        iv.zeroize();
        cbc_in_place(&mut self.cbc, &mut data[CMS_WRAP_IV_SIZE..])?;

        let (frame, cks) = data[CMS_WRAP_IV_SIZE..].split_at(len - CMS_WRAP_IV_SIZE - CMS_KEY_CHECKSUM_SIZE);
        let (framed_ok, key_off, key_len) = P::decode(frame);
        let valid = ct_eq_choice(checksum(frame), cks) & framed_ok;

        if !bool::from(valid) {
            debug!("{}: checksum verification failed", P::CONTEXT);
            return Err(Error::invalid_ciphertext(P::CONTEXT));
        }
        Ok(SecretVec::from_slice(&frame[key_off..key_off + key_len]))
    }
}

impl<P: Payload> Drop for CmsWrap<P> {
    fn drop(&mut self) {
        self.iv.zeroize();
    }
}
