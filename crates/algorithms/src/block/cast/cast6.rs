use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{CAST6_BLOCK_SIZE, CAST6_MAX_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::{f1, f2, f3};
use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "CAST6";

const QUAD_ROUNDS: usize = 12;

/// Masking and rotation constants for the 24 key-schedule octets
const fn schedule_constants() -> ([[u32; 8]; 24], [[u32; 8]; 24]) {
    let mut tm = [[0u32; 8]; 24];
    let mut tr = [[0u32; 8]; 24];
    let mut cm: u32 = 0x5A82_7999;
    let mut cr: u32 = 19;
    let mut i = 0;
    while i < 24 {
        let mut j = 0;
        while j < 8 {
            tm[i][j] = cm;
            cm = cm.wrapping_add(0x6ED9_EBA1);
            tr[i][j] = cr;
            cr = (cr + 17) & 0x1f;
            j += 1;
        }
        i += 1;
    }
    (tm, tr)
}

const CONSTANTS: ([[u32; 8]; 24], [[u32; 8]; 24]) = schedule_constants();

/// One forward octave over the key words `ABCDEFGH`
fn octave(k: &mut [u32; 8], tm: &[u32; 8], tr: &[u32; 8]) {
    k[6] ^= f1(k[7], tm[0], tr[0]);
    k[5] ^= f2(k[6], tm[1], tr[1]);
    k[4] ^= f3(k[5], tm[2], tr[2]);
    k[3] ^= f1(k[4], tm[3], tr[3]);
    k[2] ^= f2(k[3], tm[4], tr[4]);
    k[1] ^= f3(k[2], tm[5], tr[5]);
    k[0] ^= f1(k[1], tm[6], tr[6]);
    k[7] ^= f2(k[0], tm[7], tr[7]);
}

/// CAST-256 block cipher (RFC 2612)
///
/// Keys up to 32 bytes are zero-padded to 256 bits.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Cast6 {
    masking: [[u32; 4]; QUAD_ROUNDS],
    rotation: [[u32; 4]; QUAD_ROUNDS],
    encrypting: bool,
    initialized: bool,
}

impl Cast6 {
    pub fn new() -> Self {
        Self {
            masking: [[0u32; 4]; QUAD_ROUNDS],
            rotation: [[0u32; 4]; QUAD_ROUNDS],
            encrypting: false,
            initialized: false,
        }
    }

    fn expand_key(&mut self, key: &[u8]) -> Result<()> {
        validate::key_range(ALGORITHM, key.len(), 1, CAST6_MAX_KEY_SIZE)?;

        let mut padded = [0u8; 32];
        padded[..key.len()].copy_from_slice(key);
        let mut k = [0u32; 8];
        BigEndian::read_u32_into(&padded, &mut k);

        let (tm, tr) = &CONSTANTS;
        for i in 0..QUAD_ROUNDS {
            octave(&mut k, &tm[2 * i], &tr[2 * i]);
            octave(&mut k, &tm[2 * i + 1], &tr[2 * i + 1]);
            self.rotation[i] = [k[0] & 0x1f, k[2] & 0x1f, k[4] & 0x1f, k[6] & 0x1f];
            self.masking[i] = [k[7], k[5], k[3], k[1]];
        }

        padded.zeroize();
        k.zeroize();
        Ok(())
    }

    #[inline(always)]
    fn quad(&self, i: usize, b: &mut [u32; 4]) {
        let (km, kr) = (&self.masking[i], &self.rotation[i]);
        b[2] ^= f1(b[3], km[0], kr[0]);
        b[1] ^= f2(b[2], km[1], kr[1]);
        b[0] ^= f3(b[1], km[2], kr[2]);
        b[3] ^= f1(b[0], km[3], kr[3]);
    }

    #[inline(always)]
    fn inverse_quad(&self, i: usize, b: &mut [u32; 4]) {
        let (km, kr) = (&self.masking[i], &self.rotation[i]);
        b[3] ^= f1(b[0], km[3], kr[3]);
        b[0] ^= f3(b[1], km[2], kr[2]);
        b[1] ^= f2(b[2], km[1], kr[1]);
        b[2] ^= f1(b[3], km[0], kr[0]);
    }

    fn encrypt_block(&self, b: &mut [u32; 4]) {
        for i in 0..QUAD_ROUNDS / 2 {
            self.quad(i, b);
        }
        for i in QUAD_ROUNDS / 2..QUAD_ROUNDS {
            self.inverse_quad(i, b);
        }
    }

    fn decrypt_block(&self, b: &mut [u32; 4]) {
        for i in (QUAD_ROUNDS / 2..QUAD_ROUNDS).rev() {
            self.quad(i, b);
        }
        for i in (0..QUAD_ROUNDS / 2).rev() {
            self.inverse_quad(i, b);
        }
    }
}

impl Default for Cast6 {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCipher for Cast6 {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());

        self.initialized = false;
        self.expand_key(key.key())?;
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        CAST6_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, CAST6_BLOCK_SIZE)?;

        let mut b = [0u32; 4];
        BigEndian::read_u32_into(&input[in_off..in_off + CAST6_BLOCK_SIZE], &mut b);
        if self.encrypting {
            self.encrypt_block(&mut b);
        } else {
            self.decrypt_block(&mut b);
        }
        BigEndian::write_u32_into(&b, &mut output[out_off..out_off + CAST6_BLOCK_SIZE]);

        Ok(CAST6_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
