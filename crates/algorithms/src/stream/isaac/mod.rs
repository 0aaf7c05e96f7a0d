//! ISAAC stream cipher
//!
//! Bob Jenkins' generator keyed through its seeding routine. The key is
//! read as little-endian words into the result array, zero padded, before
//! the standard two-pass seeding; keystream words are emitted big-endian.
//! ISAAC takes no IV.

use alloc::borrow::Cow;

use api::{CipherParameters, StreamCipher};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use common::SecretVec;
use log::trace;
use params::utils::symmetric::{GOLDEN_RATIO, ISAAC_MAX_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "ISAAC";

const SIZE: usize = 256;
const STREAM_BYTES: usize = SIZE * 4;

/// ISAAC stream cipher
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Isaac {
    mem: [u32; SIZE],
    results: [u32; SIZE],
    a: u32,
    b: u32,
    c: u32,
    keystream: [u8; STREAM_BYTES],
    idx: usize,
    key: SecretVec,
    initialized: bool,
}

fn mix(x: &mut [u32; 8]) {
    x[0] ^= x[1] << 11;
    x[3] = x[3].wrapping_add(x[0]);
    x[1] = x[1].wrapping_add(x[2]);
    x[1] ^= x[2] >> 2;
    x[4] = x[4].wrapping_add(x[1]);
    x[2] = x[2].wrapping_add(x[3]);
    x[2] ^= x[3] << 8;
    x[5] = x[5].wrapping_add(x[2]);
    x[3] = x[3].wrapping_add(x[4]);
    x[3] ^= x[4] >> 16;
    x[6] = x[6].wrapping_add(x[3]);
    x[4] = x[4].wrapping_add(x[5]);
    x[4] ^= x[5] << 10;
    x[7] = x[7].wrapping_add(x[4]);
    x[5] = x[5].wrapping_add(x[6]);
    x[5] ^= x[6] >> 4;
    x[0] = x[0].wrapping_add(x[5]);
    x[6] = x[6].wrapping_add(x[7]);
    x[6] ^= x[7] << 8;
    x[1] = x[1].wrapping_add(x[6]);
    x[7] = x[7].wrapping_add(x[0]);
    x[7] ^= x[0] >> 9;
    x[2] = x[2].wrapping_add(x[7]);
    x[0] = x[0].wrapping_add(x[1]);
}

impl Isaac {
    pub fn new() -> Self {
        Self {
            mem: [0u32; SIZE],
            results: [0u32; SIZE],
            a: 0,
            b: 0,
            c: 0,
            keystream: [0u8; STREAM_BYTES],
            idx: 0,
            key: SecretVec::empty(),
            initialized: false,
        }
    }

    /// Refill `results` with the next 256 words
    fn generate(&mut self) {
        self.c = self.c.wrapping_add(1);
        self.b = self.b.wrapping_add(self.c);

        for i in 0..SIZE {
            let x = self.mem[i];
            self.a ^= match i & 3 {
                0 => self.a << 13,
                1 => self.a >> 6,
                2 => self.a << 2,
                _ => self.a >> 16,
            };
            self.a = self.a.wrapping_add(self.mem[(i + 128) & 0xff]);

            let y = self.mem[((x >> 2) & 0xff) as usize]
                .wrapping_add(self.a)
                .wrapping_add(self.b);
            self.mem[i] = y;
            self.b = self.mem[((y >> 10) & 0xff) as usize].wrapping_add(x);
            self.results[i] = self.b;
        }
    }

    fn setup(&mut self) {
        self.results = [0u32; SIZE];
        self.mem = [0u32; SIZE];
        self.a = 0;
        self.b = 0;
        self.c = 0;

        let key = self.key.as_slice();
        for (word, chunk) in self.results.iter_mut().zip(key.chunks(4)) {
            let mut padded = [0u8; 4];
            padded[..chunk.len()].copy_from_slice(chunk);
            *word = LittleEndian::read_u32(&padded);
        }

        let mut x = [GOLDEN_RATIO; 8];
        for _ in 0..4 {
            mix(&mut x);
        }

        for pass in 0..2 {
            for j in (0..SIZE).step_by(8) {
                let source = if pass == 0 { &self.results } else { &self.mem };
                for (k, v) in x.iter_mut().enumerate() {
                    *v = v.wrapping_add(source[j + k]);
                }
                mix(&mut x);
                self.mem[j..j + 8].copy_from_slice(&x);
            }
        }
        x.zeroize();

        // Seeding ends with one discarded batch
        self.generate();
        self.idx = 0;
    }

    #[inline(always)]
    fn next_byte(&mut self) -> u8 {
        if self.idx == 0 {
            self.generate();
            BigEndian::write_u32_into(&self.results, &mut self.keystream);
        }
        let b = self.keystream[self.idx];
        self.idx = (self.idx + 1) % STREAM_BYTES;
        b
    }
}

impl Default for Isaac {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCipher for Isaac {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {}-byte key", ALGORITHM, key.len());
        validate::key_range(ALGORITHM, key.len(), 1, ISAAC_MAX_KEY_SIZE)?;

        self.key = SecretVec::from_slice(key.key());
        self.setup();
        self.initialized = true;
        Ok(())
    }

    fn return_byte(&mut self, input: u8) -> Result<u8> {
        validate::initialized(ALGORITHM, self.initialized)?;
        Ok(input ^ self.next_byte())
    }

    fn process_bytes(
        &mut self,
        input: &[u8],
        in_off: usize,
        len: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::stream_io(ALGORITHM, input.len(), in_off, len, output.len(), out_off)?;

        for (o, i) in output[out_off..out_off + len].iter_mut().zip(&input[in_off..in_off + len]) {
            *o = i ^ self.next_byte();
        }
        Ok(len)
    }

    fn reset(&mut self) {
        if self.initialized {
            self.setup();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keystream(key: &[u8], len: usize) -> Vec<u8> {
        let mut isaac = Isaac::new();
        isaac.init(CipherParameters::key(key)).unwrap();
        let mut out = vec![0u8; len];
        isaac.process_bytes(&vec![0u8; len], 0, len, &mut out, 0).unwrap();
        out
    }

    #[test]
    fn test_known_keystreams() {
        assert_eq!(hex::encode(keystream(&[0u8; 4], 16)), "f650e4c8e448e96d98db2fb4f5fad54f");
        assert_eq!(
            hex::encode(keystream(&(0u8..16).collect::<Vec<_>>(), 16)),
            "cabb1abf72320fe5b9d6263c0832e189"
        );
        assert_eq!(hex::encode(keystream(&[0xff; 4], 16)), "de3b3f3c19e0629c1fc8b7836695d523");
    }

    #[test]
    fn test_zero_padding_of_key_words() {
        assert_eq!(keystream(&[0u8; 4], 32), keystream(&[0u8; 16], 32));
        assert_eq!(keystream(&[7u8], 32), keystream(&[7u8, 0, 0, 0], 32));
    }

    #[test]
    fn test_crosses_batch_boundary_and_resets() {
        let mut isaac = Isaac::new();
        isaac.init(CipherParameters::key(b"isaac key")).unwrap();
        let mut first = vec![0u8; 3000];
        isaac.process_bytes(&vec![0u8; 3000], 0, 3000, &mut first, 0).unwrap();

        isaac.reset();
        let again: Vec<u8> = (0..3000).map(|_| isaac.return_byte(0).unwrap()).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn test_parameter_checks() {
        let mut isaac = Isaac::new();
        assert!(isaac.init(CipherParameters::key(&[])).is_err());
        assert!(isaac.init(CipherParameters::key(&[0u8; 1025])).is_err());
        assert!(isaac.init(CipherParameters::key(&[0u8; 1024])).is_ok());
        assert!(isaac
            .init(CipherParameters::with_iv(CipherParameters::key(&[0u8; 16]), &[0u8; 8]))
            .is_err());
    }
}
