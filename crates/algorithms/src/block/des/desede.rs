use alloc::borrow::Cow;

use api::{BlockCipher, CipherParameters, Direction};
use byteorder::{BigEndian, ByteOrder};
use log::trace;
use params::utils::symmetric::{DESEDE_2KEY_SIZE, DESEDE_3KEY_SIZE, DES_BLOCK_SIZE, DES_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::Des;
use crate::error::{validate, Result};
use crate::keying::expect_key;

const ALGORITHM: &str = "DESede";

/// Triple DES in encrypt-decrypt-encrypt form
///
/// A 16-byte key is two-key triple DES (`k3 = k1`); a 24-byte key uses three
/// independent keys. The stages are stored in processing order, so
/// decryption is `D(k1, E(k2, D(k3, block)))`.
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct DesEde {
    stages: [Des; 3],
    encrypting: bool,
    initialized: bool,
}

impl DesEde {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BlockCipher for DesEde {
    fn algorithm_name(&self) -> Cow<'static, str> {
        Cow::Borrowed(ALGORITHM)
    }

    fn init(&mut self, direction: Direction, params: CipherParameters) -> Result<()> {
        let key = expect_key(ALGORITHM, params)?;
        trace!("{} init: {:?}, {}-byte key", ALGORITHM, direction, key.len());
        validate::key_size(ALGORITHM, key.len(), &[DESEDE_2KEY_SIZE, DESEDE_3KEY_SIZE])?;

        let key = key.key();
        let k1 = &key[..DES_KEY_SIZE];
        let k2 = &key[DES_KEY_SIZE..2 * DES_KEY_SIZE];
        let k3 = if key.len() == DESEDE_3KEY_SIZE {
            &key[2 * DES_KEY_SIZE..]
        } else {
            k1
        };

        self.initialized = false;
        self.stages = if direction.is_encrypt() {
            [Des::keyed(k1, true), Des::keyed(k2, false), Des::keyed(k3, true)]
        } else {
            [Des::keyed(k3, false), Des::keyed(k2, true), Des::keyed(k1, false)]
        };
        self.encrypting = direction.is_encrypt();
        self.initialized = true;
        Ok(())
    }

    fn block_size(&self) -> usize {
        DES_BLOCK_SIZE
    }

    fn process_block(
        &mut self,
        input: &[u8],
        in_off: usize,
        output: &mut [u8],
        out_off: usize,
    ) -> Result<usize> {
        validate::initialized(ALGORITHM, self.initialized)?;
        validate::block_io(ALGORITHM, input.len(), in_off, output.len(), out_off, DES_BLOCK_SIZE)?;

        let mut block = BigEndian::read_u64(&input[in_off..]);
        for stage in self.stages.iter() {
            block = stage.crypt(block);
        }
        BigEndian::write_u64(&mut output[out_off..], block);

        Ok(DES_BLOCK_SIZE)
    }

    fn reset(&mut self) {}
}
