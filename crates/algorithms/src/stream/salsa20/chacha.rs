use alloc::borrow::Cow;
use alloc::format;

use byteorder::{ByteOrder, LittleEndian};
use zeroize::Zeroize;

use super::{Core, SIGMA, TAU};

/// ChaCha state layout and double-round
///
/// Constants in words 0-3, key in 4-11, counter in 12-13 and IV in 14-15.
#[derive(Clone, Debug, Default, Zeroize)]
pub struct ChaChaCore;

#[inline(always)]
fn quarter_round(x: &mut [u32; 16], a: usize, b: usize, c: usize, d: usize) {
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(16);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(12);
    x[a] = x[a].wrapping_add(x[b]);
    x[d] = (x[d] ^ x[a]).rotate_left(8);
    x[c] = x[c].wrapping_add(x[d]);
    x[b] = (x[b] ^ x[c]).rotate_left(7);
}

impl Core for ChaChaCore {
    const NAME: &'static str = "ChaCha";
    const COUNTER: usize = 12;

    fn layout(state: &mut [u32; 16], key: &[u8], iv: &[u8]) {
        let (constants, k2) = if key.len() == 32 { (SIGMA, &key[16..]) } else { (TAU, key) };

        LittleEndian::read_u32_into(constants, &mut state[0..4]);
        LittleEndian::read_u32_into(&key[..16], &mut state[4..8]);
        LittleEndian::read_u32_into(&k2[..16], &mut state[8..12]);
        state[12] = 0;
        state[13] = 0;
        LittleEndian::read_u32_into(iv, &mut state[14..16]);
    }

    fn permute(x: &mut [u32; 16], rounds: usize) {
        for _ in 0..rounds / 2 {
            // Column rounds
            quarter_round(x, 0, 4, 8, 12);
            quarter_round(x, 1, 5, 9, 13);
            quarter_round(x, 2, 6, 10, 14);
            quarter_round(x, 3, 7, 11, 15);

            // Diagonal rounds
            quarter_round(x, 0, 5, 10, 15);
            quarter_round(x, 1, 6, 11, 12);
            quarter_round(x, 2, 7, 8, 13);
            quarter_round(x, 3, 4, 9, 14);
        }
    }

    fn name(rounds: usize) -> Cow<'static, str> {
        Cow::Owned(format!("{}{}", Self::NAME, rounds))
    }
}
