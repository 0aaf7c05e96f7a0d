use params::utils::symmetric::{GRAINV1_IV_SIZE, GRAINV1_KEY_SIZE};
use zeroize::Zeroize;

use super::{sealed, Variant};

/// Grain v1 taps: 80-bit registers, 16 clocks per step
#[derive(Clone, Debug, Default, Zeroize)]
pub struct GrainV1Variant;

impl sealed::Sealed for GrainV1Variant {}

impl Variant for GrainV1Variant {
    const NAME: &'static str = "Grain v1";
    const KEY_SIZE: usize = GRAINV1_KEY_SIZE;
    const IV_SIZE: usize = GRAINV1_IV_SIZE;
    const WIDTH: u32 = 80;
    const CHUNK: u32 = 16;
    const INIT_CLOCKS: u32 = 160;

    fn output(lfsr: u128, nfsr: u128) -> u128 {
        let s = |i: u32| lfsr >> i;
        let b = |i: u32| nfsr >> i;

        let (x0, x1, x2, x3, x4) = (s(3), s(25), s(46), s(64), b(63));
        let h = x1
            ^ x4
            ^ (x0 & x3)
            ^ (x2 & x3)
            ^ (x3 & x4)
            ^ (x0 & x1 & x2)
            ^ (x0 & x2 & x3)
            ^ (x0 & x2 & x4)
            ^ (x1 & x2 & x4)
            ^ (x2 & x3 & x4);

        h ^ b(1) ^ b(2) ^ b(4) ^ b(10) ^ b(31) ^ b(43) ^ b(56)
    }

    fn lfsr_feedback(lfsr: u128) -> u128 {
        let s = |i: u32| lfsr >> i;
        s(62) ^ s(51) ^ s(38) ^ s(23) ^ s(13) ^ s(0)
    }

    fn nfsr_feedback(nfsr: u128) -> u128 {
        let b = |i: u32| nfsr >> i;
        b(62) ^ b(60) ^ b(52) ^ b(45) ^ b(37) ^ b(33) ^ b(28) ^ b(21) ^ b(14) ^ b(9) ^ b(0)
            ^ (b(63) & b(60))
            ^ (b(37) & b(33))
            ^ (b(15) & b(9))
            ^ (b(60) & b(52) & b(45))
            ^ (b(33) & b(28) & b(21))
            ^ (b(63) & b(45) & b(28) & b(9))
            ^ (b(60) & b(52) & b(37) & b(33))
            ^ (b(63) & b(60) & b(21) & b(15))
            ^ (b(63) & b(60) & b(52) & b(45) & b(37))
            ^ (b(33) & b(28) & b(21) & b(15) & b(9))
            ^ (b(52) & b(45) & b(37) & b(33) & b(28) & b(21))
    }
}
