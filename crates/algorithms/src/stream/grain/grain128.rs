use params::utils::symmetric::{GRAIN128_IV_SIZE, GRAIN128_KEY_SIZE};
use zeroize::Zeroize;

use super::{sealed, Variant};

/// Grain-128 taps: 128-bit registers, 32 clocks per step
#[derive(Clone, Debug, Default, Zeroize)]
pub struct Grain128Variant;

impl sealed::Sealed for Grain128Variant {}

impl Variant for Grain128Variant {
    const NAME: &'static str = "Grain-128";
    const KEY_SIZE: usize = GRAIN128_KEY_SIZE;
    const IV_SIZE: usize = GRAIN128_IV_SIZE;
    const WIDTH: u32 = 128;
    const CHUNK: u32 = 32;
    const INIT_CLOCKS: u32 = 256;

    fn output(lfsr: u128, nfsr: u128) -> u128 {
        let s = |i: u32| lfsr >> i;
        let b = |i: u32| nfsr >> i;

        let h = (b(12) & s(8))
            ^ (s(13) & s(20))
            ^ (b(95) & s(42))
            ^ (s(60) & s(79))
            ^ (b(12) & b(95) & s(95));

        h ^ s(93) ^ b(2) ^ b(15) ^ b(36) ^ b(45) ^ b(64) ^ b(73) ^ b(89)
    }

    fn lfsr_feedback(lfsr: u128) -> u128 {
        let s = |i: u32| lfsr >> i;
        s(0) ^ s(7) ^ s(38) ^ s(70) ^ s(81) ^ s(96)
    }

    fn nfsr_feedback(nfsr: u128) -> u128 {
        let b = |i: u32| nfsr >> i;
        b(0) ^ b(26) ^ b(56) ^ b(91) ^ b(96)
            ^ (b(3) & b(67))
            ^ (b(11) & b(13))
            ^ (b(17) & b(18))
            ^ (b(27) & b(59))
            ^ (b(40) & b(48))
            ^ (b(61) & b(65))
            ^ (b(68) & b(84))
    }
}
