//! Constant-time operations to prevent timing attacks

use subtle::{Choice, ConstantTimeEq, ConstantTimeGreater};

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise.
/// This function runs in constant time regardless of the input values.
/// Slices of different length compare unequal; the length itself is public.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    ct_eq_choice(a, b).into()
}

/// Constant-time equality check that returns a Choice (0 or 1)
pub fn ct_eq_choice<A, B>(a: A, b: B) -> Choice
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return Choice::from(0);
    }

    a.ct_eq(b)
}

/// Returns a Choice that is set when every byte of `data` is zero
pub fn ct_is_zero(data: &[u8]) -> Choice {
    let mut acc = 0u8;
    for &b in data {
        acc |= b;
    }
    acc.ct_eq(&0)
}

/// Returns a Choice that is set when `a > b`
pub fn ct_gt(a: u32, b: u32) -> Choice {
    a.ct_gt(&b)
}
