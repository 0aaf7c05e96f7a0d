//! Memory ordering helpers
//!
//! The bitsliced engines wrap their S-box layers in compiler fences so the
//! optimizer cannot reintroduce data-dependent shortcuts across them.

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::barrier;

    #[test]
    fn test_fence_is_callable_in_sequence() {
        let mut total = 0u32;
        for i in 0..4 {
            total += i;
            barrier::compiler_fence_seq_cst();
        }
        assert_eq!(total, 6);
    }
}
