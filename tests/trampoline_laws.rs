//! Property-based tests for the trampoline driver.
//!
//! - **Stack Safety**: deep chains of `More` steps do not overflow the stack
//! - **Equivalence**: driving a chain gives the same result as the plain loop

#![cfg(feature = "control")]

use proptest::prelude::*;
use stackless::control::{Bounce, run_trampoline};

fn sum_down(n: u64, accumulator: u64) -> Bounce<u64> {
    if n == 0 {
        Bounce::done(accumulator)
    } else {
        Bounce::more(move || sum_down(n - 1, accumulator + n))
    }
}

proptest! {
    /// Stack safety: deep recursion using more does not overflow
    #[test]
    fn prop_bounce_stack_safety(depth in 10_000u64..200_000u64) {
        prop_assert_eq!(run_trampoline(sum_down(depth, 0)), depth * (depth + 1) / 2);
    }
}

proptest! {
    /// Equivalence: any number of wrapping More steps yields the wrapped value
    #[test]
    fn prop_bounce_more_is_transparent(value: i64, wrappers in 0usize..1_000) {
        let mut bounce = Bounce::done(value);
        for _ in 0..wrappers {
            let inner = bounce;
            bounce = Bounce::more(move || inner);
        }
        prop_assert_eq!(bounce.run(), value);
    }
}
