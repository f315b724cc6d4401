//! Factorial in continuation-passing style.
//!
//! `factorial(n)` is defined as `n * factorial(n - 1)` and `1` for `n <= 1`.
//! The recursive call is bound through [`ContinuationMonad::bind`], so the
//! pending multiplications live on the heap as continuations rather than as
//! native stack frames.

use crate::control::ContinuationMonad;

use super::error::RecursionError;

type FactorialResult = Result<u64, RecursionError>;

/// Computes `n!` with checked `u64` arithmetic.
///
/// Returns [`RecursionError::NumericOverflow`] as soon as a product does
/// not fit in a `u64`; it never wraps. Any `n` is safe for the native
/// stack, including ones whose factorial is far out of range.
///
/// # Examples
///
/// ```rust
/// use stackless::recursion::{RecursionError, factorial};
///
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(10), Ok(3_628_800));
/// assert_eq!(factorial(21), Err(RecursionError::NumericOverflow { operand: 21 }));
/// ```
pub fn factorial(n: u64) -> Result<u64, RecursionError> {
    factorial_cps(n).run()
}

fn factorial_cps(n: u64) -> ContinuationMonad<FactorialResult, FactorialResult> {
    if n <= 1 {
        return ContinuationMonad::pure(Ok(1));
    }

    ContinuationMonad::pure(n - 1)
        .bind(factorial_cps)
        .map(move |partial: FactorialResult| partial.and_then(|product| multiply(n, product)))
}

fn multiply(operand: u64, product: u64) -> FactorialResult {
    operand.checked_mul(product).ok_or_else(|| {
        tracing::debug!(operand, product, "factorial overflowed u64");
        RecursionError::NumericOverflow { operand }
    })
}
