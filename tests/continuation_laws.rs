//! Property-based tests for `ContinuationMonad<A, R>` laws.
//!
//! This module verifies, by comparing the results of `run`, that:
//!
//! - **Functor Laws**: identity and composition
//! - **Monad Laws**: left identity, right identity, associativity
//!
//! hold under trampolined evaluation.

#![cfg(feature = "control")]

use proptest::prelude::*;
use stackless::control::ContinuationMonad;

// =============================================================================
// Helper Functions for Tests
// =============================================================================

fn add_one(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn multiply_two(n: i32) -> i32 {
    n.wrapping_mul(2)
}

fn cont_add_one(x: i32) -> ContinuationMonad<i32, i32> {
    ContinuationMonad::pure(x.wrapping_add(1))
}

fn cont_multiply_two(x: i32) -> ContinuationMonad<i32, i32> {
    ContinuationMonad::pure(x.wrapping_mul(2))
}

/// A computation that itself defers through several binds.
fn cont_deferred(x: i32) -> ContinuationMonad<i32, i32> {
    ContinuationMonad::pure(x)
        .bind(|y| ContinuationMonad::pure(y.wrapping_sub(3)))
        .bind(|y| ContinuationMonad::pure(y.wrapping_mul(5)))
}

// =============================================================================
// Functor Laws
// =============================================================================

proptest! {
    /// Functor Identity Law: m.map(|x| x) == m
    #[test]
    fn prop_functor_identity(value: i32) {
        let computation: ContinuationMonad<i32, i32> = ContinuationMonad::pure(value);
        prop_assert_eq!(computation.map(|x| x).run(), computation.run());
    }

    /// Functor Composition Law: m.map(f).map(g) == m.map(|x| g(f(x)))
    #[test]
    fn prop_functor_composition(value: i32) {
        let computation: ContinuationMonad<i32, i32> = ContinuationMonad::pure(value);
        let left = computation.map(add_one).map(multiply_two);
        let right = computation.map(|x| multiply_two(add_one(x)));
        prop_assert_eq!(left.run(), right.run());
    }
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    /// Left Identity Law: pure(a).bind(f) == f(a)
    #[test]
    fn prop_monad_left_identity(value: i32) {
        let left = ContinuationMonad::pure(value).bind(cont_deferred);
        let right = cont_deferred(value);
        prop_assert_eq!(left.run(), right.run());
    }

    /// Right Identity Law: m.bind(pure) == m
    #[test]
    fn prop_monad_right_identity(value: i32) {
        let computation = cont_deferred(value);
        let left = computation.bind(ContinuationMonad::pure);
        prop_assert_eq!(left.run(), computation.run());
    }

    /// Associativity Law: m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))
    #[test]
    fn prop_monad_associativity(value: i32) {
        let computation = cont_deferred(value);
        let left = computation.bind(cont_add_one).bind(cont_multiply_two);
        let right = computation.bind(|x| cont_add_one(x).bind(cont_multiply_two));
        prop_assert_eq!(left.run(), right.run());
    }
}
