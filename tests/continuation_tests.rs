//! Unit tests for `ContinuationMonad<A, R>`.
//!
//! Tests cover:
//! - pure, bind, map and run
//! - Free-function entry points
//! - Applying one computation with several continuations
//! - Stack safety of recursive binds and of chains built in a loop

#![cfg(feature = "control")]

use rstest::rstest;
use stackless::control::{Bounce, ContinuationMonad, bind, pure, run};

// =============================================================================
// Basic Operations
// =============================================================================

#[rstest]
fn continuation_pure_passes_value() {
    let computation: ContinuationMonad<i32, i32> = ContinuationMonad::pure(42);
    assert_eq!(computation.run(), 42);
}

#[rstest]
fn continuation_bind_sequences() {
    let computation: ContinuationMonad<i32, i32> =
        ContinuationMonad::pure(21).bind(|x| ContinuationMonad::pure(x * 2));
    assert_eq!(computation.run(), 42);
}

#[rstest]
fn continuation_bind_changes_type() {
    let computation: ContinuationMonad<String, String> =
        ContinuationMonad::pure(42).bind(|x: i32| ContinuationMonad::pure(x.to_string()));
    assert_eq!(computation.run(), "42");
}

#[rstest]
fn continuation_flat_map_and_and_then_are_bind() {
    let base: ContinuationMonad<i32, i32> = ContinuationMonad::pure(5);
    let via_flat_map = base.flat_map(|x| ContinuationMonad::pure(x + 1));
    let via_and_then = base.and_then(|x| ContinuationMonad::pure(x + 1));
    assert_eq!(via_flat_map.run(), 6);
    assert_eq!(via_and_then.run(), 6);
}

#[rstest]
fn continuation_free_functions() {
    let computation = bind(&pure::<i32, i32>(1), |x| bind(&pure(x + 1), |y| pure(y * 10)));
    assert_eq!(run(&computation), 20);
}

#[rstest]
fn continuation_run_with_final_continuation() {
    let computation: ContinuationMonad<i32, String> = ContinuationMonad::pure(7);
    assert_eq!(computation.run_with(|x| format!("<{x}>")), "<7>");
}

#[rstest]
fn continuation_new_can_discard_continuation() {
    // A computation may finish without calling its continuation.
    let computation: ContinuationMonad<i32, i32> = ContinuationMonad::new(|_| Bounce::done(-1));
    let chained = computation.bind(|x| ContinuationMonad::pure(x * 100));
    assert_eq!(chained.run(), -1);
}

// =============================================================================
// Purity
// =============================================================================

#[rstest]
fn continuation_applied_with_different_continuations() {
    let computation: ContinuationMonad<i32, String> =
        ContinuationMonad::pure(3).bind(|x| ContinuationMonad::pure(x * 3));

    let shouted = computation
        .apply(Box::new(|x| Bounce::done(format!("{x}!"))))
        .run();
    let quoted = computation
        .apply(Box::new(|x| Bounce::done(format!("'{x}'"))))
        .run();

    assert_eq!(shouted, "9!");
    assert_eq!(quoted, "'9'");
}

#[rstest]
fn continuation_clone_shares_computation() {
    let computation: ContinuationMonad<i32, i32> = ContinuationMonad::pure(1).map(|x| x + 1);
    let cloned = computation.clone();
    assert_eq!(computation.run(), cloned.run());
}

// =============================================================================
// Stack Safety
// =============================================================================

fn count_up(n: u64) -> ContinuationMonad<u64, u64> {
    if n == 0 {
        ContinuationMonad::pure(0)
    } else {
        ContinuationMonad::pure(n - 1)
            .bind(count_up)
            .bind(|x| ContinuationMonad::pure(x + 1))
    }
}

#[rstest]
fn continuation_recursive_bind_is_stack_safe() {
    assert_eq!(count_up(200_000).run(), 200_000);
}

#[rstest]
fn continuation_recursive_map_is_stack_safe() {
    fn length(n: u64) -> ContinuationMonad<u64, u64> {
        if n == 0 {
            ContinuationMonad::pure(0)
        } else {
            ContinuationMonad::pure(n - 1).bind(length).map(|x| x + 1)
        }
    }

    assert_eq!(length(200_000).run(), 200_000);
}

#[rstest]
fn continuation_iterative_bind_chain_is_stack_safe() {
    let mut computation: ContinuationMonad<u64, u64> = ContinuationMonad::pure(0);
    for _ in 0..100_000 {
        computation = computation.bind(|x| ContinuationMonad::pure(x + 1));
    }
    assert_eq!(computation.run(), 100_000);
    drop(computation);
}

#[rstest]
fn continuation_iterative_map_chain_is_stack_safe() {
    let mut computation: ContinuationMonad<u64, u64> = ContinuationMonad::pure(0);
    for _ in 0..100_000 {
        computation = computation.map(|x| x + 1);
    }
    assert_eq!(computation.run(), 100_000);
    drop(computation);
}

#[rstest]
fn continuation_iterative_chain_drops_without_running() {
    let mut computation: ContinuationMonad<u64, u64> = ContinuationMonad::pure(0);
    for _ in 0..100_000 {
        computation = computation.bind(|x| ContinuationMonad::pure(x + 1));
    }
    drop(computation);
}
