//! Control structures for stack-safe recursion.
//!
//! This module provides:
//!
//! - [`Bounce`]: One step of a trampolined computation, driven by [`run_trampoline`]
//! - [`ContinuationMonad`]: A continuation monad whose binds unwind through the trampoline
//!
//! # Examples
//!
//! ## Stack-Safe Recursion
//!
//! ```rust
//! use stackless::control::{Bounce, run_trampoline};
//!
//! fn factorial(n: u64, accumulator: u64) -> Bounce<u64> {
//!     if n <= 1 {
//!         Bounce::done(accumulator)
//!     } else {
//!         Bounce::more(move || factorial(n - 1, n * accumulator))
//!     }
//! }
//!
//! assert_eq!(run_trampoline(factorial(10, 1)), 3628800);
//! ```
//!
//! ## Continuation-Passing Style
//!
//! ```rust
//! use stackless::control::{bind, pure, run};
//!
//! let computation = bind(&pure::<i32, i32>(20), |x| pure(x + 22));
//! assert_eq!(run(&computation), 42);
//! ```

mod continuation;
mod trampoline;

pub use continuation::{Continuation, ContinuationMonad, bind, pure, run};
pub use trampoline::{Bounce, Thunk, done, more, run_trampoline};
