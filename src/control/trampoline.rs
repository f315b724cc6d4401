//! Stack-safe recursion via trampolining.
//!
//! This module provides the [`Bounce<T>`] type for expressing recursive
//! computations in a stack-safe manner. Instead of making a native recursive
//! call, a step returns [`Bounce::More`] holding the rest of the work, and the
//! driver [`run_trampoline`] keeps invoking thunks in a loop until it reaches
//! [`Bounce::Done`].
//!
//! # Motivation
//!
//! Rust does not guarantee tail call optimization (TCO). Deeply recursive
//! functions can overflow the stack. Trampolining converts recursion into
//! iteration, so the driver runs in a constant number of native frames no
//! matter how many steps the computation takes.
//!
//! # Examples
//!
//! ## Factorial
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
//! assert_eq!(run_trampoline(factorial(20, 1)), 2_432_902_008_176_640_000);
//! ```
//!
//! ## Mutual Recursion
//!
//! ```rust
//! use stackless::control::Bounce;
//!
//! fn is_even(n: u64) -> Bounce<bool> {
//!     if n == 0 {
//!         Bounce::done(true)
//!     } else {
//!         Bounce::more(move || is_odd(n - 1))
//!     }
//! }
//!
//! fn is_odd(n: u64) -> Bounce<bool> {
//!     if n == 0 {
//!         Bounce::done(false)
//!     } else {
//!         Bounce::more(move || is_even(n - 1))
//!     }
//! }
//!
//! assert!(is_even(1_000_000).run());
//! ```

use static_assertions::assert_not_impl_any;

/// A deferred step of a trampolined computation.
pub type Thunk<T> = Box<dyn FnOnce() -> Bounce<T> + 'static>;

/// The result of one step of a trampolined computation.
///
/// A `Bounce<T>` is consumed exactly once by the driver. A [`Bounce::More`]
/// thunk must return control to the driver instead of running the next
/// step itself; it may hand back another `More`.
///
/// # Examples
///
/// ```rust
/// use stackless::control::Bounce;
///
/// assert_eq!(Bounce::done(42).run(), 42);
/// assert_eq!(Bounce::more(|| Bounce::done(42)).run(), 42);
/// ```
pub enum Bounce<T> {
    /// The computation has completed with a value.
    Done(T),
    /// The computation needs at least one more step.
    More(Thunk<T>),
}

assert_not_impl_any!(Bounce<u8>: Send, Sync);

impl<T> Bounce<T> {
    /// Lifts a value as a completed computation.
    #[inline]
    pub const fn done(value: T) -> Self {
        Self::Done(value)
    }

    /// Defers one step of work.
    ///
    /// The thunk is not evaluated until the trampoline is driven.
    #[inline]
    pub fn more<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::More(Box::new(thunk))
    }

    /// Returns `true` if no more steps are required.
    #[inline]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }

    /// Drives the computation to completion.
    ///
    /// Equivalent to [`run_trampoline`].
    #[inline]
    pub fn run(self) -> T {
        run_trampoline(self)
    }

    /// Inspects the current step without driving it.
    ///
    /// Returns `Ok(value)` if the computation is complete and `Err(thunk)`
    /// with the pending step otherwise. Calling the thunk advances the
    /// computation by exactly one step.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::Bounce;
    ///
    /// let bounce = Bounce::more(|| Bounce::done(42));
    /// match bounce.resume() {
    ///     Err(thunk) => assert!(matches!(thunk().resume(), Ok(42))),
    ///     Ok(_) => unreachable!(),
    /// }
    /// ```
    pub fn resume(self) -> Result<T, Thunk<T>> {
        match self {
            Self::Done(value) => Ok(value),
            Self::More(thunk) => Err(thunk),
        }
    }
}

/// Lifts a value as a completed computation.
#[inline]
pub const fn done<T>(value: T) -> Bounce<T> {
    Bounce::Done(value)
}

/// Defers one step of work.
#[inline]
pub fn more<T, F>(thunk: F) -> Bounce<T>
where
    F: FnOnce() -> Bounce<T> + 'static,
{
    Bounce::more(thunk)
}

/// Runs a trampolined computation to completion.
///
/// Repeatedly invokes the pending thunk while the current step is
/// [`Bounce::More`] and returns the value held by the first
/// [`Bounce::Done`]. Uses a constant number of native stack frames.
///
/// A computation that never reaches `Done` keeps the driver running
/// forever; there is no timeout and no retry.
///
/// # Examples
///
/// ```rust
/// use stackless::control::{Bounce, run_trampoline};
///
/// fn count_down(n: u64) -> Bounce<u64> {
///     if n == 0 {
///         Bounce::done(0)
///     } else {
///         Bounce::more(move || count_down(n - 1))
///     }
/// }
///
/// assert_eq!(run_trampoline(count_down(1_000_000)), 0);
/// ```
pub fn run_trampoline<T>(initial: Bounce<T>) -> T {
    let mut current = initial;
    let mut steps: u64 = 0;

    loop {
        match current {
            Bounce::Done(value) => {
                tracing::trace!(steps, "trampoline finished");
                return value;
            }
            Bounce::More(thunk) => {
                steps += 1;
                current = thunk();
            }
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<T: std::fmt::Debug> std::fmt::Debug for Bounce<T> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::More(_) => formatter.debug_tuple("More").field(&"<thunk>").finish(),
        }
    }
}
