//! Trampolined continuation monad for continuation-passing style (CPS).
//!
//! This module provides [`ContinuationMonad<A, R>`], a computation that
//! produces an intermediate value of type `A` by handing it to a
//! [`Continuation`], where the whole computation finishes with a value of
//! type `R`.
//!
//! Unlike a plain `(A -> R) -> R` encoding, every continuation here returns
//! a [`Bounce<R>`], and [`ContinuationMonad::bind`] defers the call to the
//! bound function through [`Bounce::More`]. A chain of binds, including one
//! that recurses into further binds, is therefore driven by
//! [`run_trampoline`] in a constant number of native stack frames. Applying
//! a `bind` or `map` also defers the application of its source, so chains
//! built up front (`m = m.bind(f)` in a loop) unwind the same way, and
//! dropping such a chain releases its layers from a flat loop.
//!
//! # Examples
//!
//! ```rust
//! use stackless::control::ContinuationMonad;
//!
//! let computation: ContinuationMonad<i32, i32> = ContinuationMonad::pure(10)
//!     .bind(|x| ContinuationMonad::pure(x + 5))
//!     .map(|x| x * 2);
//! assert_eq!(computation.run(), 30);
//! ```
//!
//! ## Deep recursion
//!
//! ```rust
//! use stackless::control::ContinuationMonad;
//!
//! fn sum_to(n: u64) -> ContinuationMonad<u64, u64> {
//!     if n == 0 {
//!         ContinuationMonad::pure(0)
//!     } else {
//!         ContinuationMonad::pure(n - 1)
//!             .bind(sum_to)
//!             .map(move |partial| partial + n)
//!     }
//! }
//!
//! assert_eq!(sum_to(200_000).run(), 20_000_100_000);
//! ```

use std::any::Any;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::trampoline::{Bounce, run_trampoline};

/// "What to do with a not-yet-computed result."
///
/// A continuation receives the intermediate value and returns the next step
/// of the trampolined computation.
pub type Continuation<A, R> = Box<dyn FnOnce(A) -> Bounce<R> + 'static>;

/// A shared CPS function: given a continuation, produces the first step.
type CpsFunction<A, R> = Rc<dyn Fn(Continuation<A, R>) -> Bounce<R> + 'static>;

/// A continuation monad whose evaluation is driven by a trampoline.
///
/// `ContinuationMonad<A, R>` is cheap to clone and can be applied any number
/// of times, each time with a different continuation; applying it never
/// mutates it.
///
/// # Type Parameters
///
/// * `A` - The intermediate value this computation produces
/// * `R` - The final result of the whole computation
///
/// # Laws
///
/// Compared through [`ContinuationMonad::run`]:
///
/// - **Left Identity**: `pure(a).bind(f) == f(a)`
/// - **Right Identity**: `m.bind(pure) == m`
/// - **Associativity**: `m.bind(f).bind(g) == m.bind(|x| f(x).bind(g))`
pub struct ContinuationMonad<A: 'static, R: 'static> {
    /// `None` only while the value is being dropped.
    run_continuation: Option<CpsFunction<A, R>>,
}

impl<A: 'static, R: 'static> Clone for ContinuationMonad<A, R> {
    fn clone(&self) -> Self {
        Self {
            run_continuation: self.run_continuation.clone(),
        }
    }
}

impl<A: 'static, R: 'static> ContinuationMonad<A, R> {
    /// Creates a computation from a continuation-accepting function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::{Bounce, ContinuationMonad};
    ///
    /// let computation: ContinuationMonad<i32, String> =
    ///     ContinuationMonad::new(|continuation| continuation(42));
    /// let result = computation
    ///     .apply(Box::new(|value| Bounce::done(value.to_string())))
    ///     .run();
    /// assert_eq!(result, "42");
    /// ```
    pub fn new<F>(run: F) -> Self
    where
        F: Fn(Continuation<A, R>) -> Bounce<R> + 'static,
    {
        Self {
            run_continuation: Some(Rc::new(run)),
        }
    }

    /// Lifts a value into the continuation monad.
    ///
    /// The resulting computation invokes its continuation with `value`
    /// immediately, without deferral.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move |continuation| continuation(value.clone()))
    }

    /// Applies this computation to a continuation, producing the first step.
    #[inline]
    pub fn apply(&self, continuation: Continuation<A, R>) -> Bounce<R> {
        match &self.run_continuation {
            Some(run) => run(continuation),
            None => unreachable!("ContinuationMonad applied while being dropped"),
        }
    }

    /// Sequences this computation with a function producing the next one.
    ///
    /// Both the application of `self` and the call to `function` are
    /// deferred through [`Bounce::More`]. `function` may recurse into further
    /// binds, and binds may be stacked on top of each other in a loop,
    /// without growing the native stack.
    pub fn bind<B: 'static, F>(&self, function: F) -> ContinuationMonad<B, R>
    where
        F: Fn(A) -> ContinuationMonad<B, R> + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        ContinuationMonad::new(move |continuation: Continuation<B, R>| {
            let source = source.clone();
            let function = Rc::clone(&function);
            Bounce::more(move || {
                source.apply(Box::new(move |value| {
                    Bounce::more(move || function(value).apply(continuation))
                }))
            })
        })
    }

    /// Alias for [`ContinuationMonad::bind`].
    #[inline]
    pub fn flat_map<B: 'static, F>(&self, function: F) -> ContinuationMonad<B, R>
    where
        F: Fn(A) -> ContinuationMonad<B, R> + 'static,
    {
        self.bind(function)
    }

    /// Alias for [`ContinuationMonad::bind`].
    #[inline]
    pub fn and_then<B: 'static, F>(&self, function: F) -> ContinuationMonad<B, R>
    where
        F: Fn(A) -> ContinuationMonad<B, R> + 'static,
    {
        self.bind(function)
    }

    /// Applies a function to the intermediate value.
    ///
    /// Handing the mapped value to the continuation is deferred as well, so
    /// maps stacked by a recursive definition unwind through the trampoline.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::ContinuationMonad;
    ///
    /// let doubled: ContinuationMonad<i32, i32> = ContinuationMonad::pure(21).map(|x| x * 2);
    /// assert_eq!(doubled.run(), 42);
    /// ```
    pub fn map<B: 'static, F>(&self, function: F) -> ContinuationMonad<B, R>
    where
        F: Fn(A) -> B + 'static,
    {
        let source = self.clone();
        let function = Rc::new(function);
        ContinuationMonad::new(move |continuation: Continuation<B, R>| {
            let source = source.clone();
            let function = Rc::clone(&function);
            Bounce::more(move || {
                source.apply(Box::new(move |value| {
                    Bounce::more(move || continuation(function(value)))
                }))
            })
        })
    }

    /// Runs this computation with a final continuation and drives it to
    /// completion.
    pub fn run_with<K>(&self, continuation: K) -> R
    where
        K: FnOnce(A) -> R + 'static,
    {
        run_trampoline(self.apply(Box::new(move |value| Bounce::done(continuation(value)))))
    }
}

impl<A: 'static> ContinuationMonad<A, A> {
    /// Drives this computation with the identity continuation.
    ///
    /// Equivalent to `run_trampoline(m.apply(done))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::control::ContinuationMonad;
    ///
    /// let computation: ContinuationMonad<&str, &str> = ContinuationMonad::pure("hello");
    /// assert_eq!(computation.run(), "hello");
    /// // A computation can be run more than once.
    /// assert_eq!(computation.run(), "hello");
    /// ```
    pub fn run(&self) -> A {
        run_trampoline(self.apply(Box::new(Bounce::done)))
    }
}

/// Lifts a value into the continuation monad.
///
/// See [`ContinuationMonad::pure`].
#[inline]
pub fn pure<A: Clone + 'static, R: 'static>(value: A) -> ContinuationMonad<A, R> {
    ContinuationMonad::pure(value)
}

/// Sequences `computation` with `function`.
///
/// See [`ContinuationMonad::bind`].
#[inline]
pub fn bind<A, B, R, F>(computation: &ContinuationMonad<A, R>, function: F) -> ContinuationMonad<B, R>
where
    A: 'static,
    B: 'static,
    R: 'static,
    F: Fn(A) -> ContinuationMonad<B, R> + 'static,
{
    computation.bind(function)
}

/// Drives a computation with the identity continuation.
///
/// See [`ContinuationMonad::run`].
#[inline]
pub fn run<A: 'static>(computation: &ContinuationMonad<A, A>) -> A {
    computation.run()
}

// =============================================================================
// Drop Implementation
// =============================================================================

thread_local! {
    static RELEASE_QUEUE: RefCell<Vec<Box<dyn Any>>> = const { RefCell::new(Vec::new()) };
    static RELEASING: Cell<bool> = const { Cell::new(false) };
}

/// Drops `value` from a loop on the outermost release instead of from the
/// destructor that handed it over.
///
/// Dropping the last handle on a `bind` layer drops its captured source,
/// whose last handle drops the next source, and so on. Routing every layer
/// through this queue keeps that teardown at a constant native depth.
fn release(value: Box<dyn Any>) {
    if RELEASE_QUEUE
        .try_with(|queue| queue.borrow_mut().push(value))
        .is_err()
    {
        return;
    }
    if RELEASING
        .try_with(|releasing| releasing.replace(true))
        .unwrap_or(true)
    {
        return;
    }
    while let Some(next) = RELEASE_QUEUE.with_borrow_mut(Vec::pop) {
        drop(next);
    }
    RELEASING.set(false);
}

impl<A: 'static, R: 'static> Drop for ContinuationMonad<A, R> {
    fn drop(&mut self) {
        if let Some(run) = self.run_continuation.take()
            && Rc::strong_count(&run) == 1
        {
            release(Box::new(run));
        }
    }
}

// =============================================================================
// Debug Implementation
// =============================================================================

impl<A: 'static, R: 'static> std::fmt::Debug for ContinuationMonad<A, R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ContinuationMonad")
            .finish_non_exhaustive()
    }
}
