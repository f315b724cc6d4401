//! # stackless
//!
//! Stack-safe recursion for Rust.
//!
//! ## Overview
//!
//! Rust does not guarantee tail call elimination, so naturally recursive
//! algorithms overflow the native stack on deep inputs. This library keeps
//! the semantics of the recursive definitions while running them in a
//! bounded number of native frames:
//!
//! - **Control**: [`Bounce`](control::Bounce) trampoline steps with the
//!   [`run_trampoline`](control::run_trampoline) driver, and a
//!   [`ContinuationMonad`](control::ContinuationMonad) whose `bind` unwinds
//!   through the trampoline
//! - **Persistent Data Structures**: an immutable cons-list with
//!   continuation-passing `append` and `reverse`, and an immutable binary tree
//! - **Recursion**: stack-safe `factorial` and tree `preorder`
//!
//! ## Feature Flags
//!
//! - `control`: Trampoline and continuation monad
//! - `persistent`: Persistent list and tree
//! - `recursion`: Stack-safe algorithms
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use stackless::prelude::*;
//!
//! let list = from_sequence(['a', 'b', 'c']);
//! assert_eq!(to_sequence(&list.reverse()), vec!['c', 'b', 'a']);
//!
//! assert_eq!(factorial(10), Ok(3_628_800));
//!
//! let tree = node(node(empty_tree(), 1, empty_tree()), 2, node(empty_tree(), 3, empty_tree()));
//! assert_eq!(to_sequence(&preorder(&tree)), vec![2, 1, 3]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use stackless::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "persistent")]
    pub use crate::persistent::*;

    #[cfg(feature = "recursion")]
    pub use crate::recursion::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "persistent")]
pub mod persistent;

#[cfg(feature = "recursion")]
pub mod recursion;
