//! Stack-safe recursive algorithms.
//!
//! The algorithms in this module keep the semantics of their naive
//! recursive definitions but are evaluated through
//! [`ContinuationMonad`](crate::control::ContinuationMonad), so their depth
//! is bounded by heap memory instead of the native stack:
//!
//! - [`factorial`]: `n!` with checked arithmetic
//! - [`preorder`]: pre-order traversal of a [`Tree`](crate::persistent::Tree)
//!
//! List reversal and append live on
//! [`PersistentList`](crate::persistent::PersistentList) itself.

mod error;
mod factorial;
mod traversal;

pub use error::RecursionError;
pub use factorial::factorial;
pub use traversal::{preorder, preorder_reference};
