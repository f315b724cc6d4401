//! Persistent (immutable) data structures.
//!
//! This module provides immutable data structures that use structural
//! sharing through [`Rc`](std::rc::Rc):
//!
//! - [`PersistentList`]: Persistent singly-linked list (`Nil` / `Cons`)
//! - [`Tree`]: Persistent binary tree (`Empty` / `Node`)
//!
//! Both are single-threaded: they are neither `Send` nor `Sync`.
//!
//! # Examples
//!
//! ## `PersistentList`
//!
//! ```rust
//! use stackless::persistent::{cons, from_sequence, nil, to_sequence};
//!
//! let list = cons(1, cons(2, nil()));
//! assert_eq!(to_sequence(&list), vec![1, 2]);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 2);
//! assert_eq!(extended.len(), 3);
//!
//! assert_eq!(from_sequence(vec![1, 2]), list);
//! ```
//!
//! ## `Tree`
//!
//! ```rust
//! use stackless::persistent::{empty_tree, node};
//!
//! let tree = node(empty_tree(), 'a', node(empty_tree(), 'b', empty_tree()));
//! assert_eq!(tree.size(), 2);
//! ```

mod list;
mod tree;

pub use list::ConsCell;
pub use list::PersistentList;
pub use list::PersistentListIntoIterator;
pub use list::PersistentListIterator;
pub use list::{cons, from_sequence, nil, to_sequence};
pub use tree::{Tree, TreeNode, empty_tree, node};
