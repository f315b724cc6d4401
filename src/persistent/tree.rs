//! Persistent (immutable) binary tree.
//!
//! [`Tree`] is either [`Tree::Empty`] or a [`Tree::Node`] holding a left
//! subtree, a value and a right subtree. Subtrees are shared through [`Rc`],
//! so building a tree on top of existing subtrees copies nothing.
//!
//! Dropping a tree is iterative, so fully skewed trees of any depth can be
//! built and released without overflowing the native stack.
//!
//! # Examples
//!
//! ```rust
//! use stackless::persistent::{Tree, empty_tree, node};
//!
//! let tree = node(node(empty_tree(), 1, empty_tree()), 2, Tree::leaf(3));
//! assert_eq!(tree.value(), Some(&2));
//! assert!(!tree.is_empty());
//! ```

use std::rc::Rc;

/// A persistent binary tree.
#[derive(Debug)]
pub enum Tree<T> {
    /// The empty tree.
    Empty,
    /// An inner node with two (possibly empty) subtrees.
    Node(Rc<TreeNode<T>>),
}

/// The payload of a [`Tree::Node`].
#[derive(Debug)]
pub struct TreeNode<T> {
    /// The left subtree.
    pub left: Tree<T>,
    /// The value stored at this node.
    pub value: T,
    /// The right subtree.
    pub right: Tree<T>,
}

impl<T> Drop for TreeNode<T> {
    fn drop(&mut self) {
        if self.left.is_empty() && self.right.is_empty() {
            return;
        }

        let mut pending = vec![
            std::mem::take(&mut self.left),
            std::mem::take(&mut self.right),
        ];
        while let Some(tree) = pending.pop() {
            if let Tree::Node(node) = tree
                && let Ok(mut node) = Rc::try_unwrap(node)
            {
                pending.push(std::mem::take(&mut node.left));
                pending.push(std::mem::take(&mut node.right));
            }
        }
    }
}

impl<T> Clone for Tree<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Empty => Self::Empty,
            Self::Node(node) => Self::Node(Rc::clone(node)),
        }
    }
}

impl<T> Default for Tree<T> {
    #[inline]
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> Tree<T> {
    /// Creates the empty tree.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates a node from two subtrees and a value.
    #[inline]
    #[must_use]
    pub fn node(left: Self, value: T, right: Self) -> Self {
        Self::Node(Rc::new(TreeNode { left, value, right }))
    }

    /// Creates a node with two empty subtrees.
    #[inline]
    #[must_use]
    pub fn leaf(value: T) -> Self {
        Self::node(Self::Empty, value, Self::Empty)
    }

    /// Returns `true` for the empty tree.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Returns the value stored at the root, if any.
    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(node) => Some(&node.value),
        }
    }

    /// Counts the nodes of the tree without recursion.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(tree) = pending.pop() {
            if let Self::Node(node) = tree {
                count += 1;
                pending.push(&node.right);
                pending.push(&node.left);
            }
        }
        count
    }
}

/// Creates the empty tree.
#[inline]
#[must_use]
pub const fn empty_tree<T>() -> Tree<T> {
    Tree::Empty
}

/// Creates a node from two subtrees and a value.
#[inline]
#[must_use]
pub fn node<T>(left: Tree<T>, value: T, right: Tree<T>) -> Tree<T> {
    Tree::node(left, value, right)
}
