//! Tree traversals in continuation-passing style.

use std::rc::Rc;

use crate::control::ContinuationMonad;
use crate::persistent::{PersistentList, Tree};

type ListComputation<T> = ContinuationMonad<PersistentList<T>, PersistentList<T>>;

/// Lists the values of `tree` in pre-order: the root, then the left
/// subtree, then the right subtree.
///
/// Each subtree is visited through [`ContinuationMonad::bind`], so fully
/// skewed trees of any depth are traversed without overflowing the native
/// stack.
///
/// # Examples
///
/// ```rust
/// use stackless::persistent::{empty_tree, node};
/// use stackless::recursion::preorder;
///
/// let tree = node(
///     node(empty_tree(), 1, empty_tree()),
///     2,
///     node(empty_tree(), 3, empty_tree()),
/// );
/// assert_eq!(preorder(&tree).to_sequence(), vec![2, 1, 3]);
/// ```
pub fn preorder<T: Clone + 'static>(tree: &Tree<T>) -> PersistentList<T> {
    preorder_onto(tree.clone(), PersistentList::nil()).run()
}

/// Pre-order values of `tree` followed by `rest`.
///
/// The right subtree is consumed first so that the left subtree and then
/// the root can be prepended to its result.
fn preorder_onto<T: Clone + 'static>(tree: Tree<T>, rest: PersistentList<T>) -> ListComputation<T> {
    match tree {
        Tree::Empty => ContinuationMonad::pure(rest),
        Tree::Node(node) => ContinuationMonad::pure(rest).bind(move |rest| {
            let node = Rc::clone(&node);
            preorder_onto(node.right.clone(), rest).bind(move |with_right| {
                let value = node.value.clone();
                preorder_onto(node.left.clone(), with_right).bind(move |with_left| {
                    ContinuationMonad::pure(PersistentList::cons(value.clone(), with_left))
                })
            })
        }),
    }
}

/// Natively recursive pre-order traversal.
///
/// Recurses once per tree level; intended as a reference for small trees.
pub fn preorder_reference<T: Clone>(tree: &Tree<T>) -> PersistentList<T> {
    fn visit<T: Clone>(tree: &Tree<T>, values: &mut Vec<T>) {
        if let Tree::Node(node) = tree {
            values.push(node.value.clone());
            visit(&node.left, values);
            visit(&node.right, values);
        }
    }

    let mut values = Vec::new();
    visit(tree, &mut values);
    PersistentList::from_sequence(values)
}
