//! Persistent (immutable) singly-linked list.
//!
//! This module provides [`PersistentList`], an immutable cons-list with two
//! variants, [`PersistentList::Nil`] and [`PersistentList::Cons`], that uses
//! structural sharing through [`Rc`].
//!
//! # Overview
//!
//! - O(1) prepend (`cons`)
//! - O(1) head and tail access
//! - O(n) length, append
//! - O(n²) reverse (see [`PersistentList::reverse`])
//!
//! `append` and `reverse` are written in continuation-passing style and
//! driven by [`run_trampoline`], so they use a constant number of native
//! stack frames however long the list is. Dropping a long list is
//! iterative as well.
//!
//! # Examples
//!
//! ```rust
//! use stackless::persistent::{PersistentList, cons, nil};
//!
//! let list = cons(1, cons(2, cons(3, nil())));
//! assert_eq!(list.head(), Some(&1));
//! assert_eq!(list.len(), 3);
//!
//! // Structural sharing: the original list is preserved
//! let extended = list.prepend(0);
//! assert_eq!(list.len(), 3);
//! assert_eq!(extended.len(), 4);
//!
//! let list: PersistentList<i32> = (1..=5).collect();
//! assert_eq!(list.iter().sum::<i32>(), 15);
//! ```
//!
//! # Structural Sharing
//!
//! ```text
//! list1: 1 -> 2 -> 3 -> nil
//! list2 = list1.prepend(0): 0 -> [1 -> 2 -> 3 -> nil]  // shares [1, 2, 3] with list1
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;
use std::rc::Rc;

use static_assertions::assert_not_impl_any;

use crate::control::{Bounce, Continuation, run_trampoline};

/// A persistent (immutable) singly-linked list.
///
/// Cloning a list is O(1): only the reference count of the first cell
/// changes.
///
/// # Time Complexity
///
/// | Operation   | Complexity |
/// |-------------|------------|
/// | `nil`       | O(1)       |
/// | `cons`      | O(1)       |
/// | `head`      | O(1)       |
/// | `tail`      | O(1)       |
/// | `len`       | O(n)       |
/// | `fold_left` | O(n)       |
/// | `append`    | O(n)       |
/// | `reverse`   | O(n²)      |
pub enum PersistentList<T> {
    /// The empty list.
    Nil,
    /// A head element followed by a shared tail.
    Cons(Rc<ConsCell<T>>),
}

/// A non-empty list cell.
///
/// The cell owns its `head` and shares its `tail` with every other list
/// built by prepending to the same suffix.
pub struct ConsCell<T> {
    /// The first element.
    pub head: T,
    /// The rest of the list.
    pub tail: PersistentList<T>,
}

assert_not_impl_any!(PersistentList<u8>: Send, Sync);

impl<T> Drop for ConsCell<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned cells one by one so that dropping a long
        // spine does not recurse once per cell.
        let mut next = std::mem::take(&mut self.tail);
        while let PersistentList::Cons(cell) = next {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => next = std::mem::take(&mut cell.tail),
                Err(_) => break,
            }
        }
    }
}

impl<T> Clone for PersistentList<T> {
    #[inline]
    fn clone(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Cons(cell) => Self::Cons(Rc::clone(cell)),
        }
    }
}

impl<T> PersistentList<T> {
    /// Creates the empty list.
    #[inline]
    #[must_use]
    pub const fn nil() -> Self {
        Self::Nil
    }

    /// Creates a list from a head element and a tail.
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::PersistentList;
    ///
    /// let tail = PersistentList::singleton(2);
    /// let list = PersistentList::cons(1, tail.clone());
    /// assert_eq!(list.head(), Some(&1));
    /// assert_eq!(list.tail(), tail);
    /// ```
    #[inline]
    #[must_use]
    pub fn cons(head: T, tail: Self) -> Self {
        Self::Cons(Rc::new(ConsCell { head, tail }))
    }

    /// Creates a list containing a single element.
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::cons(element, Self::Nil)
    }

    /// Prepends an element, sharing this list as the tail.
    #[inline]
    #[must_use]
    pub fn prepend(&self, element: T) -> Self {
        Self::cons(element, self.clone())
    }

    /// Builds a list from a Vec, keeping the order of the elements.
    fn build_from_vec(mut elements: Vec<T>) -> Self {
        let mut list = Self::Nil;
        while let Some(element) = elements.pop() {
            list = Self::cons(element, list);
        }
        list
    }

    /// Returns a reference to the first element, or `None` for `Nil`.
    #[inline]
    #[must_use]
    pub fn head(&self) -> Option<&T> {
        match self {
            Self::Nil => None,
            Self::Cons(cell) => Some(&cell.head),
        }
    }

    /// Returns the list without its first element.
    ///
    /// The tail of `Nil` is `Nil`. Shares structure with the original list.
    #[inline]
    #[must_use]
    pub fn tail(&self) -> Self {
        match self {
            Self::Nil => Self::Nil,
            Self::Cons(cell) => cell.tail.clone(),
        }
    }

    /// Returns `true` for `Nil`.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn len(&self) -> usize {
        self.fold_left(0, |_, count| count + 1)
    }

    /// Returns an iterator over references to the elements, front to back.
    #[inline]
    #[must_use]
    pub const fn iter(&self) -> PersistentListIterator<'_, T> {
        PersistentListIterator { current: self }
    }

    /// Folds the list from head to tail.
    ///
    /// At each cell the accumulator becomes `function(head, accumulator)`.
    /// The loop advances to the tail of the cell whose head was just folded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::PersistentList;
    ///
    /// let list: PersistentList<i32> = (1..=4).collect();
    /// let digits = list.fold_left(String::new(), |element, mut accumulator| {
    ///     accumulator.push_str(&element.to_string());
    ///     accumulator
    /// });
    /// assert_eq!(digits, "1234");
    /// ```
    pub fn fold_left<B, F>(&self, initial: B, mut function: F) -> B
    where
        F: FnMut(&T, B) -> B,
    {
        let mut accumulator = initial;
        let mut remaining = self;

        loop {
            match remaining {
                Self::Nil => return accumulator,
                Self::Cons(cell) => {
                    let ConsCell { head, tail } = cell.as_ref();
                    accumulator = function(head, accumulator);
                    remaining = tail;
                }
            }
        }
    }
}

impl<T: Clone + 'static> PersistentList<T> {
    /// Appends another list to this list.
    ///
    /// Scans this list once, wrapping one continuation per element, then
    /// feeds `other` to the composed continuation through the trampoline.
    /// `other` is shared, not copied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::PersistentList;
    ///
    /// let front: PersistentList<i32> = (1..=2).collect();
    /// let back: PersistentList<i32> = (3..=4).collect();
    /// assert_eq!(front.append(&back).to_sequence(), vec![1, 2, 3, 4]);
    /// ```
    #[must_use]
    pub fn append(&self, other: &Self) -> Self {
        let mut continuation: Continuation<Self, Self> = Box::new(Bounce::done);
        let mut remaining = self;

        while let Self::Cons(cell) = remaining {
            let head = cell.head.clone();
            let outer = continuation;
            continuation =
                Box::new(move |rest| Bounce::more(move || outer(Self::cons(head, rest))));
            remaining = &cell.tail;
        }

        run_trampoline(continuation(other.clone()))
    }

    /// Returns the elements in reverse order.
    ///
    /// Each element contributes a continuation that appends it, as a
    /// singleton, to the already reversed suffix. Every such step is a full
    /// [`append`](Self::append), which makes this O(n²).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use stackless::persistent::PersistentList;
    ///
    /// let list = PersistentList::from_sequence(['a', 'b', 'c']);
    /// assert_eq!(list.reverse().to_sequence(), vec!['c', 'b', 'a']);
    /// ```
    #[must_use]
    pub fn reverse(&self) -> Self {
        let mut continuation: Continuation<Self, Self> = Box::new(Bounce::done);
        let mut remaining = self;

        while let Self::Cons(cell) = remaining {
            let last = Self::singleton(cell.head.clone());
            let outer = continuation;
            continuation = Box::new(move |reversed: Self| {
                Bounce::more(move || outer(reversed.append(&last)))
            });
            remaining = &cell.tail;
        }

        run_trampoline(continuation(Self::Nil))
    }
}

impl<T> PersistentList<T> {
    /// Creates a list holding the elements of `sequence` in order.
    pub fn from_sequence<I: IntoIterator<Item = T>>(sequence: I) -> Self {
        Self::build_from_vec(sequence.into_iter().collect())
    }
}

impl<T: Clone> PersistentList<T> {
    /// Copies the elements into a `Vec`, front to back.
    #[must_use]
    pub fn to_sequence(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

/// Creates the empty list.
#[inline]
#[must_use]
pub const fn nil<T>() -> PersistentList<T> {
    PersistentList::Nil
}

/// Creates a list from a head element and a tail.
#[inline]
#[must_use]
pub fn cons<T>(head: T, tail: PersistentList<T>) -> PersistentList<T> {
    PersistentList::cons(head, tail)
}

/// Creates a list holding the elements of `sequence` in order.
pub fn from_sequence<T, I: IntoIterator<Item = T>>(sequence: I) -> PersistentList<T> {
    PersistentList::from_sequence(sequence)
}

/// Copies the elements of `list` into a `Vec`, front to back.
#[must_use]
pub fn to_sequence<T: Clone>(list: &PersistentList<T>) -> Vec<T> {
    list.to_sequence()
}

// =============================================================================
// Iterator Implementation
// =============================================================================

/// An iterator over references to elements of a [`PersistentList`].
pub struct PersistentListIterator<'a, T> {
    current: &'a PersistentList<T>,
}

impl<'a, T> Iterator for PersistentListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match self.current {
            PersistentList::Nil => None,
            PersistentList::Cons(cell) => {
                self.current = &cell.tail;
                Some(&cell.head)
            }
        }
    }
}

/// An owning iterator over elements of a [`PersistentList`].
///
/// Cells may be shared with other lists, so each element is cloned out of
/// its cell and the iterator holds a handle on the remaining tail. This is
/// why it requires `T: Clone`.
pub struct PersistentListIntoIterator<T> {
    list: PersistentList<T>,
}

impl<T: Clone> Iterator for PersistentListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let PersistentList::Cons(cell) = std::mem::take(&mut self.list) else {
            return None;
        };
        self.list = cell.tail.clone();
        Some(cell.head.clone())
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentList<T> {
    #[inline]
    fn default() -> Self {
        Self::Nil
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::build_from_vec(iter.into_iter().collect())
    }
}

/// Consumes the list handle and yields cloned elements.
///
/// Requires `T: Clone` because the cells are shared through `Rc` and may
/// still be reachable from other lists; elements are never moved out of a
/// cell. Use [`PersistentList::iter`] to borrow elements instead.
impl<T: Clone> IntoIterator for PersistentList<T> {
    type Item = T;
    type IntoIter = PersistentListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        PersistentListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = PersistentListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: Hash> Hash for PersistentList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut length: usize = 0;
        for element in self {
            element.hash(state);
            length += 1;
        }
        // Distinguishes lists whose concatenated element hashes coincide.
        length.hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for PersistentList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}
