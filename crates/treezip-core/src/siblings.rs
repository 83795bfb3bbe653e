//! Persistent sibling sequences.
//!
//! A zipper path keeps the siblings to the left of the focus nearest-first
//! and the siblings to the right in natural order. Both sequences are only
//! ever pushed to or popped from at the end touching the focus, so a shared
//! cons list gives O(1) moves and O(1) clones of a path.

use std::fmt::{self, Debug};
use std::rc::Rc;

struct Cell<T> {
    value: T,
    rest: Siblings<T>,
}

/// An immutable, reference-counted stack of sibling nodes.
///
/// The empty stack is the only representation of "no siblings".
pub struct Siblings<T> {
    head: Option<Rc<Cell<T>>>,
    len: usize,
}

impl<T> Siblings<T> {
    /// The empty sequence.
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A new sequence with `value` placed nearest the focus.
    #[must_use]
    pub fn push(&self, value: T) -> Self {
        Self {
            len: self.len + 1,
            head: Some(Rc::new(Cell {
                value,
                rest: self.clone(),
            })),
        }
    }

    /// Iterate from the element nearest the focus outwards.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl<T: Clone> Siblings<T> {
    /// Split off the element nearest the focus.
    pub fn pop(&self) -> Option<(T, Self)> {
        self.head
            .as_ref()
            .map(|cell| (cell.value.clone(), cell.rest.clone()))
    }

    /// Build a sequence whose iteration order matches `items`.
    pub fn from_vec(items: Vec<T>) -> Self {
        items
            .into_iter()
            .rev()
            .fold(Self::new(), |acc, item| acc.push(item))
    }

    /// The elements in iteration order.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T> Clone for Siblings<T> {
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            len: self.len,
        }
    }
}

impl<T> Default for Siblings<T> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink uniquely owned cells one at a time; the default recursive drop
// overflows the stack on very wide sibling lists.
impl<T> Drop for Siblings<T> {
    fn drop(&mut self) {
        let mut head = self.head.take();
        while let Some(cell) = head {
            match Rc::try_unwrap(cell) {
                Ok(mut cell) => head = cell.rest.head.take(),
                Err(_) => break,
            }
        }
    }
}

impl<T: PartialEq> PartialEq for Siblings<T> {
    fn eq(&self, rhs: &Self) -> bool {
        self.len == rhs.len && self.iter().zip(rhs.iter()).all(|(l, r)| l == r)
    }
}

impl<T: Debug> Debug for Siblings<T> {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Cell<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|cell| {
            self.next = cell.rest.head.as_deref();
            &cell.value
        })
    }
}

impl<'a, T> IntoIterator for &'a Siblings<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
