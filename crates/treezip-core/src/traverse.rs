//! Depth-first, pre-order traversal over a zipper.
//!
//! `next`/`prev` step through pre-order positions, `skip` bypasses the
//! subtree under the focus, and the `traverse*` drivers visit every position
//! while letting the visitor edit the tree as it goes. Traversal always
//! finishes by returning to the top of the tree it ran over.

use crate::tree::ZipTree;
use crate::zipper::Zipper;

/// Direction of a pre-order step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Next,
    Prev,
}

/// What a `traverse_while` visitor wants to happen next.
///
/// The payload is the (possibly edited) zipper, paired with the accumulator
/// in the accumulator-threading variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Control<T> {
    /// Descend into the focus, or move on if it has no children.
    Continue(T),
    /// Move past the focus without visiting its children.
    Skip(T),
    /// Stop traversing.
    Halt(T),
}

impl<T> Control<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Control<U> {
        match self {
            Self::Continue(value) => Control::Continue(f(value)),
            Self::Skip(value) => Control::Skip(f(value)),
            Self::Halt(value) => Control::Halt(f(value)),
        }
    }
}

/// Iterator over the pre-order positions starting at a zipper.
pub struct Positions<T> {
    next: Option<Zipper<T>>,
}

impl<T: ZipTree> Iterator for Positions<T> {
    type Item = Zipper<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.next();
        Some(current)
    }
}

impl<T: ZipTree> Zipper<T> {
    /// Move to the next position in pre-order.
    ///
    /// Returns `None` once the last position of the tree has been passed.
    pub fn next(&self) -> Option<Self> {
        if self.node.is_branch() {
            if let Some(child) = self.down() {
                return Some(child);
            }
        }
        self.skip(Direction::Next)
    }

    /// Move to the previous position in pre-order.
    pub fn prev(&self) -> Option<Self> {
        match self.left() {
            Some(left) => Some(left.deepest_rightmost()),
            None => self.up(),
        }
    }

    /// Move to the nearest sibling in `direction`, climbing through ancestors
    /// until one has such a sibling. The subtree under the focus is bypassed.
    pub fn skip(&self, direction: Direction) -> Option<Self> {
        let step = |z: &Self| match direction {
            Direction::Next => z.right(),
            Direction::Prev => z.left(),
        };

        if let Some(sibling) = step(self) {
            return Some(sibling);
        }
        let mut ancestor = self.up()?;
        loop {
            if let Some(sibling) = step(&ancestor) {
                return Some(sibling);
            }
            ancestor = ancestor.up()?;
        }
    }

    /// Iterate over the pre-order positions from here to the end of the tree.
    pub fn iter(&self) -> Positions<T> {
        Positions {
            next: Some(self.clone()),
        }
    }

    /// The focus nodes of [`Zipper::iter`].
    pub fn nodes(&self) -> impl Iterator<Item = T> {
        self.iter().map(Zipper::into_node)
    }

    /// Scan in `direction` for the first node matching `predicate`, starting
    /// with the focus itself.
    pub fn find(&self, direction: Direction, mut predicate: impl FnMut(&T) -> bool) -> Option<Self> {
        let mut zipper = self.clone();
        loop {
            if predicate(&zipper.node) {
                return Some(zipper);
            }
            zipper = match direction {
                Direction::Next => zipper.next()?,
                Direction::Prev => zipper.prev()?,
            };
        }
    }

    /// Visit every position of the subtree under the focus in pre-order,
    /// replacing each with `visit(zipper)`.
    ///
    /// At the root this returns the top of the edited tree. Below the root
    /// only the focused subtree is walked, and the result is the original
    /// position with the edited subtree in place.
    #[must_use]
    pub fn traverse(&self, mut visit: impl FnMut(Self) -> Self) -> Self {
        self.traverse_with((), |zipper, ()| (visit(zipper), ())).0
    }

    /// Like [`Zipper::traverse`], threading an accumulator through `visit`.
    pub fn traverse_with<A>(
        &self,
        acc: A,
        mut visit: impl FnMut(Self, A) -> (Self, A),
    ) -> (Self, A) {
        self.with_subtree(|start| {
            let mut zipper = start;
            let mut acc = acc;
            let mut steps = 0_usize;
            loop {
                steps += 1;
                let (visited, next_acc) = visit(zipper, acc);
                acc = next_acc;
                match visited.next() {
                    Some(next) => zipper = next,
                    None => {
                        tracing::trace!(steps, "traversal complete");
                        return (visited.top(), acc);
                    }
                }
            }
        })
    }

    /// Visit positions in pre-order under the control of `visit`.
    ///
    /// `Continue` advances with `next`, `Skip` bypasses the focused subtree,
    /// `Halt` stops. The result is the top of the tree in every case, with
    /// the same subtree splicing rule as [`Zipper::traverse`].
    #[must_use]
    pub fn traverse_while(&self, mut visit: impl FnMut(Self) -> Control<Self>) -> Self {
        self.traverse_while_with((), |zipper, ()| visit(zipper).map(|z| (z, ())))
            .0
    }

    /// Like [`Zipper::traverse_while`], threading an accumulator through
    /// `visit`.
    pub fn traverse_while_with<A>(
        &self,
        acc: A,
        mut visit: impl FnMut(Self, A) -> Control<(Self, A)>,
    ) -> (Self, A) {
        self.with_subtree(|start| {
            let mut zipper = start;
            let mut acc = acc;
            let mut steps = 0_usize;
            loop {
                steps += 1;
                let (advanced, current) = match visit(zipper, acc) {
                    Control::Continue((visited, next_acc)) => {
                        acc = next_acc;
                        (visited.next(), visited)
                    }
                    Control::Skip((visited, next_acc)) => {
                        acc = next_acc;
                        (visited.skip(Direction::Next), visited)
                    }
                    Control::Halt((visited, next_acc)) => {
                        tracing::debug!(steps, "traversal halted by visitor");
                        return (visited.top(), next_acc);
                    }
                };
                match advanced {
                    Some(next) => zipper = next,
                    None => {
                        tracing::trace!(steps, "traversal complete");
                        return (current.top(), acc);
                    }
                }
            }
        })
    }

    /// Run `walk` over the focused subtree as if it were a whole tree, then
    /// splice the resulting node back into this position.
    fn with_subtree<R>(&self, walk: impl FnOnce(Self) -> (Self, R)) -> (Self, R) {
        if self.is_root() {
            return walk(self.clone());
        }
        let (done, extra) = walk(Self::new(self.node.clone()));
        (self.replace(done.into_node()), extra)
    }
}
