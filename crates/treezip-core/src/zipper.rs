//! The zipper value and its structural moves.
//!
//! For more details on the Zipper concept, check out these resources:
//! * <https://www.st.cs.uni-saarland.de//edu/seminare/2005/advanced-fp/docs/huet-zipper.pdf>
//! * <https://donsbot.wordpress.com/2007/05/17/roll-your-own-window-manager-tracking-focus-with-a-zipper/>
//!
//! A zipper pairs the node in focus with a path describing how to rebuild
//! everything above it. The path stores a snapshot of the parent zipper taken
//! when `down` was called, together with the siblings on either side of the
//! focus. Edits stay local to the focus until `up` folds them into a freshly
//! built parent node.

use std::rc::Rc;

use crate::siblings::Siblings;
use crate::tree::ZipTree;

/// Where a non-root zipper sits inside its parent.
pub(crate) struct Path<T> {
    /// The enclosing zipper as it was when we descended.
    pub(crate) parent: Zipper<T>,
    /// Siblings before the focus, nearest first.
    pub(crate) left: Siblings<T>,
    /// Siblings after the focus, in order.
    pub(crate) right: Siblings<T>,
}

/// An immutable cursor over a tree of `T`.
///
/// Every operation takes `&self` and returns a new zipper; the original stays
/// valid. Moves that cannot proceed return `None`.
pub struct Zipper<T> {
    pub(crate) node: T,
    pub(crate) path: Option<Rc<Path<T>>>,
}

/// Create a zipper focused on the root of `node`.
pub fn zip<T: ZipTree>(node: T) -> Zipper<T> {
    Zipper::new(node)
}

impl<T: Clone> Clone for Zipper<T> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
            path: self.path.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for Zipper<T> {
    fn eq(&self, rhs: &Self) -> bool {
        if self.node != rhs.node {
            return false;
        }
        match (&self.path, &rhs.path) {
            (None, None) => true,
            (Some(l), Some(r)) => {
                Rc::ptr_eq(l, r)
                    || (l.left == r.left && l.right == r.right && l.parent == r.parent)
            }
            _ => false,
        }
    }
}

impl<T> Zipper<T> {
    /// The node in focus.
    pub fn node(&self) -> &T {
        &self.node
    }

    /// Consume the zipper and return the node in focus.
    pub fn into_node(self) -> T {
        self.node
    }

    /// Returns true if the focus is the root of the whole tree.
    pub fn is_root(&self) -> bool {
        self.path.is_none()
    }

    /// Returns true if the focus has a sibling to its left.
    pub fn has_left(&self) -> bool {
        self.path.as_ref().is_some_and(|path| !path.left.is_empty())
    }

    /// Returns true if the focus has a sibling to its right.
    pub fn has_right(&self) -> bool {
        self.path.as_ref().is_some_and(|path| !path.right.is_empty())
    }

    /// Number of ancestors above the focus.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut path = self.path.as_deref();
        while let Some(p) = path {
            depth += 1;
            path = p.parent.path.as_deref();
        }
        depth
    }

    /// Position of the focus among its siblings; 0 at the root.
    pub fn index(&self) -> usize {
        self.path.as_ref().map_or(0, |path| path.left.len())
    }

    /// Child indices leading from the root to the focus.
    pub fn route(&self) -> Vec<usize> {
        let mut route = Vec::with_capacity(self.depth());
        let mut path = self.path.as_deref();
        while let Some(p) = path {
            route.push(p.left.len());
            path = p.parent.path.as_deref();
        }
        route.reverse();
        route
    }
}

impl<T: ZipTree> Zipper<T> {
    /// Construct a zipper focused on the root of `node`.
    pub fn new(node: T) -> Self {
        Self { node, path: None }
    }

    /// Siblings to the left of the focus, in tree order.
    pub fn lefts(&self) -> Vec<T> {
        self.path.as_ref().map_or_else(Vec::new, |path| {
            let mut items = path.left.to_vec();
            items.reverse();
            items
        })
    }

    /// Siblings to the right of the focus, in tree order.
    pub fn rights(&self) -> Vec<T> {
        self.path
            .as_ref()
            .map_or_else(Vec::new, |path| path.right.to_vec())
    }

    /// Move to the first child of the focus.
    ///
    /// Returns `None` for leaves and for branches without children.
    pub fn down(&self) -> Option<Self> {
        if !self.node.is_branch() {
            return None;
        }
        let mut children = self.node.children().into_iter();
        let first = children.next()?;
        Some(Self {
            node: first,
            path: Some(Rc::new(Path {
                parent: self.clone(),
                left: Siblings::new(),
                right: Siblings::from_vec(children.collect()),
            })),
        })
    }

    /// Move to the parent, rebuilding it from the current focus and siblings.
    ///
    /// This is the only place edits below a node become visible in it.
    /// Returns `None` at the root.
    pub fn up(&self) -> Option<Self> {
        let path = self.path.as_ref()?;
        let mut children = path.left.to_vec();
        children.reverse();
        children.push(self.node.clone());
        children.extend(path.right.iter().cloned());
        Some(Self {
            node: path.parent.node.make_node(children),
            path: path.parent.path.clone(),
        })
    }

    /// Move to the previous sibling.
    pub fn left(&self) -> Option<Self> {
        let path = self.path.as_ref()?;
        let (node, left) = path.left.pop()?;
        Some(Self {
            node,
            path: Some(Rc::new(Path {
                parent: path.parent.clone(),
                left,
                right: path.right.push(self.node.clone()),
            })),
        })
    }

    /// Move to the next sibling.
    pub fn right(&self) -> Option<Self> {
        let path = self.path.as_ref()?;
        let (node, right) = path.right.pop()?;
        Some(Self {
            node,
            path: Some(Rc::new(Path {
                parent: path.parent.clone(),
                left: path.left.push(self.node.clone()),
                right,
            })),
        })
    }

    /// Jump to the first sibling. Returns a copy of `self` when already there.
    #[must_use]
    pub fn leftmost(&self) -> Self {
        let Some(path) = self.path.as_ref() else {
            return self.clone();
        };
        let mut left = path.left.to_vec();
        let Some(node) = left.pop() else {
            return self.clone();
        };
        let mut right = path.right.push(self.node.clone());
        for item in left {
            right = right.push(item);
        }
        Self {
            node,
            path: Some(Rc::new(Path {
                parent: path.parent.clone(),
                left: Siblings::new(),
                right,
            })),
        }
    }

    /// Jump to the last sibling. Returns a copy of `self` when already there.
    #[must_use]
    pub fn rightmost(&self) -> Self {
        let Some(path) = self.path.as_ref() else {
            return self.clone();
        };
        let mut right = path.right.to_vec();
        let Some(node) = right.pop() else {
            return self.clone();
        };
        let mut left = path.left.push(self.node.clone());
        for item in right {
            left = left.push(item);
        }
        Self {
            node,
            path: Some(Rc::new(Path {
                parent: path.parent.clone(),
                left,
                right: Siblings::new(),
            })),
        }
    }

    /// Move up until the focus is the root of the tree.
    #[must_use]
    pub fn top(&self) -> Self {
        let mut zipper = self.clone();
        while let Some(up) = zipper.up() {
            zipper = up;
        }
        zipper
    }

    /// The whole tree, with every edit applied.
    pub fn root(&self) -> T {
        self.top().node
    }

    /// Consume the zipper and return the whole tree.
    pub fn into_root(self) -> T {
        let mut zipper = self;
        while let Some(up) = zipper.up() {
            zipper = up;
        }
        zipper.node
    }

    /// Descend through last children until reaching a node without any.
    #[must_use]
    pub(crate) fn deepest_rightmost(self) -> Self {
        let mut zipper = self;
        while let Some(child) = zipper.down() {
            zipper = child.rightmost();
        }
        zipper
    }
}
