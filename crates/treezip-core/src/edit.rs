//! Local edits at the focus of a zipper.
//!
//! Edits never touch ancestors directly. They change the focus or the
//! sibling sequences of the current path; `up` folds them into the parent.

use std::rc::Rc;

use crate::error::{RootOp, ZipperError};
use crate::tree::ZipTree;
use crate::zipper::{Path, Zipper};

fn root_error(op: RootOp) -> ZipperError {
    tracing::debug!(op = %op, "rejected structural edit at tree root");
    ZipperError::InvalidRootOperation { op }
}

impl<T: ZipTree> Zipper<T> {
    /// Replace the focus with `node`, keeping the path.
    #[must_use]
    pub fn replace(&self, node: T) -> Self {
        Self {
            node,
            path: self.path.clone(),
        }
    }

    /// Replace the focus with `f(focus)`.
    #[must_use]
    pub fn update(&self, f: impl FnOnce(&T) -> T) -> Self {
        self.replace(f(&self.node))
    }

    /// Remove the focus from the tree.
    ///
    /// With a left sibling, the result focuses on the last pre-order
    /// position of that sibling's subtree, i.e. the node that came right
    /// before the removed one. Without a left sibling, the result focuses on
    /// the parent, rebuilt from the remaining right siblings.
    ///
    /// Removing the root is an error.
    pub fn remove(&self) -> Result<Self, ZipperError> {
        let Some(path) = self.path.as_ref() else {
            return Err(root_error(RootOp::Remove));
        };

        match path.left.pop() {
            Some((node, left)) => {
                let sibling = Self {
                    node,
                    path: Some(Rc::new(Path {
                        parent: path.parent.clone(),
                        left,
                        right: path.right.clone(),
                    })),
                };
                Ok(sibling.deepest_rightmost())
            }
            None => Ok(Self {
                node: path.parent.node.make_node(path.right.to_vec()),
                path: path.parent.path.clone(),
            }),
        }
    }

    /// Insert `node` as the immediate left sibling of the focus.
    /// The focus does not move.
    pub fn insert_left(&self, node: T) -> Result<Self, ZipperError> {
        let Some(path) = self.path.as_ref() else {
            return Err(root_error(RootOp::InsertLeft));
        };
        Ok(Self {
            node: self.node.clone(),
            path: Some(Rc::new(Path {
                parent: path.parent.clone(),
                left: path.left.push(node),
                right: path.right.clone(),
            })),
        })
    }

    /// Insert `node` as the immediate right sibling of the focus.
    /// The focus does not move.
    pub fn insert_right(&self, node: T) -> Result<Self, ZipperError> {
        let Some(path) = self.path.as_ref() else {
            return Err(root_error(RootOp::InsertRight));
        };
        Ok(Self {
            node: self.node.clone(),
            path: Some(Rc::new(Path {
                parent: path.parent.clone(),
                left: path.left.clone(),
                right: path.right.push(node),
            })),
        })
    }

    /// Insert `node` as the first child of the focus.
    #[must_use]
    pub fn insert_child(&self, node: T) -> Self {
        let mut children = self.node.children();
        children.insert(0, node);
        self.replace(self.node.make_node(children))
    }

    /// Insert `node` as the last child of the focus.
    #[must_use]
    pub fn append_child(&self, node: T) -> Self {
        let mut children = self.node.children();
        children.push(node);
        self.replace(self.node.make_node(children))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::{RootOp, ZipperError};
    use crate::term::Term;
    use crate::zipper::zip;

    fn sample() -> Term {
        Term::call(
            "Add",
            vec![
                Term::int(1),
                Term::call("Mul", vec![Term::int(2), Term::int(3)]),
            ],
        )
    }

    // ── replace / update ───────────────────────────────────────

    #[test]
    fn replace_propagates_on_root() {
        let z = zip(sample())
            .down()
            .unwrap()
            .right()
            .unwrap()
            .down()
            .unwrap();
        assert_eq!(z.node(), &Term::int(2));
        let z = z.replace(Term::int(20));
        assert_eq!(z.node(), &Term::int(20));
        assert_eq!(z.root().to_string(), "Add(1, Mul(20, 3))");
    }

    #[test]
    fn replace_at_root() {
        let z = zip(sample()).replace(Term::int(0));
        assert!(z.is_root());
        assert_eq!(z.root(), Term::int(0));
    }

    #[test]
    fn update_applies_function() {
        let z = zip(sample())
            .down()
            .unwrap()
            .update(|t| Term::int(t.as_int().unwrap() * 100));
        assert_eq!(z.root().to_string(), "Add(100, Mul(2, 3))");
    }

    #[test]
    fn replace_keeps_original_zipper() {
        let z = zip(sample()).down().unwrap();
        let _ = z.replace(Term::int(5));
        assert_eq!(z.root(), sample());
    }

    // ── remove ─────────────────────────────────────────────────

    #[test]
    fn remove_root_fails() {
        let err = zip(sample()).remove().unwrap_err();
        assert_eq!(err, ZipperError::InvalidRootOperation { op: RootOp::Remove });
    }

    #[test]
    fn remove_with_left_sibling_focuses_preceding_node() {
        // [Mul(2, 3), 4] -> remove 4 -> focus is 3, the last node of Mul(2, 3)
        let tree = Term::list(vec![
            Term::call("Mul", vec![Term::int(2), Term::int(3)]),
            Term::int(4),
        ]);
        let z = zip(tree).down().unwrap().right().unwrap();
        let z = z.remove().unwrap();
        assert_eq!(z.node(), &Term::int(3));
        assert_eq!(z.root().to_string(), "[Mul(2, 3)]");
    }

    #[test]
    fn remove_with_leaf_left_sibling_focuses_sibling() {
        let tree = Term::list(vec![Term::int(1), Term::int(2), Term::int(3)]);
        let z = zip(tree).down().unwrap().right().unwrap().remove().unwrap();
        assert_eq!(z.node(), &Term::int(1));
        assert_eq!(z.rights(), vec![Term::int(3)]);
        assert_eq!(z.root().to_string(), "[1, 3]");
    }

    #[test]
    fn remove_first_child_focuses_rebuilt_parent() {
        let tree = Term::list(vec![Term::int(1), Term::int(2), Term::int(3)]);
        let z = zip(tree).down().unwrap().remove().unwrap();
        assert!(z.is_root());
        assert_eq!(z.node().to_string(), "[2, 3]");
    }

    #[test]
    fn remove_only_child_leaves_empty_parent() {
        let tree = Term::call("f", vec![Term::call("g", vec![Term::int(1)])]);
        let z = zip(tree).down().unwrap().down().unwrap().remove().unwrap();
        assert_eq!(z.node().to_string(), "g()");
        assert_eq!(z.depth(), 1);
        assert_eq!(z.root().to_string(), "f(g())");
    }

    #[test]
    fn remove_pair_member_falls_back_to_block() {
        let tree = Term::pair(Term::atom("ok"), Term::int(1));
        let z = zip(tree).down().unwrap().remove().unwrap();
        assert_eq!(z.node(), &Term::block(vec![Term::int(1)]));
    }

    // ── sibling insertion ──────────────────────────────────────

    #[test]
    fn insert_siblings_at_root_fail() {
        let z = zip(sample());
        assert_eq!(
            z.insert_left(Term::int(0)).unwrap_err(),
            ZipperError::InvalidRootOperation {
                op: RootOp::InsertLeft
            }
        );
        assert_eq!(
            z.insert_right(Term::int(0)).unwrap_err(),
            ZipperError::InvalidRootOperation {
                op: RootOp::InsertRight
            }
        );
    }

    #[test]
    fn insert_left_and_right_keep_focus() {
        let tree = Term::list(vec![Term::int(1), Term::int(2), Term::int(3)]);
        let z = zip(tree)
            .down()
            .unwrap()
            .right()
            .unwrap()
            .insert_left(Term::int(10))
            .unwrap()
            .insert_right(Term::int(20))
            .unwrap();
        assert_eq!(z.node(), &Term::int(2));
        assert_eq!(z.left().unwrap().node(), &Term::int(10));
        assert_eq!(z.right().unwrap().node(), &Term::int(20));
        assert_eq!(z.root().to_string(), "[1, 10, 2, 20, 3]");
    }

    #[test]
    fn repeated_insert_right_stacks_nearest_first() {
        let tree = Term::list(vec![Term::int(1)]);
        let z = zip(tree)
            .down()
            .unwrap()
            .insert_right(Term::int(3))
            .unwrap()
            .insert_right(Term::int(2))
            .unwrap();
        assert_eq!(z.root().to_string(), "[1, 2, 3]");
    }

    // ── child insertion ────────────────────────────────────────

    #[test]
    fn insert_and_append_child() {
        let z = zip(Term::list(vec![Term::int(2)]))
            .insert_child(Term::int(1))
            .append_child(Term::int(3));
        assert!(z.is_root());
        assert_eq!(z.node().to_string(), "[1, 2, 3]");
    }

    #[test]
    fn child_insertion_does_not_move_focus() {
        let z = zip(sample()).down().unwrap().right().unwrap();
        let edited = z.append_child(Term::int(4));
        assert_eq!(edited.depth(), z.depth());
        assert_eq!(edited.index(), z.index());
        assert_eq!(edited.root().to_string(), "Add(1, Mul(2, 3, 4))");
    }

    #[test]
    fn child_insertion_into_leaf_keeps_leaf() {
        let z = zip(Term::int(1)).append_child(Term::int(2));
        assert_eq!(z.node(), &Term::block(vec![Term::int(1), Term::int(2)]));
        let z = zip(sample()).down().unwrap().insert_child(Term::int(0));
        assert_eq!(z.root().to_string(), "Add((1; 0), Mul(2, 3))");
    }

    #[test]
    fn append_child_to_pair_falls_back_to_block() {
        let z = zip(Term::pair(Term::int(1), Term::int(2))).append_child(Term::int(3));
        assert_eq!(z.node().to_string(), "(1; 2; 3)");
    }
}
