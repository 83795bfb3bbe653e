//! The tree contract the zipper is written against.
//!
//! A zipper never looks inside a node directly. Everything it needs is
//! expressed through three operations: classify a node as a branch or a leaf,
//! list a branch's children, and rebuild a node of the same shape around a
//! new list of children. Implement [`ZipTree`] for a node type and every
//! zipper operation becomes available for it.
//!
//! Built-in implementations live next to their node types:
//! [`crate::term::Term`] and `serde_json::Value` (see [`crate::json`]).

/// Shape contract for nodes that can be navigated by a [`crate::Zipper`].
///
/// Implementations must uphold the round-trip law: for every branch `n`,
/// `n.make_node(n.children())` is equal to `n`.
///
/// `make_node` must be total. When the supplied children do not fit the
/// template's shape (a fixed-arity node receiving the wrong number of
/// children, say), return a documented fallback shape instead of panicking.
///
/// Nodes are cloned whenever the zipper takes a parent snapshot, so types
/// that share their children (`Rc<[T]>`, persistent vectors) keep every
/// move cheap.
pub trait ZipTree: Clone {
    /// Returns true if this node can hold children.
    ///
    /// A branch may have zero children; anything that is not a branch is a
    /// leaf.
    fn is_branch(&self) -> bool;

    /// The direct children of this node, left to right.
    ///
    /// Leaves return an empty vector.
    fn children(&self) -> Vec<Self>;

    /// Build a node shaped like `self` holding `children`.
    fn make_node(&self, children: Vec<Self>) -> Self;
}

/// Count every node reachable from `node`, including `node` itself.
pub fn node_count<T: ZipTree>(node: &T) -> usize {
    1 + node.children().iter().map(node_count).sum::<usize>()
}

/// Collect the nodes of `node` in pre-order.
pub fn preorder<T: ZipTree>(node: &T) -> Vec<T> {
    let mut out = Vec::new();
    let mut stack = vec![node.clone()];
    while let Some(next) = stack.pop() {
        let mut children = next.children();
        children.reverse();
        out.push(next);
        stack.extend(children);
    }
    out
}
