//! A syntax-tree node shape for code-like trees.
//!
//! `Term` covers the shapes most parsers produce: tagged compounds with an
//! argument list, fixed two-element pairs, plain sequences and atomic
//! literals. Children live behind `Rc` so the zipper can snapshot parents
//! without copying subtrees.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::tree::ZipTree;

/// A node in a syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Term {
    /// Tagged compound, e.g. a call or an operator application.
    Call { tag: String, args: Rc<[Term]> },
    /// Fixed-arity two-tuple.
    Pair(Rc<Term>, Rc<Term>),
    /// Sequence of statements.
    Block(Rc<[Term]>),
    /// Literal list.
    List(Rc<[Term]>),
    Atom(String),
    Int(i64),
    Str(String),
}

impl Term {
    pub fn call(tag: impl Into<String>, args: Vec<Term>) -> Self {
        Self::Call {
            tag: tag.into(),
            args: args.into(),
        }
    }

    pub fn pair(left: Term, right: Term) -> Self {
        Self::Pair(Rc::new(left), Rc::new(right))
    }

    pub fn block(items: Vec<Term>) -> Self {
        Self::Block(items.into())
    }

    pub fn list(items: Vec<Term>) -> Self {
        Self::List(items.into())
    }

    pub fn atom(name: impl Into<String>) -> Self {
        Self::Atom(name.into())
    }

    pub const fn int(value: i64) -> Self {
        Self::Int(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self::Str(value.into())
    }

    /// The tag of a `Call`, if this is one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::Call { tag, .. } => Some(tag),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if this is a `Call` tagged `tag`.
    pub fn is_call(&self, tag: &str) -> bool {
        self.tag() == Some(tag)
    }
}

impl From<i64> for Term {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Tagged compounds, pairs, blocks and lists are branches; literals and
/// atoms are leaves.
///
/// `make_node` preserves the template's variant, with two fallbacks:
/// - a `Pair` given anything other than exactly two children becomes a
///   `Block` of those children;
/// - a leaf given children (via child insertion) becomes a `Block` holding
///   the leaf followed by the children, so the leaf's value is kept.
impl ZipTree for Term {
    fn is_branch(&self) -> bool {
        matches!(
            self,
            Self::Call { .. } | Self::Pair(..) | Self::Block(_) | Self::List(_)
        )
    }

    fn children(&self) -> Vec<Self> {
        match self {
            Self::Call { args, .. } => args.to_vec(),
            Self::Pair(left, right) => vec![Self::clone(left), Self::clone(right)],
            Self::Block(items) | Self::List(items) => items.to_vec(),
            Self::Atom(_) | Self::Int(_) | Self::Str(_) => Vec::new(),
        }
    }

    fn make_node(&self, children: Vec<Self>) -> Self {
        match self {
            Self::Call { tag, .. } => Self::Call {
                tag: tag.clone(),
                args: children.into(),
            },
            Self::Pair(..) => match <[Self; 2]>::try_from(children) {
                Ok([left, right]) => Self::pair(left, right),
                Err(children) => Self::Block(children.into()),
            },
            Self::List(_) => Self::List(children.into()),
            Self::Block(_) => Self::Block(children.into()),
            Self::Atom(_) | Self::Int(_) | Self::Str(_) => {
                let items: Vec<Self> = std::iter::once(self.clone()).chain(children).collect();
                Self::Block(items.into())
            }
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, items: &[Term], sep: &str) -> fmt::Result {
    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call { tag, args } => {
                write!(f, "{tag}(")?;
                write_seq(f, args, ", ")?;
                f.write_str(")")
            }
            Self::Pair(left, right) => write!(f, "{{{left}, {right}}}"),
            Self::Block(items) => {
                f.write_str("(")?;
                write_seq(f, items, "; ")?;
                f.write_str(")")
            }
            Self::List(items) => {
                f.write_str("[")?;
                write_seq(f, items, ", ")?;
                f.write_str("]")
            }
            Self::Atom(name) => write!(f, ":{name}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Str(value) => write!(f, "{value:?}"),
        }
    }
}
