//! treezip-core: persistent zippers over ordered trees
//!
//! A [`Zipper`] is an immutable cursor into a tree. It moves up, down, left
//! and right in constant time, edits the node under it locally, and
//! rebuilds the whole edited tree on demand. Formatters, linters and codemod
//! engines use it to find and rewrite small parts of large syntax trees
//! without rebuilding the tree after every edit.
//!
//! # Example
//!
//! ```
//! use treezip_core::{Direction, Term, zip};
//!
//! let tree = Term::call(
//!     "Add",
//!     vec![Term::int(1), Term::call("Mul", vec![Term::int(2), Term::int(3)])],
//! );
//! let two = zip(tree)
//!     .find(Direction::Next, |t| t == &Term::int(2))
//!     .unwrap();
//! let edited = two.replace(Term::int(20)).root();
//! assert_eq!(edited.to_string(), "Add(1, Mul(20, 3))");
//! ```
//!
//! # Modules
//!
//! - `tree`: the three-function contract (`ZipTree`) a node type implements
//! - `zipper`: the zipper value and structural moves
//! - `edit`: replace/update/remove and sibling/child insertion
//! - `traverse`: pre-order stepping, `traverse*` drivers and `find`
//! - `display`: focus rendering with position markers
//! - `term`, `json`: built-in node shapes
//! - `config`, `logging`, `error`: ambient plumbing
//!
//! # Safety
//!
//! This crate forbids unsafe code.

#![forbid(unsafe_code)]

pub mod config;
pub mod display;
mod edit;
pub mod error;
pub mod json;
pub mod logging;
pub mod siblings;
pub mod term;
pub mod traverse;
pub mod tree;
pub mod zipper;

pub use display::{DisplayConfig, DisplayMode, ZipperDisplay};
pub use error::{Error, Result, RootOp, ZipperError};
pub use term::Term;
pub use traverse::{Control, Direction, Positions};
pub use tree::ZipTree;
pub use zipper::{Zipper, zip};
