//! Self-balancing binary search tree that uses a color bit to ensure that the tree remains
//! approximately balanced during insertions.
//!
//! Nodes live in a `TypedArena` owned by the tree, and every node keeps a handle to its parent so
//! that the insertion fix-up can walk back up towards the root.

mod node;
mod tree;

pub use self::node::Color;
pub use self::tree::{RedBlackTree, RedBlackTreeIter, TraversalOrder, DEFAULT_CHUNK_SIZE};

use std::error;
use std::fmt;
use std::result;

/// Errors returned by `RedBlackTree` operations. A failed operation never mutates the tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The key being inserted is already in the tree.
    DuplicateKey,
    /// The tree has no root, so there is no minimum or maximum.
    EmptyTree,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DuplicateKey => write!(f, "key already exists in the red black tree"),
            Error::EmptyTree => write!(f, "Red Black Tree is empty"),
        }
    }
}

/// Convenience `Result` type for red black tree operations.
pub type Result<T> = result::Result<T, Error>;
