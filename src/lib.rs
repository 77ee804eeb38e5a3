//! An ordered set of unique keys backed by a red black tree.
//!
//! The tree stores its nodes in a [`TypedArena`](arena/struct.TypedArena.html) and links them with
//! arena entries, so each node can refer back to its parent without a second owner. Insertion
//! rebalances the tree by recoloring and rotating nodes on the way back up to the root.
//!
//! # Examples
//!
//! ```
//! use rbtree_collections::red_black_tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! for key in &[12, 11, 15, 5, 13, 7] {
//!     tree.insert(*key).unwrap();
//! }
//!
//! assert_eq!(tree.to_infix_string(), " R5  B7  R11  B12  R13  B15 ");
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&5, &7, &11, &12, &13, &15]);
//! ```

#[macro_use]
extern crate log;

pub mod arena;
pub mod red_black_tree;
