use crate::arena::{Entry, TypedArena};
use crate::red_black_tree::node::{Color, Direction, Link, Node};
use crate::red_black_tree::{Error, Result};
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

/// Number of nodes per arena chunk used by `RedBlackTree::new`.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// The order in which `RedBlackTree::traverse` visits nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalOrder {
    /// Node, then left subtree, then right subtree.
    Prefix,
    /// Left subtree, then node, then right subtree. Yields keys in ascending order.
    Infix,
    /// Left subtree, then right subtree, then node.
    Postfix,
}

/// An ordered set of unique keys implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree in which every node is colored red or
/// black. After every insertion the tree guarantees that the root is black, that no red node has a
/// red parent, and that every path from a node to its empty subtrees passes through the same
/// number of black nodes. Together these keep the height of the tree within `2 * log2(n + 1)`.
///
/// Inserting a key that is already present fails with `Error::DuplicateKey` and leaves the tree
/// untouched.
///
/// # Examples
///
/// ```
/// use rbtree_collections::red_black_tree::{Error, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// tree.insert(30).unwrap();
/// tree.insert(15).unwrap();
/// tree.insert(45).unwrap();
///
/// assert_eq!(tree.insert(15), Err(Error::DuplicateKey));
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min(), Ok(&15));
/// assert_eq!(tree.to_prefix_string(), " B30  R15  R45 ");
/// ```
pub struct RedBlackTree<T> {
    root: Link,
    arena: TypedArena<Node<T>>,
    len: usize,
}

impl<T> RedBlackTree<T> {
    /// Constructs a new, empty `RedBlackTree<T>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackTree<T>` whose node arena allocates `chunk_size` nodes at
    /// a time.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::with_chunk_size(16);
    /// for key in 0..100 {
    ///     tree.insert(key).unwrap();
    /// }
    /// assert_eq!(tree.len(), 100);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        RedBlackTree {
            root: None,
            arena: TypedArena::new(chunk_size),
            len: 0,
        }
    }

    /// Constructs a `RedBlackTree<T>` holding a single key in a black root.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let tree = RedBlackTree::from_key(15);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(tree.to_prefix_string(), " B15 ");
    /// ```
    pub fn from_key(key: T) -> Self
    where
        T: Ord,
    {
        let mut tree = Self::new();
        tree.attach(key);
        tree.len = 1;
        tree
    }

    /// Inserts a key into the tree and restores the red black invariants. Returns
    /// `Error::DuplicateKey` without modifying the tree if the key already exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.insert(10), Ok(()));
    /// assert_eq!(tree.insert(10), Err(Error::DuplicateKey));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> Result<()>
    where
        T: Ord,
    {
        if self.find(&key).is_some() {
            debug!("Rejected duplicate key; tree still holds {} keys.", self.len);
            return Err(Error::DuplicateKey);
        }

        let entry = self.attach(key);
        self.len += 1;

        // a black parent can never produce two reds in a row
        let parent = self.arena[entry].parent;
        if self.is_red(parent) {
            self.insert_fixup(entry);
        }
        Ok(())
    }

    /// Checks if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// assert!(!tree.contains(&0));
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Returns a reference to the key in the tree equal to `key`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(String::from("b")).unwrap();
    /// assert_eq!(tree.get("b"), Some(&String::from("b")));
    /// assert_eq!(tree.get("a"), None);
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&T>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.find(key).map(|entry| &self.arena[entry].key)
    }

    /// Returns the minimum key of the tree. Returns `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.min(), Err(Error::EmptyTree));
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.min(), Ok(&1));
    /// ```
    pub fn min(&self) -> Result<&T> {
        self.extreme(Direction::Left)
    }

    /// Returns the maximum key of the tree. Returns `Error::EmptyTree` if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::{Error, RedBlackTree};
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.max(), Err(Error::EmptyTree));
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(tree.max(), Ok(&3));
    /// ```
    pub fn max(&self) -> Result<&T> {
        self.extreme(Direction::Right)
    }

    /// Returns the number of keys in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Clears the tree, releasing every node at once.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(1).unwrap();
    /// tree.insert(2).unwrap();
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.to_infix_string(), "");
    /// ```
    pub fn clear(&mut self) {
        debug!("Clearing red black tree with {} keys.", self.len);
        self.root = None;
        self.arena = TypedArena::new(self.arena.chunk_size());
        self.len = 0;
    }

    /// Returns every key paired with the color of its node, in the requested order.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::{Color, RedBlackTree, TraversalOrder};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    /// assert_eq!(
    ///     tree.traverse(TraversalOrder::Postfix),
    ///     vec![(&1, Color::Red), (&2, Color::Black)],
    /// );
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Vec<(&T, Color)> {
        self.nodes_in(order)
            .into_iter()
            .map(|node| (&node.key, node.color))
            .collect()
    }

    /// Renders the tree in pre-order. Each node becomes `" "`, its color tag, its key and `" "`.
    pub fn to_prefix_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.render(TraversalOrder::Prefix)
    }

    /// Renders the tree in in-order, using the same node format as `to_prefix_string`.
    pub fn to_infix_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.render(TraversalOrder::Infix)
    }

    /// Renders the tree in post-order, using the same node format as `to_prefix_string`.
    pub fn to_postfix_string(&self) -> String
    where
        T: fmt::Display,
    {
        self.render(TraversalOrder::Postfix)
    }

    /// Returns an iterator over the tree. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree_collections::red_black_tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.insert(3).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackTreeIter<'_, T> {
        RedBlackTreeIter {
            tree: self,
            current: self.root,
            stack: Vec::new(),
        }
    }

    fn find<V>(&self, key: &V) -> Link
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        let mut curr = self.root;
        while let Some(entry) = curr {
            let node = &self.arena[entry];
            curr = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(entry),
            };
        }
        None
    }

    fn extreme(&self, direction: Direction) -> Result<&T> {
        let mut curr = self.root.ok_or(Error::EmptyTree)?;
        while let Some(child) = self.arena[curr].child(direction) {
            curr = child;
        }
        Ok(&self.arena[curr].key)
    }

    fn is_red(&self, link: Link) -> bool {
        match link {
            None => false,
            Some(entry) => self.arena[entry].color == Color::Red,
        }
    }

    fn set_color(&mut self, entry: Entry, color: Color) {
        self.arena[entry].color = color;
    }

    // Plain binary search tree insertion. The first node becomes a black root.
    fn attach(&mut self, key: T) -> Entry
    where
        T: Ord,
    {
        let mut parent = None;
        let mut direction = Direction::Left;
        let mut curr = self.root;
        while let Some(entry) = curr {
            let node = &self.arena[entry];
            direction = if key < node.key {
                Direction::Left
            } else {
                Direction::Right
            };
            parent = Some(entry);
            curr = node.child(direction);
        }

        let mut new_node = Node::new(key);
        new_node.parent = parent;
        let entry = self.arena.allocate(new_node);
        match parent {
            None => {
                self.set_color(entry, Color::Black);
                self.root = Some(entry);
            },
            Some(parent) => self.arena[parent].set_child(direction, Some(entry)),
        }
        entry
    }

    fn insert_fixup(&mut self, mut curr: Entry) {
        while let Some(parent) = self.arena[curr].parent {
            if self.arena[parent].color != Color::Red {
                break;
            }
            let grandparent = match self.arena[parent].parent {
                Some(grandparent) => grandparent,
                None => break,
            };

            let side = self.arena[grandparent].side_of(parent);
            let uncle = self.arena[grandparent].child(side.opposite());

            if self.is_red(uncle) {
                trace!("Insert fix-up: red uncle, recoloring and moving up.");
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                curr = grandparent;
                continue;
            }

            let mut parent = parent;
            if self.arena[parent].side_of(curr) != side {
                trace!("Insert fix-up: inner child, rotating {:?} at parent.", side);
                self.rotate(parent, side);
                // the old parent now hangs below `curr` on the outer side
                let rotated = parent;
                parent = curr;
                curr = rotated;
            }

            trace!(
                "Insert fix-up: outer child, rotating {:?} at grandparent.",
                side.opposite(),
            );
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    // Rotates `entry` in `direction`; its child on the opposite side becomes the pivot that takes
    // its place. Does nothing if that child is missing.
    fn rotate(&mut self, entry: Entry, direction: Direction) {
        let pivot = match self.arena[entry].child(direction.opposite()) {
            Some(pivot) => pivot,
            None => return,
        };

        let inner = self.arena[pivot].child(direction);
        self.arena[entry].set_child(direction.opposite(), inner);
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(entry);
        }

        let parent = self.arena[entry].parent;
        self.arena[pivot].parent = parent;
        match parent {
            None => self.root = Some(pivot),
            Some(parent) => {
                let side = self.arena[parent].side_of(entry);
                self.arena[parent].set_child(side, Some(pivot));
            },
        }

        self.arena[pivot].set_child(direction, Some(entry));
        self.arena[entry].parent = Some(pivot);
    }

    fn nodes_in(&self, order: TraversalOrder) -> Vec<&Node<T>> {
        let mut nodes = Vec::with_capacity(self.len);
        self.collect_nodes(self.root, order, &mut nodes);
        nodes
    }

    fn collect_nodes<'a>(
        &'a self,
        link: Link,
        order: TraversalOrder,
        nodes: &mut Vec<&'a Node<T>>,
    ) {
        let node = match link {
            Some(entry) => &self.arena[entry],
            None => return,
        };
        if order == TraversalOrder::Prefix {
            nodes.push(node);
        }
        self.collect_nodes(node.left, order, nodes);
        if order == TraversalOrder::Infix {
            nodes.push(node);
        }
        self.collect_nodes(node.right, order, nodes);
        if order == TraversalOrder::Postfix {
            nodes.push(node);
        }
    }

    fn render(&self, order: TraversalOrder) -> String
    where
        T: fmt::Display,
    {
        self.nodes_in(order)
            .into_iter()
            .map(|node| node.to_string())
            .collect()
    }

    // Copies the subtree at `link` into `arena` and returns the copy's root. Parent links of the
    // copy are rebuilt from the copied child links.
    fn copy_subtree(&self, link: Link, arena: &mut TypedArena<Node<T>>) -> Link
    where
        T: Clone,
    {
        let source = &self.arena[link?];
        let left = self.copy_subtree(source.left, arena);
        let right = self.copy_subtree(source.right, arena);
        let copy = arena.allocate(Node {
            key: source.key.clone(),
            color: source.color,
            parent: None,
            left,
            right,
        });
        for child in left.iter().chain(right.iter()) {
            arena[*child].parent = Some(copy);
        }
        Some(copy)
    }
}

impl<T> Clone for RedBlackTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        debug!("Copying red black tree with {} keys.", self.len);
        let mut arena = TypedArena::new(self.arena.chunk_size());
        let root = self.copy_subtree(self.root, &mut arena);
        RedBlackTree {
            root,
            arena,
            len: self.len,
        }
    }
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RedBlackTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for RedBlackTree<T>
where
    T: Ord,
{
    /// Inserts every key of the iterator. Keys that are already present are skipped.
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            // duplicates are already logged by insert
            let _ = self.insert(key);
        }
    }
}

impl<T> FromIterator<T> for RedBlackTree<T>
where
    T: Ord,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut tree = RedBlackTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T>
where
    T: 'a,
{
    type IntoIter = RedBlackTreeIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator for `RedBlackTree<T>`.
///
/// This iterator traverses the elements of the tree in-order and yields immutable references.
pub struct RedBlackTreeIter<'a, T> {
    tree: &'a RedBlackTree<T>,
    current: Link,
    stack: Vec<Entry>,
}

impl<'a, T> Iterator for RedBlackTreeIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let tree = self.tree;
        while let Some(entry) = self.current {
            self.current = tree.arena[entry].left;
            self.stack.push(entry);
        }
        self.stack.pop().map(|entry| {
            let node = &tree.arena[entry];
            self.current = node.right;
            &node.key
        })
    }
}
