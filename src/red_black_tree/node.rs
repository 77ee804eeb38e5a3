use crate::arena::Entry;
use std::fmt;

/// A link to a node stored in the tree's arena. `None` stands for an empty subtree.
pub type Link = Option<Entry>;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Red => write!(f, "R"),
            Color::Black => write!(f, "B"),
        }
    }
}

/// The side of a parent a child hangs off, or the direction of a rotation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A struct representing an internal node of a red black tree.
///
/// Child links own their subtree through the arena; `parent` is only a back-reference used when
/// walking up during fix-up and rotations.
pub struct Node<T> {
    pub key: T,
    pub color: Color,
    pub parent: Link,
    pub left: Link,
    pub right: Link,
}

impl<T> Node<T> {
    pub fn new(key: T) -> Self {
        // new nodes are red by default
        Node {
            key,
            color: Color::Red,
            parent: None,
            left: None,
            right: None,
        }
    }

    pub fn child(&self, direction: Direction) -> Link {
        match direction {
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    pub fn set_child(&mut self, direction: Direction, link: Link) {
        match direction {
            Direction::Left => self.left = link,
            Direction::Right => self.right = link,
        }
    }

    /// Returns the side of this node that `entry` hangs off. Assumes `entry` is a child.
    pub fn side_of(&self, entry: Entry) -> Direction {
        if self.left == Some(entry) {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

impl<T> fmt::Display for Node<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, " {}{} ", self.color, self.key)
    }
}
