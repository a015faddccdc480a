//! An unbalanced Binary Search Tree that owns its nodes outright. Every `Node` is reachable from
//! exactly one parent, so the whole structure is a chain of `Box`es hanging off the root and
//! dropping the `Tree` drops every value in it.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.find(&1));
//!
//! // Inserting a value that is already present is a no-op.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Removing reports whether anything was removed.
//! assert!(tree.remove(&1));
//! assert!(!tree.remove(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::io;
use std::mem;

use tracing::{debug, trace};

use crate::iter::Iter;
use crate::print::Printer;

/// The order in which a traversal visits the nodes of a [`Tree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Order {
    /// Left subtree, node, right subtree. Values come out in ascending order.
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

/// A Binary Search Tree holding distinct values of a totally ordered type. It does not rebalance
/// itself so inserting already-sorted values degrades it into a list.
pub struct Tree<T> {
    root: Link<T>,
    /// Number of nodes reachable from `root`.
    size: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            size: self.size,
        }
    }

    /// Replaces the contents of `self` with a deep copy of `source`. The copy is built in full
    /// before `self` is touched, so if cloning a value panics `self` is left as it was.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Two trees are equal when they hold the same values, whatever their shapes.
impl<T> PartialEq for Tree<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T> Eq for Tree<T> where T: Eq {}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::empty(),
            size: 0,
        }
    }

    /// The number of values in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Whether the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.find(&1));
    /// assert!(!tree.find(&42));
    /// ```
    pub fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.root.find(value)
    }

    /// Inserts `value` as a new leaf. Returns `false` and leaves the tree untouched if an equal
    /// value is already present; the stored value is not replaced.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(2));
    /// assert!(tree.insert(1));
    /// assert!(!tree.insert(2));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let inserted = self.root.insert(value);
        if inserted {
            self.size += 1;
            trace!(size = self.size, "inserted value");
        } else {
            trace!(size = self.size, "rejected duplicate value");
        }
        inserted
    }

    /// Removes the value equal to `value` from the tree. Returns `false` if there was no such
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 1, 6].into_iter().collect();
    ///
    /// assert!(tree.remove(&5));
    /// assert!(!tree.remove(&5));
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 6]);
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let removed = self.root.remove(value);
        if removed {
            self.size -= 1;
            trace!(size = self.size, "removed value");
        }
        removed
    }

    /// Drops every value in the tree, children before their parents.
    pub fn clear(&mut self) {
        let dropped = self.size;
        self.root.clear();
        self.size = 0;
        debug!(dropped, "cleared tree");
    }

    /// Moves the contents out into a new `Tree`, leaving `self` empty. No node is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::Tree;
    ///
    /// let mut tree: Tree<_> = [1, 2, 3].into_iter().collect();
    /// let moved = tree.take();
    ///
    /// assert!(tree.is_empty());
    /// assert_eq!(moved.len(), 3);
    /// ```
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Exchanges the contents of two trees. No node is touched.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.root, &mut other.root);
        mem::swap(&mut self.size, &mut other.size);
    }

    /// Calls `visit` on every value in ascending order.
    pub fn in_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.root.in_order(&mut visit);
    }

    /// Calls `visit` on every node's value before the values of its subtrees.
    pub fn pre_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.root.pre_order(&mut visit);
    }

    /// Calls `visit` on every node's value after the values of its subtrees.
    pub fn post_order<'a, F>(&'a self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        self.root.post_order(&mut visit);
    }

    /// Calls `visit` on every value in the given [`Order`].
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Order, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut visited = Vec::new();
    /// tree.traverse(Order::PostOrder, |value| visited.push(*value));
    /// assert_eq!(visited, [1, 3, 2]);
    /// ```
    pub fn traverse<'a, F>(&'a self, order: Order, visit: F)
    where
        F: FnMut(&'a T),
    {
        match order {
            Order::InOrder => self.in_order(visit),
            Order::PreOrder => self.pre_order(visit),
            Order::PostOrder => self.post_order(visit),
        }
    }

    /// An iterator positioned at the smallest value.
    pub fn begin(&self) -> Iter<'_, T> {
        Iter::new(self.root.node(), self.size)
    }

    /// An iterator positioned one past the largest value.
    pub fn end(&self) -> Iter<'_, T> {
        Iter::end()
    }

    /// Iterates over the values in ascending order. Same as [`Tree::begin`].
    pub fn iter(&self) -> Iter<'_, T> {
        self.begin()
    }

    /// Writes the tree sideways to `out` using the default [`Printer`].
    pub fn print<W>(&self, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write + ?Sized,
    {
        Printer::default().print(self, out)
    }

    pub(crate) fn root(&self) -> Option<&Node<T>> {
        self.root.node()
    }
}

/// An owning, nullable pointer to a subtree.
pub(crate) struct Link<T>(Option<Box<Node<T>>>);

impl<T> Clone for Link<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self(self.node().map(|node| Box::new(node.clone())))
    }
}

impl<T> Link<T> {
    fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    fn take(&mut self) -> Self {
        Self(self.0.take())
    }

    fn clear(&mut self) {
        if let Some(mut node) = self.0.take() {
            node.left.clear();
            node.right.clear();
        }
    }

    fn find(&self, value: &T) -> bool
    where
        T: Ord,
    {
        match self.node() {
            None => false,
            Some(node) => match value.cmp(&node.value) {
                Ordering::Less => node.left.find(value),
                Ordering::Equal => true,
                Ordering::Greater => node.right.find(value),
            },
        }
    }

    fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        match self.0 {
            None => {
                self.0 = Some(Box::new(Node::new(value)));
                true
            }
            Some(ref mut node) => {
                let inserted = match value.cmp(&node.value) {
                    Ordering::Less => node.left.insert(value),
                    Ordering::Equal => false,
                    Ordering::Greater => node.right.insert(value),
                };

                if cfg!(debug_assertions) {
                    if let Some(left) = node.left() {
                        assert!(node.value > left.value);
                    }
                    if let Some(right) = node.right() {
                        assert!(node.value < right.value);
                    }
                }
                inserted
            }
        }
    }

    /// Removes `value` from this subtree. A node with two children keeps its place and takes
    /// over the value of its in-order successor instead.
    fn remove(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let node = match self.0 {
            None => return false,
            Some(ref mut node) => node,
        };

        match value.cmp(&node.value) {
            Ordering::Less => node.left.remove(value),
            Ordering::Greater => node.right.remove(value),
            Ordering::Equal => {
                match (node.left.is_empty(), node.right.is_empty()) {
                    (true, _) => *self = node.right.take(),
                    (_, true) => *self = node.left.take(),
                    (false, false) => {
                        if let Some(successor) = node.right.take_min() {
                            node.value = successor;
                        }
                    }
                }
                true
            }
        }
    }

    /// Unlinks the leftmost node of this subtree, splicing its right child into its place, and
    /// returns its value.
    fn take_min(&mut self) -> Option<T> {
        let node = self.0.as_deref_mut()?;
        if !node.left.is_empty() {
            return node.left.take_min();
        }

        let right = node.right.take();
        mem::replace(self, right).0.map(|node| node.value)
    }

    fn in_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Some(node) = self.node() {
            node.left.in_order(visit);
            visit(&node.value);
            node.right.in_order(visit);
        }
    }

    fn pre_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Some(node) = self.node() {
            visit(&node.value);
            node.left.pre_order(visit);
            node.right.pre_order(visit);
        }
    }

    fn post_order<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a T),
    {
        if let Some(node) = self.node() {
            node.left.post_order(visit);
            node.right.post_order(visit);
            visit(&node.value);
        }
    }
}

/// A `Node` owns its value and both of its subtrees. Everything in `left` is smaller than
/// `value` and everything in `right` is larger.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Clone for Node<T>
where
    T: Clone,
{
    // Root first, then the left subtree, then the right one.
    fn clone(&self) -> Self {
        let value = self.value.clone();
        let left = self.left.clone();
        let right = self.right.clone();
        Self { value, left, right }
    }
}

impl<T> Node<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            left: Link::empty(),
            right: Link::empty(),
        }
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.node()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.node()
    }
}

#[cfg(test)]
impl<T> Tree<T>
where
    T: Ord + fmt::Debug,
{
    /// Walks the whole tree asserting the ordering invariant and that `size` matches the number
    /// of reachable nodes.
    pub(crate) fn assert_invariants(&self) {
        fn check<'a, T>(link: &'a Link<T>, lower: Option<&'a T>, upper: Option<&'a T>) -> usize
        where
            T: Ord + fmt::Debug,
        {
            let Some(node) = link.node() else {
                return 0;
            };
            if let Some(lower) = lower {
                assert!(lower < &node.value, "{:?} is right of {:?}", node.value, lower);
            }
            if let Some(upper) = upper {
                assert!(&node.value < upper, "{:?} is left of {:?}", node.value, upper);
            }

            1 + check(&node.left, lower, Some(&node.value))
                + check(&node.right, Some(&node.value), upper)
        }

        assert_eq!(check(&self.root, None, None), self.size);
        assert_eq!(self.is_empty(), self.size == 0);
    }
}
