//! A lazy in-order cursor over a [`Tree`](crate::Tree).
//!
//! The cursor keeps a position (the current node) and an explicit stack of the ancestors whose
//! value and right subtree are still to come. Nodes have no parent pointers, so this stack is the
//! only way back up. Advancing is `O(1)` amortized and `O(height)` in the worst case.
//!
//! # Examples
//!
//! ```
//! use search_tree::Tree;
//!
//! let tree: Tree<_> = [5, 1, 2, 3, 6].into_iter().collect();
//!
//! let mut cursor = tree.begin();
//! assert_eq!(cursor.get(), Some(&1));
//!
//! cursor.next();
//! assert_eq!(cursor.get(), Some(&2));
//!
//! // Walking off the end lands on `end()`.
//! while cursor.next().is_some() {}
//! assert!(cursor == tree.end());
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ptr;

use crate::tree::Node;

/// An iterator over the values of a [`Tree`](crate::Tree) in ascending order. Values are only
/// ever handed out by shared reference since changing one could break the ordering of the tree.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    stack: Vec<&'a Node<T>>,
    /// Values left to yield, counting `current`.
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Positions a new cursor at the smallest value of the subtree rooted at `root`, which holds
    /// `len` values.
    pub(crate) fn new(root: Option<&'a Node<T>>, len: usize) -> Self {
        let mut iter = Self {
            current: None,
            stack: Vec::new(),
            remaining: len,
        };
        iter.push_left_spine(root);
        iter.current = iter.stack.pop();
        iter
    }

    pub(crate) fn end() -> Self {
        Self {
            current: None,
            stack: Vec::new(),
            remaining: 0,
        }
    }

    /// The value at the current position, or `None` at the end.
    pub fn get(&self) -> Option<&'a T> {
        self.current.map(|node| &node.value)
    }

    /// Whether the cursor has moved past the largest value.
    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }

    /// Moves to the in-order successor: the leftmost node of the right subtree if there is one,
    /// otherwise the nearest ancestor still on the stack.
    fn advance(&mut self) {
        if let Some(current) = self.current {
            self.push_left_spine(current.right());
            self.current = self.stack.pop();
            self.remaining -= 1;
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.get()?;
        self.advance();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Manual implementation so cloning a cursor doesn't require `T: Clone`.
impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

/// Cursors are equal when they point at the same node, or are both at the end.
impl<T> PartialEq for Iter<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (Some(a), Some(b)) => ptr::eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Eq for Iter<'_, T> {}

impl<T> fmt::Debug for Iter<'_, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("current", &self.get())
            .field("remaining", &self.remaining)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    fn build(values: &[i32]) -> Tree<i32> {
        values.iter().copied().collect()
    }

    #[test]
    fn begin_is_end_on_empty_tree() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.begin() == tree.end());
        assert!(tree.begin().is_end());
        assert_eq!(tree.begin().get(), None);
        assert_eq!(tree.iter().len(), 0);
    }

    #[test]
    fn begin_is_smallest_value() {
        let tree = build(&[5, 1, 2, 3, 6]);

        assert_eq!(tree.begin().get(), Some(&1));
        assert!(tree.begin() == tree.begin());
        assert!(tree.begin() != tree.end());
    }

    #[test]
    fn yields_values_in_ascending_order() {
        let tree = build(&[50, 30, 70, 20, 40, 60, 80, 35, 45, 65]);

        let values: Vec<_> = tree.iter().copied().collect();
        assert_eq!(values, [20, 30, 35, 40, 45, 50, 60, 65, 70, 80]);

        // Iterating again starts from scratch.
        assert_eq!(tree.iter().count(), 10);
    }

    #[test]
    fn degenerate_trees() {
        let ascending = build(&[1, 2, 3, 4, 5]);
        let descending = build(&[5, 4, 3, 2, 1]);

        assert!(ascending.iter().eq(descending.iter()));
        assert!(ascending.iter().eq([1, 2, 3, 4, 5].iter()));
    }

    #[test]
    fn len_counts_down() {
        let tree = build(&[2, 1, 3]);
        let mut iter = tree.iter();

        assert_eq!(iter.len(), 3);
        iter.next();
        assert_eq!(iter.len(), 2);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn exhausted_cursor_equals_end_and_stays_there() {
        let tree = build(&[2, 1, 3]);
        let mut iter = tree.begin();

        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), Some(&3));
        assert!(iter == tree.end());

        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
        assert!(iter.is_end());
    }

    #[test]
    fn positions_compare_by_node() {
        let tree = build(&[2, 1, 3]);
        let mut a = tree.begin();
        let mut b = a.clone();

        a.next();
        assert!(a != b);
        b.next();
        assert!(a == b);

        // Same value, different node.
        let other = build(&[2, 1, 3]);
        assert!(tree.begin() != other.begin());
        assert!(tree.end() == other.end());
    }

    #[test]
    fn into_iterator_for_reference() {
        let tree = build(&[3, 1, 2]);
        let mut sum = 0;
        for value in &tree {
            sum += value;
        }

        assert_eq!(sum, 6);
    }
}
