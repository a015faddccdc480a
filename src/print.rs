//! Renders a [`Tree`] sideways for diagnostics: the right subtree above its parent, the left
//! subtree below, each level indented a further `margin` columns. Reading it with your head
//! tilted left shows the usual top-down picture. This is not a stable machine format.
//!
//! ```text
//!           6
//!      5
//!                     3
//!                2
//!           1
//! ```

use std::fmt;
use std::io;

use crate::tree::{Node, Tree};

/// Columns before the root.
pub const DEFAULT_INDENT: usize = 5;

/// Columns added per level.
pub const DEFAULT_MARGIN: usize = 5;

/// Writes the rotated picture of a tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Printer {
    /// Columns before the root.
    pub indent: usize,
    /// Columns added for every level below the root.
    pub margin: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(DEFAULT_INDENT, DEFAULT_MARGIN)
    }
}

impl Printer {
    /// A printer starting the root at `indent` columns and indenting each subtree by `margin`
    /// more columns than its parent.
    pub fn new(indent: usize, margin: usize) -> Self {
        Self { indent, margin }
    }

    /// Writes one line per value in the tree to `out`. An empty tree writes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use search_tree::{Printer, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let mut out = Vec::new();
    /// Printer::new(0, 2).print(&tree, &mut out).unwrap();
    /// assert_eq!(String::from_utf8(out).unwrap(), "  3\n2\n  1\n");
    /// ```
    pub fn print<T, W>(&self, tree: &Tree<T>, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write + ?Sized,
    {
        self.print_node(tree.root(), self.indent, out)
    }

    fn print_node<T, W>(&self, node: Option<&Node<T>>, indent: usize, out: &mut W) -> io::Result<()>
    where
        T: fmt::Display,
        W: io::Write + ?Sized,
    {
        let Some(node) = node else {
            return Ok(());
        };

        self.print_node(node.right(), indent + self.margin, out)?;
        writeln!(out, "{:indent$}{}", "", node.value)?;
        self.print_node(node.left(), indent + self.margin, out)
    }
}
