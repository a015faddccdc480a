//! CLI argument definitions using clap

use clap::{ArgAction, Parser, ValueEnum};

use crate::print::{DEFAULT_INDENT, DEFAULT_MARGIN};
use crate::tree::Order;

/// Values inserted when none are given on the command line. The second `2` is a duplicate.
pub const DEMO_VALUES: [i64; 6] = [5, 1, 2, 3, 2, 6];

/// Build an unbalanced binary search tree from integers and print its traversals
#[derive(Parser, Debug)]
#[command(name = "search-tree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Values inserted in the given order (default: 5 1 2 3 2 6)
    #[arg(value_name = "VALUES", allow_negative_numbers = true)]
    pub values: Vec<i64>,

    /// Value removed after all insertions (repeatable)
    #[arg(short, long, value_name = "VALUE", allow_negative_numbers = true)]
    pub remove: Vec<i64>,

    /// Traversal order to print
    #[arg(short, long, value_enum, default_value_t = Traversal::In)]
    pub order: Traversal,

    /// Also render the tree sideways, right subtree on top
    #[arg(short, long)]
    pub sideways: bool,

    /// Columns before the root in the sideways rendering
    #[arg(long, env = "SEARCH_TREE_INDENT", default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Columns added per level in the sideways rendering
    #[arg(long, env = "SEARCH_TREE_MARGIN", default_value_t = DEFAULT_MARGIN)]
    pub margin: usize,

    /// Copy the tree, copy-assign it into a third tree and insert -1000 into that one only
    #[arg(long)]
    pub copy_demo: bool,

    /// Debug verbosity (-d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

/// Traversal orders selectable on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Traversal {
    /// Ascending order
    In,
    /// Node before its subtrees
    Pre,
    /// Node after its subtrees
    Post,
}

impl Traversal {
    /// Label printed in front of the traversal.
    pub fn label(self) -> &'static str {
        match self {
            Traversal::In => "in-order",
            Traversal::Pre => "pre-order",
            Traversal::Post => "post-order",
        }
    }
}

impl From<Traversal> for Order {
    fn from(traversal: Traversal) -> Self {
        match traversal {
            Traversal::In => Order::InOrder,
            Traversal::Pre => Order::PreOrder,
            Traversal::Post => Order::PostOrder,
        }
    }
}
