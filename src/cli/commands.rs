//! Command execution for the demo driver

use std::io::Write;

use tracing::{debug, info, instrument};

use crate::cli::args::{Cli, DEMO_VALUES};
use crate::cli::error::{CliError, CliResult};
use crate::print::Printer;
use crate::tree::{Order, Tree};

/// Builds the tree described by `cli` and writes the requested views of it to `out`.
#[instrument(skip_all)]
pub fn execute_command(cli: &Cli, out: &mut dyn Write) -> CliResult<()> {
    if cli.margin == 0 {
        return Err(CliError::InvalidArgs(
            "margin must be greater than zero".to_string(),
        ));
    }
    let printer = Printer::new(cli.indent, cli.margin);

    let values = if cli.values.is_empty() {
        &DEMO_VALUES[..]
    } else {
        cli.values.as_slice()
    };
    let mut tree = build_tree(values);

    for value in &cli.remove {
        if !tree.remove(value) {
            info!(value, "value not present, nothing removed");
        }
    }

    writeln!(out, "size: {}", tree.len())?;
    write_traversal(&tree, cli.order.into(), cli.order.label(), out)?;
    if cli.sideways {
        printer.print(&tree, out)?;
    }
    if cli.copy_demo {
        copy_demo(&tree, out)?;
    }
    Ok(())
}

fn build_tree(values: &[i64]) -> Tree<i64> {
    let mut tree = Tree::new();
    for &value in values {
        if !tree.insert(value) {
            info!(value, "duplicate value ignored");
        }
    }
    debug!(inserted = values.len(), size = tree.len(), "built tree");
    tree
}

fn write_traversal(
    tree: &Tree<i64>,
    order: Order,
    label: &str,
    out: &mut dyn Write,
) -> CliResult<()> {
    let mut visited = Vec::with_capacity(tree.len());
    tree.traverse(order, |value| visited.push(value.to_string()));
    writeln!(out, "{label}: {}", visited.join(" "))?;
    Ok(())
}

/// Copies are independent: inserting into the copy-assigned tree leaves the others alone.
fn copy_demo(tree: &Tree<i64>, out: &mut dyn Write) -> CliResult<()> {
    let copy = tree.clone();
    let mut assigned = Tree::new();
    assigned.clone_from(&copy);
    assigned.insert(-1000);

    write_traversal(&copy, Order::PreOrder, "copy pre-order", out)?;
    write_traversal(&assigned, Order::PreOrder, "assigned pre-order", out)?;
    Ok(())
}
