use search_tree::Tree;

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(v) => tree.insert(v.clone()) == set.insert(v.clone()),
        Op::Remove(v) => tree.remove(v) == set.remove(v),
    })
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = Tree::new();
        let mut set = BTreeSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && tree.len() == set.len()
            && tree.iter().eq(set.iter())
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();

        xs.iter().all(|x| tree.find(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| !tree.find(x))
    }

    fn len_counts_distinct_values(xs: Vec<i8>) -> bool {
        let tree: Tree<_> = xs.iter().copied().collect();
        let distinct: HashSet<_> = xs.into_iter().collect();

        tree.len() == distinct.len() && tree.is_empty() == distinct.is_empty()
    }

    fn in_order_is_sorted(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut visited = Vec::new();
        tree.in_order(|v| visited.push(*v));

        visited.windows(2).all(|w| w[0] < w[1]) && visited.len() == tree.len()
    }

    fn traversals_visit_every_value(xs: Vec<i16>) -> bool {
        let tree: Tree<_> = xs.into_iter().collect();
        let mut pre = Vec::new();
        tree.pre_order(|v| pre.push(*v));
        let mut post = Vec::new();
        tree.post_order(|v| post.push(*v));

        pre.sort_unstable();
        post.sort_unstable();
        let sorted: Vec<_> = tree.iter().copied().collect();
        pre == sorted && post == sorted
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: Tree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.find(x))
            && still_present.iter().all(|x| tree.find(x))
    }

    fn copies_are_independent(xs: Vec<i8>, extra: Vec<i8>) -> bool {
        let original: Tree<_> = xs.iter().copied().collect();
        let before: Vec<_> = original.iter().copied().collect();

        let mut copy = original.clone();
        for x in &extra {
            copy.insert(*x);
            copy.remove(&x.wrapping_add(1));
        }

        original.iter().copied().eq(before)
    }

    fn take_moves_everything(xs: Vec<i8>) -> bool {
        let mut source: Tree<_> = xs.iter().copied().collect();
        let expected: BTreeSet<_> = xs.into_iter().collect();

        let moved = source.take();
        source.is_empty() && moved.iter().eq(expected.iter())
    }
}
