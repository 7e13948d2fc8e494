use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use textbook::binary_tree::Tree;
use textbook::linked_list::DoublyLinkedList;

/// Returns how many nodes are needed to fill a binary tree with `num_levels` levels.
fn num_nodes_in_full_tree(num_levels: usize) -> usize {
    2usize.pow(num_levels as u32) - 1
}

/// Builds a tree by inserting values in ascending order. Nothing rebalances it so it ends up as
/// one long right spine.
fn get_unbalanced_tree(num_levels: usize) -> Tree<i32> {
    let mut tree = Tree::new();
    for x in (0..).take(num_nodes_in_full_tree(num_levels)) {
        tree.insert(x);
    }

    tree
}

/// Builds a tree by inserting values in a balanced manner. This adds elements so that, without
/// any self-balancing, the resultant tree will still be balanced.
///
/// It ensures there are `num_levels` of nodes, all full.
fn get_balanced_tree(num_levels: usize) -> Tree<i32> {
    let xs = (0..)
        .take(num_nodes_in_full_tree(num_levels))
        .collect::<Vec<_>>();
    let mut tree = Tree::new();
    fill_balanced_tree(&mut tree, &xs);
    tree
}

/// Recursive helper for [`get_balanced_tree`].
fn fill_balanced_tree(tree: &mut Tree<i32>, xs: &[i32]) {
    if !xs.is_empty() {
        let mid = xs.len() / 2;
        tree.insert(xs[mid]);
        fill_balanced_tree(tree, &xs[..mid]);
        fill_balanced_tree(tree, &xs[mid + 1..]);
    }
}

/// Benches `quick_find` hits and misses against balanced and unbalanced trees of various sizes.
fn bench_quick_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("quick_find");

    // An unbalanced tree of 11 levels already holds 2047 nodes in a single chain, so a miss
    // there walks every node.
    for num_levels in [3, 7, 11] {
        let tree_tests = [
            ("unbalanced", get_unbalanced_tree(num_levels)),
            ("balanced", get_balanced_tree(num_levels)),
        ];
        let largest_element_in_tree = num_nodes_in_full_tree(num_levels) as i32 - 1;
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(format!("{}-hit", name), largest_element_in_tree);
            group.bench_with_input(id, &largest_element_in_tree, |b, i| {
                b.iter(|| black_box(tree.quick_find(i)))
            });

            let id = BenchmarkId::new(format!("{}-miss", name), largest_element_in_tree);
            let missing = largest_element_in_tree + 1;
            group.bench_with_input(id, &missing, |b, i| {
                b.iter(|| black_box(tree.quick_find(i)))
            });
        }
    }

    group.finish();
}

/// Benches `walk_in_order` against the lazy `iter_in_order`.
fn bench_walks(c: &mut Criterion) {
    let mut group = c.benchmark_group("in_order");
    let tree = get_balanced_tree(11);

    group.bench_function("walk", |b| b.iter(|| black_box(tree.walk_in_order())));
    group.bench_function("iter", |b| {
        b.iter(|| black_box(tree.iter_in_order().count()))
    });

    group.finish();
}

/// Benches `get` at the head, the middle, and the tail of lists of various sizes. Lookups start
/// from whichever end is closer so the middle should be slowest.
fn bench_list_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("list_get");

    for len in [16usize, 256, 4096] {
        let list: DoublyLinkedList<usize> = (0..len).collect();
        for (name, index) in [("head", 0), ("middle", len / 2), ("tail", len - 1)] {
            let id = BenchmarkId::new(name, len);
            group.bench_with_input(id, &index, |b, &index| {
                b.iter(|| black_box(list.get(black_box(index))))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_quick_find, bench_walks, bench_list_get);
criterion_main!(benches);
