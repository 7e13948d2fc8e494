use textbook::binary_tree::{Node, Tree};

use quickcheck::{Arbitrary, Gen};

/// A tree of any shape. Values are not ordered so these only exercise the
/// operations that don't rely on the BST invariant.
#[derive(Clone, Debug)]
struct Shape(Tree<i8>);

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        let size = usize::arbitrary(g) % g.size().max(1);
        Shape(random_tree(g, size))
    }
}

/// Builds a tree with exactly `size` nodes, splitting the rest between the
/// children at random.
fn random_tree(g: &mut Gen, size: usize) -> Tree<i8> {
    match random_node(g, size) {
        Some(root) => Tree::from(root),
        None => Tree::new(),
    }
}

fn random_node(g: &mut Gen, size: usize) -> Option<Node<i8>> {
    if size == 0 {
        return None;
    }

    let left_size = usize::arbitrary(g) % size;
    let mut node = Node::new(i8::arbitrary(g));
    if let Some(left) = random_node(g, left_size) {
        node = node.with_left(left);
    }
    if let Some(right) = random_node(g, size - 1 - left_size) {
        node = node.with_right(right);
    }

    Some(node)
}

#[quickcheck]
fn clone_compares_equal(Shape(tree): Shape) -> bool {
    tree.compare_shape_and_values(&tree.clone())
}

#[quickcheck]
fn comparison_is_reflexive(Shape(tree): Shape) -> bool {
    tree.compare_shape_and_values(&tree)
}

#[quickcheck]
fn clone_is_independent(Shape(tree): Shape) -> bool {
    let before = tree.walk_pre_order().into_iter().copied().collect::<Vec<_>>();
    let mut copy = tree.clone();
    if let Some(root) = copy.root_mut() {
        *root.value_mut() = root.value().wrapping_add(1);
    }

    tree.walk_pre_order().into_iter().copied().eq(before)
        && (tree.is_empty() || !tree.compare_shape_and_values(&copy))
}

#[quickcheck]
fn walks_have_same_length(Shape(tree): Shape) -> bool {
    let len = tree.len();
    tree.walk_pre_order().len() == len
        && tree.walk_in_order().len() == len
        && tree.walk_post_order().len() == len
}

#[quickcheck]
fn lazy_walks_match(Shape(tree): Shape) -> bool {
    tree.iter_pre_order().eq(tree.walk_pre_order())
        && tree.iter_in_order().eq(tree.walk_in_order())
        && tree.iter_post_order().eq(tree.walk_post_order())
}

#[quickcheck]
fn different_shapes_compare_unequal(Shape(tree): Shape) -> bool {
    // Hanging one more node off the tree changes its shape but no values.
    let mut grown = tree.clone();
    let Some(mut node) = grown.root_mut() else {
        return true;
    };
    while node.left().is_some() {
        node = node.left_mut().unwrap();
    }
    let value = *node.value();
    *node = node.clone().with_left(Node::new(value));

    !tree.compare_shape_and_values(&grown)
}

#[quickcheck]
fn quick_find_agrees_with_in_order(xs: Vec<i8>, needle: i8) -> bool {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(x);
    }

    tree.quick_find(&needle) == tree.walk_in_order().contains(&&needle)
}
