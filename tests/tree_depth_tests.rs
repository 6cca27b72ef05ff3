//! Integration tests for depth traversals over the rose tree.
//!
//! The reference tree has ten nodes:
//!
//! ```text
//! 1
//! ├── 3
//! │   ├── 9
//! │   ├── 5
//! │   │   ├── 2
//! │   │   └── 6
//! │   └── 12
//! └── 4
//!     ├── 21
//!     └── 100
//! ```

use optica::non_empty_vec;
use optica::optics::{Compose, Fold, Optic, OpticKind, at_depth, values_at_depth};
use optica::tree::Tree;
use rstest::{fixture, rstest};

#[fixture]
fn reference_tree() -> Tree<i32> {
    Tree::node(
        1,
        non_empty_vec![
            Tree::node(
                3,
                non_empty_vec![
                    Tree::leaf(9),
                    Tree::node(5, non_empty_vec![Tree::leaf(2), Tree::leaf(6)]),
                    Tree::leaf(12),
                ]
            ),
            Tree::node(4, non_empty_vec![Tree::leaf(21), Tree::leaf(100)]),
        ],
    )
}

#[rstest]
fn test_reference_tree_size(reference_tree: Tree<i32>) {
    assert_eq!(reference_tree.size(), 10);
}

#[rstest]
#[case(0, vec![1])]
#[case(1, vec![3, 4])]
#[case(2, vec![9, 5, 12, 21, 100])]
#[case(3, vec![2, 6])]
#[case(4, vec![])]
#[case(10, vec![])]
fn test_values_at_depth(reference_tree: Tree<i32>, #[case] depth: usize, #[case] expected: Vec<i32>) {
    assert_eq!(reference_tree.values_at_depth(depth), expected);
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(3)]
fn test_generic_builder_agrees_with_tree_helper(reference_tree: Tree<i32>, #[case] depth: usize) {
    let generic = values_at_depth(
        Tree::descend_one_level(),
        Tree::label_of(),
        depth,
        &reference_tree,
    );
    assert_eq!(generic, reference_tree.values_at_depth(depth));
}

#[rstest]
fn test_depth_traversal_is_a_traversal_and_widens_to_fold(reference_tree: Tree<i32>) {
    let traversal = at_depth(Tree::descend_one_level(), 2);
    assert_eq!(traversal.kind(), OpticKind::Traversal);

    let labels = Fold::from(traversal).compose(Tree::label_of());
    assert_eq!(labels.kind(), OpticKind::Fold);
    assert_eq!(labels.length(&reference_tree), 5);
    assert_eq!(labels.fold(&reference_tree, 0, |sum, label| sum + label), 147);
}

#[rstest]
fn test_labels_at_depth_rewrites_only_that_depth(reference_tree: Tree<i32>) {
    let negated = Tree::labels_at_depth(2).modify(reference_tree, |label| -label);

    assert_eq!(negated.values_at_depth(0), vec![1]);
    assert_eq!(negated.values_at_depth(1), vec![3, 4]);
    assert_eq!(negated.values_at_depth(2), vec![-9, -5, -12, -21, -100]);
    assert_eq!(negated.values_at_depth(3), vec![2, 6]);
}

#[rstest]
fn test_modify_through_depth_keeps_shape(reference_tree: Tree<i32>) {
    let rewritten = Tree::at_depth(1).modify(reference_tree.clone(), |subtree| subtree);
    assert_eq!(rewritten, reference_tree);
}

#[rstest]
fn test_pruning_at_depth(reference_tree: Tree<i32>) {
    let pruned = Tree::at_depth(1).modify(reference_tree, |subtree| Tree::leaf(*subtree.label()));

    assert_eq!(pruned.size(), 3);
    assert_eq!(pruned.values_at_depth(1), vec![3, 4]);
    assert!(pruned.values_at_depth(2).is_empty());
}

#[rstest]
fn test_depth_traversal_under_subscriber(reference_tree: Tree<i32>) {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("optica=trace"))
        .with_test_writer()
        .finish();

    let labels = tracing::subscriber::with_default(subscriber, || {
        reference_tree.values_at_depth(3)
    });
    assert_eq!(labels, vec![2, 6]);
}

#[rstest]
fn test_children_optic_on_leaf_and_node(reference_tree: Tree<i32>) {
    let children = Tree::children_optic();
    assert!(children.preview(&Tree::leaf(7)).is_none());
    assert_eq!(
        children.preview(&reference_tree).map(|children| children.len()),
        Some(2)
    );
}
