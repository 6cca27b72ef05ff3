//! A labelled rose tree and its depth optics.
//!
//! [`Tree`] has two variants: a leaf carrying a label, and a node carrying a
//! label plus a non-empty sequence of children. Its optics are assembled
//! entirely by composition:
//!
//! ```text
//! node_shape        : Prism<Tree, (L, NonEmptyVec<Tree>)>
//! children_optic    = node_shape ⊕ second_lens          : Optional<Tree, NonEmptyVec<Tree>>
//! descend_one_level = children_optic ⊕ NonEmptyVec::each : Traversal<Tree, Tree>
//! at_depth(m)       = descend_one_level ⊕ ... ⊕ descend_one_level (m times)
//! ```
//!
//! A leaf does not match `node_shape`, so it has no children to descend
//! into; branches shorter than the requested depth simply contribute nothing.
//!
//! # Examples
//!
//! ```
//! use optica::tree::Tree;
//! use optica::non_empty_vec;
//!
//! let tree = Tree::node(1, non_empty_vec![
//!     Tree::node(3, non_empty_vec![Tree::leaf(9), Tree::leaf(12)]),
//!     Tree::leaf(4),
//! ]);
//!
//! assert_eq!(tree.values_at_depth(0), vec![1]);
//! assert_eq!(tree.values_at_depth(1), vec![3, 4]);
//! assert_eq!(tree.values_at_depth(2), vec![9, 12]);
//! assert!(tree.values_at_depth(3).is_empty());
//!
//! let bumped = Tree::labels_at_depth(1).modify(tree, |label| label * 10);
//! assert_eq!(bumped.values_at_depth(1), vec![30, 40]);
//! ```

use crate::collection::NonEmptyVec;
use crate::optics::{
    self, Compose, Each, Getter, Lens, Optional, Prism, Traversal, second_lens,
};

/// A rose tree whose every node, inner or leaf, carries a label.
///
/// # Type Parameters
///
/// - `L`: The label type
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Tree<L> {
    /// A tree without children.
    Leaf(L),
    /// A tree with at least one child.
    Node(L, NonEmptyVec<Tree<L>>),
}

impl<L> Tree<L> {
    /// Creates a leaf.
    #[must_use]
    pub const fn leaf(label: L) -> Self {
        Self::Leaf(label)
    }

    /// Creates an inner node.
    #[must_use]
    pub const fn node(label: L, children: NonEmptyVec<Self>) -> Self {
        Self::Node(label, children)
    }

    /// Returns this tree's own label.
    pub const fn label(&self) -> &L {
        match self {
            Self::Leaf(label) | Self::Node(label, _) => label,
        }
    }

    /// Returns the immediate children, or `None` for a leaf.
    pub const fn children(&self) -> Option<&NonEmptyVec<Self>> {
        match self {
            Self::Leaf(_) => None,
            Self::Node(_, children) => Some(children),
        }
    }

    /// Returns the number of nodes, this one included.
    #[must_use]
    pub fn size(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Self::size).sum())
    }
}

impl<L: Clone + 'static> Tree<L> {
    /// Matches the node variant, focusing on its `(label, children)` pair.
    #[must_use]
    pub fn node_shape() -> Prism<Self, (L, NonEmptyVec<Self>)> {
        Prism::with_matcher(
            |tree: &Self| match tree {
                Self::Node(label, children) => Some((label.clone(), children.clone())),
                Self::Leaf(_) => None,
            },
            |(label, children): (L, NonEmptyVec<Self>)| Self::Node(label, children),
            |tree: &Self| matches!(tree, Self::Node(..)),
        )
    }

    /// Focuses on the children of a node; a leaf has none.
    #[must_use]
    pub fn children_optic() -> Optional<Self, NonEmptyVec<Self>> {
        Self::node_shape().compose(second_lens())
    }

    /// Focuses on every immediate child, left to right.
    #[must_use]
    pub fn descend_one_level() -> Traversal<Self, Self> {
        Self::children_optic().compose(NonEmptyVec::each())
    }

    /// Focuses on every subtree exactly `depth` edges below the root.
    #[must_use]
    pub fn at_depth(depth: usize) -> Traversal<Self, Self> {
        optics::at_depth(Self::descend_one_level(), depth)
    }

    /// Reads a tree's own label, whatever its variant.
    #[must_use]
    pub fn label_of() -> Getter<Self, L> {
        Getter::new(|tree: &Self| tree.label().clone())
    }

    /// Reads and writes a tree's own label, whatever its variant.
    #[must_use]
    pub fn label_lens() -> Lens<Self, L> {
        Lens::new(
            |tree: &Self| tree.label().clone(),
            |tree: Self, label: L| match tree {
                Self::Leaf(_) => Self::Leaf(label),
                Self::Node(_, children) => Self::Node(label, children),
            },
        )
    }

    /// Focuses on the label of every subtree exactly `depth` edges below the
    /// root.
    #[must_use]
    pub fn labels_at_depth(depth: usize) -> Traversal<Self, L> {
        Self::at_depth(depth).compose(Self::label_lens())
    }

    /// Returns the labels of every node exactly `depth` edges below this one,
    /// in left-to-right depth-first order.
    #[must_use]
    pub fn values_at_depth(&self, depth: usize) -> Vec<L> {
        optics::values_at_depth(Self::descend_one_level(), Self::label_of(), depth, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::non_empty_vec;
    use crate::optics::{Optic, OpticKind};
    use rstest::{fixture, rstest};

    #[fixture]
    fn small_tree() -> Tree<&'static str> {
        Tree::node(
            "root",
            non_empty_vec![Tree::leaf("left"), Tree::node("right", non_empty_vec![Tree::leaf("deep")])],
        )
    }

    #[rstest]
    fn test_node_shape_matches_only_nodes(small_tree: Tree<&'static str>) {
        let shape = Tree::node_shape();
        assert!(shape.is_match(&small_tree));
        assert!(!shape.is_match(&Tree::leaf("alone")));
    }

    #[rstest]
    fn test_derived_optic_kinds() {
        assert_eq!(Tree::<i32>::children_optic().kind(), OpticKind::Optional);
        assert_eq!(Tree::<i32>::descend_one_level().kind(), OpticKind::Traversal);
        assert_eq!(Tree::<i32>::at_depth(3).kind(), OpticKind::Traversal);
    }

    #[rstest]
    fn test_leaf_has_no_children() {
        let leaf = Tree::leaf(1);
        assert!(Tree::descend_one_level().get_all(&leaf).is_empty());
        assert_eq!(leaf.values_at_depth(0), vec![1]);
        assert!(leaf.values_at_depth(1).is_empty());
    }

    #[rstest]
    fn test_values_at_depth(small_tree: Tree<&'static str>) {
        assert_eq!(small_tree.values_at_depth(0), vec!["root"]);
        assert_eq!(small_tree.values_at_depth(1), vec!["left", "right"]);
        assert_eq!(small_tree.values_at_depth(2), vec!["deep"]);
        assert!(small_tree.values_at_depth(5).is_empty());
    }

    #[rstest]
    fn test_label_lens_keeps_children(small_tree: Tree<&'static str>) {
        let relabelled = Tree::label_lens().set(small_tree.clone(), "top");
        assert_eq!(relabelled.label(), &"top");
        assert_eq!(relabelled.children(), small_tree.children());
    }

    #[rstest]
    fn test_labels_at_depth_modifies_only_that_depth(small_tree: Tree<&'static str>) {
        let renamed = Tree::labels_at_depth(1).modify(small_tree, |_| "changed");
        assert_eq!(renamed.values_at_depth(0), vec!["root"]);
        assert_eq!(renamed.values_at_depth(1), vec!["changed", "changed"]);
        assert_eq!(renamed.values_at_depth(2), vec!["deep"]);
    }

    #[rstest]
    fn test_size(small_tree: Tree<&'static str>) {
        assert_eq!(small_tree.size(), 4);
    }
}
