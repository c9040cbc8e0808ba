//! Borrowed views of single nodes.
//!
//! A [`NodeRef`] is a node together with the tree it lives in, so it can
//! answer questions that need the neighbours: its depth, whether it is a left
//! child, its in-order successor and so on. Every query only reads links and
//! never allocates, except for the walks that keep an explicit stack or queue.

use std::fmt;

use crate::linear::{Queue, Stack};
use crate::tree::{within_bounds, Node, NodeId, Tree};

/// A node of a [`Tree`], borrowed from it.
///
/// Most operations act on the subtree rooted at this node.
pub struct NodeRef<'a, T> {
    tree: &'a Tree<T>,
    index: u32,
}

// Manual implementations so `NodeRef` is `Copy` even when `T` isn't.
impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<'a, T> Copy for NodeRef<'a, T> {}

/// Two `NodeRef`s are equal when they name the same node of the same tree.
impl<'a, T> PartialEq for NodeRef<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}
impl<'a, T> Eq for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, index: u32) -> Self {
        Self { tree, index }
    }

    fn node(&self) -> &'a Node<T> {
        self.tree.at(self.index)
    }

    fn link(&self, link: Option<u32>) -> Option<Self> {
        link.map(|index| Self::new(self.tree, index))
    }

    pub(crate) fn tree(&self) -> &'a Tree<T> {
        self.tree
    }

    pub(crate) fn index(&self) -> u32 {
        self.index
    }

    /// A handle to this node that outlives the borrow, e.g. to pass to
    /// [`Tree::delete`].
    pub fn id(&self) -> NodeId {
        self.tree.id_of(self.index)
    }

    /// The value stored in this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The parent node. `None` for the root.
    pub fn parent(&self) -> Option<Self> {
        self.link(self.node().parent)
    }

    /// The left child.
    pub fn left(&self) -> Option<Self> {
        self.link(self.node().left)
    }

    /// The right child.
    pub fn right(&self) -> Option<Self> {
        self.link(self.node().right)
    }

    /// Number of nodes in this subtree, including this one.
    pub fn count(&self) -> usize {
        let mut count = 0;
        let mut stack = Stack::new();
        stack.push(self.index);
        while let Some(index) = stack.pop() {
            count += 1;
            let node = self.tree.at(index);
            for child in [node.left, node.right].into_iter().flatten() {
                stack.push(child);
            }
        }
        count
    }

    /// Number of edges between this node and the root. The root has depth 0.
    pub fn depth(&self) -> usize {
        let mut edges = 0;
        let mut current = self.node();
        while let Some(parent) = current.parent {
            edges += 1;
            current = self.tree.at(parent);
        }
        edges
    }

    /// Number of levels in this subtree. A leaf has height 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.root().unwrap().height(), 3);
    /// assert_eq!(tree.search(&1).unwrap().height(), 1);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut queue = Queue::new();
        queue.enqueue((self.index, 1));
        while let Some((index, level)) = queue.dequeue() {
            height = level;
            let node = self.tree.at(index);
            for child in [node.left, node.right].into_iter().flatten() {
                queue.enqueue((child, level + 1));
            }
        }
        height
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.node().parent.is_none()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        !self.has_any_child()
    }

    /// Whether this node is its parent's left child.
    pub fn is_left_child(&self) -> bool {
        self.node()
            .parent
            .map_or(false, |parent| self.tree.at(parent).left == Some(self.index))
    }

    /// Whether this node is its parent's right child.
    pub fn is_right_child(&self) -> bool {
        self.node()
            .parent
            .map_or(false, |parent| self.tree.at(parent).right == Some(self.index))
    }

    /// Whether this node has a left child.
    pub fn has_left_child(&self) -> bool {
        self.node().left.is_some()
    }

    /// Whether this node has a right child.
    pub fn has_right_child(&self) -> bool {
        self.node().right.is_some()
    }

    /// Whether this node has at least one child.
    pub fn has_any_child(&self) -> bool {
        self.has_left_child() || self.has_right_child()
    }

    /// Whether this node has a left and a right child.
    pub fn has_both_children(&self) -> bool {
        self.has_left_child() && self.has_right_child()
    }

    /// The node with the smallest value in this subtree. This node if it has
    /// no left child.
    pub fn minimum(&self) -> Self {
        Self::new(self.tree, self.tree.minimum_of(self.index))
    }

    /// The node with the largest value in this subtree. This node if it has no
    /// right child.
    pub fn maximum(&self) -> Self {
        Self::new(self.tree, self.tree.maximum_of(self.index))
    }
}

impl<'a, T> NodeRef<'a, T>
where
    T: Ord,
{
    /// Finds the node holding `value` within this subtree.
    pub fn search(&self, value: &T) -> Option<Self> {
        let mut current = Some(self.index);
        while let Some(index) = current {
            let node = self.tree.at(index);
            current = match value.cmp(&node.value) {
                std::cmp::Ordering::Less => node.left,
                std::cmp::Ordering::Equal => return Some(Self::new(self.tree, index)),
                std::cmp::Ordering::Greater => node.right,
            };
        }
        None
    }

    /// Whether this subtree holds `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// The node holding the next smaller value in the whole tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    ///
    /// let seven = tree.search(&7).unwrap();
    /// assert_eq!(seven.predecessor().map(|n| *n.value()), Some(5));
    ///
    /// let one = tree.search(&1).unwrap();
    /// assert_eq!(one.predecessor(), None);
    /// ```
    pub fn predecessor(&self) -> Option<Self> {
        if let Some(left) = self.left() {
            return Some(left.maximum());
        }
        let value = self.value();
        let mut ancestor = self.parent();
        while let Some(node) = ancestor {
            if node.value() < value {
                return Some(node);
            }
            ancestor = node.parent();
        }
        None
    }

    /// The node holding the next larger value in the whole tree.
    pub fn successor(&self) -> Option<Self> {
        if let Some(right) = self.right() {
            return Some(right.minimum());
        }
        let value = self.value();
        let mut ancestor = self.parent();
        while let Some(node) = ancestor {
            if node.value() > value {
                return Some(node);
            }
            ancestor = node.parent();
        }
        None
    }

    /// Whether this subtree satisfies the BST ordering.
    pub fn is_bst(&self) -> bool {
        self.is_bst_within(None, None)
    }

    /// Whether this subtree satisfies the BST ordering with every value
    /// strictly between `lower` and `upper`. A `None` bound is unbounded.
    pub fn is_bst_within(&self, lower: Option<&T>, upper: Option<&T>) -> bool {
        let mut stack = Stack::new();
        stack.push((self.index, lower, upper));
        while let Some((index, lower, upper)) = stack.pop() {
            let node = self.tree.at(index);
            if !within_bounds(&node.value, lower, upper) {
                return false;
            }
            if let Some(left) = node.left {
                stack.push((left, lower, Some(&node.value)));
            }
            if let Some(right) = node.right {
                stack.push((right, Some(&node.value), upper));
            }
        }
        true
    }
}

impl<'a, T> fmt::Display for NodeRef<'a, T>
where
    T: fmt::Display,
{
    /// Renders as `"<left> <- value -> <right>"`, leaving out whichever side
    /// is absent. Nested subtrees aren't bracketed, so the result reads as the
    /// values in order, each followed by `" -> "` if it has a right child and
    /// by `" <- "` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut previous: Option<Self> = None;
        for node in self.nodes() {
            if let Some(previous) = previous {
                let separator = if previous.has_right_child() {
                    " -> "
                } else {
                    " <- "
                };
                f.write_str(separator)?;
            }
            write!(f, "{}", node.value())?;
            previous = Some(node);
        }
        Ok(())
    }
}

/// Shows the node's value along with the values of its direct neighbours.
impl<'a, T> fmt::Debug for NodeRef<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("parent", &self.parent().map(|n| n.value()))
            .field("left", &self.left().map(|n| n.value()))
            .field("right", &self.right().map(|n| n.value()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::Tree;

    fn sample() -> Tree<i32> {
        [5, 3, 8, 1, 4, 7, 9].into_iter().collect()
    }

    #[test]
    fn structural_predicates() {
        let tree = sample();
        let root = tree.root().unwrap();
        let three = tree.search(&3).unwrap();
        let nine = tree.search(&9).unwrap();

        assert!(root.is_root());
        assert!(!root.is_left_child());
        assert!(!root.is_right_child());
        assert!(root.has_both_children());

        assert!(three.is_left_child());
        assert!(!three.is_right_child());
        assert!(three.has_any_child());

        assert!(nine.is_leaf());
        assert!(nine.is_right_child());
        assert!(!nine.has_left_child());
        assert!(!nine.has_right_child());

        let lopsided: Tree<_> = [1, 2].into_iter().collect();
        let one = lopsided.root().unwrap();
        assert!(one.has_right_child());
        assert!(!one.has_left_child());
        assert!(one.has_any_child());
        assert!(!one.has_both_children());
    }

    #[test]
    fn count_depth_height() {
        let tree = sample();
        let root = tree.root().unwrap();

        assert_eq!(root.count(), 7);
        assert_eq!(root.height(), 3);
        assert_eq!(root.depth(), 0);

        let eight = tree.search(&8).unwrap();
        assert_eq!(eight.count(), 3);
        assert_eq!(eight.height(), 2);
        assert_eq!(eight.depth(), 1);

        let seven = tree.search(&7).unwrap();
        assert_eq!(seven.count(), 1);
        assert_eq!(seven.height(), 1);
        assert_eq!(seven.depth(), 2);
    }

    #[test]
    fn degenerate_tree_height() {
        let tree: Tree<_> = (0..1_000).collect();
        let root = tree.root().unwrap();

        assert_eq!(root.height(), 1_000);
        assert_eq!(tree.maximum().unwrap().depth(), 999);
        assert_eq!(root.count(), 1_000);
    }

    #[test]
    fn minimum_and_maximum() {
        let tree = sample();

        assert_eq!(*tree.minimum().unwrap().value(), 1);
        assert_eq!(*tree.maximum().unwrap().value(), 9);

        let eight = tree.search(&8).unwrap();
        assert_eq!(*eight.minimum().value(), 7);
        assert_eq!(*eight.maximum().value(), 9);

        // A node without the relevant child is its own answer.
        let seven = tree.search(&7).unwrap();
        assert_eq!(seven.minimum(), seven);
        assert_eq!(seven.maximum(), seven);

        assert!(Tree::<i32>::new().minimum().is_none());
    }

    #[test]
    fn predecessor_and_successor_walk_the_sorted_order() {
        let tree = sample();
        let values = tree.to_vec();

        for pair in values.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            let a_node = tree.search(&a).unwrap();
            let b_node = tree.search(&b).unwrap();

            assert_eq!(b_node.predecessor(), Some(a_node));
            assert_eq!(a_node.successor(), Some(b_node));
        }
        assert_eq!(tree.minimum().unwrap().predecessor(), None);
        assert_eq!(tree.maximum().unwrap().successor(), None);
    }

    #[test]
    fn search_within_subtree() {
        let tree = sample();
        let three = tree.search(&3).unwrap();

        assert_eq!(three.search(&4).map(|n| *n.value()), Some(4));
        assert!(three.search(&8).is_none());
        assert!(three.contains(&1));
        assert!(!three.contains(&5));
    }

    #[test]
    fn subtree_is_bst_within_parent_bounds() {
        let tree = sample();
        let eight = tree.search(&8).unwrap();

        assert!(eight.is_bst());
        assert!(eight.is_bst_within(Some(&5), None));
        assert!(!eight.is_bst_within(Some(&7), None));
    }

    #[test]
    fn display_subtree() {
        let tree = sample();

        assert_eq!(tree.search(&8).unwrap().to_string(), "7 <- 8 -> 9");
        assert_eq!(tree.search(&9).unwrap().to_string(), "9");
    }

    #[test]
    fn display_nested_subtrees() {
        let tree: Tree<_> = [4, 2, 1, 3, 6].into_iter().collect();

        assert_eq!(tree.to_string(), "1 <- 2 -> 3 <- 4 -> 6");
        assert_eq!(tree.search(&2).unwrap().to_string(), "1 <- 2 -> 3");
    }

    #[test]
    fn display_degenerate_tree() {
        let values: Vec<u32> = (0..100_000).collect();
        let tree = Tree::from_preorder(&values);
        let rendered = tree.to_string();

        assert!(rendered.starts_with("0 -> 1 -> 2 -> "));
        assert!(rendered.ends_with(" -> 99998 -> 99999"));
        assert_eq!(rendered.matches(" -> ").count(), 99_999);
    }

    #[test]
    fn debug_lists_nodes_with_neighbours() {
        let tree: Tree<_> = [2, 1].into_iter().collect();

        assert_eq!(
            format!("{:?}", tree.root().unwrap()),
            "Node { value: 2, parent: None, left: Some(1), right: None }"
        );
        assert_eq!(
            format!("{:?}", tree),
            "Tree { len: 2, nodes: [\
             Node { value: 1, parent: Some(2), left: None, right: None }, \
             Node { value: 2, parent: None, left: Some(1), right: None }\
             ] }"
        );
    }

    #[test]
    fn debug_degenerate_tree() {
        let values: Vec<u32> = (0..100_000).collect();
        let tree = Tree::from_postorder(&values);

        let rendered = format!("{:?}", tree);
        // Ascending post-order input is a chain of left children.
        assert!(rendered.starts_with(
            "Tree { len: 100000, nodes: [Node { value: 0, parent: Some(1), left: None, right: None }, "
        ));
        assert!(rendered.ends_with("Node { value: 99999, parent: None, left: Some(99998), right: None }] }"));
    }
}
