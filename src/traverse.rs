//! Depth-first and breadth-first walks over a tree or subtree.
//!
//! All walks keep an explicit [`Stack`] or [`Queue`] of slot indices instead of
//! recursing, so a degenerate tree (e.g. built from ascending inserts) can't
//! overflow the call stack.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let tree: Tree<_> = [2, 1, 3].into_iter().collect();
//!
//! let mut preorder = Vec::new();
//! tree.traverse_preorder(|x| preorder.push(*x));
//! assert_eq!(preorder, vec![2, 1, 3]);
//!
//! let mut postorder = Vec::new();
//! tree.traverse_postorder(|x| postorder.push(*x));
//! assert_eq!(postorder, vec![1, 3, 2]);
//!
//! assert_eq!(tree.map(|x| x * 10), vec![10, 20, 30]);
//! ```

use crate::linear::{Queue, Stack};
use crate::node::NodeRef;
use crate::tree::{Link, Tree};

/// An in-order iterator over the values of a tree or subtree.
///
/// Created by [`Tree::iter`] and [`NodeRef::iter`].
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.nodes.next().map(|node| node.value())
    }
}

/// The nodes themselves, in order.
pub(crate) struct Nodes<'a, T> {
    tree: &'a Tree<T>,
    /// Nodes whose left subtree has been pushed but who haven't been yielded.
    stack: Stack<u32>,
}

impl<'a, T> Nodes<'a, T> {
    fn new(tree: &'a Tree<T>, start: Link) -> Self {
        let mut nodes = Self {
            tree,
            stack: Stack::new(),
        };
        nodes.push_left_spine(start);
        nodes
    }

    fn push_left_spine(&mut self, mut link: Link) {
        while let Some(index) = link {
            self.stack.push(index);
            link = self.tree.at(index).left;
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = NodeRef<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        self.push_left_spine(self.tree.at(index).right);
        Some(NodeRef::new(self.tree, index))
    }
}

impl<'a, T> NodeRef<'a, T> {
    /// Iterates over the values of this subtree in ascending order.
    pub fn iter(&self) -> Iter<'a, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Walks the nodes of this subtree in ascending order.
    pub(crate) fn nodes(&self) -> Nodes<'a, T> {
        Nodes::new(self.tree(), Some(self.index()))
    }

    /// Calls `visit` on every value of this subtree: left subtree, then this
    /// node, then right subtree.
    pub fn traverse_inorder<F>(&self, visit: F)
    where
        F: FnMut(&'a T),
    {
        self.iter().for_each(visit);
    }

    /// Calls `visit` on every value of this subtree: this node, then left
    /// subtree, then right subtree.
    pub fn traverse_preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let tree = self.tree();
        let mut stack = Stack::new();
        stack.push(self.index());
        while let Some(index) = stack.pop() {
            let node = tree.at(index);
            visit(&node.value);
            // Right first so the left subtree comes off the stack first.
            if let Some(right) = node.right {
                stack.push(right);
            }
            if let Some(left) = node.left {
                stack.push(left);
            }
        }
    }

    /// Calls `visit` on every value of this subtree: left subtree, then right
    /// subtree, then this node.
    pub fn traverse_postorder<F>(&self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let tree = self.tree();
        let mut stack = Stack::new();
        // The flag says whether the node's children have already been pushed.
        stack.push((self.index(), false));
        while let Some((index, expanded)) = stack.pop() {
            let node = tree.at(index);
            if expanded {
                visit(&node.value);
                continue;
            }
            stack.push((index, true));
            if let Some(right) = node.right {
                stack.push((right, false));
            }
            if let Some(left) = node.left {
                stack.push((left, false));
            }
        }
    }

    /// Calls `visit` on every value of this subtree level by level, left to
    /// right within a level.
    pub fn traverse_level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&'a T),
    {
        let tree = self.tree();
        let mut queue = Queue::new();
        queue.enqueue(self.index());
        while let Some(index) = queue.dequeue() {
            let node = tree.at(index);
            visit(&node.value);
            for child in [node.left, node.right].into_iter().flatten() {
                queue.enqueue(child);
            }
        }
    }

    /// Applies `transform` to each value of this subtree in ascending order.
    pub fn map<U, F>(&self, transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// The values of this subtree in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T> Tree<T> {
    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert!(tree.iter().eq([1, 2, 3].iter()));
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: self.nodes(),
        }
    }

    /// Walks every node in ascending order.
    pub(crate) fn nodes(&self) -> Nodes<'_, T> {
        Nodes::new(self, self.root)
    }

    /// See [`NodeRef::traverse_inorder`]. Does nothing on the empty tree.
    pub fn traverse_inorder<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a T),
    {
        self.iter().for_each(visit);
    }

    /// See [`NodeRef::traverse_preorder`].
    pub fn traverse_preorder<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            root.traverse_preorder(visit);
        }
    }

    /// See [`NodeRef::traverse_postorder`].
    pub fn traverse_postorder<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            root.traverse_postorder(visit);
        }
    }

    /// See [`NodeRef::traverse_level_order`].
    pub fn traverse_level_order<'a, F>(&'a self, visit: F)
    where
        F: FnMut(&'a T),
    {
        if let Some(root) = self.root() {
            root.traverse_level_order(visit);
        }
    }

    /// Applies `transform` to each value in ascending order. The tree itself
    /// is left alone.
    pub fn map<'a, U, F>(&'a self, transform: F) -> Vec<U>
    where
        F: FnMut(&'a T) -> U,
    {
        self.iter().map(transform).collect()
    }

    /// The values in ascending order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
