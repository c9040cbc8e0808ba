//! An arena backed BST with parent links.
//!
//! Every node lives in a slot of a `Vec` owned by the [`Tree`]. Children are
//! referenced by slot index and each occupied slot (bar the root) is
//! referenced by exactly one parent. The parent index is only a back link used
//! to walk upwards, so the structure never needs `Rc`, `Weak` or raw pointers.
//!
//! # Examples
//!
//! ```
//! use ordered_bst::Tree;
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 8, 1, 4, 7, 9] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.to_vec(), vec![1, 3, 4, 5, 7, 8, 9]);
//!
//! // Duplicates are rejected.
//! assert!(!tree.insert(5));
//!
//! // Deleting the root promotes its successor.
//! let root = tree.root().unwrap().id();
//! let removed = tree.delete(root).unwrap();
//! assert_eq!(removed.value, 5);
//! assert_eq!(tree.root().map(|n| *n.value()), Some(7));
//! assert_eq!(tree.to_vec(), vec![1, 3, 4, 7, 8, 9]);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::linear::Stack;
use crate::node::NodeRef;

/// A slot index into the arena. `None` marks an absent child or parent.
pub(crate) type Link = Option<u32>;

/// A handle to a node of a particular [`Tree`].
///
/// Handles are cheap to copy and stay valid until the node they name is
/// deleted. Afterwards the handle is stale: looking it up yields `None` even if
/// the slot has since been reused by a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId {
    index: u32,
    generation: u32,
}

/// What [`Tree::delete`] gives back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Removed<T> {
    /// The value of the deleted node.
    pub value: T,
    /// The node now sitting where the deleted node used to be, if any. This
    /// is `None` when the deleted node was a leaf.
    pub replacement: Option<NodeId>,
}

#[derive(Clone)]
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) parent: Link,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

#[derive(Clone)]
struct Slot<T> {
    /// Bumped every time the slot is vacated so old [`NodeId`]s stop resolving.
    generation: u32,
    node: Option<Node<T>>,
}

/// An unbalanced Binary Search Tree holding a set of values.
///
/// Values are kept in ascending order. Inserting a value that is already
/// present does nothing.
#[derive(Clone)]
pub struct Tree<T> {
    slots: Vec<Slot<T>>,
    /// Vacant slot indices, reused before the arena grows.
    free: Vec<u32>,
    pub(crate) root: Link,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            root: None,
            len: 0,
        }
    }

    /// Generates a `Tree` made of a single node holding `value`.
    pub fn with_root(value: T) -> Self {
        let mut tree = Self::new();
        tree.root = Some(tree.allocate(value, None));
        tree
    }

    /// Number of values in the tree. O(1).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The number of levels in the tree. The empty tree has height 0 and a
    /// lone root has height 1.
    pub fn height(&self) -> usize {
        self.root().map_or(0, |root| root.height())
    }

    /// Removes every value. Handles to the removed nodes become stale.
    pub fn clear(&mut self) {
        for index in 0..self.slots.len() {
            if self.slots[index].node.is_some() {
                self.release(index as u32);
            }
        }
        self.root = None;
    }

    /// The root node, or `None` for the empty tree.
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.root.map(|index| NodeRef::new(self, index))
    }

    /// Looks up a node by handle. Returns `None` if the node was deleted.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_, T>> {
        self.resolve(id).map(|index| NodeRef::new(self, index))
    }

    /// The node holding the smallest value.
    pub fn minimum(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.minimum())
    }

    /// The node holding the largest value.
    pub fn maximum(&self) -> Option<NodeRef<'_, T>> {
        self.root().map(|root| root.maximum())
    }

    /// Deletes the node named by `id` and returns its value together with the
    /// node that took over its position. If `id` is stale nothing happens and
    /// `None` is returned.
    ///
    /// The replacement is the minimum of the right subtree when there is one,
    /// otherwise the maximum of the left subtree. The replacement is itself
    /// unlinked the same way before it inherits the deleted node's children
    /// and parent. Deleting the only node leaves the tree empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// let two = tree.search(&2).unwrap().id();
    /// let removed = tree.delete(two).unwrap();
    /// assert_eq!(removed.value, 2);
    ///
    /// let replacement = tree.node(removed.replacement.unwrap()).unwrap();
    /// assert_eq!(*replacement.value(), 3);
    /// assert!(replacement.is_root());
    ///
    /// // The handle is stale now.
    /// assert!(tree.delete(two).is_none());
    /// ```
    pub fn delete(&mut self, id: NodeId) -> Option<Removed<T>> {
        let index = self.resolve(id)?;
        let replacement = self.unlink(index);
        let value = self.release(index);

        log::trace!("deleted node {}, replaced by {:?}", index, replacement);
        if cfg!(debug_assertions) {
            if let Some(replacement) = replacement {
                self.assert_links(replacement);
            }
        }

        Some(Removed {
            value,
            replacement: replacement.map(|r| self.id_of(r)),
        })
    }

    /// Detaches the node at `index` from the tree, moving the replacement into
    /// its position. The node's own links are cleared but its slot stays
    /// occupied.
    ///
    /// The replacement has to be detached the same way first, and so does its
    /// own replacement, all the way down to a leaf. That chain is collected up
    /// front and relinked from the leaf upwards.
    fn unlink(&mut self, index: u32) -> Link {
        let replacement = self.replacement_of(index);

        let mut chain = Stack::new();
        chain.push(index);
        let mut current = replacement;
        while let Some(next) = current {
            chain.push(next);
            current = self.replacement_of(next);
        }

        // Each node is replaced by the one popped just before it.
        let mut below: Link = None;
        while let Some(detached) = chain.pop() {
            if let Some(below) = below {
                // Detaching `below` may have changed our children if it was
                // one of them.
                let node = self.at(detached);
                let (left, right) = (node.left, node.right);
                self.set_left(below, left);
                self.set_right(below, right);
            }
            self.reconnect_parent(detached, below);

            let node = self.at_mut(detached);
            node.left = None;
            node.right = None;
            node.parent = None;
            below = Some(detached);
        }

        replacement
    }

    /// The minimum of the right subtree, else the maximum of the left one.
    fn replacement_of(&self, index: u32) -> Link {
        let node = self.at(index);
        match (node.left, node.right) {
            (_, Some(right)) => Some(self.minimum_of(right)),
            (Some(left), None) => Some(self.maximum_of(left)),
            (None, None) => None,
        }
    }

    /// Points whatever referenced the node at `index` (its parent, or the tree
    /// itself for the root) at `replacement` instead.
    fn reconnect_parent(&mut self, index: u32, replacement: Link) {
        let parent = self.at(index).parent;
        match parent {
            Some(parent) if self.at(parent).left == Some(index) => {
                self.set_left(parent, replacement)
            }
            Some(parent) => self.set_right(parent, replacement),
            None => {
                if self.root == Some(index) {
                    self.root = replacement;
                }
                if let Some(replacement) = replacement {
                    self.at_mut(replacement).parent = None;
                }
            }
        }
    }

    /// Sets the left child of `parent`, fixing the child's parent link.
    pub(crate) fn set_left(&mut self, parent: u32, child: Link) {
        self.at_mut(parent).left = child;
        if let Some(child) = child {
            self.at_mut(child).parent = Some(parent);
        }
    }

    /// Sets the right child of `parent`, fixing the child's parent link.
    pub(crate) fn set_right(&mut self, parent: u32, child: Link) {
        self.at_mut(parent).right = child;
        if let Some(child) = child {
            self.at_mut(child).parent = Some(parent);
        }
    }

    /// Checks the parent/child links around `index` agree with each other.
    fn assert_links(&self, index: u32) {
        let node = self.at(index);
        for child in [node.left, node.right].into_iter().flatten() {
            assert_eq!(self.at(child).parent, Some(index));
        }
        match node.parent {
            Some(parent) => {
                let parent = self.at(parent);
                assert!(parent.left == Some(index) || parent.right == Some(index));
                assert!(parent.left != parent.right);
            }
            None => assert_eq!(self.root, Some(index)),
        }
    }

    pub(crate) fn minimum_of(&self, mut index: u32) -> u32 {
        while let Some(left) = self.at(index).left {
            index = left;
        }
        index
    }

    pub(crate) fn maximum_of(&self, mut index: u32) -> u32 {
        while let Some(right) = self.at(index).right {
            index = right;
        }
        index
    }

    /// Puts `value` into a vacant slot and returns the slot index. The caller
    /// is responsible for linking it into the tree.
    pub(crate) fn allocate(&mut self, value: T, parent: Link) -> u32 {
        let node = Node {
            value,
            parent,
            left: None,
            right: None,
        };
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].node = Some(node);
                index
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("more than u32::MAX nodes");
                self.slots.push(Slot {
                    generation: 0,
                    node: Some(node),
                });
                index
            }
        }
    }

    /// Vacates the slot at `index`, returning its value. The node must already
    /// be unlinked.
    fn release(&mut self, index: u32) -> T {
        let slot = &mut self.slots[index as usize];
        let node = slot.node.take().expect("released slot is occupied");
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);
        self.len -= 1;
        node.value
    }

    fn resolve(&self, id: NodeId) -> Option<u32> {
        let slot = self.slots.get(id.index as usize)?;
        (slot.generation == id.generation && slot.node.is_some()).then(|| id.index)
    }

    pub(crate) fn id_of(&self, index: u32) -> NodeId {
        NodeId {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    /// The node in an occupied slot. Links only ever name occupied slots.
    pub(crate) fn at(&self, index: u32) -> &Node<T> {
        self.slots[index as usize]
            .node
            .as_ref()
            .expect("link to a vacant slot")
    }

    fn at_mut(&mut self, index: u32) -> &mut Node<T> {
        self.slots[index as usize]
            .node
            .as_mut()
            .expect("link to a vacant slot")
    }

    /// Sets both children of `parent` at once. Used by the bulk constructors.
    pub(crate) fn set_children(&mut self, parent: u32, left: Link, right: Link) {
        self.set_left(parent, left);
        self.set_right(parent, right);
    }
}

impl<T> Tree<T>
where
    T: Ord,
{
    /// Inserts `value` into the tree. Returns `true` if a node was created and
    /// `false` if an equal value was already present, in which case the tree
    /// is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(2));
    /// assert!(!tree.insert(1));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.allocate(value, None));
            log::trace!("inserted root");
            return true;
        };

        loop {
            let node = self.at(current);
            let (ordering, left, right) = (value.cmp(&node.value), node.left, node.right);
            match ordering {
                Ordering::Less => match left {
                    Some(left) => current = left,
                    None => {
                        let leaf = self.allocate(value, Some(current));
                        self.at_mut(current).left = Some(leaf);
                        log::trace!("inserted node {} left of {}", leaf, current);
                        break;
                    }
                },
                Ordering::Equal => return false,
                Ordering::Greater => match right {
                    Some(right) => current = right,
                    None => {
                        let leaf = self.allocate(value, Some(current));
                        self.at_mut(current).right = Some(leaf);
                        log::trace!("inserted node {} right of {}", leaf, current);
                        break;
                    }
                },
            }
        }

        if cfg!(debug_assertions) {
            self.assert_links(current);
        }
        true
    }

    /// Finds the node holding `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// assert_eq!(tree.search(&8).map(|n| n.is_right_child()), Some(true));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<NodeRef<'_, T>> {
        self.root().and_then(|root| root.search(value))
    }

    /// Whether some node holds `value`. O(height).
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Deletes the node holding `value` and returns the value. Returns `None`
    /// if no node holds it.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let mut tree = Tree::with_root(1);
    /// assert_eq!(tree.remove(&1), Some(1));
    /// assert_eq!(tree.remove(&1), None);
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let id = self.search(value)?.id();
        self.delete(id).map(|removed| removed.value)
    }

    /// Whether every node satisfies the BST ordering. The empty tree does.
    pub fn is_bst(&self) -> bool {
        self.is_bst_within(None, None)
    }

    /// Whether every node satisfies the BST ordering and lies strictly between
    /// `lower` and `upper`. A `None` bound is unbounded.
    pub fn is_bst_within(&self, lower: Option<&T>, upper: Option<&T>) -> bool {
        self.root()
            .map_or(true, |root| root.is_bst_within(lower, upper))
    }
}

/// Whether `value` lies strictly inside `(lower, upper)`.
pub(crate) fn within_bounds<T: Ord>(value: &T, lower: Option<&T>, upper: Option<&T>) -> bool {
    lower.map_or(true, |lower| value > lower) && upper.map_or(true, |upper| value < upper)
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    /// Inserts every item in iteration order, skipping duplicates.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    /// Renders as `"<left> <- value -> <right>"` from the root down. The empty
    /// tree renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => fmt::Display::fmt(&root, f),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree")
            .field("len", &self.len)
            .field("nodes", &InOrder(self))
            .finish()
    }
}

/// Lists every node of a tree in ascending order.
struct InOrder<'a, T>(&'a Tree<T>);

impl<'a, T> fmt::Debug for InOrder<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.nodes()).finish()
    }
}
