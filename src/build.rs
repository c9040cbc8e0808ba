//! Bulk construction of a [`Tree`] from a traversal sequence.
//!
//! The plain constructors never fail. Elements that don't fit the expected
//! encoding are still inserted afterwards one by one, so the result is always a
//! valid BST holding every distinct input value. The `try_` constructors report
//! a [`BuildError`] instead.

use crate::error::BuildError;
use crate::linear::Stack;
use crate::tree::{within_bounds, Link, Tree};

impl<T> Tree<T>
where
    T: Ord + Clone,
{
    /// Builds a height-balanced tree from values sorted in strictly ascending
    /// order. The middle value of every range becomes the subtree root; for an
    /// even-length range the lower of the two middle values is picked.
    ///
    /// The input isn't checked; see [`Tree::try_from_sorted`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree = Tree::from_sorted(&[1, 2, 3, 4, 5, 6, 7]);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 4);
    /// assert_eq!(root.left().map(|n| *n.value()), Some(2));
    /// assert_eq!(root.right().map(|n| *n.value()), Some(6));
    /// assert_eq!(tree.height(), 3);
    /// ```
    pub fn from_sorted(sorted: &[T]) -> Self {
        let mut tree = Self::new();
        tree.root = tree.build_balanced(sorted, None);
        log::trace!("built balanced tree of {} nodes", tree.len());
        tree
    }

    /// Like [`Tree::from_sorted`] but rejects input that isn't strictly
    /// ascending.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{BuildError, Tree};
    ///
    /// assert!(Tree::try_from_sorted(&[1, 2, 3]).is_ok());
    /// assert_eq!(
    ///     Tree::try_from_sorted(&[1, 3, 2]).unwrap_err(),
    ///     BuildError::NotSorted { index: 2 },
    /// );
    /// ```
    pub fn try_from_sorted(sorted: &[T]) -> Result<Self, BuildError> {
        if let Some(position) = sorted.windows(2).position(|pair| pair[0] >= pair[1]) {
            let index = position + 1;
            log::debug!("rejecting unsorted input at index {}", index);
            return Err(BuildError::NotSorted { index });
        }
        Ok(Self::from_sorted(sorted))
    }

    /// Rebuilds the tree whose pre-order traversal is `preorder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree = Tree::from_preorder(&[5, 3, 1, 4, 8, 7, 9]);
    ///
    /// assert_eq!(tree.to_string(), "1 <- 3 -> 4 <- 5 -> 7 <- 8 -> 9");
    /// ```
    pub fn from_preorder(preorder: &[T]) -> Self {
        let (mut tree, consumed) = Self::rebuild_preorder(preorder);
        let leftover = &preorder[consumed..];
        if !leftover.is_empty() {
            log::debug!(
                "pre-order input stopped fitting at index {}, inserting {} values",
                consumed,
                leftover.len()
            );
            tree.extend(leftover.iter().cloned());
        }
        tree
    }

    /// Like [`Tree::from_preorder`] but rejects input that isn't the pre-order
    /// traversal of any BST.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::{BuildError, Tree};
    ///
    /// // 1 is smaller than 3 but shows up after the right subtree of 3 started.
    /// assert_eq!(
    ///     Tree::try_from_preorder(&[3, 5, 4, 1]).unwrap_err(),
    ///     BuildError::NotPreorder { index: 3 },
    /// );
    /// ```
    pub fn try_from_preorder(preorder: &[T]) -> Result<Self, BuildError> {
        let (tree, consumed) = Self::rebuild_preorder(preorder);
        if consumed < preorder.len() {
            log::debug!("rejecting pre-order input at index {}", consumed);
            return Err(BuildError::NotPreorder { index: consumed });
        }
        Ok(tree)
    }

    /// Rebuilds the tree whose post-order traversal is `postorder`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_bst::Tree;
    ///
    /// let tree = Tree::from_postorder(&[1, 4, 3, 7, 9, 8, 5]);
    ///
    /// assert_eq!(tree.to_string(), "1 <- 3 -> 4 <- 5 -> 7 <- 8 -> 9");
    /// ```
    pub fn from_postorder(postorder: &[T]) -> Self {
        let (mut tree, remaining) = Self::rebuild_postorder(postorder);
        let leftover = &postorder[..remaining];
        if !leftover.is_empty() {
            log::debug!(
                "post-order input stopped fitting at index {}, inserting {} values",
                remaining - 1,
                leftover.len()
            );
            tree.extend(leftover.iter().rev().cloned());
        }
        tree
    }

    /// Like [`Tree::from_postorder`] but rejects input that isn't the
    /// post-order traversal of any BST.
    pub fn try_from_postorder(postorder: &[T]) -> Result<Self, BuildError> {
        let (tree, remaining) = Self::rebuild_postorder(postorder);
        if remaining > 0 {
            let index = remaining - 1;
            log::debug!("rejecting post-order input at index {}", index);
            return Err(BuildError::NotPostorder { index });
        }
        Ok(tree)
    }

    fn build_balanced(&mut self, values: &[T], parent: Link) -> Link {
        if values.is_empty() {
            return None;
        }
        let (low, high) = (0, values.len() - 1);
        let mid = low + (high - low) / 2;

        let index = self.allocate(values[mid].clone(), parent);
        let left = self.build_balanced(&values[..mid], Some(index));
        let right = self.build_balanced(&values[mid + 1..], Some(index));
        self.set_children(index, left, right);
        Some(index)
    }

    /// Returns the tree rebuilt from the longest prefix of `preorder` that
    /// encodes a BST, and the length of that prefix.
    fn rebuild_preorder(preorder: &[T]) -> (Self, usize) {
        let (tree, consumed) = Self::rebuild(preorder.iter(), false);
        log::trace!("rebuilt {} nodes from pre-order input", consumed);
        (tree, consumed)
    }

    /// Returns the tree rebuilt from the longest suffix of `postorder` that
    /// encodes a BST, and how many elements precede that suffix.
    fn rebuild_postorder(postorder: &[T]) -> (Self, usize) {
        // Read backwards a post-order traversal puts the node first, then its
        // right subtree, then its left subtree.
        let (tree, consumed) = Self::rebuild(postorder.iter().rev(), true);
        log::trace!("rebuilt {} nodes from post-order input", consumed);
        (tree, postorder.len() - consumed)
    }

    /// Rebuilds a tree from a node-first traversal that visits the left
    /// subtree before the right one, or the right before the left when
    /// `mirrored`. Stops at the first value that fits no open position and
    /// returns how many values were used.
    fn rebuild<'v, I>(values: I, mirrored: bool) -> (Self, usize)
    where
        I: IntoIterator<Item = &'v T>,
        T: 'v,
    {
        let mut tree = Self::new();
        let mut consumed = 0;
        let mut vacancies = Stack::new();
        vacancies.push(Vacancy {
            parent: None,
            left: false,
            lower: None,
            upper: None,
        });

        'values: for value in values {
            // Positions skipped over can never be filled by a later value.
            let vacancy = loop {
                match vacancies.pop() {
                    Some(vacancy) if within_bounds(value, vacancy.lower, vacancy.upper) => {
                        break vacancy
                    }
                    Some(_) => {}
                    None => break 'values,
                }
            };

            let index = tree.allocate(value.clone(), vacancy.parent);
            match vacancy.parent {
                Some(parent) if vacancy.left => tree.set_left(parent, Some(index)),
                Some(parent) => tree.set_right(parent, Some(index)),
                None => tree.root = Some(index),
            }
            consumed += 1;

            let left = Vacancy {
                parent: Some(index),
                left: true,
                lower: vacancy.lower,
                upper: Some(value),
            };
            let right = Vacancy {
                parent: Some(index),
                left: false,
                lower: Some(value),
                upper: vacancy.upper,
            };
            // The subtree visited first goes on top.
            if mirrored {
                vacancies.push(left);
                vacancies.push(right);
            } else {
                vacancies.push(right);
                vacancies.push(left);
            }
        }

        (tree, consumed)
    }
}

/// A position in a tree being rebuilt that may still receive a node, with
/// the open interval its value has to lie in.
struct Vacancy<'v, T> {
    parent: Link,
    left: bool,
    lower: Option<&'v T>,
    upper: Option<&'v T>,
}
