//! Errors reported by the validating constructors on [`Tree`](crate::Tree).

use thiserror::Error;

/// Why a `try_from_*` constructor rejected its input.
///
/// Every variant carries the position in the input slice where the problem
/// was detected.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// The element at `index` is not strictly greater than the one before it.
    #[error("input is not strictly ascending at index {index}")]
    NotSorted {
        /// Position of the first out-of-order element.
        index: usize,
    },
    /// The element at `index` does not fit anywhere in the tree rebuilt from
    /// the elements before it, so the input is not a pre-order traversal of
    /// any BST.
    #[error("input is not a pre-order traversal of a BST (element {index} cannot be placed)")]
    NotPreorder {
        /// Position of the first element the rebuild could not consume.
        index: usize,
    },
    /// Mirror of [`BuildError::NotPreorder`]. Post-order input is consumed
    /// from the back, so `index` is the highest position left unconsumed.
    #[error("input is not a post-order traversal of a BST (element {index} cannot be placed)")]
    NotPostorder {
        /// Position of the first element (counting from the back) the rebuild
        /// could not consume.
        index: usize,
    },
}
