//! Small array-backed linear containers.
//!
//! None of these know anything about the BST. The tree borrows [`Stack`] and
//! [`Queue`] for its iterative walks; [`MonotonicStack`] is exported for
//! "next greater/smaller element" style algorithms.

mod monotonic;
mod queue;
mod stack;

pub use monotonic::MonotonicStack;
pub use queue::Queue;
pub use stack::Stack;
