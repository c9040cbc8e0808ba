use std::collections::VecDeque;

/// A first-in first-out queue.
///
/// # Examples
///
/// ```
/// use ordered_bst::linear::Queue;
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.dequeue(), Some(2));
/// assert_eq!(queue.dequeue(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Queue<T> {
    collection: VecDeque<T>,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Queue<T> {
    /// Generates a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            collection: VecDeque::new(),
        }
    }

    /// Number of queued elements.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// The element that the next [`dequeue`](Self::dequeue) would return.
    pub fn front(&self) -> Option<&T> {
        self.collection.front()
    }

    /// Adds `element` at the back. O(1) amortized.
    pub fn enqueue(&mut self, element: T) {
        self.collection.push_back(element);
    }

    /// Removes the element at the front. O(1).
    pub fn dequeue(&mut self) -> Option<T> {
        self.collection.pop_front()
    }
}
