/// A last-in first-out stack.
///
/// # Examples
///
/// ```
/// use ordered_bst::linear::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, Debug)]
pub struct Stack<T> {
    collection: Vec<T>,
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Stack<T> {
    /// Generates a new, empty `Stack`.
    pub fn new() -> Self {
        Self {
            collection: Vec::new(),
        }
    }

    /// Number of stacked elements.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// The most recently pushed element. O(1).
    pub fn top(&self) -> Option<&T> {
        self.collection.last()
    }

    /// O(1) amortized.
    pub fn push(&mut self, element: T) {
        self.collection.push(element);
    }

    /// O(1).
    pub fn pop(&mut self) -> Option<T> {
        self.collection.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse() {
        let mut stack = Stack::new();
        for x in 0..5 {
            stack.push(x);
        }
        assert_eq!(stack.len(), 5);
        assert_eq!(stack.top(), Some(&4));

        let drained: Vec<_> = std::iter::from_fn(|| stack.pop()).collect();
        assert_eq!(drained, vec![4, 3, 2, 1, 0]);
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }
}
