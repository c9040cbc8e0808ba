/// A stack that keeps its elements ordered by a priority relation.
///
/// `priority(lower, upper)` must return `true` when `upper` may sit on top of
/// `lower`. Appending an element first evicts every trailing element for which
/// that doesn't hold, handing each one to `on_evict` together with the element
/// that caused the eviction. With `<` as the priority the collection stays
/// strictly increasing.
///
/// # Examples
///
/// ```
/// use ordered_bst::linear::MonotonicStack;
///
/// let mut evictions = Vec::new();
/// let stack = MonotonicStack::from_iter_with(
///     [2, 1, 2, 4, 3],
///     |last: &i32, new: &i32| last > new,
///     |evicted: i32, cause: &i32| evictions.push((evicted, *cause)),
/// );
///
/// assert_eq!(stack.as_slice(), &[4, 3]);
/// drop(stack);
/// assert_eq!(evictions, vec![(1, 2), (2, 2), (2, 4)]);
/// ```
pub struct MonotonicStack<T, P, E> {
    collection: Vec<T>,
    priority: P,
    on_evict: E,
}

impl<T, P, E> MonotonicStack<T, P, E>
where
    P: FnMut(&T, &T) -> bool,
    E: FnMut(T, &T),
{
    /// Generates a new, empty `MonotonicStack` ordered by `priority`.
    pub fn new(priority: P, on_evict: E) -> Self {
        Self {
            collection: Vec::new(),
            priority,
            on_evict,
        }
    }

    /// Builds a stack by [`append`](Self::append)ing every element of `iter`
    /// in order. O(N).
    pub fn from_iter_with<I>(iter: I, priority: P, on_evict: E) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut stack = Self::new(priority, on_evict);
        for element in iter {
            stack.append(element);
        }
        stack
    }

    /// Pushes `element` after evicting the trailing elements it may not sit
    /// on. O(1) amortized since every element is evicted at most once.
    pub fn append(&mut self, element: T) {
        while let Some(last) = self.collection.last() {
            if (self.priority)(last, &element) {
                break;
            }
            if let Some(evicted) = self.collection.pop() {
                (self.on_evict)(evicted, &element);
            }
        }
        self.collection.push(element);
    }

    /// O(1).
    pub fn pop(&mut self) -> Option<T> {
        self.collection.pop()
    }
}

impl<T, P, E> MonotonicStack<T, P, E> {
    /// The retained elements, bottom first.
    pub fn as_slice(&self) -> &[T] {
        &self.collection
    }

    /// Number of retained elements.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether nothing is retained.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Consumes the stack, returning the retained elements bottom first.
    pub fn into_vec(self) -> Vec<T> {
        self.collection
    }
}
