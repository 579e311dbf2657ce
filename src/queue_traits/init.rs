use std::cmp::Ordering;

/// Methods for creating a queue with a custom comparator.
pub trait QueueInit<T, C>
where
    Self: Sized,
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `comparator`.
    /// The comparator returns [`Ordering::Greater`] when the first argument has the higher priority.
    fn with_comparator(comparator: C) -> Self;

    /// Create a queue from the given elements ordered by `comparator`.
    /// The heap is built bottom-up in O(n).
    fn from_vec_with_comparator(elements: Vec<T>, comparator: C) -> Self;

    /// Create a queue from any iterator ordered by `comparator`.
    fn from_iter_with_comparator(elements: impl IntoIterator<Item = T>, comparator: C) -> Self {
        Self::from_vec_with_comparator(elements.into_iter().collect(), comparator)
    }
}
