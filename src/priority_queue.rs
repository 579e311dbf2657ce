use std::{cmp::Ordering, fmt, iter::Chain, slice};

use tracing::{debug, trace};

use crate::{
    comparator::{Comparable, default_comparator},
    internal::{HeapStore, OrderedWalk, Source},
    queue_traits::{QueueInit, QueueMethods},
    QueueError,
};

/// Comparator type of a queue created without a custom comparator.
pub type DefaultComparator<T> = fn(&T, &T) -> Ordering;

/// Iterator over the elements of a queue in storage order.
pub type Iter<'a, T> = Chain<slice::Iter<'a, T>, slice::Iter<'a, T>>;

/// Order in which [`PriorityQueue::for_each`] visits the elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Traversal {
    /// Highest priority first. Elements of equal priority come in unspecified order.
    #[default]
    Ordered,
    /// Internal storage order. This is not priority order.
    Storage,
}

/// A max-priority queue ordered by a comparator.
///
/// Elements live in a binary heap. An element that ties the current maximum of
/// the heap is parked in a second, smaller heap instead, so long runs of equal
/// priorities do not churn the main heap. The maximum of the queue is always
/// the larger of the two heap tops, with the overflow heap winning ties.
///
/// All queue operations live on the [`QueueMethods`] trait.
pub struct PriorityQueue<T, C = DefaultComparator<T>> {
    heap: HeapStore<T>,
    overflow: HeapStore<T>,
    comparator: C,
}

impl<T: Comparable> PriorityQueue<T> {
    /// Create an empty queue ordered by [`default_comparator`].
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<T> as DefaultComparator<T>)
    }

    /// Create a queue from the given elements ordered by [`default_comparator`].
    pub fn from_vec(elements: Vec<T>) -> Self {
        Self::from_vec_with_comparator(elements, default_comparator::<T> as DefaultComparator<T>)
    }
}

impl<T, C> PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Create an empty queue ordered by `comparator`.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            heap: HeapStore::new(),
            overflow: HeapStore::new(),
            comparator,
        }
    }

    /// Create a queue from the given elements ordered by `comparator`. O(n).
    pub fn from_vec_with_comparator(elements: Vec<T>, comparator: C) -> Self {
        debug!(elements = elements.len(), "heapifying initial elements");
        Self {
            heap: HeapStore::from_vec(elements, &comparator),
            overflow: HeapStore::new(),
            comparator,
        }
    }

    /// The comparator the queue was created with.
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Number of elements currently parked in the overflow heap.
    pub fn overflow_len(&self) -> usize {
        self.overflow.len()
    }

    /// Iterate over all elements in storage order: the main heap followed by the overflow heap.
    pub fn iter(&self) -> Iter<'_, T> {
        self.heap.as_slice().iter().chain(self.overflow.as_slice().iter())
    }

    /// Iterate over all elements in non-increasing priority order without modifying the queue.
    /// Elements of equal priority come in unspecified order, not necessarily the dequeue order.
    pub fn iter_ordered(&self) -> OrderedWalk<'_, T, C> {
        OrderedWalk::new(self.heap.as_slice(), self.overflow.as_slice(), &self.comparator)
    }

    /// Call `visitor` with every element and its position in the traversal.
    pub fn for_each(&self, mut visitor: impl FnMut(&T, usize), traversal: Traversal) {
        match traversal {
            Traversal::Ordered => self
                .iter_ordered()
                .enumerate()
                .for_each(|(indx, elem)| visitor(elem, indx)),
            Traversal::Storage => self
                .iter()
                .enumerate()
                .for_each(|(indx, elem)| visitor(elem, indx)),
        }
    }

    /// Consume the queue and return its elements, highest priority first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_vec()
    }

    /// Consume the queue and return its elements in storage order.
    pub fn into_vec(self) -> Vec<T> {
        let mut elements = self.heap.into_vec();
        elements.extend(self.overflow.into_vec());
        elements
    }

    /// The store holding the current maximum. Ties go to the overflow heap.
    fn top_source(&self) -> Result<Source, QueueError> {
        match (self.heap.peek(), self.overflow.peek()) {
            (None, None) => Err(QueueError::EmptyContainer),
            (Some(_), None) => Ok(Source::Main),
            (None, Some(_)) => Ok(Source::Overflow),
            (Some(main), Some(overflow)) => match (self.comparator)(overflow, main) {
                Ordering::Less => Ok(Source::Main),
                _ => Ok(Source::Overflow),
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn is_consistent(&self) -> bool {
        self.heap.is_heap(&self.comparator) && self.overflow.is_heap(&self.comparator)
    }
}

impl<T, C> QueueMethods<T> for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn enqueue(&mut self, elem: T) -> usize {
        let ties_max = self
            .heap
            .peek()
            .is_some_and(|top| (self.comparator)(&elem, top) == Ordering::Equal);

        if ties_max {
            self.overflow.push(elem, &self.comparator);
            trace!(overflow_len = self.overflow.len(), "tie with current maximum, parked in overflow heap");
        } else {
            self.heap.push(elem, &self.comparator);
            trace!(heap_len = self.heap.len(), "pushed into main heap");
        }
        self.len()
    }

    fn dequeue(&mut self) -> Result<T, QueueError> {
        let source = self.top_source()?;
        trace!(?source, "dequeue");
        let store = match source {
            Source::Main => &mut self.heap,
            Source::Overflow => &mut self.overflow,
        };
        store.pop(&self.comparator).ok_or(QueueError::EmptyContainer)
    }

    fn peek(&self) -> Result<&T, QueueError> {
        let store = match self.top_source()? {
            Source::Main => &self.heap,
            Source::Overflow => &self.overflow,
        };
        store.peek().ok_or(QueueError::EmptyContainer)
    }

    fn len(&self) -> usize {
        self.heap.len() + self.overflow.len()
    }

    fn clear(&mut self) {
        self.heap.clear();
        self.overflow.clear();
    }
}

impl<T, C> QueueInit<T, C> for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn with_comparator(comparator: C) -> Self {
        PriorityQueue::with_comparator(comparator)
    }

    fn from_vec_with_comparator(elements: Vec<T>, comparator: C) -> Self {
        PriorityQueue::from_vec_with_comparator(elements, comparator)
    }
}

impl<T: Comparable> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Comparable> From<Vec<T>> for PriorityQueue<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::from_vec(elements)
    }
}

impl<T: Comparable> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T, C> Extend<T> for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.enqueue_all(iter);
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        Self {
            heap: self.heap.clone(),
            overflow: self.overflow.clone(),
            comparator: self.comparator.clone(),
        }
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("len", &(self.heap.len() + self.overflow.len()))
            .field("heap", &self.heap.as_slice())
            .field("overflow", &self.overflow.as_slice())
            .finish()
    }
}

/// Consuming iterator that dequeues the elements in priority order.
///
/// Created by the [`IntoIterator`] implementation of [`PriorityQueue`].
pub struct IntoSorted<T, C> {
    queue: PriorityQueue<T, C>,
}

impl<T, C> Iterator for IntoSorted<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C> ExactSizeIterator for IntoSorted<T, C> where C: Fn(&T, &T) -> Ordering {}

impl<T, C> IntoIterator for PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;
    type IntoIter = IntoSorted<T, C>;

    fn into_iter(self) -> IntoSorted<T, C> {
        IntoSorted { queue: self }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    use super::*;

    const NAMES: [&str; 7] = ["jano", "valentina", "zombie", "fran", "albert", "albert", "frank"];

    #[test]
    fn test_empty_queue() {
        let mut queue = PriorityQueue::<i32>::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.peek(), Err(QueueError::EmptyContainer));
        assert_eq!(queue.dequeue(), Err(QueueError::EmptyContainer));
        assert_eq!(queue.len(), 0);
    }

    #[test]
    fn test_enqueue_returns_len() {
        let mut queue = PriorityQueue::new();
        assert_eq!(queue.enqueue("jano"), 1);
        assert_eq!(queue.enqueue("valentina"), 2);
        assert_eq!(queue.enqueue("fran"), 3);
        assert_eq!(queue.peek(), Ok(&"valentina"));
        assert_eq!(queue.len(), 3);
    }

    #[test]
    fn test_ties_with_max_go_to_overflow() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(5);
        queue.enqueue(5);
        queue.enqueue(5);
        queue.enqueue(3);
        assert_eq!(queue.overflow_len(), 2);
        assert_eq!(queue.len(), 4);
        assert!(queue.is_consistent());

        // a tie with something below the max stays in the main heap
        queue.enqueue(3);
        assert_eq!(queue.overflow_len(), 2);

        assert_eq!(queue.drain_vec(), vec![5, 5, 5, 3, 3]);
    }

    #[test]
    fn test_overflow_wins_ties_on_peek() {
        let by_key = |a: &(u8, char), b: &(u8, char)| a.0.cmp(&b.0);
        let mut queue = PriorityQueue::with_comparator(by_key);
        queue.enqueue((1, 'm'));
        queue.enqueue((1, 'o'));
        assert_eq!(queue.overflow_len(), 1);
        assert_eq!(queue.peek(), Ok(&(1, 'o')));
        assert_eq!(queue.dequeue(), Ok((1, 'o')));
        assert_eq!(queue.dequeue(), Ok((1, 'm')));
    }

    #[test]
    fn test_main_heap_overtakes_overflow() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(2);
        queue.enqueue(2);
        queue.enqueue(9);
        assert_eq!(queue.overflow_len(), 1);
        assert_eq!(queue.peek(), Ok(&9));
        assert_eq!(queue.drain_vec(), vec![9, 2, 2]);
    }

    #[test]
    fn test_names() {
        let mut queue = PriorityQueue::new();
        queue.enqueue_all(NAMES);
        assert_eq!(queue.peek(), Ok(&"zombie"));
        assert!(queue.is_consistent());
        assert_eq!(
            queue.drain_vec(),
            vec!["zombie", "valentina", "jano", "frank", "fran", "albert", "albert"]
        );
    }

    #[test]
    fn test_for_each_does_not_mutate() {
        let queue = PriorityQueue::from(vec!['a', 'b', 'd']);

        for _ in 0..2 {
            let mut visited = Vec::new();
            queue.for_each(|elem, indx| visited.push((*elem, indx)), Traversal::Ordered);
            assert_eq!(visited, vec![('d', 0), ('b', 1), ('a', 2)]);
        }
        assert_eq!(queue.len(), 3);

        let mut storage = Vec::new();
        queue.for_each(|elem, _| storage.push(*elem), Traversal::Storage);
        assert_eq!(storage, queue.iter().copied().collect::<Vec<_>>());
    }

    #[test]
    fn test_for_each_after_enqueue_and_dequeue() {
        let mut queue = PriorityQueue::from(vec!['a', 'b', 'd']);
        queue.enqueue('c');
        queue.enqueue('e');
        queue.enqueue('b');
        assert_eq!(queue.iter_ordered().copied().collect::<String>(), "edcbba");

        assert_eq!(queue.dequeue(), Ok('e'));
        assert_eq!(queue.iter_ordered().copied().collect::<String>(), "dcbba");

        assert_eq!(queue.dequeue(), Ok('d'));
        assert_eq!(queue.dequeue(), Ok('c'));
        assert_eq!(queue.iter_ordered().copied().collect::<String>(), "bba");
        assert_eq!(queue.into_sorted_vec(), vec!['b', 'b', 'a']);
    }

    #[test]
    fn test_clear() {
        let mut queue = PriorityQueue::from(vec![1, 1, 2]);
        queue.enqueue(2);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.overflow_len(), 0);
        assert_eq!(queue.enqueue(4), 1);
    }

    #[test]
    fn test_into_vec_keeps_all_elements() {
        let mut queue = PriorityQueue::from(vec![4, 2, 4]);
        queue.enqueue(4);
        let mut elements = queue.into_vec();
        elements.sort_unstable();
        assert_eq!(elements, vec![2, 4, 4, 4]);
    }

    #[test]
    fn test_debug() {
        let mut queue = PriorityQueue::new();
        queue.enqueue(1);
        queue.enqueue(1);
        assert_eq!(
            format!("{queue:?}"),
            "PriorityQueue { len: 2, heap: [1], overflow: [1] }"
        );
    }

    #[test]
    fn test_heaps_stay_consistent_under_mixed_operations() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let by_key = |a: &(u8, u32), b: &(u8, u32)| a.0.cmp(&b.0);
            let mut queue = PriorityQueue::with_comparator(by_key);
            let mut len = 0;
            let mut parked = false;

            for seq in 0..200 {
                if rng.gen_bool(0.65) {
                    len += 1;
                    assert_eq!(queue.enqueue((rng.gen_range(0..4), seq)), len);
                } else if queue.dequeue().is_ok() {
                    len -= 1;
                }
                assert!(queue.is_consistent(), "seed {seed}, step {seq}");
                assert_eq!(queue.len(), len);
                parked |= queue.overflow_len() > 0;
            }
            assert!(parked, "seed {seed} never parked a tie");
        }
    }

    #[test]
    fn test_comparator_accessor() {
        let queue = PriorityQueue::<i32>::new();
        assert_eq!((queue.comparator())(&1, &2), Ordering::Less);

        let min_queue = PriorityQueue::with_comparator(|a: &i32, b: &i32| b.cmp(a));
        assert_eq!((min_queue.comparator())(&1, &2), Ordering::Greater);
    }
}
