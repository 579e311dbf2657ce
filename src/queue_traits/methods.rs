use crate::QueueError;

/// Methods for interacting with a queue.
pub trait QueueMethods<T> {
    /// Insert an element and return the new number of elements.
    fn enqueue(&mut self, elem: T) -> usize;

    /// Remove and return the element with the highest priority.
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    fn dequeue(&mut self) -> Result<T, QueueError>;

    /// Return the element with the highest priority without removing it.
    /// Returns [`QueueError::EmptyContainer`] if the queue is empty.
    fn peek(&self) -> Result<&T, QueueError>;

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Return true if the queue holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Insert all elements and return the new number of elements.
    fn enqueue_all(&mut self, elems: impl IntoIterator<Item = T>) -> usize {
        elems.into_iter().fold(self.len(), |_, elem| self.enqueue(elem))
    }

    /// Returns an iterator that dequeues elements in priority order until the queue is empty.
    fn drain_iter(&mut self) -> impl Iterator<Item = T> {
        std::iter::from_fn(|| self.dequeue().ok())
    }

    /// Dequeue all elements and return them in priority order.
    fn drain_vec(&mut self) -> Vec<T> {
        self.drain_iter().collect()
    }

    /// Dequeue elements into the buffer and return the number of elements written.
    /// If the buffer is too small to hold all elements, the remaining elements stay in the queue.
    fn drain_buffered(&mut self, buffer: &mut [T]) -> usize {
        write_buffered(buffer, self.drain_iter())
    }

    /// Remove all elements.
    fn clear(&mut self) {
        self.drain_iter().for_each(|_| ());
    }
}

fn write_buffered<T>(buffer: &mut [T], it: impl Iterator<Item = T>) -> usize {
    buffer
        .iter_mut()
        .zip(it)
        .map(|(slot, elem)| *slot = elem)
        .count()
}
