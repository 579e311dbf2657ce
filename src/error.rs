use thiserror::Error;

/// Errors returned by the queue operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// [`peek`](crate::PriorityQueue::peek) or [`dequeue`](crate::PriorityQueue::dequeue)
    /// was called on a queue without elements.
    #[error("priority queue is empty")]
    EmptyContainer,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        assert_eq!(QueueError::EmptyContainer.to_string(), "priority queue is empty");
    }
}
