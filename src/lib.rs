//! # Tie Queue
//!
//! A max-priority queue backed by a binary heap and ordered by a comparator of your choice.
//! The [`PriorityQueue`] struct stores the elements, the [`QueueMethods`](queue_traits::QueueMethods)
//! trait provides the operations to add and remove them.
//!
//! Elements that tie the current maximum are kept in a separate overflow heap, so long runs of
//! equal priorities stay cheap. The queue always compares the tops of both heaps, so the
//! element returned by [`peek`](queue_traits::QueueMethods::peek) and
//! [`dequeue`](queue_traits::QueueMethods::dequeue) is always the highest priority element.
//!
//! ## Example
//! ```rust
//! use tie_queue::prelude::*;
//!
//! fn main() {
//!     let mut queue = PriorityQueue::from(vec![3, 4, 1, 7, 6, 4]);
//!
//!     assert_eq!(queue.peek(), Ok(&7));
//!     assert_eq!(queue.enqueue(5), 7);
//!
//!     assert_eq!(queue.drain_vec(), vec![7, 6, 5, 4, 4, 3, 1]);
//!     assert_eq!(queue.dequeue(), Err(QueueError::EmptyContainer));
//! }
//! ```
//!
//! ## Custom comparators
//! The comparator returns [`Ordering::Greater`](std::cmp::Ordering::Greater) when the first
//! argument has the higher priority. Reversing the arguments turns the queue into a min-queue.
//! ```rust
//! use tie_queue::prelude::*;
//!
//! struct Job {
//!     priority: i32,
//! }
//!
//! fn main() {
//!     let mut queue = PriorityQueue::with_comparator(|a: &Job, b: &Job| b.priority.cmp(&a.priority));
//!
//!     queue.enqueue(Job { priority: 100 });
//!     queue.enqueue(Job { priority: -1 });
//!     queue.enqueue(Job { priority: 5 });
//!
//!     assert_eq!(queue.dequeue().map(|job| job.priority), Ok(-1));
//! }
//! ```
//!
//! ## Iteration does not consume the queue
//! ```rust
//! use tie_queue::prelude::*;
//!
//! fn main() {
//!     let queue = PriorityQueue::from(vec!['a', 'b', 'd']);
//!
//!     let ordered: String = queue.iter_ordered().collect();
//!     assert_eq!(ordered, "dba");
//!     assert_eq!(queue.len(), 3);
//! }
//! ```

mod internal;
pub use internal::OrderedWalk;

mod comparator;
pub use comparator::{Comparable, default_comparator, reversed_comparator};

mod error;
pub use error::QueueError;

pub mod queue_traits;

mod priority_queue;
pub use priority_queue::{DefaultComparator, IntoSorted, Iter, PriorityQueue, Traversal};

pub mod prelude {
    pub use crate::priority_queue::{PriorityQueue, Traversal};
    pub use crate::comparator::{Comparable, default_comparator, reversed_comparator};
    pub use crate::error::QueueError;
    pub use crate::queue_traits::{
        QueueInit,
        QueueMethods,
    };
}
