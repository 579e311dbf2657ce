mod heap_store;
pub(crate) use heap_store::HeapStore;

mod ordered_walk;
pub use ordered_walk::OrderedWalk;
pub(crate) use ordered_walk::Source;
