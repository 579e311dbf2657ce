use std::collections::BinaryHeap;

use tie_queue::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

const NUMBER_OF_ELEMENTS: u64 = 1_000_000;
const DISTINCT_PRIORITIES: u64 = 64;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut queue = PriorityQueue::new();

    let start = std::time::Instant::now();

    queue.enqueue_all(workload());
    info!(len = queue.len(), overflow_len = queue.overflow_len(), "queue filled");
    let drained = queue.drain_vec();

    let duration = start.elapsed();
    println!("Time taken: {:?}", duration);

    // Baseline
    let baseline_start = std::time::Instant::now();
    let mut heap = BinaryHeap::new();
    heap.extend(workload());
    let baseline = std::iter::from_fn(|| heap.pop()).collect::<Vec<_>>();

    let baseline_duration = baseline_start.elapsed();
    println!("Baseline time taken: {:?}", baseline_duration);

    if drained == baseline {
        println!("Both queues drained {} elements in the same order", drained.len());
    } else {
        println!("Drain orders differ");
    }
}

/// Few distinct priorities, so most elements tie with an earlier one.
fn workload() -> impl Iterator<Item = u64> {
    (1..=NUMBER_OF_ELEMENTS).map(|n| n.wrapping_mul(0x9E37_79B9_7F4A_7C15) % DISTINCT_PRIORITIES)
}
