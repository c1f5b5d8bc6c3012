//! Seeded Interleaver
//!
//! Merges independently ordered partitions into a single sequence. The order
//! inside each partition is kept; the order across partitions follows a
//! Fisher-Yates shuffle of partition slots driven by a locally seeded PRNG.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::collections::VecDeque;

/// Merge `partitions` into one sequence determined by `seed`.
pub fn interleave<T>(partitions: Vec<Vec<T>>, seed: u64) -> Vec<T> {
    // One slot per element, grouped by partition
    let mut slots: Vec<usize> = partitions
        .iter()
        .enumerate()
        .flat_map(|(index, partition)| std::iter::repeat(index).take(partition.len()))
        .collect();

    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    slots.shuffle(&mut rng);

    let mut queues: Vec<VecDeque<T>> = partitions.into_iter().map(VecDeque::from).collect();
    slots
        .into_iter()
        .filter_map(|index| queues[index].pop_front())
        .collect()
}
