//! Domain invariants for execution ordering
//!
//! Checkers used by tests and debug assertions. Each returns `true` when the
//! invariant holds.

use super::entities::Transaction;
use super::value_objects::{Action, Nonce, Sender};
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// INVARIANT-1: Unique Main Actions
/// No two transactions share the same main action.
pub fn invariant_unique_mains(transactions: &[Transaction]) -> bool {
    let mut seen: HashSet<Action> = HashSet::with_capacity(transactions.len());
    transactions.iter().all(|tx| seen.insert(tx.main))
}

/// INVARIANT-2: Increasing Nonces
/// For every sender, the main nonces in `order` are strictly increasing.
pub fn invariant_increasing_nonces(order: &[Transaction]) -> bool {
    let mut last: HashMap<Sender, Nonce> = HashMap::new();

    for tx in order {
        if let Some(prev) = last.insert(tx.main.sender, tx.main.nonce) {
            if prev >= tx.main.nonce {
                return false;
            }
        }
    }

    true
}

/// INVARIANT-3: Partition Independence
/// No sender is referenced by transactions of two different partitions.
pub fn invariant_partition_independence(partitions: &[Vec<Transaction>]) -> bool {
    let mut owner: HashMap<Sender, usize> = HashMap::new();

    for (index, partition) in partitions.iter().enumerate() {
        for action in partition.iter().flat_map(|tx| tx.actions()) {
            let previous = *owner.entry(action.sender).or_insert(index);
            if previous != index {
                return false;
            }
        }
    }

    true
}

/// INVARIANT-4: Order Preservation
/// Every element of `merged` belongs to one partition and elements of the
/// same partition keep their relative order. Elements must be unique.
pub fn invariant_preserves_partition_order<T: Eq + Hash>(
    partitions: &[Vec<T>],
    merged: &[T],
) -> bool {
    let position: HashMap<&T, (usize, usize)> = partitions
        .iter()
        .enumerate()
        .flat_map(|(p, items)| items.iter().enumerate().map(move |(i, item)| (item, (p, i))))
        .collect();

    let mut next: Vec<usize> = vec![0; partitions.len()];
    for item in merged {
        let Some(&(p, i)) = position.get(item) else {
            return false;
        };
        if i < next[p] {
            return false;
        }
        next[p] = i + 1;
    }

    true
}
