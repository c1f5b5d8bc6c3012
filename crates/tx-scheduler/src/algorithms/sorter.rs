//! Partition Sorter
//!
//! Greedy topological scheduler for one partition. Every step runs the
//! highest-priority runnable transaction, advances the nonces it consumes and
//! re-scores only the transactions whose priority could have changed.
//!
//! O(|actions| * log |transactions|)

use super::indexed_heap::{IndexedHeap, NaturalOrder};
use crate::domain::entities::{NonceState, Transaction};
use crate::domain::value_objects::{Action, Priority};
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Score `tx` against the current nonces and pending main actions.
pub fn evaluate(tx: &Transaction, state: &NonceState, pending: &HashSet<Action>) -> Priority {
    let mut priority = Priority {
        runnable: state.get(&tx.main.sender) == tx.main.nonce,
        num_authorizations: tx.auth.len(),
        ..Default::default()
    };

    for auth in &tx.auth {
        let current = state.get(&auth.sender);
        if current > auth.nonce {
            continue;
        }
        if auth.nonce == current && pending.contains(auth) {
            priority.num_colliding += 1;
        } else if auth.nonce > current {
            priority.num_blocked += 1;
        }
    }

    priority
}

/// Transactions to re-score when a given action gets consumed.
///
/// A nonce change of sender S at N only affects transactions naming S at
/// N-1, N or N+1, so every transaction is registered under the predecessor,
/// the action itself and the successor of each of its actions.
#[derive(Debug, Default)]
struct DependencyIndex {
    dependents: HashMap<Action, Vec<usize>>,
}

impl DependencyIndex {
    fn build(transactions: &[Transaction]) -> Self {
        let mut dependents: HashMap<Action, Vec<usize>> = HashMap::new();
        for (index, tx) in transactions.iter().enumerate() {
            for action in tx.actions() {
                for key in [action.predecessor(), *action, action.successor()] {
                    let entry = dependents.entry(key).or_default();
                    if entry.last() != Some(&index) {
                        entry.push(index);
                    }
                }
            }
        }
        Self { dependents }
    }

    fn get(&self, key: &Action) -> &[usize] {
        self.dependents.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    fn remove(&mut self, key: &Action) {
        self.dependents.remove(key);
    }
}

/// Order one partition, consuming nonces from `state`.
///
/// Transactions that never become runnable are left out of the result.
pub fn sort_partition(transactions: &[Transaction], state: &mut NonceState) -> Vec<Transaction> {
    let mut pending: HashSet<Action> = transactions.iter().map(|tx| tx.main).collect();
    let mut index = DependencyIndex::build(transactions);

    let mut heap: IndexedHeap<usize, Priority, NaturalOrder> = IndexedHeap::default();
    for (i, tx) in transactions.iter().enumerate() {
        heap.add(i, evaluate(tx, state, &pending));
    }

    let mut order: Vec<Transaction> = Vec::with_capacity(transactions.len());

    // Runnable outranks everything else, so a non-runnable top means the
    // whole partition is stuck.
    while let Some((&next, priority)) = heap.peek_entry() {
        if !priority.runnable {
            break;
        }
        heap.pop();

        let tx = &transactions[next];
        trace!(action = %tx.main, "Scheduling transaction");
        order.push(tx.clone());
        pending.remove(&tx.main);
        state.increment(tx.main.sender);
        rescore(&mut heap, index.get(&tx.main), transactions, state, &pending);

        for auth in &tx.auth {
            if auth.nonce != state.get(&auth.sender) {
                continue;
            }
            state.increment(auth.sender);
            rescore(&mut heap, index.get(auth), transactions, state, &pending);
            index.remove(auth);
        }
    }

    if order.len() < transactions.len() {
        debug!(
            scheduled = order.len(),
            stalled = transactions.len() - order.len(),
            "Partition stalled"
        );
    }
    order
}

fn rescore(
    heap: &mut IndexedHeap<usize, Priority, NaturalOrder>,
    affected: &[usize],
    transactions: &[Transaction],
    state: &NonceState,
    pending: &HashSet<Action>,
) {
    for &i in affected {
        heap.update(&i, evaluate(&transactions[i], state, pending));
    }
}
