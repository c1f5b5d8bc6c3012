//! Batch Cleaning
//!
//! Removes work that can never be scheduled before the batch reaches the
//! partitioner and the sorter. All passes keep the input order.

use crate::domain::entities::{NonceState, Transaction};
use crate::domain::value_objects::{Action, Nonce, Sender};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Run all cleaning passes in order.
pub fn clean(transactions: Vec<Transaction>, state: &NonceState) -> Vec<Transaction> {
    let transactions = remove_duplicates(transactions);
    let transactions = remove_unsatisfiable_authorizations(transactions);
    remove_trivially_unreachable_actions(transactions, state)
}

/// Keep the first transaction for every main action.
///
/// Identity is the main action alone; later duplicates are dropped whatever
/// their payload.
pub fn remove_duplicates(transactions: Vec<Transaction>) -> Vec<Transaction> {
    let original_count = transactions.len();
    let mut seen: HashSet<Action> = HashSet::with_capacity(original_count);

    let unique: Vec<Transaction> = transactions
        .into_iter()
        .filter(|tx| seen.insert(tx.main))
        .collect();

    if unique.len() < original_count {
        debug!(
            removed = original_count - unique.len(),
            "Removed duplicate transactions"
        );
    }
    unique
}

/// Drop authorizations that can never be satisfied alongside their own
/// transaction, and repeated authorizations within one transaction.
///
/// An account cannot authorize a nonce at or below the nonce of its own
/// transaction.
pub fn remove_unsatisfiable_authorizations(mut transactions: Vec<Transaction>) -> Vec<Transaction> {
    let mut removed = 0usize;

    for tx in &mut transactions {
        let main = tx.main;
        let before = tx.auth.len();
        let mut seen: HashSet<Action> = HashSet::with_capacity(before);

        tx.auth.retain(|auth| {
            let self_conflict = auth.sender == main.sender && auth.nonce <= main.nonce;
            !self_conflict && seen.insert(*auth)
        });
        removed += before - tx.auth.len();
    }

    if removed > 0 {
        debug!(removed, "Removed unsatisfiable authorizations");
    }
    transactions
}

/// Drop actions whose nonce cannot be reached using only this batch.
///
/// For every known sender the reachable nonces form the contiguous run that
/// starts at its current nonce and continues while the batch references the
/// next nonce. Transactions with an unreachable main are removed; unreachable
/// authorizations are stripped from the survivors.
pub fn remove_trivially_unreachable_actions(
    transactions: Vec<Transaction>,
    state: &NonceState,
) -> Vec<Transaction> {
    let universe: HashSet<Action> = transactions
        .iter()
        .flat_map(|tx| tx.actions().copied())
        .collect();

    let mut reachable_end: HashMap<Sender, Nonce> = HashMap::with_capacity(state.len());
    for (sender, &start) in state.iter() {
        let mut next = start;
        while universe.contains(&Action::new(*sender, next)) {
            let Some(following) = next.checked_add(1) else {
                break;
            };
            next = following;
        }
        reachable_end.insert(*sender, next);
    }

    let is_reachable = |action: &Action| {
        reachable_end
            .get(&action.sender)
            .is_some_and(|&end| action.nonce >= state.get(&action.sender) && action.nonce < end)
    };

    let original_count = transactions.len();
    let mut stripped = 0usize;
    let reachable: Vec<Transaction> = transactions
        .into_iter()
        .filter(|tx| is_reachable(&tx.main))
        .map(|mut tx| {
            let before = tx.auth.len();
            tx.auth.retain(|auth| is_reachable(auth));
            stripped += before - tx.auth.len();
            tx
        })
        .collect();

    if reachable.len() < original_count || stripped > 0 {
        debug!(
            removed = original_count - reachable.len(),
            stripped_authorizations = stripped,
            "Removed unreachable actions"
        );
    }
    reachable
}
