//! Core entities for transaction scheduling

use super::value_objects::{Action, Nonce, Sender};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A candidate transaction: its own action plus secondary authorizations.
///
/// Authorizations that get satisfied during scheduling consume a nonce slot
/// of their own sender, but they are never emitted as separate entries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Identity of the transaction
    pub main: Action,
    /// Authorizations in payload order
    pub auth: Vec<Action>,
}

impl Transaction {
    pub fn new(main: Action) -> Self {
        Self {
            main,
            auth: Vec::new(),
        }
    }

    pub fn with_authorizations(mut self, auth: Vec<Action>) -> Self {
        self.auth = auth;
        self
    }

    /// Main action followed by all authorizations.
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        std::iter::once(&self.main).chain(self.auth.iter())
    }
}

/// Next expected nonce per sender.
///
/// Nonces only ever move forward while a batch is being scheduled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NonceState {
    nonces: HashMap<Sender, Nonce>,
}

impl NonceState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next expected nonce of `sender`. Unknown senders read as 0.
    pub fn get(&self, sender: &Sender) -> Nonce {
        self.nonces.get(sender).copied().unwrap_or_default()
    }

    pub fn contains(&self, sender: &Sender) -> bool {
        self.nonces.contains_key(sender)
    }

    pub fn set(&mut self, sender: Sender, nonce: Nonce) {
        self.nonces.insert(sender, nonce);
    }

    /// Consume the current nonce of `sender`, returning the new value.
    pub fn increment(&mut self, sender: Sender) -> Nonce {
        let nonce = self.nonces.entry(sender).or_default();
        *nonce = nonce.saturating_add(1);
        *nonce
    }

    /// Independent copy holding only the given senders.
    pub fn restrict<'a>(&self, senders: impl IntoIterator<Item = &'a Sender>) -> Self {
        let nonces = senders
            .into_iter()
            .filter_map(|sender| self.nonces.get(sender).map(|nonce| (*sender, *nonce)))
            .collect();
        Self { nonces }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Sender, &Nonce)> {
        self.nonces.iter()
    }

    pub fn len(&self) -> usize {
        self.nonces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nonces.is_empty()
    }
}

impl FromIterator<(Sender, Nonce)> for NonceState {
    fn from_iter<I: IntoIterator<Item = (Sender, Nonce)>>(iter: I) -> Self {
        Self {
            nonces: iter.into_iter().collect(),
        }
    }
}

/// Per-batch counters describing what the pipeline did.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingReport {
    /// Transactions handed to the scheduler
    pub input_transactions: usize,
    /// Transactions left after cleaning
    pub cleaned_transactions: usize,
    /// Number of independent partitions
    pub partitions: usize,
    /// Size of the largest partition
    pub largest_partition: usize,
    /// Transactions in the final order
    pub scheduled_transactions: usize,
}

impl OrderingReport {
    /// Transactions removed during cleaning or left stuck by the sorter.
    pub fn dropped_transactions(&self) -> usize {
        self.input_transactions
            .saturating_sub(self.scheduled_transactions)
    }
}

/// Final execution order together with its report.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ExecutionPlan {
    pub transactions: Vec<Transaction>,
    pub report: OrderingReport,
}

impl ExecutionPlan {
    /// Main actions in execution order.
    pub fn main_actions(&self) -> Vec<Action> {
        self.transactions.iter().map(|tx| tx.main).collect()
    }
}
