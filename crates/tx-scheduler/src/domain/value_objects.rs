//! Value objects for transaction scheduling
//!
//! Actions are the unit of nonce consumption. Everything the scheduler
//! reasons about is expressed in terms of (sender, nonce) pairs.

use primitive_types::H160;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Type aliases for clarity
pub type Sender = H160;
pub type Nonce = u64;

/// A potential nonce-consuming update on a single account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub sender: Sender,
    pub nonce: Nonce,
}

impl Action {
    pub fn new(sender: Sender, nonce: Nonce) -> Self {
        Self { sender, nonce }
    }

    /// The action that must be consumed right before this one.
    pub fn predecessor(&self) -> Self {
        Self::new(self.sender, self.nonce.saturating_sub(1))
    }

    /// The action that becomes valid once this one is consumed.
    pub fn successor(&self) -> Self {
        Self::new(self.sender, self.nonce.saturating_add(1))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}/{}", self.sender, self.nonce)
    }
}

/// Scheduling priority of a transaction at a given point in time.
///
/// Ordering is "greater is better":
/// 1. runnable beats non-runnable
/// 2. fewer authorizations colliding with pending transactions
/// 3. fewer blocked authorizations
/// 4. more authorizations in total
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Priority {
    /// Main nonce equals the sender's current nonce
    pub runnable: bool,
    /// Authorizations that would consume a nonce another pending transaction needs
    pub num_colliding: usize,
    /// Authorizations whose nonce is not reachable yet
    pub num_blocked: usize,
    /// Total number of authorizations carried by the transaction
    pub num_authorizations: usize,
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.runnable
            .cmp(&other.runnable)
            .then_with(|| other.num_colliding.cmp(&self.num_colliding))
            .then_with(|| other.num_blocked.cmp(&self.num_blocked))
            .then_with(|| self.num_authorizations.cmp(&other.num_authorizations))
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
