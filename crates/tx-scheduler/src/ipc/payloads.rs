//! IPC Payloads for execution ordering
//!
//! ## Security (Envelope-Only Identity)
//!
//! Payloads contain NO requester identity fields. The requesting subsystem
//! is taken from the message envelope and passed to the handler separately.

use crate::domain::entities::{OrderingReport, Transaction};
use crate::domain::value_objects::Action;
use primitive_types::H160;
use serde::{Deserialize, Serialize};

// ============================================================
// INCOMING REQUESTS
// ============================================================

/// One candidate transaction in wire form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionPayload {
    /// Sender of the main action
    pub sender: [u8; 20],
    /// Nonce of the main action
    pub nonce: u64,
    /// Authorized (sender, nonce) pairs
    pub authorizations: Vec<([u8; 20], u64)>,
}

impl TransactionPayload {
    pub fn to_transaction(&self) -> Transaction {
        Transaction::new(Action::new(H160::from(self.sender), self.nonce)).with_authorizations(
            self.authorizations
                .iter()
                .map(|(sender, nonce)| Action::new(H160::from(*sender), *nonce))
                .collect(),
        )
    }
}

impl From<&Transaction> for TransactionPayload {
    fn from(tx: &Transaction) -> Self {
        Self {
            sender: tx.main.sender.0,
            nonce: tx.main.nonce,
            authorizations: tx.auth.iter().map(|a| (a.sender.0, a.nonce)).collect(),
        }
    }
}

/// Request to decide the execution order of a block's transactions.
///
/// MUST only be accepted from the Block Production subsystem (17).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOrderRequest {
    /// Correlation ID for response tracking
    pub correlation_id: [u8; 16],
    /// Reply-to topic for response
    pub reply_to: String,
    /// Candidate transactions in block order
    pub transactions: Vec<TransactionPayload>,
    /// Current nonce of every referenced sender
    pub account_nonces: Vec<([u8; 20], u64)>,
    /// Interleaving seed
    pub seed: u64,
}

// ============================================================
// OUTGOING RESPONSES
// ============================================================

/// Response with the decided execution order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutionOrderResponse {
    /// Correlation ID from request
    pub correlation_id: [u8; 16],
    /// Whether ordering succeeded
    pub success: bool,
    /// Main actions of the scheduled transactions, in execution order
    pub ordered: Vec<([u8; 20], u64)>,
    /// Metrics
    pub metrics: OrderingMetrics,
    /// Error message (if failed)
    pub error: Option<String>,
}

impl ExecutionOrderResponse {
    /// Failed response carrying `error`.
    pub fn failure(correlation_id: [u8; 16], error: String) -> Self {
        Self {
            correlation_id,
            success: false,
            ordered: vec![],
            metrics: OrderingMetrics::default(),
            error: Some(error),
        }
    }
}

/// Ordering metrics for observability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderingMetrics {
    /// Transactions received
    pub total_transactions: u32,
    /// Transactions left after cleaning
    pub cleaned_transactions: u32,
    /// Independent partitions
    pub partitions: u32,
    /// Size of the largest partition
    pub largest_partition: u32,
    /// Transactions placed in the execution order
    pub scheduled_transactions: u32,
    /// Time taken for ordering (ms)
    pub ordering_time_ms: u64,
}

impl OrderingMetrics {
    pub fn from_report(report: &OrderingReport, ordering_time_ms: u64) -> Self {
        Self {
            total_transactions: report.input_transactions as u32,
            cleaned_transactions: report.cleaned_transactions as u32,
            partitions: report.partitions as u32,
            largest_partition: report.largest_partition as u32,
            scheduled_transactions: report.scheduled_transactions as u32,
            ordering_time_ms,
        }
    }
}
