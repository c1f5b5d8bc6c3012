//! Error types for transaction scheduling
//!
//! The scheduling pipeline itself never fails: work that cannot be scheduled
//! is dropped. These errors belong to the integration surfaces around it.

use super::value_objects::Sender;
use thiserror::Error;

/// All errors that can occur around execution ordering
#[derive(Debug, Error)]
pub enum OrderingError {
    /// Batch size exceeded limits
    #[error("Batch size exceeded: {size} > {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Unauthorized sender (only block production may request an order)
    #[error("Unauthorized sender: expected Block Production (17), got {sender_id}")]
    UnauthorizedSender { sender_id: u8 },

    /// No account nonce was supplied for a referenced sender
    #[error("Missing account nonce for sender {sender:?}")]
    MissingNonce { sender: Sender },

    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
