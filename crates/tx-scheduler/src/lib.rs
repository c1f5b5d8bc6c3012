//! # Transaction Execution-Order Scheduler
//!
//! Decides the order in which the transactions of a block are executed.
//! Every transaction consumes the nonce of its main action and may also
//! consume nonces of other accounts through authorizations, so the order
//! decides which transactions can run at all.
//!
//! ## Pipeline
//!
//! 1. Load the current nonce of every referenced sender
//! 2. Clean: drop duplicates, unsatisfiable authorizations and unreachable work
//! 3. Partition into clusters that share no sender
//! 4. Sort each cluster with a greedy priority scheduler
//! 5. Interleave the clusters with a seeded shuffle
//!
//! The result is a pure function of the batch, the nonces and the seed.
//!
//! ## Architecture
//!
//! - **Domain**: Actions, transactions, nonce state, errors, invariants
//! - **Algorithms**: Indexed heap, cleaning, partitioner, sorter, interleaver
//! - **Ports**: Inbound (ExecutionOrderApi) and Outbound (NonceProvider)
//! - **Application**: Service orchestration
//! - **IPC**: Handler for requests from Block Production

pub mod algorithms;
pub mod application;
pub mod config;
pub mod domain;
pub mod ipc;
pub mod ports;

pub use application::service::ExecutionOrderService;
pub use config::SchedulerConfig;
pub use domain::entities::*;
pub use domain::errors::OrderingError;
pub use domain::value_objects::*;
pub use ipc::{
    ExecutionOrderHandler, ExecutionOrderRequest, ExecutionOrderResponse, OrderingMetrics,
    TransactionPayload,
};
pub use ports::inbound::ExecutionOrderApi;
pub use ports::outbound::NonceProvider;

/// Decide the execution order of `transactions` with the default service.
pub fn get_execution_order<P: NonceProvider>(
    transactions: &[Transaction],
    provider: &P,
    seed: u64,
) -> Vec<Transaction> {
    ExecutionOrderService::new().get_execution_order(transactions, provider, seed)
}
