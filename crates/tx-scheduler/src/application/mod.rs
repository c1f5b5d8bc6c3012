//! Application layer for execution ordering

pub mod service;

pub use service::{initial_nonce_state, ExecutionOrderService};
