//! IPC Module for execution ordering
//!
//! ## Security Boundaries
//!
//! - Accept: ExecutionOrderRequest from Subsystem 17 (Block Production) ONLY
//! - Reply: ExecutionOrderResponse on the request's reply-to topic

pub mod handler;
pub mod payloads;

pub use handler::{ExecutionOrderHandler, AUTHORIZED_SENDER};
pub use payloads::*;
