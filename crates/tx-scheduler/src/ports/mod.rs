//! Ports module for execution ordering
//!
//! Defines inbound (API) and outbound (SPI) port traits.

pub mod inbound;
pub mod outbound;

pub use inbound::ExecutionOrderApi;
pub use outbound::NonceProvider;
