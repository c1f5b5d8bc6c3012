//! IPC Handler for execution ordering
//!
//! ## Security Boundaries
//!
//! - MUST validate sender_id == 17 (Block Production)
//! - MUST reject requests from other subsystems
//! - MUST enforce batch size limits
//! - MUST have a nonce for every referenced account

use crate::application::service::ExecutionOrderService;
use crate::config::SchedulerConfig;
use crate::domain::entities::Transaction;
use crate::domain::errors::OrderingError;
use crate::domain::value_objects::{Nonce, Sender};
use crate::ipc::payloads::{ExecutionOrderRequest, ExecutionOrderResponse, OrderingMetrics};
use crate::ports::inbound::ExecutionOrderApi;
use primitive_types::H160;
use std::collections::HashMap;
use std::time::Instant;
use tracing::{info, warn};

/// Only Block Production (Subsystem 17) may request an execution order.
pub const AUTHORIZED_SENDER: u8 = 17;

/// IPC Handler for execution ordering.
///
/// Validates security boundaries and delegates to the domain service.
pub struct ExecutionOrderHandler {
    service: ExecutionOrderService,
}

impl ExecutionOrderHandler {
    /// Create a new handler with default config.
    pub fn new() -> Self {
        Self {
            service: ExecutionOrderService::new(),
        }
    }

    /// Create a new handler with custom config.
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            service: ExecutionOrderService::with_config(config),
        }
    }

    /// Create a handler from `SCHED_*` environment variables.
    pub fn from_env() -> Result<Self, OrderingError> {
        let config = SchedulerConfig::from_env();
        config.validate()?;
        Ok(Self::with_config(config))
    }

    /// Handle an ExecutionOrderRequest.
    ///
    /// Failures are reported in the response, never as a panic.
    pub fn handle_execution_order(
        &self,
        sender_id: u8,
        request: ExecutionOrderRequest,
    ) -> ExecutionOrderResponse {
        let start_time = Instant::now();

        let prepared = self
            .authorize(sender_id)
            .and_then(|()| self.check_batch_size(request.transactions.len()))
            .and_then(|()| prepare(&request));

        let (transactions, nonces) = match prepared {
            Ok(prepared) => prepared,
            Err(e) => {
                warn!(sender_id, error = %e, "Rejected ExecutionOrderRequest");
                return ExecutionOrderResponse::failure(request.correlation_id, e.to_string());
            }
        };

        info!(
            tx_count = transactions.len(),
            reply_to = %request.reply_to,
            "Processing ExecutionOrderRequest"
        );

        let plan = self
            .service
            .plan_execution_order(&transactions, &nonces, request.seed);
        let elapsed = start_time.elapsed().as_millis() as u64;

        ExecutionOrderResponse {
            correlation_id: request.correlation_id,
            success: true,
            ordered: plan
                .main_actions()
                .into_iter()
                .map(|action| (action.sender.0, action.nonce))
                .collect(),
            metrics: OrderingMetrics::from_report(&plan.report, elapsed),
            error: None,
        }
    }

    fn authorize(&self, sender_id: u8) -> Result<(), OrderingError> {
        if sender_id != AUTHORIZED_SENDER {
            return Err(OrderingError::UnauthorizedSender { sender_id });
        }
        Ok(())
    }

    fn check_batch_size(&self, size: usize) -> Result<(), OrderingError> {
        let max = self.service.config().max_batch_size;
        if size > max {
            return Err(OrderingError::BatchTooLarge { size, max });
        }
        Ok(())
    }
}

impl Default for ExecutionOrderHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert the payload into domain transactions plus the nonce table,
/// rejecting any referenced sender without a supplied nonce.
fn prepare(
    request: &ExecutionOrderRequest,
) -> Result<(Vec<Transaction>, HashMap<Sender, Nonce>), OrderingError> {
    let nonces: HashMap<Sender, Nonce> = request
        .account_nonces
        .iter()
        .map(|(sender, nonce)| (H160::from(*sender), *nonce))
        .collect();

    let transactions: Vec<Transaction> = request
        .transactions
        .iter()
        .map(|payload| payload.to_transaction())
        .collect();

    if let Some(action) = transactions
        .iter()
        .flat_map(|tx| tx.actions())
        .find(|action| !nonces.contains_key(&action.sender))
    {
        return Err(OrderingError::MissingNonce {
            sender: action.sender,
        });
    }

    Ok((transactions, nonces))
}
