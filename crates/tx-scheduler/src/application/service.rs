//! Execution Order Service
//!
//! Main service implementing ExecutionOrderApi.

use crate::algorithms::{cleaning, interleaver, partitioner, sorter};
use crate::config::SchedulerConfig;
use crate::domain::entities::{ExecutionPlan, NonceState, OrderingReport, Transaction};
use crate::ports::inbound::ExecutionOrderApi;
use crate::ports::outbound::NonceProvider;
use rayon::prelude::*;
use tracing::{debug, info};

/// Load the current nonce of every sender named by the batch.
///
/// The provider is asked once per distinct sender, before any pruning.
pub fn initial_nonce_state<P: NonceProvider>(transactions: &[Transaction], provider: &P) -> NonceState {
    let mut state = NonceState::new();
    for action in transactions.iter().flat_map(|tx| tx.actions()) {
        if !state.contains(&action.sender) {
            state.set(action.sender, provider.get_nonce(&action.sender));
        }
    }
    state
}

/// Execution Order Service
///
/// Orchestrates the ordering pipeline:
/// 1. Load initial nonces
/// 2. Clean the batch
/// 3. Partition into independent clusters
/// 4. Sort every cluster
/// 5. Interleave the clusters
pub struct ExecutionOrderService {
    config: SchedulerConfig,
}

impl ExecutionOrderService {
    /// Create a new service with default config
    pub fn new() -> Self {
        Self {
            config: SchedulerConfig::default(),
        }
    }

    /// Create a new service with custom config
    pub fn with_config(config: SchedulerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Sort every partition, on the rayon pool when there are enough of them.
    ///
    /// Partitions share no sender, so each parallel worker gets its own
    /// restricted copy of the nonce state and the result matches the
    /// sequential path.
    fn sort_all(&self, partitions: &[Vec<Transaction>], state: &mut NonceState) -> Vec<Vec<Transaction>> {
        let parallel =
            self.config.parallel_sorting && partitions.len() >= self.config.parallel_threshold;

        if parallel {
            debug!(partitions = partitions.len(), "Sorting partitions in parallel");
            let shared: &NonceState = state;
            partitions
                .par_iter()
                .map(|partition| {
                    let mut view = shared.restrict(&partitioner::senders_of(partition));
                    sorter::sort_partition(partition, &mut view)
                })
                .collect()
        } else {
            partitions
                .iter()
                .map(|partition| sorter::sort_partition(partition, state))
                .collect()
        }
    }
}

impl Default for ExecutionOrderService {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutionOrderApi for ExecutionOrderService {
    fn get_execution_order<P: NonceProvider>(
        &self,
        transactions: &[Transaction],
        provider: &P,
        seed: u64,
    ) -> Vec<Transaction> {
        self.plan_execution_order(transactions, provider, seed)
            .transactions
    }

    fn plan_execution_order<P: NonceProvider>(
        &self,
        transactions: &[Transaction],
        provider: &P,
        seed: u64,
    ) -> ExecutionPlan {
        // 1. Initial nonces
        let mut state = initial_nonce_state(transactions, provider);

        // 2. Clean
        let cleaned = self.clean(transactions.to_vec(), &state);
        let cleaned_transactions = cleaned.len();

        // 3. Partition
        let partitions = self.partition(cleaned);
        let largest_partition = partitions.iter().map(Vec::len).max().unwrap_or(0);

        // 4. Sort
        let sorted = self.sort_all(&partitions, &mut state);

        // 5. Interleave
        let ordered = interleaver::interleave(sorted, seed);

        let report = OrderingReport {
            input_transactions: transactions.len(),
            cleaned_transactions,
            partitions: partitions.len(),
            largest_partition,
            scheduled_transactions: ordered.len(),
        };

        info!(
            tx_count = report.input_transactions,
            cleaned = report.cleaned_transactions,
            partitions = report.partitions,
            largest_partition = report.largest_partition,
            scheduled = report.scheduled_transactions,
            dropped = report.dropped_transactions(),
            "Execution order decided"
        );

        ExecutionPlan {
            transactions: ordered,
            report,
        }
    }

    fn clean(&self, transactions: Vec<Transaction>, state: &NonceState) -> Vec<Transaction> {
        cleaning::clean(transactions, state)
    }

    fn partition(&self, transactions: Vec<Transaction>) -> Vec<Vec<Transaction>> {
        partitioner::partition(transactions)
    }

    fn sort_partition(
        &self,
        transactions: &[Transaction],
        state: &mut NonceState,
    ) -> Vec<Transaction> {
        sorter::sort_partition(transactions, state)
    }
}
