//! Inbound Ports (Driving Ports / API)

use crate::domain::entities::{ExecutionPlan, NonceState, Transaction};
use crate::ports::outbound::NonceProvider;

/// Primary execution-order API
///
/// Every operation is a pure function of its arguments.
pub trait ExecutionOrderApi {
    /// Decide the execution order of a candidate batch.
    ///
    /// This is the main entry point. It:
    /// 1. Loads the current nonce of every referenced sender
    /// 2. Cleans the batch
    /// 3. Partitions it into independent clusters
    /// 4. Sorts every cluster
    /// 5. Interleaves the clusters using `seed`
    fn get_execution_order<P: NonceProvider>(
        &self,
        transactions: &[Transaction],
        provider: &P,
        seed: u64,
    ) -> Vec<Transaction>;

    /// Same as [`ExecutionOrderApi::get_execution_order`] with a report of
    /// what each stage did.
    fn plan_execution_order<P: NonceProvider>(
        &self,
        transactions: &[Transaction],
        provider: &P,
        seed: u64,
    ) -> ExecutionPlan;

    /// Remove duplicate, unsatisfiable and unreachable work.
    fn clean(&self, transactions: Vec<Transaction>, state: &NonceState) -> Vec<Transaction>;

    /// Group transactions into clusters that share no sender.
    fn partition(&self, transactions: Vec<Transaction>) -> Vec<Vec<Transaction>>;

    /// Order a single cluster, consuming nonces from `state`.
    fn sort_partition(&self, transactions: &[Transaction], state: &mut NonceState)
        -> Vec<Transaction>;
}
