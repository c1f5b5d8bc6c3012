//! # Pipeline Properties
//!
//! Randomized batches over a handful of senders and small nonces, so that
//! duplicates, gaps and colliding authorizations show up often.

#[cfg(test)]
mod tests {
    use crate::fixtures::{addr, random_batch, replays_cleanly};
    use proptest::prelude::*;
    use std::collections::{HashMap, HashSet};
    use tx_scheduler::domain::invariants::{
        invariant_increasing_nonces, invariant_partition_independence, invariant_unique_mains,
    };
    use tx_scheduler::{
        Action, ExecutionOrderApi, ExecutionOrderService, Nonce, SchedulerConfig, Sender,
        Transaction,
    };

    const SENDERS: u64 = 6;
    const NONCES: u64 = 6;

    fn arb_transaction() -> impl Strategy<Value = Transaction> {
        (
            0..SENDERS,
            0..NONCES,
            prop::collection::vec((0..SENDERS, 0..NONCES), 0..3),
        )
            .prop_map(|(sender, nonce, auth)| {
                Transaction::new(Action::new(addr(sender), nonce)).with_authorizations(
                    auth.into_iter()
                        .map(|(s, n)| Action::new(addr(s), n))
                        .collect(),
                )
            })
    }

    fn arb_provider() -> impl Strategy<Value = HashMap<Sender, Nonce>> {
        prop::collection::vec(0..3u64, SENDERS as usize).prop_map(|starts| {
            starts
                .into_iter()
                .enumerate()
                .map(|(sender, nonce)| (addr(sender as u64), nonce))
                .collect()
        })
    }

    fn arb_batch() -> impl Strategy<Value = Vec<Transaction>> {
        prop::collection::vec(arb_transaction(), 0..40)
    }

    proptest! {
        #[test]
        fn prop_output_is_deterministic(
            txs in arb_batch(),
            provider in arb_provider(),
            seed in any::<u64>(),
        ) {
            let service = ExecutionOrderService::new();
            prop_assert_eq!(
                service.get_execution_order(&txs, &provider, seed),
                service.get_execution_order(&txs, &provider, seed)
            );
        }

        #[test]
        fn prop_output_replays_on_chain(
            txs in arb_batch(),
            provider in arb_provider(),
            seed in any::<u64>(),
        ) {
            let order = ExecutionOrderService::new().get_execution_order(&txs, &provider, seed);

            prop_assert!(replays_cleanly(&order, &provider));
            prop_assert!(invariant_unique_mains(&order));
            prop_assert!(invariant_increasing_nonces(&order));
        }

        #[test]
        fn prop_output_comes_from_input(
            txs in arb_batch(),
            provider in arb_provider(),
            seed in any::<u64>(),
        ) {
            let service = ExecutionOrderService::new();
            let plan = service.plan_execution_order(&txs, &provider, seed);
            let mains: HashSet<Action> = txs.iter().map(|tx| tx.main).collect();

            prop_assert!(plan.transactions.iter().all(|tx| mains.contains(&tx.main)));
            prop_assert!(plan.report.scheduled_transactions <= plan.report.cleaned_transactions);
            prop_assert!(plan.report.cleaned_transactions <= plan.report.input_transactions);
            prop_assert_eq!(plan.report.scheduled_transactions, plan.transactions.len());
        }

        #[test]
        fn prop_partitions_are_independent(
            txs in arb_batch(),
            provider in arb_provider(),
        ) {
            let service = ExecutionOrderService::new();
            let state = tx_scheduler::application::initial_nonce_state(&txs, &provider);
            let partitions = service.partition(service.clean(txs, &state));

            prop_assert!(invariant_partition_independence(&partitions));
        }

        #[test]
        fn prop_parallel_matches_sequential(
            txs in arb_batch(),
            provider in arb_provider(),
            seed in any::<u64>(),
        ) {
            let sequential = ExecutionOrderService::with_config(SchedulerConfig::sequential());
            let parallel = ExecutionOrderService::with_config(SchedulerConfig {
                parallel_threshold: 1,
                ..Default::default()
            });

            prop_assert_eq!(
                sequential.get_execution_order(&txs, &provider, seed),
                parallel.get_execution_order(&txs, &provider, seed)
            );
        }
    }

    #[test]
    fn test_large_random_batch_replays() {
        let (txs, provider) = random_batch(42, 200, 20, 5);
        let service = ExecutionOrderService::new();

        let plan = service.plan_execution_order(&txs, &provider, 42);

        assert!(replays_cleanly(&plan.transactions, &provider));
        assert!(invariant_increasing_nonces(&plan.transactions));
        assert!(plan.report.partitions >= 1);
    }

    #[test]
    fn test_random_batch_without_authorizations_schedules_everything() {
        let (txs, provider) = random_batch(7, 50, 10, 0);

        let order = ExecutionOrderService::new().get_execution_order(&txs, &provider, 7);

        assert_eq!(order.len(), txs.len());
    }
}
