//! # Execution-Order Scheduler Benchmarks
//!
//! Claims to validate:
//! - Sorting a partition: O(|actions| * log |transactions|)
//! - Partitioning: linear in the number of actions
//! - Interleaving: linear in the batch size
//!
//! Conditions:
//! - Blocks of up to 10,000 transactions
//! - One huge partition (every transaction authorizes a neighbour)
//! - Many small partitions (parallel sorting path)
//! - One hub sender authorizing thousands of distinct accounts

use crate::fixtures::{hub_batch, random_batch};
use criterion::{black_box, BenchmarkId, Criterion, Throughput};
use std::time::Duration;
use tx_scheduler::algorithms::{interleave, partition};
use tx_scheduler::application::initial_nonce_state;
use tx_scheduler::{ExecutionOrderApi, ExecutionOrderService, SchedulerConfig};

pub fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler/pipeline");
    group.measurement_time(Duration::from_secs(10));

    let service = ExecutionOrderService::new();
    for (senders, per_sender) in [(100u64, 10u64), (500, 10), (1_000, 10)] {
        let (txs, provider) = random_batch(1, senders, per_sender, 4);

        group.throughput(Throughput::Elements(txs.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("get_execution_order", txs.len()),
            &txs,
            |b, txs| b.iter(|| black_box(service.get_execution_order(txs, &provider, 7))),
        );
    }

    group.finish();
}

pub fn bench_parallel_vs_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler/sorting_mode");
    group.measurement_time(Duration::from_secs(10));

    // No authorizations: one partition per sender
    let (txs, provider) = random_batch(2, 2_000, 5, 0);
    let sequential = ExecutionOrderService::with_config(SchedulerConfig::sequential());
    let parallel = ExecutionOrderService::new();

    group.throughput(Throughput::Elements(txs.len() as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| black_box(sequential.get_execution_order(&txs, &provider, 3)))
    });
    group.bench_function("parallel", |b| {
        b.iter(|| black_box(parallel.get_execution_order(&txs, &provider, 3)))
    });

    group.finish();
}

pub fn bench_single_partition_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler/sort_partition");
    group.measurement_time(Duration::from_secs(10));

    let service = ExecutionOrderService::new();
    for size in [100u64, 1_000, 5_000] {
        // Every transaction authorizes something, collapsing the batch
        let (txs, provider) = random_batch(3, size / 10, 10, 1);
        let state = initial_nonce_state(&txs, &provider);
        let cleaned = service.clean(txs, &state);

        group.throughput(Throughput::Elements(cleaned.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &cleaned, |b, txs| {
            b.iter(|| {
                let mut state = state.clone();
                black_box(service.sort_partition(txs, &mut state))
            })
        });
    }

    group.finish();
}

pub fn bench_partition_and_interleave(c: &mut Criterion) {
    let mut group = c.benchmark_group("scheduler/stages");

    let (txs, _) = random_batch(4, 1_000, 10, 8);
    group.throughput(Throughput::Elements(txs.len() as u64));

    group.bench_function("partition", |b| {
        b.iter(|| black_box(partition(txs.clone())))
    });

    for size in [5_000u64, 10_000, 20_000] {
        let hub = hub_batch(size);
        group.throughput(Throughput::Elements(size));
        group.bench_with_input(BenchmarkId::new("partition_hub", size), &hub, |b, hub| {
            b.iter(|| black_box(partition(hub.clone())))
        });
    }

    let groups: Vec<Vec<u32>> = (0..1_000u32)
        .map(|p| (p * 10..p * 10 + 10).collect())
        .collect();
    group.throughput(Throughput::Elements(10_000));
    group.bench_function("interleave", |b| {
        b.iter(|| black_box(interleave(groups.clone(), 11)))
    });

    group.finish();
}

pub fn register_benchmarks(c: &mut Criterion) {
    bench_full_pipeline(c);
    bench_parallel_vs_sequential(c);
    bench_single_partition_sort(c);
    bench_partition_and_interleave(c);
}
