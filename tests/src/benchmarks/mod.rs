//! # Scheduler Benchmarks
//!
//! Criterion benchmarks for the ordering pipeline and its stages.

pub mod scheduler;
