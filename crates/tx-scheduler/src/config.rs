//! Configuration for the execution-order scheduler
//!
//! None of these settings changes the order produced for a batch; they only
//! bound the IPC surface and choose how partitions are sorted.

use crate::domain::errors::OrderingError;
use serde::{Deserialize, Serialize};
use std::env;

/// Scheduler configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchedulerConfig {
    /// Maximum transactions accepted in one request
    pub max_batch_size: usize,
    /// Sort partitions on the rayon thread pool
    pub parallel_sorting: bool,
    /// Minimum number of partitions before sorting in parallel
    pub parallel_threshold: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            max_batch_size: 10_000,
            parallel_sorting: true,
            parallel_threshold: 4,
        }
    }
}

impl SchedulerConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `SCHED_MAX_BATCH_SIZE`: Request size limit (default: 10000)
    /// - `SCHED_PARALLEL_SORTING`: Enable parallel partition sorting (default: true)
    /// - `SCHED_PARALLEL_THRESHOLD`: Partitions needed to go parallel (default: 4)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            max_batch_size: env::var("SCHED_MAX_BATCH_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_batch_size),

            parallel_sorting: env::var("SCHED_PARALLEL_SORTING")
                .map(|v| v.to_lowercase() != "false" && v != "0")
                .unwrap_or(defaults.parallel_sorting),

            parallel_threshold: env::var("SCHED_PARALLEL_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.parallel_threshold),
        }
    }

    /// Reject settings the scheduler cannot work with.
    pub fn validate(&self) -> Result<(), OrderingError> {
        if self.max_batch_size == 0 {
            return Err(OrderingError::InvalidConfig(
                "max_batch_size must be positive".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(OrderingError::InvalidConfig(
                "parallel_threshold must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Sequential-only configuration.
    pub fn sequential() -> Self {
        Self {
            parallel_sorting: false,
            ..Self::default()
        }
    }
}
