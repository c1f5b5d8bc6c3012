//! Algorithms module for execution ordering
//!
//! Contains:
//! - Indexed priority heap
//! - Batch cleaning passes
//! - Dependency partitioner
//! - Per-partition greedy sorter
//! - Seeded interleaver

pub mod cleaning;
pub mod indexed_heap;
pub mod interleaver;
pub mod partitioner;
pub mod sorter;

pub use cleaning::clean;
pub use indexed_heap::{Comparator, IndexedHeap, NaturalOrder, ReverseOrder};
pub use interleaver::interleave;
pub use partitioner::{build_sender_graph, partition, SenderGraph};
pub use sorter::sort_partition;
