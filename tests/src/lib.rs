//! # Execution-Order Scheduler Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # Batch builders shared by tests and benchmarks
//! ├── benchmarks/       # Criterion benchmarks
//! └── integration/      # Full-pipeline scenarios and properties
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p sonic-tests
//!
//! # By category
//! cargo test -p sonic-tests integration::scenarios::
//! cargo test -p sonic-tests integration::properties::
//!
//! # Benchmarks
//! cargo bench -p sonic-tests
//! ```

pub mod benchmarks;
pub mod fixtures;
