//! Test utilities for the Lineage workspace
//!
//! Shared fixtures and assertions for the integration tests and benches of
//! the workspace crates.
//!
//! # Features
//!
//! - **Fixtures**: Mutation-group tables, hand-built cluster families, and
//!   seeded random laminar and overlapping families
//! - **Assertions**: Structural checks for converted networks

pub mod assertions;
pub mod fixtures;

// Re-export commonly used items
pub use assertions::{assert_acyclic, assert_close, assert_converted, assert_shares_balanced};
pub use fixtures::{
    cluster, laminar_clusters, mutation_groups, nested_example_clusters, overlapping_clusters,
};

// Re-export test dependencies for convenience
pub use anyhow::{Context, Result};

/// Initialize test logging (call once per test module)
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
