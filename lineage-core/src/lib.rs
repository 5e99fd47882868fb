//! Core utilities and types shared across all lineage crates

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use config::{
    load_config, save_config, Config, EdgeConfidence, LoggingConfig, NetworkConfig, RootPolicy,
};
pub use error::{LineageError, LineageResult};
pub use logging::init_logging;

// Re-export core types
pub use types::{ClusterId, EdgeId, MutationGroup, NodeId};

/// Version information for the lineage project
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
