//! Configuration types for lineage network construction

use crate::LineageError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub network: NetworkConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// What to do when no input cluster spans every mutation group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    /// Refuse to build the network
    #[default]
    Reject,
    /// Prepend a virtual universal cluster and build under it
    Synthesize,
}

/// Initial confidence carried by non-reticulate edges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EdgeConfidence {
    /// Edge into a node carries that node's cluster confidence
    #[default]
    Cluster,
    /// Every edge starts at 1.0
    Unit,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default)]
    pub root_policy: RootPolicy,
    #[serde(default)]
    pub edge_confidence: EdgeConfidence,
    /// Check the finished network for cycles before returning it
    #[serde(default = "default_validate_acyclic")]
    pub validate_acyclic: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when LINEAGE_LOG is unset
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub json: bool,
}

// Default value functions
fn default_validate_acyclic() -> bool { true }
fn default_level() -> String { "info".to_string() }

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            root_policy: RootPolicy::default(),
            edge_confidence: EdgeConfidence::default(),
            validate_acyclic: default_validate_acyclic(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, LineageError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| LineageError::Configuration(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), LineageError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| LineageError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
