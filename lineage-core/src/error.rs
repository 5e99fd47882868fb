//! Core error types for lineage network construction

use crate::types::{ClusterId, NodeId};
use thiserror::Error;

/// Main error type for lineage operations
#[derive(Error, Debug)]
pub enum LineageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Missing universal root cluster: {0}")]
    MissingRoot(String),

    #[error("Duplicate cluster id: {0}")]
    DuplicateClusterId(ClusterId),

    #[error("Node not found: {0}")]
    NodeNotFound(NodeId),

    #[error("Edge not found: {from} -> {to}")]
    EdgeNotFound { from: NodeId, to: NodeId },

    #[error("Edge already exists: {from} -> {to}")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("Network contains a directed cycle")]
    CyclicNetwork,

    #[error("Other error: {0}")]
    Other(String),
}

/// Result type alias for lineage operations
pub type LineageResult<T> = Result<T, LineageError>;

// Conversion implementations for common error types
impl From<serde_json::Error> for LineageError {
    fn from(err: serde_json::Error) -> Self {
        LineageError::Serialization(err.to_string())
    }
}

impl From<anyhow::Error> for LineageError {
    fn from(err: anyhow::Error) -> Self {
        LineageError::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_error_display() {
        let io_error = LineageError::Io(io::Error::new(io::ErrorKind::NotFound, "file not found"));
        assert!(format!("{}", io_error).contains("IO error"));

        let config_error = LineageError::Configuration("missing field".to_string());
        assert_eq!(format!("{}", config_error), "Configuration error: missing field");

        let input_error = LineageError::InvalidInput("bit 9 out of range".to_string());
        assert_eq!(format!("{}", input_error), "Invalid input: bit 9 out of range");

        let root_error = LineageError::MissingRoot("2 maximal clusters".to_string());
        assert_eq!(
            format!("{}", root_error),
            "Missing universal root cluster: 2 maximal clusters"
        );

        let dup = LineageError::DuplicateClusterId(ClusterId(7));
        assert_eq!(format!("{}", dup), "Duplicate cluster id: 7");

        let missing_node = LineageError::NodeNotFound(NodeId(12));
        assert_eq!(format!("{}", missing_node), "Node not found: 12");

        let missing_edge = LineageError::EdgeNotFound {
            from: NodeId(1),
            to: NodeId(3),
        };
        assert_eq!(format!("{}", missing_edge), "Edge not found: 1 -> 3");

        let dup_edge = LineageError::DuplicateEdge {
            from: NodeId(0),
            to: NodeId(2),
        };
        assert_eq!(format!("{}", dup_edge), "Edge already exists: 0 -> 2");

        assert_eq!(
            format!("{}", LineageError::CyclicNetwork),
            "Network contains a directed cycle"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let err: LineageError = io_err.into();

        match err {
            LineageError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::PermissionDenied),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let parse_result: Result<serde_json::Value, serde_json::Error> =
            serde_json::from_str("{invalid json}");
        let err: LineageError = parse_result.unwrap_err().into();

        match err {
            LineageError::Serialization(msg) => assert!(msg.contains("key must be a string")),
            _ => panic!("Expected Serialization error variant"),
        }
    }

    #[test]
    fn test_anyhow_error_conversion() {
        let err: LineageError = anyhow::anyhow!("custom error message").into();

        match err {
            LineageError::Other(msg) => assert_eq!(msg, "custom error message"),
            _ => panic!("Expected Other error variant"),
        }
    }
}
