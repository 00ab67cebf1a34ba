//! Error types for package-classifier.
//!
//! Classification itself cannot fail: an unrecognised description yields
//! `None`. Errors come from loading the configuration and from malformed
//! MCP tool calls.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// A `tools/call` request that names no known tool or carries bad arguments.
///
/// Reported back to the client as a tool result with `isError` set, not as a
/// JSON-RPC error.
#[derive(Error, Debug)]
pub enum ToolError {
    /// No tool with this name exists.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments do not match the tool's input schema.
    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        /// Name of the tool being called.
        tool: &'static str,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let error = ConfigError::NotFound {
            path: PathBuf::from("/path/to/config.json"),
        };
        let msg = error.to_string();
        assert!(msg.contains("not found"));
        assert!(msg.contains("config.json"));
    }

    #[test]
    fn validation_error_display() {
        let error = ConfigError::ValidationError {
            message: "Invalid log level 'loud'".to_string(),
        };
        let msg = error.to_string();
        assert!(msg.contains("loud"));
    }

    #[test]
    fn parse_error_keeps_source() {
        use std::error::Error as _;

        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = ConfigError::ParseError {
            path: PathBuf::from("config.json"),
            source,
        };
        assert!(error.to_string().contains("config.json"));
        assert!(error.source().is_some());
    }

    #[test]
    fn tool_error_display() {
        let error = ToolError::UnknownTool("delete_package".to_string());
        assert_eq!(error.to_string(), "Unknown tool: delete_package");

        let source = serde_json::from_str::<String>("42").unwrap_err();
        let error = ToolError::InvalidArguments {
            tool: "classify_package",
            source,
        };
        assert!(error.to_string().starts_with("Invalid arguments for classify_package: "));
    }
}
