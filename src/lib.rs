//! package-classifier: maps free-text component descriptions to package codes
//!
//! Distributor and supplier titles mention the component package in dozens of
//! spellings ("TO220", "to-220", "64-LQFP (10x10)", "D²PAK (TO-263AB)"). This
//! library recognises the package and returns one canonical code for it.
//!
//! # Architecture
//!
//! - **Classifier**: a pure, synchronous pipeline over immutable tables
//! - **MCP server**: exposes the classifier to AI assistants over stdio
//!
//! # Modules
//!
//! - [`config`]: Configuration loading and validation
//! - [`error`]: Error types
//! - [`mcp`]: MCP protocol implementation
//! - [`package`]: Package recognition and canonicalisation

pub mod config;
pub mod error;
pub mod mcp;
pub mod package;
