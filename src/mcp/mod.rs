//! Model Context Protocol (MCP) front end for the classifier.
//!
//! Newline-delimited JSON-RPC 2.0 on stdio, protocol version 2024-11-05.
//!
//! ```text
//! stdin ─▶ transport ─▶ protocol::parse_message ─▶ server (lifecycle)
//!                                                     │ tools/call
//!                                                     ▼
//! stdout ◀─ transport ◀──── ToolCallResult ◀──── tools ──▶ crate::package
//! ```
//!
//! - [`transport`]: one JSON message per line
//! - [`protocol`]: envelopes, handshake payloads and typed tool arguments
//! - [`server`]: the initialise / operate / shut down state machine
//! - [`tools`]: the package tools and their `tools/list` definitions

pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use protocol::{ToolCall, MCP_PROTOCOL_VERSION};
pub use server::McpServer;
pub use transport::{StdioTransport, Transport};
