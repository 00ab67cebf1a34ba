//! MCP server lifecycle.
//!
//! 1. **Initialisation**: `initialize` request, then the
//!    `notifications/initialized` notification
//! 2. **Operation**: `tools/list`, `tools/call` and `ping`
//! 3. **Shutdown**: end of input, SIGINT/SIGTERM or Ctrl+C
//!
//! Requests other than `initialize` and `ping` are refused until the client
//! has confirmed initialisation. Tool calls are handed to [`tools`].

use std::io;

use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncRead, AsyncWrite};

use crate::mcp::protocol::{
    parse_message, IncomingMessage, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcErrorData, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, ToolCallParams,
    MCP_PROTOCOL_VERSION,
};
use crate::mcp::tools;
use crate::mcp::transport::{StdioTransport, Transport};

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize answered, waiting for the initialized notification.
    Initialising,
    /// Ready for tool calls.
    Running,
    /// No further input will be processed.
    ShuttingDown,
}

/// The MCP server for package classification.
///
/// Generic over its transport so it can be driven from memory; the default
/// parameters give the stdio server used by the binary.
pub struct McpServer<R = tokio::io::Stdin, W = tokio::io::Stdout> {
    state: ServerState,
    transport: Transport<R, W>,
    /// Set once `initialize` has been answered.
    protocol_version: Option<&'static str>,
}

impl McpServer {
    /// Creates a new MCP server on stdin and stdout.
    #[must_use]
    pub fn new() -> Self {
        Self::with_transport(StdioTransport::new())
    }
}

impl Default for McpServer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> McpServer<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a new MCP server on the given transport.
    #[must_use]
    pub const fn with_transport(transport: Transport<R, W>) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport,
            protocol_version: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Returns the negotiated protocol version, once initialised.
    #[must_use]
    pub const fn protocol_version(&self) -> Option<&'static str> {
        self.protocol_version
    }

    /// Consumes the server, returning its transport.
    pub fn into_transport(self) -> Transport<R, W> {
        self.transport
    }

    /// Serves requests until the input closes or a shutdown signal arrives.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails or signal handlers cannot be
    /// installed.
    pub async fn run(&mut self) -> io::Result<()> {
        let shutdown = shutdown_signal();
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                signal = &mut shutdown => {
                    let signal = signal?;
                    tracing::info!(signal, "Shutdown requested");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line = self.transport.read_line() => {
                    if !self.process(line?).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Serves requests until the input closes, without signal handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run_until_eof(&mut self) -> io::Result<()> {
        loop {
            let line = self.transport.read_line().await?;
            if !self.process(line).await? {
                return Ok(());
            }
        }
    }

    /// Handles one input line; `None` is end of input.
    ///
    /// Returns `false` once the server is shutting down.
    async fn process(&mut self, line: Option<String>) -> io::Result<bool> {
        let Some(line) = line else {
            tracing::debug!("Input closed");
            self.state = ServerState::ShuttingDown;
            return Ok(false);
        };

        if !line.trim().is_empty() {
            match parse_message(&line) {
                Ok(IncomingMessage::Request(req)) => self.handle_request(req).await?,
                Ok(IncomingMessage::Notification(notif)) => self.handle_notification(&notif),
                Err(error) => {
                    tracing::warn!(code = error.error.code, "Rejected malformed message");
                    self.transport.write_error(&error).await?;
                }
            }
        }

        Ok(self.state != ServerState::ShuttingDown)
    }

    /// Answers a request with exactly one response or error.
    async fn handle_request(&mut self, req: JsonRpcRequest) -> io::Result<()> {
        tracing::debug!(id = %req.id, method = %req.method, "Request");

        let outcome = match req.method.as_str() {
            "initialize" => self.initialize(&req),
            "tools/list" => self
                .require_running()
                .map(|()| json!({ "tools": tools::definitions() })),
            "tools/call" => self.call_tool(&req),
            "ping" => Ok(json!({})),
            method => Err(JsonRpcErrorData::method_not_found(method)),
        };

        match outcome {
            Ok(result) => {
                self.transport
                    .write_response(&JsonRpcResponse::success(req.id, result))
                    .await
            }
            Err(error) => {
                self.transport
                    .write_error(&JsonRpcError::new(Some(req.id), error))
                    .await
            }
        }
    }

    fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        if notif.method == "notifications/initialized" && self.state == ServerState::Initialising {
            tracing::info!("Client initialised, server running");
            self.state = ServerState::Running;
        }
    }

    fn initialize(&mut self, req: &JsonRpcRequest) -> Result<Value, JsonRpcErrorData> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcErrorData::invalid_request("Server already initialised"));
        }

        let params: InitializeParams = req.params_as()?;
        tracing::info!(
            client = params.client_info.as_ref().map(|c| c.name.as_str()),
            requested = %params.protocol_version,
            "Initialize"
        );

        // Only one protocol version is spoken; the client decides whether to proceed
        let result = to_result(&InitializeResult::default())?;
        self.protocol_version = Some(MCP_PROTOCOL_VERSION);
        self.state = ServerState::Initialising;

        Ok(result)
    }

    fn call_tool(&self, req: &JsonRpcRequest) -> Result<Value, JsonRpcErrorData> {
        self.require_running()?;

        let params: ToolCallParams = req.params_as()?;
        to_result(&tools::dispatch(params))
    }

    fn require_running(&self) -> Result<(), JsonRpcErrorData> {
        if self.state == ServerState::Running {
            Ok(())
        } else {
            Err(JsonRpcErrorData::invalid_request("Server not initialised"))
        }
    }
}

fn to_result<T: Serialize>(value: &T) -> Result<Value, JsonRpcErrorData> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!(error = %e, "Failed to serialise result");
        JsonRpcErrorData::internal("Internal error: failed to serialise result")
    })
}

/// Resolves with the signal name when the process is asked to stop.
#[cfg(unix)]
async fn shutdown_signal() -> io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigint.recv() => Ok("SIGINT"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

/// Resolves with the signal name when the process is asked to stop.
#[cfg(windows)]
async fn shutdown_signal() -> io::Result<&'static str> {
    tokio::signal::ctrl_c().await?;
    Ok("Ctrl+C")
}
