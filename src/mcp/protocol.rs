//! JSON-RPC 2.0 and MCP message types.
//!
//! Three layers live here:
//!
//! - the JSON-RPC envelope ([`IncomingMessage`], [`JsonRpcResponse`], [`JsonRpcError`])
//! - the MCP handshake payloads ([`InitializeParams`], [`InitializeResult`])
//! - the typed arguments of the package tools ([`ToolCall`])
//!
//! Request IDs must be strings or integers, never `null`. Error payloads are
//! built without an ID ([`JsonRpcErrorData`]) and paired with the request ID
//! only when the reply is written.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ToolError;

/// The MCP protocol version this server speaks.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Server name for capability negotiation.
pub const SERVER_NAME: &str = "package-classifier";

const JSONRPC_VERSION: &str = "2.0";

/// A JSON-RPC 2.0 request ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric request ID.
    Number(i64),
    /// String request ID.
    String(String),
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

/// A request: carries an ID and expects exactly one reply.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    pub id: RequestId,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Decodes the request parameters into `T`.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidParams` error if the parameters are missing or do
    /// not have the shape of `T`.
    pub fn params_as<T: DeserializeOwned>(&self) -> Result<T, JsonRpcErrorData> {
        let params = self.params.clone().ok_or_else(|| {
            JsonRpcErrorData::invalid_params(format!("Missing {} params", self.method))
        })?;

        serde_json::from_value(params).map_err(|e| {
            JsonRpcErrorData::invalid_params(format!("Invalid {} params: {e}", self.method))
        })
    }
}

/// A notification: no ID, never answered.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcNotification {
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// A message read from the client.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    Request(JsonRpcRequest),
    Notification(JsonRpcNotification),
}

/// A successful reply.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: &'static str,
    pub id: RequestId,
    pub result: Value,
}

impl JsonRpcResponse {
    /// Creates a success reply to request `id`.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Value is not const-compatible
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            result,
        }
    }
}

/// Standard JSON-RPC 2.0 error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Invalid JSON was received by the server.
    ParseError,
    /// The JSON sent is not a valid Request object.
    InvalidRequest,
    /// The method does not exist or is not available.
    MethodNotFound,
    /// Invalid method parameters.
    InvalidParams,
    /// Internal JSON-RPC error.
    InternalError,
}

impl ErrorCode {
    /// Returns the numeric code for this error.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
        }
    }

    /// Returns the default message for this error code.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid Request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
        }
    }
}

/// The `error` member of an error reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonRpcErrorData {
    pub code: i32,
    pub message: String,
}

impl JsonRpcErrorData {
    /// Creates an error carrying the code's default message.
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self::with_message(code, code.default_message())
    }

    /// Creates an error with a custom message.
    #[must_use]
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, message)
    }

    #[must_use]
    pub fn method_not_found(method: &str) -> Self {
        Self::with_message(ErrorCode::MethodNotFound, format!("Method not found: {method}"))
    }

    #[must_use]
    pub fn invalid_params(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidParams, message)
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, message)
    }
}

/// An error reply.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    pub jsonrpc: &'static str,

    /// Absent when the request ID could not be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,

    pub error: JsonRpcErrorData,
}

impl JsonRpcError {
    /// Creates an error reply.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // JsonRpcErrorData contains String
    pub fn new(id: Option<RequestId>, error: JsonRpcErrorData) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION,
            id,
            error,
        }
    }

    /// The line was not a JSON object.
    #[must_use]
    pub fn parse_error() -> Self {
        Self::new(None, JsonRpcErrorData::from_code(ErrorCode::ParseError))
    }

    /// The object was not a valid JSON-RPC 2.0 message.
    #[must_use]
    pub fn invalid_request(id: Option<RequestId>) -> Self {
        Self::new(id, JsonRpcErrorData::from_code(ErrorCode::InvalidRequest))
    }
}

/// Parses one line of input into a request or notification.
///
/// # Errors
///
/// Returns a `ParseError` reply for anything that is not a JSON object, and
/// an `InvalidRequest` reply for objects that are not JSON-RPC 2.0 messages.
pub fn parse_message(line: &str) -> Result<IncomingMessage, JsonRpcError> {
    let value: Value = serde_json::from_str(line).map_err(|_| JsonRpcError::parse_error())?;

    let Value::Object(fields) = &value else {
        return Err(JsonRpcError::parse_error());
    };

    if fields.get("jsonrpc").and_then(Value::as_str) != Some(JSONRPC_VERSION) {
        return Err(JsonRpcError::invalid_request(None));
    }

    // The presence of `id` separates requests from notifications
    if fields.contains_key("id") {
        let request: JsonRpcRequest =
            serde_json::from_value(value).map_err(|_| JsonRpcError::invalid_request(None))?;

        if request.method.is_empty() {
            return Err(JsonRpcError::invalid_request(Some(request.id)));
        }

        Ok(IncomingMessage::Request(request))
    } else {
        serde_json::from_value(value)
            .map(IncomingMessage::Notification)
            .map_err(|_| JsonRpcError::invalid_request(None))
    }
}

// ==================== Handshake ====================

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters of the `initialize` request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by the client.
    pub protocol_version: String,
    #[serde(default)]
    pub capabilities: Value,
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// Result of the `initialize` request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: &'static str,
    pub capabilities: ServerCapabilities,
    pub server_info: ServerInfo,
}

impl Default for InitializeResult {
    fn default() -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION,
            capabilities: ServerCapabilities::default(),
            server_info: ServerInfo {
                name: SERVER_NAME,
                version: env!("CARGO_PKG_VERSION"),
            },
        }
    }
}

/// Capabilities advertised to the client. Only tools are offered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ServerCapabilities {
    pub tools: ToolsCapability,
}

/// The tool list is fixed for the lifetime of the server.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolsCapability {
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub list_changed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    pub name: &'static str,
    pub version: &'static str,
}

// ==================== Tool calls ====================

/// Raw parameters of a `tools/call` request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Arguments of the tools that take one component description.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DescriptionArgs {
    /// Free-text component description.
    pub description: String,
}

/// Arguments of `resolve_package_alias`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasArgs {
    /// Package name in cleaned form.
    pub package: String,
}

/// Arguments of `list_package_families`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FamilyFilterArgs {
    /// Case-insensitive substring of the family name.
    #[serde(default)]
    pub filter: Option<String>,
}

/// A decoded `tools/call` request.
#[derive(Debug, Clone)]
pub enum ToolCall {
    ClassifyPackage(DescriptionArgs),
    ExplainPackage(DescriptionArgs),
    ResolvePackageAlias(AliasArgs),
    ListPackageFamilies(FamilyFilterArgs),
}

impl ToolCall {
    pub const CLASSIFY_PACKAGE: &'static str = "classify_package";
    pub const EXPLAIN_PACKAGE: &'static str = "explain_package";
    pub const RESOLVE_PACKAGE_ALIAS: &'static str = "resolve_package_alias";
    pub const LIST_PACKAGE_FAMILIES: &'static str = "list_package_families";

    /// Decodes the tool name and its arguments.
    ///
    /// Missing or `null` arguments are treated as an empty object.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::UnknownTool`] for an unrecognised name and
    /// [`ToolError::InvalidArguments`] when the arguments do not fit the tool.
    pub fn parse(params: ToolCallParams) -> Result<Self, ToolError> {
        let ToolCallParams { name, arguments } = params;

        match name.as_str() {
            Self::CLASSIFY_PACKAGE => {
                arguments_for(Self::CLASSIFY_PACKAGE, arguments).map(Self::ClassifyPackage)
            }
            Self::EXPLAIN_PACKAGE => {
                arguments_for(Self::EXPLAIN_PACKAGE, arguments).map(Self::ExplainPackage)
            }
            Self::RESOLVE_PACKAGE_ALIAS => {
                arguments_for(Self::RESOLVE_PACKAGE_ALIAS, arguments).map(Self::ResolvePackageAlias)
            }
            Self::LIST_PACKAGE_FAMILIES => {
                arguments_for(Self::LIST_PACKAGE_FAMILIES, arguments).map(Self::ListPackageFamilies)
            }
            _ => Err(ToolError::UnknownTool(name)),
        }
    }

    /// The tool name as advertised in `tools/list`.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ClassifyPackage(_) => Self::CLASSIFY_PACKAGE,
            Self::ExplainPackage(_) => Self::EXPLAIN_PACKAGE,
            Self::ResolvePackageAlias(_) => Self::RESOLVE_PACKAGE_ALIAS,
            Self::ListPackageFamilies(_) => Self::LIST_PACKAGE_FAMILIES,
        }
    }
}

fn arguments_for<T: DeserializeOwned>(tool: &'static str, arguments: Value) -> Result<T, ToolError> {
    let arguments = if arguments.is_null() {
        Value::Object(Map::new())
    } else {
        arguments
    };

    serde_json::from_value(arguments).map_err(|source| ToolError::InvalidArguments { tool, source })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn tool_call(name: &str, arguments: Value) -> Result<ToolCall, ToolError> {
        ToolCall::parse(ToolCallParams {
            name: name.to_string(),
            arguments,
        })
    }

    #[test]
    fn parse_valid_request() {
        let json = r#"{"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}"#;

        let IncomingMessage::Request(req) = parse_message(json).unwrap() else {
            panic!("Expected Request, got Notification");
        };
        assert_eq!(req.id, RequestId::Number(1));
        assert_eq!(req.method, "initialize");
    }

    #[test]
    fn parse_valid_notification() {
        let json = r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#;

        let IncomingMessage::Notification(notif) = parse_message(json).unwrap() else {
            panic!("Expected Notification, got Request");
        };
        assert_eq!(notif.method, "notifications/initialized");
    }

    #[test]
    fn parse_string_id() {
        let json = r#"{"jsonrpc": "2.0", "id": "abc-123", "method": "ping"}"#;

        let IncomingMessage::Request(req) = parse_message(json).unwrap() else {
            panic!("Expected Request, got Notification");
        };
        assert_eq!(req.id, RequestId::String("abc-123".to_string()));
        assert_eq!(req.id.to_string(), "abc-123");
    }

    #[test]
    fn malformed_lines_are_parse_errors() {
        for line in ["not valid json", "[1, 2, 3]", "\"DIP-8\""] {
            let err = parse_message(line).unwrap_err();
            assert_eq!(err.error.code, ErrorCode::ParseError.code(), "{line}");
            assert!(err.id.is_none());
        }
    }

    #[test]
    fn non_jsonrpc_objects_are_invalid_requests() {
        for line in [
            r#"{"id": 1, "method": "ping"}"#,
            r#"{"jsonrpc": "1.0", "id": 1, "method": "ping"}"#,
            r#"{"jsonrpc": "2.0", "id": null, "method": "ping"}"#,
            r#"{"jsonrpc": "2.0", "id": 1}"#,
        ] {
            let err = parse_message(line).unwrap_err();
            assert_eq!(err.error.code, ErrorCode::InvalidRequest.code(), "{line}");
        }
    }

    #[test]
    fn empty_method_keeps_the_request_id() {
        let err = parse_message(r#"{"jsonrpc": "2.0", "id": 3, "method": ""}"#).unwrap_err();
        assert_eq!(err.error.code, ErrorCode::InvalidRequest.code());
        assert_eq!(err.id, Some(RequestId::Number(3)));
    }

    #[test]
    fn params_as_reports_missing_and_malformed_params() {
        let IncomingMessage::Request(req) =
            parse_message(r#"{"jsonrpc": "2.0", "id": 1, "method": "tools/call"}"#).unwrap()
        else {
            panic!("Expected Request");
        };
        let err = req.params_as::<ToolCallParams>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams.code());
        assert_eq!(err.message, "Missing tools/call params");

        let IncomingMessage::Request(req) = parse_message(
            r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/call", "params": {"arguments": {}}}"#,
        )
        .unwrap() else {
            panic!("Expected Request");
        };
        let err = req.params_as::<ToolCallParams>().unwrap_err();
        assert!(err.message.starts_with("Invalid tools/call params"));
    }

    #[test]
    fn serialise_replies() {
        let response = JsonRpcResponse::success(RequestId::Number(1), json!({ "package": "DIP8" }));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "jsonrpc": "2.0", "id": 1, "result": { "package": "DIP8" } })
        );

        let error = JsonRpcError::new(
            Some(RequestId::String("x".to_string())),
            JsonRpcErrorData::method_not_found("resources/list"),
        );
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "jsonrpc": "2.0",
                "id": "x",
                "error": { "code": -32601, "message": "Method not found: resources/list" }
            })
        );

        let error = serde_json::to_value(JsonRpcError::parse_error()).unwrap();
        assert!(error.get("id").is_none());
        assert_eq!(error["error"]["message"], "Parse error");
    }

    #[test]
    fn initialize_result_shape() {
        let result = serde_json::to_value(InitializeResult::default()).unwrap();
        assert_eq!(result["protocolVersion"], MCP_PROTOCOL_VERSION);
        assert_eq!(result["capabilities"], json!({ "tools": {} }));
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn decode_description_tools() {
        let ToolCall::ClassifyPackage(args) =
            tool_call("classify_package", json!({ "description": "DIP-8" })).unwrap()
        else {
            panic!("Expected classify_package");
        };
        assert_eq!(args.description, "DIP-8");

        let call = tool_call("explain_package", json!({ "description": "TO92" })).unwrap();
        assert_eq!(call.name(), ToolCall::EXPLAIN_PACKAGE);
    }

    #[test]
    fn decode_alias_and_family_tools() {
        let ToolCall::ResolvePackageAlias(args) =
            tool_call("resolve_package_alias", json!({ "package": "DPAK" })).unwrap()
        else {
            panic!("Expected resolve_package_alias");
        };
        assert_eq!(args.package, "DPAK");

        // arguments may be omitted entirely when every field is optional
        let ToolCall::ListPackageFamilies(args) =
            tool_call("list_package_families", Value::Null).unwrap()
        else {
            panic!("Expected list_package_families");
        };
        assert!(args.filter.is_none());
    }

    #[test]
    fn reject_bad_tool_calls() {
        let err = tool_call("delete_package", json!({})).unwrap_err();
        assert!(matches!(err, ToolError::UnknownTool(ref name) if name == "delete_package"));

        let err = tool_call("classify_package", json!({})).unwrap_err();
        assert!(err.to_string().contains("missing field `description`"));

        let err = tool_call("classify_package", json!({ "description": 42 })).unwrap_err();
        assert!(matches!(err, ToolError::InvalidArguments { tool: "classify_package", .. }));

        let err = tool_call("resolve_package_alias", json!({ "package": "DPAK", "x": 1 }))
            .unwrap_err();
        assert!(err.to_string().contains("unknown field `x`"));
    }
}
