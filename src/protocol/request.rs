use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::response::{JsonRpcError, JsonRpcResponse};

/// JSON-RPC 2.0 ID: a number or a string.
///
/// Strings and integers within the `i64`/`u64` range are echoed back
/// byte-identical. Other numbers go through `f64` and are re-serialized in
/// normalized form (`1e2` becomes `100.0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RpcId {
    Number(serde_json::Number),
    Str(String),
}

impl RpcId {
    /// Best-effort id extraction from an arbitrary JSON value.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => Some(Self::Number(n.clone())),
            Value::String(s) => Some(Self::Str(s.clone())),
            _ => None,
        }
    }
}

impl From<i64> for RpcId {
    fn from(n: i64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for RpcId {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

/// JSON-RPC 2.0 request envelope, as accepted by [`parse_request`].
///
/// The `jsonrpc` tag is checked during parsing and not kept.
#[derive(Debug, Clone)]
pub struct JsonRpcRequest {
    pub id: Option<RpcId>,
    pub method: String,
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    pub fn new(id: Option<RpcId>, method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            id,
            method: method.into(),
            params,
        }
    }
}

/// Decode a raw request body into a validated envelope.
///
/// On failure the returned response is ready to send: `-32700` when the body
/// is not JSON at all, `-32600` when it is JSON but not a usable envelope.
/// For the latter the id is echoed if one could be read.
pub fn parse_request(body: &[u8]) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|_| JsonRpcResponse::error(None, JsonRpcError::parse_error()))?;

    let Value::Object(obj) = value else {
        return Err(JsonRpcResponse::error(None, JsonRpcError::invalid_request()));
    };

    let id = obj.get("id").and_then(RpcId::from_value);

    if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return Err(JsonRpcResponse::error(id, JsonRpcError::invalid_request()));
    }

    let method = match obj.get("method").and_then(Value::as_str) {
        Some(m) if !m.is_empty() => m.to_string(),
        _ => return Err(JsonRpcResponse::error(id, JsonRpcError::invalid_request())),
    };

    let params = obj.get("params").filter(|p| !p.is_null()).cloned();

    Ok(JsonRpcRequest {
        id,
        method,
        params,
    })
}

/// MCP `initialize` params.
#[derive(Debug, Clone, Deserialize)]
pub struct InitializeParams {
    #[serde(rename = "clientInfo")]
    pub client_info: Option<ClientInfo>,
}

/// Client information sent during `initialize`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientInfo {
    pub name: Option<String>,
    pub version: Option<String>,
}

/// Parameters for `tools/call`, extracted leniently from the raw params.
#[derive(Debug, Clone)]
pub struct ToolCallParams {
    pub name: String,
    pub arguments: Map<String, Value>,
}

impl ToolCallParams {
    /// Pull `name` and `arguments` out of `tools/call` params.
    ///
    /// `arguments` defaults to an empty object; anything other than an object
    /// is rejected.
    pub fn from_params(params: Option<&Value>) -> Result<Self, JsonRpcError> {
        let name = params
            .and_then(|p| p.get("name"))
            .and_then(Value::as_str)
            .filter(|n| !n.is_empty())
            .ok_or_else(|| JsonRpcError::invalid_params("Missing tool name"))?;

        let arguments = match params.and_then(|p| p.get("arguments")) {
            None | Some(Value::Null) => Map::new(),
            Some(Value::Object(map)) => map.clone(),
            Some(_) => {
                return Err(JsonRpcError::invalid_params(
                    "Tool arguments must be an object",
                ))
            }
        };

        Ok(Self {
            name: name.to_string(),
            arguments,
        })
    }
}

/// Arguments for `get_post` and `get_page`.
#[derive(Debug, Clone, Deserialize)]
pub struct SlugArgs {
    pub slug: String,
}

/// Arguments for `search_content`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}
