pub mod export;
pub mod homepage;
pub mod pages;
pub mod posts;
pub mod search;

use serde::de::DeserializeOwned;
use serde_json::{json, Map, Value};
use tracing::{debug, info};

use crate::error::ToolError;
use crate::protocol::{
    InitializeParams, JsonRpcError, JsonRpcRequest, JsonRpcResponse, SlugArgs, ToolCallParams,
    ToolResult,
};
use crate::registry::ToolName;
use crate::server::McpGateway;

/// MCP protocol revision advertised by `initialize`.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

/// Dispatch a validated JSON-RPC request to the appropriate handler.
///
/// Every method, including notifications, produces exactly one response.
pub async fn dispatch(req: &JsonRpcRequest, gateway: &McpGateway) -> JsonRpcResponse {
    match req.method.as_str() {
        "initialize" => {
            if let Some(client) = req
                .params
                .clone()
                .and_then(|p| serde_json::from_value::<InitializeParams>(p).ok())
                .and_then(|p| p.client_info)
            {
                info!(
                    client = client.name.as_deref().unwrap_or("unknown"),
                    client_version = client.version.as_deref().unwrap_or("unknown"),
                    "initialize"
                );
            }
            let result = json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {}
                },
                "serverInfo": {
                    "name": crate::SERVER_NAME,
                    "version": crate::SERVER_VERSION
                }
            });
            JsonRpcResponse::success(req.id.clone(), result)
        }

        "notifications/initialized" => JsonRpcResponse::success(req.id.clone(), Value::Null),

        "ping" => JsonRpcResponse::success(req.id.clone(), json!({})),

        "tools/list" => {
            let tools: Vec<_> = gateway.registry.definitions().collect();
            JsonRpcResponse::success(req.id.clone(), json!({ "tools": tools }))
        }

        "tools/call" => {
            let params = match ToolCallParams::from_params(req.params.as_ref()) {
                Ok(p) => p,
                Err(e) => return JsonRpcResponse::error(req.id.clone(), e),
            };

            let output = match dispatch_tool_call(&params, gateway).await {
                Ok(v) => v,
                Err(e) => {
                    info!(tool = %params.name, error = %e, "tool call failed");
                    return JsonRpcResponse::error(req.id.clone(), e.into());
                }
            };

            match ToolResult::json(&output).and_then(|r| serde_json::to_value(&r)) {
                Ok(result) => JsonRpcResponse::success(req.id.clone(), result),
                Err(e) => JsonRpcResponse::error(
                    req.id.clone(),
                    JsonRpcError::application_error(format!("Failed to encode tool result: {e}")),
                ),
            }
        }

        _ => JsonRpcResponse::error(req.id.clone(), JsonRpcError::method_not_found(&req.method)),
    }
}

async fn dispatch_tool_call(
    params: &ToolCallParams,
    gateway: &McpGateway,
) -> Result<Value, ToolError> {
    let tool = gateway.registry.resolve(&params.name, &params.arguments)?;
    debug!(tool = tool.as_str(), "dispatching tool call");

    let config = &gateway.config;
    let api = &gateway.backend;

    match tool {
        ToolName::ListPosts => posts::list(config, api).await,
        ToolName::GetPost => posts::get(slug_args(&params.arguments)?, config, api).await,
        ToolName::ListPages => pages::list(config).await,
        ToolName::GetPage => pages::get(slug_args(&params.arguments)?, config, api).await,
        ToolName::GetHomepage => homepage::handle(config, api).await,
        ToolName::SearchContent => {
            search::handle(typed_args(&params.arguments)?, config, api).await
        }
        ToolName::ExportAll => export::handle(api).await,
    }
}

fn typed_args<T: DeserializeOwned>(arguments: &Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| ToolError::InvalidParams(format!("Invalid arguments: {e}")))
}

fn slug_args(arguments: &Map<String, Value>) -> Result<SlugArgs, ToolError> {
    let args: SlugArgs = typed_args(arguments)?;
    if args.slug.trim().is_empty() {
        return Err(ToolError::InvalidParams("Missing required parameter: slug".into()));
    }
    Ok(args)
}
