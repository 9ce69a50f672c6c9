use serde_json::Value;
use tracing::warn;

use crate::backend::ContentApi;
use crate::error::ToolError;

/// Handle an `export_all` tool call. The export payload is passed through verbatim.
pub async fn handle(api: &ContentApi) -> Result<Value, ToolError> {
    api.export_all().await.map_err(|e| {
        warn!(error = %e, "export_all backend call failed");
        ToolError::Backend("Failed to export content from backend".into())
    })
}
