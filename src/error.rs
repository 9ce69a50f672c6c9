use crate::protocol::{JsonRpcError, APPLICATION_ERROR, INVALID_PARAMS};

/// Failure of a single `tools/call` invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ToolError {
    /// Arguments missing or of the wrong shape. Raised before any backend call.
    #[error("{0}")]
    InvalidParams(String),
    #[error("Unknown tool: {0}")]
    UnknownTool(String),
    /// Domain-level miss, e.g. `Post not found: {slug}`.
    #[error("{0}")]
    NotFound(String),
    /// Backend unreachable or misbehaving. Carries only a generic message.
    #[error("{0}")]
    Backend(String),
}

impl ToolError {
    /// Map to the corresponding JSON-RPC 2.0 error code.
    ///
    /// Argument validation failures → -32602 (Invalid params)
    /// Everything raised while executing → -32000 (Application error)
    pub fn json_rpc_code(&self) -> i32 {
        match self {
            Self::InvalidParams(_) => INVALID_PARAMS,
            Self::UnknownTool(_) | Self::NotFound(_) | Self::Backend(_) => APPLICATION_ERROR,
        }
    }
}

impl From<ToolError> for JsonRpcError {
    fn from(err: ToolError) -> Self {
        Self {
            code: err.json_rpc_code(),
            message: err.to_string(),
            data: None,
        }
    }
}
