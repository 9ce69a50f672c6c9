pub mod request;
pub mod response;

pub use request::{
    parse_request, ClientInfo, InitializeParams, JsonRpcRequest, RpcId, SearchArgs, SlugArgs,
    ToolCallParams,
};
pub use response::{
    JsonRpcError, JsonRpcResponse, ResponsePayload, ToolResult, ToolResultContent,
    APPLICATION_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
};
